//! Holiday record model.
//!
//! [`HolidayRecord`] mirrors one item of the public holiday data service,
//! keeping its wire field names so provider payloads deserialize directly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One externally-sourced calendar fact.
///
/// Records are read-only lookup data supplied by the caller, usually the
/// result of fetching one (year, month) from a holiday provider.
///
/// # Example
///
/// ```
/// use shift_wage::models::HolidayRecord;
///
/// let json = r#"{
///     "dateKind": "01",
///     "dateName": "New Year's Day",
///     "isHoliday": "Y",
///     "locdate": 20250101,
///     "seq": 1
/// }"#;
/// let record: HolidayRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.date_code, 20250101);
/// assert!(record.is_holiday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The date encoded as YYYYMMDD.
    #[serde(rename = "locdate")]
    pub date_code: u32,
    /// Descriptive category from the provider.
    #[serde(rename = "dateKind", default)]
    pub kind: String,
    /// Human-readable holiday name.
    #[serde(rename = "dateName")]
    pub name: String,
    /// True only for official non-working holidays ("Y" on the wire).
    #[serde(
        rename = "isHoliday",
        serialize_with = "serialize_flag",
        deserialize_with = "deserialize_flag"
    )]
    pub is_holiday: bool,
    /// Ordinal disambiguating entries that share a date.
    #[serde(rename = "seq", default)]
    pub sequence: u32,
}

impl HolidayRecord {
    /// Creates a record with an empty kind and sequence 1.
    pub fn new(date_code: u32, name: impl Into<String>, is_holiday: bool) -> Self {
        Self {
            date_code,
            kind: String::new(),
            name: name.into(),
            is_holiday,
            sequence: 1,
        }
    }

    /// The year part of the date code.
    pub fn year(&self) -> i32 {
        (self.date_code / 10_000) as i32
    }

    /// The month part of the date code (1-12).
    pub fn month(&self) -> u32 {
        (self.date_code / 100) % 100
    }
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *flag { "Y" } else { "N" })
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Text(String),
        Bool(bool),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) => match text.trim() {
            "Y" | "y" => Ok(true),
            "N" | "n" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected \"Y\" or \"N\" for isHoliday, got \"{}\"",
                other
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_item() {
        let json = r#"{"dateKind":"01","dateName":"Seollal","isHoliday":"Y","locdate":20250129,"seq":1}"#;
        let record: HolidayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date_code, 20250129);
        assert_eq!(record.kind, "01");
        assert_eq!(record.name, "Seollal");
        assert!(record.is_holiday);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_deserialize_non_holiday_flag() {
        let json = r#"{"dateName":"Constitution Day","isHoliday":"N","locdate":20250717}"#;
        let record: HolidayRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_holiday);
        assert_eq!(record.kind, "");
        assert_eq!(record.sequence, 0);
    }

    #[test]
    fn test_deserialize_rejects_unknown_flag() {
        let json = r#"{"dateName":"x","isHoliday":"maybe","locdate":20250101}"#;
        assert!(serde_json::from_str::<HolidayRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_yaml_bool_flag() {
        let yaml = "locdate: 20251225\ndateName: Christmas\nisHoliday: true\n";
        let record: HolidayRecord = serde_yaml::from_str(yaml).unwrap();
        assert!(record.is_holiday);
    }

    #[test]
    fn test_serialize_uses_wire_flag() {
        let record = HolidayRecord::new(20250301, "Independence Movement Day", true);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"isHoliday\":\"Y\""));
        assert!(json.contains("\"locdate\":20250301"));
    }

    #[test]
    fn test_year_and_month_from_date_code() {
        let record = HolidayRecord::new(20251003, "National Foundation Day", true);
        assert_eq!(record.year(), 2025);
        assert_eq!(record.month(), 10);
    }
}
