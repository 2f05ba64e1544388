//! Normalization of holiday data service payloads.
//!
//! The service nests its items under `response.body.items.item` and
//! returns a bare object for a single holiday, an array for several, and
//! an empty string (or nothing) for none. Everything leaving this module
//! is a plain `Vec`.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayRecord;

/// Result code the service uses for success.
const SUCCESS_CODE: &str = "00";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    header: Option<Header>,
    #[serde(default)]
    body: Option<Body>,
}

#[derive(Debug, Deserialize)]
struct Header {
    #[serde(rename = "resultCode")]
    result_code: String,
    #[serde(rename = "resultMsg", default)]
    result_msg: String,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    items: Option<Items>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Items {
    Present {
        #[serde(default)]
        item: Option<OneOrMany>,
    },
    Blank(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<HolidayRecord>),
    One(HolidayRecord),
}

impl From<OneOrMany> for Vec<HolidayRecord> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => vec![record],
        }
    }
}

/// Parses a holiday service JSON payload into a list of records.
///
/// A missing body, a blank `items` field and a missing `item` all yield an
/// empty list. A non-success result code or malformed JSON is an error.
///
/// # Example
///
/// ```
/// use shift_wage::holidays::parse_provider_response;
///
/// let single = r#"{"response":{"body":{"items":{"item":
///     {"dateKind":"01","dateName":"Christmas","isHoliday":"Y","locdate":20251225,"seq":1}
/// }}}}"#;
/// assert_eq!(parse_provider_response(single).unwrap().len(), 1);
///
/// let none = r#"{"response":{"body":{"items":"","totalCount":0}}}"#;
/// assert!(parse_provider_response(none).unwrap().is_empty());
/// ```
pub fn parse_provider_response(json: &str) -> EngineResult<Vec<HolidayRecord>> {
    let envelope: Envelope =
        serde_json::from_str(json).map_err(|e| EngineError::HolidayProvider {
            message: format!("unreadable holiday payload: {}", e),
        })?;

    let Some(response) = envelope.response else {
        return Ok(Vec::new());
    };

    if let Some(header) = response.header {
        if header.result_code != SUCCESS_CODE {
            return Err(EngineError::HolidayProvider {
                message: format!(
                    "service returned {}: {}",
                    header.result_code, header.result_msg
                ),
            });
        }
    }

    let records = match response.body.and_then(|body| body.items) {
        Some(Items::Present { item: Some(item) }) => item.into(),
        Some(Items::Present { item: None }) | None => Vec::new(),
        Some(Items::Blank(text)) if text.trim().is_empty() => Vec::new(),
        Some(Items::Blank(text)) => {
            return Err(EngineError::HolidayProvider {
                message: format!("unexpected items value \"{}\"", text),
            });
        }
    };

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_of_items() {
        let json = r#"{
            "response": {
                "header": {"resultCode": "00", "resultMsg": "NORMAL SERVICE."},
                "body": {
                    "items": {
                        "item": [
                            {"dateKind":"01","dateName":"Seollal","isHoliday":"Y","locdate":20250128,"seq":1},
                            {"dateKind":"01","dateName":"Seollal","isHoliday":"Y","locdate":20250129,"seq":1},
                            {"dateKind":"01","dateName":"Seollal","isHoliday":"Y","locdate":20250130,"seq":1}
                        ]
                    },
                    "numOfRows": 50,
                    "pageNo": 1,
                    "totalCount": 3
                }
            }
        }"#;
        let records = parse_provider_response(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].date_code, 20250130);
    }

    #[test]
    fn test_single_item_object() {
        let json = r#"{"response":{"header":{"resultCode":"00","resultMsg":"OK"},"body":{"items":{"item":{"dateKind":"01","dateName":"Liberation Day","isHoliday":"Y","locdate":20250815,"seq":1}},"totalCount":1}}}"#;
        let records = parse_provider_response(json).unwrap();
        assert_eq!(records, vec![HolidayRecord {
            date_code: 20250815,
            kind: "01".to_string(),
            name: "Liberation Day".to_string(),
            is_holiday: true,
            sequence: 1,
        }]);
    }

    #[test]
    fn test_blank_items() {
        let json = r#"{"response":{"header":{"resultCode":"00","resultMsg":"OK"},"body":{"items":"","totalCount":0}}}"#;
        assert!(parse_provider_response(json).unwrap().is_empty());
    }

    #[test]
    fn test_non_blank_string_items_rejected() {
        let json = r#"{"response":{"body":{"items":"unavailable"}}}"#;
        assert!(parse_provider_response(json).is_err());
    }

    #[test]
    fn test_items_without_item() {
        let json = r#"{"response":{"body":{"items":{}}}}"#;
        assert!(parse_provider_response(json).unwrap().is_empty());
    }

    #[test]
    fn test_missing_response() {
        assert!(parse_provider_response("{}").unwrap().is_empty());
    }

    #[test]
    fn test_error_result_code() {
        let json = r#"{"response":{"header":{"resultCode":"30","resultMsg":"SERVICE KEY IS NOT REGISTERED ERROR."}}}"#;
        match parse_provider_response(json) {
            Err(EngineError::HolidayProvider { message }) => {
                assert!(message.contains("30"));
            }
            other => panic!("expected HolidayProvider error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_provider_response("<OpenAPI_ServiceResponse>"),
            Err(EngineError::HolidayProvider { .. })
        ));
    }
}
