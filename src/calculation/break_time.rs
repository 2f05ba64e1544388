//! Automatic break time policy.
//!
//! Unpaid break minutes derived from the total length of a shift.

/// Break table as (minimum worked minutes, break minutes), longest first.
///
/// Evaluated top-down; the first row whose threshold is met wins.
pub const AUTO_BREAK_TABLE: [(i64, i64); 2] = [(480, 60), (240, 30)];

/// Returns the automatic break for a shift of `total_minutes`.
///
/// 8 hours or more earns 60 minutes, 4 hours or more earns 30, anything
/// shorter earns none.
///
/// # Example
///
/// ```
/// use shift_wage::calculation::auto_break_minutes;
///
/// assert_eq!(auto_break_minutes(239), 0);
/// assert_eq!(auto_break_minutes(240), 30);
/// assert_eq!(auto_break_minutes(480), 60);
/// ```
pub fn auto_break_minutes(total_minutes: i64) -> i64 {
    AUTO_BREAK_TABLE
        .iter()
        .find(|(threshold, _)| total_minutes >= *threshold)
        .map(|(_, minutes)| *minutes)
        .unwrap_or(0)
}
