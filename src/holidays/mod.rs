//! Holiday data boundary.
//!
//! This module defines the provider interface the engine consumes holiday
//! records through, a static in-memory provider, and the parser that turns
//! holiday service payloads into a plain record list.

mod provider;
mod response;

pub use provider::{HolidayProvider, StaticHolidayProvider, holidays_or_empty};
pub use response::parse_provider_response;
