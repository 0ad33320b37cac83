//! Reading and writing ribbon files.
//!
//! Ribbon data is stored as a JSON array of groups, the same shape the
//! layout and migration commands print.

pub mod ribbon_json;

// Re-export commonly used functions
pub use ribbon_json::{parse_ribbon_json, parse_ribbon_str, to_json_string, validate_ribbon};
