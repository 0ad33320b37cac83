//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (shown in the title bar).
pub const APP_NAME: &str = "MACROHARD";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "macrohard";
