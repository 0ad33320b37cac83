//! MACROHARD library
//!
//! Ribbon data model, column/row layout engine, editing commands, and the
//! terminal UI that drives them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
pub mod shortcuts;
pub mod tui;
