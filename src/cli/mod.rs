//! CLI command handlers

pub mod commands;

pub use commands::{convert, form, run_form, units};
