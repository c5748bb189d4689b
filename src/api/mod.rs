//! Unit Converter API Server module
//!
//! Provides an HTTP REST API for form submissions.
//! Run with `convert-server`.

pub mod handlers;
pub mod server;

pub use server::{build_router, run_api_server};
