//! AWS Lambda integration for the hello function.
//!
//! This crate owns the runtime-facing handler and process logging setup. The
//! response envelope and greeting live in `hello_lambda_core`.

pub mod handlers;
pub mod telemetry;
