//! Runtime-agnostic pieces of the hello Lambda function.
//!
//! This crate owns the HTTP-proxy response envelope and the fixed greeting
//! answered on every invocation. It excludes Lambda runtime and logging
//! concerns, which live in `hello_lambda`.

pub mod contract;
pub mod greeting;
