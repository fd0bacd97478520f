//! Request-path middleware applied by the application shell.

pub mod headers;
pub mod rate_limit;
