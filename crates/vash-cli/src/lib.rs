//! Command-line front end for `vash-codegen`.
//!
//! Reads syntax trees produced by the template parser (JSON), generates
//! render-function source and writes it to stdout, a file, or a directory.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
