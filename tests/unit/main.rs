//! Unit-level tests exercising the public API.

mod config_tests;
mod registry_tests;
