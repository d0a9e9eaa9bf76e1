//! Unit test suite entry point.

mod cli_parse_tests;
mod export_tests;
mod validation_tests;
