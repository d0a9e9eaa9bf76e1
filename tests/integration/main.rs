//! Integration test suite entry point.


mod analysis_tests;
