//! Configuration lifecycle integration tests
//!
//! Load, create and save against real files in temporary directories.

mod save_tests;
