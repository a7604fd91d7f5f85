//! Node integration tests
//!
//! Covers the JSON text form of trees and typed access to node values.

mod codec_tests;
