//! Path syntax integration tests
