//! Context loading tests
//!
//! Tests for:
//! - Loading the data directory
//! - Swapping contexts under a handle

mod tests_loader;
