//! IDE feature tests
//!
//! Tests for:
//! - Document analysis
//! - Semantic token encoding
//! - Code completion

mod tests_analysis;
mod tests_completion;
