//! Foundation types for the mcfunction toolchain.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`RangeString`] - Text slices that remember their source offsets
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets within a line)
//! - Domain constants (default namespace, character classes)
//!
//! This module has NO dependencies on other mcfunction modules.

pub mod constants;
mod range_string;

pub use range_string::RangeString;
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
