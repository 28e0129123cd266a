//! Line-level parsing primitives.
//!
//! ```text
//! line text
//!     ↓
//! tokenize (logos atoms + bracket stack) → Token[]
//!     ↓
//! TokenReader (forkable cursor) → argument parsers
//!     ↓
//! ParseResult / Reporter → diagnostics + semantic tokens
//! ```

mod lexer;
mod reader;
mod result;

pub use lexer::{Token, tokenize};
pub use reader::TokenReader;
pub use result::{ParseResult, PrefixedReporter, Reporter};
