//! IDE features: high-level APIs for LSP handlers.
//!
//! Each function takes a [`Context`](crate::project::Context) snapshot plus
//! document text and returns plain data; conversion to protocol types happens
//! at the LSP boundary.
//!
//! ```ignore
//! use mcfunction::ide::{AnalysisOptions, analyze_document};
//! use mcfunction::project::ContextHandle;
//!
//! let handle = ContextHandle::new(Context::load_dir("data")?);
//! let ctx = handle.snapshot();
//! let analysis = analyze_document(&ctx, "say hi\n", AnalysisOptions::default());
//! ```

mod analysis;
mod completion;
mod semantic_tokens;

pub use analysis::{
    AnalysisOptions, DocumentAnalysis, LineDiagnostic, ParsedLine, analyze_document, parse_line,
};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use semantic_tokens::{LineToken, encode_semantic_tokens};
