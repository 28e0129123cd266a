//! Grammar tree, lookup registries and the context that bundles them.
//!
//! ```text
//! command_registration.json ─┐
//! blockstate.json ───────────┼─→ Context::load_dir ─→ Context ─→ ContextHandle
//! registries.json ───────────┘        (validated)     (immutable)   (swap on reload)
//! ```

mod context;
mod error;
pub mod grammar;
mod handle;

pub use context::{BLOCK_STATES_FILE, COMMANDS_FILE, Context, REGISTRIES_FILE};
pub use error::LoadError;
pub use grammar::{CommandNode, NodeKind};
pub use handle::ContextHandle;
