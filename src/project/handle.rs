//! Shared, swappable reference to the current [`Context`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use super::context::Context;
use super::error::LoadError;

/// Holds the context new parses should use.
///
/// Parses take a [`snapshot`](Self::snapshot) and keep it for their whole
/// run; a reload builds the next context off to the side and only then
/// swaps the reference, so in-flight parses never observe a half-built state.
#[derive(Debug, Default)]
pub struct ContextHandle {
    current: RwLock<Arc<Context>>,
}

impl ContextHandle {
    pub fn new(context: Context) -> Self {
        Self {
            current: RwLock::new(Arc::new(context)),
        }
    }

    pub fn snapshot(&self) -> Arc<Context> {
        Arc::clone(&self.current.read())
    }

    /// Install `context` and return the one it replaces.
    pub fn replace(&self, context: Context) -> Arc<Context> {
        std::mem::replace(&mut *self.current.write(), Arc::new(context))
    }

    /// Load a context from `dir` and install it. On error the current context stays.
    pub fn reload(&self, dir: impl AsRef<Path>) -> Result<(), LoadError> {
        let dir = dir.as_ref();
        let context = Context::load_dir(dir)?;
        let commands = context.root().children.len();
        self.replace(context);
        tracing::info!(commands, "reloaded command context from {}", dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_survives_replace() {
        let handle = ContextHandle::default();
        let before = handle.snapshot();
        let next = Context::from_json(
            r#"{"type": "root", "children": {"say": {"type": "literal", "executable": true}}}"#,
            "{}",
            "{}",
        )
        .unwrap();

        let old = handle.replace(next);
        assert!(Arc::ptr_eq(&before, &old));
        assert!(before.root().children.is_empty());
        assert!(handle.snapshot().root().children.contains_key("say"));
    }

    #[test]
    fn test_failed_reload_keeps_current() {
        let handle = ContextHandle::default();
        let before = handle.snapshot();
        let dir = tempfile::tempdir().unwrap();
        assert!(handle.reload(dir.path()).is_err());
        assert!(Arc::ptr_eq(&before, &handle.snapshot()));
    }
}
