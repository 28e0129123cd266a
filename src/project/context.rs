//! The read-only state every parse call consults.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::args::{BlockProperties, ParserRegistry, Registries};

use super::error::LoadError;
use super::grammar::{CommandNode, NodeKind};

pub const COMMANDS_FILE: &str = "command_registration.json";
pub const BLOCK_STATES_FILE: &str = "blockstate.json";
pub const REGISTRIES_FILE: &str = "registries.json";

/// Grammar tree, lookup registries and argument kinds for one game version.
///
/// A `Context` never changes once built. Swap whole contexts through
/// [`ContextHandle`](super::ContextHandle) instead.
#[derive(Debug, Clone)]
pub struct Context {
    root: CommandNode,
    block_states: FxHashMap<String, BlockProperties>,
    registries: FxHashMap<String, FxHashSet<String>>,
    parsers: ParserRegistry,
}

impl Default for Context {
    /// A grammar with no commands.
    fn default() -> Self {
        Self {
            root: CommandNode {
                kind: NodeKind::Root,
                children: Default::default(),
                executable: false,
                redirect: None,
                parser: None,
                properties: Default::default(),
            },
            block_states: FxHashMap::default(),
            registries: FxHashMap::default(),
            parsers: ParserRegistry::builtin(),
        }
    }
}

impl Context {
    /// Validate the grammar against `parsers` and assemble a context.
    pub fn new(
        root: CommandNode,
        block_states: FxHashMap<String, BlockProperties>,
        registries: FxHashMap<String, FxHashSet<String>>,
        parsers: ParserRegistry,
    ) -> Result<Self, LoadError> {
        validate(&root, &parsers)?;
        tracing::debug!(
            commands = root.children.len(),
            blocks = block_states.len(),
            registries = registries.len(),
            "built command context"
        );
        Ok(Self {
            root,
            block_states,
            registries,
            parsers,
        })
    }

    /// Build a context from the text of the three data files, using the builtin kinds.
    pub fn from_json(
        commands: &str,
        block_states: &str,
        registries: &str,
    ) -> Result<Self, LoadError> {
        let root = serde_json::from_str(commands).map_err(LoadError::json("command tree"))?;
        let block_states =
            serde_json::from_str(block_states).map_err(LoadError::json("block state registry"))?;
        let registries =
            serde_json::from_str(registries).map_err(LoadError::json("registries"))?;
        Self::new(root, block_states, registries, ParserRegistry::builtin())
    }

    /// Load `command_registration.json`, plus `blockstate.json` and
    /// `registries.json` when present, from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        tracing::debug!("loading command context from {}", dir.display());

        let commands = read_file(&dir.join(COMMANDS_FILE))?;
        let block_states = read_optional(&dir.join(BLOCK_STATES_FILE))?;
        let registries = read_optional(&dir.join(REGISTRIES_FILE))?;

        Self::from_json(
            &commands,
            block_states.as_deref().unwrap_or("{}"),
            registries.as_deref().unwrap_or("{}"),
        )
    }

    /// Same grammar and registries with a different set of argument kinds.
    pub fn with_parsers(self, parsers: ParserRegistry) -> Result<Self, LoadError> {
        Self::new(self.root, self.block_states, self.registries, parsers)
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }
}

impl Registries for Context {
    fn block_properties(&self, block: &str) -> Option<&BlockProperties> {
        self.block_states.get(block)
    }

    fn registry(&self, name: &str) -> Option<&FxHashSet<String>> {
        self.registries.get(name)
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional(path: &Path) -> Result<Option<String>, LoadError> {
    if !path.exists() {
        tracing::debug!("{} not found, using an empty table", path.display());
        return Ok(None);
    }
    read_file(path).map(Some)
}

/// Reject trees the walker cannot use. Unknown parser names only warn: the
/// walker reports them per line.
fn validate(root: &CommandNode, parsers: &ParserRegistry) -> Result<(), LoadError> {
    if root.kind != NodeKind::Root {
        return Err(LoadError::NotRoot);
    }

    let mut failure = None;
    root.walk(&mut |path, node| {
        if failure.is_some() {
            return;
        }
        if let Some(target) = &node.redirect {
            if root.resolve(target).is_none() {
                failure = Some(LoadError::UnresolvedRedirect {
                    path: path.join(" "),
                    target: target.join(" "),
                });
                return;
            }
        }
        if node.is_argument() {
            match node.parser.as_deref() {
                None => {
                    failure = Some(LoadError::MissingParser {
                        path: path.join(" "),
                    });
                }
                Some(name) if !parsers.contains(name) => {
                    tracing::warn!(parser = name, node = %path.join(" "), "unregistered argument parser");
                }
                Some(_) => {}
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
