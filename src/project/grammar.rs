//! The static command tree, as published in `command_registration.json`.
//!
//! ```json
//! { "type": "root", "children": {
//!     "say": { "type": "literal", "children": {
//!         "message": { "type": "argument", "parser": "minecraft:message",
//!                      "executable": true } } } } }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::args::Properties;

/// Kind of a grammar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Literal,
    Argument,
}

/// One node of the command tree.
///
/// Children keep their declaration order; the walker tries them in that order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: IndexMap<String, CommandNode>,
    #[serde(default)]
    pub executable: bool,
    /// Path from the root to the node whose children are grafted onto this one.
    #[serde(default)]
    pub redirect: Option<Vec<String>>,
    /// Argument kind name, for argument nodes.
    #[serde(default)]
    pub parser: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl CommandNode {
    pub fn is_literal(&self) -> bool {
        self.kind == NodeKind::Literal
    }

    pub fn is_argument(&self) -> bool {
        self.kind == NodeKind::Argument
    }

    /// Follow `path` child by child from this node.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&CommandNode> {
        path.iter()
            .try_fold(self, |node, name| node.children.get(name.as_ref()))
    }

    /// Own children followed by the children of the redirect target, one hop only.
    ///
    /// A redirect that does not resolve from `root` contributes nothing.
    pub fn effective_children<'a>(
        &'a self,
        root: &'a CommandNode,
    ) -> impl Iterator<Item = (&'a str, &'a CommandNode)> + 'a {
        let redirected = self
            .redirect
            .as_deref()
            .and_then(|path| root.resolve(path))
            .map(|target| &target.children);

        self.children
            .iter()
            .chain(redirected.into_iter().flatten())
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Visit every node below this one with its path, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&[&'a str], &'a CommandNode)) {
        fn go<'a>(
            node: &'a CommandNode,
            path: &mut Vec<&'a str>,
            visit: &mut dyn FnMut(&[&'a str], &'a CommandNode),
        ) {
            for (name, child) in &node.children {
                path.push(name.as_str());
                visit(path, child);
                go(child, path, visit);
                path.pop();
            }
        }
        go(self, &mut Vec::new(), visit);
    }
}
