//! Resource locations: `namespace:path` or a bare `path`.

use crate::base::RangeString;
use crate::base::constants::{is_resource_namespace_char, is_resource_path_char};
use crate::parser::{ParseResult, PrefixedReporter, Reporter, TokenReader};
use crate::syntax::TokenType;

use super::{ArgumentParser, Registries};

/// The pieces of a validated resource location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId<'s> {
    pub is_tag: bool,
    pub namespace: Option<RangeString<'s>>,
    pub path: RangeString<'s>,
}

impl ResourceId<'_> {
    /// `namespace:path`, defaulting the namespace to `minecraft`.
    pub fn normalized(&self) -> String {
        let namespace = self
            .namespace
            .map_or(crate::base::constants::DEFAULT_NAMESPACE, |ns| ns.as_str());
        format!("{namespace}:{}", self.path.as_str())
    }
}

/// Validate a resource location and emit its tokens.
///
/// With `allow_tag`, a leading `#` marks a tag reference; it gets its own
/// TAG token and the body is validated as a plain resource. Returns `None`
/// after reporting the first problem found.
pub fn parse_resource<'s>(
    report: &mut dyn Reporter,
    allow_tag: bool,
    text: RangeString<'s>,
    kind: TokenType,
) -> Option<ResourceId<'s>> {
    let (is_tag, body) = match text.strip_prefix("#") {
        Some(body) if allow_tag => {
            if body.is_empty() {
                report.err(text.range(), "empty tag is not allowed");
                return None;
            }
            (true, body)
        }
        _ => (false, text),
    };

    let parts = body.split(":");
    let (namespace, path) = match parts.as_slice() {
        [path] => (None, *path),
        [namespace, path] => (Some(*namespace), *path),
        _ => {
            report.err(
                body.range(),
                "extra namespace separators found, expected <id> or <ns>:<p>",
            );
            return None;
        }
    };

    if namespace.is_some_and(|ns| ns.is_empty()) {
        report.err(body.range(), "missing namespace in resource");
        return None;
    }
    if path.is_empty() {
        report.err(body.range(), "missing path in resource");
        return None;
    }
    if !path.as_str().chars().all(is_resource_path_char) {
        report.err(path.range(), "resource path should match [a-z0-9._\\/-]+");
        return None;
    }
    if let Some(ns) = namespace.filter(|ns| !ns.as_str().chars().all(is_resource_namespace_char)) {
        report.err(ns.range(), "resource namespace should match [a-z0-9._-]+");
        return None;
    }

    if is_tag {
        report.token(text.slice(0, 1).range(), TokenType::Tag);
    }
    report.token(body.range(), kind);

    Some(ResourceId {
        is_tag,
        namespace,
        path,
    })
}

/// `minecraft:resource_location` and friends; `resource_or_tag` and
/// `function` accept a leading `#`.
#[derive(Debug, Clone)]
pub struct ResourceArgument {
    allow_tag: bool,
}

impl ResourceArgument {
    pub fn new(allow_tag: bool) -> Self {
        Self { allow_tag }
    }
}

impl ArgumentParser for ResourceArgument {
    fn try_parse(&self, input: &mut TokenReader<'_>, _: &dyn Registries) -> ParseResult {
        let mut result = ParseResult::new();
        let prefix = if self.allow_tag {
            "ResourceOrTagArgument: "
        } else {
            "ResourceArgument: "
        };
        match input.consume_word() {
            Some(token) => {
                parse_resource(
                    &mut PrefixedReporter::new(&mut result, prefix),
                    self.allow_tag,
                    token,
                    TokenType::Resource,
                );
            }
            None => result.err(input.remaining().range(), "ResourceArgument: expected a resource"),
        }
        result
    }
}
