//! Resource-location splitting built from the generic combinators.

use super::{Comb, boxed, chain, consume_if, consume_while, parse_if, store_to};
use crate::base::constants::is_resource_path_char;

/// Context key for the text before `:` (or the whole id when there is none).
pub const NAMESPACE_OR_PATH: &str = "namespace_or_path";
/// Context key for the text after `:`, present only when a `:` was read.
pub const PATH: &str = "path";

/// Read `ns:path` or a bare `path`, storing the parts in the context.
///
/// Stops at the first character that cannot belong to a resource location;
/// validation of the captured parts is left to the caller.
pub fn parse_resource_location() -> impl Comb {
    chain(
        false,
        vec![
            boxed(store_to(
                consume_while(is_resource_path_char),
                NAMESPACE_OR_PATH,
                true,
            )),
            boxed(parse_if(
                consume_if(store_to(consume_while(is_resource_path_char), PATH, true), ":"),
                |s| s.starts_with(':'),
            )),
        ],
    )
}
