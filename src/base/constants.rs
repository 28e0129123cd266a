//! Domain constants shared across argument parsers.

/// Namespace assumed for resource locations written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Registry holding every known particle id.
pub const PARTICLE_REGISTRY: &str = "minecraft:particle_type";

/// Longest player name the game accepts.
pub const MAX_PLAYER_NAME_LEN: usize = 16;

/// Characters allowed in an unquoted string: `[0-9A-Za-z_.+-]`.
#[inline]
pub fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// Whole-string form of [`is_unquoted_char`]. Empty strings do not match.
pub fn is_unquoted_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_unquoted_char)
}

/// ASCII word character (`\w`).
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters allowed in a resource path: `[a-z0-9._/-]`.
#[inline]
pub fn is_resource_path_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '/' | '-')
}

/// Characters allowed in a resource namespace: `[a-z0-9._-]`.
#[inline]
pub fn is_resource_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
}
