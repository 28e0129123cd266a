//! Shared reader for `[k=v,...]` and `{k=v,...}` property lists.
//!
//! Used by block states, entity selector predicates and the `scores`
//! predicate. The list is split on top-level commas; each entry is split on
//! its first `=` and both sides are trimmed.

use crate::base::RangeString;
use crate::parser::Reporter;
use crate::syntax::TokenType;

/// Messages reported by [`parse_properties`].
#[derive(Debug, Clone, Copy)]
pub struct PropertyMessages {
    pub unclosed: &'static str,
    pub bad_key: &'static str,
    pub bad_value: &'static str,
    pub empty_key: &'static str,
    pub empty_value: &'static str,
    pub no_eq: &'static str,
    pub extra_comma: &'static str,
}

/// How one kind of property list is validated.
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    pub open: char,
    pub close: char,
    pub key_valid: fn(&str) -> bool,
    pub value_valid: fn(&str) -> bool,
    pub allow_empty_key: bool,
    pub allow_empty_value: bool,
    pub key_token: TokenType,
    pub messages: PropertyMessages,
}

/// A parsed list: well-formed entries, plus whatever followed the closing bracket.
#[derive(Debug, Clone)]
pub struct PropertyList<'s> {
    pub entries: Vec<(RangeString<'s>, RangeString<'s>)>,
    pub rest: RangeString<'s>,
}

/// Byte offset of the bracket closing the one at offset 0.
///
/// Quotes are skipped and both bracket kinds nest.
pub fn find_closing(s: RangeString<'_>) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in s.as_str().char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '[' | '{' => depth += 1,
            ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse a bracketed property list starting at the first character of `data`.
///
/// Returns `None`, after reporting `unclosed`, when the list is not closed.
/// Malformed entries are reported and left out of the returned entries.
pub fn parse_properties<'s>(
    data: RangeString<'s>,
    report: &mut dyn Reporter,
    spec: &PropertySpec,
) -> Option<PropertyList<'s>> {
    let close = match find_closing(data) {
        Some(i) if data.first_char() == Some(spec.open) && data.as_str()[i..].starts_with(spec.close) => i,
        _ => {
            report.err(data.range(), spec.messages.unclosed);
            return None;
        }
    };

    let inner = data.slice(spec.open.len_utf8(), close);
    let rest = data.slice_from(close + spec.close.len_utf8());
    let mut entries = Vec::new();

    if inner.trim().is_empty() {
        return Some(PropertyList { entries, rest });
    }

    let (parts, separators) = inner.split_top_level(',');
    for (i, part) in parts.iter().enumerate() {
        if part.trim().is_empty() {
            let comma = separators.get(i).or_else(|| separators.get(i.wrapping_sub(1)));
            let range = comma.map_or(inner.range(), |c| c.range());
            report.err(range, spec.messages.extra_comma);
            continue;
        }
        if let Some(entry) = parse_property_entry(*part, report, spec) {
            entries.push(entry);
        }
    }

    Some(PropertyList { entries, rest })
}

/// Parse one `key=value` entry.
pub fn parse_property_entry<'s>(
    data: RangeString<'s>,
    report: &mut dyn Reporter,
    spec: &PropertySpec,
) -> Option<(RangeString<'s>, RangeString<'s>)> {
    let data = data.trim();
    let Some(eq) = data.find('=') else {
        report.err(data.range(), spec.messages.no_eq);
        return None;
    };

    let key = data.slice_to(eq).trim();
    let value = data.slice_from(eq + 1).trim();

    if key.is_empty() && !spec.allow_empty_key {
        report.err(data.range(), spec.messages.empty_key);
        return None;
    }
    if value.is_empty() && !spec.allow_empty_value {
        report.err(data.range(), spec.messages.empty_value);
        return None;
    }

    if !(spec.key_valid)(key.as_str()) {
        report.err(key.range(), spec.messages.bad_key);
    }
    if !(spec.value_valid)(value.as_str()) {
        report.err(value.range(), spec.messages.bad_value);
    }

    if !key.is_empty() {
        report.token(key.range(), spec.key_token);
    }
    report.token(data.slice(eq, eq + 1).range(), TokenType::Operator);

    Some((key, value))
}

/// Every character is a word character; empty strings match.
pub fn all_word_chars(s: &str) -> bool {
    s.chars().all(crate::base::constants::is_word_char)
}

pub fn any_text(_: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::TextSize;
    use crate::parser::ParseResult;

    const SPEC: PropertySpec = PropertySpec {
        open: '[',
        close: ']',
        key_valid: all_word_chars,
        value_valid: all_word_chars,
        allow_empty_key: false,
        allow_empty_value: false,
        key_token: TokenType::Property,
        messages: PropertyMessages {
            unclosed: "unclosed",
            bad_key: "bad key",
            bad_value: "bad value",
            empty_key: "missing key",
            empty_value: "missing value",
            no_eq: "missing '='",
            extra_comma: "extra comma",
        },
    };

    fn run(text: &str) -> (ParseResult, Option<Vec<(String, String)>>, String) {
        let mut result = ParseResult::new();
        let list = parse_properties(RangeString::new(text, TextSize::from(0)), &mut result, &SPEC);
        let rest = list.as_ref().map(|l| l.rest.as_str().to_string()).unwrap_or_default();
        let entries = list.map(|l| {
            l.entries
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.as_str().to_string()))
                .collect()
        });
        (result, entries, rest)
    }

    #[test]
    fn test_entries_are_trimmed() {
        let (result, entries, rest) = run("[ a = 1 ,b=2]{x}");
        assert!(result.success());
        assert_eq!(
            entries.unwrap(),
            [("a".into(), "1".into()), ("b".into(), "2".into())]
        );
        assert_eq!(rest, "{x}");
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenType::Property,
                TokenType::Operator,
                TokenType::Property,
                TokenType::Operator
            ]
        );
    }

    #[test]
    fn test_empty_list() {
        let (result, entries, _) = run("[]");
        assert!(result.success());
        assert!(entries.unwrap().is_empty());
    }

    #[test]
    fn test_unclosed() {
        let (result, entries, _) = run("[a=1");
        assert!(entries.is_none());
        assert_eq!(&*result.errors[0].message, "unclosed");
    }

    #[test]
    fn test_malformed_entries() {
        let (result, entries, _) = run("[a=,=b,,c]");
        assert!(entries.unwrap().is_empty());
        let errors: Vec<_> = result
            .errors
            .iter()
            .map(|e| (u32::from(e.range.start()), &*e.message))
            .collect();
        assert_eq!(
            errors,
            [
                (1, "missing value"),
                (4, "missing key"),
                (7, "extra comma"),
                (8, "missing '='"),
            ]
        );
    }

    #[test]
    fn test_bad_value_points_at_value() {
        let (result, _, _) = run("[key=$]");
        assert_eq!(&*result.errors[0].message, "bad value");
        assert_eq!(u32::from(result.errors[0].range.start()), 5);
    }

    #[test]
    fn test_nested_brackets_stay_in_value() {
        let mut spec = SPEC;
        spec.value_valid = any_text;
        let mut result = ParseResult::new();
        let list = parse_properties(
            RangeString::new("[nbt={a:[1,2]},tag=x]", TextSize::from(0)),
            &mut result,
            &spec,
        )
        .unwrap();
        assert_eq!(list.entries[0].1.as_str(), "{a:[1,2]}");
        assert_eq!(list.entries[1].0.as_str(), "tag");
    }
}
