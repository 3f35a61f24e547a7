//! `[KEY]` / `{KEY}` markers inside template text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]|\{([^}]+)\}").expect("static pattern compiles"));

/// A run of literal text or one placeholder marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder {
        /// The marker as written, brackets included.
        raw: &'a str,
        /// Marker contents with every bracket character removed.
        key: Cow<'a, str>,
    },
}

/// Split `text` into literal runs and placeholders, in order.
pub fn parse_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2))) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(Segment::Text(&text[cursor..whole.start()]));
        }
        segments.push(Segment::Placeholder {
            raw: whole.as_str(),
            key: strip_brackets(key.as_str()),
        });
        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }
    segments
}

fn strip_brackets(key: &str) -> Cow<'_, str> {
    if key.contains(is_bracket) {
        Cow::Owned(key.chars().filter(|c| !is_bracket(*c)).collect())
    } else {
        Cow::Borrowed(key)
    }
}

fn is_bracket(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}')
}

/// Distinct placeholder keys in first-seen order.
pub fn placeholder_keys(text: &str) -> Vec<Cow<'_, str>> {
    let mut keys: Vec<Cow<'_, str>> = Vec::new();
    for segment in parse_segments(text) {
        if let Segment::Placeholder { key, .. } = segment {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Substitute every placeholder whose key has a non-blank value.
/// Unfilled markers are left exactly as written.
pub fn fill(text: &str, values: &HashMap<String, String>) -> String {
    parse_segments(text)
        .into_iter()
        .fold(String::with_capacity(text.len()), |mut out, segment| {
            match segment {
                Segment::Text(literal) => out.push_str(literal),
                Segment::Placeholder { raw, key } => match values.get(key.as_ref()) {
                    Some(value) if !value.trim().is_empty() => out.push_str(value),
                    _ => out.push_str(raw),
                },
            }
            out
        })
}
