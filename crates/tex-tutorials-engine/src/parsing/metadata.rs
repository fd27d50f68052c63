//! Document-level fields declared by top-level commands.
//!
//! Each field comes from the first occurrence of its command. Nothing here
//! fails: a missing or malformed declaration leaves the field unset.

use crate::models::Metadata;

use super::source::{Cursor, join_lines};

pub const TITLE: &str = "title";
pub const KEYWORDS: &str = "keywords";
pub const DATE: &str = "date";
pub const ORDER: &str = "order";
pub const CATEGORY: &str = "category";
pub const ABSTRACT_BEGIN: &str = "\\begin{abstract}";
pub const ABSTRACT_END: &str = "\\end{abstract}";

/// Extracts [`Metadata`] from the raw document.
pub fn extract_metadata(src: &str) -> Metadata {
    let mut meta = Metadata::default();

    if let Some(title) = non_empty(command_argument(src, TITLE)) {
        meta.title = title;
    }
    meta.description = abstract_body(src);
    meta.tags = command_argument(src, KEYWORDS)
        .map(split_tags)
        .unwrap_or_default();
    meta.date = non_empty(command_argument(src, DATE));
    meta.category = non_empty(command_argument(src, CATEGORY));
    meta.order = command_argument(src, ORDER).and_then(|o| o.trim().parse().ok());

    meta
}

/// Returns the brace argument of the first `\name{...}` in `src`.
///
/// `\name` must not continue with more letters (`\title` does not match
/// `\titlepage`). Spaces between the command and its argument are allowed.
/// Nested braces inside the argument are kept.
pub fn command_argument<'a>(src: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("\\{name}");
    let mut cur = Cursor::new(src);

    while let Some(at) = cur.find(&needle) {
        cur.jump_to(at + needle.len());
        if cur.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            continue;
        }
        cur.skip_spaces();
        if let Some(arg) = cur.read_group() {
            return Some(arg.text(src));
        }
    }
    None
}

fn abstract_body(src: &str) -> Option<String> {
    let start = src.find(ABSTRACT_BEGIN)? + ABSTRACT_BEGIN.len();
    let len = src[start..].find(ABSTRACT_END)?;
    let body = join_lines(&src[start..start + len]);
    (!body.is_empty()).then_some(body)
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
