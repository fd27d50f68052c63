//! Text utilities shared with the page layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unbalanced parentheses at byte {0}")]
    UnbalancedParentheses(usize),
}

/// Puts each top-level `( ... )` group of a bracketed list on its own line.
///
/// `"[ (a b), (c (d)) ]"` becomes `"(a b)\n(c (d))"`. One leading `[` and one
/// trailing `]` are stripped. Commas and whitespace between groups are
/// skipped; any other text before a group stays attached to it, and text
/// after the last group is dropped.
pub fn split_parenthesized_array(raw: &str) -> Result<String, SplitError> {
    let body = raw.trim();
    let body = body.strip_prefix('[').unwrap_or(body);
    let body = body.strip_suffix(']').unwrap_or(body);

    let mut groups = Vec::new();
    let mut start = None;
    let mut depth = 0usize;

    for (i, ch) in body.char_indices() {
        match ch {
            '(' => {
                depth += 1;
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(SplitError::UnbalancedParentheses(i))?;
                if depth == 0 {
                    let from = start.take().unwrap_or(i);
                    groups.push(body[from..=i].trim());
                    continue;
                }
            }
            ',' if depth == 0 => continue,
            c if c.is_whitespace() && depth == 0 => continue,
            _ => {}
        }
        start.get_or_insert(i);
    }

    if depth != 0 {
        return Err(SplitError::UnbalancedParentheses(body.len()));
    }
    Ok(groups.join("\n"))
}
