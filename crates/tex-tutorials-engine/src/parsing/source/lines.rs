/// Returns the 1-based line number containing byte `offset` of `src`.
///
/// Offsets past the end report the last line.
pub fn line_of(src: &str, offset: usize) -> usize {
    let end = offset.min(src.len());
    src.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Trims each line and joins the non-empty ones with single spaces.
///
/// Paragraph and list-item text is collected from several source lines; the
/// rendered HTML treats line breaks as spaces anyway.
pub fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
