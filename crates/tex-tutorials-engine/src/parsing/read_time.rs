/// Reading speed used when the caller does not configure one.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Estimates reading time from the whitespace-separated words of `src`.
///
/// Rounds up and never reports less than one minute.
pub fn estimate_read_time(src: &str, words_per_minute: usize) -> String {
    let words = src.split_whitespace().count();
    let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
    format!("{minutes} min read")
}
