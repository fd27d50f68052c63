use std::sync::OnceLock;

use regex::Regex;

use crate::models::Code;

/// Code block directives and option parsing.
pub struct CodeBlock;

static CHEAT_REGEX: OnceLock<Regex> = OnceLock::new();
static LISTING_LANGUAGE_REGEX: OnceLock<Regex> = OnceLock::new();

impl CodeBlock {
    /// Marker that hides the run control for a block.
    pub const HIDE_RUN: &'static str = "HIDE-RUN";
    /// Language given to pseudocode nested in a list item.
    pub const PSEUDOCODE_LANGUAGE: &'static str = "pseudocode";

    fn cheat_regex() -> &'static Regex {
        CHEAT_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^\s*(?:;;|//|#)\s*cheat:\s*(.*)$").expect("Invalid cheat regex")
        })
    }

    /// Language named by an `lstlisting` option list such as `[language=Python, numbers=left]`.
    pub fn listing_language(options: &str) -> Option<String> {
        let re = LISTING_LANGUAGE_REGEX.get_or_init(|| {
            Regex::new(r"(?i)\blanguage\s*=\s*([^,\s\]]+)").expect("Invalid language regex")
        });
        re.captures(options).map(|c| c[1].to_string())
    }

    /// Builds a [`Code`] node from a raw environment body.
    ///
    /// Leading and trailing blank lines are stripped; indentation of the
    /// first code line is kept. Cheat lines move into
    /// `cheat_text` and `HIDE-RUN` lines set `hide_execution`; both are
    /// removed from the displayed text. Returns `None` for an empty body.
    pub fn build(body: &str, language: Option<&str>) -> Option<Code> {
        let body = trim_blank_lines(body);
        if body.is_empty() {
            return None;
        }

        let mut lines = Vec::new();
        let mut cheats = Vec::new();
        let mut hide_execution = false;

        for line in body.lines() {
            if let Some(caps) = Self::cheat_regex().captures(line) {
                cheats.push(caps[1].trim_end().to_string());
            } else if line.to_uppercase().contains(Self::HIDE_RUN) {
                hide_execution = true;
            } else {
                lines.push(line);
            }
        }

        Some(Code {
            language: language
                .filter(|l| !l.is_empty())
                .unwrap_or(Code::DEFAULT_LANGUAGE)
                .to_string(),
            text: lines.join("\n"),
            cheat_text: (!cheats.is_empty()).then(|| cheats.join("\n")),
            hide_execution,
        })
    }
}

fn trim_blank_lines(body: &str) -> &str {
    let body = body.trim_end();
    match body.find(|c: char| !c.is_whitespace()) {
        Some(first) => &body[body[..first].rfind('\n').map_or(0, |nl| nl + 1)..],
        None => "",
    }
}
