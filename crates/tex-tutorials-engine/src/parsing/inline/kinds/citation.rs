/// Citation reference command rendered as a numbered link.
pub struct Citation;

impl Citation {
    pub const COMMANDS: &'static [&'static str] = &["cite", "citep", "citet"];
    pub const DEFAULT_HREF: &'static str = "further-explorations#reference";
    pub const CLASS: &'static str = "text-blue-600 underline cursor-pointer";
    pub const KEY_SEPARATOR: char = ',';

    pub fn is_command(name: &str) -> bool {
        Self::COMMANDS.contains(&name)
    }

    /// Splits a raw `\cite` argument into trimmed, non-empty keys.
    pub fn keys(raw: &str) -> impl Iterator<Item = &str> {
        raw.split(Self::KEY_SEPARATOR)
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn link(href: &str, number: usize) -> String {
        format!(
            "<a href=\"{}\" class=\"{}\">[{number}]</a>",
            html_escape::encode_double_quoted_attribute(href),
            Self::CLASS
        )
    }
}
