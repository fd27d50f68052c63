/// Inline code span with owned delimiters and output class.
///
/// `\verb` bodies are raw zones: nothing inside them is transformed.
pub struct CodeSpan;

impl CodeSpan {
    pub const COMMAND: &'static str = "texttt";
    pub const VERB: &'static str = "\\verb";
    /// Characters accepted as `\verb` delimiters.
    pub const VERB_DELIMITERS: &'static [u8] = b"|!+/=\"@#";
    pub const CLASS: &'static str = "bg-gray-100 px-1 py-0.5 rounded text-sm";

    /// Wraps already-rendered HTML in a code element.
    pub fn wrap(inner_html: &str) -> String {
        format!("<code class='{}'>{inner_html}</code>", Self::CLASS)
    }

    /// Body of a lexed `\verb` token, without the command and delimiters.
    pub fn verb_body(token: &str) -> &str {
        let rest = &token[Self::VERB.len()..];
        // Delimiters are single ASCII bytes.
        rest.get(1..rest.len().saturating_sub(1)).unwrap_or("")
    }
}
