use serde::Serialize;
use thiserror::Error;

/// A non-fatal problem found while parsing.
///
/// Parsing never fails; malformed markup is recovered from and reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// An environment without its closing tag; its block runs to end of input.
    #[error("line {line}: \\begin{{{env}}} is never closed, block extends to end of input")]
    UnterminatedEnvironment { env: String, line: usize },

    /// A closing tag with no open environment to close; it is ignored.
    #[error("line {line}: \\end{{{env}}} has no matching \\begin")]
    UnmatchedEnd { env: String, line: usize },

    /// A command whose brace argument never closes; it is kept as text.
    #[error("line {line}: argument of \\{command} is never closed")]
    UnterminatedArgument { command: String, line: usize },
}

/// Collects diagnostics for one parse, logging each as it arrives.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.items.push(diagnostic);
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
