use crate::parsing::source::Span;

use super::kinds::Container;

/// One element of the scanner's flat output.
///
/// Positions (`at`) are byte offsets of the markup that produced the token,
/// used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockToken {
    /// A run of ordinary text, still containing inline markup.
    Text(Span),
    /// One or more blank lines, or `\par`.
    Break,
    Heading { level: u8, title: Span },
    BeginDocument,
    EndDocument,
    Begin { container: Container, at: usize },
    End { container: Container, at: usize },
    /// `\item` with its optional `[label]`.
    Item { label: Option<Span> },
    /// `\bibitem{key}`; any `[label]` is discarded.
    BibItem { key: Span },
    Raw(RawBlock),
}

/// A block captured whole from its opening to its closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    pub kind: RawKind,
    /// The captured text: the environment body, or for source-keeping math
    /// the complete environment.
    pub body: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawKind {
    Code { language: Option<String> },
    Pseudocode,
    Math,
}
