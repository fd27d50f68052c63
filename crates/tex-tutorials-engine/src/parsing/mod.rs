pub mod blocks;
pub mod diagnostics;
pub mod inline;
pub mod metadata;
pub mod read_time;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::models::{ContentNode, Metadata};

use blocks::{BlockBuilder, Scanner};
use diagnostics::{Diagnostic, Diagnostics};
use inline::{CitationRegistry, InlineTransformer, kinds::Citation};
use metadata::extract_metadata;
use read_time::{DEFAULT_WORDS_PER_MINUTE, estimate_read_time};

/// Caller-tunable rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Target of every citation link.
    pub reference_href: String,
    pub words_per_minute: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reference_href: Citation::DEFAULT_HREF.to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Everything one parse produces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTutorial {
    pub metadata: Metadata,
    pub read_time: String,
    pub content: Vec<ContentNode>,
    /// Citation numbers assigned during this parse.
    pub citations: CitationRegistry,
    pub warnings: Vec<Diagnostic>,
}

/// Parses a tutorial with default options.
pub fn parse_tutorial(src: &str) -> ParsedTutorial {
    parse_tutorial_with(src, &ParseOptions::default())
}

/// Parses a tutorial into metadata, read time and a flat content sequence.
///
/// Never fails. Each call owns a fresh citation registry, so numbering is
/// never shared between parses. Malformed markup is recovered from and
/// reported in [`ParsedTutorial::warnings`].
pub fn parse_tutorial_with(src: &str, options: &ParseOptions) -> ParsedTutorial {
    let metadata = extract_metadata(src);
    let read_time = estimate_read_time(src, options.words_per_minute);

    let mut diags = Diagnostics::new();
    let mut inline = InlineTransformer::new(options.reference_href.as_str());
    let tokens = Scanner::new(src, &mut diags).scan();
    let content = BlockBuilder::new(src, &tokens, &mut inline, &mut diags).build();

    log::debug!(
        "parsed {:?}: {} nodes, {} citations",
        metadata.title,
        content.len(),
        inline.registry().len()
    );

    ParsedTutorial {
        metadata,
        read_time,
        content,
        citations: inline.into_registry(),
        warnings: diags.into_vec(),
    }
}
