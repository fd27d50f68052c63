//! # Inline Transformation
//!
//! Converts the inline markup of paragraphs, headings, list items and
//! bibliography entries into an HTML fragment.
//!
//! ## Modules
//!
//! - **`lexer`**: Logos tokenizer; every byte lands in one token
//! - **`kinds`**: command names and output markup per construct
//! - **`parser`**: `InlineTransformer`, a recursive renderer over tokens
//! - **`citations`**: `CitationRegistry`, per-parse citation numbering
//!
//! ## Raw Zones
//!
//! `\verb` bodies and inline math (`$..$`, `\(..\)`) are lexed as single
//! tokens, so commands inside them are never transformed.

pub mod citations;
pub mod kinds;
pub mod lexer;
pub mod parser;

pub use citations::CitationRegistry;
pub use parser::InlineTransformer;
