//! # Inline Kinds
//!
//! Inline constructs that own their command names and output markup.
//!
//! - **`CodeSpan`**: `\texttt{..}` and `\verb|..|`, rendered as `<code>`
//! - **`Citation`**: `\cite{..}` and friends, rendered as numbered links
//! - **`Styling`**: command names mapped to HTML wrapper tags
//!
//! The parser asks these types what a command means; it never hardcodes a
//! command name itself.

pub mod citation;
pub mod code_span;
pub mod styling;

pub use citation::Citation;
pub use code_span::CodeSpan;
pub use styling::Styling;
