//! Block-level constructs that own their names, directives and heuristics.
//!
//! - **`environment`**: `Environment` classifies `\begin{..}` names
//! - **`code`**: `CodeBlock` post-processes captured code bodies
//! - **`bibliography`**: `BibliographyItem` field heuristics
//! - **`list`**: `ListItemBuilder` accumulates one list item

pub mod bibliography;
pub mod code;
pub mod environment;
pub mod list;

pub use bibliography::BibliographyItem;
pub use code::CodeBlock;
pub use environment::{CodeEnv, Container, Environment, ListKind};
pub use list::ListItemBuilder;
