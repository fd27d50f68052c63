//! # Block Parsing
//!
//! Two-phase block parsing over the tutorial source.
//!
//! ## Parsing Phases
//!
//! 1. **Scanning** (`scanner`): one pass over the source produces a flat
//!    sequence of `BlockToken`s. Raw environments are captured whole, so blank
//!    lines inside code never split a paragraph.
//!
//! 2. **Building** (`builder`): `BlockBuilder` walks the tokens with an
//!    explicit position, recursing into lists and bibliographies, and emits
//!    `ContentNode`s.
//!
//! ## Modules
//!
//! - **`token`**: `BlockToken`, `RawBlock`, `RawKind`
//! - **`kinds`**: environment names, code directives, list items, bibliography heuristics
//! - **`scanner`**: `Scanner` producing block tokens
//! - **`builder`**: `BlockBuilder` producing content nodes
//!
//! ## Key Invariants
//!
//! - List nesting depth is unbounded; closing tags only close their own level
//! - Output order matches source order
//! - Malformed markup never aborts; it is reported through diagnostics

pub mod builder;
pub mod kinds;
pub mod scanner;
pub mod token;

pub use builder::BlockBuilder;
pub use scanner::Scanner;
pub use token::{BlockToken, RawBlock, RawKind};
