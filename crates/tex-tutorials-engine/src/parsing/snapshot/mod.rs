//! # Outline and Invariant Support
//!
//! Utilities for inspecting parsed content in tests and from the CLI.
//!
//! ## Modules
//!
//! - **`outline`**: renders a content tree as a stable, indented plain-text
//!   outline, suitable for inline `insta` snapshots
//! - **`invariants`**: runtime checks for content-tree correctness (never
//!   empty, heading levels in range, no empty paragraphs or lists)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
