pub mod io;
pub mod models;
pub mod parsing;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{ParseOptions, ParsedTutorial, parse_tutorial, parse_tutorial_with};
pub use text::{SplitError, split_parenthesized_array};
