pub mod cursor;
pub mod lines;
pub mod span;

pub use cursor::Cursor;
pub use lines::{join_lines, line_of};
pub use span::Span;
