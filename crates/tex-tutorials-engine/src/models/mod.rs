pub mod content;
pub mod tutorial;

pub use content::{
    Bibliography, BibliographyEntry, Code, ContentNode, Heading, List, ListItem, Math, Metadata,
    Paragraph, Pseudocode,
};
pub use tutorial::Tutorial;
