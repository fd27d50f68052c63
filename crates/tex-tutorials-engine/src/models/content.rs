use serde::Serialize;

/// One typed unit of parsed tutorial content.
///
/// The top-level sequence is flat: sections become a `Heading` followed by
/// the nodes of their body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Heading(Heading),
    Paragraph(Paragraph),
    Math(Math),
    Code(Code),
    Pseudocode(Pseudocode),
    List(List),
    Bibliography(Bibliography),
}

impl ContentNode {
    /// Lowercase name of the variant, as used in the serialized `type` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentNode::Heading(_) => "heading",
            ContentNode::Paragraph(_) => "paragraph",
            ContentNode::Math(_) => "math",
            ContentNode::Code(_) => "code",
            ContentNode::Pseudocode(_) => "pseudocode",
            ContentNode::List(_) => "list",
            ContentNode::Bibliography(_) => "bibliography",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 for `\section`, 2 for `\subsection`, 3 for `\subsubsection`.
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// HTML fragment produced by the inline transformer.
    pub text: String,
}

impl Paragraph {
    pub const FALLBACK: &'static str = "No content could be extracted from this document.";

    pub fn fallback() -> Self {
        Self {
            text: Self::FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Math {
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    pub language: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheat_text: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_execution: bool,
}

impl Code {
    pub const DEFAULT_LANGUAGE: &'static str = "text";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pseudocode {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_list: Option<List>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_code: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_math: Option<Math>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bibliography {
    pub entries: Vec<BibliographyEntry>,
}

/// A single `\bibitem` with best-effort fields pulled from its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibliographyEntry {
    pub key: String,
    pub content: String,
    /// Citation number, when the key was cited before the bibliography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Document-level fields declared by top-level commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Metadata {
    pub const DEFAULT_TITLE: &'static str = "Untitled Tutorial";
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            description: None,
            category: None,
            tags: Vec::new(),
            date: None,
            order: None,
        }
    }
}
