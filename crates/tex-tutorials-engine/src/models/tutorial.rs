use std::cmp::Ordering;

use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

use crate::parsing::{
    ParseOptions, diagnostics::Diagnostic, inline::CitationRegistry, parse_tutorial_with,
};

use super::ContentNode;

/// A parsed tutorial with catalogue defaults applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    slug: String,
    relative_path: RelativePathBuf,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    pub read_time: String,
    pub content: Vec<ContentNode>,
    pub citations: CitationRegistry,
    pub warnings: Vec<Diagnostic>,
}

impl Tutorial {
    pub const DEFAULT_CATEGORY: &'static str = "Uncategorized";

    /// Parses `src` read from `relative_path` (e.g. `recursion.tex`).
    ///
    /// The slug is the file stem. A missing description becomes
    /// "A tutorial on {title}" and a missing category "Uncategorized".
    pub fn from_source(relative_path: RelativePathBuf, src: &str, options: &ParseOptions) -> Self {
        let parsed = parse_tutorial_with(src, options);
        let meta = parsed.metadata;
        let slug = relative_path.file_stem().unwrap_or_default().to_string();

        Self {
            slug,
            relative_path,
            description: meta
                .description
                .unwrap_or_else(|| format!("A tutorial on {}", meta.title)),
            category: meta
                .category
                .unwrap_or_else(|| Self::DEFAULT_CATEGORY.to_string()),
            title: meta.title,
            tags: meta.tags,
            date: meta.date,
            order: meta.order,
            read_time: parsed.read_time,
            content: parsed.content,
            citations: parsed.citations,
            warnings: parsed.warnings,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Catalogue order: `order` ascending with unset last, then newest date
    /// first with undated last, then slug.
    pub fn catalogue_cmp(&self, other: &Self) -> Ordering {
        let by_order = match (self.order, other.order) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        // ISO dates compare chronologically as strings
        let by_date = match (&self.date, &other.date) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_order
            .then(by_date)
            .then_with(|| self.slug.cmp(&other.slug))
    }
}
