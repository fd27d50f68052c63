use std::sync::OnceLock;

use regex::Regex;

use crate::models::BibliographyEntry;

/// Best-effort field extraction for bibliography entries.
///
/// All heuristics run on the already transformed (HTML) entry text, so
/// emphasis shows up as `<em>` spans.
pub struct BibliographyItem;

static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
static VENUE_REGEX: OnceLock<Regex> = OnceLock::new();
static AUTHORS_END_REGEX: OnceLock<Regex> = OnceLock::new();

impl BibliographyItem {
    pub fn build(key: &str, content: String, number: Option<usize>) -> BibliographyEntry {
        BibliographyEntry {
            key: key.to_string(),
            number,
            authors: Self::authors(&content),
            title: Self::title(&content),
            venue: Self::venue(&content),
            year: Self::year(&content),
            content,
        }
    }

    pub fn year(text: &str) -> Option<String> {
        let re = YEAR_REGEX
            .get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").expect("Invalid year regex"));
        re.find(text).map(|m| m.as_str().to_string())
    }

    /// First ``quoted'', "quoted" or `<em>` span, whichever comes first.
    pub fn title(text: &str) -> Option<String> {
        let re = TITLE_REGEX.get_or_init(|| {
            Regex::new(r#"``([^']+)''|"([^"]+)"|<em>([^<]+)</em>"#).expect("Invalid title regex")
        });
        first_group(re, text)
    }

    /// Text before the first comma, period or opening quote.
    pub fn authors(text: &str) -> Option<String> {
        let re = AUTHORS_END_REGEX
            .get_or_init(|| Regex::new(r#",|\.|``|""#).expect("Invalid authors regex"));
        let head = re.split(text).next().unwrap_or_default().trim();
        (!head.is_empty()).then(|| head.to_string())
    }

    /// Emphasised span after "in", else any emphasised span.
    pub fn venue(text: &str) -> Option<String> {
        let re = VENUE_REGEX.get_or_init(|| {
            Regex::new(r"in\s+<em>([^<]+)</em>|<em>([^<]+)</em>").expect("Invalid venue regex")
        });
        first_group(re, text)
    }
}

fn first_group(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().trim().to_string())
}
