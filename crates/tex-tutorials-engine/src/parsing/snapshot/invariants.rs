use crate::models::{ContentNode, List};

/// Validates content-tree invariants.
///
/// Asserts that:
/// - The top-level sequence is not empty
/// - Heading levels are within 1..=3
/// - Paragraphs are non-empty single-line HTML
/// - Lists have at least one item, at every depth
/// - Code blocks name a language
/// - Bibliographies have entries, each with a key and content
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(nodes: &[ContentNode]) {
    assert!(!nodes.is_empty(), "content sequence is empty");

    for node in nodes {
        match node {
            ContentNode::Heading(h) => assert!(
                (1..=3).contains(&h.level),
                "heading level out of range: {} ({:?})",
                h.level,
                h.text
            ),
            ContentNode::Paragraph(p) => {
                assert!(!p.text.is_empty(), "empty paragraph emitted");
                assert!(!p.text.contains('\n'), "paragraph spans lines: {:?}", p.text);
            }
            ContentNode::Code(c) => assert!(!c.language.is_empty(), "code without language"),
            ContentNode::List(list) => check_list(list),
            ContentNode::Bibliography(b) => {
                assert!(!b.entries.is_empty(), "bibliography without entries");
                for e in &b.entries {
                    assert!(
                        !e.key.is_empty() && !e.content.is_empty(),
                        "incomplete bibliography entry: {e:?}"
                    );
                }
            }
            ContentNode::Math(_) | ContentNode::Pseudocode(_) => {}
        }
    }
}

fn check_list(list: &List) {
    assert!(!list.items.is_empty(), "list without items");
    for item in &list.items {
        if let Some(nested) = &item.nested_list {
            check_list(nested);
        }
    }
}
