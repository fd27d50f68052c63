//! Parser tests over whole documents.
//!
//! Fixtures (.tex) live in `fixtures/`; their expected outlines are inline
//! snapshots so a fixture and its expectation read side by side.

use pretty_assertions::assert_eq;
use regex::Regex;

use crate::models::{Code, ContentNode, Heading, List, Metadata, Paragraph};
use crate::parsing::{
    ParseOptions, ParsedTutorial, diagnostics::Diagnostic, parse_tutorial, parse_tutorial_with,
    snapshot,
};

fn parse_fixture(name: &str) -> ParsedTutorial {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.tex",
        env!("CARGO_MANIFEST_DIR")
    );
    let src = std::fs::read_to_string(path).unwrap();
    let parsed = parse_tutorial(&src);
    snapshot::invariants(&parsed.content);
    parsed
}

fn cited_numbers(html: &str) -> Vec<usize> {
    let re = Regex::new(r"\[(\d+)\]</a>").unwrap();
    re.captures_iter(html).map(|c| c[1].parse().unwrap()).collect()
}

fn paragraph_text(node: &ContentNode) -> &str {
    match node {
        ContentNode::Paragraph(p) => &p.text,
        other => panic!("expected paragraph, got {other:?}"),
    }
}

fn only_list(node: &ContentNode) -> &List {
    match node {
        ContentNode::List(list) => list,
        other => panic!("expected list, got {other:?}"),
    }
}

// Fixture outlines

#[test]
fn fixture_sections() {
    let parsed = parse_fixture("sections");
    assert_eq!(parsed.metadata.title, "Getting Started");
    insta::assert_snapshot!(snapshot::outline(&parsed.content), @r"
    heading1: Intro
    paragraph: Hello world.
    heading2: Details
    paragraph: Some <strong>bold</strong> text over two lines.
    heading3: Deep
    paragraph: Last words.
    ");
}

#[test]
fn fixture_code_blocks() {
    let parsed = parse_fixture("code_blocks");
    insta::assert_snapshot!(snapshot::outline(&parsed.content), @r"
    heading1: Code
    paragraph: Run this:
    code[Scheme]: 4 lines +cheat
    code[python]: 1 lines +hidden
    code[text]: 1 lines
    ");
}

#[test]
fn fixture_lists() {
    let parsed = parse_fixture("lists");
    assert!(parsed.warnings.is_empty());
    insta::assert_snapshot!(snapshot::outline(&parsed.content), @r"
    heading1: Lists
    list unordered
      - First point continues here
      - Second with a list
        list ordered
          - Inner one
          - Inner two
      - Third with code
        code[text]: 1 lines
      - Fourth with math
        math: a^2 + b^2
    ");
}

#[test]
fn fixture_no_sections() {
    let parsed = parse_fixture("no_sections");
    insta::assert_snapshot!(snapshot::outline(&parsed.content), @r"
    paragraph: Only a paragraph here.
    math: e = mc^2
    pseudocode: 2 lines
    ");
}

#[test]
fn fixture_bibliography() {
    let parsed = parse_fixture("bibliography");
    assert_eq!(parsed.content.len(), 3);
    assert_eq!(cited_numbers(paragraph_text(&parsed.content[1])), vec![1, 2, 1]);

    let ContentNode::Bibliography(bib) = &parsed.content[2] else {
        panic!("expected bibliography, got {:?}", parsed.content[2]);
    };
    let keys: Vec<_> = bib.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["sicp", "knuth", "unused"]);

    let sicp = &bib.entries[0];
    assert_eq!(sicp.number, Some(1));
    assert_eq!(sicp.authors.as_deref(), Some("Abelson"));
    assert_eq!(
        sicp.title.as_deref(),
        Some("Structure and Interpretation of Computer Programs")
    );
    assert_eq!(sicp.year.as_deref(), Some("1985"));
    assert_eq!(sicp.venue, None);

    let knuth = &bib.entries[1];
    assert_eq!(knuth.number, Some(2));
    assert_eq!(knuth.venue.as_deref(), Some("The Art of Computer Programming"));
    assert_eq!(knuth.year.as_deref(), Some("1968"));

    assert_eq!(bib.entries[2].number, None);
}

// Document-level behaviour

#[test]
fn no_recognized_commands_gives_fallback() {
    let parsed = parse_tutorial("Just some prose with no markup at all.");
    assert_eq!(parsed.metadata, Metadata::default());
    assert_eq!(
        parsed.content,
        vec![ContentNode::Paragraph(Paragraph::fallback())]
    );
}

#[test]
fn single_section_with_paragraph() {
    let parsed = parse_tutorial("\\section{Intro}\nHello world.");
    assert_eq!(
        parsed.content,
        vec![
            ContentNode::Heading(Heading {
                level: 1,
                text: "Intro".into(),
            }),
            ContentNode::Paragraph(Paragraph {
                text: "Hello world.".into(),
            }),
        ]
    );
}

#[test]
fn verbatim_with_blank_line_is_one_code_node() {
    let parsed =
        parse_tutorial("\\section{S}\n\\begin{verbatim}\nline one\n\nline two\n\\end{verbatim}\n");
    let codes: Vec<&Code> = parsed
        .content
        .iter()
        .filter_map(|n| match n {
            ContentNode::Code(c) => Some(c),
            _ => None,
        })
        .collect();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].text, "line one\n\nline two");
    assert_eq!(parsed.content.len(), 2);
}

#[test]
fn cheat_line_becomes_cheat_text() {
    let parsed = parse_tutorial(
        "\\section{S}\n\\begin{verbatim}\n(bar)\n;; cheat: (foo)\n\\end{verbatim}",
    );
    match &parsed.content[1] {
        ContentNode::Code(code) => {
            assert_eq!(code.cheat_text.as_deref(), Some("(foo)"));
            assert!(!code.text.contains("cheat"));
            assert_eq!(code.text, "(bar)");
        }
        other => panic!("expected code, got {other:?}"),
    }
}

#[test]
fn repeated_citation_keeps_its_number() {
    let parsed = parse_tutorial("\\section{S}\nFirst \\cite{K}.\n\nAgain \\cite{K}.");
    let first = cited_numbers(paragraph_text(&parsed.content[1]));
    let second = cited_numbers(paragraph_text(&parsed.content[2]));
    assert_eq!(first, second);
    assert_eq!(parsed.citations.get("K"), Some(1));
}

#[test]
fn numbering_is_fresh_for_every_parse() {
    let src = "\\section{S}\n\\cite{a} \\cite{b} \\cite{a}";
    for _ in 0..2 {
        let parsed = parse_tutorial(src);
        assert_eq!(cited_numbers(paragraph_text(&parsed.content[1])), vec![1, 2, 1]);
    }
}

#[test]
fn nested_list_on_one_line() {
    let parsed = parse_tutorial(
        "\\section{L}\n\\begin{itemize}\\item A\\begin{itemize}\\item B\\end{itemize}\\end{itemize}",
    );
    let outer = only_list(&parsed.content[1]);
    assert_eq!(outer.items.len(), 1);
    assert_eq!(outer.items[0].content, "A");
    let inner = outer.items[0].nested_list.as_ref().unwrap();
    assert_eq!(inner.items.len(), 1);
    assert_eq!(inner.items[0].content, "B");
}

#[test]
fn description_labels_are_bold() {
    let parsed = parse_tutorial(
        "\\section{D}\n\\begin{description}\n\\item[Car] first element\n\\end{description}",
    );
    let list = only_list(&parsed.content[1]);
    assert!(!list.ordered);
    assert_eq!(list.items[0].content, "<strong>Car</strong> first element");
}

#[test]
fn read_time_follows_word_count() {
    let thousand = vec!["word"; 1000].join(" ");
    assert_eq!(parse_tutorial(&thousand).read_time, "5 min read");
    let short = vec!["word"; 150].join(" ");
    assert_eq!(parse_tutorial(&short).read_time, "1 min read");
}

#[test]
fn options_change_links_and_speed() {
    let options = ParseOptions {
        reference_href: "#bib".into(),
        words_per_minute: 2,
    };
    let parsed = parse_tutorial_with("\\section{S}\n\\cite{x}", &options);
    assert!(paragraph_text(&parsed.content[1]).starts_with("<a href=\"#bib\""));
    assert_eq!(parsed.read_time, "1 min read");
}

// Recovery and diagnostics

#[test]
fn unterminated_verbatim_captures_rest_of_input() {
    let parsed = parse_tutorial("\\section{S}\n\\begin{verbatim}\nrest\n\nmore\n\\section{T}");
    assert_eq!(parsed.content.len(), 2);
    match &parsed.content[1] {
        ContentNode::Code(code) => assert_eq!(code.text, "rest\n\nmore\n\\section{T}"),
        other => panic!("expected code, got {other:?}"),
    }
    assert_eq!(
        parsed.warnings,
        vec![Diagnostic::UnterminatedEnvironment {
            env: "verbatim".into(),
            line: 2,
        }]
    );
}

#[test]
fn bibliography_entries_span_blank_lines() {
    let parsed = parse_tutorial(
        "\\section{R}\n\\begin{thebibliography}{1}\n\\bibitem{a} First.\n\n\n\\bibitem{b} Second.\n\n\\end{thebibliography}\n",
    );
    let bibs: Vec<_> = parsed
        .content
        .iter()
        .filter(|n| matches!(n, ContentNode::Bibliography(_)))
        .collect();
    assert_eq!(bibs.len(), 1);
    match bibs[0] {
        ContentNode::Bibliography(b) => assert_eq!(b.entries.len(), 2),
        _ => unreachable!(),
    }
}

#[test]
fn section_in_verbatim_is_not_a_heading() {
    let parsed = parse_tutorial(
        "\\section{Real}\n\\begin{verbatim}\n\\section{Fake}\n\\end{verbatim}",
    );
    let headings = parsed
        .content
        .iter()
        .filter(|n| matches!(n, ContentNode::Heading(_)))
        .count();
    assert_eq!(headings, 1);
}

#[test]
fn extra_closing_tag_is_reported() {
    let parsed = parse_tutorial(
        "\\section{S}\n\\begin{itemize}\\item x\\end{itemize}\n\\end{itemize}\nafter",
    );
    assert_eq!(parsed.content.len(), 3);
    assert_eq!(paragraph_text(&parsed.content[2]), "after");
    assert_eq!(
        parsed.warnings,
        vec![Diagnostic::UnmatchedEnd {
            env: "itemize".into(),
            line: 3,
        }]
    );
}

#[test]
fn empty_section_contributes_only_its_heading() {
    let parsed = parse_tutorial("\\section{A}\n\n% nothing\n\n\\section{B}\ntext");
    assert_eq!(parsed.content.len(), 3);
    snapshot::invariants(&parsed.content);
}

#[test]
fn parsed_tutorial_serializes_for_the_renderer() {
    let parsed = parse_tutorial("\\title{T}\n\\section{S}\nSee \\cite{k}.");
    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["metadata"]["title"], "T");
    assert_eq!(value["readTime"], "1 min read");
    assert_eq!(value["content"][0]["type"], "heading");
    assert_eq!(value["content"][1]["type"], "paragraph");
    assert_eq!(value["citations"][0]["key"], "k");
    assert_eq!(value["warnings"], serde_json::json!([]));
}

#[test]
fn dollar_variables_in_code_spans_stay_separate() {
    let parsed = parse_tutorial("\\section{S}\nBind \\texttt{$x} first and \\texttt{$y} second.");
    let text = paragraph_text(&parsed.content[1]);
    assert_eq!(text.matches("<code").count(), 2);
    assert!(text.contains(">$x</code> first and "), "{text}");
}

#[test]
fn verb_bodies_are_not_block_markup() {
    let parsed = parse_tutorial(
        "\\section{S}\nThe modulo is \\verb|%| in C, really.\n\nWrite \\verb|\\section{Fake}| to start one.",
    );
    insta::assert_snapshot!(snapshot::outline(&parsed.content), @r"
    heading1: S
    paragraph: The modulo is <code class='bg-gray-100 px-1 py-0.5 rounded text-sm'>%</code> in C, really.
    paragraph: Write <code class='bg-gray-100 px-1 py-0.5 rounded text-sm'>\section{Fake}</code> to start one.
    ");
}
