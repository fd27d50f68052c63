use std::fmt::Write;

use crate::models::{Code, ContentNode, List};

/// Renders nodes as an indented outline, one line per node or item.
pub fn outline(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &ContentNode) {
    match node {
        ContentNode::Heading(h) => line(out, 0, &format!("heading{}: {}", h.level, h.text)),
        ContentNode::Paragraph(p) => line(out, 0, &format!("paragraph: {}", p.text)),
        ContentNode::Math(m) => line(out, 0, &format!("math: {}", flatten(&m.formula))),
        ContentNode::Code(c) => line(out, 0, &code_summary(c)),
        ContentNode::Pseudocode(p) => line(
            out,
            0,
            &format!("pseudocode: {} lines", p.text.lines().count()),
        ),
        ContentNode::List(list) => write_list(out, 0, list),
        ContentNode::Bibliography(b) => {
            line(out, 0, "bibliography");
            for e in &b.entries {
                let number = e.number.map(|n| format!("[{n}] ")).unwrap_or_default();
                line(out, 1, &format!("{number}{}: {}", e.key, e.content));
            }
        }
    }
}

fn write_list(out: &mut String, depth: usize, list: &List) {
    let kind = if list.ordered { "ordered" } else { "unordered" };
    line(out, depth, &format!("list {kind}"));
    for item in &list.items {
        line(out, depth + 1, &format!("- {}", item.content));
        if let Some(nested) = &item.nested_list {
            write_list(out, depth + 2, nested);
        }
        if let Some(code) = &item.nested_code {
            line(out, depth + 2, &code_summary(code));
        }
        if let Some(math) = &item.nested_math {
            line(out, depth + 2, &format!("math: {}", flatten(&math.formula)));
        }
    }
}

fn code_summary(code: &Code) -> String {
    let mut s = format!("code[{}]: {} lines", code.language, code.text.lines().count());
    if code.cheat_text.is_some() {
        s.push_str(" +cheat");
    }
    if code.hide_execution {
        s.push_str(" +hidden");
    }
    s
}

fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn line(out: &mut String, depth: usize, text: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}{text}", "  ".repeat(depth));
}
