use std::ops::Range;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::source::Span;

use super::{
    citations::CitationRegistry,
    kinds::{Citation, CodeSpan, Styling},
    lexer::{Token, TokenKind, lex},
};

/// Rewrites inline markup into an HTML fragment.
///
/// Owns the citation registry for one parse, so every `\cite` rendered by the
/// same transformer shares one numbering.
#[derive(Debug, Clone)]
pub struct InlineTransformer {
    registry: CitationRegistry,
    reference_href: String,
}

impl Default for InlineTransformer {
    fn default() -> Self {
        Self::new(Citation::DEFAULT_HREF)
    }
}

impl InlineTransformer {
    pub fn new(reference_href: impl Into<String>) -> Self {
        Self {
            registry: CitationRegistry::new(),
            reference_href: reference_href.into(),
        }
    }

    /// Transforms `input` and trims the result.
    pub fn transform(&mut self, input: &str) -> String {
        let tokens = lex(input);
        let mut renderer = Renderer {
            tokens: &tokens,
            registry: &mut self.registry,
            href: &self.reference_href,
            src: input,
        };
        let mut out = String::with_capacity(input.len());
        renderer.render(0..tokens.len(), &mut out);
        out.trim().to_string()
    }

    pub fn registry(&self) -> &CitationRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> CitationRegistry {
        self.registry
    }
}

/// A balanced `{...}` group in the token stream.
struct Group {
    /// Token indices strictly inside the braces.
    inner: Range<usize>,
    /// Byte span of the group's raw text, braces excluded.
    raw: Span,
    /// Token index just past the closing brace.
    next: usize,
}

struct Renderer<'a, 't> {
    tokens: &'t [Token<'a>],
    registry: &'t mut CitationRegistry,
    href: &'t str,
    src: &'a str,
}

impl Renderer<'_, '_> {
    fn render(&mut self, range: Range<usize>, out: &mut String) {
        let end = range.end;
        let mut i = range.start;

        while i < end {
            let tok = self.tokens[i];
            i = match tok.kind {
                TokenKind::Text | TokenKind::Star | TokenKind::InlineMath => {
                    out.push_str(&encode_text(tok.text));
                    i + 1
                }
                TokenKind::Escaped => {
                    out.push_str(&encode_text(&tok.text[1..]));
                    i + 1
                }
                TokenKind::LineBreak => {
                    out.push_str(Styling::LINE_BREAK);
                    i + 1
                }
                TokenKind::ControlSymbol => {
                    match tok.text {
                        "\\ " | "\\," | "\\;" => out.push(' '),
                        _ => out.push_str(&encode_text(tok.text)),
                    }
                    i + 1
                }
                TokenKind::Verb => {
                    let body = encode_text(CodeSpan::verb_body(tok.text));
                    out.push_str(&CodeSpan::wrap(&body));
                    i + 1
                }
                TokenKind::Dollar => match self.math_close(i, end) {
                    Some(j) => {
                        let math = Span::new(tok.span.start, self.tokens[j].span.end);
                        out.push_str(&encode_text(math.text(self.src)));
                        j + 1
                    }
                    None => {
                        out.push('$');
                        i + 1
                    }
                },
                TokenKind::Tilde => {
                    out.push_str(Styling::NBSP);
                    i + 1
                }
                TokenKind::DoubleStar => self.strong_marker(i, end, out),
                TokenKind::LBrace => match self.group_at(i, end) {
                    Some(group) => {
                        self.render(group.inner, out);
                        group.next
                    }
                    None => {
                        out.push('{');
                        i + 1
                    }
                },
                TokenKind::RBrace => {
                    out.push('}');
                    i + 1
                }
                TokenKind::Command => self.command(i, end, out),
            };
        }
    }

    /// `**x**`: strong when a closing marker follows, literal otherwise.
    fn strong_marker(&mut self, i: usize, end: usize, out: &mut String) -> usize {
        let close = (i + 1..end).find(|&j| self.tokens[j].kind == TokenKind::DoubleStar);
        match close {
            Some(j) if j > i + 1 => {
                out.push_str("<strong>");
                self.render(i + 1..j, out);
                out.push_str("</strong>");
                j + 1
            }
            _ => {
                out.push_str(self.tokens[i].text);
                i + 1
            }
        }
    }

    fn command(&mut self, i: usize, end: usize, out: &mut String) -> usize {
        let tok = self.tokens[i];
        let name = tok.text[1..].trim_end_matches('*');
        let next = i + 1;

        if Styling::NO_OPS.contains(&name) {
            return next;
        }
        if name == Styling::NEWLINE_COMMAND {
            out.push_str(Styling::LINE_BREAK);
            return next;
        }
        if name == Styling::SPACE_COMMAND {
            return match self.group_at(next, end) {
                Some(group) => {
                    out.push_str(Styling::SPACER);
                    group.next
                }
                None => {
                    out.push(' ');
                    next
                }
            };
        }

        let Some(group) = self.group_at(next, end) else {
            out.push_str(&encode_text(tok.text));
            return next;
        };
        let raw = group.raw.text(self.src).trim();

        if let Some(tag) = Styling::tag_for(name) {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            self.render(group.inner, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            return group.next;
        }
        if name == CodeSpan::COMMAND {
            let mut inner = String::new();
            self.render(group.inner, &mut inner);
            out.push_str(&CodeSpan::wrap(&inner));
            return group.next;
        }
        if Styling::REFERENCES.contains(&name) {
            out.push_str("[Ref: ");
            out.push_str(&encode_text(raw));
            out.push(']');
            return group.next;
        }
        if Styling::DISCARDED.contains(&name) {
            return group.next;
        }
        if name == "url" {
            push_link(out, raw, &encode_text(raw));
            return group.next;
        }
        if name == "href" {
            return match self.group_at(group.next, end) {
                Some(label) => {
                    let mut text = String::new();
                    self.render(label.inner, &mut text);
                    push_link(out, raw, &text);
                    label.next
                }
                None => {
                    push_link(out, raw, &encode_text(raw));
                    group.next
                }
            };
        }
        if Citation::is_command(name) {
            for key in Citation::keys(raw) {
                let number = self.registry.number_for(key);
                out.push_str(&Citation::link(self.href, number));
            }
            return group.next;
        }

        // Unknown command: keep it and its brace groups
        log::debug!("keeping unknown inline command {}", tok.text);
        out.push_str(&encode_text(tok.text));
        let mut next = next;
        while let Some(group) = self.group_at(next, end) {
            out.push('{');
            self.render(group.inner, out);
            out.push('}');
            next = group.next;
        }
        next
    }

    /// Closing `$` for the one at token `i`. Math never leaves the brace
    /// level it opened in, and `$$` is not an empty formula.
    fn math_close(&self, i: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;
        for j in i + 1..end {
            match self.tokens[j].kind {
                TokenKind::Dollar if depth == 0 => return (j > i + 1).then_some(j),
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace if depth == 0 => return None,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
        }
        None
    }

    /// Matches a balanced group opening at token `i`, within `end`.
    fn group_at(&self, i: usize, end: usize) -> Option<Group> {
        if i >= end || self.tokens[i].kind != TokenKind::LBrace {
            return None;
        }
        let mut depth = 0usize;
        for j in i..end {
            match self.tokens[j].kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Group {
                            inner: i + 1..j,
                            raw: Span::new(self.tokens[i].span.end, self.tokens[j].span.start),
                            next: j + 1,
                        });
                    }
                }
                _ => {}
            }
        }
        None
    }
}

fn push_link(out: &mut String, href: &str, text_html: &str) {
    out.push_str("<a href=\"");
    out.push_str(&encode_double_quoted_attribute(href));
    out.push_str("\">");
    out.push_str(text_html);
    out.push_str("</a>");
}
