use crate::{
    models::{
        Bibliography, BibliographyEntry, Code, ContentNode, Heading, List, Math, Paragraph,
        Pseudocode,
    },
    parsing::{
        diagnostics::{Diagnostic, Diagnostics},
        inline::InlineTransformer,
        source::{join_lines, line_of},
    },
};

use super::{
    kinds::{BibliographyItem, CodeBlock, Container, Environment, ListItemBuilder, ListKind},
    token::{BlockToken, RawBlock, RawKind},
};

/// Builds content nodes from scanned block tokens by recursive descent.
///
/// Lists recurse on nested `\begin{..}` tokens, so an inner closing tag can
/// never close an outer list.
pub struct BlockBuilder<'a, 'c> {
    src: &'a str,
    tokens: &'a [BlockToken],
    pos: usize,
    inline: &'c mut InlineTransformer,
    diags: &'c mut Diagnostics,
}

impl<'a, 'c> BlockBuilder<'a, 'c> {
    pub fn new(
        src: &'a str,
        tokens: &'a [BlockToken],
        inline: &'c mut InlineTransformer,
        diags: &'c mut Diagnostics,
    ) -> Self {
        Self {
            src,
            tokens,
            pos: 0,
            inline,
            diags,
        }
    }

    /// Builds the top-level content sequence.
    ///
    /// With headings, each heading is followed by its body and text before the
    /// first heading is dropped. Without any, only the `document` body is
    /// parsed. An empty result gets the fallback paragraph.
    pub fn build(mut self) -> Vec<ContentNode> {
        let mut out = vec![];
        let has_headings = self
            .tokens
            .iter()
            .any(|t| matches!(t, BlockToken::Heading { .. }));

        if has_headings {
            while let Some(tok) = self.next() {
                if let BlockToken::Heading { level, title } = tok {
                    let text = self.inline.transform(title.text(self.src));
                    out.push(ContentNode::Heading(Heading {
                        level: *level,
                        text,
                    }));
                    self.parse_blocks(&mut out);
                }
            }
        } else if let Some(begin) = self
            .tokens
            .iter()
            .position(|t| *t == BlockToken::BeginDocument)
        {
            self.pos = begin + 1;
            self.parse_blocks(&mut out);
        } else {
            log::debug!("no headings and no document environment");
        }

        if out.is_empty() {
            out.push(ContentNode::Paragraph(Paragraph::fallback()));
        }
        out
    }

    fn peek(&self) -> Option<&'a BlockToken> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a BlockToken> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    /// Parses a section or document body up to the next heading or
    /// `\end{document}`, leaving that token unconsumed.
    fn parse_blocks(&mut self, out: &mut Vec<ContentNode>) {
        let mut para = String::new();

        while let Some(tok) = self.peek() {
            match tok {
                BlockToken::Heading { .. } | BlockToken::EndDocument => break,
                BlockToken::Text(span) => para.push_str(span.text(self.src)),
                BlockToken::Break => self.flush_paragraph(&mut para, out),
                BlockToken::Raw(raw) => {
                    self.flush_paragraph(&mut para, out);
                    out.extend(self.raw_node(raw));
                }
                BlockToken::Begin {
                    container: Container::List(kind),
                    at,
                } => {
                    self.flush_paragraph(&mut para, out);
                    self.pos += 1;
                    out.extend(self.parse_list(*kind, *at).map(ContentNode::List));
                    continue;
                }
                BlockToken::Begin {
                    container: Container::Bibliography,
                    at,
                } => {
                    self.flush_paragraph(&mut para, out);
                    self.pos += 1;
                    out.extend(self.parse_bibliography(*at).map(ContentNode::Bibliography));
                    continue;
                }
                BlockToken::End { container, at } => self.unmatched_end(*container, *at),
                BlockToken::Item { .. } | BlockToken::BibItem { .. } | BlockToken::BeginDocument => {
                    log::debug!("ignoring {tok:?} outside its environment");
                }
            }
            self.pos += 1;
        }

        self.flush_paragraph(&mut para, out);
    }

    fn flush_paragraph(&mut self, para: &mut String, out: &mut Vec<ContentNode>) {
        if para.is_empty() {
            return;
        }
        let text = self.inline.transform(&join_lines(para));
        para.clear();
        if !text.is_empty() {
            out.push(ContentNode::Paragraph(Paragraph { text }));
        }
    }

    fn raw_node(&self, raw: &RawBlock) -> Option<ContentNode> {
        let body = raw.body.text(self.src);
        match &raw.kind {
            RawKind::Code { language } => {
                CodeBlock::build(body, language.as_deref()).map(ContentNode::Code)
            }
            RawKind::Pseudocode => non_empty(body).map(|text| ContentNode::Pseudocode(Pseudocode { text })),
            RawKind::Math => non_empty(body).map(|formula| ContentNode::Math(Math { formula })),
        }
    }

    /// Parses a list whose `\begin` has been consumed, through its `\end`.
    fn parse_list(&mut self, kind: ListKind, at: usize) -> Option<List> {
        let mut items = vec![];
        let mut current: Option<ListItemBuilder> = None;

        loop {
            let Some(tok) = self.peek() else {
                self.unterminated(kind.env_name(), at);
                break;
            };
            match tok {
                BlockToken::Item { label } => {
                    if let Some(item) = current.take() {
                        items.push(item.finish(self.inline));
                    }
                    let label = label.map(|l| self.inline.transform(l.text(self.src)));
                    current = Some(ListItemBuilder::new(label));
                }
                BlockToken::Text(span) => match current.as_mut() {
                    Some(item) => item.push_text(span.text(self.src)),
                    None => log::debug!("ignoring text before first \\item"),
                },
                BlockToken::Break => {
                    if let Some(item) = current.as_mut() {
                        item.push_break();
                    }
                }
                BlockToken::Begin {
                    container: Container::List(inner),
                    at: inner_at,
                } => {
                    self.pos += 1;
                    let nested = self.parse_list(*inner, *inner_at);
                    if let (Some(item), Some(list)) = (current.as_mut(), nested) {
                        item.flush(self.inline);
                        item.set_nested_list(list);
                    }
                    continue;
                }
                BlockToken::Raw(raw) => {
                    if let Some(item) = current.as_mut() {
                        item.flush(self.inline);
                        attach_nested(item, raw, self.src);
                    }
                }
                BlockToken::End {
                    container: Container::List(_),
                    ..
                } => {
                    self.pos += 1;
                    break;
                }
                BlockToken::End { container, at } => self.unmatched_end(*container, *at),
                BlockToken::Heading { .. } | BlockToken::EndDocument => {
                    self.unterminated(kind.env_name(), at);
                    break;
                }
                BlockToken::Begin { .. } | BlockToken::BibItem { .. } | BlockToken::BeginDocument => {
                    log::debug!("ignoring {tok:?} inside {}", kind.env_name());
                }
            }
            self.pos += 1;
        }

        if let Some(item) = current {
            items.push(item.finish(self.inline));
        }
        (!items.is_empty()).then(|| List {
            ordered: kind.ordered(),
            items,
        })
    }

    /// Parses `thebibliography` entries, across any number of blank lines.
    fn parse_bibliography(&mut self, at: usize) -> Option<Bibliography> {
        let mut entries = vec![];
        let mut current: Option<(&'a str, String)> = None;

        loop {
            let Some(tok) = self.peek() else {
                self.unterminated(Environment::BIBLIOGRAPHY, at);
                break;
            };
            match tok {
                BlockToken::BibItem { key } => {
                    if let Some((key, text)) = current.take() {
                        entries.extend(self.bibliography_entry(key, &text));
                    }
                    current = Some((key.text(self.src).trim(), String::new()));
                }
                BlockToken::Text(span) => {
                    if let Some((_, text)) = current.as_mut() {
                        text.push_str(span.text(self.src));
                    }
                }
                BlockToken::Break => {
                    if let Some((_, text)) = current.as_mut() {
                        text.push('\n');
                    }
                }
                BlockToken::End {
                    container: Container::Bibliography,
                    ..
                } => {
                    self.pos += 1;
                    break;
                }
                BlockToken::Heading { .. } | BlockToken::EndDocument => {
                    self.unterminated(Environment::BIBLIOGRAPHY, at);
                    break;
                }
                _ => log::debug!("ignoring {tok:?} inside bibliography"),
            }
            self.pos += 1;
        }

        if let Some((key, text)) = current {
            entries.extend(self.bibliography_entry(key, &text));
        }
        (!entries.is_empty()).then_some(Bibliography { entries })
    }

    fn bibliography_entry(&mut self, key: &str, text: &str) -> Option<BibliographyEntry> {
        let content = self.inline.transform(&join_lines(text));
        if key.is_empty() || content.is_empty() {
            return None;
        }
        let number = self.inline.registry().get(key);
        Some(BibliographyItem::build(key, content, number))
    }

    fn unterminated(&mut self, env: &str, at: usize) {
        self.diags.push(Diagnostic::UnterminatedEnvironment {
            env: env.to_string(),
            line: line_of(self.src, at),
        });
    }

    fn unmatched_end(&mut self, container: Container, at: usize) {
        self.diags.push(Diagnostic::UnmatchedEnd {
            env: container.env_name().to_string(),
            line: line_of(self.src, at),
        });
    }
}

/// Attaches a raw block to a list item; a later block of the same kind wins.
fn attach_nested(item: &mut ListItemBuilder, raw: &RawBlock, src: &str) {
    let body = raw.body.text(src);
    match &raw.kind {
        RawKind::Code { language } => {
            if let Some(code) = CodeBlock::build(body, language.as_deref()) {
                item.set_nested_code(code);
            }
        }
        RawKind::Pseudocode => {
            if let Some(text) = non_empty(body) {
                item.set_nested_code(Code {
                    language: CodeBlock::PSEUDOCODE_LANGUAGE.to_string(),
                    text,
                    cheat_text: None,
                    hide_execution: false,
                });
            }
        }
        RawKind::Math => {
            if let Some(formula) = non_empty(body) {
                item.set_nested_math(Math { formula });
            }
        }
    }
}

fn non_empty(body: &str) -> Option<String> {
    let body = body.trim();
    (!body.is_empty()).then(|| body.to_string())
}
