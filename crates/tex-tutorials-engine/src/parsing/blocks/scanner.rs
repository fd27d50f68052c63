use crate::parsing::{
    diagnostics::{Diagnostic, Diagnostics},
    inline::kinds::CodeSpan,
    source::{Cursor, Span, line_of},
};

use super::{
    kinds::{CodeBlock, CodeEnv, Container, Environment},
    token::{BlockToken, RawBlock, RawKind},
};

/// Heading commands and their levels.
pub const HEADINGS: [(&str, u8); 3] = [("section", 1), ("subsection", 2), ("subsubsection", 3)];

/// Splits tutorial source into a flat sequence of [`BlockToken`]s.
///
/// The scan is brace and command oriented. Raw environments (code,
/// pseudocode, display math) are located by their closing tag and captured
/// whole, so nothing inside them is ever seen as a heading, a list item or a
/// paragraph break.
pub struct Scanner<'a, 'd> {
    src: &'a str,
    cur: Cursor<'a>,
    tokens: Vec<BlockToken>,
    text_start: Option<usize>,
    diags: &'d mut Diagnostics,
}

impl<'a, 'd> Scanner<'a, 'd> {
    pub fn new(src: &'a str, diags: &'d mut Diagnostics) -> Self {
        Self {
            src,
            cur: Cursor::new(src),
            tokens: vec![],
            text_start: None,
            diags,
        }
    }

    pub fn scan(mut self) -> Vec<BlockToken> {
        while !self.cur.eof() {
            if self.cur.at_line_start() && self.skip_blank_or_comment_line() {
                continue;
            }
            match self.cur.peek() {
                Some(b'\\') => self.backslash(),
                Some(b'$') if self.cur.starts_with(b"$$") => {
                    let start = self.cur.pos();
                    self.delimited_math(start, 2, "$$");
                }
                Some(b'%') => {
                    self.flush_text();
                    self.cur.skip_to_line_end();
                }
                _ => {
                    self.mark_text();
                    self.cur.bump();
                }
            }
        }
        self.flush_text();
        log::debug!("scanned {} block tokens", self.tokens.len());
        self.tokens
    }

    /// Blank lines become one break; comment-only lines vanish entirely.
    fn skip_blank_or_comment_line(&mut self) -> bool {
        if let Some(end) = self.cur.blank_line_end() {
            self.flush_text();
            self.push_break();
            self.cur.jump_to(end);
            return true;
        }

        let mut probe = self.cur.clone();
        probe.skip_spaces();
        if probe.peek() == Some(b'%') {
            self.flush_text();
            probe.skip_to_line_end();
            probe.bump();
            self.cur = probe;
            return true;
        }
        false
    }

    fn backslash(&mut self) {
        let start = self.cur.pos();
        match self.cur.peek_at(1) {
            Some(b'[') => self.delimited_math(start, 2, "\\]"),
            Some(b) if b.is_ascii_alphabetic() => self.command(start),
            // Escapes and `\\` stay in the text for the inline pass
            Some(_) => {
                self.mark_text();
                self.cur.bump_n(2);
            }
            None => {
                self.mark_text();
                self.cur.bump();
            }
        }
    }

    fn command(&mut self, start: usize) {
        let mut probe = self.cur.clone();
        probe.bump();
        let name = probe.read_letters().text(self.src);
        let name_end = probe.pos();

        match name {
            "begin" => self.begin(start, name_end, probe),
            "end" => self.end(start, name_end, probe),
            "item" => {
                let label = probe.read_optional();
                self.flush_text();
                self.tokens.push(BlockToken::Item { label });
                self.cur = probe;
            }
            "bibitem" => {
                let _ = probe.read_optional();
                probe.skip_spaces();
                match probe.read_group() {
                    Some(key) => {
                        self.flush_text();
                        self.tokens.push(BlockToken::BibItem { key });
                        self.cur = probe;
                    }
                    None => self.command_as_text(start, name, name_end, &probe),
                }
            }
            "par" => {
                self.flush_text();
                self.push_break();
                self.cur = probe;
            }
            "verb" => {
                self.mark_text();
                self.cur = probe;
                self.skip_verb_body();
            }
            _ => match HEADINGS.iter().find(|(cmd, _)| *cmd == name) {
                Some(&(_, level)) => self.heading(start, name, level, probe),
                None => {
                    self.mark_text();
                    self.cur = probe;
                }
            },
        }
    }

    /// Steps over a `\verb` body so nothing inside it is read as markup.
    /// The body stays in the current text run for the inline pass.
    fn skip_verb_body(&mut self) {
        let Some(delim) = self
            .cur
            .peek()
            .filter(|b| CodeSpan::VERB_DELIMITERS.contains(b))
        else {
            return;
        };
        let mut probe = self.cur.clone();
        probe.bump();
        while let Some(b) = probe.bump() {
            if b == delim {
                self.cur = probe;
                return;
            }
            if b == b'\n' {
                return;
            }
        }
    }

    fn heading(&mut self, start: usize, name: &str, level: u8, mut probe: Cursor<'a>) {
        let name_end = probe.pos();
        if probe.peek() == Some(b'*') {
            probe.bump();
        }
        probe.skip_spaces();
        let _ = probe.read_optional();
        probe.skip_spaces();

        match probe.read_group() {
            Some(title) => {
                self.flush_text();
                self.tokens.push(BlockToken::Heading { level, title });
                self.cur = probe;
            }
            None => self.command_as_text(start, name, name_end, &probe),
        }
    }

    fn begin(&mut self, start: usize, name_end: usize, mut probe: Cursor<'a>) {
        probe.skip_spaces();
        let Some(env_span) = probe.read_group() else {
            self.command_as_text(start, "begin", name_end, &probe);
            return;
        };
        let name = env_span.text(self.src).trim();
        let env = Environment::classify(name);
        self.flush_text();

        match env {
            Environment::Document => {
                self.tokens.push(BlockToken::BeginDocument);
                self.cur = probe;
            }
            Environment::Container(container) => {
                if container == Container::Bibliography {
                    // Widest-label hint
                    probe.skip_spaces();
                    let _ = probe.read_group();
                }
                self.tokens.push(BlockToken::Begin {
                    container,
                    at: start,
                });
                self.cur = probe;
            }
            Environment::Other => {
                log::debug!("dropping \\begin{{{name}}} marker");
                self.cur = probe;
            }
            _ => self.raw_environment(start, name, env, probe),
        }
    }

    fn end(&mut self, start: usize, name_end: usize, mut probe: Cursor<'a>) {
        probe.skip_spaces();
        let Some(env_span) = probe.read_group() else {
            self.command_as_text(start, "end", name_end, &probe);
            return;
        };
        let name = env_span.text(self.src).trim();
        self.flush_text();

        match Environment::classify(name) {
            Environment::Document => self.tokens.push(BlockToken::EndDocument),
            Environment::Container(container) => self.tokens.push(BlockToken::End {
                container,
                at: start,
            }),
            _ => log::debug!("dropping \\end{{{name}}} marker"),
        }
        self.cur = probe;
    }

    /// Captures a raw environment through its `\end{name}`, or to end of input.
    fn raw_environment(&mut self, start: usize, name: &str, env: Environment, mut probe: Cursor<'a>) {
        let kind = match env {
            Environment::Code(CodeEnv::Verbatim) => Some(RawKind::Code { language: None }),
            Environment::Code(CodeEnv::Listing) => {
                let language = probe
                    .read_optional()
                    .and_then(|opts| CodeBlock::listing_language(opts.text(self.src)));
                Some(RawKind::Code { language })
            }
            Environment::Code(CodeEnv::Minted) => {
                let _ = probe.read_optional();
                probe.skip_spaces();
                let language = probe
                    .read_group()
                    .map(|lang| lang.text(self.src).trim().to_string());
                Some(RawKind::Code { language })
            }
            Environment::Pseudocode => Some(RawKind::Pseudocode),
            Environment::Math { .. } => Some(RawKind::Math),
            _ => None,
        };

        let body_start = probe.pos();
        let close = format!("\\end{{{name}}}");
        let (body_end, next) = match probe.find(&close) {
            Some(at) => (at, at + close.len()),
            None => {
                self.unterminated(name, start);
                (self.src.len(), self.src.len())
            }
        };

        if let Some(kind) = kind {
            let body = match env {
                Environment::Math { keep_source: true } => Span::new(start, next),
                _ => Span::new(body_start, body_end),
            };
            self.tokens.push(BlockToken::Raw(RawBlock { kind, body }));
        }
        self.cur.jump_to(next);
    }

    /// `\[..\]` and `$$..$$` display math.
    fn delimited_math(&mut self, start: usize, open_len: usize, close: &str) {
        self.flush_text();
        let body_start = start + open_len;
        self.cur.jump_to(body_start);

        let (body_end, next) = match self.cur.find(close) {
            Some(at) => (at, at + close.len()),
            None => {
                self.unterminated(Environment::DISPLAY_MATH, start);
                (self.src.len(), self.src.len())
            }
        };
        self.tokens.push(BlockToken::Raw(RawBlock {
            kind: RawKind::Math,
            body: Span::new(body_start, body_end),
        }));
        self.cur.jump_to(next);
    }

    /// A structural command without a usable argument is left as text.
    fn command_as_text(&mut self, start: usize, name: &str, name_end: usize, probe: &Cursor<'a>) {
        if probe.peek() == Some(b'{') {
            self.diags.push(Diagnostic::UnterminatedArgument {
                command: name.to_string(),
                line: line_of(self.src, start),
            });
        }
        self.mark_text();
        self.cur.jump_to(name_end);
    }

    fn unterminated(&mut self, env: &str, start: usize) {
        self.diags.push(Diagnostic::UnterminatedEnvironment {
            env: env.to_string(),
            line: line_of(self.src, start),
        });
    }

    fn mark_text(&mut self) {
        if self.text_start.is_none() {
            self.text_start = Some(self.cur.pos());
        }
    }

    fn flush_text(&mut self) {
        if let Some(start) = self.text_start.take() {
            let span = Span::new(start, self.cur.pos());
            if !span.is_empty() {
                self.tokens.push(BlockToken::Text(span));
            }
        }
    }

    fn push_break(&mut self) {
        if !matches!(self.tokens.last(), Some(BlockToken::Break)) {
            self.tokens.push(BlockToken::Break);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::ListKind;
    use pretty_assertions::assert_eq;

    fn scan(src: &str) -> (Vec<BlockToken>, Vec<Diagnostic>) {
        let mut diags = Diagnostics::new();
        let tokens = Scanner::new(src, &mut diags).scan();
        (tokens, diags.into_vec())
    }

    fn texts(src: &str, tokens: &[BlockToken]) -> String {
        tokens
            .iter()
            .filter_map(|t| match t {
                BlockToken::Text(span) => Some(span.text(src)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn verb_percent_is_not_a_comment() {
        let src = "The modulo is \\verb|%| in C, really.";
        let (tokens, diags) = scan(src);
        assert_eq!(tokens, vec![BlockToken::Text(Span::new(0, src.len()))]);
        assert!(diags.is_empty());
    }

    #[test]
    fn verb_body_is_not_a_heading() {
        let src = "Write \\verb|\\section{Fake}| to start one.";
        let (tokens, _) = scan(src);
        assert_eq!(texts(src, &tokens), src);
        assert!(!tokens.iter().any(|t| matches!(t, BlockToken::Heading { .. })));
    }

    #[test]
    fn unclosed_verb_leaves_line_to_scanning() {
        let src = "\\verb|open\n\\section{Real}";
        let (tokens, _) = scan(src);
        assert!(matches!(tokens.last(), Some(BlockToken::Heading { level: 1, .. })));
        assert_eq!(texts(src, &tokens), "\\verb|open\n");
    }

    #[test]
    fn blank_lines_break_paragraphs() {
        let (tokens, diags) = scan("Hello\n\n\nWorld");
        assert_eq!(
            tokens,
            vec![
                BlockToken::Text(Span::new(0, 6)),
                BlockToken::Break,
                BlockToken::Text(Span::new(8, 13)),
            ]
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn verbatim_keeps_blank_lines() {
        let src = "\\begin{verbatim}\na\n\nb\n\\end{verbatim}\nafter";
        let (tokens, _) = scan(src);
        match &tokens[0] {
            BlockToken::Raw(RawBlock {
                kind: RawKind::Code { language: None },
                body,
            }) => assert_eq!(body.text(src), "\na\n\nb\n"),
            other => panic!("expected raw code, got {other:?}"),
        }
        assert!(!tokens.contains(&BlockToken::Break));
        assert_eq!(texts(src, &tokens), "\nafter");
    }

    #[test]
    fn section_inside_verbatim_is_not_a_heading() {
        let (tokens, _) = scan("\\begin{verbatim}\n\\section{No}\n\\end{verbatim}");
        assert!(!tokens.iter().any(|t| matches!(t, BlockToken::Heading { .. })));
    }

    #[test]
    fn starred_heading_with_short_title() {
        let src = "\\subsection*[Short]{Long title}";
        let (tokens, _) = scan(src);
        match &tokens[..] {
            [BlockToken::Heading { level: 2, title }] => assert_eq!(title.text(src), "Long title"),
            other => panic!("unexpected tokens {other:?}"),
        }
    }

    #[test]
    fn comments_are_removed() {
        let src = "a % note\n  % whole line\nb 50\\% off";
        let (tokens, _) = scan(src);
        assert_eq!(texts(src, &tokens), "a \nb 50\\% off");
        assert!(!tokens.contains(&BlockToken::Break));
    }

    #[test]
    fn listing_and_minted_languages() {
        let src = "\\begin{lstlisting}[language=Python]\nx\n\\end{lstlisting}\n\
                   \\begin{minted}[linenos]{rust}\ny\n\\end{minted}";
        let (tokens, _) = scan(src);
        let languages: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                BlockToken::Raw(RawBlock {
                    kind: RawKind::Code { language },
                    ..
                }) => Some(language.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(languages, vec![Some("Python".to_string()), Some("rust".to_string())]);
    }

    #[test]
    fn lists_and_items() {
        let src = "\\begin{description}\\item[Term] meaning\\end{description}";
        let (tokens, _) = scan(src);
        let container = Container::List(ListKind::Description);
        assert_eq!(
            tokens,
            vec![
                BlockToken::Begin { container, at: 0 },
                BlockToken::Item {
                    label: Some(Span::new(25, 29)),
                },
                BlockToken::Text(Span::new(30, 38)),
                BlockToken::End { container, at: 38 },
            ]
        );
    }

    #[test]
    fn bibliography_width_and_keys() {
        let src = "\\begin{thebibliography}{9}\n\\bibitem[K]{knuth} Text\n\\end{thebibliography}";
        let (tokens, _) = scan(src);
        let keys: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                BlockToken::BibItem { key } => Some(key.text(src)),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["knuth"]);
        assert_eq!(texts(src, &tokens), "\n Text\n");
    }

    #[test]
    fn display_math_forms() {
        let src = "\\[ x^2 \\]\n$$y$$\n\\begin{align}a &= b\\end{align}";
        let (tokens, _) = scan(src);
        let bodies: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t {
                BlockToken::Raw(RawBlock {
                    kind: RawKind::Math,
                    body,
                }) => Some(body.text(src)),
                _ => None,
            })
            .collect();
        assert_eq!(
            bodies,
            vec![" x^2 ", "y", "\\begin{align}a &= b\\end{align}"]
        );
    }

    #[test]
    fn unknown_environment_markers_are_dropped() {
        let src = "\\begin{center}Hi\\end{center}";
        let (tokens, _) = scan(src);
        assert_eq!(tokens, vec![BlockToken::Text(Span::new(14, 16))]);
    }

    #[test]
    fn unterminated_verbatim_runs_to_end() {
        let src = "intro\n\\begin{verbatim}\nrest\n\n\\section{Not}";
        let (tokens, diags) = scan(src);
        assert_eq!(tokens.len(), 2);
        match &tokens[1] {
            BlockToken::Raw(RawBlock { body, .. }) => {
                assert_eq!(body.text(src), "\nrest\n\n\\section{Not}")
            }
            other => panic!("expected raw block, got {other:?}"),
        }
        assert_eq!(
            diags,
            vec![Diagnostic::UnterminatedEnvironment {
                env: "verbatim".into(),
                line: 2,
            }]
        );
    }

    #[test]
    fn unclosed_heading_argument_is_text() {
        let src = "\\section{Broken";
        let (tokens, diags) = scan(src);
        assert_eq!(tokens, vec![BlockToken::Text(Span::new(0, 15))]);
        assert_eq!(
            diags,
            vec![Diagnostic::UnterminatedArgument {
                command: "section".into(),
                line: 1,
            }]
        );
    }

    #[test]
    fn par_is_a_break() {
        let (tokens, _) = scan("a\\par b");
        assert_eq!(
            tokens,
            vec![
                BlockToken::Text(Span::new(0, 1)),
                BlockToken::Break,
                BlockToken::Text(Span::new(5, 7)),
            ]
        );
    }

    #[test]
    fn document_markers() {
        let (tokens, _) = scan("\\begin{document}x\\end{document}");
        assert_eq!(
            tokens,
            vec![
                BlockToken::BeginDocument,
                BlockToken::Text(Span::new(16, 17)),
                BlockToken::EndDocument,
            ]
        );
    }
}
