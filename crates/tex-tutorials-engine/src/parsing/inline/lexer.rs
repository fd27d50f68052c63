//! Tokenizer for inline markup, built with [Logos].
//!
//! Every byte of the input lands in exactly one token. Bytes Logos cannot
//! match (a lone trailing backslash) become [`TokenKind::Text`], so the
//! parser never has to handle a lexing error.
//!
//! [Logos]: https://docs.rs/logos

use logos::Logos;

use crate::parsing::source::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `\name` with an optional trailing `*`
    #[regex(r"\\[a-zA-Z]+\*?")]
    Command,

    /// `\%`, `\&`, `\_`, `\#`, `\{`, `\}`, `\$`
    #[regex(r"\\[%&_#{}$]")]
    Escaped,

    /// `\\` forced line break
    #[token(r"\\")]
    LineBreak,

    /// Backslash followed by any other single character (`\ `, `\,`, ...)
    #[regex(r"\\[^a-zA-Z%&_#{}$\\]")]
    ControlSymbol,

    /// `\verb` with one of the accepted delimiters; the body is raw
    #[regex(r#"\\verb(\|[^|\n]*\||![^!\n]*!|\+[^+\n]*\+|/[^/\n]*/|=[^=\n]*=|"[^"\n]*"|@[^@\n]*@|#[^#\n]*#)"#)]
    Verb,

    /// `\(...\)`; passed through untouched
    #[regex(r"\\\(([^\\]|\\[^)])*\\\)")]
    InlineMath,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    /// Non-breaking space
    #[token("~")]
    Tilde,

    /// `**` strong marker
    #[token("**")]
    DoubleStar,

    #[token("*")]
    Star,

    /// `$`; the parser pairs these into inline math within one brace level
    #[token("$")]
    Dollar,

    #[regex(r"[^\\{}~*$]+")]
    Text,
}

/// A lexed token with its kind, text slice and byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

/// Lex the input into a sequence of tokens covering all of it.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        // Unrecognized input is treated as plain text
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span: Span::new(range.start, range.end),
        });
    }

    tokens
}
