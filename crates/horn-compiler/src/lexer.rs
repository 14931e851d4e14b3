//! Lexer for the horn surface syntax.
//!
//! Produces tokens carrying `&str` slices into the source; whitespace and
//! comments are skipped as trivia. Consecutive unrecognized characters are
//! coalesced into a single error span rather than one error per character.

use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip(r"%[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*(?:[^*]|\*[^/])*\*/")]
pub enum Token<'src> {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token("|")]
    Bar,

    /// Clause terminator. Floats lex as a single token, so a bare `.` is
    /// always the end of a clause.
    #[token(".")]
    Dot,

    #[token(":-")]
    Neck,

    #[token("?-")]
    QueryNeck,

    #[token(";")]
    Semicolon,

    #[token("!")]
    Bang,

    #[token("=")]
    Eq,

    #[token("\\=")]
    NotEq,

    #[token("<")]
    Lt,

    #[token("=<")]
    Le,

    #[token(">")]
    Gt,

    #[token(">=")]
    Ge,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[regex(r"[a-z][A-Za-z0-9_]*")]
    Atom(&'src str),

    /// Quoted atom, quotes included; unescaped by the parser.
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    QuotedAtom(&'src str),

    #[regex(r"[A-Z_][A-Za-z0-9_]*")]
    Variable(&'src str),

    #[regex(r"[0-9]+")]
    Int(&'src str),

    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    Float(&'src str),
}

/// A token plus its byte span in the source.
pub type SpannedToken<'src> = (Token<'src>, Range<usize>);

/// Tokenize a source text.
///
/// Stops at the first unrecognized input, reporting the full run of
/// consecutive bad characters as one span.
pub fn lex(source: &str) -> Result<Vec<SpannedToken<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let start = lexer.span().start;
                let mut end = lexer.span().end;
                while let Some(Err(())) = lexer.next() {
                    end = lexer.span().end;
                }
                return Err(ParseError::UnexpectedCharacter { span: start..end });
            }
        }
    }

    Ok(tokens)
}

/// Strip the quotes from a quoted atom and process escapes.
pub(crate) fn unquote_atom(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some(other) => out.push(other),
            None => break,
        }
    }
    out
}
