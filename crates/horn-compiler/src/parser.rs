//! Parser for the horn surface syntax.
//!
//! Precedence climbing over a fixed operator table (there are no operator
//! directives):
//!
//! | prec | fixity | operators |
//! |------|--------|-----------|
//! | 1100 | xfy    | `;` |
//! | 1000 | xfy    | `,` |
//! | 700  | xfx    | `=` `\=` `is` `<` `>` `=<` `>=` |
//! | 500  | yfx    | `+` `-` |
//! | 400  | yfx    | `*` `/` `mod` |
//! | 200  | fy     | `-` (numeric negation) |
//!
//! `:-` and `?-` are clause syntax, not term operators: they are only
//! consumed at the top of a clause. List brackets desugar to `'.'/2` chains
//! ending in `[]`.

use std::ops::Range;

use horn_core::{CONS, Clause, NIL, Names, Sentence, Term};

use crate::error::ParseError;
use crate::lexer::{SpannedToken, Token, lex, unquote_atom};

/// Parse a program text into clauses in declaration order.
///
/// `?- Goal.` sentences parse as query clauses; the caller decides what to
/// do with them (the engine loads program clauses and returns directives).
pub fn parse_program(source: &str, names: &mut Names) -> Result<Sentence, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(source, tokens, names);
    let mut clauses = Vec::new();
    while !parser.at_end() {
        clauses.push(parser.parse_clause()?);
    }
    Ok(Sentence { clauses })
}

/// Parse a single query.
///
/// Accepts an optional `?-` prefix and an optional trailing `.`, so both
/// file-style (`?- foo(X).`) and command-line-style (`foo(X)`) input work.
pub fn parse_query(source: &str, names: &mut Names) -> Result<Clause, ParseError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(source, tokens, names);

    if parser.at(&Token::QueryNeck) {
        parser.bump();
    }
    let body = parser.parse_term(1200)?;
    if parser.at(&Token::Dot) {
        parser.bump();
    }
    parser.expect_end()?;

    let body = parser.flatten_conjunction(body);
    Ok(Clause::query(body))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Fixity {
    Xfx,
    Xfy,
    Yfx,
}

struct Parser<'src, 'n> {
    source: &'src str,
    tokens: Vec<SpannedToken<'src>>,
    pos: usize,
    names: &'n mut Names,
}

impl<'src, 'n> Parser<'src, 'n> {
    fn new(source: &'src str, tokens: Vec<SpannedToken<'src>>, names: &'n mut Names) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            names,
        }
    }

    // --- token access ---

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn at(&self, token: &Token<'_>) -> bool {
        self.peek() == Some(token)
    }

    fn bump(&mut self) -> &SpannedToken<'src> {
        let tok = &self.tokens[self.pos];
        self.pos += 1;
        tok
    }

    fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or(self.source.len()..self.source.len())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some((token, span)) => ParseError::UnexpectedToken {
                span: span.clone(),
                expected,
                found: describe(token),
            },
            None => ParseError::UnexpectedEnd {
                span: self.current_span(),
                expected,
            },
        }
    }

    fn expect(&mut self, token: Token<'_>, expected: &'static str) -> Result<(), ParseError> {
        if self.at(&token) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    // --- clauses ---

    fn parse_clause(&mut self) -> Result<Clause, ParseError> {
        if self.at(&Token::QueryNeck) {
            self.bump();
            let body = self.parse_term(1200)?;
            self.expect(Token::Dot, "`.` at end of clause")?;
            let body = self.flatten_conjunction(body);
            return Ok(Clause::query(body));
        }

        let head = self.parse_term(1200)?;
        if self.at(&Token::Neck) {
            self.bump();
            let body = self.parse_term(1200)?;
            self.expect(Token::Dot, "`.` at end of clause")?;
            let body = self.flatten_conjunction(body);
            return Ok(Clause::rule(head, body));
        }

        self.expect(Token::Dot, "`.` at end of clause")?;
        Ok(Clause::fact(head))
    }

    /// Split a body term on `','/2`, left to right.
    fn flatten_conjunction(&self, term: Term) -> Vec<Term> {
        let mut out = Vec::new();
        self.flatten_into(term, &mut out);
        out
    }

    fn flatten_into(&self, term: Term, out: &mut Vec<Term>) {
        if let Term::Functor { name, args } = &term
            && args.len() == 2
            && self.names.resolve_functor(*name) == ","
        {
            let Term::Functor { mut args, .. } = term else {
                unreachable!();
            };
            let right = args.pop().expect("conjunction arity");
            let left = args.pop().expect("conjunction arity");
            self.flatten_into(left, out);
            self.flatten_into(right, out);
            return;
        }
        out.push(term);
    }

    // --- terms ---

    fn parse_term(&mut self, max_prec: u16) -> Result<Term, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some((text, prec, fixity)) = self.peek_infix() {
            if prec > max_prec {
                break;
            }
            self.bump();
            let right_max = match fixity {
                Fixity::Xfy => prec,
                Fixity::Xfx | Fixity::Yfx => prec - 1,
            };
            let right = self.parse_term(right_max)?;
            let name = self.names.functor(text);
            left = Term::functor(name, vec![left, right]);
        }

        Ok(left)
    }

    fn peek_infix(&self) -> Option<(&'static str, u16, Fixity)> {
        let op = match self.peek()? {
            Token::Semicolon => (";", 1100, Fixity::Xfy),
            Token::Comma => (",", 1000, Fixity::Xfy),
            Token::Eq => ("=", 700, Fixity::Xfx),
            Token::NotEq => ("\\=", 700, Fixity::Xfx),
            Token::Lt => ("<", 700, Fixity::Xfx),
            Token::Le => ("=<", 700, Fixity::Xfx),
            Token::Gt => (">", 700, Fixity::Xfx),
            Token::Ge => (">=", 700, Fixity::Xfx),
            Token::Atom("is") => ("is", 700, Fixity::Xfx),
            Token::Plus => ("+", 500, Fixity::Yfx),
            Token::Minus => ("-", 500, Fixity::Yfx),
            Token::Star => ("*", 400, Fixity::Yfx),
            Token::Slash => ("/", 400, Fixity::Yfx),
            Token::Atom("mod") => ("mod", 400, Fixity::Yfx),
            _ => return None,
        };
        Some(op)
    }

    fn parse_primary(&mut self) -> Result<Term, ParseError> {
        let Some(token) = self.peek().copied() else {
            return Err(self.unexpected("a term"));
        };

        match token {
            Token::Minus => self.parse_negated(),
            Token::Int(text) => {
                let span = self.bump().1.clone();
                Ok(Term::Int(parse_int(text, false, span)?))
            }
            Token::Float(text) => {
                let span = self.bump().1.clone();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::NumberOutOfRange { span })?;
                Ok(Term::Float(value))
            }
            Token::Atom(text) => {
                self.bump();
                self.parse_functor_rest(text.to_owned())
            }
            Token::QuotedAtom(text) => {
                self.bump();
                self.parse_functor_rest(unquote_atom(text))
            }
            Token::Variable(text) => {
                self.bump();
                let name = self.names.variable(text);
                Ok(Term::Var {
                    name,
                    anonymous: text == "_",
                })
            }
            Token::Bang => {
                self.bump();
                Ok(Term::atom(self.names.functor("!")))
            }
            Token::ParenOpen => {
                self.bump();
                let term = self.parse_term(1200)?;
                self.expect(Token::ParenClose, "`)`")?;
                Ok(term)
            }
            Token::BracketOpen => self.parse_list(),
            _ => Err(self.unexpected("a term")),
        }
    }

    /// Numeric negation: fold a literal operand into a negative constant,
    /// otherwise build `-/1`.
    fn parse_negated(&mut self) -> Result<Term, ParseError> {
        self.bump();

        if let Some(Token::Int(text)) = self.peek().copied() {
            let span = self.bump().1.clone();
            return Ok(Term::Int(parse_int(text, true, span)?));
        }
        if let Some(Token::Float(text)) = self.peek().copied() {
            let span = self.bump().1.clone();
            let value = text
                .parse::<f64>()
                .map_err(|_| ParseError::NumberOutOfRange { span })?;
            return Ok(Term::Float(-value));
        }

        let operand = self.parse_term(200)?;
        let minus = self.names.functor("-");
        Ok(Term::functor(minus, vec![operand]))
    }

    /// Argument list (if any) after an atom name.
    fn parse_functor_rest(&mut self, text: String) -> Result<Term, ParseError> {
        let name = self.names.functor(&text);
        if !self.at(&Token::ParenOpen) {
            return Ok(Term::atom(name));
        }

        self.bump();
        let mut args = Vec::new();
        loop {
            args.push(self.parse_term(999)?);
            if self.at(&Token::Comma) {
                self.bump();
                continue;
            }
            self.expect(Token::ParenClose, "`,` or `)`")?;
            break;
        }
        Ok(Term::functor(name, args))
    }

    fn parse_list(&mut self) -> Result<Term, ParseError> {
        self.bump();

        if self.at(&Token::BracketClose) {
            self.bump();
            return Ok(Term::atom(self.names.functor(NIL)));
        }

        let mut elements = vec![self.parse_term(999)?];
        while self.at(&Token::Comma) {
            self.bump();
            elements.push(self.parse_term(999)?);
        }

        let tail = if self.at(&Token::Bar) {
            self.bump();
            self.parse_term(999)?
        } else {
            Term::atom(self.names.functor(NIL))
        };
        self.expect(Token::BracketClose, "`]`")?;

        let cons = self.names.functor(CONS);
        Ok(elements
            .into_iter()
            .rev()
            .fold(tail, |tail, head| Term::functor(cons, vec![head, tail])))
    }
}

fn parse_int(text: &str, negative: bool, span: Range<usize>) -> Result<i64, ParseError> {
    let magnitude = text
        .parse::<i128>()
        .map_err(|_| ParseError::NumberOutOfRange { span: span.clone() })?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| ParseError::NumberOutOfRange { span })
}

fn describe(token: &Token<'_>) -> String {
    match token {
        Token::ParenOpen => "`(`".into(),
        Token::ParenClose => "`)`".into(),
        Token::BracketOpen => "`[`".into(),
        Token::BracketClose => "`]`".into(),
        Token::Comma => "`,`".into(),
        Token::Bar => "`|`".into(),
        Token::Dot => "`.`".into(),
        Token::Neck => "`:-`".into(),
        Token::QueryNeck => "`?-`".into(),
        Token::Semicolon => "`;`".into(),
        Token::Bang => "`!`".into(),
        Token::Eq => "`=`".into(),
        Token::NotEq => "`\\=`".into(),
        Token::Lt => "`<`".into(),
        Token::Le => "`=<`".into(),
        Token::Gt => "`>`".into(),
        Token::Ge => "`>=`".into(),
        Token::Plus => "`+`".into(),
        Token::Minus => "`-`".into(),
        Token::Star => "`*`".into(),
        Token::Slash => "`/`".into(),
        Token::Atom(text) | Token::Variable(text) | Token::Int(text) | Token::Float(text) => {
            format!("`{text}`")
        }
        Token::QuotedAtom(text) => format!("`{text}`"),
    }
}
