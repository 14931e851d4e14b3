use crate::error::ParseError;
use crate::lexer::{Token, lex, unquote_atom};

fn kinds(source: &str) -> Vec<Token<'_>> {
    lex(source).unwrap().into_iter().map(|(t, _)| t).collect()
}

#[test]
fn punctuation_and_operators() {
    assert_eq!(
        kinds(":- ?- ; ! = \\= < =< > >= + - * / | ."),
        vec![
            Token::Neck,
            Token::QueryNeck,
            Token::Semicolon,
            Token::Bang,
            Token::Eq,
            Token::NotEq,
            Token::Lt,
            Token::Le,
            Token::Gt,
            Token::Ge,
            Token::Plus,
            Token::Minus,
            Token::Star,
            Token::Slash,
            Token::Bar,
            Token::Dot,
        ]
    );
}

#[test]
fn atoms_and_variables() {
    assert_eq!(
        kinds("parent X _Tail _ aB_c"),
        vec![
            Token::Atom("parent"),
            Token::Variable("X"),
            Token::Variable("_Tail"),
            Token::Variable("_"),
            Token::Atom("aB_c"),
        ]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("0 42 3.14 2.0e10"),
        vec![
            Token::Int("0"),
            Token::Int("42"),
            Token::Float("3.14"),
            Token::Float("2.0e10"),
        ]
    );
}

#[test]
fn integer_then_clause_dot() {
    // `3.` is an integer and a terminator, not a float
    assert_eq!(kinds("3."), vec![Token::Int("3"), Token::Dot]);
    assert_eq!(kinds("3.5."), vec![Token::Float("3.5"), Token::Dot]);
}

#[test]
fn quoted_atoms() {
    assert_eq!(
        kinds(r"'hello world' 'it\'s'"),
        vec![
            Token::QuotedAtom("'hello world'"),
            Token::QuotedAtom(r"'it\'s'"),
        ]
    );
}

#[test]
fn unquote_handles_escapes() {
    assert_eq!(unquote_atom("'hello world'"), "hello world");
    assert_eq!(unquote_atom(r"'it\'s'"), "it's");
    assert_eq!(unquote_atom(r"'a\nb'"), "a\nb");
    assert_eq!(unquote_atom(r"'back\\slash'"), "back\\slash");
}

#[test]
fn comments_are_trivia() {
    assert_eq!(
        kinds("foo % line comment\n/* block\ncomment */ bar"),
        vec![Token::Atom("foo"), Token::Atom("bar")]
    );
}

#[test]
fn spans_index_the_source() {
    let source = "parent(tom, X)";
    let tokens = lex(source).unwrap();
    let (token, span) = &tokens[0];
    assert_eq!(*token, Token::Atom("parent"));
    assert_eq!(&source[span.clone()], "parent");
}

#[test]
fn bad_characters_coalesce_into_one_span() {
    let err = lex("foo @#@ bar").unwrap_err();
    let ParseError::UnexpectedCharacter { span } = err else {
        panic!("expected UnexpectedCharacter, got {err:?}");
    };
    assert_eq!(span, 4..7);
}
