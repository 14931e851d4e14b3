use horn_core::{Names, Term};
use indoc::indoc;

use crate::error::ParseError;
use crate::parser::{parse_program, parse_query};

fn parse_one_term(source: &str, names: &mut Names) -> Term {
    let clause = parse_query(source, names).unwrap();
    assert_eq!(clause.body.len(), 1, "expected a single goal");
    clause.body.into_iter().next().unwrap()
}

fn rendered(source: &str) -> String {
    let mut names = Names::new();
    let term = parse_one_term(source, &mut names);
    term.display(&names).to_string()
}

#[test]
fn facts_rules_and_queries() {
    let mut names = Names::new();
    let program = indoc! {"
        parent(tom, bob).
        ancestor(X, Y) :- parent(X, Y).
        ?- parent(tom, X).
    "};

    let sentence = parse_program(program, &mut names).unwrap();
    assert_eq!(sentence.clauses.len(), 3);

    let fact = &sentence.clauses[0];
    assert!(fact.head.is_some());
    assert!(fact.body.is_empty());

    let rule = &sentence.clauses[1];
    assert!(rule.head.is_some());
    assert_eq!(rule.body.len(), 1);

    let query = &sentence.clauses[2];
    assert!(query.is_query());
    assert_eq!(query.body.len(), 1);
}

#[test]
fn body_conjunction_flattens() {
    let mut names = Names::new();
    let sentence = parse_program("a :- b, c, d.", &mut names).unwrap();
    let rule = &sentence.clauses[0];
    assert_eq!(rule.body.len(), 3);
}

#[test]
fn parenthesized_conjunction_stays_nested_inside_disjunction() {
    let mut names = Names::new();
    let clause = parse_query("(a, b ; c)", &mut names).unwrap();
    // the disjunction is one goal; its left branch is a ','/2 term
    assert_eq!(clause.body.len(), 1);
    let Term::Functor { name, args } = &clause.body[0] else {
        panic!("expected functor");
    };
    assert_eq!(names.resolve_functor(*name), ";");
    let Term::Functor { name: left, .. } = &args[0] else {
        panic!("expected functor");
    };
    assert_eq!(names.resolve_functor(*left), ",");
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(rendered("X is 3 + 4 * 2"), "is(X, +(3, *(4, 2)))");
    assert_eq!(rendered("X is (3 + 4) * 2"), "is(X, *(+(3, 4), 2))");
    // yfx is left associative
    assert_eq!(rendered("X is 1 - 2 - 3"), "is(X, -(-(1, 2), 3))");
    assert_eq!(rendered("X is 7 mod 2"), "is(X, mod(7, 2))");
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_eq!(rendered("1 + 2 < 4"), "<(+(1, 2), 4)");
}

#[test]
fn disjunction_is_right_associative() {
    assert_eq!(rendered("a ; b ; c"), ";(a, ;(b, c))");
}

#[test]
fn unification_operators() {
    assert_eq!(rendered("X = f(Y)"), "=(X, f(Y))");
    assert_eq!(rendered("X \\= 3"), "\\=(X, 3)");
}

#[test]
fn negative_numbers_fold() {
    assert_eq!(rendered("X = -3"), "=(X, -3)");
    assert_eq!(rendered("X = -2.5"), "=(X, -2.5)");
    // negation of a non-literal stays a functor
    assert_eq!(rendered("X is -Y"), "is(X, -(Y))");
    assert_eq!(rendered("X is 5 - 3"), "is(X, -(5, 3))");
}

#[test]
fn lists_desugar_to_cons() {
    assert_eq!(rendered("X = [1, 2, 3]"), "=(X, [1, 2, 3])");
    assert_eq!(rendered("X = []"), "=(X, [])");
    assert_eq!(rendered("X = [H | T]"), "=(X, [H | T])");
    assert_eq!(rendered("X = [1, 2 | T]"), "=(X, [1, 2 | T])");
}

#[test]
fn anonymous_variables() {
    let mut names = Names::new();
    let term = parse_one_term("f(_, _)", &mut names);
    let Term::Functor { args, .. } = term else {
        panic!("expected functor");
    };
    for arg in &args {
        assert!(matches!(arg, Term::Var { anonymous: true, .. }));
    }
}

#[test]
fn quoted_atoms_parse_as_atoms() {
    assert_eq!(rendered("X = 'hello world'"), "=(X, 'hello world')");
    // a quoted atom can be a functor name
    assert_eq!(rendered("'my pred'(1)"), "'my pred'(1)");
}

#[test]
fn query_prefix_and_dot_are_optional() {
    let mut names = Names::new();
    let a = parse_query("?- parent(tom, X).", &mut names).unwrap();
    let b = parse_query("parent(tom, X)", &mut names).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cut_is_an_atom() {
    let mut names = Names::new();
    let sentence = parse_program("max(X, Y, X) :- X >= Y, !.", &mut names).unwrap();
    let rule = &sentence.clauses[0];
    assert_eq!(rule.body.len(), 2);
    let bang = names.lookup_functor("!").unwrap();
    assert_eq!(rule.body[1], Term::atom(bang));
}

#[test]
fn canonical_rendering_snapshot() {
    insta::assert_snapshot!(
        rendered("reverse([1, 2 | T], Acc) ; X is -Y * 2"),
        @";(reverse([1, 2 | T], Acc), is(X, *(-(Y), 2)))"
    );
}

#[test]
fn missing_dot_is_an_error() {
    let mut names = Names::new();
    let err = parse_program("parent(tom, bob)", &mut names).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
}

#[test]
fn unclosed_paren_is_an_error() {
    let mut names = Names::new();
    let err = parse_program("f(a, b.", &mut names).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn int_overflow_is_reported() {
    let mut names = Names::new();
    let err = parse_query("X = 99999999999999999999", &mut names).unwrap_err();
    assert!(matches!(err, ParseError::NumberOutOfRange { .. }));
}

#[test]
fn i64_min_literal_parses() {
    let mut names = Names::new();
    let term = parse_one_term("X = -9223372036854775808", &mut names);
    let Term::Functor { args, .. } = term else {
        panic!("expected functor");
    };
    assert_eq!(args[1], Term::Int(i64::MIN));
}
