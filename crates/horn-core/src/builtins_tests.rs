use crate::{ArithOp, Builtins, CompareOp, Goal, Names, Term, TypeKind};

fn setup() -> (Names, Builtins) {
    let mut names = Names::new();
    let builtins = Builtins::new(&mut names);
    (names, builtins)
}

#[test]
fn transform_zero_arity() {
    let (mut names, builtins) = setup();

    let t = Term::atom(names.functor("true"));
    assert_eq!(builtins.transform(&t), Some(Goal::True));

    let f = Term::atom(names.functor("fail"));
    assert_eq!(builtins.transform(&f), Some(Goal::Fail));

    let cut = Term::atom(names.functor("!"));
    assert_eq!(builtins.transform(&cut), Some(Goal::Cut));
}

#[test]
fn transform_binary_builtins() {
    let (mut names, builtins) = setup();
    let x = Term::var(names.variable("X"));

    let eq = Term::functor(names.functor("="), vec![x.clone(), Term::Int(1)]);
    assert_eq!(
        builtins.transform(&eq),
        Some(Goal::Unify {
            left: x.clone(),
            right: Term::Int(1)
        })
    );

    let is = Term::functor(names.functor("is"), vec![x.clone(), Term::Int(2)]);
    assert_eq!(
        builtins.transform(&is),
        Some(Goal::Is {
            result: x.clone(),
            expr: Term::Int(2)
        })
    );

    let le = Term::functor(names.functor("=<"), vec![Term::Int(1), Term::Int(2)]);
    assert_eq!(
        builtins.transform(&le),
        Some(Goal::Compare {
            op: CompareOp::Le,
            left: Term::Int(1),
            right: Term::Int(2)
        })
    );
}

#[test]
fn transform_type_checks() {
    let (mut names, builtins) = setup();
    let x = Term::var(names.variable("X"));

    let t = Term::functor(names.functor("integer"), vec![x.clone()]);
    assert_eq!(
        builtins.transform(&t),
        Some(Goal::TypeCheck {
            kind: TypeKind::Integer,
            term: x
        })
    );
}

#[test]
fn arity_is_part_of_the_key() {
    let (mut names, builtins) = setup();

    // call/1 is a built-in; call/2 is not
    let call1 = Term::functor(names.functor("call"), vec![Term::Int(1)]);
    assert!(matches!(builtins.transform(&call1), Some(Goal::Call { .. })));

    let call2 = Term::functor(names.functor("call"), vec![Term::Int(1), Term::Int(2)]);
    assert!(matches!(builtins.transform(&call2), Some(Goal::User(_))));
}

#[test]
fn unrecognized_functors_become_user_goals() {
    let (mut names, builtins) = setup();

    let t = Term::functor(names.functor("parent"), vec![Term::Int(1)]);
    assert_eq!(builtins.transform(&t), Some(Goal::User(t.clone())));
}

#[test]
fn non_callable_terms_are_rejected() {
    let (mut names, builtins) = setup();

    assert_eq!(builtins.transform(&Term::Int(3)), None);
    assert_eq!(builtins.transform(&Term::Float(1.5)), None);
    assert_eq!(builtins.transform(&Term::var(names.variable("X"))), None);
}

#[test]
fn arith_ops_key_on_arity() {
    let (mut names, builtins) = setup();
    let minus = names.functor("-");

    assert_eq!(builtins.arith_op(minus, 2), Some(ArithOp::Sub));
    assert_eq!(builtins.arith_op(minus, 1), Some(ArithOp::Neg));
    assert_eq!(builtins.arith_op(minus, 3), None);

    let modulo = names.functor("mod");
    assert_eq!(builtins.arith_op(modulo, 2), Some(ArithOp::Mod));
}
