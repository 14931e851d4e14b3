use crate::{Interner, Names};

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("parent");
    let b = interner.intern("parent");
    let c = interner.intern("ancestor");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let sym = interner.intern("append");
    assert_eq!(interner.resolve(sym), "append");
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();

    assert_eq!(interner.get("foo"), None);
    let sym = interner.intern("foo");
    assert_eq!(interner.get("foo"), Some(sym));
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbol_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("zebra");
    let a = interner.intern("aardvark");

    // zebra was inserted first, so it sorts lower
    assert!(z < a);
}

#[test]
fn iter_yields_all_strings() {
    let mut interner = Interner::new();
    let a = interner.intern("alpha");
    let b = interner.intern("beta");

    let items: Vec<_> = interner.iter().collect();
    assert_eq!(items, vec![(a, "alpha"), (b, "beta")]);
}

#[test]
fn functor_and_variable_namespaces_are_independent() {
    let mut names = Names::new();

    let f = names.functor("x");
    let v = names.variable("X");

    assert_eq!(names.resolve_functor(f), "x");
    assert_eq!(names.resolve_variable(v), "X");

    // same text in both spaces stays distinct
    let fx = names.functor("foo");
    let vx = names.variable("foo");
    assert_eq!(names.resolve_functor(fx), "foo");
    assert_eq!(names.resolve_variable(vx), "foo");
}

#[test]
fn indicator_format() {
    let mut names = Names::new();
    let f = names.functor("append");
    assert_eq!(names.indicator(f, 3), "append/3");
}
