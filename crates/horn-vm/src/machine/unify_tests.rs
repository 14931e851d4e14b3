use horn_core::{Names, SlotInfo, Term};

use super::cells::{CellArena, Trail};
use super::unify::Unifier;

struct Fixture {
    names: Names,
    cells: CellArena,
    trail: Trail,
}

impl Fixture {
    fn new() -> Self {
        Self {
            names: Names::new(),
            cells: CellArena::new(1 << 16),
            trail: Trail::new(),
        }
    }

    fn frame(&mut self, vars: &[&str]) -> u32 {
        let slots: Vec<SlotInfo> = vars
            .iter()
            .map(|v| SlotInfo {
                name: self.names.variable(v),
                anonymous: false,
            })
            .collect();
        self.cells.alloc_frame(&slots).unwrap()
    }

    fn slot(&mut self, var: &str, slot: usize) -> Term {
        Term::Slot {
            name: self.names.variable(var),
            anonymous: false,
            slot,
        }
    }

    fn atom(&mut self, name: &str) -> Term {
        Term::atom(self.names.functor(name))
    }

    fn functor(&mut self, name: &str, args: Vec<Term>) -> Term {
        Term::functor(self.names.functor(name), args)
    }

    fn unify(&mut self, left: &Term, lf: u32, right: &Term, rf: u32) -> bool {
        Unifier {
            cells: &mut self.cells,
            trail: &mut self.trail,
        }
        .unify(left, lf, right, rf)
    }

    /// Fully dereference a cell for assertions.
    fn deref(&self, cell: u32) -> Option<(Term, u32)> {
        let bound = self.cells.value(cell)?;
        let mut term = bound.term.as_ref().clone();
        let mut frame = bound.frame;
        while let Term::Slot { slot, .. } = &term {
            match self.cells.value(frame + *slot as u32) {
                Some(next) => {
                    frame = next.frame;
                    term = next.term.as_ref().clone();
                }
                None => return Some((term, frame)),
            }
        }
        Some((term, frame))
    }
}

#[test]
fn ground_term_unifies_with_itself_without_bindings() {
    let mut fx = Fixture::new();
    let tom = fx.atom("tom");
    let t = fx.functor("parent", vec![tom.clone(), tom.clone()]);

    assert!(fx.unify(&t.clone(), 0, &t, 0));
    assert_eq!(fx.trail.mark(), 0, "no new bindings for identical terms");
}

#[test]
fn ground_terms_unify_iff_structurally_equal() {
    let mut fx = Fixture::new();
    let a = fx.atom("a");
    let b = fx.atom("b");
    let fa = fx.functor("f", vec![a.clone()]);
    let fb = fx.functor("f", vec![b.clone()]);

    assert!(!fx.unify(&a, 0, &b, 0));
    assert!(!fx.unify(&fa, 0, &fb, 0));
    assert!(fx.unify(&fa.clone(), 0, &fa, 0));
    assert!(fx.unify(&Term::Int(3), 0, &Term::Int(3), 0));
    assert!(!fx.unify(&Term::Int(3), 0, &Term::Int(4), 0));
    // ints and floats are different constants
    assert!(!fx.unify(&Term::Int(2), 0, &Term::Float(2.0), 0));
}

#[test]
fn name_and_arity_both_matter() {
    let mut fx = Fixture::new();
    let a = fx.atom("a");
    let f1 = fx.functor("f", vec![a.clone()]);
    let f2 = fx.functor("f", vec![a.clone(), a.clone()]);
    let g1 = fx.functor("g", vec![a.clone()]);

    assert!(!fx.unify(&f1, 0, &f2, 0));
    assert!(!fx.unify(&f1, 0, &g1, 0));
}

#[test]
fn variable_binds_and_trail_records_it() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X"]);
    let x = fx.slot("X", 0);
    let tom = fx.atom("tom");

    assert!(fx.unify(&x, base, &tom, 0));
    assert_eq!(fx.trail.mark(), 1);
    let (term, _) = fx.deref(base).unwrap();
    assert_eq!(term, tom);
}

#[test]
fn bound_variable_unifies_through_its_value() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X"]);
    let x = fx.slot("X", 0);
    let tom = fx.atom("tom");
    let bob = fx.atom("bob");

    assert!(fx.unify(&x, base, &tom, 0));
    assert!(fx.unify(&x, base, &tom, 0), "same value unifies again");
    assert!(!fx.unify(&x, base, &bob, 0), "conflicting value fails");
}

#[test]
fn undo_restores_the_pre_step_state() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X", "Y"]);
    let x = fx.slot("X", 0);
    let y = fx.slot("Y", 1);
    let b = fx.atom("b");
    let c = fx.atom("c");

    // f(X, Y) vs f(b, c) binds both; pretend the step failed afterwards
    let left = fx.functor("f", vec![x, y]);
    let right = fx.functor("f", vec![b, c]);
    let mark = fx.trail.mark();
    assert!(fx.unify(&left, base, &right, 0));
    assert_eq!(fx.trail.mark(), mark + 2);

    fx.trail.undo_to(mark, &mut fx.cells);
    assert!(fx.cells.value(base).is_none());
    assert!(fx.cells.value(base + 1).is_none());
}

#[test]
fn partial_bindings_stay_on_the_trail_after_failure() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X"]);
    let x = fx.slot("X", 0);
    let a = fx.atom("a");
    let b = fx.atom("b");
    let c = fx.atom("c");

    // f(X, b) vs f(a, c): X binds to a before the second argument fails
    let left = fx.functor("f", vec![x, b]);
    let right = fx.functor("f", vec![a, c]);
    assert!(!fx.unify(&left, base, &right, 0));
    assert_eq!(fx.trail.mark(), 1, "caller is responsible for the undo");

    fx.trail.undo_to(0, &mut fx.cells);
    assert!(fx.cells.value(base).is_none());
}

#[test]
fn var_var_aliasing_resolves_through_the_chain() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X", "Y"]);
    let x = fx.slot("X", 0);
    let y = fx.slot("Y", 1);

    assert!(fx.unify(&x, base, &y, base));
    // binding Y now shows through X
    let three = Term::Int(3);
    assert!(fx.unify(&y, base, &three, 0));
    let (term, _) = fx.deref(base).unwrap();
    assert_eq!(term, Term::Int(3));
}

#[test]
fn binding_lands_on_the_final_cell_of_a_chain() {
    let mut fx = Fixture::new();
    let a = fx.frame(&["X"]);
    let b = fx.frame(&["Y"]);
    let x = fx.slot("X", 0);
    let y = fx.slot("Y", 0);

    // X (frame a) aliases Y (frame b); binding X must write Y's cell
    assert!(fx.unify(&x, a, &y, b));
    assert!(fx.unify(&x, a, &Term::Int(7), 0));

    let (term, _) = fx.deref(b).unwrap();
    assert_eq!(term, Term::Int(7), "the chain's final cell holds the value");
}

#[test]
fn self_alias_is_a_no_op() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X"]);
    let x = fx.slot("X", 0);

    assert!(fx.unify(&x.clone(), base, &x, base));
    assert_eq!(fx.trail.mark(), 0);
    assert!(fx.cells.value(base).is_none());
}

#[test]
fn same_clause_at_two_depths_has_disjoint_frames() {
    let mut fx = Fixture::new();
    let outer = fx.frame(&["X"]);
    let inner = fx.frame(&["X"]);
    let x = fx.slot("X", 0);
    let a = fx.atom("a");

    assert!(fx.unify(&x, outer, &a, 0));
    assert!(
        fx.cells.value(inner).is_none(),
        "binding one activation must not leak into the other"
    );

    let b = fx.atom("b");
    assert!(fx.unify(&x, inner, &b, 0));
    let (outer_term, _) = fx.deref(outer).unwrap();
    let (inner_term, _) = fx.deref(inner).unwrap();
    assert_eq!(outer_term, a);
    assert_eq!(inner_term, b);
}

#[test]
fn occurs_check_is_deliberately_absent() {
    let mut fx = Fixture::new();
    let base = fx.frame(&["X"]);
    let x = fx.slot("X", 0);
    let inner = fx.slot("X", 0);
    let f_of_x = fx.functor("f", vec![inner]);

    // X = f(X) succeeds and creates a cyclic binding
    assert!(fx.unify(&x, base, &f_of_x, base));
    assert!(fx.cells.value(base).is_some());
}
