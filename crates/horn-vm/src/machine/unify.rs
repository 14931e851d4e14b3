//! Two-sided unification, Robinson-style, without an occurs check.
//!
//! Operates on (term, frame base) pairs: a slot in a term resolves against
//! cell `frame + slot`. Both sides dereference through their cells before
//! any binding is written, so an alias always points at the final unbound
//! cell of a chain — never an intermediate one. Every binding lands on the
//! trail whether or not the whole unification succeeds; the caller undoes a
//! failed attempt back to its own mark.

use std::rc::Rc;

use horn_core::Term;

use super::cells::{CellArena, CellId, Trail};

pub(crate) struct Unifier<'a> {
    pub cells: &'a mut CellArena,
    pub trail: &'a mut Trail,
}

impl Unifier<'_> {
    /// Unify `(left, lf)` with `(right, rf)`.
    pub fn unify(&mut self, left: &Term, lf: u32, right: &Term, rf: u32) -> bool {
        if let Term::Slot { slot, .. } = left {
            let cell = lf + *slot as u32;
            return match self.cells.value(cell).cloned() {
                Some(bound) => self.unify(bound.term.as_ref(), bound.frame, right, rf),
                None => self.bind_var(cell, right, rf),
            };
        }
        if let Term::Slot { slot, .. } = right {
            let cell = rf + *slot as u32;
            return match self.cells.value(cell).cloned() {
                Some(bound) => self.unify(left, lf, bound.term.as_ref(), bound.frame),
                None => self.bind_var(cell, left, lf),
            };
        }

        match (left, right) {
            (Term::Int(a), Term::Int(b)) => a == b,
            (Term::Float(a), Term::Float(b)) => a == b,
            (
                Term::Functor {
                    name: left_name,
                    args: left_args,
                },
                Term::Functor {
                    name: right_name,
                    args: right_args,
                },
            ) => {
                if left_name != right_name || left_args.len() != right_args.len() {
                    return false;
                }
                for (l, r) in left_args.iter().zip(right_args) {
                    if !self.unify(l, lf, r, rf) {
                        return false;
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// Bind the free cell `cell` to `(term, tf)`.
    ///
    /// A variable on the right is dereferenced first: bound, its value is
    /// bound instead; free, the cells are aliased (self-alias is a no-op).
    fn bind_var(&mut self, cell: CellId, term: &Term, tf: u32) -> bool {
        if let Term::Slot { slot, .. } = term {
            let other = tf + *slot as u32;
            if other == cell {
                return true;
            }
            return match self.cells.value(other).cloned() {
                Some(bound) => self.bind_var(cell, bound.term.as_ref(), bound.frame),
                None => self.bind(cell, Rc::new(term.clone()), tf),
            };
        }
        self.bind(cell, Rc::new(term.clone()), tf)
    }

    fn bind(&mut self, cell: CellId, term: Rc<Term>, frame: u32) -> bool {
        self.cells.bind(cell, term, frame);
        self.trail.push(cell);
        true
    }
}
