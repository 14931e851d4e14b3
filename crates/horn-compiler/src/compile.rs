//! The clause compiler.
//!
//! Two post-order rewrites turn a parsed clause into an executable one:
//!
//! 1. **Slot assignment**: the first occurrence of a named variable
//!    allocates the next stack slot; later occurrences reuse it. Every
//!    occurrence of `_` is a distinct variable and gets a fresh slot. The
//!    final count is the clause's stack size.
//! 2. **Built-in substitution**: every body element goes through the
//!    built-in registry; recognized (name, arity) pairs become their
//!    dispatch variant, everything else becomes the default variant that
//!    resolves against the knowledge base.

use std::collections::HashMap;
use std::rc::Rc;

use horn_core::{Builtins, Clause, CompiledClause, SlotInfo, Symbol, Term};

use crate::error::CompileError;

/// Compile a parsed clause.
///
/// Queries compile the same way as program clauses; the resolver gives a
/// query one frame for the whole search, so its variables are bound once
/// and read back directly.
pub fn compile(clause: &Clause, builtins: &Builtins) -> Result<CompiledClause, CompileError> {
    let mut slots = SlotAllocator::default();

    let head = match &clause.head {
        Some(head) => {
            if !head.is_callable() {
                return Err(CompileError::NonFunctorHead);
            }
            Some(slots.assign(head))
        }
        None => None,
    };

    let body = clause
        .body
        .iter()
        .map(|element| {
            let element = slots.assign(element);
            builtins
                .transform(&element)
                .map(Rc::new)
                .ok_or(CompileError::NotCallable)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledClause {
        head,
        body,
        slots: slots.finish(),
    })
}

/// Maps source variables to stack slots, head first, first occurrence wins.
#[derive(Default)]
struct SlotAllocator {
    by_name: HashMap<Symbol, usize>,
    slots: Vec<SlotInfo>,
}

impl SlotAllocator {
    fn assign(&mut self, term: &Term) -> Term {
        match term {
            Term::Var { name, anonymous } => {
                let slot = if *anonymous {
                    self.fresh(*name, true)
                } else {
                    match self.by_name.get(name) {
                        Some(&slot) => slot,
                        None => {
                            let slot = self.fresh(*name, false);
                            self.by_name.insert(*name, slot);
                            slot
                        }
                    }
                };
                Term::Slot {
                    name: *name,
                    anonymous: *anonymous,
                    slot,
                }
            }
            Term::Functor { name, args } => Term::Functor {
                name: *name,
                args: args.iter().map(|arg| self.assign(arg)).collect(),
            },
            other => other.clone(),
        }
    }

    fn fresh(&mut self, name: Symbol, anonymous: bool) -> usize {
        let slot = self.slots.len();
        self.slots.push(SlotInfo { name, anonymous });
        slot
    }

    fn finish(self) -> Vec<SlotInfo> {
        self.slots
    }
}
