#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for the horn logic engine.
//!
//! Three layers:
//! - **Names**: interned symbols for functor and variable names
//! - **Terms**: the tagged term representation shared by the parser,
//!   the clause compiler, and the resolver
//! - **Clauses and goals**: parsed clauses, compiled clauses with
//!   stack-slot tables, and the built-in dispatch nodes that make up
//!   compiled clause bodies

mod builtins;
mod clause;
mod goal;
mod interner;
mod term;

#[cfg(test)]
mod builtins_tests;
#[cfg(test)]
mod interner_tests;

pub use builtins::{ArithOp, Builtins};
pub use clause::{Clause, CompiledClause, Sentence, SlotInfo};
pub use goal::{CompareOp, Goal, TypeKind};
pub use interner::{Interner, Names, Symbol};
pub use term::{CONS, NIL, Term, TermDisplay};
