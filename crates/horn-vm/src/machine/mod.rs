//! The resolution machine: cells and trail, unification, arithmetic, the
//! depth-first search with its flat choice-point stack, and answer
//! readout.

mod answer;
mod arith;
mod cells;
mod choice;
mod solve;
mod trace;
mod unify;

#[cfg(test)]
mod unify_tests;

pub use answer::Answer;
pub use solve::Limits;
pub use trace::{NoopTracer, PrintTracer, Tracer};

pub(crate) use solve::Machine;
