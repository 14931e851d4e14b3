#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! The horn resolution engine.
//!
//! A depth-first, backtracking SLD resolver over compiled clauses: terms
//! unify through a binding-cell arena with a trail for undo, candidate
//! clauses are tried in declaration order, and cut prunes with a barrier
//! recorded per clause activation. The [`Engine`] facade owns the
//! interner, the built-in table, and the knowledge base; [`Solutions`]
//! streams answers on demand.

mod database;
mod engine;
mod error;
pub mod machine;


pub use database::Database;
pub use engine::{Engine, Solutions};
pub use error::{EngineError, ResolveError};
pub use machine::{Answer, Limits, NoopTracer, PrintTracer, Tracer};
