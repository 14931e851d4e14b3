//! The knowledge base.

use std::rc::Rc;

use indexmap::IndexMap;

use horn_compiler::CompileError;
use horn_core::{CompiledClause, Symbol};

/// Program clauses indexed by (name, arity), kept in declaration order.
///
/// Shared read-only while a query runs; clauses are added between queries.
#[derive(Debug, Default)]
pub struct Database {
    predicates: IndexMap<(Symbol, usize), Vec<Rc<CompiledClause>>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a program clause under its head's (name, arity).
    pub fn add(&mut self, clause: CompiledClause) -> Result<(), CompileError> {
        if clause.is_query() {
            return Err(CompileError::HeadlessProgram);
        }
        let key = clause.indicator().ok_or(CompileError::NonFunctorHead)?;
        self.predicates.entry(key).or_default().push(Rc::new(clause));
        Ok(())
    }

    /// Candidate clauses for a goal, in declaration order. Unknown
    /// predicates yield an empty slice.
    pub fn clauses(&self, name: Symbol, arity: usize) -> &[Rc<CompiledClause>] {
        self.predicates
            .get(&(name, arity))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
    }

    /// Number of distinct predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// (name, arity) keys in first-definition order.
    pub fn predicates(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.predicates.keys().copied()
    }
}
