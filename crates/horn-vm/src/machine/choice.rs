//! Choice points for the flat backtracking stack.

use std::rc::Rc;

use horn_core::{CompiledClause, Goal};

/// A goal awaiting proof: the dispatch node, the frame base its slots
/// resolve against, and the cut barrier of the activation that pushed it.
#[derive(Debug, Clone)]
pub(crate) struct GoalEntry {
    pub goal: Rc<Goal>,
    pub frame: u32,
    pub barrier: usize,
}

/// What a choice point resumes with.
#[derive(Debug)]
pub(crate) enum Alternative<'p> {
    /// Remaining candidate clauses for a user goal, tried in declaration
    /// order from `next`.
    Clauses {
        entry: GoalEntry,
        clauses: &'p [Rc<CompiledClause>],
        next: usize,
    },
    /// The right branch of a `;/2` whose left branch was taken.
    Disjunct { entry: GoalEntry },
}

/// A point the search can resume from differently.
///
/// Restoring one undoes the trail to `trail_mark`, frees frames down to
/// `cells_mark`, and reinstates the saved goal stack.
#[derive(Debug)]
pub(crate) struct Choice<'p> {
    pub goals: Vec<GoalEntry>,
    pub trail_mark: usize,
    pub cells_mark: usize,
    pub alt: Alternative<'p>,
}
