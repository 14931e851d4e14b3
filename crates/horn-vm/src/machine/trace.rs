//! Observation hooks for the proof search.
//!
//! The machine is generic over a `Tracer`; `NoopTracer`'s empty default
//! methods compile away entirely, so the search loop pays nothing when it
//! is not being watched.

use horn_core::{Goal, Names, Symbol, Term};

pub trait Tracer {
    /// A goal was popped for execution.
    fn goal(&mut self, _goal: &Goal) {}
    /// A user goal is about to be resolved against the knowledge base.
    fn call(&mut self, _name: Symbol, _arity: usize, _candidates: usize) {}
    /// A candidate clause's head unified; its body was pushed.
    fn enter_clause(&mut self, _index: usize) {}
    /// A choice point was recorded.
    fn choice_point(&mut self) {}
    /// The search fell back to the most recent choice point.
    fn backtrack(&mut self) {}
    /// A cut pruned `pruned` choice points.
    fn cut(&mut self, _pruned: usize) {}
    /// The goal stack emptied.
    fn solution(&mut self) {}
}

/// Tracer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// Prints one line per search event to stderr.
pub struct PrintTracer<'a> {
    names: &'a Names,
}

impl<'a> PrintTracer<'a> {
    pub fn new(names: &'a Names) -> Self {
        Self { names }
    }

    fn goal_label(&self, goal: &Goal) -> String {
        match goal {
            Goal::True => "true".into(),
            Goal::Fail => "fail".into(),
            Goal::Cut => "!".into(),
            Goal::Unify { .. } => "=/2".into(),
            Goal::NotUnify { .. } => "\\=/2".into(),
            Goal::Is { .. } => "is/2".into(),
            Goal::Compare { op, .. } => format!("{}/2", op.as_str()),
            Goal::TypeCheck { kind, .. } => format!("{}/1", kind.as_str()),
            Goal::Conjunction { .. } => ",/2".into(),
            Goal::Disjunction { .. } => ";/2".into(),
            Goal::Call { .. } => "call/1".into(),
            Goal::User(term) => match term.indicator() {
                Some((name, arity)) => self.names.indicator(name, arity),
                None => "<non-callable>".into(),
            },
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn goal(&mut self, goal: &Goal) {
        if let Goal::User(Term::Functor { .. }) = goal {
            // `call` prints the indicator with its candidate count instead
            return;
        }
        eprintln!("goal {}", self.goal_label(goal));
    }

    fn call(&mut self, name: Symbol, arity: usize, candidates: usize) {
        eprintln!(
            "call {} ({candidates} clause{})",
            self.names.indicator(name, arity),
            if candidates == 1 { "" } else { "s" }
        );
    }

    fn enter_clause(&mut self, index: usize) {
        eprintln!("  clause #{index}");
    }

    fn choice_point(&mut self) {
        eprintln!("  choice point");
    }

    fn backtrack(&mut self) {
        eprintln!("backtrack");
    }

    fn cut(&mut self, pruned: usize) {
        eprintln!("cut ({pruned} pruned)");
    }

    fn solution(&mut self) {
        eprintln!("solution");
    }
}
