//! The resolver: a depth-first, left-to-right search for a refutation.
//!
//! Choice points live on a flat stack rather than a materialized state
//! tree: each records the saved goal stack, trail and arena watermarks,
//! and the alternative to resume with. Cut carries a barrier — the height
//! of the choice stack when the enclosing call was made — and truncates
//! back to it, which kills the call's remaining candidates and every
//! choice created inside the clause body in one move.
//!
//! Candidate clauses are tried in declaration order; clause bodies are
//! pushed in reverse so body\[0\] is examined first; unification works
//! argument by argument, left to right.

use std::rc::Rc;

use horn_core::{Builtins, CompiledClause, Goal, Symbol, Term, TypeKind};

use super::answer::reify;
use super::arith::{compare, eval};
use super::cells::{CellArena, CellId, Trail};
use super::choice::{Alternative, Choice, GoalEntry};
use super::trace::Tracer;
use super::unify::Unifier;
use crate::database::Database;
use crate::error::ResolveError;

/// Resource ceilings for one resolution.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub(crate) max_steps: u64,
    pub(crate) max_cells: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_steps: 16_000_000,
            max_cells: 8 << 20,
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of proof steps.
    pub fn max_steps(mut self, steps: u64) -> Self {
        self.max_steps = steps;
        self
    }

    /// Cap the total number of binding cells across live frames.
    pub fn max_cells(mut self, cells: usize) -> Self {
        self.max_cells = cells;
        self
    }
}

/// Resolution state for one query.
pub(crate) struct Machine<'p> {
    db: &'p Database,
    builtins: &'p Builtins,
    cells: CellArena,
    trail: Trail,
    goals: Vec<GoalEntry>,
    choices: Vec<Choice<'p>>,
    /// Named query variables in first-occurrence order, for answer readout.
    query_vars: Vec<(Symbol, CellId)>,
    limits: Limits,
    steps: u64,
    started: bool,
    exhausted: bool,
}

impl<'p> Machine<'p> {
    /// Set up the search: one frame for the query, its body on the goal
    /// stack. The query frame lives for the whole search and is never
    /// re-entered, so query variables are bound once and read back
    /// directly.
    pub fn new(
        db: &'p Database,
        builtins: &'p Builtins,
        query: &CompiledClause,
        limits: Limits,
    ) -> Result<Self, ResolveError> {
        let mut cells = CellArena::new(limits.max_cells);
        let base = cells.alloc_frame(&query.slots)?;

        let query_vars = query
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.anonymous)
            .map(|(index, slot)| (slot.name, base + index as u32))
            .collect();

        let goals = query
            .body
            .iter()
            .rev()
            .map(|goal| GoalEntry {
                goal: goal.clone(),
                frame: base,
                barrier: 0,
            })
            .collect();

        Ok(Self {
            db,
            builtins,
            cells,
            trail: Trail::new(),
            goals,
            choices: Vec::new(),
            query_vars,
            limits,
            steps: 0,
            started: false,
            exhausted: false,
        })
    }

    /// Run until the next solution.
    ///
    /// Returns the query-variable bindings, or `None` once the search
    /// space is exhausted. A typed error aborts the query: the machine
    /// reports exhausted from then on.
    pub fn next_solution<T: Tracer>(
        &mut self,
        tracer: &mut T,
    ) -> Result<Option<Vec<(Symbol, Term)>>, ResolveError> {
        if self.exhausted {
            return Ok(None);
        }
        // resuming after a solution starts by retracting it
        if self.started {
            match self.backtrack(tracer) {
                Ok(true) => {}
                Ok(false) => {
                    self.exhausted = true;
                    return Ok(None);
                }
                Err(error) => {
                    self.exhausted = true;
                    return Err(error);
                }
            }
        }
        self.started = true;

        loop {
            self.steps += 1;
            if self.steps > self.limits.max_steps {
                self.exhausted = true;
                return Err(ResolveError::StepLimit);
            }

            let Some(entry) = self.goals.pop() else {
                tracer.solution();
                return Ok(Some(self.read_answer()?));
            };

            let failed = match self.step(entry, tracer) {
                Ok(ok) => !ok,
                Err(error) => {
                    self.exhausted = true;
                    return Err(error);
                }
            };
            if failed {
                match self.backtrack(tracer) {
                    Ok(true) => {}
                    Ok(false) => {
                        self.exhausted = true;
                        return Ok(None);
                    }
                    Err(error) => {
                        self.exhausted = true;
                        return Err(error);
                    }
                }
            }
        }
    }

    /// One proof step. `Ok(false)` means local failure: backtrack.
    fn step<T: Tracer>(&mut self, entry: GoalEntry, tracer: &mut T) -> Result<bool, ResolveError> {
        tracer.goal(entry.goal.as_ref());

        match entry.goal.as_ref() {
            Goal::True => Ok(true),
            Goal::Fail => Ok(false),

            Goal::Cut => {
                tracer.cut(self.choices.len().saturating_sub(entry.barrier));
                self.choices.truncate(entry.barrier);
                Ok(true)
            }

            Goal::Unify { left, right } => {
                let mark = self.trail.mark();
                let ok = self.unifier().unify(left, entry.frame, right, entry.frame);
                if !ok {
                    self.trail.undo_to(mark, &mut self.cells);
                }
                Ok(ok)
            }

            Goal::NotUnify { left, right } => {
                let mark = self.trail.mark();
                let ok = self.unifier().unify(left, entry.frame, right, entry.frame);
                self.trail.undo_to(mark, &mut self.cells);
                Ok(!ok)
            }

            Goal::Is { result, expr } => {
                let value = eval(expr, entry.frame, &self.cells, self.builtins)?.to_term();
                let mark = self.trail.mark();
                let ok = self.unifier().unify(result, entry.frame, &value, entry.frame);
                if !ok {
                    self.trail.undo_to(mark, &mut self.cells);
                }
                Ok(ok)
            }

            Goal::Compare { op, left, right } => {
                let a = eval(left, entry.frame, &self.cells, self.builtins)?;
                let b = eval(right, entry.frame, &self.cells, self.builtins)?;
                Ok(compare(a, b).is_some_and(|ord| op.holds(ord)))
            }

            Goal::TypeCheck { kind, term } => {
                let (resolved, _) = self.resolve_term(term, entry.frame);
                Ok(matches!(
                    (kind, resolved.as_ref()),
                    (TypeKind::Integer, Term::Int(_)) | (TypeKind::Float, Term::Float(_))
                ))
            }

            Goal::Conjunction { left, right } => {
                let r = self.runtime_goal(right, entry.frame, entry.barrier)?;
                let l = self.runtime_goal(left, entry.frame, entry.barrier)?;
                self.goals.push(r);
                self.goals.push(l);
                Ok(true)
            }

            Goal::Disjunction { left, .. } => {
                let l = self.runtime_goal(left, entry.frame, entry.barrier)?;
                self.choices.push(Choice {
                    goals: self.goals.clone(),
                    trail_mark: self.trail.mark(),
                    cells_mark: self.cells.len(),
                    alt: Alternative::Disjunct {
                        entry: entry.clone(),
                    },
                });
                tracer.choice_point();
                self.goals.push(l);
                Ok(true)
            }

            Goal::Call { goal } => {
                let g = self.runtime_goal(goal, entry.frame, entry.barrier)?;
                self.goals.push(g);
                Ok(true)
            }

            Goal::User(_) => self.solve_user(entry, tracer),
        }
    }

    /// Resolve a user goal against the knowledge base. A predicate with no
    /// clauses simply fails.
    fn solve_user<T: Tracer>(
        &mut self,
        entry: GoalEntry,
        tracer: &mut T,
    ) -> Result<bool, ResolveError> {
        let indicator = match entry.goal.as_ref() {
            Goal::User(term) => term.indicator(),
            _ => unreachable!("solve_user on a non-user goal"),
        };
        let Some((name, arity)) = indicator else {
            return Err(ResolveError::NotCallable);
        };

        let db = self.db;
        let clauses = db.clauses(name, arity);
        tracer.call(name, arity, clauses.len());
        self.try_clauses(entry, clauses, 0, tracer)
    }

    /// Try candidate clauses from `start` in declaration order. The first
    /// whose head unifies gets its body pushed; a choice point is left
    /// behind if candidates remain.
    fn try_clauses<T: Tracer>(
        &mut self,
        entry: GoalEntry,
        clauses: &'p [Rc<CompiledClause>],
        start: usize,
        tracer: &mut T,
    ) -> Result<bool, ResolveError> {
        for index in start..clauses.len() {
            let clause = &clauses[index];
            let trail_mark = self.trail.mark();
            let cells_mark = self.cells.len();
            let base = self.cells.alloc_frame(&clause.slots)?;
            let head = clause
                .head
                .as_ref()
                .expect("knowledge base clause without head");

            let goal_term = match entry.goal.as_ref() {
                Goal::User(term) => term,
                _ => unreachable!("clause alternatives for a non-user goal"),
            };
            if !self.unifier().unify(goal_term, entry.frame, head, base) {
                self.trail.undo_to(trail_mark, &mut self.cells);
                self.cells.truncate(cells_mark);
                continue;
            }

            tracer.enter_clause(index);
            // cut inside the body prunes back to this height, removing the
            // choice point pushed just below as well
            let barrier = self.choices.len();
            if index + 1 < clauses.len() {
                self.choices.push(Choice {
                    goals: self.goals.clone(),
                    trail_mark,
                    cells_mark,
                    alt: Alternative::Clauses {
                        entry: entry.clone(),
                        clauses,
                        next: index + 1,
                    },
                });
                tracer.choice_point();
            }
            for goal in clause.body.iter().rev() {
                self.goals.push(GoalEntry {
                    goal: goal.clone(),
                    frame: base,
                    barrier,
                });
            }
            return Ok(true);
        }

        Ok(false)
    }

    /// Fall back to the most recent live choice point. `Ok(false)` when
    /// none is left.
    fn backtrack<T: Tracer>(&mut self, tracer: &mut T) -> Result<bool, ResolveError> {
        loop {
            let Some(choice) = self.choices.pop() else {
                return Ok(false);
            };
            tracer.backtrack();
            self.trail.undo_to(choice.trail_mark, &mut self.cells);
            self.cells.truncate(choice.cells_mark);
            self.goals = choice.goals;

            match choice.alt {
                Alternative::Clauses {
                    entry,
                    clauses,
                    next,
                } => {
                    if self.try_clauses(entry, clauses, next, tracer)? {
                        return Ok(true);
                    }
                }
                Alternative::Disjunct { entry } => {
                    let right = match entry.goal.as_ref() {
                        Goal::Disjunction { right, .. } => right,
                        _ => unreachable!("disjunct choice without a disjunction goal"),
                    };
                    let g = self.runtime_goal(right, entry.frame, entry.barrier)?;
                    self.goals.push(g);
                    return Ok(true);
                }
            }
        }
    }

    /// Wrap a runtime-constructed goal through the built-in transform
    /// before it can be pushed.
    fn runtime_goal(
        &self,
        term: &Term,
        frame: u32,
        barrier: usize,
    ) -> Result<GoalEntry, ResolveError> {
        let (resolved, frame) = self.resolve_term(term, frame);
        let goal = self
            .builtins
            .transform(resolved.as_ref())
            .ok_or(ResolveError::NotCallable)?;
        Ok(GoalEntry {
            goal: Rc::new(goal),
            frame,
            barrier,
        })
    }

    /// Dereference a term to its binding: follows bound slots and returns
    /// the final term with the frame it resolves under.
    fn resolve_term(&self, term: &Term, frame: u32) -> (Rc<Term>, u32) {
        let mut current = Rc::new(term.clone());
        let mut frame = frame;
        loop {
            let Term::Slot { slot, .. } = current.as_ref() else {
                return (current, frame);
            };
            match self.cells.value(frame + *slot as u32) {
                Some(bound) => {
                    let bound = bound.clone();
                    current = bound.term;
                    frame = bound.frame;
                }
                None => return (current, frame),
            }
        }
    }

    fn read_answer(&self) -> Result<Vec<(Symbol, Term)>, ResolveError> {
        self.query_vars
            .iter()
            .map(|&(name, cell)| Ok((name, reify(&self.cells, cell, 0)?)))
            .collect()
    }

    fn unifier(&mut self) -> Unifier<'_> {
        Unifier {
            cells: &mut self.cells,
            trail: &mut self.trail,
        }
    }
}
