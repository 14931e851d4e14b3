//! Built-in dispatch nodes.
//!
//! Compiled clause bodies and the resolver's goal stack contain only these
//! nodes. Each recognized (name, arity) pair gets its own variant so the
//! resolver dispatches on the tag; everything else is `User`, which carries
//! the original functor for head matching against the knowledge base.

use crate::term::Term;

/// Numeric comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "=<",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    /// Whether the comparison holds for the given ordering of left vs right.
    pub fn holds(self, ord: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            CompareOp::Lt => ord == Less,
            CompareOp::Le => ord != Greater,
            CompareOp::Gt => ord == Greater,
            CompareOp::Ge => ord != Less,
        }
    }
}

/// Dynamic type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Integer,
    Float,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Integer => "integer",
            TypeKind::Float => "float",
        }
    }
}

/// A goal in executable form.
#[derive(Debug, Clone, PartialEq)]
pub enum Goal {
    /// `true/0` — always succeeds.
    True,
    /// `fail/0` — always fails.
    Fail,
    /// `!/0` — prune alternatives back to the enclosing call.
    Cut,
    /// `=/2` — unify both arguments.
    Unify { left: Term, right: Term },
    /// `\=/2` — succeed iff unification would fail; never retains bindings.
    NotUnify { left: Term, right: Term },
    /// `is/2` — evaluate `expr` numerically, unify with `result`.
    Is { result: Term, expr: Term },
    /// `</2`, `=</2`, `>/2`, `>=/2` — evaluate both sides, compare.
    Compare { op: CompareOp, left: Term, right: Term },
    /// `integer/1`, `float/1` — dereference and check the tag.
    TypeCheck { kind: TypeKind, term: Term },
    /// `,/2` on a runtime-constructed goal (clause bodies are pre-flattened).
    Conjunction { left: Term, right: Term },
    /// `;/2` — try `left`, leave a choice point for `right`.
    Disjunction { left: Term, right: Term },
    /// `call/1` — dereference the argument and run it as a goal.
    Call { goal: Term },
    /// Anything else: resolve the functor against the knowledge base.
    User(Term),
}
