//! Parsed and compiled clause forms.

use std::rc::Rc;

use crate::goal::Goal;
use crate::interner::Symbol;
use crate::term::Term;

/// A parsed clause: an optional head and a conjunctive body.
///
/// A clause with no head is a query; a clause with a head and an empty body
/// is a fact.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub head: Option<Term>,
    pub body: Vec<Term>,
}

impl Clause {
    pub fn fact(head: Term) -> Self {
        Self {
            head: Some(head),
            body: Vec::new(),
        }
    }

    pub fn rule(head: Term, body: Vec<Term>) -> Self {
        Self {
            head: Some(head),
            body,
        }
    }

    pub fn query(body: Vec<Term>) -> Self {
        Self { head: None, body }
    }

    #[inline]
    pub fn is_query(&self) -> bool {
        self.head.is_none()
    }
}

/// A parsed source text: clauses in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sentence {
    pub clauses: Vec<Clause>,
}

/// The source variable a stack slot was allocated for.
///
/// Used to initialize frame cells and to render answer bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInfo {
    pub name: Symbol,
    pub anonymous: bool,
}

/// A clause after compilation: every variable is a numbered slot and every
/// body element is a built-in dispatch node.
///
/// `slots` is ordered by first occurrence; its length is the stack size —
/// the number of binding cells one activation of this clause needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClause {
    pub head: Option<Term>,
    pub body: Vec<Rc<Goal>>,
    pub slots: Vec<SlotInfo>,
}

impl CompiledClause {
    #[inline]
    pub fn stack_size(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_query(&self) -> bool {
        self.head.is_none()
    }

    /// The (name, arity) the knowledge base indexes this clause under.
    pub fn indicator(&self) -> Option<(Symbol, usize)> {
        self.head.as_ref().and_then(Term::indicator)
    }
}
