//! The built-in registry: (name, arity) to dispatch node.
//!
//! One instance lives in the engine; the compiler runs every clause body
//! element through [`Builtins::transform`], and the resolver runs every goal
//! it constructs at runtime (disjunction branches, `call/1` arguments)
//! through the same function before pushing it on the goal stack.

use std::collections::HashMap;

use crate::goal::{CompareOp, Goal, TypeKind};
use crate::interner::{Names, Symbol};
use crate::term::Term;

/// Arithmetic operators recognized inside `is/2` and comparison expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    True,
    Fail,
    Cut,
    Unify,
    NotUnify,
    Is,
    Compare(CompareOp),
    TypeCheck(TypeKind),
    Conjunction,
    Disjunction,
    Call,
}

/// The built-in lookup table, keyed by (name, arity).
#[derive(Debug)]
pub struct Builtins {
    goals: HashMap<(Symbol, usize), Kind>,
    arith: HashMap<(Symbol, usize), ArithOp>,
}

impl Builtins {
    /// Intern the recognized names and build the table.
    pub fn new(names: &mut Names) -> Self {
        let mut goals = HashMap::new();
        let mut add = |n: &mut Names, name: &str, arity: usize, kind: Kind| {
            goals.insert((n.functor(name), arity), kind);
        };

        add(names, "true", 0, Kind::True);
        add(names, "fail", 0, Kind::Fail);
        add(names, "!", 0, Kind::Cut);
        add(names, "=", 2, Kind::Unify);
        add(names, "\\=", 2, Kind::NotUnify);
        add(names, "is", 2, Kind::Is);
        add(names, "<", 2, Kind::Compare(CompareOp::Lt));
        add(names, "=<", 2, Kind::Compare(CompareOp::Le));
        add(names, ">", 2, Kind::Compare(CompareOp::Gt));
        add(names, ">=", 2, Kind::Compare(CompareOp::Ge));
        add(names, "integer", 1, Kind::TypeCheck(TypeKind::Integer));
        add(names, "float", 1, Kind::TypeCheck(TypeKind::Float));
        add(names, ",", 2, Kind::Conjunction);
        add(names, ";", 2, Kind::Disjunction);
        add(names, "call", 1, Kind::Call);

        let mut arith = HashMap::new();
        arith.insert((names.functor("+"), 2), ArithOp::Add);
        arith.insert((names.functor("-"), 2), ArithOp::Sub);
        arith.insert((names.functor("*"), 2), ArithOp::Mul);
        arith.insert((names.functor("/"), 2), ArithOp::Div);
        arith.insert((names.functor("mod"), 2), ArithOp::Mod);
        arith.insert((names.functor("-"), 1), ArithOp::Neg);

        Self { goals, arith }
    }

    /// Rewrite a callable term into its dispatch node.
    ///
    /// Unrecognized functors become `Goal::User`; non-callable terms
    /// (variables, numbers) return `None`.
    pub fn transform(&self, term: &Term) -> Option<Goal> {
        let Term::Functor { name, args } = term else {
            return None;
        };

        let Some(kind) = self.goals.get(&(*name, args.len())) else {
            return Some(Goal::User(term.clone()));
        };

        Some(match kind {
            Kind::True => Goal::True,
            Kind::Fail => Goal::Fail,
            Kind::Cut => Goal::Cut,
            Kind::Unify => Goal::Unify {
                left: args[0].clone(),
                right: args[1].clone(),
            },
            Kind::NotUnify => Goal::NotUnify {
                left: args[0].clone(),
                right: args[1].clone(),
            },
            Kind::Is => Goal::Is {
                result: args[0].clone(),
                expr: args[1].clone(),
            },
            Kind::Compare(op) => Goal::Compare {
                op: *op,
                left: args[0].clone(),
                right: args[1].clone(),
            },
            Kind::TypeCheck(kind) => Goal::TypeCheck {
                kind: *kind,
                term: args[0].clone(),
            },
            Kind::Conjunction => Goal::Conjunction {
                left: args[0].clone(),
                right: args[1].clone(),
            },
            Kind::Disjunction => Goal::Disjunction {
                left: args[0].clone(),
                right: args[1].clone(),
            },
            Kind::Call => Goal::Call {
                goal: args[0].clone(),
            },
        })
    }

    /// Look up an arithmetic operator by (name, arity).
    pub fn arith_op(&self, name: Symbol, arity: usize) -> Option<ArithOp> {
        self.arith.get(&(name, arity)).copied()
    }
}
