//! Numeric evaluation for `is/2` and the comparison built-ins.
//!
//! Promotion rule: integer with integer stays integer (`/` truncates,
//! `mod` keeps the dividend's sign); any float operand promotes the result
//! to float. Division or modulo by zero fails the whole expression, for
//! floats as well as integers. Integer arithmetic wraps on overflow.

use std::cmp::Ordering;

use horn_core::{ArithOp, Builtins, Term};

use super::cells::CellArena;
use crate::error::ResolveError;

/// A fully evaluated number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn to_term(self) -> Term {
        match self {
            Num::Int(v) => Term::Int(v),
            Num::Float(v) => Term::Float(v),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Num::Int(v) => v as f64,
            Num::Float(v) => v,
        }
    }
}

/// Evaluate a term to a number, dereferencing through the cells.
pub(crate) fn eval(
    term: &Term,
    frame: u32,
    cells: &CellArena,
    builtins: &Builtins,
) -> Result<Num, ResolveError> {
    match term {
        Term::Int(v) => Ok(Num::Int(*v)),
        Term::Float(v) => Ok(Num::Float(*v)),
        Term::Slot { slot, .. } => match cells.value(frame + *slot as u32) {
            Some(bound) => eval(bound.term.as_ref(), bound.frame, cells, builtins),
            None => Err(ResolveError::UnboundArithmetic),
        },
        Term::Var { .. } => Err(ResolveError::UnboundArithmetic),
        Term::Functor { name, args } => {
            let Some(op) = builtins.arith_op(*name, args.len()) else {
                return Err(ResolveError::NotANumber);
            };
            if op == ArithOp::Neg {
                return Ok(negate(eval(&args[0], frame, cells, builtins)?));
            }
            let a = eval(&args[0], frame, cells, builtins)?;
            let b = eval(&args[1], frame, cells, builtins)?;
            apply(op, a, b)
        }
    }
}

fn negate(n: Num) -> Num {
    match n {
        Num::Int(v) => Num::Int(v.wrapping_neg()),
        Num::Float(v) => Num::Float(-v),
    }
}

fn apply(op: ArithOp, a: Num, b: Num) -> Result<Num, ResolveError> {
    if let (Num::Int(x), Num::Int(y)) = (a, b) {
        return match op {
            ArithOp::Add => Ok(Num::Int(x.wrapping_add(y))),
            ArithOp::Sub => Ok(Num::Int(x.wrapping_sub(y))),
            ArithOp::Mul => Ok(Num::Int(x.wrapping_mul(y))),
            ArithOp::Div if y == 0 => Err(ResolveError::DivisionByZero),
            ArithOp::Div => Ok(Num::Int(x.wrapping_div(y))),
            ArithOp::Mod if y == 0 => Err(ResolveError::DivisionByZero),
            ArithOp::Mod => Ok(Num::Int(x.wrapping_rem(y))),
            ArithOp::Neg => unreachable!("unary op in binary apply"),
        };
    }

    let (x, y) = (a.as_f64(), b.as_f64());
    match op {
        ArithOp::Add => Ok(Num::Float(x + y)),
        ArithOp::Sub => Ok(Num::Float(x - y)),
        ArithOp::Mul => Ok(Num::Float(x * y)),
        ArithOp::Div if y == 0.0 => Err(ResolveError::DivisionByZero),
        ArithOp::Div => Ok(Num::Float(x / y)),
        ArithOp::Mod if y == 0.0 => Err(ResolveError::DivisionByZero),
        ArithOp::Mod => Ok(Num::Float(x % y)),
        ArithOp::Neg => unreachable!("unary op in binary apply"),
    }
}

/// Compare two numbers; mixed operands compare as f64.
///
/// `None` when the comparison is undefined (NaN reached the comparison),
/// which fails the goal.
pub(crate) fn compare(a: Num, b: Num) -> Option<Ordering> {
    match (a, b) {
        (Num::Int(x), Num::Int(y)) => Some(x.cmp(&y)),
        _ => a.as_f64().partial_cmp(&b.as_f64()),
    }
}
