//! Errors that can occur while proving a query.

use horn_compiler::{CompileError, ParseError};

/// A typed runtime error; aborts the current query and leaves the
/// knowledge base intact. Plain goal failure is not an error — it
/// backtracks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Arithmetic met a functor that is not an operator, or a non-numeric
    /// constant.
    #[error("arithmetic: operand is not a number")]
    NotANumber,

    /// Arithmetic requires ground operands.
    #[error("arithmetic: unbound variable in expression")]
    UnboundArithmetic,

    #[error("arithmetic: division by zero")]
    DivisionByZero,

    /// `call/1` (or a disjunction branch) on a variable or a number.
    #[error("goal is not callable")]
    NotCallable,

    #[error("proof step limit exceeded")]
    StepLimit,

    /// The binding-cell arena hit its ceiling while allocating a frame.
    #[error("binding store exhausted")]
    FrameOverflow,

    #[error("term nesting limit exceeded while reading a solution")]
    TermDepth,
}

/// Umbrella error for the text-level engine entry points.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
