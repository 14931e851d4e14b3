//! Compiler error types.

use std::ops::Range;

/// A syntax error with the byte span it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character")]
    UnexpectedCharacter { span: Range<usize> },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        span: Range<usize>,
        expected: &'static str,
        found: String,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        span: Range<usize>,
        expected: &'static str,
    },

    #[error("number out of range")]
    NumberOutOfRange { span: Range<usize> },
}

impl ParseError {
    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::UnexpectedCharacter { span }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span, .. }
            | ParseError::NumberOutOfRange { span } => span.clone(),
        }
    }
}

/// A structurally malformed clause.
///
/// The compiler never fails on semantic grounds; these cover the shapes a
/// clause is not allowed to have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A body element that is not an atom or compound term.
    #[error("clause body element is not callable")]
    NotCallable,

    /// A clause head that is not an atom or compound term.
    #[error("clause head is not a functor")]
    NonFunctorHead,

    /// A query handed to the knowledge base.
    #[error("cannot load a clause without a head")]
    HeadlessProgram,

    /// A program clause handed to the resolver as a query.
    #[error("expected a query, found a program clause")]
    NotAQuery,
}
