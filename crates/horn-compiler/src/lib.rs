#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compiler for the horn logic language.
//!
//! Three stages, each usable on its own:
//! - [`lex`]: source text to span-carrying tokens
//! - [`parse_program`] / [`parse_query`]: tokens to [`horn_core::Clause`]
//!   values via a fixed operator table
//! - [`compile`]: a clause to a [`horn_core::CompiledClause`] — every
//!   variable becomes a numbered stack slot and every body element becomes
//!   a built-in dispatch node

mod compile;
mod diagnostics;
mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod parser_tests;

pub use compile::compile;
pub use diagnostics::render_parse_error;
pub use error::{CompileError, ParseError};
pub use lexer::{Token, lex};
pub use parser::{parse_program, parse_query};
