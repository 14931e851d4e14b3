//! Subcommand implementations.

pub mod query;
pub mod repl;
pub mod run;

use std::path::Path;

use horn_core::Clause;
use horn_vm::{Answer, Engine, EngineError, Solutions};

use crate::cli::ColorChoice;

/// Read and consult one file, rendering parse errors against the source.
/// Returns the file's `?-` directives.
pub(crate) fn consult_file(
    engine: &mut Engine,
    path: &Path,
    color: ColorChoice,
) -> Result<Vec<Clause>, i32> {
    let display = path.display().to_string();
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read {display}: {error}");
            return Err(2);
        }
    };

    match engine.consult(&source) {
        Ok(directives) => Ok(directives),
        Err(EngineError::Parse(error)) => {
            eprintln!(
                "{}",
                horn_compiler::render_parse_error(
                    &error,
                    &source,
                    Some(&display),
                    color.should_colorize(),
                )
            );
            Err(2)
        }
        Err(error) => {
            eprintln!("error: {display}: {error}");
            Err(2)
        }
    }
}

/// Render one answer the way the REPL prints it: `true` for an empty
/// binding set, otherwise comma-separated `Name = Term` pairs.
pub(crate) fn format_answer(answer: &Answer, solutions: &Solutions<'_>) -> String {
    if answer.is_empty() {
        return "true".to_owned();
    }
    answer
        .rendered(solutions.names())
        .iter()
        .map(|(name, term)| format!("{name} = {term}"))
        .collect::<Vec<_>>()
        .join(", ")
}
