//! `horn query` — prove a single goal.

use horn_vm::{Engine, PrintTracer, ResolveError};

use super::{consult_file, format_answer};
use crate::cli::QueryParams;

pub fn run(params: QueryParams) -> i32 {
    let mut engine = Engine::new();
    for file in &params.files {
        if let Err(code) = consult_file(&mut engine, file, params.color) {
            return code;
        }
    }

    let clause = match engine.parse_query(&params.goal) {
        Ok(clause) => clause,
        Err(error) => {
            eprintln!(
                "{}",
                horn_compiler::render_parse_error(
                    &error,
                    &params.goal,
                    None,
                    params.color.should_colorize(),
                )
            );
            return 2;
        }
    };

    let mut solutions = match engine.resolve(&clause) {
        Ok(solutions) => solutions,
        Err(error) => {
            eprintln!("error: {error}");
            return 2;
        }
    };

    let mut tracer = PrintTracer::new(engine.names());
    let mut noop = horn_vm::NoopTracer;
    let mut answers = Vec::new();
    let mut runtime_error: Option<ResolveError> = None;

    loop {
        let next = if params.trace {
            solutions.next_with(&mut tracer)
        } else {
            solutions.next_with(&mut noop)
        };
        match next {
            Some(Ok(answer)) => {
                answers.push(answer);
                if !params.all {
                    break;
                }
            }
            Some(Err(error)) => {
                runtime_error = Some(error);
                break;
            }
            None => break,
        }
    }

    if params.json {
        let rendered: Vec<serde_json::Value> = answers
            .iter()
            .map(|answer| {
                serde_json::Value::Object(
                    answer
                        .rendered(solutions.names())
                        .into_iter()
                        .map(|(name, term)| (name, serde_json::Value::String(term)))
                        .collect(),
                )
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rendered).expect("answers serialize")
        );
    } else {
        for answer in &answers {
            println!("{}", format_answer(answer, &solutions));
        }
        if answers.is_empty() && runtime_error.is_none() {
            println!("false");
        }
    }

    if let Some(error) = runtime_error {
        eprintln!("error: {error}");
        return 1;
    }
    if answers.is_empty() { 1 } else { 0 }
}
