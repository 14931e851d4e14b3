//! `horn run` — consult a file and execute its directives.

use horn_vm::{Engine, NoopTracer, PrintTracer};

use super::{consult_file, format_answer};
use crate::cli::RunParams;

pub fn run(params: RunParams) -> i32 {
    let mut engine = Engine::new();
    let directives = match consult_file(&mut engine, &params.file, params.color) {
        Ok(directives) => directives,
        Err(code) => return code,
    };

    let mut failed = false;
    for directive in &directives {
        let mut solutions = match engine.resolve(directive) {
            Ok(solutions) => solutions,
            Err(error) => {
                eprintln!("error: {error}");
                failed = true;
                continue;
            }
        };

        let mut tracer = PrintTracer::new(engine.names());
        let mut noop = NoopTracer;
        let next = if params.trace {
            solutions.next_with(&mut tracer)
        } else {
            solutions.next_with(&mut noop)
        };

        match next {
            Some(Ok(answer)) => println!("{}", format_answer(&answer, &solutions)),
            Some(Err(error)) => {
                eprintln!("error: {error}");
                failed = true;
            }
            None => {
                println!("false");
                failed = true;
            }
        }
    }

    if failed { 1 } else { 0 }
}
