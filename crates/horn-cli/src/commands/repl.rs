//! `horn repl` — the interactive query loop.
//!
//! Input buffers line by line until a clause terminator arrives, so
//! multi-line queries work. After each solution, `;` asks for the next
//! one; anything else moves on.

use std::io::{BufRead, Write};

use horn_vm::{Engine, EngineError};

use super::format_answer;
use crate::cli::ReplParams;

pub fn run(params: ReplParams) -> i32 {
    let mut engine = Engine::new();
    for file in &params.files {
        if let Err(code) = super::consult_file(&mut engine, file, params.color) {
            return code;
        }
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { "?- " } else { "|    " };
        print!("{prompt}");
        let _ = std::io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            return 0;
        };
        buffer.push_str(&line);
        buffer.push('\n');

        // keep reading until the clause terminator shows up
        if !buffer.trim_end().ends_with('.') {
            continue;
        }
        let text = std::mem::take(&mut buffer);
        if text.trim() == "." {
            continue;
        }

        match engine.query(&text) {
            Ok(mut solutions) => {
                let mut any = false;
                loop {
                    match solutions.next() {
                        Some(Ok(answer)) => {
                            any = true;
                            println!("{}", format_answer(&answer, &solutions));
                            if !wants_more(&mut lines) {
                                break;
                            }
                        }
                        Some(Err(error)) => {
                            eprintln!("error: {error}");
                            break;
                        }
                        None => {
                            if !any {
                                println!("false");
                            }
                            break;
                        }
                    }
                }
            }
            Err(EngineError::Parse(error)) => {
                eprintln!(
                    "{}",
                    horn_compiler::render_parse_error(
                        &error,
                        &text,
                        None,
                        params.color.should_colorize(),
                    )
                );
            }
            Err(error) => eprintln!("error: {error}"),
        }
    }
}

/// `;` requests the next solution.
fn wants_more(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> bool {
    print!("; for more: ");
    let _ = std::io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => line.trim_start().starts_with(';'),
        _ => false,
    }
}
