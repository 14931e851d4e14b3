mod cli;
mod commands;

use cli::{QueryParams, ReplParams, RunParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let code = match matches.subcommand() {
        Some(("repl", m)) => {
            let params = ReplParams::from_matches(m);
            commands::repl::run(params)
        }
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params)
        }
        Some(("query", m)) => {
            let params = QueryParams::from_matches(m);
            commands::query::run(params)
        }
        _ => unreachable!("clap should have caught this"),
    };

    std::process::exit(code);
}
