//! Command definitions and argument extraction.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};


/// Color output mode.
#[derive(Clone, Copy, Debug, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_str(value: &str) -> Self {
        match value {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}

fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("Program files to consult")
}

fn consult_arg() -> Arg {
    Arg::new("consult")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("Consult FILE before running the goal")
}

fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print one line per proof-search event to stderr")
}

fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

pub fn build_cli() -> Command {
    Command::new("horn")
        .about("A Prolog-flavored logic programming engine")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("repl")
                .about("Consult files, then answer queries interactively")
                .arg(files_arg())
                .arg(color_arg()),
        )
        .subcommand(
            Command::new("run")
                .about("Consult a file and execute its ?- directives in order")
                .arg(
                    Arg::new("file")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .required(true)
                        .help("Program file to run"),
                )
                .arg(trace_arg())
                .arg(color_arg()),
        )
        .subcommand(
            Command::new("query")
                .about("Prove a single goal against consulted files")
                .arg(
                    Arg::new("goal")
                        .value_name("GOAL")
                        .required(true)
                        .help("The goal to prove, e.g. \"append(X, Y, [1, 2])\""),
                )
                .arg(consult_arg())
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Print every solution instead of the first"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit solutions as a JSON array"),
                )
                .arg(trace_arg())
                .arg(color_arg()),
        )
}

fn color_of(matches: &ArgMatches) -> ColorChoice {
    matches
        .get_one::<String>("color")
        .map(|v| ColorChoice::from_str(v))
        .unwrap_or_default()
}

pub struct ReplParams {
    pub files: Vec<PathBuf>,
    pub color: ColorChoice,
}

impl ReplParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            files: matches
                .get_many::<PathBuf>("files")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            color: color_of(matches),
        }
    }
}

pub struct RunParams {
    pub file: PathBuf,
    pub trace: bool,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            file: matches
                .get_one::<PathBuf>("file")
                .expect("clap enforces FILE")
                .clone(),
            trace: matches.get_flag("trace"),
            color: color_of(matches),
        }
    }
}

pub struct QueryParams {
    pub goal: String,
    pub files: Vec<PathBuf>,
    pub all: bool,
    pub json: bool,
    pub trace: bool,
    pub color: ColorChoice,
}

impl QueryParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            goal: matches
                .get_one::<String>("goal")
                .expect("clap enforces GOAL")
                .clone(),
            files: matches
                .get_many::<PathBuf>("consult")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            all: matches.get_flag("all"),
            json: matches.get_flag("json"),
            trace: matches.get_flag("trace"),
            color: color_of(matches),
        }
    }
}
