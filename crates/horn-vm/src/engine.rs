//! The engine facade: a knowledge base plus everything needed to compile
//! and prove queries against it.

use horn_compiler::{CompileError, ParseError, compile, parse_program, parse_query};
use horn_core::{Builtins, Clause, CompiledClause, Names};

use crate::database::Database;
use crate::error::{EngineError, ResolveError};
use crate::machine::{Answer, Limits, Machine, NoopTracer, Tracer};

/// Clause library loaded by `reset`, written in the logic language itself.
const LIBRARY: &str = include_str!("builtins.pl");

/// One interner, one built-in table, one knowledge base.
pub struct Engine {
    names: Names,
    builtins: Builtins,
    db: Database,
    limits: Limits,
}

impl Engine {
    /// An engine with the clause library loaded.
    pub fn new() -> Self {
        let mut names = Names::new();
        let builtins = Builtins::new(&mut names);
        let mut engine = Self {
            names,
            builtins,
            db: Database::new(),
            limits: Limits::default(),
        };
        engine.reset();
        engine
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Clear the knowledge base and reload the clause library.
    pub fn reset(&mut self) {
        self.db.clear();
        let sentence =
            parse_program(LIBRARY, &mut self.names).expect("clause library parses");
        for clause in sentence.clauses {
            let compiled = compile(&clause, &self.builtins).expect("clause library compiles");
            self.db.add(compiled).expect("clause library has no queries");
        }
    }

    /// Compile a parsed clause against this engine's built-in table.
    pub fn compile(&self, clause: &Clause) -> Result<CompiledClause, CompileError> {
        compile(clause, &self.builtins)
    }

    /// Add a compiled program clause to the knowledge base.
    pub fn load(&mut self, clause: CompiledClause) -> Result<(), CompileError> {
        self.db.add(clause)
    }

    /// Parse a program text and load its program clauses in order.
    ///
    /// `?- Goal.` sentences are not executed here; they come back for the
    /// caller to run (or ignore).
    pub fn consult(&mut self, source: &str) -> Result<Vec<Clause>, EngineError> {
        let sentence = parse_program(source, &mut self.names)?;
        let mut directives = Vec::new();
        for clause in sentence.clauses {
            if clause.is_query() {
                directives.push(clause);
            } else {
                let compiled = compile(&clause, &self.builtins)?;
                self.db.add(compiled)?;
            }
        }
        Ok(directives)
    }

    /// Prove a query clause, yielding one [`Answer`] per solution.
    pub fn resolve(&self, query: &Clause) -> Result<Solutions<'_>, EngineError> {
        if !query.is_query() {
            return Err(CompileError::NotAQuery.into());
        }
        let compiled = compile(query, &self.builtins)?;
        let machine = Machine::new(&self.db, &self.builtins, &compiled, self.limits)?;
        Ok(Solutions {
            machine,
            names: &self.names,
            done: false,
        })
    }

    /// Parse a query text without running it.
    ///
    /// Splitting parsing from [`Engine::resolve`] lets callers keep the
    /// engine borrowed shared while the solutions stream — for example to
    /// hand a tracer the name table.
    pub fn parse_query(&mut self, source: &str) -> Result<Clause, ParseError> {
        parse_query(source, &mut self.names)
    }

    /// Parse and prove a query text.
    pub fn query(&mut self, source: &str) -> Result<Solutions<'_>, EngineError> {
        let clause = self.parse_query(source)?;
        self.resolve(&clause)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy stream of solutions.
///
/// Each `next` resumes the search from the preserved choice points;
/// dropping the stream releases all frames and trails. After a typed
/// error the stream is exhausted.
pub struct Solutions<'e> {
    machine: Machine<'e>,
    names: &'e Names,
    done: bool,
}

impl std::fmt::Debug for Solutions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solutions").field("done", &self.done).finish()
    }
}

impl Solutions<'_> {
    /// The engine's name table, for rendering answers.
    pub fn names(&self) -> &Names {
        self.names
    }

    /// Advance with an explicit tracer.
    pub fn next_with<T: Tracer>(&mut self, tracer: &mut T) -> Option<Result<Answer, ResolveError>> {
        if self.done {
            return None;
        }
        match self.machine.next_solution(tracer) {
            Ok(Some(bindings)) => Some(Ok(Answer::new(bindings))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = Result<Answer, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with(&mut NoopTracer)
    }
}
