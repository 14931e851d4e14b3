//! The term representation.
//!
//! Terms come out of the parser with plain `Var` nodes; the clause compiler
//! rewrites every variable into a `Slot` numbered within its clause. After
//! compilation a term is structurally immutable — bindings live in the
//! resolver's cell arena, never inside the term itself. A term containing
//! slots is only meaningful together with a frame base that says which run
//! of cells those slots resolve against.

use crate::interner::{Names, Symbol};

/// Name of the list cons functor, `'.'/2`.
pub const CONS: &str = ".";
/// Name of the empty-list atom.
pub const NIL: &str = "[]";

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A source-level variable. Only appears before compilation.
    Var { name: Symbol, anonymous: bool },
    /// A stack-slot variable: binding storage is cell `frame + slot` of the
    /// activation the term is evaluated under.
    Slot {
        name: Symbol,
        anonymous: bool,
        slot: usize,
    },
    /// A named term with ordered arguments; a 0-arity functor is an atom.
    Functor { name: Symbol, args: Vec<Term> },
    Int(i64),
    Float(f64),
}

impl Term {
    pub fn atom(name: Symbol) -> Self {
        Term::Functor {
            name,
            args: Vec::new(),
        }
    }

    pub fn functor(name: Symbol, args: Vec<Term>) -> Self {
        Term::Functor { name, args }
    }

    pub fn var(name: Symbol) -> Self {
        Term::Var {
            name,
            anonymous: false,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Term::Functor { args, .. } if args.is_empty())
    }

    /// Atoms and compound terms are callable; variables and numbers are not.
    pub fn is_callable(&self) -> bool {
        matches!(self, Term::Functor { .. })
    }

    /// The (name, arity) pair of a callable term.
    pub fn indicator(&self) -> Option<(Symbol, usize)> {
        match self {
            Term::Functor { name, args } => Some((*name, args.len())),
            _ => None,
        }
    }

    /// Display adapter; resolves symbols through `names`.
    pub fn display<'a>(&'a self, names: &'a Names) -> TermDisplay<'a> {
        TermDisplay { term: self, names }
    }
}

/// Renders a term in source syntax: lists fold back to bracket notation,
/// atoms needing quotes get them, floats always carry a decimal point.
pub struct TermDisplay<'a> {
    term: &'a Term,
    names: &'a Names,
}

impl std::fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_term(f, self.term, self.names)
    }
}

fn write_term(f: &mut std::fmt::Formatter<'_>, term: &Term, names: &Names) -> std::fmt::Result {
    match term {
        Term::Var { name, anonymous } | Term::Slot { name, anonymous, .. } => {
            if *anonymous {
                write!(f, "_")
            } else {
                write!(f, "{}", names.resolve_variable(*name))
            }
        }
        Term::Int(i) => write!(f, "{i}"),
        // {:?} keeps the decimal point on round floats (2.0, not 2)
        Term::Float(x) => write!(f, "{x:?}"),
        Term::Functor { name, args } => {
            if args.len() == 2 && names.resolve_functor(*name) == CONS {
                return write_list(f, args, names);
            }
            write_atom(f, names.resolve_functor(*name))?;
            if args.is_empty() {
                return Ok(());
            }
            write!(f, "(")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_term(f, arg, names)?;
            }
            write!(f, ")")
        }
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, cons: &[Term], names: &Names) -> std::fmt::Result {
    write!(f, "[")?;
    write_term(f, &cons[0], names)?;
    let mut tail = &cons[1];
    loop {
        match tail {
            Term::Functor { name, args }
                if args.len() == 2 && names.resolve_functor(*name) == CONS =>
            {
                write!(f, ", ")?;
                write_term(f, &args[0], names)?;
                tail = &args[1];
            }
            Term::Functor { name, args }
                if args.is_empty() && names.resolve_functor(*name) == NIL =>
            {
                break;
            }
            other => {
                write!(f, " | ")?;
                write_term(f, other, names)?;
                break;
            }
        }
    }
    write!(f, "]")
}

fn write_atom(f: &mut std::fmt::Formatter<'_>, name: &str) -> std::fmt::Result {
    if needs_quotes(name) {
        write!(f, "'")?;
        for c in name.chars() {
            match c {
                '\'' => write!(f, "\\'")?,
                '\\' => write!(f, "\\\\")?,
                _ => write!(f, "{c}")?,
            }
        }
        write!(f, "'")
    } else {
        write!(f, "{name}")
    }
}

/// Atoms that would not lex back as a single atom token get quoted.
fn needs_quotes(name: &str) -> bool {
    const SYMBOLIC: &[&str] = &[
        "[]", ".", "!", ";", ",", "=", "\\=", "is", "mod", "<", ">", "=<", ">=", "+", "-", "*",
        "/", ":-", "?-",
    ];
    if SYMBOLIC.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {
            !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => true,
    }
}
