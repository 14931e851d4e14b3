//! String interning for functor and variable names.
//!
//! Names are converted to cheap integer handles (`Symbol`) once, at parse
//! time; everything downstream compares symbols. Functor identity is the
//! pair (name symbol, arity) — `f/1` and `f/2` share a symbol but never
//! collide because every lookup keys on the pair.

use std::collections::HashMap;

/// A lightweight handle to an interned string.
///
/// Comparing two symbols is O(1). Symbols are ordered by insertion order,
/// not lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// String interner. Deduplicates strings and hands out `Symbol`s.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<String, Symbol>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its Symbol.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.map.get(s) {
            return sym;
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), sym);
        sym
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.map.get(s).copied()
    }

    /// Resolve a Symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }

    /// Number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all interned strings with their symbols.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), s.as_str()))
    }
}

/// The two name spaces of a program: functor/atom names and variable names.
///
/// Kept separate so variable ids and functor ids grow independently; a
/// variable `foo` and an atom `foo` are unrelated. Ids are monotone for the
/// lifetime of the engine — there is no mid-query reset.
#[derive(Debug, Clone, Default)]
pub struct Names {
    functors: Interner,
    variables: Interner,
}

impl Names {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a functor or atom name.
    pub fn functor(&mut self, name: &str) -> Symbol {
        self.functors.intern(name)
    }

    /// Intern a variable name.
    pub fn variable(&mut self, name: &str) -> Symbol {
        self.variables.intern(name)
    }

    #[inline]
    pub fn resolve_functor(&self, sym: Symbol) -> &str {
        self.functors.resolve(sym)
    }

    #[inline]
    pub fn resolve_variable(&self, sym: Symbol) -> &str {
        self.variables.resolve(sym)
    }

    /// Look up a variable name without interning it.
    pub fn lookup_variable(&self, name: &str) -> Option<Symbol> {
        self.variables.get(name)
    }

    /// Look up a functor name without interning it.
    pub fn lookup_functor(&self, name: &str) -> Option<Symbol> {
        self.functors.get(name)
    }

    /// Render a predicate indicator, e.g. `append/3`.
    pub fn indicator(&self, name: Symbol, arity: usize) -> String {
        format!("{}/{}", self.functors.resolve(name), arity)
    }
}
