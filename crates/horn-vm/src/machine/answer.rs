//! Reading solutions back out of the machine.

use indexmap::IndexMap;

use horn_core::{Names, Symbol, Term};

use super::cells::{CellArena, CellId};
use crate::error::ResolveError;

/// Nesting ceiling when reading a term back out. Without an occurs check a
/// binding can be cyclic, and reification is where a cycle would otherwise
/// hang.
const MAX_DEPTH: usize = 8192;

/// Fully dereference a cell into a frame-free term. An unbound cell reads
/// back as a variable carrying the cell's source name.
pub(crate) fn reify(cells: &CellArena, cell: CellId, depth: usize) -> Result<Term, ResolveError> {
    if depth > MAX_DEPTH {
        return Err(ResolveError::TermDepth);
    }
    match cells.value(cell) {
        None => {
            let cell = cells.cell(cell);
            Ok(Term::Var {
                name: cell.name,
                anonymous: cell.anonymous,
            })
        }
        Some(bound) => reify_term(cells, bound.term.as_ref(), bound.frame, depth + 1),
    }
}

fn reify_term(
    cells: &CellArena,
    term: &Term,
    frame: u32,
    depth: usize,
) -> Result<Term, ResolveError> {
    if depth > MAX_DEPTH {
        return Err(ResolveError::TermDepth);
    }
    match term {
        Term::Slot { slot, .. } => reify(cells, frame + *slot as u32, depth + 1),
        Term::Functor { name, args } => Ok(Term::Functor {
            name: *name,
            args: args
                .iter()
                .map(|arg| reify_term(cells, arg, frame, depth + 1))
                .collect::<Result<_, _>>()?,
        }),
        other => Ok(other.clone()),
    }
}

/// One solution: the query's named variables in first-occurrence order,
/// each fully dereferenced.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    bindings: IndexMap<Symbol, Term>,
}

impl Answer {
    pub(crate) fn new(bindings: Vec<(Symbol, Term)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Term)> {
        self.bindings.iter().map(|(&name, term)| (name, term))
    }

    /// Look up a binding by variable name.
    pub fn get(&self, names: &Names, var: &str) -> Option<&Term> {
        let symbol = names.lookup_variable(var)?;
        self.bindings.get(&symbol)
    }

    /// Render every binding, in order, as (name, term) strings.
    pub fn rendered(&self, names: &Names) -> IndexMap<String, String> {
        self.bindings
            .iter()
            .map(|(&name, term)| {
                (
                    names.resolve_variable(name).to_owned(),
                    term.display(names).to_string(),
                )
            })
            .collect()
    }
}
