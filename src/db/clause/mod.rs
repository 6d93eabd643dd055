/*!
A database of clauses.

Clauses are stored by kind, and accessed through [keys](ClauseKey):
- Unit clauses are stored as literals, and the key to a unit clause is the clause.
  The value of the atom of a unit clause is fixed at level zero.
- Binary clauses are stored as pairs of literals, and watched through [binary watches](crate::db::watches::watch_db::BinaryWatch).
- Clauses of three or more literals are stored as [DBClause]s, which maintain their own watched literals.

Each kind is split between *original* clauses, added to a context by a caller, and *addition* clauses, derived by [conflict analysis](crate::procedures::analysis).
Every addition clause is a consequence of the original clauses, and no clause is ever removed.

The database also notes whether the empty clause has been added or derived, at which point the formula is unsatisfiable regardless of further clauses.
*/

pub mod db_clause;
#[doc(hidden)]
pub mod store;

use db_clause::DBClause;

use crate::{
    db::keys::ClauseKey,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Unit clauses added to the context.
    unit_original: Vec<CLiteral>,

    /// Unit clauses derived by analysis.
    unit_addition: Vec<CLiteral>,

    /// Binary clauses added to the context.
    binary_original: Vec<CClause>,

    /// Binary clauses derived by analysis.
    binary_addition: Vec<CClause>,

    /// Long clauses added to the context.
    original: Vec<DBClause>,

    /// Long clauses derived by analysis.
    addition: Vec<DBClause>,

    /// Whether the empty clause is known to follow from the original clauses.
    empty_clause: bool,
}

impl ClauseDB {
    /// The literals of the clause with the given key.
    pub fn get(&self, key: &ClauseKey) -> Result<&[CLiteral], err::ClauseDBError> {
        let clause = match key {
            ClauseKey::OriginalUnit(literal) => self
                .unit_original
                .iter()
                .find(|unit| *unit == literal)
                .map(std::slice::from_ref),
            ClauseKey::AdditionUnit(literal) => self
                .unit_addition
                .iter()
                .find(|unit| *unit == literal)
                .map(std::slice::from_ref),
            ClauseKey::OriginalBinary(index) => {
                self.binary_original.get(*index as usize).map(|c| c.as_slice())
            }
            ClauseKey::AdditionBinary(index) => {
                self.binary_addition.get(*index as usize).map(|c| c.as_slice())
            }
            ClauseKey::Original(index) => self.original.get(*index as usize).map(|c| &c[..]),
            ClauseKey::Addition(index) => self.addition.get(*index as usize).map(|c| &c[..]),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// The long clause with the given key, mutably.
    pub fn get_long_mut(&mut self, key: &ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        let clause = match key {
            ClauseKey::Original(index) => self.original.get_mut(*index as usize),
            ClauseKey::Addition(index) => self.addition.get_mut(*index as usize),
            _ => return Err(err::ClauseDBError::CorruptList),
        };
        clause.ok_or(err::ClauseDBError::Missing)
    }

    /// Notes the empty clause follows from the original clauses.
    pub fn note_empty_clause(&mut self) {
        log::info!(target: crate::misc::log::targets::CLAUSE_DB, "Empty clause noted");
        self.empty_clause = true;
    }

    /// Whether the empty clause follows from the original clauses.
    pub fn has_empty_clause(&self) -> bool {
        self.empty_clause
    }

    /// A count of original clauses, of any length.
    pub fn original_count(&self) -> usize {
        self.unit_original.len() + self.binary_original.len() + self.original.len()
    }

    /// A count of clauses derived by analysis, of any length.
    pub fn addition_count(&self) -> usize {
        self.unit_addition.len() + self.binary_addition.len() + self.addition.len()
    }

    /// An iterator over every original clause, as stored.
    ///
    /// Clauses are stored after [preprocessing](crate::builder::preprocess), and so may omit duplicate literals or literals false at level zero.
    pub fn original_clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        self.unit_original
            .iter()
            .map(std::slice::from_ref)
            .chain(self.binary_original.iter().map(|clause| clause.as_slice()))
            .chain(self.original.iter().map(|clause| &clause[..]))
    }

    /// An iterator over every clause derived by analysis.
    pub fn addition_clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        self.unit_addition
            .iter()
            .map(std::slice::from_ref)
            .chain(self.binary_addition.iter().map(|clause| clause.as_slice()))
            .chain(self.addition.iter().map(|clause| &clause[..]))
    }
}
