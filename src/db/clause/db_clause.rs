//! A struct holding a clause of three or more literals and associated metadata.
//!
//! # Watched literals
//!
//! The literals watched are the *first* literal in the clause and the literal at the position of `watch_ptr`.
//! In order to preserve this invariant, the order of literals in the clause is mutated as needed.
//!
//! - A watch *candidate* is a literal which is true, or whose atom has no value, on the current valuation.
//! - When the atom of a watched literal is valued so the literal is false, the other watched literal is moved to the first index.
//!   The index of the second watch then makes a circular sweep forward over the clause (skipping the first index) in search of a new candidate.
//!   The index is updated if some candidate is found, and remains unchanged otherwise.
//!
//! So, when no candidate is found the clause is either unit on the first literal, or conflicts with the valuation.

use std::ops::Deref;

use crate::{
    db::{
        atom::AtomDB,
        keys::ClauseKey,
        watches::{
            watch_db::{LongWatch, WatchStatus},
            Watches,
        },
    },
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

/// A clause together with some metadata.
pub struct DBClause {
    /// A key for accessing the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// The index of the second watched literal.
    watch_ptr: usize,
}

impl DBClause {
    /// Bundles a [ClauseKey] and clause into a [DBClause] and initialises watches with respect to the current valuation.
    ///
    /// The clause must contain three or more literals.
    pub fn from(key: ClauseKey, clause: CClause, atom_db: &AtomDB, watches: &mut Watches) -> Self {
        let mut db_clause = Self {
            key,
            clause,
            watch_ptr: 1,
        };
        db_clause.initialise_watches(atom_db, watches);
        db_clause
    }

    /// The key used to access the [DBClause].
    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals watched, first and second.
    pub fn watched(&self) -> (CLiteral, CLiteral) {
        (self.clause[0], self.clause[self.watch_ptr])
    }

    /// Places candidates as the watched literals, preferring earlier literals.
    ///
    /// If no candidate exists for the second watch, the second literal is watched.
    /// So, a clause learnt from analysis should place the asserted literal first and a false literal of highest level second.
    fn initialise_watches(&mut self, atom_db: &AtomDB, watches: &mut Watches) {
        if let Some(index) = self.candidate_index(0, atom_db) {
            self.clause.swap(0, index);
        }

        self.watch_ptr = self.candidate_index(1, atom_db).unwrap_or(1);

        watches.watch_long(self.clause[0], LongWatch::new(self.key));
        watches.watch_long(self.clause[self.watch_ptr], LongWatch::new(self.key));
    }

    /// The index of the first candidate at or after `from`.
    fn candidate_index(&self, from: usize, atom_db: &AtomDB) -> Option<usize> {
        self.clause
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, literal)| atom_db.literal_value(**literal) != Some(false))
            .map(|(index, _)| index)
    }

    /// On the assumption the watched literal with `atom` is now false, updates the watched literals.
    ///
    /// On success, the clause is added to the watch list of the new candidate and the status of the candidate is returned.
    /// Removal of the clause from the watch list of the false literal is left to the caller.
    ///
    /// Otherwise, the watches are unchanged apart from the first literal being the other watch.
    #[allow(clippy::result_unit_err)]
    pub fn update_watch(
        &mut self,
        atom: Atom,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Result<WatchStatus, ()> {
        if self.clause[0].atom() == atom {
            self.clause.swap(0, self.watch_ptr)
        }

        let watch_ptr_cache = self.watch_ptr;
        let clause_length = self.clause.len();
        loop {
            self.watch_ptr += 1;
            if self.watch_ptr == clause_length {
                self.watch_ptr = 1
            }
            if self.watch_ptr == watch_ptr_cache {
                break Err(());
            }

            let literal = self.clause[self.watch_ptr];
            match atom_db.literal_value(literal) {
                Some(false) => {}
                value => {
                    watches.watch_long(literal, LongWatch::new(self.key));
                    match value {
                        None => break Ok(WatchStatus::None),
                        Some(_) => break Ok(WatchStatus::Witness),
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.clause.as_dimacs(false))
    }
}

impl Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, structures::consequence::AssignmentSource};

    fn setup(atoms: usize) -> (AtomDB, Watches) {
        let mut atom_db = AtomDB::new(&Config::default());
        let mut watches = Watches::default();
        watches.add_atom();
        for _ in 0..atoms {
            let _ = atom_db.fresh_atom(false);
            watches.add_atom();
        }
        (atom_db, watches)
    }

    #[test]
    fn watches_skip_false_literals() {
        let (mut atom_db, mut watches) = setup(4);
        atom_db.set_value(-1, 0, AssignmentSource::Original);

        let key = ClauseKey::Original(0);
        let db_clause = DBClause::from(key, vec![1, 2, 3, 4], &atom_db, &mut watches);

        assert_eq!(db_clause.watched(), (2, 3));
        assert_eq!(watches.long(2), &[LongWatch::new(key)]);
        assert_eq!(watches.long(3), &[LongWatch::new(key)]);
        assert!(watches.long(1).is_empty());
    }

    #[test]
    fn update_to_unit() {
        let (mut atom_db, mut watches) = setup(3);
        let key = ClauseKey::Original(0);
        let mut db_clause = DBClause::from(key, vec![1, 2, 3], &atom_db, &mut watches);
        assert_eq!(db_clause.watched(), (1, 2));

        atom_db.set_value(-1, 1, AssignmentSource::Decision);
        assert_eq!(
            db_clause.update_watch(1, &atom_db, &mut watches),
            Ok(WatchStatus::None)
        );
        assert_eq!(db_clause.watched(), (2, 3));

        atom_db.set_value(-3, 2, AssignmentSource::Decision);
        assert_eq!(db_clause.update_watch(3, &atom_db, &mut watches), Err(()));
        assert_eq!(db_clause.watched().0, 2);
    }
}
