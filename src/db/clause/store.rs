use crate::{
    db::{
        atom::AtomDB,
        clause::{db_clause::DBClause, ClauseDB},
        keys::{ClauseKey, FormulaIndex},
        watches::{watch_db::BinaryWatch, Watches},
    },
    misc::log::targets::{self},
    structures::clause::{CClause, Clause, ClauseSource},
    types::err::{self},
};

impl ClauseDB {
    /// Stores a clause with an automatically generated key, and returns the key.
    ///
    /// Watches are initialised for binary and long clauses, with respect to the current valuation.
    /// Valuing the atom of a unit clause is left to the caller.
    ///
    /// The clause must be free of duplicate literals.
    pub fn store(
        &mut self,
        clause: impl Clause,
        source: ClauseSource,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        let clause: CClause = clause.canonical();

        let key = match clause.len() {
            0 => return Err(err::ClauseDBError::EmptyClause),

            1 => match source {
                ClauseSource::Original => {
                    self.unit_original.push(clause[0]);
                    ClauseKey::OriginalUnit(clause[0])
                }
                ClauseSource::Resolution => {
                    self.unit_addition.push(clause[0]);
                    ClauseKey::AdditionUnit(clause[0])
                }
            },

            2 => {
                let (first, second) = (clause[0], clause[1]);
                let key = match source {
                    ClauseSource::Original => {
                        let key = ClauseKey::OriginalBinary(Self::fresh_index(
                            self.binary_original.len(),
                        )?);
                        self.binary_original.push(clause);
                        key
                    }
                    ClauseSource::Resolution => {
                        let key = ClauseKey::AdditionBinary(Self::fresh_index(
                            self.binary_addition.len(),
                        )?);
                        self.binary_addition.push(clause);
                        key
                    }
                };
                watches.watch_binary(first, BinaryWatch::new(second, key));
                watches.watch_binary(second, BinaryWatch::new(first, key));
                key
            }

            _ => match source {
                ClauseSource::Original => {
                    let key = ClauseKey::Original(Self::fresh_index(self.original.len())?);
                    self.original
                        .push(DBClause::from(key, clause, atom_db, watches));
                    key
                }
                ClauseSource::Resolution => {
                    let key = ClauseKey::Addition(Self::fresh_index(self.addition.len())?);
                    self.addition
                        .push(DBClause::from(key, clause, atom_db, watches));
                    key
                }
            },
        };

        log::trace!(target: targets::CLAUSE_DB, "Stored {key}");
        Ok(key)
    }

    fn fresh_index(length: usize) -> Result<FormulaIndex, err::ClauseDBError> {
        FormulaIndex::try_from(length).map_err(|_| err::ClauseDBError::StorageExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, structures::literal::CLiteral};

    #[test]
    fn keys_by_kind() {
        let mut atom_db = AtomDB::new(&Config::default());
        let mut watches = Watches::default();
        watches.add_atom();
        for _ in 0..4 {
            let _ = atom_db.fresh_atom(false);
            watches.add_atom();
        }
        let mut clause_db = ClauseDB::default();

        let unit: CLiteral = -2;
        let binary: CClause = vec![1, -3];
        let long: CClause = vec![1, 2, 4];
        let learnt: CClause = vec![-1, -4];

        let unit_key = clause_db.store(unit, ClauseSource::Original, &atom_db, &mut watches);
        let binary_key = clause_db.store(binary, ClauseSource::Original, &atom_db, &mut watches);
        let long_key = clause_db.store(long, ClauseSource::Original, &atom_db, &mut watches);
        let learnt_key = clause_db.store(learnt, ClauseSource::Resolution, &atom_db, &mut watches);

        assert_eq!(unit_key, Ok(ClauseKey::OriginalUnit(-2)));
        assert_eq!(binary_key, Ok(ClauseKey::OriginalBinary(0)));
        assert_eq!(long_key, Ok(ClauseKey::Original(0)));
        assert_eq!(learnt_key, Ok(ClauseKey::AdditionBinary(0)));

        assert_eq!(clause_db.get(&ClauseKey::OriginalUnit(-2)), Ok(&[-2][..]));
        assert_eq!(clause_db.get(&ClauseKey::Original(0)), Ok(&[1, 2, 4][..]));
        assert!(clause_db.get(&ClauseKey::Addition(0)).is_err());

        assert_eq!(watches.binary(-3)[0].literal, 1);
        assert_eq!(watches.binary(-4)[0].literal, -1);

        assert_eq!(clause_db.original_count(), 3);
        assert_eq!(clause_db.addition_count(), 1);
        assert_eq!(clause_db.original_clauses().count(), 3);

        let empty = clause_db.store(CClause::new(), ClauseSource::Original, &atom_db, &mut watches);
        assert_eq!(empty, Err(err::ClauseDBError::EmptyClause));
    }
}
