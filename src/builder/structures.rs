use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{Clause, ClauseSource},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use super::{
    preprocess::{preprocess_clause, PreprocessingOk},
    ClauseOk,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom.
    ///
    /// A satisfying valuation found by a previous solve is forgotten, as the valuation does not include the atom.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](GenericContext::fresh_or_max_atom).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        if self.state == ContextState::Satisfiable {
            self.clear_decisions();
        }
        let previous_value = self.rng.random_bool(self.config.polarity_lean.value);
        let atom = self.atom_db.fresh_atom(previous_value)?;
        self.watches.add_atom();
        Ok(atom)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    /// And, as exhausting the atom limit is unlikely in many applications, this may be preferred.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(err::AtomDBError::AtomsExhausted) => ATOM_MAX,
        }
    }

    /// Ensure `atom` is present in the context, by introducing as many atoms as required to ensure atoms form a contiguous block: [0..`atom`].
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), err::AtomDBError> {
        if atom > ATOM_MAX {
            return Err(err::AtomDBError::AtomsExhausted);
        }
        while !self.atom_db.contains(atom) {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Returns a fresh literal with value true.
    ///
    /// Alternatively, see [fresh_or_max_literal](GenericContext::fresh_or_max_literal).
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::AtomDBError> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, true))
    }

    /// Returns a fresh literal with value true, or the maximum atom with value true.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Returns a vector containing `count` literals with either a fresh atom or the maximum atom and valued true.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        let mut literals = Vec::default();
        for _ in 0..count {
            literals.push(self.fresh_or_max_literal());
        }
        literals
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the context.
    ///
    /// Any decisions made by a previous solve are forgotten, though clauses derived by the solve are kept.
    ///
    /// - Every literal must be on an atom of the context, and the literal `0` is never valid.
    ///   Otherwise, an [InvalidLiteral](ErrorKind::InvalidLiteral) error is returned and the context is unchanged.
    /// - A tautology is discarded, as is a clause containing a literal fixed true by the formula.
    /// - Literals fixed false by the formula are removed.
    ///   If no literal remains, the formula is unsatisfiable.
    ///
    /// ```rust
    /// # use websat::context::Context;
    /// # use websat::builder::ClauseOk;
    /// # use websat::types::err::ErrorKind;
    /// let mut the_context = Context::default();
    /// let p = the_context.fresh_or_max_literal();
    /// let q = the_context.fresh_or_max_literal();
    ///
    /// assert_eq!(the_context.add_clause(vec![p, -q, p]), Ok(ClauseOk::Added));
    /// assert_eq!(the_context.add_clause(vec![p, -p]), Ok(ClauseOk::Tautology));
    /// assert_eq!(the_context.add_clause(vec![p, 3]), Err(ErrorKind::InvalidLiteral(3)));
    ///
    /// assert_eq!(the_context.add_clause(p), Ok(ClauseOk::Added));
    /// assert_eq!(the_context.add_clause(vec![q, p]), Ok(ClauseOk::Satisfied));
    /// ```
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        let mut clause = clause.canonical();

        if let Some(invalid) = clause
            .iter()
            .find(|literal| literal.atom() == 0 || !self.atom_db.contains(literal.atom()))
        {
            log::warn!(target: targets::PREPROCESSING, "Clause with invalid literal {invalid}");
            return Err(ErrorKind::InvalidLiteral(*invalid));
        }

        self.clear_decisions();
        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        if preprocess_clause(&mut clause) == PreprocessingOk::Tautology {
            log::trace!(target: targets::PREPROCESSING, "Tautology {}", clause.as_dimacs(false));
            return Ok(ClauseOk::Tautology);
        }

        // As decisions are cleared, any value is fixed by the formula.
        if clause
            .iter()
            .any(|literal| self.atom_db.literal_value(*literal) == Some(true))
        {
            return Ok(ClauseOk::Satisfied);
        }
        clause.retain(|literal| self.atom_db.literal_value(*literal).is_none());

        match clause.len() {
            0 => {
                self.clause_db.note_empty_clause();
                self.state = ContextState::Unsatisfiable;
            }

            1 => {
                let literal = clause[0];
                self.clause_db.store(
                    literal,
                    ClauseSource::Original,
                    &self.atom_db,
                    &mut self.watches,
                )?;
                self.record_assignment(literal, AssignmentSource::Original)?;
            }

            _ => {
                self.clause_db.store(
                    clause,
                    ClauseSource::Original,
                    &self.atom_db,
                    &mut self.watches,
                )?;
            }
        }

        Ok(ClauseOk::Added)
    }
}
