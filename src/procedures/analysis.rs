/*!
Learning a clause from a conflict.

[conflict_analysis](GenericContext::conflict_analysis) is given a key to a clause which is false on the current valuation.
The clause is resolved with the reasons for its literals at the current level, by the [resolution buffer](crate::resolution_buffer), until a first UIP is found.

Then:
1. Activity of atoms is bumped, by the [VSIDS](crate::config::vsids::VSIDS) variant of the context.
2. The context backjumps to the level at which the learnt clause asserts its first literal, level zero for a unit clause.
3. The learnt clause is stored, with watches placed on the asserted literal and a literal of highest remaining level.

Assigning the asserted literal is left to the caller, as how the literal is recorded depends on the length of the clause:

```rust, ignore
match self.conflict_analysis(&key)? {
    AnalysisResult::UnitClause { literal } => {
        self.record_assignment(literal, AssignmentSource::Addition)?;
    }

    AnalysisResult::AssertingClause { key, literal } => {
        self.record_assignment(literal, AssignmentSource::BCP(key))?;
    }
}
```
*/

use crate::{
    config,
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A learnt clause, by length.
pub enum AnalysisResult {
    /// A clause of one literal, stored at level zero.
    UnitClause {
        /// The literal of the clause.
        literal: CLiteral,
    },

    /// A clause of two or more literals.
    AssertingClause {
        /// The key of the asserting clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Learns a clause from the conflict on `key`, and backjumps so the clause asserts its first literal.
    pub fn conflict_analysis(&mut self, key: &ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        log::info!(target: targets::ANALYSIS, "Analysis of {key} at level {}", self.trail.level());
        log::trace!(target: targets::ANALYSIS, "Level: {:?}", self.trail.top_level_assignments());

        if let config::vsids::VSIDS::Chaff = self.config.vsids.value {
            self.atom_db
                .bump_relative(self.clause_db.get(key)?.iter().map(|literal| literal.atom()));
        }

        let clause = self.resolution_buffer.resolve_through_current_level(
            key,
            &self.clause_db,
            &self.atom_db,
            &self.trail,
        )?;

        if let config::vsids::VSIDS::MiniSAT = self.config.vsids.value {
            self.atom_db
                .bump_relative(self.resolution_buffer.atoms_used());
        }

        let Some(literal) = clause.first().copied() else {
            return Err(err::ErrorKind::from(err::AnalysisError::EmptyResolution));
        };
        log::info!(target: targets::ANALYSIS, "Addition clause: {}", clause.as_dimacs(false));

        match clause.len() {
            1 => {
                self.backjump(0);
                self.clause_db.store(
                    literal,
                    ClauseSource::Resolution,
                    &self.atom_db,
                    &mut self.watches,
                )?;
                Ok(AnalysisResult::UnitClause { literal })
            }

            _ => {
                let index = self.non_chronological_backjump_level(&clause)?;
                self.backjump(index);

                let key = self.clause_db.store(
                    clause,
                    ClauseSource::Resolution,
                    &self.atom_db,
                    &mut self.watches,
                )?;
                Ok(AnalysisResult::AssertingClause { key, literal })
            }
        }
    }
}
