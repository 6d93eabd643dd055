/*!
Applies queued consequences.

For an overview of [apply_consequences](GenericContext::apply_consequences) within a solve, see the documentation of the [solve procedure](crate::procedures::solve).

Roughly, apply_consequences implements an instance of the operator which:

- Returns *unsatisfiable*, if it is not possible to apply the consequence relation.
- Returns the same formula, if no consequence of the formula conflicts with the valuation.
- Returns the formula with an additional clause, if some consequence conflicts with the valuation.

- A return of *unsatisfiable* is represented as a [FundamentalConflict](ApplyConsequencesOk::FundamentalConflict).
- A return of a new clause is represented with a [key](crate::db::ClauseKey) to the clause, and an asserted literal.
- No change is represented by a return of [Exhausted](ApplyConsequencesOk::Exhausted).
  + It is up to a caller of apply_consequences to note whether the valuation is complete.

The queue of consequences is the part of the [trail](crate::db::trail) from `q_head` onwards.
*/

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets::{self},
    procedures::analysis::AnalysisResult,
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

/// Ok results of [apply_consequences](GenericContext::apply_consequences).
pub enum ApplyConsequencesOk {
    /// A conflict was found without any decision having been made, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// A unit clause was derived from some conflict.
    UnitClause {
        /// The literal of the clause.
        literal: CLiteral,
    },

    /// A non-unit asserting clause was derived from some conflict.
    AssertingClause {
        /// The key to the clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },

    /// There were no (further) consequences to apply.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies queued consequences.
    /// See [procedures::apply_consequences](crate::procedures::apply_consequences) for details.
    ///
    /// The head of the queue advances only if BCP was successful.
    /// For, in the case of a conflict the remainder of the queue is removed during a backjump.
    pub fn apply_consequences(&mut self) -> Result<ApplyConsequencesOk, ErrorKind> {
        while let Some(literal) = self.trail.next_to_propagate() {
            match self.bcp(literal) {
                Ok(()) => {
                    self.trail.q_head += 1;
                    self.counters.total_propagations += 1;
                }

                Err(err::BCPError::Conflict(key)) => {
                    self.counters.total_conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    if !self.trail.decision_is_made() {
                        log::info!(target: targets::PROPAGATION, "Conflict on {key} without a decision.");
                        self.clause_db.note_empty_clause();
                        self.state = ContextState::Unsatisfiable;
                        return Ok(ApplyConsequencesOk::FundamentalConflict);
                    }

                    match self.conflict_analysis(&key)? {
                        AnalysisResult::UnitClause { literal } => {
                            return Ok(ApplyConsequencesOk::UnitClause { literal });
                        }

                        AnalysisResult::AssertingClause { key, literal } => {
                            return Ok(ApplyConsequencesOk::AssertingClause { key, literal });
                        }
                    }
                }

                Err(non_conflict_bcp_error) => return Err(ErrorKind::BCP(non_conflict_bcp_error)),
            }
        }

        Ok(ApplyConsequencesOk::Exhausted)
    }
}
