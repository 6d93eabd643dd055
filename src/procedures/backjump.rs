//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//! As the queue of consequences is part of the trail, any queued consequence above level *l - i* is also removed.
//!
//! # Methods
//!
//! # [backjump](GenericContext::backjump)
//!
//! Performs a backjump to some level.
//! Passing a target level greater than or equal to the current level is safe, as nothing happens.
//!
//! # [non_chronological_backjump_level](GenericContext::non_chronological_backjump_level)
//!
//! The backjump level of a clause is the highest level for which the clause is asserting on the corresponding valuation.
//! With respect to implementation, this is the second highest level from the given literals, or zero for a unit clause.
//! So, the method is only sound to use when applied to a clause unsatisfiable on the current valuation.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::{ContextState, GenericContext},
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target < self.trail.level() {
            log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());
        }

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }

    /// The non-chronological backjump level of an unsatisfiable clause.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn non_chronological_backjump_level(
        &self,
        clause: &impl Clause,
    ) -> Result<LevelIndex, err::ErrorKind> {
        match clause.size() {
            0 => Err(err::ErrorKind::Backjump),

            1 => Ok(0),

            _ => {
                // An ordered record of the top two levels: (second_to_top, top)
                let mut top_two = (None, None);
                for literal in clause.literals() {
                    let Some(level) = self.atom_db.level_of(literal.atom()) else {
                        log::error!(target: targets::BACKJUMP, "{literal} was not valued");
                        return Err(err::ErrorKind::Backjump);
                    };

                    match top_two {
                        (_, None) => top_two.1 = Some(level),
                        (_, Some(the_top)) if level > the_top => {
                            top_two.0 = top_two.1;
                            top_two.1 = Some(level);
                        }
                        (None, _) => top_two.0 = Some(level),
                        (Some(second_to_top), _) if level > second_to_top => {
                            top_two.0 = Some(level)
                        }
                        _ => {}
                    }
                }

                Ok(top_two.0.unwrap_or(0))
            }
        }
    }

    /// Forgets every decision and the consequences of those decisions.
    ///
    /// Assignments at level zero are kept, as these follow from the formula.
    pub fn clear_decisions(&mut self) {
        self.backjump(0);
        if matches!(self.state, ContextState::Satisfiable | ContextState::Solving) {
            self.state = ContextState::Input;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        structures::{clause::CClause, consequence::AssignmentSource},
    };

    #[test]
    fn second_highest_level() {
        let mut context = Context::from_config(Config::default());
        let literals = context.fresh_or_max_literals(4);

        for (level, literal) in literals.iter().enumerate() {
            context.trail.store_decision(*literal);
            context
                .atom_db
                .set_value(*literal, level as u32 + 1, AssignmentSource::Decision);
        }

        let clause: CClause = vec![-1, -4, -2];
        assert_eq!(context.non_chronological_backjump_level(&clause), Ok(2));

        context.backjump(2);
        assert_eq!(context.trail.level(), 2);
        assert_eq!(context.value_of(3), None);
        assert_eq!(context.value_of(4), None);
        assert_eq!(context.value_of(2), Some(true));

        context.clear_decisions();
        assert_eq!(context.value_of(1), None);
        assert!(!context.trail.decision_is_made());
    }
}
