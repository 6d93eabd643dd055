/*!
A context method to aid boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the literal with the opposite polarity and updating the watches of the clause, if possible, assigning the consequence of an asserting clause, or identifying the clause conflicts with the current valuation.

# Complications

The watch list of long clauses is taken from the [watch database](crate::db::watches) while inspected, and returned afterwards.
For, updating the watches of a clause may push to other watch lists.
Still, the taken list would never be pushed to during inspection, as the literal it watches is false and so not a candidate for a watch.

# Heuristics

Propagation happens in two steps, distinguished by clause length:
- First, with respect to binary clauses.
- Second, with respect to long clauses.

Binary clauses do not require access to the clause database, or any update to watches, and so are cheap to inspect.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// Any assignment is made at the current level and appended to the trail.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();
        let level = self.trail.level();

        // Binary clause block.
        for watch in self.watches.binary(false_literal) {
            match self.atom_db.literal_value(watch.literal) {
                Some(true) => {}

                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal} is contradiction.", watch.key);
                    return Err(err::BCPError::Conflict(watch.key));
                }

                None => {
                    self.atom_db
                        .set_value(watch.literal, level, AssignmentSource::BCP(watch.key));
                    self.trail.store_assignment(watch.literal);
                }
            }
        }

        // Long clause block.
        let mut long_list = std::mem::take(self.watches.long_mut(false_literal));
        let mut index = 0;
        let mut result = Ok(());

        'long_loop: while index < long_list.len() {
            let key = long_list[index].key;

            let db_clause = match self.clause_db.get_long_mut(&key) {
                Ok(db_clause) => db_clause,
                Err(_) => {
                    log::error!(target: targets::PROPAGATION, "Watch to missing clause {key}.");
                    result = Err(err::BCPError::CorruptWatch);
                    break 'long_loop;
                }
            };

            match db_clause.update_watch(false_literal.atom(), &self.atom_db, &mut self.watches) {
                Ok(_) => {
                    long_list.swap_remove(index);
                    continue 'long_loop;
                }

                Err(()) => {
                    // As no candidate was found, the other watch is the first literal.
                    let watch = db_clause[0];

                    match self.atom_db.literal_value(watch) {
                        Some(true) => {}

                        Some(false) => {
                            result = Err(err::BCPError::Conflict(key));
                            break 'long_loop;
                        }

                        None => {
                            self.atom_db
                                .set_value(watch, level, AssignmentSource::BCP(key));
                            self.trail.store_assignment(watch);
                        }
                    }
                }
            }

            index += 1;
        }

        self.watches.long_mut(false_literal).append(&mut long_list);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        db::ClauseKey,
        structures::{consequence::AssignmentSource, literal::CLiteral},
        types::err,
    };

    fn context_with(atoms: usize) -> Context {
        let mut context = Context::from_config(Config::default());
        for _ in 0..atoms {
            context.fresh_or_max_atom();
        }
        context
    }

    fn decide(context: &mut Context, literal: CLiteral) {
        context.trail.store_decision(literal);
        context
            .atom_db
            .set_value(literal, context.trail.level(), AssignmentSource::Decision);
    }

    #[test]
    fn binary_propagation() {
        let mut context = context_with(2);
        assert!(context.add_clause(vec![-1, 2]).is_ok());

        decide(&mut context, 1);
        assert!(context.bcp(1).is_ok());

        assert_eq!(context.value_of(2), Some(true));
        assert_eq!(
            context.atom_db.source_of(2),
            Some(AssignmentSource::BCP(ClauseKey::OriginalBinary(0)))
        );
        assert_eq!(context.trail.literals, vec![1, 2]);
    }

    #[test]
    fn long_propagation_and_conflict() {
        let mut context = context_with(4);
        assert!(context.add_clause(vec![-1, -2, 3]).is_ok());
        assert!(context.add_clause(vec![-1, -2, -3]).is_ok());

        decide(&mut context, 1);
        assert!(context.bcp(1).is_ok());
        assert_eq!(context.value_of(3), None);

        decide(&mut context, 2);
        assert_eq!(
            context.bcp(2),
            Err(err::BCPError::Conflict(ClauseKey::Original(1)))
        );
        assert_eq!(context.value_of(3), Some(true));
        assert_eq!(context.watches.long(-2).len(), 2);
    }
}
