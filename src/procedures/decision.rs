/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* can be represented with the literal *-p*.

# Heuristics

## Activity

Atoms are selected by activity, and the [atom database](crate::db::atom) stores atoms on a max activity heap in order to support quick access to the most active atom without a value.
As atoms are removed from the heap only when popped, some atoms on the heap may have a value, and these are skipped.

## Phase saving

If phase saving is enabled, an atom previously valued *v* is again valued *v*.
For efficiency an atom always has a 'previous' value, initialised randomly via [Config::polarity_lean](crate::config::Config::polarity_lean) or set by a [hint](crate::context::GenericContext::set_polarity_hint).

## Randomness

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom is chosen uniformly from those without a value, rather than by activity.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses an atom without a value and a value for the atom.
    ///
    /// The decision is not made, as this is left to the caller.
    /// Though, if every atom has a value the context is noted to be satisfiable.
    ///
    /// ```rust, ignore
    /// match self.make_decision() {
    ///     DecisionOk::Literal(decision) => ...,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision_literal = match self.config.phase_saving.value {
                    true => {
                        let previous_value = self.atom_db.previous_value_of(chosen_atom);
                        CLiteral::new(chosen_atom, previous_value)
                    }
                    false => {
                        let random_value = self.rng.random_bool(self.config.polarity_lean.value);
                        CLiteral::new(chosen_atom, random_value)
                    }
                };
                log::trace!(target: targets::DECISION, "Decision {decision_literal}");

                DecisionOk::Literal(decision_literal)
            }

            None => {
                self.state = ContextState::Satisfiable;
                DecisionOk::Exhausted
            }
        }
    }

    /// Returns an atom which has no value on the current valuation, either by random decision or by most activity.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.random_bool(self.config.random_decision_bias.value) {
            true => {
                let atom = self.atom_db.valuation().unvalued_atoms().choose(rng);
                if atom.is_some() {
                    self.counters.random_decisions += 1;
                }
                atom
            }

            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                self.atom_db.valuation().unvalued_atoms().next()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, context::Context, procedures::decision::DecisionOk};

    #[test]
    fn phase_and_exhaustion() {
        let mut context = Context::from_config(Config::default());
        let p = context.fresh_or_max_atom();
        context.set_polarity_hint(p, true);

        match context.make_decision() {
            DecisionOk::Literal(literal) => assert_eq!(literal, 1),
            DecisionOk::Exhausted => panic!("an atom has no value"),
        }

        assert!(context.add_clause(vec![1]).is_ok());
        assert!(matches!(context.make_decision(), DecisionOk::Exhausted));
    }

    #[test]
    fn random_decisions_are_counted() {
        let mut config = Config::default();
        config.random_decision_bias.value = 1.0;
        let mut context = Context::from_config(config);
        context.fresh_or_max_literals(3);

        assert!(matches!(context.make_decision(), DecisionOk::Literal(_)));
        assert_eq!(context.counters.random_decisions, 1);
        assert_eq!(context.counters.total_decisions, 1);
    }
}
