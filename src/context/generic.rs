use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    misc::log::targets::{self},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::CLiteral,
        model::Model,
        valuation::CValuation,
    },
    types::err::ErrorKind,
};

use super::{callbacks::CallbackTerminate, ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// Watch lists for each atom.
    pub watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments, which doubles as the queue of consequences.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// A buffer for resolution.
    pub resolution_buffer: ResolutionBuffer,

    /// Terminates a solve, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The value of `atom` on the current valuation, if the atom has a value.
    ///
    /// # Panics
    /// If the atom is not part of the context.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        self.atom_db.valuation_canonical()
    }

    /// Sets the value an atom takes on its first decision.
    ///
    /// With phase saving, later decisions take the value last held by the atom, and so the hint is only a hint.
    pub fn set_polarity_hint(&mut self, atom: Atom, value: bool) {
        if self.atom_db.contains(atom) {
            self.atom_db.set_previous_value(atom, value);
        }
    }

    /// A model of the formula, if the most recent solve found the formula to be satisfiable.
    pub fn model(&self) -> Result<Model, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok(Model::from(self.valuation().clone())),
            _ => Err(ErrorKind::NotSolved),
        }
    }

    /// Values the atom of `literal` at the current level, and queues the literal for propagation.
    ///
    /// Nothing happens if the atom already has the value.
    /// If the atom has the other value, the context is left unchanged and an [InvalidState](ErrorKind::InvalidState) error is returned.
    pub fn record_assignment(
        &mut self,
        literal: CLiteral,
        source: AssignmentSource,
    ) -> Result<(), ErrorKind> {
        use crate::db::atom::AtomValue;

        match self.atom_db.set_value(literal, self.trail.level(), source) {
            AtomValue::NotSet => {
                self.trail.store_assignment(literal);
                Ok(())
            }
            AtomValue::Same => Ok(()),
            AtomValue::Different => {
                log::error!(target: targets::VALUATION, "Assignment of {literal} conflicts with the valuation");
                Err(ErrorKind::InvalidState)
            }
        }
    }

    /// Whether every atom has a value.
    ///
    /// Every value other than that of the top atom is on the trail, so a count of the trail suffices.
    pub fn valuation_is_full(&self) -> bool {
        self.trail.literals.len() + 1 == self.atom_db.count()
    }
}
