//! Configuration of databases, typically derived from the configuration of a context.

use crate::context::ContextState;

use super::{Activity, ConfigOption};

/// Configuration for the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The activity with which the next atom bumped will be bumped by, dynamically adjusted.
    ///
    /// When an activity would exceed `max` every activity is rescaled.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of an atom each conflict.
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN,
                max: 1e100,
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 0.5,
                max_state: ContextState::Configuration,
                value: 0.05,
            },
        }
    }
}
