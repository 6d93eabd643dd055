/*!
Configuration of a context.

All configuration of a context is contained in a [Config], given when the context is created.
Some structures, such as the [atom database](crate::db::atom), clone the parts of the configuration they use.

The default configuration is deterministic: random decisions are disabled, polarity defaults to false, and the source of randomness is seeded with [random_seed](Config::random_seed).

```rust
# use websat::config::{Config, restarts::RestartPolicy};
let mut config = Config::default();
config.restart_policy.value = RestartPolicy::Never;
assert!(config.random_decision_bias.set(0.02).is_ok());
assert!(config.polarity_lean.set(1.5).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod budget;
pub use budget::Budget;

pub mod dbs;
use dbs::AtomDBConfig;

pub mod restarts;
use restarts::RestartPolicy;

pub mod vsids;
use vsids::VSIDS;

use crate::{context::ContextState, generic::luby::LubyRepresentation};

/// Representation of the activity of an atom.
pub type Activity = f64;

/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Limits on the effort of a single solve.
    pub budget: Budget,

    /// The `u` value to multiply the luby sequence by when scheduling luby restarts.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Default to the last set value of an atom when choosing a value for the atom, otherwise choose with [polarity_lean](Config::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom when freely choosing a value.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing an atom at random, rather than by activity, when making a decision.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// The seed for the source of randomness of a context.
    pub random_seed: ConfigOption<u64>,

    /// The conflicts before the first geometric restart.
    pub restart_first: ConfigOption<u32>,

    /// The growth of the interval between geometric restarts.
    pub restart_factor: ConfigOption<f64>,

    /// How restarts are scheduled.
    pub restart_policy: ConfigOption<RestartPolicy>,

    /// Which VSIDS variant to use during conflict analysis.
    pub vsids: ConfigOption<VSIDS>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),

            budget: Budget::default(),

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                max_state: ContextState::Configuration,
                value: 100,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.0,
            },

            random_seed: ConfigOption {
                name: "random_seed",
                min: u64::MIN,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 91648253,
            },

            restart_first: ConfigOption {
                name: "restart_first",
                min: 1,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 100,
            },

            restart_factor: ConfigOption {
                name: "restart_factor",
                min: 1.0,
                max: 16.0,
                max_state: ContextState::Configuration,
                value: 1.5,
            },

            restart_policy: ConfigOption {
                name: "restart_policy",
                min: RestartPolicy::MIN,
                max: RestartPolicy::MAX,
                max_state: ContextState::Configuration,
                value: RestartPolicy::Luby,
            },

            vsids: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                max_state: ContextState::Configuration,
                value: VSIDS::MiniSAT,
            },
        }
    }
}
