use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    generic::random::MinimalPCG32,
    resolution_buffer::ResolutionBuffer,
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded with [random_seed](Config::random_seed), and so two contexts with the same configuration and the same clauses make the same choices.
    pub fn from_config(config: Config) -> Self {
        let mut watches = Watches::default();
        // For the top atom.
        watches.add_atom();

        Self {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::default(),
            resolution_buffer: ResolutionBuffer::default(),
            rng: MinimalPCG32::seed_from_u64(config.random_seed.value),

            config,

            counters: Counters::default(),
            trail: Trail::default(),
            watches,

            state: ContextState::Configuration,

            callback_terminate: None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
