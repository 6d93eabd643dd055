use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Totals are kept across solves, while fresh conflicts and the restart schedule are reset at the start of each solve.
pub struct Counters {
    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    ///
    /// As u32 rather than a usize for easier interaction with scheduling variables.
    pub fresh_conflicts: u32,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of decisions on an atom chosen at random.
    pub random_decisions: usize,

    /// A count of all literals propagated.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts.
    pub restarts: usize,

    /// The number of solves.
    pub solves: usize,

    /// The time taken during the most recent solve.
    pub time: Duration,

    /// The current element in the luby sequence.
    pub luby: crate::generic::luby::Luby,

    /// The number of restarts on a geometric schedule during the current solve.
    pub restart_index: usize,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            fresh_conflicts: 0,

            total_conflicts: 0,
            total_decisions: 0,
            random_decisions: 0,
            total_propagations: 0,
            total_iterations: 0,

            restarts: 0,
            solves: 0,
            time: Duration::from_secs(0),

            luby: crate::generic::luby::Luby::default(),
            restart_index: 0,
        }
    }
}
