/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the [targets] below.
So, output can be narrowed to a part of a solve, e.g. with `RUST_LOG=propagation=trace` when [env_logger](https://docs.rs/env_logger) is installed.

No log implementation is provided by the library.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [restarts](crate::procedures::schedulers)
    pub const RESTART: &str = "restart";

    /// Logs related to the [solve](crate::procedures::solve) loop and its limits
    pub const SOLVE: &str = "solve";

    /// Logs related to reading and preprocessing clauses
    pub const PREPROCESSING: &str = "preprocessing";
}
