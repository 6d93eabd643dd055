//! Databases for holding information relevant to a solve.
//!
//! - [Atoms](atom) and their values, levels, and activity.
//! - [Clauses](clause), both original and derived.
//! - The [trail] of assignments.
//! - [Watch lists](watches) for propagation.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

/// The index of a level, where level zero holds every assignment made before the first decision.
pub type LevelIndex = u32;
