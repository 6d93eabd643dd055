//! Abstract structures of a solve, and their canonical representations.
//!
//! - [Atoms](atom) and [literals](literal), from which [clauses](clause) are built.
//! - [Valuations](valuation), which assign atoms values, and [models](model), which snapshot a satisfying valuation.
//! - [Sources](consequence) of assignments, recording why an atom has the value it does.

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
pub mod model;
pub mod valuation;
