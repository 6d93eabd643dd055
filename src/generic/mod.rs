//! Generic structures, independent of satisfiability.

pub mod index_heap;
pub mod luby;
pub mod random;
