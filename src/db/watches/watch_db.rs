/*!
A structure to record which clauses are watching a literal.

# Theory

A core part of a solve is [boolean constraint propagation](crate::procedures::bcp) (BCP).
In short, BCP is the observation that some literal in a clause must be true due to all other literals in the clause being false.

BCP only applies when there is exactly one literal without a value and every other literal conflicts with the valuation.
This motivates the use of two watches:
- One watch on a literal without a value, to note the clause is a candidate for BCP at some point.
- One watch on any other literal which does not conflict with the valuation, if possible.
  + For, if it is *only* possible to watch a literal which conflicts with the valuation, the first watched literal must be true.

So, a clause only needs attention when one of its two watched literals becomes false.

# Implementation

The clauses watching an atom are distinguished in two ways:

1. Between binary clauses and other clauses.
   - In a binary clause the watched literals are never updated, and so the *other* literal is recorded in the watch to avoid a trip to the clause database.
2. Between the polarity being watched.

So, each atom has four associated watch lists in it's [WatchDB].
A unit clause never watches any literal.
*/

use crate::{db::keys::ClauseKey, structures::literal::CLiteral};

/// A binary clause together with the *other* literal in the clause.
#[derive(Clone, Copy, Debug)]
pub struct BinaryWatch {
    pub literal: CLiteral,
    pub key: ClauseKey,
}

impl BinaryWatch {
    pub fn new(literal: CLiteral, key: ClauseKey) -> Self {
        Self { literal, key }
    }
}

/// A watch from a clause of three or more literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongWatch {
    pub key: ClauseKey,
}

impl LongWatch {
    pub fn new(key: ClauseKey) -> Self {
        LongWatch { key }
    }
}

/// The status of a watched literal, relative to the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// The watched literal is true on the valuation.
    Witness,

    /// The atom of the watched literal has no value.
    None,
}

/// The watchers of an atom, distinguished by length of clause and which polarity of the atom is watched.
#[derive(Default)]
pub struct WatchDB {
    /// Binary clauses containing the positive literal.
    pub(super) positive_binary: Vec<BinaryWatch>,

    /// Binary clauses containing the negative literal.
    pub(super) negative_binary: Vec<BinaryWatch>,

    /// Long clauses watching the positive literal.
    pub(super) positive_long: Vec<LongWatch>,

    /// Long clauses watching the negative literal.
    pub(super) negative_long: Vec<LongWatch>,
}
