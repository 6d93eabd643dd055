//! Watch lists for every literal, indexed by atom.
//!
//! For the theory of watched literals, see [watch_db].

pub mod watch_db;
use watch_db::{BinaryWatch, LongWatch, WatchDB};

use crate::structures::literal::{CLiteral, Literal};

#[derive(Default)]
pub struct Watches {
    pub dbs: Vec<WatchDB>,
}

impl Watches {
    /// Adds an empty [WatchDB] for a fresh atom.
    pub fn add_atom(&mut self) {
        self.dbs.push(WatchDB::default());
    }

    /// Notes `watch` is a binary clause containing `literal`.
    ///
    /// # Panics
    /// If no [WatchDB] exists for the atom of the literal.
    pub fn watch_binary(&mut self, literal: CLiteral, watch: BinaryWatch) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_binary.push(watch),
            false => db.negative_binary.push(watch),
        }
    }

    /// Notes `watch` is from a long clause watching `literal`.
    ///
    /// # Panics
    /// If no [WatchDB] exists for the atom of the literal.
    pub fn watch_long(&mut self, literal: CLiteral, watch: LongWatch) {
        self.long_mut(literal).push(watch);
    }

    /// The binary clauses containing `literal`.
    pub fn binary(&self, literal: CLiteral) -> &[BinaryWatch] {
        let db = &self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &db.positive_binary,
            false => &db.negative_binary,
        }
    }

    /// The long clauses watching `literal`.
    pub fn long(&self, literal: CLiteral) -> &[LongWatch] {
        let db = &self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &db.positive_long,
            false => &db.negative_long,
        }
    }

    /// The list of long clauses watching `literal`, mutably.
    ///
    /// [BCP](crate::procedures::bcp) takes the list while inspecting the clauses, as inspection may add watches to other lists.
    pub fn long_mut(&mut self, literal: CLiteral) -> &mut Vec<LongWatch> {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &mut db.positive_long,
            false => &mut db.negative_long,
        }
    }
}
