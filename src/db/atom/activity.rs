use crate::{config::Activity, db::atom::AtomDB, structures::atom::Atom};

/// Methods for inspecting and mutating the activity of atoms.
///
/// The role of these methods is tied to the use of [VSIDS](crate::config::vsids).
impl AtomDB {
    /// Bumps the activities of each atom in the given iterator, and increases the bump for next time.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescored.
    pub fn bump_relative(&mut self, atoms: impl Iterator<Item = Atom>) {
        for atom in atoms {
            if self.activity_of(atom) + self.config.bump.value > self.config.bump.max {
                self.rescore_activity()
            }
            self.bump_activity(atom);
        }

        self.exponent_activity();
    }

    /// Pops the most active atom from the activity heap.
    ///
    /// The atom may have a value, as atoms are only removed from the heap when popped.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// The activity of an atom, regardless of whether it is on the activity heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Bumps the activity of an atom and updates it's position on the activity heap, if the atom is on the activity heap.
    pub fn bump_activity(&mut self, atom: Atom) {
        self.activity_heap.revalue(
            atom as usize,
            self.activity_of(atom) + self.config.bump.value,
        );
        self.activity_heap.heapify_if_active(atom as usize);
    }

    /// Increase the activity bump applied to atoms by a factor.
    pub fn exponent_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
        if self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Rescales the activity of all atoms and the activity bump.
    pub fn rescore_activity(&mut self) {
        let factor = 1.0 / self.config.bump.max;
        self.activity_heap.apply_to_all(|activity| activity * factor);
        self.activity_heap.heapify();
        self.config.bump.value *= factor;
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, db::atom::AtomDB};

    #[test]
    fn bumped_atom_is_popped_first() {
        let mut db = AtomDB::new(&Config::default());
        for _ in 0..4 {
            let _ = db.fresh_atom(false);
        }
        db.bump_relative([3].into_iter());
        db.bump_relative([2, 3].into_iter());

        assert!(db.activity_of(3) > db.activity_of(2));
        assert!(db.activity_of(2) > db.activity_of(1));
        assert_eq!(db.heap_pop_most_active(), Some(3));
        assert_eq!(db.heap_pop_most_active(), Some(2));
    }

    #[test]
    fn rescore_keeps_order() {
        let mut config = Config::default();
        config.atom_db.bump.max = 8.0;
        let mut db = AtomDB::new(&config);
        for _ in 0..3 {
            let _ = db.fresh_atom(false);
        }
        for _ in 0..12 {
            db.bump_relative([1].into_iter());
        }
        assert!(db.activity_of(1) <= 8.0);
        assert!(db.activity_of(1) > db.activity_of(2));
        assert_eq!(db.heap_pop_most_active(), Some(1));
    }
}
