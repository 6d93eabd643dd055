/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation), and the previous value of each atom for phase saving.
- The level at which each atom was valued, and the [source](AssignmentSource) of the value.
- An [IndexHeap] recording the activity of atoms, where any atom without a value is 'active' on the heap.

Lookup of the value, level, or source of an atom is a constant time index into a vector.
*/

#[doc(hidden)]
pub mod activity;

use crate::{
    config::{dbs::AtomDBConfig, Config},
    db::LevelIndex,
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::AtomDBError,
};

use crate::config::Activity;

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) [valuation](Valuation).
    valuation: CValuation,

    /// The previous value of each atom, or some initial value.
    previous_valuation: Vec<bool>,

    /// An [IndexHeap] recording the activty of atoms, where any atom without a value is 'active' on the heap.
    activity_heap: IndexHeap<Activity>,

    /// The level at which an atom was valued.
    levels: Vec<Option<LevelIndex>>,

    /// Why an atom was valued.
    sources: Vec<Option<AssignmentSource>>,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: AtomDBConfig,
}

/// The status of the valuation of an atom, relative to some literal.
#[derive(Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom had no value, and now has the polarity of the literal.
    NotSet,

    /// The value of the atom is the same as the polarity of the literal.
    Same,

    /// The value of the atom is not the same as the polarity of the literal.
    Different,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    ///
    /// The database contains the top atom, valued true at level zero.
    pub fn new(config: &Config) -> Self {
        let mut db = AtomDB {
            valuation: CValuation::default(),
            previous_valuation: Vec::default(),
            activity_heap: IndexHeap::default(),
            levels: Vec::default(),
            sources: Vec::default(),

            config: config.atom_db.clone(),
        };

        db.valuation.push(Some(true));
        db.previous_valuation.push(true);
        db.activity_heap.add(TOP_ATOM as usize, 0.0);
        db.levels.push(Some(0));
        db.sources.push(Some(AssignmentSource::Original));

        db
    }

    /// A count of atoms in the [AtomDB], including the top atom.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// Whether `atom` is part of the database.
    pub fn contains(&self, atom: Atom) -> bool {
        (atom as usize) < self.valuation.len()
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// The current valuation, as a canonical [CValuation].
    pub fn valuation_canonical(&self) -> &CValuation {
        &self.valuation
    }

    /// A string of the literals true on the current valuation, in DIMACS form.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .atom_value_pairs()
            .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom, v).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A fresh atom, with `previous_value` as the value taken on a decision with phase saving.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.activity_heap.add(atom as usize, 1.0);
        self.activity_heap.activate(atom as usize);

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.levels.push(None);
        self.sources.push(None);

        log::trace!(target: targets::VALUATION, "Fresh atom: {atom}");
        Ok(atom)
    }

    /// The value of `atom` on the current valuation.
    ///
    /// # Panics
    /// If the atom is not part of the database.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of `literal` on the current valuation.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The level at which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// Why `atom` was valued, if valued.
    pub fn source_of(&self, atom: Atom) -> Option<AssignmentSource> {
        self.sources[atom as usize]
    }

    /// The value `atom` last held, or its initial value.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    /// Revises the value taken by `atom` on a decision with phase saving.
    pub fn set_previous_value(&mut self, atom: Atom, value: bool) {
        self.previous_valuation[atom as usize] = value;
    }

    /// Values the atom of `literal` with the polarity of the literal, noting the level and source of the value.
    ///
    /// No change is made if the atom already has a value.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        source: AssignmentSource,
    ) -> AtomValue {
        let atom = literal.atom() as usize;
        match self.valuation[atom] {
            None => {
                self.valuation[atom] = Some(literal.polarity());
                self.levels[atom] = Some(level);
                self.sources[atom] = Some(source);
                AtomValue::NotSet
            }
            Some(value) if value == literal.polarity() => AtomValue::Same,
            Some(_) => AtomValue::Different,
        }
    }

    /// Clears the value of an atom, saving the value as the previous value, and activates the atom on the activity heap.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.previous_valuation[index] = value;
        }
        self.levels[index] = None;
        self.sources[index] = None;
        self.activity_heap.activate(index);
    }
}
