/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, indexed by atoms.
The first element is the value of the reserved top atom, and so is always `Some(true)` within a context.

```rust
# use websat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];
assert_eq!(valuation.value_of(2), Some(Some(false)));
assert_eq!(valuation.value_of(9), None);
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1, 3]);
```
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// Something which stores the value of an atom, or the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom is part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator through all (atom, value) pairs, excluding top.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator over atoms without a value, excluding top.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| match value {
                None => Some(atom),
                Some(_) => None,
            })
    }

    /// Whether every atom has some value.
    fn is_full(&self) -> bool {
        self.unvalued_atoms().next().is_none()
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(index, value)| (index as Atom, *value))
    }
}
