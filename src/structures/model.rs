/*!
A snapshot of a satisfying valuation.

Models are returned by [extract](crate::interface::IncrementalSolver::extract) and are detached from the context which produced them.
So, a model remains readable after further clauses are added to the context, though it says nothing about those clauses.

```rust
# use websat::structures::model::Model;
let model = Model::from(vec![Some(true), Some(false), Some(true)]);
assert_eq!(model.value_of(2), Some(true));
assert_eq!(model.value_of(-1), Some(true));
assert_eq!(model.value_of(3), None);
assert_eq!(model.true_literals().collect::<Vec<_>>(), vec![-1, 2]);
```
*/

use crate::structures::{
    atom::Atom,
    clause::Clause,
    literal::{CLiteral, Literal},
    valuation::{CValuation, Valuation},
};

/// A full valuation of the atoms allocated when the model was taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    /// The truth of `literal` on the model, or None if the atom of the literal was not part of the model.
    pub fn value_of(&self, literal: CLiteral) -> Option<bool> {
        match literal.atom() {
            0 => None,
            atom => self
                .values
                .get(atom as usize)
                .map(|value| *value == literal.polarity()),
        }
    }

    /// A count of the atoms in the model.
    pub fn atom_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// The literals true on the model, in atom order.
    pub fn true_literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| CLiteral::new(atom as Atom, *value))
    }

    /// Whether some literal of `clause` is true on the model.
    pub fn satisfies(&self, clause: &impl Clause) -> bool {
        clause
            .literals()
            .any(|literal| self.value_of(literal) == Some(true))
    }
}

/// Atoms without a value are read as false.
impl From<CValuation> for Model {
    fn from(valuation: CValuation) -> Self {
        let mut values = Vec::with_capacity(valuation.len());
        values.push(true);
        values.extend(
            valuation
                .atom_value_pairs()
                .map(|(_, value)| value.unwrap_or(false)),
        );
        Model { values }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for literal in self.true_literals() {
            write!(f, "{literal} ")?;
        }
        write!(f, "0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfaction_and_display() {
        let model = Model::from(vec![Some(true), Some(true), None]);
        assert_eq!(model.atom_count(), 2);
        let negative: [CLiteral; 2] = [-1, -2];
        let mixed: [CLiteral; 2] = [-1, 2];
        assert!(model.satisfies(&negative));
        assert!(!model.satisfies(&mixed));
        assert_eq!(model.to_string(), "1 -2 0");
        assert_eq!(model.value_of(0), None);
    }
}
