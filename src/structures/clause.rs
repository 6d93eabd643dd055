/*!
Clauses, disjunctions of literals.

The [Clause] trait is implemented for a single literal, arrays and slices of literals, and vectors of literals.
So, any of these may be handed to a context when adding a clause.

```rust
# use websat::structures::clause::{CClause, Clause};
let clause: CClause = vec![1, -2, 3];
assert_eq!(clause.size(), 3);
assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![1, 2, 3]);
```

Within the [clause database](crate::db::clause) clauses are stored in the canonical form of a [CClause].
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, in the order stored.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in the order stored.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !dimacs.is_empty() {
                dimacs.push(' ');
            }
            dimacs.push('0');
        }
        dimacs
    }
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause added to the context by a caller.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for &[CLiteral] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }
}

impl<const N: usize> Clause for [CLiteral; N] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        N
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
