/*!
Literals, an atom paired with a polarity.

The canonical representation of a literal is a signed integer, [CLiteral].
A positive integer *n* asserts atom *n* is true, and the negative integer *-n* asserts atom *n* is false.
So, two literals are complementary exactly when one is the negation of the other.

As atom `0` is reserved, the integer `0` is never a literal handed out by a context.
This matches DIMACS, where `0` terminates a clause.

```rust
# use websat::structures::literal::{CLiteral, Literal};
let p: CLiteral = CLiteral::new(7, false);
assert_eq!(p, -7);
assert_eq!(p.negate(), 7);
assert_eq!(p.atom(), 7);
assert!(!p.polarity());
```
*/

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The canonical implementation of a literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_and_atom() {
        let literal = CLiteral::new(12, true);
        assert_eq!(literal, 12);
        assert!(literal.polarity());
        assert_eq!(literal.negate().atom(), 12);
        assert!(!literal.negate().polarity());
        assert_eq!(literal.negate().as_int(), -12);
    }
}
