/*!
An iterator to generate the luby sequence.

See <https://oeis.org/A182105> for details on the luby sequence.

The sequence is generated without storing previous elements.
The position in the sequence is tracked with `curr`, and `next` doubles until it equals the lowest set bit of `curr`, at which point the position advances and `next` restarts at one.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// Foundation of the iterator.
pub struct Luby {
    curr: LubyRepresentation,
    next: LubyRepresentation,
}

/// The default iterator is positioned on the first element of the sequence.
impl Default for Luby {
    fn default() -> Self {
        let mut luby = Luby { curr: 0, next: 0 };
        luby.next();
        luby
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr & self.curr.wrapping_neg() == self.next {
            self.curr = self.curr.checked_add(1)?;
            self.next = 1;
        } else {
            self.next = self.next.checked_add(self.next)?;
        }

        Some(self.next)
    }
}

impl Luby {
    /// The current element of the sequence.
    pub fn current(&self) -> LubyRepresentation {
        self.next
    }
}
