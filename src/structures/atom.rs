/*!
Atoms, aka. variables.

An atom is a `u32` index into the databases of a context.
Atoms are allocated in sequence, and so the atoms of a context are always `[0..m)` for some `m`.

The atom `0` is reserved.
It is valued true at the creation of a context and never changes value.
So, the first atom available to a caller is `1`, which lines up with the usual DIMACS convention of numbering variables from one.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Limited by the representation of literals as signed integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
