use crate::structures::literal::CLiteral;

/// The index to a clause of some kind.
pub type FormulaIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored in vectors, one for each kind of clause, and a key records the kind of clause together with the index of the clause.
///
/// The exception is unit clauses.
/// Here, the key is the (unit) clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to an original unit clause contains the clause.
    OriginalUnit(CLiteral),

    /// The key to a unit clause obtained by analysis contains the clause.
    AdditionUnit(CLiteral),

    /// The key to an original binary clause.
    OriginalBinary(FormulaIndex),

    /// The key to a binary clause obtained by analysis.
    AdditionBinary(FormulaIndex),

    /// The key to an original clause of three or more literals.
    Original(FormulaIndex),

    /// The key to a clause of three or more literals obtained by analysis.
    Addition(FormulaIndex),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OriginalUnit(key) => write!(f, "OriginalUnit({key})"),
            Self::AdditionUnit(key) => write!(f, "AdditionUnit({key})"),
            Self::OriginalBinary(key) => write!(f, "OriginalBinary({key})"),
            Self::AdditionBinary(key) => write!(f, "AdditionBinary({key})"),
            Self::Original(key) => write!(f, "Original({key})"),
            Self::Addition(key) => write!(f, "Addition({key})"),
        }
    }
}
