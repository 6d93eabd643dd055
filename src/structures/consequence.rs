//! The reason an atom was assigned a value.

use crate::db::ClauseKey;

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AssignmentSource {
    /// A free choice made during a solve.
    Decision,

    /// A unit clause added to the context.
    Original,

    /// A unit clause derived during conflict analysis.
    Addition,

    /// A consequence of boolean constraint propagation on the keyed clause.
    BCP(ClauseKey),
}
