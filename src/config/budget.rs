/// Limits on the effort spent by a single solve.
///
/// Each limit is counted from the start of a solve, and any limit of `None` is ignored.
/// A solve which reaches some limit stops with a [ResourceExhausted](crate::types::err::ErrorKind::ResourceExhausted) error, rather than a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Budget {
    /// The time allowed for a solve.
    pub time: Option<std::time::Duration>,

    /// The count of conflicts allowed during a solve.
    pub conflicts: Option<usize>,

    /// The count of propagated literals allowed during a solve.
    pub propagations: Option<usize>,
}
