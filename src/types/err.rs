//! Error types used in the library.
//!
//! - Some errors are external, and returned to a caller:
//!   - [InvalidLiteral](ErrorKind::InvalidLiteral) when a clause mentions an atom which was never allocated.
//!   - [NotSolved](ErrorKind::NotSolved) when a model is requested without a satisfiable solve.
//!   - [ResourceExhausted](ErrorKind::ResourceExhausted) when a solve gives up before determining satisfiability.
//! - Some are internally expected, e.g. BCP errors are used to control the flow of a solve.
//! - The remainder note corruption of some structure, and are very unlikely to occur during use.
//!
//! Names of the error enums overlap, for the most part, with corresponding structs.
//  So, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::literal::CLiteral};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Parse(ParseError),
    ResolutionBuffer(ResolutionBufferError),

    /// A clause contains a literal whose atom was never allocated, or the literal `0`.
    InvalidLiteral(CLiteral),

    /// A model was requested while the context is not known to be satisfiable.
    NotSolved,

    /// A solve stopped before satisfiability was determined.
    ResourceExhausted(ResourceError),

    /// A backjump was requested from some clause containing a literal without a value.
    Backjump,

    /// Some method was called while the context was in an unsuitable state.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral(literal) => write!(f, "Invalid literal: {literal}"),
            Self::NotSolved => write!(f, "No satisfying valuation is available"),
            Self::ResourceExhausted(resource) => write!(f, "Resource exhausted: {resource}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A key to some clause not in the database.
    Missing,

    /// An attempt was made to store an empty clause as a formula clause.
    EmptyClause,

    /// An attempt was made to watch a unit clause, or to store a clause with too few literals under a key.
    CorruptList,

    /// All possible keys have been used for some clause type.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The named option was given a value outside of its bounds.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// A malformed percent escape, at the given byte offset.
    Escape(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionBufferError {
    /// A clause could not be found.
    LostClause,

    /// Some literal at the current level was reached without an antecedent clause.
    MissingAntecedent,

    /// A literal of some clause used in resolution has no value.
    UnvaluedLiteral,

    /// The conflict clause contains no literal from the current level.
    NoCurrentLevel,
}

impl From<ResolutionBufferError> for ErrorKind {
    fn from(e: ResolutionBufferError) -> Self {
        ErrorKind::ResolutionBuffer(e)
    }
}

/// Resources whose exhaustion stops a solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// The time limit was reached.
    Time,

    /// The conflict budget was spent.
    Conflicts,

    /// The propagation budget was spent.
    Propagations,

    /// The termination callback requested a stop.
    Terminated,
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::ResourceExhausted(e)
    }
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time => write!(f, "time limit reached"),
            Self::Conflicts => write!(f, "conflict budget spent"),
            Self::Propagations => write!(f, "propagation budget spent"),
            Self::Terminated => write!(f, "terminated by callback"),
        }
    }
}
