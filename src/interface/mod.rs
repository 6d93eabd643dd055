/*!
A four-operation interface to an incremental solver.

The [IncrementalSolver] trait narrows a context to the operations needed by a host which treats the solver as a black box:

- [new_literal](IncrementalSolver::new_literal), to allocate a fresh atom and obtain its positive literal.
- [add_clause](IncrementalSolver::add_clause), to add a clause over allocated literals.
- [solve](IncrementalSolver::solve), to determine satisfiability of every clause added so far.
- [extract](IncrementalSolver::extract), to obtain a [Model] after a satisfiable solve.

The operations may be interleaved freely.
A clause added after a solve is kept alongside every previous clause, as are clauses derived during previous solves.

The trait is implemented by [Solver], a wrapper around a [Context] whose richer methods remain available through [context](Solver::context).

```rust
# use websat::interface::{IncrementalSolver, Solver};
let mut solver = Solver::default();
let p = solver.new_literal();
let q = solver.new_literal();

solver.add_clause(&[p, q]).unwrap();
solver.add_clause(&[-p]).unwrap();
assert_eq!(solver.solve(), Ok(true));

let model = solver.extract().unwrap();
assert_eq!(model.value_of(q), Some(true));

solver.add_clause(&[-q]).unwrap();
assert!(solver.extract().is_err());
assert_eq!(solver.solve(), Ok(false));
```

For moving text across a byte-oriented boundary, see [transcode].
*/

pub mod transcode;

use crate::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::{literal::CLiteral, model::Model},
    types::err::ErrorKind,
};

/// The four operations of an incremental solver.
pub trait IncrementalSolver {
    /// A fresh positive literal, on an atom greater than any atom previously allocated.
    fn new_literal(&mut self) -> CLiteral;

    /// Adds the disjunction of `literals` to the formula.
    ///
    /// The empty clause is accepted, and makes the formula unsatisfiable.
    /// A literal on an atom which was never allocated, or the literal `0`, is an [InvalidLiteral](ErrorKind::InvalidLiteral) error, and the formula is unchanged.
    fn add_clause(&mut self, literals: &[CLiteral]) -> Result<(), ErrorKind>;

    /// Whether the formula is satisfiable.
    ///
    /// A solve stopped by a [budget](crate::config::Budget) or the termination callback returns a [ResourceExhausted](ErrorKind::ResourceExhausted) error.
    fn solve(&mut self) -> Result<bool, ErrorKind>;

    /// A model of the formula, if the most recent solve was satisfiable and the formula is unchanged since.
    fn extract(&self) -> Result<Model, ErrorKind>;
}

/// A [Context] behind the four-operation interface.
pub struct Solver {
    context: Context,
}

impl Solver {
    /// A solver whose context is created from `config`.
    pub fn new(config: Config) -> Self {
        Solver {
            context: Context::from_config(config),
        }
    }

    /// The underlying context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The underlying context, mutably.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl From<Context> for Solver {
    fn from(context: Context) -> Self {
        Solver { context }
    }
}

impl IncrementalSolver for Solver {
    fn new_literal(&mut self) -> CLiteral {
        self.context.fresh_or_max_literal()
    }

    fn add_clause(&mut self, literals: &[CLiteral]) -> Result<(), ErrorKind> {
        match self.context.add_clause(literals)? {
            ClauseOk::Added | ClauseOk::Tautology | ClauseOk::Satisfied => Ok(()),
        }
    }

    fn solve(&mut self) -> Result<bool, ErrorKind> {
        match self.context.solve()? {
            Report::Satisfiable => Ok(true),
            Report::Unsatisfiable => Ok(false),
            Report::Unknown => Err(ErrorKind::InvalidState),
        }
    }

    fn extract(&self) -> Result<Model, ErrorKind> {
        self.context.model()
    }
}
