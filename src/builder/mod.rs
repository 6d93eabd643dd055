/*!
Methods for putting a formula into a context.

A formula is built from fresh atoms (or literals) and clauses over them:
- [fresh_literal](crate::context::GenericContext::fresh_literal) and friends allocate atoms, numbered from one in order of allocation.
- [add_clause](crate::context::GenericContext::add_clause) adds a clause over allocated atoms, after [preprocessing](preprocess) the clause.
- [read_dimacs](crate::context::GenericContext::read_dimacs) does both, for a formula in DIMACS form.

Each of these may be called between solves.
A clause is always added at level zero, and so any valuation left by a solve is forgotten first.

```rust
# use websat::context::Context;
# use websat::builder::ClauseOk;
# use websat::reports::Report;
let mut the_context = Context::default();
let [p, q, r] = [(); 3].map(|_| the_context.fresh_or_max_literal());

assert_eq!(the_context.add_clause([p, -q]), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause([q, -r, -q]), Ok(ClauseOk::Tautology));
assert_eq!(the_context.add_clause(r), Ok(ClauseOk::Added));
assert_eq!(the_context.add_clause([-p, r]), Ok(ClauseOk::Satisfied));

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/
mod dimacs;
pub use dimacs::ParserInfo;

pub mod preprocess;
mod structures;

/// What became of an added clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,

    /// The clause contained some literal and its negation, and was discarded.
    Tautology,

    /// Some literal of the clause is fixed true at level zero, and the clause was discarded.
    Satisfied,
}
