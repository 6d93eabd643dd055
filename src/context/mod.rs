/*!
The context, which owns a formula together with everything used to solve it.

A [Context] is a [GenericContext] over the [MinimalPCG32](crate::generic::random::MinimalPCG32) source of randomness, and is what most uses require.
Only a [Context] can be made [from a config](Context::from_config), as the config supplies the seed.

# States

A context moves between [states](ContextState) as it is used:

```none
Configuration --add--> Input --solve--> Satisfiable | Unsatisfiable
                         ^                   |
                         +---add or fresh----+
```

- Adding a clause, or allocating an atom, while satisfiable returns the context to input.
  The valuation is forgotten back to level zero, so no stale model can be read.
- Unsatisfiability is never undone, as adding clauses only narrows the models of a formula.
- A solve stopped by its [budget](crate::config::Budget) also returns the context to input.

# Example
```rust
# use websat::context::{Context, ContextState};
# use websat::reports::Report;
let mut the_context = Context::default();
assert_eq!(the_context.state, ContextState::Configuration);

let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();
assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(-p).is_ok());
assert_eq!(the_context.state, ContextState::Input);

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.value_of(2), Some(true));

// As q was fixed by propagation at level zero, the clause is empty on arrival.
assert!(the_context.add_clause(-q).is_ok());
assert_eq!(the_context.state, ContextState::Unsatisfiable);
assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// Where a context is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Nothing has been added, and every option may be set.
    Configuration,

    /// Clauses have been added, and satisfiability is unknown.
    Input,

    /// The most recent solve found a model, held as the current valuation.
    Satisfiable,

    /// Some solve, or some added clause, showed the formula has no model.
    Unsatisfiable,

    /// A solve is underway.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
