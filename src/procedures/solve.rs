//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](GenericContext::solve) casts the conflict-driven clause-learning algorithm through a valuation relative consequence operator over formulas.
//!
//! On this operator a formula entails either itself, or a tautological consequence of itself with some additional clause.
//! And, if the operator cannot be applied, the formula is unsatisfiable.
//!
//! - If the formula entails itself, then inspection of the valuation is required:
//!   + If the valuation is partial some decision must be made.
//!   + If the valuation is complete, the formula is satisfiable (on the given valuation).
//! - If the formula entails some formula with an additional clause, then the formula is unsatisfiable on the given valuation, but *may be* satisfiable on some other valuation.
//!   Specifically, there is some sub-valuation of the current valuation on which the added clause asserts some literal, and a [backjump](crate::procedures::backjump) is made to that valuation.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |
//!   |       +---------------+
//!   |               ⌃
//!   |               |
//!   |               | if there is no update to the formula, and the valuation is partial
//!   |               |
//!   |               |              +-----> satisfiable, if the valuation is complete
//!   ⌄   +--------------------+     |
//! --+-->| apply_consequences |-----+
//!   ⌃   +--------------------+     |
//!   |               |              +-----> unsatisfiable, if apply_consequences fails
//!   |               |
//!   |               | if a clause is added to the formula
//!   |               |
//!   |               ⌄
//!   |           +----------+
//!   +-----------| backjump |
//!               +----------+
//! ```
//!
//! If propagation leaves every atom valued the solve is complete, and the valuation is reported as satisfying.
//! Otherwise, before each decision the solve may be interrupted:
//! - By a [restart](GenericContext::restart), which forgets every decision.
//! - By exhaustion of the [budget](crate::config::Budget) of the solve, or a request from the termination callback.
//!   In this case every decision is forgotten and the solve returns a [ResourceExhausted](err::ErrorKind::ResourceExhausted) error.
//!   Clauses derived during the solve are kept, and a later solve may continue from them.
//!
//! # Example
//!
//! ```rust
//! # use websat::config::Config;
//! # use websat::context::Context;
//! # use websat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_or_max_literal();
//! let q = the_context.fresh_or_max_literal();
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![p, -q]).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(1), the_context.value_of(2));
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p, -q]).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Literature
//!
//! The core solve procedure follows [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0)
//! and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::{apply_consequences::ApplyConsequencesOk, decision::DecisionOk},
    reports::Report,
    structures::consequence::AssignmentSource,
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable => return Ok(Report::Satisfiable),
            ContextState::Unsatisfiable => return Ok(Report::Unsatisfiable),
            _ => {}
        }

        if self.clause_db.has_empty_clause() {
            self.state = ContextState::Unsatisfiable;
            return Ok(Report::Unsatisfiable);
        }

        self.state = ContextState::Solving;
        self.counters.solves += 1;
        self.counters.fresh_conflicts = 0;
        self.counters.luby = crate::generic::luby::Luby::default();
        self.counters.restart_index = 0;

        let baseline = self.budget_baseline();
        log::info!(target: targets::SOLVE, "Solve {} on {} atoms", self.counters.solves, self.atom_db.count() - 1);

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            match self.apply_consequences()? {
                ApplyConsequencesOk::FundamentalConflict => break 'solve_loop,

                ApplyConsequencesOk::Exhausted => {
                    // With every atom valued there is nothing to branch on, and so no budget applies.
                    if self.valuation_is_full() {
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop;
                    }

                    if let Some(resource) = self.budget_interrupt(&baseline) {
                        log::info!(target: targets::SOLVE, "Solve interrupted: {resource}");
                        self.backjump(0);
                        self.state = ContextState::Input;
                        self.counters.time = baseline.start.elapsed();
                        return Err(err::ErrorKind::ResourceExhausted(resource));
                    }

                    if self.restart_interrupt() {
                        self.restart();
                        continue 'solve_loop;
                    }

                    match self.make_decision() {
                        DecisionOk::Literal(decision) => {
                            self.trail.store_decision(decision);
                            self.atom_db.set_value(
                                decision,
                                self.trail.level(),
                                AssignmentSource::Decision,
                            );
                        }

                        DecisionOk::Exhausted => break 'solve_loop,
                    }
                }

                ApplyConsequencesOk::UnitClause { literal } => {
                    self.record_assignment(literal, AssignmentSource::Addition)?;
                }

                ApplyConsequencesOk::AssertingClause { key, literal } => {
                    self.record_assignment(literal, AssignmentSource::BCP(key))?;
                }
            }
        }

        self.counters.time = baseline.start.elapsed();
        log::info!(target: targets::SOLVE, "Solve {} complete: {}", self.counters.solves, self.report());
        Ok(self.report())
    }
}
