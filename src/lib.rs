//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! websat is an incremental conflict-driven clause-learning solver.
//! A host allocates literals, adds clauses, solves, and extracts models, in any order and as often as needed, with clauses derived by one solve kept for the next.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//! For hosts which only need the four basic operations, the [interface] module narrows a context to an [IncrementalSolver](interface::IncrementalSolver).
//!
//! Internally, and at a high-level, a solve is viewed in terms of manipulation of, and relationships between, a handful of databases.
//! Notably:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation is stored in an [atom database](crate::db::atom).
//! - The order in which atoms were valued, and why, is stored on the [trail](crate::db::trail).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (formulas, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of atoms.
//!
//! ```rust
//! # use websat::config::Config;
//! # use websat::context::Context;
//! # use websat::reports::Report;
//! use websat::structures::literal::{CLiteral, Literal};
//! use websat::structures::valuation::Valuation;
//!
//! let mut the_context = Context::from_config(Config::default());
//! let characters = "model".chars().collect::<Vec<_>>();
//! for _ in &characters {
//!     assert!(the_context.fresh_atom().is_ok())
//! }
//!
//! let mut count = 0;
//!
//! while let Ok(Report::Satisfiable) = the_context.solve() {
//!     count += 1;
//!
//!     let blocking_clause = the_context
//!         .valuation()
//!         .atom_value_pairs()
//!         .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom, !v)))
//!         .collect::<Vec<_>>();
//!
//!     assert!(the_context.add_clause(blocking_clause).is_ok());
//! }
//!
//! assert_eq!(count, 2_usize.pow(characters.len() as u32));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use websat::context::Context;
//! # use websat::reports::Report;
//! let mut the_context = Context::default();
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Restarts without information about propagation can be found with `RUST_LOG=restart=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

#[doc(hidden)]
pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod interface;

pub mod misc;

pub mod reports;

pub mod resolution_buffer;
