#![allow(dead_code)]

use rand::Rng;
use websat::{
    generic::random::MinimalPCG32,
    structures::{clause::CClause, literal::CLiteral},
};

/// Installs a logger for the test, if one has not already been installed.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The pigeonhole principle for `pigeons` pigeons and `holes` holes.
///
/// Atoms are numbered from 1, with pigeon `p` in hole `h` as atom `p * holes + h + 1`.
/// Unsatisfiable exactly when there are more pigeons than holes.
pub fn pigeonhole(pigeons: u32, holes: u32) -> Vec<CClause> {
    let atom = |p: u32, h: u32| (p * holes + h + 1) as CLiteral;
    let mut clauses = Vec::default();

    for p in 0..pigeons {
        clauses.push((0..holes).map(|h| atom(p, h)).collect());
    }

    for h in 0..holes {
        for p in 0..pigeons {
            for q in (p + 1)..pigeons {
                clauses.push(vec![-atom(p, h), -atom(q, h)]);
            }
        }
    }

    clauses
}

/// A random formula of `clauses` clauses, each of `width` literals over atoms `1..=atoms`.
pub fn random_formula(
    rng: &mut MinimalPCG32,
    atoms: u32,
    clauses: usize,
    width: usize,
) -> Vec<CClause> {
    (0..clauses)
        .map(|_| {
            (0..width)
                .map(|_| {
                    let atom = rng.random_range(1..=atoms) as CLiteral;
                    match rng.random_bool(0.5) {
                        true => atom,
                        false => -atom,
                    }
                })
                .collect()
        })
        .collect()
}

/// Whether some valuation of atoms `1..=atoms` satisfies every clause, by enumeration.
pub fn brute_force_satisfiable(atoms: u32, clauses: &[CClause]) -> bool {
    (0..(1_u64 << atoms)).any(|assignment| {
        clauses.iter().all(|clause| {
            clause.iter().any(|literal| {
                let bit = (assignment >> (literal.unsigned_abs() - 1)) & 1 == 1;
                bit == literal.is_positive()
            })
        })
    })
}
