//! Preprocessing of a clause before it is added to a context.

use crate::structures::{clause::CClause, literal::Literal};

/// Distinguishes a tautology from any other clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology.
    Tautology,

    /// Any clause.
    Clause,
}

/// Preprocess a clause to remove duplicate literals, noting whether the clause is a tautology.
///
/// The order of first occurrence is kept.
/// If the clause is a tautology, the clause may be left with duplicates.
pub fn preprocess_clause(clause: &mut CClause) -> PreprocessingOk {
    let mut index = 0;
    'clause_loop: while index < clause.len() {
        let literal = clause[index];

        for other_index in 0..index {
            let other_literal = clause[other_index];
            if other_literal.atom() == literal.atom() {
                if other_literal.polarity() == literal.polarity() {
                    clause.remove(index);
                    continue 'clause_loop;
                } else {
                    return PreprocessingOk::Tautology;
                }
            }
        }
        index += 1
    }

    PreprocessingOk::Clause
}
