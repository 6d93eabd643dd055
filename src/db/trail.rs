/*!
The trail, a chronological record of assignments.

Assignments are pushed in the order made, and a level begins with each decision.
So, the assignments of level *n* are those from `level_indicies[n - 1]` up to the start of the next level, and level zero is every assignment before the first decision.

The trail also serves as the queue of assignments awaiting propagation.
Every assignment before `q_head` has been propagated, and those from `q_head` onwards are processed in order of assignment.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order.
    pub literals: Vec<CLiteral>,

    /// Indicies at which a level begins.
    pub level_indicies: Vec<usize>,

    /// The first assignment not yet propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Begins a fresh level with the given decision.
    pub fn store_decision(&mut self, decision: CLiteral) {
        self.level_indicies.push(self.literals.len());
        self.literals.push(decision);
    }

    /// The next assignment to propagate, if any.
    pub fn next_to_propagate(&self) -> Option<CLiteral> {
        self.literals.get(self.q_head).copied()
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// The assignments made at the current level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// Removes every level above `level`, returning the removed assignments in order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the removed assignments.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // Level n + 1 begins at level_indicies[n].
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                let removed = self.literals.split_off(level_start);
                self.q_head = std::cmp::min(self.q_head, self.literals.len());
                removed
            }
            None => Vec::default(),
        }
    }
}
