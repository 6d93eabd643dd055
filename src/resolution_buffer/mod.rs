/*!
A buffer for resolution during conflict analysis.

Given a clause which conflicts with the current valuation, the buffer resolves the clause with the antecedents of literals from the current level, in reverse order of assignment, until a single literal from the current level remains.
This literal is the first *unique implication point* (UIP), and the negation of the UIP together with the remaining literals forms an asserting clause.

Literals valued at level zero are omitted from the clause, as the negation of each is a consequence of the formula.

Atoms are marked as seen when first met, and a count of marked atoms from the current level is kept.
So, resolution stops as soon as the count reaches one.

The clause returned has the asserted literal at the first index and, if there are other literals, a literal of highest level at the second index.
This is the arrangement expected when [watching](crate::db::clause::db_clause) the literals of the clause.
*/

use crate::{
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey, LevelIndex},
    structures::{
        atom::Atom,
        clause::CClause,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A buffer for use when applying resolution to a sequence of clauses.
#[derive(Default)]
pub struct ResolutionBuffer {
    /// Whether an atom has been met during the current instance of resolution.
    seen: Vec<bool>,

    /// The clause under construction.
    /// The first index is reserved for the asserted literal.
    clause: CClause,

    /// Every atom met during the most recent instance of resolution.
    atoms_used: Vec<Atom>,
}

impl ResolutionBuffer {
    /// Clears the buffer of any previous instance of resolution.
    pub fn refresh(&mut self) {
        for atom in self.atoms_used.drain(..) {
            self.seen[atom as usize] = false;
        }
        self.clause.clear();
    }

    /// Grows the buffer so every atom up to `count` may be marked.
    pub fn grow_to_include(&mut self, count: usize) {
        if self.seen.len() < count {
            self.seen.resize(count, false);
        }
    }

    /// The atoms met during the most recent instance of resolution, excluding atoms valued at level zero.
    pub fn atoms_used(&self) -> impl Iterator<Item = Atom> + '_ {
        self.atoms_used.iter().copied()
    }

    /// Resolves the clause with the given key back to the first UIP, and returns the resulting asserting clause.
    ///
    /// The clause must conflict with the current valuation, and some decision must have been made.
    pub fn resolve_through_current_level(
        &mut self,
        key: &ClauseKey,
        clause_db: &ClauseDB,
        atom_db: &AtomDB,
        trail: &Trail,
    ) -> Result<CClause, err::ResolutionBufferError> {
        self.refresh();
        self.grow_to_include(atom_db.count());

        let current_level = trail.level();
        // Placeholder for the asserted literal.
        self.clause.push(0);

        let mut reason = clause_db
            .get(key)
            .map_err(|_| err::ResolutionBufferError::LostClause)?;
        let mut resolved: Option<CLiteral> = None;
        let mut path_count: usize = 0;
        let mut trail_index = trail.literals.len();

        loop {
            for literal in reason {
                let atom = literal.atom();
                if resolved.is_some_and(|resolved| resolved.atom() == atom)
                    || self.seen[atom as usize]
                {
                    continue;
                }

                let Some(level) = atom_db.level_of(atom) else {
                    return Err(err::ResolutionBufferError::UnvaluedLiteral);
                };
                if level == 0 {
                    continue;
                }

                self.seen[atom as usize] = true;
                self.atoms_used.push(atom);

                if level == current_level {
                    path_count += 1;
                } else {
                    self.clause.push(*literal);
                }
            }

            if path_count == 0 {
                return Err(err::ResolutionBufferError::NoCurrentLevel);
            }

            let next = loop {
                if trail_index == 0 {
                    return Err(err::ResolutionBufferError::MissingAntecedent);
                }
                trail_index -= 1;
                let literal = trail.literals[trail_index];
                if self.seen[literal.atom() as usize] {
                    break literal;
                }
            };

            self.seen[next.atom() as usize] = false;
            resolved = Some(next);
            path_count -= 1;

            if path_count == 0 {
                self.clause[0] = next.negate();
                break;
            }

            reason = match atom_db.source_of(next.atom()) {
                Some(AssignmentSource::BCP(antecedent)) => clause_db
                    .get(&antecedent)
                    .map_err(|_| err::ResolutionBufferError::LostClause)?,
                _ => return Err(err::ResolutionBufferError::MissingAntecedent),
            };
        }

        // Place a literal of highest level after the asserted literal.
        let mut highest: Option<(usize, LevelIndex)> = None;
        for (index, literal) in self.clause.iter().enumerate().skip(1) {
            let level = atom_db.level_of(literal.atom()).unwrap_or(0);
            if highest.map_or(true, |(_, highest_level)| level > highest_level) {
                highest = Some((index, level));
            }
        }
        if let Some((index, _)) = highest {
            self.clause.swap(1, index);
        }

        for atom in &self.atoms_used {
            self.seen[*atom as usize] = false;
        }

        Ok(std::mem::take(&mut self.clause))
    }
}
