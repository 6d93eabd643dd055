use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Information gathered while reading a DIMACS formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem specification, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// The count of atoms in the context after reading.
    pub added_atoms: usize,

    /// The count of clauses read and added to the context.
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// The integer *n* is read as the literal on atom *|n|* with polarity the sign of *n*, and atoms are allocated as needed.
    /// So, the problem specification (`p cnf …`) is optional, though if present it must precede every clause.
    /// Comments (`c …`) are skipped, and reading stops at a line beginning with `%`.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use websat::context::Context;
    /// # use websat::reports::Report;
    /// let mut the_context = Context::default();
    ///
    /// let dimacs = b"
    /// c A small formula
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_clauses, Some(7));
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'formula_loop,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if info.added_clauses > 0 || !clause_buffer.is_empty() {
                        return Err(ErrorKind::from(err::ParseError::MisplacedProblem(
                            line_counter,
                        )));
                    }

                    let (atoms, clauses) = parse_problem(&buffer)?;
                    let top = Atom::try_from(atoms).map_err(|_| err::AtomDBError::AtomsExhausted)?;
                    self.ensure_atom(top)?;

                    log::info!(target: targets::PREPROCESSING, "Expecting {atoms} atoms and {clauses} clauses");
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    for item in buffer.split_whitespace() {
                        let Ok(parsed_int) = item.parse::<i32>() else {
                            return Err(ErrorKind::from(err::ParseError::Line(line_counter)));
                        };

                        match parsed_int {
                            0 => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }

                            _ => {
                                let the_literal: CLiteral = parsed_int;
                                self.ensure_atom(the_literal.atom())?;
                                clause_buffer.push(the_literal);
                            }
                        }
                    }
                }
            }
        }

        // A final clause without a terminating zero.
        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.added_clauses += 1;
        }

        info.added_atoms = self.atom_db.count() - 1;

        if info
            .expected_clauses
            .is_some_and(|expected| expected != info.added_clauses)
        {
            log::warn!(target: targets::PREPROCESSING, "Expected {:?} clauses, read {}", info.expected_clauses, info.added_clauses);
        }

        Ok(info)
    }
}

/// The counts of atoms and clauses from a problem specification line, `p cnf <atoms> <clauses>`.
fn parse_problem(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification),
    }

    let mut count = || -> Result<usize, err::ParseError> {
        problem_details
            .next()
            .and_then(|string| string.parse().ok())
            .ok_or(err::ParseError::ProblemSpecification)
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;

    #[test]
    fn problem_line() {
        assert_eq!(parse_problem("p cnf 3 2\n"), Ok((3, 2)));
        assert_eq!(
            parse_problem("p dnf 3 2"),
            Err(err::ParseError::ProblemSpecification)
        );
        assert_eq!(
            parse_problem("p cnf three 2"),
            Err(err::ParseError::ProblemSpecification)
        );
    }

    #[test]
    fn atoms_from_header_and_clauses() {
        let mut context = Context::default();
        let info = context
            .read_dimacs(b"p cnf 5 1\n1 -3 0\n".as_slice())
            .expect("read");
        assert_eq!(info.added_atoms, 5);
        assert_eq!(info.added_clauses, 1);

        let mut context = Context::default();
        let info = context
            .read_dimacs(b"c no header\n2 -7\n0 4 0\n%\n9 0\n".as_slice())
            .expect("read");
        assert_eq!(info.expected_atoms, None);
        assert_eq!(info.added_atoms, 7);
        assert_eq!(info.added_clauses, 2);
    }

    #[test]
    fn malformed() {
        let mut context = Context::default();
        assert_eq!(
            context.read_dimacs(b"1 2 0\n1 x 0\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );

        let mut context = Context::default();
        assert_eq!(
            context.read_dimacs(b"1 2 0\np cnf 2 1\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::MisplacedProblem(2)))
        );
    }
}
