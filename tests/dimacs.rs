mod common;

use std::{fs::File, io::BufReader, path::Path};

use websat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::clause::CClause,
    types::err::{ErrorKind, ParseError},
};

mod dimacs {
    use super::*;

    /// Solves the formula at `path`, checking any model against the clauses of the file.
    fn solve_file(path: &Path) -> Report {
        let file = File::open(path).expect("readable file");
        let mut the_context = Context::from_config(Config::default());
        let info = the_context
            .read_dimacs(BufReader::new(&file))
            .expect("well formed DIMACS");
        assert_eq!(info.expected_clauses, Some(info.added_clauses));

        let report = the_context.solve().expect("unlimited solve");
        if report == Report::Satisfiable {
            let model = the_context.model().expect("satisfiable");
            let original = the_context
                .clause_db
                .original_clauses()
                .map(|clause| clause.to_vec())
                .collect::<Vec<CClause>>();
            assert!(original.iter().all(|clause| model.satisfies(clause)));
        }
        report
    }

    #[test]
    fn directory() {
        common::init_logger();
        let pattern = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cnf/*.cnf");

        let mut checked = 0;
        for entry in glob::glob(pattern).expect("valid pattern") {
            let path = entry.expect("readable path");
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .expect("file name");

            let expected = if name.starts_with("unsat") {
                Report::Unsatisfiable
            } else {
                Report::Satisfiable
            };
            assert_eq!(solve_file(&path), expected, "{name}");
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn generated_pigeonhole() {
        let mut dimacs = String::from("p cnf 20 45\n");
        for clause in common::pigeonhole(5, 4) {
            for literal in clause {
                dimacs.push_str(&format!("{literal} "));
            }
            dimacs.push_str("0\n");
        }

        let mut the_context = Context::default();
        let info = the_context
            .read_dimacs(dimacs.as_bytes())
            .expect("well formed DIMACS");
        assert_eq!(info.expected_atoms, Some(20));
        assert_eq!(info.added_atoms, 20);
        assert_eq!(info.added_clauses, 45);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn incremental_reads() {
        let mut the_context = Context::default();
        assert!(the_context.read_dimacs("1 2 0\n-1 0\n".as_bytes()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(2), Some(true));

        assert!(the_context.read_dimacs("-2 3 0\n-3 0\n".as_bytes()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn errors() {
        let mut the_context = Context::default();
        assert_eq!(
            the_context.read_dimacs("1 2 0\n1 x 0\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Line(2)))
        );

        let mut the_context = Context::default();
        assert_eq!(
            the_context.read_dimacs("1 2 0\np cnf 2 1\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::MisplacedProblem(2)))
        );
    }
}
