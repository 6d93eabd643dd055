mod common;

use websat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::clause::CClause,
    types::err::ErrorKind,
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        common::init_logger();
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();
        assert_eq!(the_context.add_clause(p), Ok(ClauseOk::Added));
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(1), Some(true));
    }

    #[test]
    fn conflict() {
        common::init_logger();
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();
        let q = the_context.fresh_or_max_literal();
        assert!(the_context.add_clause(vec![p, q]).is_ok());
        assert!(the_context.add_clause(vec![-p, -q]).is_ok());
        assert!(the_context.add_clause(vec![p, -q]).is_ok());
        assert!(the_context.add_clause(vec![-p, q]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.model(), Err(ErrorKind::NotSolved));
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::default();
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().expect("satisfiable");
        assert_eq!(model.atom_count(), 0);
    }

    #[test]
    fn empty_clause() {
        let mut the_context = Context::default();
        let p = the_context.fresh_or_max_literal();
        assert_eq!(the_context.add_clause(CClause::default()), Ok(ClauseOk::Added));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));

        // Unsatisfiability survives further input.
        assert!(the_context.add_clause(p).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn invalid_literal_leaves_formula_unchanged() {
        let mut the_context = Context::default();
        let p = the_context.fresh_or_max_literal();
        assert_eq!(
            the_context.add_clause(vec![-p, 2]),
            Err(ErrorKind::InvalidLiteral(2))
        );
        assert_eq!(
            the_context.add_clause(vec![p, 0]),
            Err(ErrorKind::InvalidLiteral(0))
        );
        assert!(the_context.add_clause(p).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(1), Some(true));
    }

    #[test]
    fn tautology_and_duplicates() {
        let mut the_context = Context::default();
        let p = the_context.fresh_or_max_literal();
        let q = the_context.fresh_or_max_literal();
        assert_eq!(
            the_context.add_clause(vec![p, q, -p]),
            Ok(ClauseOk::Tautology)
        );
        assert_eq!(the_context.add_clause(vec![-q, -q]), Ok(ClauseOk::Added));
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.value_of(2), Some(false));
    }

    #[test]
    fn model_before_solve() {
        let mut the_context = Context::default();
        let p = the_context.fresh_or_max_literal();
        assert!(the_context.add_clause(p).is_ok());
        assert_eq!(the_context.model(), Err(ErrorKind::NotSolved));
    }

    #[test]
    fn model_satisfies_formula() {
        common::init_logger();
        let mut the_context = Context::default();
        let literals = the_context.fresh_or_max_literals(6);
        let formula = vec![
            vec![literals[0], literals[1], -literals[2]],
            vec![-literals[0], literals[3]],
            vec![-literals[3], -literals[1], literals[4]],
            vec![-literals[4], literals[5]],
            vec![-literals[5], -literals[0]],
            vec![literals[2], literals[0]],
        ];
        for clause in &formula {
            assert!(the_context.add_clause(clause.clone()).is_ok());
        }
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().expect("satisfiable");
        assert!(formula.iter().all(|clause| model.satisfies(clause)));
    }

    #[test]
    fn pigeonhole() {
        common::init_logger();
        for (pigeons, holes, expected) in [
            (3, 3, Report::Satisfiable),
            (4, 3, Report::Unsatisfiable),
            (5, 4, Report::Unsatisfiable),
        ] {
            let mut the_context = Context::default();
            the_context.fresh_or_max_literals((pigeons * holes) as usize);
            for clause in common::pigeonhole(pigeons, holes) {
                assert!(the_context.add_clause(clause).is_ok());
            }
            assert_eq!(the_context.solve(), Ok(expected));
        }
    }
}
