mod common;

use std::time::Duration;

use websat::{
    config::Config,
    context::Context,
    interface::{IncrementalSolver, Solver},
    reports::Report,
    types::err::{ErrorKind, ResourceError},
};

mod limits {
    use super::*;

    fn pigeonhole_context(config: Config) -> Context {
        let mut the_context = Context::from_config(config);
        the_context.fresh_or_max_literals(30);
        for clause in common::pigeonhole(6, 5) {
            assert!(the_context.add_clause(clause).is_ok());
        }
        the_context
    }

    #[test]
    fn conflict_budget() {
        common::init_logger();
        let mut config = Config::default();
        config.budget.conflicts = Some(1);
        let mut the_context = pigeonhole_context(config);

        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Conflicts))
        );
        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(the_context.model(), Err(ErrorKind::NotSolved));

        // The budget applies to each solve afresh.
        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Conflicts))
        );

        the_context.config.budget.conflicts = None;
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn propagation_budget() {
        let mut config = Config::default();
        config.budget.propagations = Some(0);
        let mut the_context = pigeonhole_context(config);
        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Propagations))
        );
    }

    #[test]
    fn time_budget() {
        let mut config = Config::default();
        config.budget.time = Some(Duration::ZERO);
        let mut the_context = pigeonhole_context(config);
        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Time))
        );
    }

    #[test]
    fn terminate_callback() {
        common::init_logger();
        let mut the_context = pigeonhole_context(Config::default());

        let mut calls = 0;
        the_context.set_callback_terminate(Box::new(move || {
            calls += 1;
            calls > 3
        }));
        assert_eq!(
            the_context.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Terminated))
        );

        the_context.set_callback_terminate(Box::new(|| false));
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn exhaustion_through_interface() {
        let mut config = Config::default();
        config.budget.conflicts = Some(1);
        let mut solver = Solver::from(pigeonhole_context(config));

        assert_eq!(
            solver.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Conflicts))
        );
        assert_eq!(solver.extract(), Err(ErrorKind::NotSolved));

        // Clauses may still be added after an interrupted solve.
        assert!(solver.add_clause(&[-1]).is_ok());
        solver.context_mut().config.budget.conflicts = None;
        assert_eq!(solver.solve(), Ok(false));
    }

    #[test]
    fn complete_valuation_ignores_time_budget() {
        let mut config = Config::default();
        config.budget.time = Some(Duration::ZERO);
        let mut solver = Solver::new(config);
        let x = solver.new_literal();

        assert!(solver.add_clause(&[x]).is_ok());
        assert_eq!(solver.solve(), Ok(true));
        assert_eq!(solver.extract().map(|model| model.value_of(x)), Ok(Some(true)));
    }

    #[test]
    fn complete_valuation_ignores_terminate_callback() {
        let mut solver = Solver::default();
        let x = solver.new_literal();
        let y = solver.new_literal();
        solver
            .context_mut()
            .set_callback_terminate(Box::new(|| true));

        assert!(solver.add_clause(&[x]).is_ok());
        assert!(solver.add_clause(&[-x, y]).is_ok());
        assert_eq!(solver.solve(), Ok(true));

        // An unvalued atom requires a decision, and so the callback is consulted.
        let _ = solver.new_literal();
        assert_eq!(
            solver.solve(),
            Err(ErrorKind::ResourceExhausted(ResourceError::Terminated))
        );
    }
}
