mod common;

use websat::{
    config::{restarts::RestartPolicy, Config},
    interface::{IncrementalSolver, Solver},
};

mod parallel {
    use super::*;

    /// Independent solvers, with varied configurations, agree on a formula.
    #[test]
    fn configurations_agree() {
        common::init_logger();
        let formula = common::pigeonhole(6, 5);

        let results = crossbeam::scope(|scope| {
            let handles = [RestartPolicy::Luby, RestartPolicy::Geometric, RestartPolicy::Never]
                .into_iter()
                .enumerate()
                .map(|(index, policy)| {
                    let formula = &formula;
                    scope.spawn(move |_| {
                        let mut config = Config::default();
                        config.restart_policy.value = policy;
                        config.random_seed.value = index as u64;
                        config.random_decision_bias.value = 0.1 * index as f64;

                        let mut solver = Solver::new(config);
                        for _ in 0..30 {
                            solver.new_literal();
                        }
                        for clause in formula {
                            assert!(solver.add_clause(clause).is_ok());
                        }
                        solver.solve()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("solver thread"))
                .collect::<Vec<_>>()
        })
        .expect("scoped threads");

        assert_eq!(results, vec![Ok(false), Ok(false), Ok(false)]);
    }
}
