mod common;

use rand::SeedableRng;
use websat::{
    config::Config,
    generic::random::MinimalPCG32,
    interface::{IncrementalSolver, Solver},
};

mod brute_force {
    use super::*;

    fn check_against_enumeration(atoms: u32, clause_count: usize, width: usize, seeds: u64) {
        common::init_logger();
        let mut rng = MinimalPCG32::seed_from_u64(atoms as u64 * 1000 + width as u64);

        for seed in 0..seeds {
            let formula = common::random_formula(&mut rng, atoms, clause_count, width);
            let expected = common::brute_force_satisfiable(atoms, &formula);

            let mut config = Config::default();
            config.random_seed.value = seed;
            let mut solver = Solver::new(config);
            for _ in 0..atoms {
                solver.new_literal();
            }
            for clause in &formula {
                assert!(solver.add_clause(clause).is_ok());
            }

            let result = solver.solve();
            assert_eq!(result, Ok(expected), "formula {formula:?}");

            if expected {
                let model = solver.extract().expect("satisfiable");
                assert!(formula.iter().all(|clause| model.satisfies(clause)));
            }
        }
    }

    #[test]
    fn three_sat_near_threshold() {
        check_against_enumeration(10, 43, 3, 60);
    }

    #[test]
    fn three_sat_overconstrained() {
        check_against_enumeration(8, 60, 3, 40);
    }

    #[test]
    fn two_sat() {
        check_against_enumeration(12, 14, 2, 40);
    }

    #[test]
    fn wide_clauses() {
        check_against_enumeration(9, 120, 5, 30);
    }

    #[test]
    fn random_decisions() {
        common::init_logger();
        let mut rng = MinimalPCG32::seed_from_u64(77);

        for seed in 0..30 {
            let formula = common::random_formula(&mut rng, 10, 42, 3);
            let expected = common::brute_force_satisfiable(10, &formula);

            let mut config = Config::default();
            config.random_seed.value = seed;
            config.random_decision_bias.value = 0.3;
            config.polarity_lean.value = 0.5;
            config.phase_saving.value = false;
            let mut solver = Solver::new(config);
            for _ in 0..10 {
                solver.new_literal();
            }
            for clause in &formula {
                assert!(solver.add_clause(clause).is_ok());
            }
            assert_eq!(solver.solve(), Ok(expected));
        }
    }
}
