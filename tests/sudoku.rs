mod common;

use websat::{
    interface::{IncrementalSolver, Solver},
    structures::{clause::CClause, literal::CLiteral},
};

mod sudoku {
    use super::*;

    const PUZZLE: [&str; 9] = [
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ];

    const SOLUTION: [&str; 9] = [
        "534678912",
        "672195348",
        "198342567",
        "859761423",
        "426853791",
        "713924856",
        "961537284",
        "287419635",
        "345286179",
    ];

    /// The literal for `value` (from 0) at `row` and `column`.
    fn cell(row: usize, column: usize, value: usize) -> CLiteral {
        (row * 81 + column * 9 + value + 1) as CLiteral
    }

    /// Every cell has exactly one value, and each value appears once in each row, column, and box.
    fn rules() -> Vec<CClause> {
        let mut clauses = Vec::default();

        let mut exactly_one = |group: Vec<CLiteral>| {
            for (index, literal) in group.iter().enumerate() {
                for other in &group[index + 1..] {
                    clauses.push(vec![-literal, -other]);
                }
            }
            clauses.push(group);
        };

        for row in 0..9 {
            for column in 0..9 {
                exactly_one((0..9).map(|value| cell(row, column, value)).collect());
            }
        }

        for value in 0..9 {
            for row in 0..9 {
                exactly_one((0..9).map(|column| cell(row, column, value)).collect());
            }
            for column in 0..9 {
                exactly_one((0..9).map(|row| cell(row, column, value)).collect());
            }
            for block in 0..9 {
                let (top, left) = ((block / 3) * 3, (block % 3) * 3);
                exactly_one(
                    (0..9)
                        .map(|offset| cell(top + offset / 3, left + offset % 3, value))
                        .collect(),
                );
            }
        }

        clauses
    }

    fn digit(character: char) -> Option<usize> {
        character.to_digit(10).map(|digit| digit as usize - 1)
    }

    #[test]
    fn classic() {
        common::init_logger();
        let mut solver = Solver::default();
        for _ in 0..729 {
            solver.new_literal();
        }
        for clause in rules() {
            assert!(solver.add_clause(&clause).is_ok());
        }
        for (row, line) in PUZZLE.iter().enumerate() {
            for (column, character) in line.chars().enumerate() {
                if let Some(value) = digit(character) {
                    assert!(solver.add_clause(&[cell(row, column, value)]).is_ok());
                }
            }
        }

        // One clue beyond the puzzle, taken from the solution.
        assert!(solver.add_clause(&[cell(0, 2, 3)]).is_ok());

        assert_eq!(solver.solve(), Ok(true));
        let model = solver.extract().expect("satisfiable");

        for (row, line) in SOLUTION.iter().enumerate() {
            for (column, character) in line.chars().enumerate() {
                let value = digit(character).expect("solution digit");
                assert_eq!(model.value_of(cell(row, column, value)), Some(true));
            }
        }
    }

    #[test]
    fn unique_solution() {
        let mut solver = Solver::default();
        for _ in 0..729 {
            solver.new_literal();
        }
        for clause in rules() {
            assert!(solver.add_clause(&clause).is_ok());
        }
        for (row, line) in PUZZLE.iter().enumerate() {
            for (column, character) in line.chars().enumerate() {
                if let Some(value) = digit(character) {
                    assert!(solver.add_clause(&[cell(row, column, value)]).is_ok());
                }
            }
        }
        assert_eq!(solver.solve(), Ok(true));

        let blocking_clause = SOLUTION
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars().enumerate().filter_map(move |(column, character)| {
                    digit(character).map(|value| -cell(row, column, value))
                })
            })
            .collect::<Vec<_>>();
        assert!(solver.add_clause(&blocking_clause).is_ok());
        assert_eq!(solver.solve(), Ok(false));
    }

    #[test]
    fn conflicting_givens() {
        let mut solver = Solver::default();
        for _ in 0..729 {
            solver.new_literal();
        }
        for clause in rules() {
            assert!(solver.add_clause(&clause).is_ok());
        }
        assert!(solver.add_clause(&[cell(0, 0, 4)]).is_ok());
        assert!(solver.add_clause(&[cell(0, 8, 4)]).is_ok());
        assert_eq!(solver.solve(), Ok(false));
    }
}
