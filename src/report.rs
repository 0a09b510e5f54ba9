use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use prettytable::{Cell, Row, Table};

use crate::puzzle::Puzzle;
use crate::solver::SolverOk;

/// The result of one run in the output format:
///
/// ```text
/// 3L
/// Num of nodes generated: 3
/// Path cost: 1
/// 0.001 seconds
/// ```
///
/// `No path` replaces the path both when there is no solution and when the puzzle was already solved,
/// the cost line is only present when there is something to move.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a SolverOk,
    elapsed: Duration,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a SolverOk, elapsed: Duration) -> Self {
        Report { solution, elapsed }
    }
}

impl<'a> Display for Report<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let moves = self.solution.moves.as_ref().filter(|moves| !moves.is_empty());

        match moves {
            Some(moves) => writeln!(f, "{}", moves)?,
            None => writeln!(f, "No path")?,
        }
        writeln!(
            f,
            "Num of nodes generated: {}",
            self.solution.stats.total_created()
        )?;
        if moves.is_some() {
            writeln!(f, "Path cost: {}", self.solution.cost)?;
        }
        writeln!(f, "{:.3} seconds", seconds(self.elapsed))
    }
}

/// One row per method, each solution is replayed on `puzzle` to check it.
pub fn comparison(puzzle: &Puzzle, runs: &[(SolverOk, Duration)]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(
        ["Method", "Moves", "Cost", "Nodes", "Seconds", "Verified"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for (solution, elapsed) in runs {
        let (moves, cost, verified) = match solution.moves {
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
            Some(ref moves) => {
                let verified = match puzzle.replay(&moves.to_string()) {
                    Ok((replayed, cost)) => replayed.is_solved() && cost == solution.cost,
                    Err(_) => false,
                };
                let verified = if verified { "yes" } else { "NO" };
                (
                    moves.move_cnt().to_string(),
                    solution.cost.to_string(),
                    verified.to_string(),
                )
            }
        };

        table.add_row(Row::new(vec![
            Cell::new(&solution.method.to_string()),
            Cell::new(&moves),
            Cell::new(&cost),
            Cell::new(&solution.stats.total_created().to_string()),
            Cell::new(&format!("{:.3}", seconds(*elapsed))),
            Cell::new(&verified),
        ]));
    }

    table
}

fn seconds(duration: Duration) -> f64 {
    duration.as_secs() as f64 + f64::from(duration.subsec_nanos()) / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Method;
    use crate::fixtures::*;

    #[test]
    fn formatting_path() {
        let solution = run(ONE_MOVE, Method::AStar);
        let report = Report::new(&solution, Duration::from_millis(1234));
        let expected = r"
3L
Num of nodes generated: 3
Path cost: 1
1.234 seconds
"
        .trim_start();
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn formatting_solved() {
        let solution = run(SOLVED, Method::Bfs);
        let report = Report::new(&solution, Duration::from_micros(400));
        let expected = r"
No path
Num of nodes generated: 1
0.000 seconds
"
        .trim_start();
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn formatting_unsolvable() {
        let solution = run(UNSOLVABLE, Method::Bfs);
        let report = Report::new(&solution, Duration::from_secs(2));
        let expected = r"
No path
Num of nodes generated: 14
2.000 seconds
"
        .trim_start();
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn comparing_methods() {
        let puzzle = ONE_MOVE.parse::<crate::Task>().unwrap().puzzle;
        let runs: Vec<_> = Method::ALL
            .iter()
            .map(|&method| (run(ONE_MOVE, method), Duration::from_millis(5)))
            .collect();
        let table = comparison(&puzzle, &runs);
        // titles aren't counted
        assert_eq!(table.len(), 5);

        let text = table.to_string();
        assert!(text.contains("DFBnB"));
        assert!(text.contains("0.005"));
        assert!(!text.contains("NO"));
    }
}
