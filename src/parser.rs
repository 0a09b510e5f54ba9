use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashSet;

use crate::config::{Method, MethodErr, DEFAULT_HEAVY_COST, LIGHT_COST};
use crate::data::MAX_TILES;
use crate::puzzle::{IntegrityErr, Puzzle};
use crate::tile::{Color, Tile, EMPTY_LABEL};
use crate::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    MissingLine(&'static str),
    Dimensions(String),
    TooLarge,
    TileCount { expected: usize, found: usize },
    InvalidTile(String),
    DuplicateTile(String),
    UnsupportedAlgorithm(MethodErr),
    Integrity(IntegrityErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserErr::Empty => write!(f, "Empty input"),
            ParserErr::MissingLine(what) => write!(f, "Missing line with {}", what),
            ParserErr::Dimensions(line) => {
                write!(f, "Invalid dimensions: '{}' - expected ROWSxCOLS", line)
            }
            ParserErr::TooLarge => write!(f, "Board has more than {} cells", MAX_TILES),
            ParserErr::TileCount { expected, found } => {
                write!(f, "Expected {} tiles, found {}", expected, found)
            }
            ParserErr::InvalidTile(label) => write!(f, "Invalid tile: '{}'", label),
            ParserErr::DuplicateTile(label) => write!(f, "Duplicate tile: '{}'", label),
            ParserErr::UnsupportedAlgorithm(err) => write!(f, "{}", err),
            ParserErr::Integrity(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<MethodErr> for ParserErr {
    fn from(err: MethodErr) -> Self {
        ParserErr::UnsupportedAlgorithm(err)
    }
}

impl From<IntegrityErr> for ParserErr {
    fn from(err: IntegrityErr) -> Self {
        ParserErr::Integrity(err)
    }
}

impl FromStr for Task {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, DEFAULT_HEAVY_COST)
    }
}

pub(crate) fn parse(text: &str, heavy_cost: u32) -> Result<Task, ParserErr> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let method: Method = lines.next().ok_or(ParserErr::Empty)?.parse()?;
    let dims = lines.next().ok_or(ParserErr::MissingLine("dimensions"))?;
    let (rows, cols) = parse_dimensions(dims)?;
    let fixed = parse_list(lines.next().ok_or(ParserErr::MissingLine("fixed tiles"))?);
    let heavy = parse_list(lines.next().ok_or(ParserErr::MissingLine("heavy tiles"))?);

    let labels: Vec<&str> = lines
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .collect();
    let size = rows * cols;
    if labels.len() != size {
        return Err(ParserErr::TileCount {
            expected: size,
            found: labels.len(),
        });
    }

    let mut seen = FnvHashSet::default();
    let mut board = Vec::with_capacity(size);
    for label in labels {
        if label == EMPTY_LABEL {
            // more than one is an integrity error, not a configuration error
            board.push(Tile::empty());
            continue;
        }

        let number: usize = match label.parse::<usize>() {
            // "03" or "+3" would miss "3" in the fixed and heavy lists
            Ok(number) if number >= 1 && number < size && number.to_string() == label => number,
            _ => return Err(ParserErr::InvalidTile(label.to_string())),
        };
        if !seen.insert(number) {
            return Err(ParserErr::DuplicateTile(label.to_string()));
        }

        // fixed wins if a tile is listed in both
        let tile = if fixed.contains(label) {
            Tile::numbered(number, Color::Fixed, 0)
        } else if heavy.contains(label) {
            Tile::numbered(number, Color::Heavy, heavy_cost)
        } else {
            Tile::numbered(number, Color::Light, LIGHT_COST)
        };
        board.push(tile);
    }

    let puzzle = Puzzle::new(rows, cols, board)?;
    Ok(Task { method, puzzle })
}

/// Accepts `3x4` as well as `3X4`.
fn parse_dimensions(line: &str) -> Result<(usize, usize), ParserErr> {
    let err = || ParserErr::Dimensions(line.to_string());

    let mut parts = line.split(|c: char| c == 'x' || c == 'X').map(str::trim);
    let rows: usize = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let cols: usize = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    if parts.next().is_some() || rows == 0 || cols == 0 {
        return Err(err());
    }

    match rows.checked_mul(cols) {
        Some(size) if size <= MAX_TILES => Ok((rows, cols)),
        _ => Err(ParserErr::TooLarge),
    }
}

/// The part of `line` after the first colon, split on commas.
fn parse_list(line: &str) -> FnvHashSet<&str> {
    let list = match line.find(':') {
        Some(colon) => &line[colon + 1..],
        None => line,
    };
    list.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fixtures::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::Empty);
        assert_failure("\n  \n\n", ParserErr::Empty);
    }

    #[test]
    fn fail_unsupported_algorithm() {
        let input = r"
Dijkstra
2x2
Fixed:
Heavy:
1,2
_,3
";
        let err = input.parse::<Task>().unwrap_err();
        assert_eq!(
            err,
            ParserErr::UnsupportedAlgorithm(MethodErr("Dijkstra".to_string()))
        );
        assert_eq!(err.to_string(), "Unsupported search algorithm: 'Dijkstra'");
    }

    #[test]
    fn fail_missing_lines() {
        assert_failure("BFS", ParserErr::MissingLine("dimensions"));
        assert_failure("BFS\n2x2", ParserErr::MissingLine("fixed tiles"));
        assert_failure("BFS\n2x2\nFixed: 1", ParserErr::MissingLine("heavy tiles"));
        assert_failure(
            "BFS\n2x2\nFixed: 1\nHeavy:",
            ParserErr::TileCount {
                expected: 4,
                found: 0,
            },
        );
    }

    #[test]
    fn fail_dimensions() {
        for &dims in &["2", "2x", "x2", "0x2", "2x0", "2x2x2", "axb", "-1x2"] {
            let input = format!("BFS\n{}\nFixed:\nHeavy:\n1,2\n3,_\n", dims);
            assert_failure(&input, ParserErr::Dimensions(dims.to_string()));
        }
    }

    #[test]
    fn fail_too_large() {
        assert_failure("BFS\n256x256\nFixed:\nHeavy:\n", ParserErr::TooLarge);
        // overflows usize
        let input = format!("BFS\n{0}x{0}\nFixed:\nHeavy:\n", usize::max_value());
        assert_failure(&input, ParserErr::TooLarge);
    }

    #[test]
    fn fail_tile_count() {
        let input = r"
BFS
2x2
Fixed:
Heavy:
1,2
3
";
        assert_failure(
            input,
            ParserErr::TileCount {
                expected: 4,
                found: 3,
            },
        );
    }

    #[test]
    fn fail_invalid_tile() {
        for &label in &["0", "4", "a", "-1", "", "03", "+3"] {
            let input = format!("BFS\n2x2\nFixed:\nHeavy:\n1,2\n{},_\n", label);
            assert_failure(&input, ParserErr::InvalidTile(label.to_string()));
        }
    }

    #[test]
    fn fail_duplicate_tile() {
        let input = r"
BFS
2x2
Fixed:
Heavy:
1,2
2,_
";
        assert_failure(input, ParserErr::DuplicateTile("2".to_string()));
    }

    #[test]
    fn fail_integrity() {
        let input = r"
BFS
2x2
Fixed:
Heavy:
1,_
_,3
";
        assert_failure(input, ParserErr::Integrity(IntegrityErr::MultipleEmptyTiles));

        let input = r"
BFS
2x2
Fixed: 3
Heavy:
1,2
_,3
";
        let err = input.parse::<Task>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Fixed tile 3 is at index 3 instead of its target 2"
        );
    }

    #[test]
    fn colors() {
        let input = r"
  ida*

3X3
Fixed tiles: 5
Heavy tiles: 6, 2,
1, 2, 3
4, 5, 6
7, _, 8
";
        let task = input.parse::<Task>().unwrap();
        assert_eq!(task.method, Method::IdaStar);
        assert_eq!(task.puzzle.rows(), 3);
        assert_eq!(task.puzzle.cols(), 3);

        let colors: Vec<_> = (0..9).map(|i| task.puzzle.tile_at(i).color()).collect();
        assert_eq!(
            colors,
            vec![
                Color::Light,
                Color::Heavy,
                Color::Light,
                Color::Light,
                Color::Fixed,
                Color::Heavy,
                Color::Light,
                Color::None,
                Color::Light,
            ]
        );
        assert_eq!(task.puzzle.tile_at(1).cost(), DEFAULT_HEAVY_COST);
        assert_eq!(task.puzzle.tile_at(4).cost(), 0);
        assert_eq!(task.puzzle.to_string(), "1,2,3\n4,5,6\n7,_,8\n");
    }

    #[test]
    fn list_without_colon() {
        let input = "A*\n2x2\n1\n\n2\n1,3\n_,2";
        let task = input.parse::<Task>().unwrap();
        assert_eq!(task.puzzle.tile_at(0).color(), Color::Fixed);
        assert_eq!(task.puzzle.tile_at(1).color(), Color::Light);
        assert_eq!(task.puzzle.tile_at(3).color(), Color::Heavy);
    }

    #[test]
    fn heavy_cost() {
        let task = parse(HEAVY, 5).unwrap();
        // 5,4,3
        // 2,_,1
        assert_eq!(task.puzzle.tile_at(3).cost(), 5);
        assert_eq!(task.puzzle.tile_at(0).cost(), LIGHT_COST);
    }

    #[test]
    fn fixtures_parse() {
        for &(text, method) in &[
            (SOLVED, Method::Bfs),
            (ONE_MOVE, Method::Bfs),
            (UNSOLVABLE, Method::Bfs),
            (HEAVY, Method::AStar),
            (FIXED, Method::DfBnB),
            (LIGHT, Method::IdaStar),
        ] {
            assert_eq!(text.parse::<Task>().unwrap().method, method);
        }
    }

    fn assert_failure(input: &str, expected_err: ParserErr) {
        assert_eq!(input.parse::<Task>().unwrap_err(), expected_err);
    }
}
