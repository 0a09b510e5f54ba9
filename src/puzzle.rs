use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dims, Dir};
use crate::state::{State, EMPTY};
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityErr {
    NoEmptyTile,
    MultipleEmptyTiles,
    MisplacedFixedTile {
        label: String,
        index: usize,
        target: usize,
    },
}

impl Display for IntegrityErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityErr::NoEmptyTile => write!(f, "No empty tile"),
            IntegrityErr::MultipleEmptyTiles => write!(f, "More than one empty tile"),
            IntegrityErr::MisplacedFixedTile {
                label,
                index,
                target,
            } => write!(
                f,
                "Fixed tile {} is at index {} instead of its target {}",
                label, index, target
            ),
        }
    }
}

impl Error for IntegrityErr {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayErr {
    UnsupportedOperator(char),
    IllegalMove(String),
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReplayErr::UnsupportedOperator(c) => write!(f, "Unsupported generating operator: '{}'", c),
            ReplayErr::IllegalMove(tag) => write!(f, "Illegal move: {}", tag),
        }
    }
}

impl Error for ReplayErr {}

#[derive(Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub(crate) dims: Dims,
    /// Indexed by tile id.
    pub(crate) tiles: Vec<Tile>,
    pub(crate) state: State,
}

impl Puzzle {
    /// `board` lists tiles in row-major order.
    ///
    /// The parser guarantees labels are unique and each number is at most `rows * cols - 1`.
    pub(crate) fn new(rows: usize, cols: usize, board: Vec<Tile>) -> Result<Self, IntegrityErr> {
        let dims = Dims::new(rows, cols);
        debug_assert_eq!(board.len(), dims.size());

        let mut empty = None;
        for (index, tile) in board.iter().enumerate() {
            if tile.is_empty() {
                if empty.is_some() {
                    return Err(IntegrityErr::MultipleEmptyTiles);
                }
                empty = Some(index);
            } else if let Some(target) = tile.target.filter(|&t| tile.is_fixed() && t != index) {
                return Err(IntegrityErr::MisplacedFixedTile {
                    label: tile.label.clone(),
                    index,
                    target,
                });
            }
        }
        let empty = empty.ok_or(IntegrityErr::NoEmptyTile)?;

        let ids: Vec<u16> = board.iter().map(Self::id_of).collect();
        let mut tiles = board;
        tiles.sort_by_key(|tile| Self::id_of(tile));

        Ok(Puzzle {
            dims,
            tiles,
            state: State::new(ids, empty),
        })
    }

    fn id_of(tile: &Tile) -> u16 {
        match tile.target {
            None => EMPTY,
            Some(target) => (target + 1) as u16,
        }
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// The tile currently at `index` (row-major).
    pub fn tile_at(&self, index: usize) -> &Tile {
        self.tile(self.state.tiles[index])
    }

    pub(crate) fn tile(&self, id: u16) -> &Tile {
        &self.tiles[usize::from(id)]
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_goal()
    }

    /// Weighted manhattan distance - every tile that costs something to move
    /// has to travel at least its distance to the target.
    pub(crate) fn heuristic(&self, state: &State) -> u64 {
        state
            .tiles
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| {
                let tile = self.tile(id);
                match tile.target {
                    Some(target) if tile.cost > 0 => {
                        let dist = self.dims.pos(index).dist(self.dims.pos(target));
                        Some(u64::from(tile.cost) * u64::from(dist))
                    }
                    _ => None,
                }
            })
            .sum()
    }

    /// Applies a dash-separated list of edge tags (e.g. `3L-2U`)
    /// and returns the resulting puzzle and the total weight of the moves.
    pub fn replay(&self, path: &str) -> Result<(Puzzle, u64), ReplayErr> {
        let mut state = self.state.clone();
        let mut weight = 0;

        for tag in path.split('-').map(str::trim).filter(|tag| !tag.is_empty()) {
            let symbol = tag.chars().last().unwrap_or_default();
            let dir = Dir::from_symbol(symbol).ok_or(ReplayErr::UnsupportedOperator(symbol))?;
            let label = &tag[..tag.len() - symbol.len_utf8()];

            let illegal = || ReplayErr::IllegalMove(tag.to_string());
            let from = self.dims.source(state.empty, dir).ok_or_else(illegal)?;
            let tile = self.tile(state.tiles[from]);
            if tile.label != label || tile.is_fixed() {
                return Err(illegal());
            }

            weight += u64::from(tile.cost);
            state = state.slide(from);
        }

        let replayed = Puzzle {
            dims: self.dims,
            tiles: self.tiles.clone(),
            state,
        };
        Ok((replayed, weight))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            let row: Vec<_> = (0..self.cols())
                .map(|c| self.tile_at(r * self.cols() + c).label())
                .collect();
            writeln!(f, "{}", row.join(","))?;
        }
        Ok(())
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
