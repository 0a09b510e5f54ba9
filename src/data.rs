use std::fmt::{self, Display, Formatter};

/// Largest number of cells a board can have - tile ids are stored as `u16`.
pub(crate) const MAX_TILES: usize = u16::max_value() as usize;

/// Generating operator - the direction the tile next to the empty slot slides in.
///
/// `Left` pulls the tile on the right of the empty slot into it,
/// so the slot itself ends up one column to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Up,
    Right,
    Down,
}

/// The order in which every search method tries operators.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Up, Dir::Right, Dir::Down];

impl Dir {
    pub(crate) fn inverse(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
        }
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            Dir::Left => 'L',
            Dir::Up => 'U',
            Dir::Right => 'R',
            Dir::Down => 'D',
        }
    }

    pub(crate) fn from_symbol(c: char) -> Option<Dir> {
        match c {
            'L' => Some(Dir::Left),
            'U' => Some(Dir::Up),
            'R' => Some(Dir::Right),
            'D' => Some(Dir::Down),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Dims {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Dims {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Dims { rows, cols }
    }

    pub(crate) fn size(self) -> usize {
        self.rows * self.cols
    }

    pub(crate) fn pos(self, index: usize) -> Pos {
        Pos {
            r: index / self.cols,
            c: index % self.cols,
        }
    }

    /// Index of the cell the tile sliding in `dir` comes from,
    /// `None` if it would be outside the grid.
    pub(crate) fn source(self, empty: usize, dir: Dir) -> Option<usize> {
        let pos = self.pos(empty);
        match dir {
            Dir::Left if pos.c + 1 < self.cols => Some(empty + 1),
            Dir::Up if pos.r + 1 < self.rows => Some(empty + self.cols),
            Dir::Right if pos.c > 0 => Some(empty - 1),
            Dir::Down if pos.r > 0 => Some(empty - self.cols),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Pos {
    pub(crate) r: usize,
    pub(crate) c: usize,
}

impl Pos {
    pub(crate) fn dist(self, other: Pos) -> u32 {
        let dr = if self.r > other.r { self.r - other.r } else { other.r - self.r };
        let dc = if self.c > other.c { self.c - other.c } else { other.c - self.c };
        (dr + dc) as u32
    }
}
