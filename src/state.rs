use std::fmt::{self, Debug, Display, Formatter};

use crate::tile::EMPTY_LABEL;

/// Tile id of the empty slot, every other tile's id is its number.
pub(crate) const EMPTY: u16 = 0;

/// The arrangement of tiles on the board.
///
/// Tile ids equal tile labels (`0` standing for `_`) and labels are unique,
/// so comparing or hashing the id sequence is the same as comparing canonical label sequences.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct State {
    pub(crate) tiles: Vec<u16>,
    pub(crate) empty: usize,
}

impl State {
    /// `empty` must be the index of the only `EMPTY` tile.
    pub(crate) fn new(tiles: Vec<u16>, empty: usize) -> Self {
        debug_assert_eq!(tiles[empty], EMPTY);
        State { tiles, empty }
    }

    /// Slides the tile at `from` into the empty slot.
    pub(crate) fn slide(&self, from: usize) -> State {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.empty, from);
        State { tiles, empty: from }
    }

    pub(crate) fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == EMPTY
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &id)| usize::from(id) == i + 1)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, &id) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if id == EMPTY {
                write!(f, "{}", EMPTY_LABEL)?;
            } else {
                write!(f, "{}", id)?;
            }
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
