use std::fmt::{self, Display, Formatter};

pub(crate) const EMPTY_LABEL: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Only the empty tile.
    None,
    /// Can't be moved, must already be on its target.
    Fixed,
    Light,
    Heavy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub(crate) label: String,
    pub(crate) target: Option<usize>,
    pub(crate) color: Color,
    pub(crate) cost: u32,
}

impl Tile {
    pub(crate) fn empty() -> Self {
        Tile {
            label: EMPTY_LABEL.to_string(),
            target: None,
            color: Color::None,
            cost: 0,
        }
    }

    /// Tile with label `number` belongs at index `number - 1`.
    pub(crate) fn numbered(number: usize, color: Color, cost: u32) -> Self {
        let cost = match color {
            Color::None | Color::Fixed => 0,
            Color::Light | Color::Heavy => cost,
        };
        Tile {
            label: number.to_string(),
            target: Some(number - 1),
            color,
            cost,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.color == Color::Fixed
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
