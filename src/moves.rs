use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// Edge tag - the label of the tile that slid and the direction it slid in.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) label: String,
    pub(crate) dir: Dir,
}

impl Move {
    pub(crate) fn new(label: &str, dir: Dir) -> Self {
        Move {
            label: label.to_string(),
            dir,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![
            Move::new("3", Dir::Down),
            Move::new("12", Dir::Right),
            Move::new("1", Dir::Up),
            Move::new("3", Dir::Left),
        ]);
        assert_eq!(moves.to_string(), "3D-12R-1U-3L");
        assert_eq!(format!("{:?}", moves), "3D-12R-1U-3L");
        assert_eq!(moves.move_cnt(), 4);
    }

    #[test]
    fn formatting_empty() {
        let moves = Moves::default();
        assert_eq!(moves.to_string(), "");
        assert!(moves.is_empty());
    }

    #[test]
    fn iterating() {
        let v = vec![Move::new("1", Dir::Left), Move::new("2", Dir::Up)];
        let moves = Moves::new(v.clone());

        let mut v2 = Vec::new();
        for m in &moves {
            v2.push(m.clone());
        }
        for m in moves.iter() {
            v2.push(m.clone());
        }
        for m in moves {
            v2.push(m);
        }

        assert_eq!(v2.len(), 6);
        for chunk in v2.chunks(2) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
