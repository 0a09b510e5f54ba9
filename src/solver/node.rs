use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

use crate::data::Dir;
use crate::state::{State, EMPTY};

/// A vertex of the search tree, allocated in the per-run arena.
///
/// Only `f` and `marked` change after creation,
/// the strategies which use them own them for the duration of the run.
pub(crate) struct Node<'a> {
    pub(crate) state: State,
    pub(crate) parent: Option<&'a Node<'a>>,
    /// `None` only for the root.
    pub(crate) dir: Option<Dir>,
    /// Id of the tile that slid to create this node, `EMPTY` for the root.
    pub(crate) moved: u16,
    pub(crate) weight: u64,
    /// Creation order, used to break ties between equal `f`.
    pub(crate) id: u32,
    pub(crate) depth: u32,
    pub(crate) f: Cell<u64>,
    pub(crate) marked: Cell<bool>,
}

impl<'a> Node<'a> {
    pub(crate) fn root(state: State) -> Self {
        Node {
            state,
            parent: None,
            dir: None,
            moved: EMPTY,
            weight: 0,
            id: 0,
            depth: 0,
            f: Cell::new(0),
            marked: Cell::new(false),
        }
    }

    pub(crate) fn child(
        parent: &'a Node<'a>,
        state: State,
        dir: Dir,
        moved: u16,
        cost: u32,
        id: u32,
    ) -> Self {
        Node {
            state,
            parent: Some(parent),
            dir: Some(dir),
            moved,
            weight: parent.weight.saturating_add(u64::from(cost)),
            id,
            depth: parent.depth + 1,
            f: Cell::new(0),
            marked: Cell::new(false),
        }
    }

    /// Key for ordered frontiers - lower `f` first, older nodes win ties.
    pub(crate) fn priority(&self) -> (u64, u32) {
        (self.f.get(), self.id)
    }
}

impl<'a> Debug for Node<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {:?} depth: {} weight: {} f: {}",
            self.id,
            self.state,
            self.depth,
            self.weight,
            self.f.get()
        )
    }
}
