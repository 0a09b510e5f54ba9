//! Loop avoidance shared by IDA* and DFBnB.
//!
//! Both keep an explicit stack where every expanded node is pushed back below its children.
//! Popping an unmarked node expands it, popping a marked one means its subtree is finished.

use super::node::Node;
use super::NodeMap;

pub(crate) const INFINITY: u64 = u64::max_value();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Target,
    Potential,
    Redundant,
}

/// Decides what to do with a freshly generated `neighbor`.
///
/// A state already on the current path is only worth revisiting with a strictly lower `f`,
/// in that case the stored node is marked as superseded.
pub(crate) fn tag<'a>(loop_avoidance: &NodeMap<'a>, neighbor: &'a Node<'a>) -> Tag {
    match loop_avoidance.get(&neighbor.state) {
        None if neighbor.state.is_goal() => Tag::Target,
        None => Tag::Potential,
        Some(stored) if !stored.marked.get() && neighbor.f.get() < stored.f.get() => {
            stored.marked.set(true);
            Tag::Potential
        }
        Some(_) => Tag::Redundant,
    }
}

pub(crate) fn push<'a>(
    stack: &mut Vec<&'a Node<'a>>,
    loop_avoidance: &mut NodeMap<'a>,
    node: &'a Node<'a>,
) {
    stack.push(node);
    loop_avoidance.insert(&node.state, node);
}

/// Called when a marked node is popped.
///
/// The entry is only removed if it still belongs to `node`,
/// a superseded node must not evict the one that replaced it.
pub(crate) fn backtrack<'a>(loop_avoidance: &mut NodeMap<'a>, node: &'a Node<'a>) {
    let owned = loop_avoidance
        .get(&node.state)
        .map_or(false, |stored| stored.id == node.id);
    if owned {
        loop_avoidance.remove(&node.state);
    }
}
