use log::debug;

use crate::config::IDDFS_DEPTH_LIMIT;
use crate::data::DIRECTIONS;

use super::node::Node;
use super::{NodeMap, Search};

pub(crate) fn search<'a>(search: &mut Search<'a>, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    // only ever holds the current path
    let mut loop_avoidance = NodeMap::default();

    for limit in 1..IDDFS_DEPTH_LIMIT {
        debug!("Depth limit: {}", limit);
        if let Some(goal) = limited_search(search, &mut loop_avoidance, root, limit) {
            return Some(goal);
        }
    }

    None
}

fn limited_search<'a>(
    search: &mut Search<'a>,
    loop_avoidance: &mut NodeMap<'a>,
    node: &'a Node<'a>,
    limit: u16,
) -> Option<&'a Node<'a>> {
    if node.state.is_goal() {
        return Some(node);
    }
    if limit == 0 {
        return None;
    }

    loop_avoidance.insert(&node.state, node);
    search.visit(node);
    for &dir in &DIRECTIONS {
        if let Some(neighbor) = search.expand(node, dir) {
            if loop_avoidance.contains_key(&neighbor.state) {
                continue;
            }
            if let Some(goal) = limited_search(search, loop_avoidance, neighbor, limit - 1) {
                return Some(goal);
            }
        }
    }
    loop_avoidance.remove(&node.state);

    None
}
