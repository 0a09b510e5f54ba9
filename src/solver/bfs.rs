use std::collections::VecDeque;

use crate::data::DIRECTIONS;

use super::node::Node;
use super::{NodeMap, Search};

/// Finds the path with the fewest moves, weights are ignored.
pub(crate) fn search<'a>(search: &mut Search<'a>, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    let mut queue = VecDeque::new();
    let mut frontier = NodeMap::default();
    let mut history = NodeMap::default();

    queue.push_back(root);
    frontier.insert(&root.state, root);

    while let Some(node) = queue.pop_front() {
        frontier.remove(&node.state);
        history.insert(&node.state, node);
        search.visit(node);

        for &dir in &DIRECTIONS {
            let neighbor = match search.expand(node, dir) {
                Some(neighbor) => neighbor,
                None => continue,
            };
            if history.contains_key(&neighbor.state) || frontier.contains_key(&neighbor.state) {
                continue;
            }

            // goal test on generation, every node in the queue is one move further anyway
            if neighbor.state.is_goal() {
                return Some(neighbor);
            }
            queue.push_back(neighbor);
            frontier.insert(&neighbor.state, neighbor);
        }
    }

    None
}
