use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::data::DIRECTIONS;

use super::node::Node;
use super::{NodeMap, Search};

/// Heap entry ordered by `(f, id)`.
struct Queued<'a>(&'a Node<'a>);

impl<'a> PartialOrd for Queued<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for Queued<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.priority().cmp(&other.0.priority())
    }
}

impl<'a> PartialEq for Queued<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority() == other.0.priority()
    }
}

impl<'a> Eq for Queued<'a> {}

pub(crate) fn search<'a>(search: &mut Search<'a>, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    let mut queue = BinaryHeap::new();
    let mut frontier = NodeMap::default();
    let mut history = NodeMap::default();

    queue.push(Reverse(Queued(root)));
    frontier.insert(&root.state, root);

    while let Some(Reverse(Queued(node))) = queue.pop() {
        // BinaryHeap can't decrease keys so replaced nodes stay in the queue,
        // anything the frontier doesn't point to is stale
        let current = frontier
            .get(&node.state)
            .map_or(false, |queued| queued.id == node.id);
        if !current {
            continue;
        }

        if node.state.is_goal() {
            return Some(node);
        }

        frontier.remove(&node.state);
        history.insert(&node.state, node);
        search.visit(node);

        for &dir in &DIRECTIONS {
            let neighbor = match search.expand(node, dir) {
                Some(neighbor) => neighbor,
                None => continue,
            };
            // closed nodes are never reopened, the heuristic is consistent
            if history.contains_key(&neighbor.state) {
                continue;
            }

            let better = frontier
                .get(&neighbor.state)
                .map_or(true, |queued| neighbor.f.get() < queued.f.get());
            if better {
                frontier.insert(&neighbor.state, neighbor);
                queue.push(Reverse(Queued(neighbor)));
            }
        }
    }

    None
}
