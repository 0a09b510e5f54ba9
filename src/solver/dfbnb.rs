use log::debug;

use crate::data::DIRECTIONS;

use super::depth_first::{self, Tag, INFINITY};
use super::node::Node;
use super::{NodeMap, Search};

pub(crate) fn search<'a>(search: &mut Search<'a>, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    let mut loop_avoidance = NodeMap::default();
    let mut stack = Vec::new();
    let mut limit = INFINITY;
    let mut incumbent = None;

    root.marked.set(false);
    depth_first::push(&mut stack, &mut loop_avoidance, root);

    while let Some(node) = stack.pop() {
        if node.marked.get() {
            depth_first::backtrack(&mut loop_avoidance, node);
            continue;
        }
        node.marked.set(true);
        stack.push(node);
        search.visit(node);

        let mut neighbors: Vec<_> = DIRECTIONS
            .iter()
            .filter_map(|&dir| search.expand(node, dir))
            .filter(|neighbor| neighbor.f.get() < limit)
            .collect();
        neighbors.sort_by_key(|neighbor| neighbor.priority());

        let mut candidates = Vec::new();
        for neighbor in neighbors {
            match depth_first::tag(&loop_avoidance, neighbor) {
                Tag::Potential => candidates.push(neighbor),
                Tag::Target => {
                    // the rest are sorted so none of them can beat it
                    limit = neighbor.f.get();
                    incumbent = Some(neighbor);
                    debug!("New incumbent with cost {}", limit);
                    break;
                }
                Tag::Redundant => {}
            }
        }

        // lowest f on top
        for &candidate in candidates.iter().rev() {
            depth_first::push(&mut stack, &mut loop_avoidance, candidate);
        }
    }

    incumbent
}
