use log::debug;

use crate::data::DIRECTIONS;

use super::depth_first::{self, Tag, INFINITY};
use super::node::Node;
use super::{NodeMap, Search};

pub(crate) fn search<'a>(search: &mut Search<'a>, root: &'a Node<'a>) -> Option<&'a Node<'a>> {
    let mut loop_avoidance = NodeMap::default();
    let mut stack = Vec::new();
    let mut bound = root.f.get();

    while bound < INFINITY {
        debug!("Bound: {}", bound);
        let mut min_f = INFINITY;

        loop_avoidance.clear();
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

            for &dir in &DIRECTIONS {
                let neighbor = match search.expand(node, dir) {
                    Some(neighbor) => neighbor,
                    None => continue,
                };

                let f = neighbor.f.get();
                if f > bound {
                    min_f = min_f.min(f);
                    continue;
                }
                match depth_first::tag(&loop_avoidance, neighbor) {
                    Tag::Target => return Some(neighbor),
                    Tag::Potential => depth_first::push(&mut stack, &mut loop_avoidance, neighbor),
                    Tag::Redundant => {}
                }
            }
        }

        // stays INFINITY if nothing was cut off
        bound = min_f;
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::config::Method;
    use crate::fixtures::*;

    #[test]
    fn cheapest_path() {
        let solution = run(HEAVY, Method::IdaStar);
        assert_eq!(
            solution.moves.unwrap().to_string(),
            "1L-3D-4R-5R-2U-1L-5D-4L-3U-5R-4D-2R-1U-4L-5L"
        );
        assert_eq!(solution.cost, 73);
        assert_eq!(solution.stats.total_created(), 219);
    }

    #[test]
    fn node_counts() {
        assert_eq!(run(ONE_MOVE, Method::IdaStar).stats.total_created(), 2);
        assert_eq!(run(FIXED, Method::IdaStar).stats.total_created(), 14);
        assert_eq!(run(LIGHT, Method::IdaStar).stats.total_created(), 22);
    }

    #[test]
    fn unsolvable_ends() {
        let solution = run(UNSOLVABLE, Method::IdaStar);
        assert!(solution.moves.is_none());
        assert_eq!(solution.stats.total_created(), 90);
    }
}
