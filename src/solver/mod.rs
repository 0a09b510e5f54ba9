mod a_star;
mod bfs;
mod depth_first;
mod dfbnb;
mod ida_star;
mod iddfs;
mod node;
mod stats;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use log::{debug, trace};
use typed_arena::Arena;

use crate::config::Method;
use crate::data::Dir;
use crate::moves::{Move, Moves};
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

use self::node::Node;

pub use self::stats::Stats;

/// Nodes keyed by their state, used by every strategy for de-duplication.
type NodeMap<'a> = FnvHashMap<&'a State, &'a Node<'a>>;

pub struct SolverOk {
    /// `None` if there is no solution, empty if the puzzle was already solved.
    pub moves: Option<Moves>,
    /// Total weight of `moves`.
    pub cost: u64,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, cost: u64, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            cost,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "{}: no solution", self.method)?,
            Some(ref moves) => writeln!(
                f,
                "{}: {} moves, cost {}",
                self.method,
                moves.move_cnt(),
                self.cost
            )?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, method: Method) -> SolverOk {
        solve(self, method)
    }
}

fn solve(puzzle: &Puzzle, method: Method) -> SolverOk {
    debug!("Solving using {}", method);

    let arena = Arena::new();
    let mut search = Search::new(puzzle, &arena, method);

    let root = search.root();
    let goal = if root.state.is_goal() {
        debug!("Already solved");
        Some(root)
    } else {
        match method {
            Method::Bfs => bfs::search(&mut search, root),
            Method::Iddfs => iddfs::search(&mut search, root),
            Method::AStar => a_star::search(&mut search, root),
            Method::IdaStar => ida_star::search(&mut search, root),
            Method::DfBnB => dfbnb::search(&mut search, root),
        }
    };

    match goal {
        Some(goal) => {
            debug!("Found goal, backtracking path");
            let moves = search.path(goal);
            SolverOk::new(Some(moves), goal.weight, search.stats, method)
        }
        None => {
            debug!("No solution");
            SolverOk::new(None, 0, search.stats, method)
        }
    }
}

/// Everything one run of a strategy needs, nothing outlives the `solve` call.
pub(crate) struct Search<'a> {
    puzzle: &'a Puzzle,
    arena: &'a Arena<Node<'a>>,
    /// Only informed strategies look at `f`.
    informed: bool,
    next_id: u32,
    stats: Stats,
}

impl<'a> Search<'a> {
    fn new(puzzle: &'a Puzzle, arena: &'a Arena<Node<'a>>, method: Method) -> Self {
        Search {
            puzzle,
            arena,
            informed: method.is_informed(),
            next_id: 0,
            stats: Stats::new(),
        }
    }

    fn root(&mut self) -> &'a Node<'a> {
        let root = Node::root(self.puzzle.state.clone());
        self.alloc(root)
    }

    /// Applies `dir` to `node`.
    ///
    /// Returns `None` without creating anything if `dir` would undo the move that created `node`,
    /// leave the grid or move a fixed tile.
    pub(crate) fn expand(&mut self, node: &'a Node<'a>, dir: Dir) -> Option<&'a Node<'a>> {
        if node.dir == Some(dir.inverse()) {
            return None;
        }
        let from = self.puzzle.dims.source(node.state.empty, dir)?;
        let moved = node.state.tiles[from];
        let tile = self.puzzle.tile(moved);
        if tile.is_fixed() {
            return None;
        }

        let child = Node::child(
            node,
            node.state.slide(from),
            dir,
            moved,
            tile.cost(),
            self.next_id,
        );
        Some(self.alloc(child))
    }

    /// Records that the strategy is generating the neighbors of `node`.
    pub(crate) fn visit(&mut self, node: &Node<'a>) {
        trace!("Expanding {:?}", node);
        if self.stats.add_expanded(node.depth) {
            debug!("Expanding new depth: {}", node.depth);
        }
    }

    fn alloc(&mut self, node: Node<'a>) -> &'a Node<'a> {
        if self.informed {
            node.f.set(node.weight.saturating_add(self.puzzle.heuristic(&node.state)));
        }
        self.next_id += 1;
        self.stats.add_created(node.depth);

        let arena = self.arena;
        arena.alloc(node)
    }

    fn path(&self, goal: &'a Node<'a>) -> Moves {
        let mut moves = Vec::new();
        let mut node = goal;
        while let (Some(parent), Some(dir)) = (node.parent, node.dir) {
            moves.push(Move::new(self.puzzle.tile(node.moved).label(), dir));
            node = parent;
        }
        moves.reverse();
        Moves::new(moves)
    }
}

impl<'a> Debug for Search<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Search {{ informed: {}, created: {} }}", self.informed, self.next_id)
    }
}
