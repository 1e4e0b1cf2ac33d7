use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::graph::CompactedGraph;
use crate::location::Location;
use crate::maze::{Maze, Mode};

/// Reasons a longest-path search may fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchFailure {
    /// No simple path connects the trailhead to the goal. The problem domain guarantees
    /// connectivity, so this indicates malformed or truncated input data.
    Unreachable,
}

/// The outcome of a single search branch.
///
/// `Unreachable` is declared first so that it orders below every `Reached`, which lets
/// branch results combine with a plain `max` without a numeric sentinel ever touching real
/// distance arithmetic.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Reach {
    Unreachable,
    Reached(usize),
}

impl Reach {
    fn extended_by(self, steps: usize) -> Self {
        match self {
            Self::Reached(distance) => Self::Reached(distance + steps),
            Self::Unreachable => Self::Unreachable,
        }
    }

    fn into_result(self) -> Result<usize, SearchFailure> {
        match self {
            Self::Reached(distance) => Ok(distance),
            Self::Unreachable => Err(SearchFailure::Unreachable),
        }
    }
}

/// The number of steps on the longest simple path from `start` to `end` over a compacted
/// junction graph.
///
/// Exhaustive depth-first search with backtracking; worst case exponential in the node
/// count, which prior compaction keeps in the tens for this problem domain. The graph is
/// borrowed immutably, so searching it repeatedly yields identical results.
///
/// Returns [`SearchFailure::Unreachable`] if no simple path connects the two, including
/// when either location never made it into the graph (a disconnected maze).
pub fn longest_path(
    graph: &CompactedGraph,
    start: Location,
    end: Location,
) -> Result<usize, SearchFailure> {
    let (Some(&start), Some(&end)) = (graph.indices.get(&start), graph.indices.get(&end)) else {
        return Err(SearchFailure::Unreachable);
    };

    let mut visited = HashSet::new();
    branch_compacted(graph, start, end, &mut visited).into_result()
}

fn branch_compacted(
    graph: &CompactedGraph,
    current: NodeIndex,
    end: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
) -> Reach {
    if current == end {
        return Reach::Reached(0);
    }

    visited.insert(current);
    let mut best = Reach::Unreachable;

    for edge in graph.graph.edges(current) {
        let next = if edge.source() == current {
            edge.target()
        } else {
            edge.source()
        };

        if !visited.contains(&next) {
            best = best.max(branch_compacted(graph, next, end, visited).extended_by(*edge.weight()));
        }
    }

    visited.remove(&current);
    best
}

/// The number of steps on the longest simple path from the trailhead to the goal of `maze`,
/// searched directly over raw grid adjacency under `mode` at one step per move.
///
/// Intended for directional mazes, whose slope constraints already keep the branching low;
/// unrestricted mazes should be compacted and searched with [`longest_path`] instead.
pub fn longest_raw_path(maze: &Maze, mode: Mode) -> Result<usize, SearchFailure> {
    let mut visited = HashSet::new();
    branch_raw(maze, mode, maze.start(), &mut visited).into_result()
}

fn branch_raw(maze: &Maze, mode: Mode, current: Location, visited: &mut HashSet<Location>) -> Reach {
    if current == maze.end() {
        return Reach::Reached(0);
    }

    visited.insert(current);
    let mut best = Reach::Unreachable;

    for next in maze.neighbors(current, mode) {
        if !visited.contains(&next) {
            best = best.max(branch_raw(maze, mode, next, visited).extended_by(1));
        }
    }

    visited.remove(&current);
    best
}
