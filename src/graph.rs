use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use unordered_pair::UnorderedPair;

use crate::location::Location;
use crate::maze::{Maze, Mode};

/// The weighted junction graph distilled from a [`Maze`].
///
/// A node exists iff its location is the trailhead, the goal, or a junction (a tile with at
/// least three reachable neighbors). Each edge stands for one corridor between two of those
/// tiles and carries the corridor's step count. The graph is undirected, and two junctions
/// joined by more than one corridor keep one edge per corridor, since the corridors' lengths
/// may differ.
///
/// Built once by [`Maze::compact`] and immutable thereafter.
pub struct CompactedGraph {
    pub(crate) graph: UnGraph<Location, usize>,
    pub(crate) indices: HashMap<Location, NodeIndex>,
}

impl CompactedGraph {
    /// Walk every corridor of `maze` reachable from its trailhead under `mode`, replacing
    /// each with a single weighted edge.
    ///
    /// Each (node, outgoing direction) pair is explored at most once, so the walk terminates
    /// on any finite maze. Walks that peter out in a dead end insert nothing: a dead-end
    /// tile can never lie on a simple path to the goal, and registering it would break the
    /// junction-degree invariant above.
    pub(crate) fn compact(maze: &Maze, mode: Mode) -> Self {
        let mut compacted = Self {
            graph: UnGraph::new_undirected(),
            indices: HashMap::new(),
        };
        compacted.intern(maze.start());

        let mut walks = maze
            .neighbors(maze.start(), mode)
            .into_iter()
            .map(|step| (maze.start(), step))
            .collect_vec();
        // both entry directions of a finished corridor land in here, so the reverse walk is
        // skipped rather than inserting the same edge twice
        let mut explored: HashSet<(Location, Location)> = HashSet::new();

        while let Some((seed, first)) = walks.pop() {
            if !explored.insert((seed, first)) {
                continue;
            }

            let Some((node, last, length)) = walk_corridor(maze, mode, seed, first) else {
                continue;
            };
            explored.insert((node, last));

            let seed_index = compacted.indices[&seed];
            let newly_seen = !compacted.indices.contains_key(&node);
            let node_index = compacted.intern(node);
            compacted.graph.add_edge(seed_index, node_index, length);

            if newly_seen {
                walks.extend(maze.neighbors(node, mode).into_iter().map(|step| (node, step)));
            }
        }

        compacted
    }

    fn intern(&mut self, location: Location) -> NodeIndex {
        *self
            .indices
            .entry(location)
            .or_insert_with(|| self.graph.add_node(location))
    }

    /// The number of registered nodes, the trailhead and goal included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The number of corridor edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `location` was registered as a node.
    pub fn contains(&self, location: Location) -> bool {
        self.indices.contains_key(&location)
    }

    /// The locations of every registered node.
    pub fn nodes(&self) -> impl Iterator<Item = Location> + '_ {
        self.graph.node_weights().copied()
    }

    /// The corridors incident to `location` as `(far endpoint, steps)` pairs, or an empty
    /// list if `location` is not a node.
    pub fn edges_of(&self, location: Location) -> Vec<(Location, usize)> {
        self.indices.get(&location).map_or_else(Vec::new, |&index| {
            self.graph
                .edges(index)
                .map(|edge| {
                    let far = if edge.source() == index {
                        edge.target()
                    } else {
                        edge.source()
                    };

                    (self.graph[far], *edge.weight())
                })
                .collect_vec()
        })
    }

    /// Every corridor as `(endpoints, steps)`, endpoint order insensitive, in discovery
    /// order. Compacting the same maze twice yields the same listing.
    pub fn edge_multiset(&self) -> Vec<(UnorderedPair<Location>, usize)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    UnorderedPair::from((self.graph[edge.source()], self.graph[edge.target()])),
                    *edge.weight(),
                )
            })
            .collect_vec()
    }
}

/// Follow a corridor from `seed` through its adjacent tile `first` until it hits the
/// trailhead, the goal, or a junction, returning that stop tile, the tile stepped from to
/// reach it, and the step count. Returns `None` if the corridor dead-ends instead.
fn walk_corridor(
    maze: &Maze,
    mode: Mode,
    seed: Location,
    first: Location,
) -> Option<(Location, Location, usize)> {
    let mut previous = seed;
    let mut current = first;
    let mut length = 1;

    loop {
        if current == maze.start() || current == maze.end() {
            return Some((current, previous, length));
        }

        let continuations = maze
            .neighbors(current, mode)
            .into_iter()
            .filter(|step| *step != previous)
            .collect_vec();

        match continuations.as_slice() {
            [] => return None,
            [step] => {
                previous = current;
                current = *step;
                length += 1;
            }
            _ => return Some((current, previous, length)),
        }
    }
}
