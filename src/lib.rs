#![warn(missing_docs)]

//! # `switchback`
//!
//! A solver for "longest hike" trail mazes: rectangular maps of walkable ground, walls, and
//! one-way slope tiles, asking for the longest simple path from a trailhead to a goal tile.
//! Begin by building a maze with [`MazeBuilder`], either programmatically or from the usual
//! `#`/`.`/`^v<>` character rows. Then call [`longest_hike()`](Maze::longest_hike) with a
//! [`Mode`] stating whether slopes are one-way ([`Directional`](Mode::Directional)) or
//! ignored ([`Unrestricted`](Mode::Unrestricted)).
//!
//! # Internals
//! Longest simple path is NP-hard in general, so the crate makes the exhaustive search
//! affordable by shrinking the state space first rather than by being clever during it.
//!
//! A high level overview is as follows:
//!
//! Treat every walkable tile as a vertex with up to four neighbors. Almost all of those tiles
//! are corridor cells with exactly two neighbors, where a path has no decision to make.
//! Compaction ([`Maze::compact`]) walks each corridor once and replaces it with a single
//! weighted edge between its junction endpoints, producing a [`CompactedGraph`] of tens of
//! nodes instead of thousands of tiles. Parallel corridors between the same pair of junctions
//! keep one edge each, since their lengths may differ.
//!
//! The search itself ([`longest_path`], [`longest_raw_path`]) is a depth-first traversal with
//! explicit backtracking: one visited set owned by the call chain, marked on entry and
//! unmarked on every exit path, taking the maximum over branches. Branches that never reach
//! the goal report a tagged unreachable value that loses every maximum, so no sentinel
//! arithmetic can corrupt a real distance. In directional mode the slope constraints already
//! leave the raw grid sparse enough to search directly; in unrestricted mode the search runs
//! over the compacted graph.

pub use builder::{BuilderInvalidReason, MazeBuilder};
pub use direction::Direction;
pub use graph::CompactedGraph;
pub use location::Location;
pub use maze::{Maze, Mode};
pub use search::{longest_path, longest_raw_path, SearchFailure};
pub use terrain::Terrain;

pub(crate) mod builder;
pub(crate) mod direction;
pub(crate) mod graph;
pub(crate) mod location;
pub(crate) mod maze;
pub(crate) mod search;
mod tests;
pub(crate) mod terrain;
