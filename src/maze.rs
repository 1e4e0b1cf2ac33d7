use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::direction::Direction;
use crate::graph::CompactedGraph;
use crate::location::{Dimension, Location};
use crate::search::{self, SearchFailure};
use crate::terrain::Terrain;

/// The movement rule in force while traversing a maze.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Slopes are one-way: a slope tile can only be exited in its marked direction.
    Directional,
    /// Slope markings are ignored; every tile can be exited in all four directions.
    Unrestricted,
}

/// An immutable trail maze: a sparse map of walkable terrain plus designated trailhead and
/// goal tiles.
///
/// [`Maze`]s should be built using a [`MazeBuilder`](crate::builder::MazeBuilder), which
/// validates the invariants this type relies on (every slope points at walkable ground, the
/// trailhead and goal exist and have at least one neighbor).
#[derive(Debug)]
pub struct Maze {
    pub(crate) cells: HashMap<Location, Terrain>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) start: Location,
    pub(crate) end: Location,
}

impl Maze {
    /// The trailhead tile.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The goal tile.
    pub fn end(&self) -> Location {
        self.end
    }

    /// The terrain at `location`, or `None` for walls and out-of-bounds locations.
    pub fn terrain(&self, location: Location) -> Option<Terrain> {
        self.cells.get(&location).copied()
    }

    /// The locations reachable in one step from `location` under `mode`.
    ///
    /// Under [`Mode::Directional`], a slope tile yields only the tile in its marked
    /// direction; open tiles yield every adjacent walkable tile. Under
    /// [`Mode::Unrestricted`], every tile yields every adjacent walkable tile.
    ///
    /// # Panics
    ///
    /// Panics if `location` is a wall or out of bounds. Adjacency of an absent coordinate is
    /// meaningless, so asking for it indicates a bug in the caller, not bad input.
    pub fn neighbors(&self, location: Location, mode: Mode) -> Vec<Location> {
        let terrain = self
            .cells
            .get(&location)
            .unwrap_or_else(|| panic!("adjacency requested for absent coordinate {location:?}"));

        match (terrain, mode) {
            (Terrain::Slope(direction), Mode::Directional) => [direction.attempt_from(location)]
                .into_iter()
                .filter(|step| self.cells.contains_key(step))
                .collect_vec(),
            _ => Direction::VARIANTS
                .iter()
                .map(|direction| direction.attempt_from(location))
                .filter(|step| self.cells.contains_key(step))
                .collect_vec(),
        }
    }

    /// Reduce this maze to its weighted junction graph under `mode`.
    ///
    /// See [`CompactedGraph`] for the shape of the result. The reduction is what makes the
    /// unrestricted exhaustive search affordable: the search is exponential in node count,
    /// not in path length.
    pub fn compact(&self, mode: Mode) -> CompactedGraph {
        CompactedGraph::compact(self, mode)
    }

    /// The number of steps on the longest simple path from the trailhead to the goal under
    /// `mode`, or [`SearchFailure::Unreachable`] if no such path exists.
    ///
    /// Directional mazes are searched over the raw grid, where the slope constraints already
    /// keep the branching low; unrestricted mazes are compacted first.
    pub fn longest_hike(&self, mode: Mode) -> Result<usize, SearchFailure> {
        match mode {
            Mode::Directional => search::longest_raw_path(self, mode),
            Mode::Unrestricted => search::longest_path(&self.compact(mode), self.start, self.end),
        }
    }
}

impl Display for Maze {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbols = Array2::from_shape_fn((self.dims.1.get(), self.dims.0.get()), |index| {
            match self.cells.get(&Location::from(index)) {
                Some(terrain) => terrain.symbol(),
                None => '#',
            }
        });

        let mut out = String::with_capacity(symbols.nrows() * (symbols.ncols() + 1));
        for row in symbols.rows() {
            for col in row {
                out.push(*col);
            }
            out.push('\n');
        }

        write!(f, "{out}")
    }
}
