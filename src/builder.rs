use std::collections::HashMap;
use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use strum::VariantArray;

use crate::direction::Direction;
use crate::location::{Dimension, Location};
use crate::maze::Maze;
use crate::terrain::Terrain;

/// Reasons a builder may become invalid while building.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// Terrain was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// The textual input was empty or its rows had differing lengths.
    MalformedRows,
    /// The textual input held a symbol other than `#`, `.`, `^`, `v`, `<`, or `>`.
    UnknownSymbol,
    /// The trailhead or the goal was assigned more than once.
    AmbiguousEndpoint,
    /// The trailhead or the goal was never assigned.
    MissingEndpoint,
    /// The trailhead or the goal sits on a wall or out of bounds.
    EndpointInWall,
    /// The trailhead or the goal has no adjacent walkable tile.
    DisconnectedEndpoint,
    /// A slope points off the map or into a wall.
    SlopeIntoWall,
}

/// A builder for rectangular trail [`Maze`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at
/// some point. Once a builder enters an invalid state, later mutating calls do nothing; the
/// accumulated reasons surface from [`is_valid`](Self::is_valid) or [`build`](Self::build).
#[derive(Clone)]
pub struct MazeBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Option<Terrain>>,
    start: Option<Location>,
    end: Option<Location>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl MazeBuilder {
    /// Construct a new all-wall builder with the specified dimensions, in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), || None),
            start: None,
            end: None,
            invalid_reasons: Default::default(),
        }
    }

    /// Construct a builder from newline-separated rows of map symbols: `#` for walls, `.`
    /// for open ground, and `^`, `v`, `<`, `>` for slopes.
    ///
    /// The trailhead and goal are never inferred from the rows; assign them with
    /// [`start_at`](Self::start_at) and [`end_at`](Self::end_at) before building.
    ///
    /// Empty input or ragged rows leave the builder invalid with
    /// [`MalformedRows`](BuilderInvalidReason::MalformedRows); an unrecognized symbol leaves
    /// it invalid with [`UnknownSymbol`](BuilderInvalidReason::UnknownSymbol).
    pub fn from_rows(input: &str) -> Self {
        let lines = input.lines().collect_vec();
        let (Some(width), Some(height)) = (
            NonZero::new(lines.first().map_or(0, |line| line.chars().count())),
            NonZero::new(lines.len()),
        ) else {
            let mut builder = Self::with_dims((NonZero::<usize>::MIN, NonZero::<usize>::MIN));
            builder.invalid_reasons.push(BuilderInvalidReason::MalformedRows);
            return builder;
        };

        let mut builder = Self::with_dims((width, height));

        for (y, line) in lines.into_iter().enumerate() {
            let mut row_width = 0;

            for (x, symbol) in line.chars().enumerate() {
                row_width += 1;

                match symbol {
                    '#' => {}
                    '.' => {
                        builder.open(Location(x, y));
                    }
                    other => match Direction::from_slope_symbol(other) {
                        Some(direction) => {
                            builder.slope(Location(x, y), direction);
                        }
                        None => {
                            builder.invalid_reasons.push(BuilderInvalidReason::UnknownSymbol);
                            return builder;
                        }
                    },
                }
            }

            if row_width != width.get() {
                builder.invalid_reasons.push(BuilderInvalidReason::MalformedRows);
                return builder;
            }
        }

        builder
    }

    /// Carve open ground at `location`.
    ///
    /// May cause the builder to enter a
    /// [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if
    /// `location` is out of bounds. If the builder is already in an invalid state, this
    /// function does nothing.
    pub fn open(&mut self, location: Location) -> &mut Self {
        self.place(location, Terrain::Open)
    }

    /// Carve a one-way slope at `location`, exiting toward `direction`.
    ///
    /// Whether the slope points at walkable ground is checked at [`build`](Self::build)
    /// time, once the surrounding terrain is final.
    ///
    /// May cause the builder to enter a
    /// [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if
    /// `location` is out of bounds. If the builder is already in an invalid state, this
    /// function does nothing.
    pub fn slope(&mut self, location: Location, direction: Direction) -> &mut Self {
        self.place(location, Terrain::Slope(direction))
    }

    fn place(&mut self, location: Location, terrain: Terrain) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Some(terrain));
        self
    }

    /// Designate the trailhead.
    ///
    /// Assigning it twice causes an
    /// [`AmbiguousEndpoint`](BuilderInvalidReason::AmbiguousEndpoint) invalid state. If the
    /// builder is already in an invalid state, this function does nothing.
    pub fn start_at(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.start.replace(location).is_some() {
            self.invalid_reasons.push(BuilderInvalidReason::AmbiguousEndpoint);
        }

        self
    }

    /// Designate the goal.
    ///
    /// Assigning it twice causes an
    /// [`AmbiguousEndpoint`](BuilderInvalidReason::AmbiguousEndpoint) invalid state. If the
    /// builder is already in an invalid state, this function does nothing.
    pub fn end_at(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.end.replace(location).is_some() {
            self.invalid_reasons.push(BuilderInvalidReason::AmbiguousEndpoint);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition
    /// has arisen so far.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// [`build`](Self::build) runs further checks that need the finished terrain.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Validate the finished terrain and convert the state of this builder into a [`Maze`].
    ///
    /// On top of any reason accumulated while mutating, this checks that the trailhead and
    /// goal are assigned exactly once, sit on walkable ground, and have at least one
    /// neighbor, and that every slope points at walkable ground.
    pub fn build(&self) -> Result<Maze, Vec<BuilderInvalidReason>> {
        let mut reasons = self.invalid_reasons.clone();

        let mut cells = HashMap::new();
        for (index, cell) in self.cells.indexed_iter() {
            if let Some(terrain) = cell {
                cells.insert(Location::from(index), *terrain);
            }
        }

        for (index, cell) in self.cells.indexed_iter() {
            if let Some(Terrain::Slope(direction)) = cell {
                if !cells.contains_key(&direction.attempt_from(Location::from(index))) {
                    reasons.push(BuilderInvalidReason::SlopeIntoWall);
                }
            }
        }

        let (Some(start), Some(end)) = (self.start, self.end) else {
            reasons.push(BuilderInvalidReason::MissingEndpoint);
            return Err(reasons);
        };

        for location in [start, end] {
            if !cells.contains_key(&location) {
                reasons.push(BuilderInvalidReason::EndpointInWall);
            } else if Direction::VARIANTS
                .iter()
                .all(|direction| !cells.contains_key(&direction.attempt_from(location)))
            {
                reasons.push(BuilderInvalidReason::DisconnectedEndpoint);
            }
        }

        if !reasons.is_empty() {
            return Err(reasons);
        }

        Ok(Maze {
            cells,
            dims: self.dims,
            start,
            end,
        })
    }
}
