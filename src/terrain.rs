use crate::direction::Direction;

/// Walkable ground appearing on a trail map.
///
/// Walls are not a terrain kind; a walled-off coordinate is simply absent from the map, so
/// every present coordinate is traversable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Terrain {
    /// Level ground, exitable in any direction.
    Open,
    /// A slope, exitable only in its marked direction while slopes are enforced.
    Slope(Direction),
}

impl Terrain {
    /// The map symbol this terrain renders as.
    pub(crate) fn symbol(&self) -> char {
        match self {
            Self::Open => '.',
            Self::Slope(direction) => direction.slope_symbol(),
        }
    }
}
