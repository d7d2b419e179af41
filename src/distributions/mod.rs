#![warn(missing_docs)]
//! Module for handling beam distributions
//!
//! A beam distribution generates a set of [`RaySeed`]s (position and direction) in the local frame of a
//! ray source. The beam axis of this frame is the positive z axis and its origin is the center of the beam.
//! The seeds are placed into the target frame later on (see [`BeamSource`](crate::source::BeamSource)).
//!
//! ## Example
//!
//! ```rust
//! use raysource::{millimeter, distributions::{BeamDistribution, CartesianGrid}};
//!
//! let grid = CartesianGrid::new((millimeter!(2.0), millimeter!(1.0)), (3, 1)).unwrap();
//! let seeds = grid.generate().unwrap();
//! assert_eq!(seeds.len(), 3);
//! ```
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    error::{SourceError, SourceResult},
    utils::geom_transformation::Isometry,
    utils::usize_to_f64,
};

mod angular_grid;
mod angular_polar;
mod angular_random;
mod cartesian_grid;
mod coordinate_list;
mod hexagonal_grid;
mod polar_grid;

pub use angular_grid::AngularGrid;
pub use angular_polar::AngularPolar;
pub use angular_random::AngularRandom;
pub use cartesian_grid::CartesianGrid;
pub use coordinate_list::{CoordinateList, Coordinates};
pub use hexagonal_grid::HexagonalGrid;
pub use polar_grid::PolarGrid;

/// Position and direction of a ray in the local frame of a beam, before it becomes a [`Ray`](crate::ray::Ray).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySeed {
    position: Point3<Length>,
    direction: Vector3<f64>,
}
impl RaySeed {
    /// Creates a new [`RaySeed`].
    #[must_use]
    pub const fn new(position: Point3<Length>, direction: Vector3<f64>) -> Self {
        Self {
            position,
            direction,
        }
    }
    /// Creates a [`RaySeed`] at the given position propagating along the positive z axis.
    #[must_use]
    pub fn collimated(position: Point3<Length>) -> Self {
        Self::new(position, Vector3::z())
    }
    /// Creates a [`RaySeed`] at the local origin propagating along the positive z axis.
    #[must_use]
    pub fn along_z() -> Self {
        Self::collimated(Point3::origin())
    }
    /// Returns the position of this [`RaySeed`].
    #[must_use]
    pub const fn position(&self) -> Point3<Length> {
        self.position
    }
    /// Returns the direction of this [`RaySeed`].
    #[must_use]
    pub const fn direction(&self) -> Vector3<f64> {
        self.direction
    }
    /// Returns a new [`RaySeed`] with position and direction transformed by the given [`Isometry`].
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry) -> Self {
        Self::new(
            isometry.transform_point(&self.position),
            isometry.transform_vector_f64(&self.direction),
        )
    }
}

/// Trait for the generation of beam distributions
pub trait BeamDistribution {
    /// Generate the local ray seeds of this distribution.
    ///
    /// The order of the returned seeds is reproducible for identical parameters (except for random distributions).
    ///
    /// # Errors
    ///
    /// This function returns an error if the parameters of the distribution are invalid.
    fn generate(&self) -> SourceResult<Vec<RaySeed>>;
}

/// Enum of all available beam distributions.
///
/// This is the (serializable) form used in beam documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(tag = "type")]
pub enum BeamDistType {
    /// parallel beam on a rectangular grid
    CartesianGrid(CartesianGrid),
    /// parallel beam on a polar grid
    PolarGrid(PolarGrid),
    /// point source with a rectangular grid of tilt angles
    AngularGrid(AngularGrid),
    /// point source with a polar grid of tilt angles
    AngularPolar(AngularPolar),
    /// point source with normally distributed tilt angles
    AngularRandom(AngularRandom),
    /// parallel beam on a hexagonal grid within a circle
    HexagonalGrid(HexagonalGrid),
    /// parallel beam at explicitly given coordinates
    CoordinateList(CoordinateList),
}
impl BeamDistribution for BeamDistType {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        match self {
            Self::CartesianGrid(dist) => dist.generate(),
            Self::PolarGrid(dist) => dist.generate(),
            Self::AngularGrid(dist) => dist.generate(),
            Self::AngularPolar(dist) => dist.generate(),
            Self::AngularRandom(dist) => dist.generate(),
            Self::HexagonalGrid(dist) => dist.generate(),
            Self::CoordinateList(dist) => dist.generate(),
        }
    }
}

/// Relative position of the sample `index` on an evenly spaced axis of `count` samples.
///
/// The samples run from -0.5 to 0.5 (inclusive). A single sample sits at 0.0.
fn grid_fraction(index: usize, count: usize) -> f64 {
    if count > 1 {
        usize_to_f64(index) / usize_to_f64(count - 1) - 0.5
    } else {
        0.0
    }
}

/// Number of seeds of a polar layout.
///
/// This is the center plus `nr_of_points.1` seeds on each of the `nr_of_points.0 - 1` rings.
///
/// # Errors
///
/// This function will return an error if one component of `nr_of_points` is zero or the count overflows.
fn polar_seed_count(nr_of_points: (usize, usize)) -> SourceResult<usize> {
    let (nr_of_rings, points_per_ring) = nr_of_points;
    if nr_of_rings == 0 || points_per_ring == 0 {
        return Err(SourceError::InvalidSampleCount(
            "number of rings and number of points per ring must be > 0".into(),
        ));
    }
    (nr_of_rings - 1)
        .checked_mul(points_per_ring)
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| {
            SourceError::InvalidSampleCount(format!("too many rays requested: {nr_of_points:?}"))
        })
}
