#![warn(missing_docs)]
//! Parallel beam on a rectangular, evenly-spaced grid
use super::{grid_fraction, BeamDistribution, RaySeed};
use crate::{
    error::{SourceError, SourceResult},
    millimeter,
};
use itertools::iproduct;
use nalgebra::Point3;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// Parallel beam on a rectangular, evenly-spaced grid
///
/// The rays start in the xy plane and propagate along the z axis. Along each axis, the rays are spread from
/// `-side_length / 2` to `+side_length / 2`. An axis with a single ray places this ray at zero.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Copy)]
pub struct CartesianGrid {
    side_length: (Length, Length),
    nr_of_points: (usize, usize),
}

impl CartesianGrid {
    /// Create a new [`CartesianGrid`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - one `side_length` component is negative or not finite.
    ///  - one `nr_of_points` component is zero or their product overflows.
    pub fn new(side_length: (Length, Length), nr_of_points: (usize, usize)) -> SourceResult<Self> {
        let grid = Self {
            side_length,
            nr_of_points,
        };
        grid.validate()?;
        Ok(grid)
    }
    fn validate(&self) -> SourceResult<()> {
        if self.side_length.0.is_sign_negative() || !self.side_length.0.is_finite() {
            return Err(SourceError::InvalidParameter(
                "side length x must be >= zero and finite".into(),
            ));
        }
        if self.side_length.1.is_sign_negative() || !self.side_length.1.is_finite() {
            return Err(SourceError::InvalidParameter(
                "side length y must be >= zero and finite".into(),
            ));
        }
        if self.nr_of_points.0.is_zero() || self.nr_of_points.1.is_zero() {
            return Err(SourceError::InvalidSampleCount(
                "both components of nr_of_points must be > 0".into(),
            ));
        }
        if self.nr_of_points.0.checked_mul(self.nr_of_points.1).is_none() {
            return Err(SourceError::InvalidSampleCount(
                "total number of rays overflows".into(),
            ));
        }
        Ok(())
    }
    /// Returns the number of points along the x and y axes.
    #[must_use]
    pub const fn nr_of_points(&self) -> (usize, usize) {
        self.nr_of_points
    }
    /// Returns the side lengths along the x and y axes.
    #[must_use]
    pub const fn side_length(&self) -> (Length, Length) {
        self.side_length
    }
}

impl Default for CartesianGrid {
    fn default() -> Self {
        Self {
            side_length: (millimeter!(1.), millimeter!(1.)),
            nr_of_points: (10, 10),
        }
    }
}

impl BeamDistribution for CartesianGrid {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let (nr_of_points_x, nr_of_points_y) = self.nr_of_points;
        let seeds = iproduct!(0..nr_of_points_x, 0..nr_of_points_y)
            .map(|(i_x, i_y)| {
                RaySeed::collimated(Point3::new(
                    self.side_length.0 * grid_fraction(i_x, nr_of_points_x),
                    self.side_length.1 * grid_fraction(i_y, nr_of_points_y),
                    Length::zero(),
                ))
            })
            .collect();
        Ok(seeds)
    }
}

impl From<CartesianGrid> for super::BeamDistType {
    fn from(grid: CartesianGrid) -> Self {
        Self::CartesianGrid(grid)
    }
}
