#![warn(missing_docs)]
//! Parallel beam on a polar grid
use std::f64::consts::PI;

use super::{polar_seed_count, BeamDistribution, RaySeed};
use crate::{
    error::{SourceError, SourceResult},
    millimeter,
    utils::usize_to_f64,
};
use nalgebra::point;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// Parallel beam on a polar grid
///
/// The first ray is always the central one. It is followed by `nr_of_points.0 - 1` rings, each consisting of
/// `nr_of_points.1` rays evenly spaced in azimuth. The outermost ring lies on the given `radius`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Copy)]
pub struct PolarGrid {
    radius: Length,
    nr_of_points: (usize, usize),
}
impl PolarGrid {
    /// Create a new [`PolarGrid`] distribution generator.
    ///
    /// `nr_of_points` is the tuple (number of rings including the center, number of rays per ring).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `radius` is negative or not finite.
    ///  - one component of `nr_of_points` is zero or the total number of rays overflows.
    pub fn new(radius: Length, nr_of_points: (usize, usize)) -> SourceResult<Self> {
        let grid = Self {
            radius,
            nr_of_points,
        };
        grid.validate()?;
        Ok(grid)
    }
    fn validate(&self) -> SourceResult<()> {
        if self.radius.is_sign_negative() || !self.radius.is_finite() {
            return Err(SourceError::InvalidParameter(
                "radius must be positive and finite".into(),
            ));
        }
        polar_seed_count(self.nr_of_points)?;
        Ok(())
    }
    /// Returns the radius of the outermost ring.
    #[must_use]
    pub const fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the number of rings (including the center) and the number of points per ring.
    #[must_use]
    pub const fn nr_of_points(&self) -> (usize, usize) {
        self.nr_of_points
    }
}

impl Default for PolarGrid {
    fn default() -> Self {
        Self {
            radius: millimeter!(0.5),
            nr_of_points: (5, 10),
        }
    }
}

impl BeamDistribution for PolarGrid {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let (nr_of_rings, points_per_ring) = self.nr_of_points;
        let mut seeds = Vec::with_capacity(polar_seed_count(self.nr_of_points)?);
        seeds.push(RaySeed::along_z());
        for ring in 1..nr_of_rings {
            let radius = self.radius * usize_to_f64(ring) / usize_to_f64(nr_of_rings - 1);
            for point_nr in 0..points_per_ring {
                let (sin, cos) =
                    (2.0 * PI * usize_to_f64(point_nr) / usize_to_f64(points_per_ring)).sin_cos();
                seeds.push(RaySeed::collimated(point![
                    radius * sin,
                    radius * cos,
                    Length::zero()
                ]));
            }
        }
        Ok(seeds)
    }
}
impl From<PolarGrid> for super::BeamDistType {
    fn from(dist: PolarGrid) -> Self {
        Self::PolarGrid(dist)
    }
}
