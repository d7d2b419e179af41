#![warn(missing_docs)]
//! Point source emitting on a polar grid of tilt angles
use std::f64::consts::PI;

use super::{polar_seed_count, BeamDistribution, RaySeed};
use crate::{
    degree,
    error::{SourceError, SourceResult},
    radian,
    utils::{geom_transformation::Isometry, usize_to_f64},
};
use serde::{Deserialize, Serialize};
use uom::si::f64::Angle;

/// Point source with a polar grid of tilt angles
///
/// The first ray propagates along the z axis. Each following ring `r` (`1..nr`) tilts the z axis by `span * r / nr`
/// about the x axis and distributes `nt` rays evenly around the z axis. The outermost ring thus stays below `span`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Copy)]
pub struct AngularPolar {
    span: Angle,
    nr_of_points: (usize, usize),
}
impl AngularPolar {
    /// Create a new [`AngularPolar`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `span` is negative or not finite.
    ///  - one component of `nr_of_points` is zero or the total number of rays overflows.
    pub fn new(span: Angle, nr_of_points: (usize, usize)) -> SourceResult<Self> {
        let grid = Self { span, nr_of_points };
        grid.validate()?;
        Ok(grid)
    }
    fn validate(&self) -> SourceResult<()> {
        if self.span.is_sign_negative() || !self.span.is_finite() {
            return Err(SourceError::InvalidParameter(
                "angular span must be >= zero and finite".into(),
            ));
        }
        polar_seed_count(self.nr_of_points)?;
        Ok(())
    }
    /// Returns the angular span of this [`AngularPolar`].
    #[must_use]
    pub const fn span(&self) -> Angle {
        self.span
    }
    /// Returns the number of rings (including the center) and the number of points per ring.
    #[must_use]
    pub const fn nr_of_points(&self) -> (usize, usize) {
        self.nr_of_points
    }
}
impl Default for AngularPolar {
    fn default() -> Self {
        Self {
            span: degree!(22.5),
            nr_of_points: (10, 10),
        }
    }
}
impl BeamDistribution for AngularPolar {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let (nr_of_rings, points_per_ring) = self.nr_of_points;
        let mut seeds = Vec::with_capacity(polar_seed_count(self.nr_of_points)?);
        seeds.push(RaySeed::along_z());
        for ring in 1..nr_of_rings {
            let tilt = self.span * usize_to_f64(ring) / usize_to_f64(nr_of_rings);
            let ring_seed = RaySeed::along_z()
                .transformed(&Isometry::new_rotation(radian!(tilt.value, 0.0, 0.0))?);
            for point_nr in 0..points_per_ring {
                let azimuth = 2.0 * PI * usize_to_f64(point_nr) / usize_to_f64(points_per_ring);
                let spin = Isometry::new_rotation(radian!(0.0, 0.0, azimuth))?;
                seeds.push(ring_seed.transformed(&spin));
            }
        }
        Ok(seeds)
    }
}
impl From<AngularPolar> for super::BeamDistType {
    fn from(dist: AngularPolar) -> Self {
        Self::AngularPolar(dist)
    }
}
