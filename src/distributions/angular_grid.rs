#![warn(missing_docs)]
//! Point source emitting on a rectangular grid of tilt angles
use super::{grid_fraction, BeamDistribution, RaySeed};
use crate::{
    degree,
    error::{SourceError, SourceResult},
    utils::geom_transformation::Isometry,
};
use itertools::iproduct;
use nalgebra::Point3;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Angle;

/// Point source with a rectangular grid of tilt angles
///
/// All rays start at the local origin. The direction of each ray is the z axis, tilted about the x axis and then
/// about the y axis. The tilt angles are evenly spread from `-span / 2` to `+span / 2`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Copy)]
pub struct AngularGrid {
    span: (Angle, Angle),
    nr_of_points: (usize, usize),
}
impl AngularGrid {
    /// Create a new [`AngularGrid`] distribution generator.
    ///
    /// `span` is the full angular size of the pencil about the x and y axes.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - one `span` component is negative or not finite.
    ///  - one `nr_of_points` component is zero or their product overflows.
    pub fn new(span: (Angle, Angle), nr_of_points: (usize, usize)) -> SourceResult<Self> {
        let grid = Self { span, nr_of_points };
        grid.validate()?;
        Ok(grid)
    }
    fn validate(&self) -> SourceResult<()> {
        if self.span.0.is_sign_negative()
            || !self.span.0.is_finite()
            || self.span.1.is_sign_negative()
            || !self.span.1.is_finite()
        {
            return Err(SourceError::InvalidParameter(
                "angular span must be >= zero and finite".into(),
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
    /// Returns the angular span about the x and y axes.
    #[must_use]
    pub const fn span(&self) -> (Angle, Angle) {
        self.span
    }
    /// Returns the number of tilt angles about the x and y axes.
    #[must_use]
    pub const fn nr_of_points(&self) -> (usize, usize) {
        self.nr_of_points
    }
}
impl Default for AngularGrid {
    fn default() -> Self {
        Self {
            span: (degree!(22.5), degree!(22.5)),
            nr_of_points: (10, 10),
        }
    }
}
impl BeamDistribution for AngularGrid {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let (nr_of_points_x, nr_of_points_y) = self.nr_of_points;
        iproduct!(0..nr_of_points_x, 0..nr_of_points_y)
            .map(|(i_x, i_y)| {
                let tilt = Isometry::new_rotation(Point3::new(
                    self.span.0 * grid_fraction(i_x, nr_of_points_x),
                    self.span.1 * grid_fraction(i_y, nr_of_points_y),
                    Angle::zero(),
                ))?;
                Ok(RaySeed::along_z().transformed(&tilt))
            })
            .collect()
    }
}
impl From<AngularGrid> for super::BeamDistType {
    fn from(dist: AngularGrid) -> Self {
        Self::AngularGrid(dist)
    }
}
