#![warn(missing_docs)]
//! Parallel beam on a hexagonal close-packed grid
use std::f64::consts::PI;

use super::{BeamDistribution, RaySeed};
use crate::{
    error::{SourceError, SourceResult},
    millimeter,
    utils::{f64_to_i64, i64_to_f64, usize_to_f64},
};
use itertools::iproduct;
use log::warn;
use nalgebra::Point3;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// Parallel beam on a hexagonal close-packed grid within a circle
///
/// The grid is built from two interleaved rectangular lattices. The lattice constant is chosen such that
/// approximately `nr_of_rays` points fall into the circle of the given `radius`. The exact number of rays depends on
/// how the lattice intersects with the circle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Copy)]
pub struct HexagonalGrid {
    radius: Length,
    nr_of_rays: usize,
}
impl HexagonalGrid {
    /// Create a new [`HexagonalGrid`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given `radius` is not positive or not finite.
    ///  - `nr_of_rays` is zero.
    pub fn new(radius: Length, nr_of_rays: usize) -> SourceResult<Self> {
        let grid = Self { radius, nr_of_rays };
        grid.validate()?;
        Ok(grid)
    }
    fn validate(&self) -> SourceResult<()> {
        if self.radius.is_zero() || self.radius.is_sign_negative() || !self.radius.is_finite() {
            return Err(SourceError::InvalidParameter(
                "radius must be positive and finite".into(),
            ));
        }
        if self.nr_of_rays.is_zero() {
            return Err(SourceError::InvalidSampleCount(
                "number of rays must be > 0".into(),
            ));
        }
        Ok(())
    }
    /// Returns the radius of this [`HexagonalGrid`].
    #[must_use]
    pub const fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the requested (approximate) number of rays of this [`HexagonalGrid`].
    #[must_use]
    pub const fn nr_of_rays(&self) -> usize {
        self.nr_of_rays
    }
}
impl Default for HexagonalGrid {
    fn default() -> Self {
        Self {
            radius: millimeter!(0.5),
            nr_of_rays: 41,
        }
    }
}
/// Inclusive index range covering `-extent..=extent` for a lattice shifted by `offset`.
fn index_range(extent: f64, offset: f64) -> std::ops::RangeInclusive<i64> {
    f64_to_i64((-extent - offset).floor())..=f64_to_i64((extent - offset).ceil())
}
impl BeamDistribution for HexagonalGrid {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let radius = self.radius.value;
        let radius_sq = radius * radius;
        let area = PI * radius_sq / usize_to_f64(self.nr_of_rays);
        let l = (2.0 / (3.0 * 3.0_f64.sqrt()) * area).sqrt() * 0.97;
        let h = 3.0_f64.sqrt() / 2.0 * l;
        let r3l = radius / (3.0 * l);
        let r2h = radius / (2.0 * h);

        let lattice_a = iproduct!(index_range(r3l, 0.0), index_range(r2h, 0.0))
            .map(|(k_x, k_y)| (3.0 * i64_to_f64(k_x) * l, 2.0 * i64_to_f64(k_y) * h));
        let lattice_b = iproduct!(index_range(r3l, 0.5), index_range(r2h, 0.5))
            .map(|(k_x, k_y)| (i64_to_f64(k_x) + 0.5, i64_to_f64(k_y) + 0.5))
            .map(|(k_x, k_y)| (3.0 * k_x * l, 2.0 * k_y * h));
        let seeds: Vec<RaySeed> = lattice_a
            .chain(lattice_b)
            .filter(|(x, y)| x.mul_add(*x, y * y) <= radius_sq)
            .map(|(x, y)| {
                RaySeed::collimated(Point3::new(
                    Length::new::<uom::si::length::meter>(x),
                    Length::new::<uom::si::length::meter>(y),
                    Length::zero(),
                ))
            })
            .collect();
        let deviation = (usize_to_f64(seeds.len()) - usize_to_f64(self.nr_of_rays)).abs()
            / usize_to_f64(self.nr_of_rays);
        if deviation > 0.25 {
            warn!(
                "hexagonal grid: requested {} rays but generated {}",
                self.nr_of_rays,
                seeds.len()
            );
        }
        Ok(seeds)
    }
}
impl From<HexagonalGrid> for super::BeamDistType {
    fn from(dist: HexagonalGrid) -> Self {
        Self::HexagonalGrid(dist)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_logs;
    use assert_matches::assert_matches;
    use nalgebra::Vector3;
    #[test]
    fn new_wrong() {
        assert!(HexagonalGrid::new(millimeter!(0.0), 10).is_err());
        assert!(HexagonalGrid::new(millimeter!(-1.0), 10).is_err());
        assert!(HexagonalGrid::new(millimeter!(f64::NAN), 10).is_err());
        assert!(HexagonalGrid::new(millimeter!(f64::INFINITY), 10).is_err());
        assert_matches!(
            HexagonalGrid::new(millimeter!(1.0), 0),
            Err(SourceError::InvalidSampleCount(_))
        );
    }
    #[test]
    fn index_ranges() {
        assert_eq!(index_range(1.2, 0.0), -2..=2);
        assert_eq!(index_range(1.2, 0.5), -2..=1);
        assert_eq!(index_range(0.3, 0.5), -1..=0);
    }
    #[test]
    fn generate_default_count() {
        let grid = HexagonalGrid::new(millimeter!(1.0), 41).unwrap();
        let seeds = grid.generate().unwrap();
        assert_eq!(seeds.len(), 43);
        let radius_sq = millimeter!(1.0).value.powi(2);
        for seed in &seeds {
            let p = seed.position();
            assert!(p.x.value.powi(2) + p.y.value.powi(2) <= radius_sq);
            assert!(p.z.is_zero());
            assert_eq!(seed.direction(), Vector3::z());
        }
    }
    #[test]
    fn generate_approximate_count() {
        for nr_of_rays in [7, 19, 41, 100, 1000] {
            let seeds = HexagonalGrid::new(millimeter!(2.0), nr_of_rays)
                .unwrap()
                .generate()
                .unwrap();
            let deviation = (usize_to_f64(seeds.len()) - usize_to_f64(nr_of_rays)).abs()
                / usize_to_f64(nr_of_rays);
            assert!(deviation <= 0.25);
        }
    }
    #[test]
    fn single_ray() {
        let seeds = HexagonalGrid::new(millimeter!(1.0), 1)
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].position(), millimeter!(0.0, 0.0, 0.0));
    }
    #[test]
    fn generate_no_warning() {
        testing_logger::setup();
        HexagonalGrid::default().generate().unwrap();
        check_logs(log::Level::Warn, vec![]);
    }
}
