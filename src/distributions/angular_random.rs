#![warn(missing_docs)]
//! Point source emitting with normally distributed tilt angles
use super::{BeamDistribution, RaySeed};
use crate::{
    degree,
    error::{SourceError, SourceResult},
    radian,
    utils::geom_transformation::Isometry,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use uom::si::f64::Angle;

/// Point source with normally distributed tilt angles
///
/// All rays start at the local origin. For each ray, a tilt about the x axis and a tilt about the y axis are drawn
/// independently from a normal distribution with zero mean and the given `span` as standard deviation.
///
/// Through [`BeamDistribution::generate`], the random numbers are taken from a generator seeded with the stored seed
/// (if any) or from the thread-local generator. Use [`AngularRandom::generate_with_rng`] to inject a generator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Copy)]
pub struct AngularRandom {
    span: Angle,
    nr_of_rays: usize,
    #[serde(default)]
    seed: Option<u64>,
}
impl AngularRandom {
    /// Create a new [`AngularRandom`] distribution generator.
    ///
    /// A `nr_of_rays` of zero is valid and results in an empty beam.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given `span` is negative or not finite.
    pub fn new(span: Angle, nr_of_rays: usize) -> SourceResult<Self> {
        let dist = Self {
            span,
            nr_of_rays,
            seed: None,
        };
        dist.validate()?;
        Ok(dist)
    }
    /// Returns this [`AngularRandom`] with a fixed seed for reproducible generation.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Sets (or clears) the seed of this [`AngularRandom`].
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }
    /// Returns the seed of this [`AngularRandom`].
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
    /// Returns the standard deviation of the tilt angles.
    #[must_use]
    pub const fn span(&self) -> Angle {
        self.span
    }
    /// Returns the number of rays of this [`AngularRandom`].
    #[must_use]
    pub const fn nr_of_rays(&self) -> usize {
        self.nr_of_rays
    }
    fn validate(&self) -> SourceResult<()> {
        if self.span.is_sign_negative() || !self.span.is_finite() {
            return Err(SourceError::InvalidParameter(
                "angular span must be >= zero and finite".into(),
            ));
        }
        Ok(())
    }
    /// Generate the ray seeds using the given random number generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if the span is invalid.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let normal = Normal::new(0.0, self.span.value)
            .map_err(|e| SourceError::InvalidParameter(format!("angular span: {e}")))?;
        (0..self.nr_of_rays)
            .map(|_| {
                let tilt_x = normal.sample(rng);
                let tilt_y = normal.sample(rng);
                let tilt = Isometry::new_rotation(radian!(tilt_x, tilt_y, 0.0))?;
                Ok(RaySeed::along_z().transformed(&tilt))
            })
            .collect()
    }
}
impl Default for AngularRandom {
    fn default() -> Self {
        Self {
            span: degree!(22.5),
            nr_of_rays: 100,
            seed: None,
        }
    }
}
impl BeamDistribution for AngularRandom {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        if let Some(seed) = self.seed {
            self.generate_with_rng(&mut StdRng::seed_from_u64(seed))
        } else {
            self.generate_with_rng(&mut rand::rng())
        }
    }
}
impl From<AngularRandom> for super::BeamDistType {
    fn from(dist: AngularRandom) -> Self {
        Self::AngularRandom(dist)
    }
}
