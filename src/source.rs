#![warn(missing_docs)]
//! Ray sources
//!
//! A [`BeamSource`] combines a beam distribution with the placement of the beam in space, a wavelength and a label.
//! Generating a source samples the distribution in its local frame (beam axis along +z, beam center at the origin) and
//! places each ray into the target frame given by `origin` and `direction`.
use log::info;
use nalgebra::Point3;
use num::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Angle, Length};

use crate::{
    distributions::{BeamDistType, BeamDistribution, RaySeed},
    error::{SourceError, SourceResult},
    micrometer,
    rays::Rays,
    utils::geom_transformation::Isometry,
};

/// Default wavelength of a ray source (sodium D line).
pub const DEFAULT_WAVELENGTH: f64 = 0.58929;

/// Returns the default wavelength of a ray source as [`Length`].
#[must_use]
pub fn default_wavelength() -> Length {
    micrometer!(DEFAULT_WAVELENGTH)
}
fn zero_length_point() -> Point3<Length> {
    Point3::new(Length::zero(), Length::zero(), Length::zero())
}
fn zero_angle_point() -> Point3<Angle> {
    Point3::new(Angle::zero(), Angle::zero(), Angle::zero())
}

/// A configurable ray source
///
/// ## Example
///
/// ```rust
/// use raysource::{degree, millimeter, nanometer};
/// use raysource::distributions::PolarGrid;
/// use raysource::source::BeamSource;
///
/// let source = BeamSource::new(PolarGrid::new(millimeter!(1.0), (3, 6)).unwrap())
///     .with_origin(millimeter!(0.0, 0.0, -10.0))
///     .with_direction(degree!(0.0, 5.0, 0.0))
///     .with_wavelength(nanometer!(1053.0))
///     .with_label("pilot");
/// let rays = source.generate().unwrap();
/// assert_eq!(rays.nr_of_rays(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSource {
    distribution: BeamDistType,
    #[serde(default = "zero_length_point")]
    origin: Point3<Length>,
    #[serde(default = "zero_angle_point")]
    direction: Point3<Angle>,
    #[serde(default = "default_wavelength")]
    wavelength: Length,
    #[serde(default)]
    label: String,
}
impl BeamSource {
    /// Creates a new [`BeamSource`] with the given distribution.
    ///
    /// The source is located at the origin, emits along the z axis with the default wavelength and has an empty label.
    #[must_use]
    pub fn new(distribution: impl Into<BeamDistType>) -> Self {
        Self {
            distribution: distribution.into(),
            origin: zero_length_point(),
            direction: zero_angle_point(),
            wavelength: default_wavelength(),
            label: String::new(),
        }
    }
    /// Returns this [`BeamSource`] with the given origin of the central ray.
    #[must_use]
    pub fn with_origin(mut self, origin: Point3<Length>) -> Self {
        self.origin = origin;
        self
    }
    /// Returns this [`BeamSource`] with the given beam rotation about the x, y and z axes.
    ///
    /// The rotations are applied in this order (first about x, last about z).
    #[must_use]
    pub fn with_direction(mut self, direction: Point3<Angle>) -> Self {
        self.direction = direction;
        self
    }
    /// Returns this [`BeamSource`] with the given wavelength.
    #[must_use]
    pub fn with_wavelength(mut self, wavelength: Length) -> Self {
        self.wavelength = wavelength;
        self
    }
    /// Returns this [`BeamSource`] with the given label.
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        label.clone_into(&mut self.label);
        self
    }
    /// Returns a reference to the distribution of this [`BeamSource`].
    #[must_use]
    pub const fn distribution(&self) -> &BeamDistType {
        &self.distribution
    }
    /// Returns a mutable reference to the distribution of this [`BeamSource`].
    pub fn distribution_mut(&mut self) -> &mut BeamDistType {
        &mut self.distribution
    }
    /// Returns the origin of this [`BeamSource`].
    #[must_use]
    pub const fn origin(&self) -> Point3<Length> {
        self.origin
    }
    /// Returns the beam rotation of this [`BeamSource`].
    #[must_use]
    pub const fn direction(&self) -> Point3<Angle> {
        self.direction
    }
    /// Returns the wavelength of this [`BeamSource`].
    #[must_use]
    pub const fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the label of this [`BeamSource`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Returns the [`Isometry`] which places the local beam into the target frame.
    ///
    /// # Errors
    ///
    /// This function will return an error if origin or direction contain non-finite values.
    pub fn placement(&self) -> SourceResult<Isometry> {
        Isometry::new(self.origin, self.direction)
    }
    fn validate_wavelength(&self) -> SourceResult<()> {
        if self.wavelength.is_zero()
            || self.wavelength.is_sign_negative()
            || !self.wavelength.is_finite()
        {
            return Err(SourceError::InvalidParameter(
                "wavelength must be > 0 and finite".into(),
            ));
        }
        Ok(())
    }
    fn place(&self, seeds: &[RaySeed], placement: &Isometry) -> SourceResult<Rays> {
        let rays = Rays::from_seeds(seeds, placement, self.wavelength, &self.label)?;
        info!(
            "source '{}': generated {} rays using {} distribution",
            self.label,
            rays.nr_of_rays(),
            self.distribution
        );
        Ok(rays)
    }
    /// Generate the rays of this [`BeamSource`].
    ///
    /// Random distributions use their stored seed (if any) or the thread-local random number generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the wavelength is not positive or not finite.
    ///  - origin or direction contain non-finite values.
    ///  - the parameters of the distribution are invalid.
    pub fn generate(&self) -> SourceResult<Rays> {
        self.validate_wavelength()?;
        let placement = self.placement()?;
        let seeds = self.distribution.generate()?;
        self.place(&seeds, &placement)
    }
    /// Generate the rays of this [`BeamSource`] drawing random numbers from the given generator.
    ///
    /// The generator is only used by random distributions. All other distributions behave as in [`BeamSource::generate`].
    ///
    /// # Errors
    ///
    /// This function will return an error under the same conditions as [`BeamSource::generate`].
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceResult<Rays> {
        self.validate_wavelength()?;
        let placement = self.placement()?;
        let seeds = match &self.distribution {
            BeamDistType::AngularRandom(dist) => dist.generate_with_rng(rng)?,
            dist => dist.generate()?,
        };
        self.place(&seeds, &placement)
    }
}
