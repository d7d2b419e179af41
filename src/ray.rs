#![warn(missing_docs)]
//! Module for handling optical rays
use std::fmt::Display;

use nalgebra::{Point3, Vector3};
use num::Zero;
use uom::si::{
    f64::Length,
    length::{meter, micrometer},
};

use crate::{
    error::{SourceError, SourceResult},
    utils::geom_transformation::Isometry,
};

///Struct that contains all information about an optical ray as emitted by a source.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    /// Stores the current position of the ray
    pos: Point3<Length>,
    /// Stores the current propagation direction of the ray (stored as direction cosine)
    dir: Vector3<f64>,
    /// Wavelength of the ray
    wvl: Length,
    /// Free-form identifier of the source which emitted this ray
    label: String,
}
impl Ray {
    /// Creates a new [`Ray`].
    ///
    /// The direction vector is normalized. The direction is thus stored as (`direction cosine`)[`https://en.wikipedia.org/wiki/Direction_cosine`]
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given wavelength is <= 0.0, `NaN` or +inf
    ///  - the direction vector has a zero length or is not finite
    pub fn new(
        position: Point3<Length>,
        direction: Vector3<f64>,
        wave_length: Length,
        label: &str,
    ) -> SourceResult<Self> {
        if wave_length.is_zero() || wave_length.is_sign_negative() || !wave_length.is_finite() {
            return Err(SourceError::InvalidParameter(
                "wavelength must be >0".into(),
            ));
        }
        if direction.norm().is_zero() || !direction.norm().is_finite() {
            return Err(SourceError::InvalidParameter(
                "length of direction must be >0 and finite".into(),
            ));
        }
        Ok(Self {
            pos: position,
            dir: direction.normalize(),
            wvl: wave_length,
            label: label.to_owned(),
        })
    }
    /// Create a new collimated ray.
    ///
    /// Generate a ray collinear with the z axis (optical axis).
    ///
    /// # Errors
    /// This function returns an error if the given wavelength is <= 0.0, `NaN` or +inf
    pub fn new_collimated(
        position: Point3<Length>,
        wave_length: Length,
        label: &str,
    ) -> SourceResult<Self> {
        Self::new(position, Vector3::z(), wave_length, label)
    }
    /// Returns the position of this [`Ray`].
    #[must_use]
    pub fn position(&self) -> Point3<Length> {
        self.pos
    }
    /// Returns the direction of this [`Ray`].
    ///
    /// Return the ray direction vector as directional cosine.
    #[must_use]
    pub const fn direction(&self) -> Vector3<f64> {
        self.dir
    }
    /// Returns the wavelength of this [`Ray`].
    #[must_use]
    pub fn wavelength(&self) -> Length {
        self.wvl
    }
    /// Returns the label of this [`Ray`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Get [`Ray`] rotated and translated by given [`Isometry`]
    ///
    /// This maps a ray given in the local frame of the [`Isometry`] into its parent frame.
    #[must_use]
    pub fn transformed_ray(&self, isometry: &Isometry) -> Self {
        let mut new_ray = self.clone();
        new_ray.pos = isometry.transform_point(&self.pos);
        new_ray.dir = isometry.transform_vector_f64(&self.dir);
        new_ray
    }
}
impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = Length::format_args(meter, uom::fmt::DisplayStyle::Abbreviation);
        let um = Length::format_args(micrometer, uom::fmt::DisplayStyle::Abbreviation);
        write!(
            f,
            "pos: ({}, {}, {}), dir: ({}, {}, {}), wavelength: {:.5}, label: '{}'",
            m.with(self.pos[0]),
            m.with(self.pos[1]),
            m.with(self.pos[2]),
            self.dir[0],
            self.dir[1],
            self.dir[2],
            um.with(self.wvl),
            self.label
        )
    }
}
