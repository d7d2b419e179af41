//! Rigid body transformations used to place ray seeds into a target frame.
#![warn(missing_docs)]
use std::fmt::Display;

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use num::Zero;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::meter,
};

use crate::{
    error::{SourceError, SourceResult},
    meter, radian,
};

/// A rigid body transformation (rotation followed by a translation).
///
/// The rotation is given by three angles about the x, y and z axes. A point `p` is transformed as
/// `Rz * Ry * Rx * p + translation`, so the rotation about x is applied first. Directions are only rotated.
///
/// Isometries can be chained using [`Isometry::append`]. The composition is associative but not commutative.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometry {
    transform: Isometry3<f64>,
    inverse: Isometry3<f64>,
}
impl Isometry {
    /// Create a new [`Isometry`] from a translation and three rotation angles about the x, y and z axes.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the translation or angle components is not finite.
    pub fn new(translation: Point3<Length>, axisangles: Point3<Angle>) -> SourceResult<Self> {
        if !(translation.x.is_finite() && translation.y.is_finite() && translation.z.is_finite()) {
            return Err(SourceError::InvalidParameter(
                "translation must be finite".into(),
            ));
        }
        if !(axisangles.x.is_finite() && axisangles.y.is_finite() && axisangles.z.is_finite()) {
            return Err(SourceError::InvalidParameter(
                "rotation angles must be finite".into(),
            ));
        }
        let translation = Translation3::new(
            translation.x.get::<meter>(),
            translation.y.get::<meter>(),
            translation.z.get::<meter>(),
        );
        let rotation = UnitQuaternion::from_euler_angles(
            axisangles.x.get::<radian>(),
            axisangles.y.get::<radian>(),
            axisangles.z.get::<radian>(),
        );
        Ok(Self::from_transform(Isometry3::from_parts(
            translation,
            rotation,
        )))
    }
    /// Create a pure translation [`Isometry`].
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the translation components is not finite.
    pub fn new_translation(translation: Point3<Length>) -> SourceResult<Self> {
        Self::new(translation, radian!(0., 0., 0.))
    }
    /// Create a pure rotation [`Isometry`] from three angles about the x, y and z axes.
    ///
    /// # Errors
    ///
    /// This function will return an error if one of the angles is not finite.
    pub fn new_rotation(axisangles: Point3<Angle>) -> SourceResult<Self> {
        Self::new(meter!(0., 0., 0.), axisangles)
    }
    /// Create an [`Isometry`] which shifts along the z axis by the given length.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given distance is not finite.
    pub fn new_along_z(z_distance: Length) -> SourceResult<Self> {
        Self::new_translation(Point3::new(Length::zero(), Length::zero(), z_distance))
    }
    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_transform(Isometry3::identity())
    }
    fn from_transform(transform: Isometry3<f64>) -> Self {
        Self {
            transform,
            inverse: transform.inverse(),
        }
    }
    /// Chain this [`Isometry`] with an `inner` one.
    ///
    /// The resulting [`Isometry`] first applies `inner` and then `self`.
    #[must_use]
    pub fn append(&self, inner: &Self) -> Self {
        Self::from_transform(self.transform * inner.transform)
    }
    /// Returns the inverse of this [`Isometry`].
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            transform: self.inverse,
            inverse: self.transform,
        }
    }
    /// Transform a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<Length>) -> Point3<Length> {
        point_from_f64(&self.transform.transform_point(&point_to_f64(point)))
    }
    /// Transform (rotate) a direction vector.
    #[must_use]
    pub fn transform_vector_f64(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.transform.transform_vector(vector)
    }
    /// Transform a point with the inverse of this [`Isometry`].
    #[must_use]
    pub fn inverse_transform_point(&self, point: &Point3<Length>) -> Point3<Length> {
        point_from_f64(&self.inverse.transform_point(&point_to_f64(point)))
    }
    /// Transform (rotate) a direction vector with the inverse of this [`Isometry`].
    #[must_use]
    pub fn inverse_transform_vector_f64(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.inverse.transform_vector(vector)
    }
    /// Returns the translation part of this [`Isometry`].
    #[must_use]
    pub fn translation(&self) -> Point3<Length> {
        point_from_f64(&Point3::from(self.transform.translation.vector))
    }
    /// Returns the rotation part of this [`Isometry`] as angles about the x, y and z axes.
    #[must_use]
    pub fn rotation(&self) -> Point3<Angle> {
        let (roll, pitch, yaw) = self.transform.rotation.euler_angles();
        radian!(roll, pitch, yaw)
    }
}
impl Default for Isometry {
    fn default() -> Self {
        Self::identity()
    }
}
impl Display for Isometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = Length::format_args(meter, uom::fmt::DisplayStyle::Abbreviation);
        let deg = Angle::format_args(degree, uom::fmt::DisplayStyle::Abbreviation);
        let t = self.translation();
        let r = self.rotation();
        write!(
            f,
            "translation: ({}, {}, {}), rotation: ({}, {}, {})",
            m.with(t.x),
            m.with(t.y),
            m.with(t.z),
            deg.with(r.x),
            deg.with(r.y),
            deg.with(r.z)
        )
    }
}
fn point_to_f64(point: &Point3<Length>) -> Point3<f64> {
    Point3::new(
        point.x.get::<meter>(),
        point.y.get::<meter>(),
        point.z.get::<meter>(),
    )
}
fn point_from_f64(point: &Point3<f64>) -> Point3<Length> {
    meter!(point.x, point.y, point.z)
}
