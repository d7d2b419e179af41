#![warn(missing_docs)]
//! Module for handling bundles of optical rays
use nalgebra::Point3;
use num::Zero;
use uom::si::f64::Length;

use crate::{
    distributions::RaySeed,
    error::SourceResult,
    ray::Ray,
    utils::{geom_transformation::Isometry, usize_to_f64},
};

/// Ordered bundle of [`Ray`]s as emitted by a source
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rays {
    rays: Vec<Ray>,
}
impl Rays {
    /// Create a [`Rays`] bundle from local ray seeds.
    ///
    /// Each seed is placed into the parent frame by the given `placement` and turned into a [`Ray`] with the given
    /// `wave_length` and `label`. The order of the seeds is kept.
    ///
    /// # Errors
    ///
    /// This function will return an error if the wavelength is invalid or a seed direction has zero length.
    pub fn from_seeds(
        seeds: &[RaySeed],
        placement: &Isometry,
        wave_length: Length,
        label: &str,
    ) -> SourceResult<Self> {
        let rays = seeds
            .iter()
            .map(|seed| {
                let seed = seed.transformed(placement);
                Ray::new(seed.position(), seed.direction(), wave_length, label)
            })
            .collect::<SourceResult<Vec<Ray>>>()?;
        Ok(Self { rays })
    }
    /// Returns the number of rays of this [`Rays`].
    #[must_use]
    pub fn nr_of_rays(&self) -> usize {
        self.rays.len()
    }
    /// Returns `true` if this [`Rays`] does not contain any ray.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }
    /// Returns an iterator over the [`Ray`]s of this bundle.
    pub fn iter(&self) -> std::slice::Iter<'_, Ray> {
        self.rays.iter()
    }
    /// Returns the positions of all rays.
    #[must_use]
    pub fn positions(&self) -> Vec<Point3<Length>> {
        self.rays.iter().map(Ray::position).collect()
    }
    /// Add a single ray to this [`Rays`].
    pub fn add_ray(&mut self, ray: Ray) {
        self.rays.push(ray);
    }
    /// Append all rays of another bundle to this [`Rays`].
    pub fn merge(&mut self, rays: &Self) {
        self.rays.extend_from_slice(&rays.rays);
    }
    /// Returns a new [`Rays`] with all rays transformed by the given [`Isometry`].
    #[must_use]
    pub fn transformed(&self, isometry: &Isometry) -> Self {
        Self {
            rays: self
                .rays
                .iter()
                .map(|ray| ray.transformed_ray(isometry))
                .collect(),
        }
    }
    /// Returns the geometric center of all ray positions.
    ///
    /// Returns `None` if the bundle is empty.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<Length>> {
        if self.rays.is_empty() {
            return None;
        }
        let sum = self.rays.iter().fold(
            Point3::new(Length::zero(), Length::zero(), Length::zero()),
            |acc, ray| {
                let p = ray.position();
                Point3::new(acc.x + p.x, acc.y + p.y, acc.z + p.z)
            },
        );
        let nr_of_rays = usize_to_f64(self.rays.len());
        Some(Point3::new(
            sum.x / nr_of_rays,
            sum.y / nr_of_rays,
            sum.z / nr_of_rays,
        ))
    }
    /// Returns the label of the first ray in this bundle.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.rays.first().map(Ray::label)
    }
}
impl<'a> IntoIterator for &'a Rays {
    type Item = &'a Ray;
    type IntoIter = std::slice::Iter<'a, Ray>;
    fn into_iter(self) -> Self::IntoIter {
        self.rays.iter()
    }
}
impl IntoIterator for Rays {
    type Item = Ray;
    type IntoIter = std::vec::IntoIter<Ray>;
    fn into_iter(self) -> Self::IntoIter {
        self.rays.into_iter()
    }
}
