#![warn(missing_docs)]
//! Helper functions for easier creation of standard ray sources
//!
//! Each function builds a [`BeamSource`] with the matching distribution and generates its rays right away. All
//! functions share the placement parameters:
//!  - `origin`: position of the central ray origin.
//!  - `direction`: rotation of the beam about the x, y and z axes (applied in this order).
//!  - `wavelength`: wavelength of all rays (see [`default_wavelength`](crate::source::default_wavelength)).
//!  - `label`: string used to identify the source.
use nalgebra::Point3;
use uom::si::f64::{Angle, Length};

use crate::{
    distributions::{
        AngularGrid, AngularPolar, AngularRandom, BeamDistType, CartesianGrid, CoordinateList,
        Coordinates, HexagonalGrid, PolarGrid,
    },
    error::SourceResult,
    rays::Rays,
    source::BeamSource,
};

fn generate(
    distribution: impl Into<BeamDistType>,
    origin: Point3<Length>,
    direction: Point3<Angle>,
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    BeamSource::new(distribution)
        .with_origin(origin)
        .with_direction(direction)
        .with_wavelength(wavelength)
        .with_label(label)
        .generate()
}

/// Collimated beam on a rectangular grid.
///
/// `size` is the full width and height of the grid, `nr_of_rays` the number of rays along x and y.
///
/// # Errors
///
/// This function will return an error if the grid parameters, the placement or the wavelength are invalid.
pub fn parallel_beam_c(
    origin: Point3<Length>,
    direction: Point3<Angle>,
    size: (Length, Length),
    nr_of_rays: (usize, usize),
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        CartesianGrid::new(size, nr_of_rays)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

/// Collimated beam on a polar grid.
///
/// `nr_of_rays` is the tuple (number of rings including the center, number of rays per ring).
///
/// # Errors
///
/// This function will return an error if the grid parameters, the placement or the wavelength are invalid.
pub fn parallel_beam_p(
    origin: Point3<Length>,
    direction: Point3<Angle>,
    radius: Length,
    nr_of_rays: (usize, usize),
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        PolarGrid::new(radius, nr_of_rays)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

/// Point source with a rectangular grid of tilt angles.
///
/// # Errors
///
/// This function will return an error if the grid parameters, the placement or the wavelength are invalid.
pub fn point_source_c(
    origin: Point3<Length>,
    direction: Point3<Angle>,
    span: (Angle, Angle),
    nr_of_rays: (usize, usize),
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        AngularGrid::new(span, nr_of_rays)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

/// Point source with a polar grid of tilt angles.
///
/// # Errors
///
/// This function will return an error if the grid parameters, the placement or the wavelength are invalid.
pub fn point_source_p(
    origin: Point3<Length>,
    direction: Point3<Angle>,
    span: Angle,
    nr_of_rays: (usize, usize),
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        AngularPolar::new(span, nr_of_rays)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

/// Point source with normally distributed tilt angles.
///
/// The random numbers are taken from the thread-local generator. For reproducible beams, use a [`BeamSource`] with
/// a seeded [`AngularRandom`] distribution.
///
/// # Errors
///
/// This function will return an error if the span, the placement or the wavelength are invalid.
pub fn point_source_r(
    origin: Point3<Length>,
    direction: Point3<Angle>,
    span: Angle,
    nr_of_rays: usize,
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        AngularRandom::new(span, nr_of_rays)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

/// Collimated beam at the given coordinates.
///
/// `x` and `y` may be a single [`Length`] or a list of lengths. A single value is repeated for every entry of the
/// other list.
///
/// # Errors
///
/// This function will return an error if
///  - `x` and `y` are both lists with different lengths.
///  - the placement or the wavelength are invalid.
pub fn parallel_beam_list(
    x: impl Into<Coordinates>,
    y: impl Into<Coordinates>,
    origin: Point3<Length>,
    direction: Point3<Angle>,
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        CoordinateList::new(x, y)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

/// Collimated beam on a hexagonal close-packed grid within a circle.
///
/// The number of generated rays only approximates `nr_of_rays`.
///
/// # Errors
///
/// This function will return an error if the grid parameters, the placement or the wavelength are invalid.
pub fn parallel_beam_h(
    origin: Point3<Length>,
    direction: Point3<Angle>,
    radius: Length,
    nr_of_rays: usize,
    wavelength: Length,
    label: &str,
) -> SourceResult<Rays> {
    generate(
        HexagonalGrid::new(radius, nr_of_rays)?,
        origin,
        direction,
        wavelength,
        label,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        degree, error::SourceError, millimeter, nanometer, ray::Ray, source::default_wavelength,
        utils::geom_transformation::Isometry,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;
    use nalgebra::{vector, Vector3};
    use std::f64::consts::PI;

    fn origin() -> Point3<Length> {
        millimeter!(0.0, 0.0, 0.0)
    }
    fn no_rotation() -> Point3<Angle> {
        degree!(0.0, 0.0, 0.0)
    }
    #[test]
    fn parallel_beam_c_single() {
        let rays = parallel_beam_c(
            origin(),
            no_rotation(),
            (millimeter!(1.0), millimeter!(1.0)),
            (1, 1),
            default_wavelength(),
            "",
        )
        .unwrap();
        assert_eq!(rays.nr_of_rays(), 1);
        assert_eq!(rays.positions()[0], millimeter!(0.0, 0.0, 0.0));
    }
    #[test]
    fn parallel_beam_c_line() {
        let rays = parallel_beam_c(
            origin(),
            no_rotation(),
            (millimeter!(2.0), millimeter!(1.0)),
            (3, 1),
            default_wavelength(),
            "line",
        )
        .unwrap();
        let x: Vec<f64> = rays.iter().map(|r| r.position().x.value).collect();
        assert_eq!(x, vec![-0.001, 0.0, 0.001]);
        assert!(rays.iter().all(|r| r.label() == "line"));
    }
    #[test]
    fn parallel_beam_c_wrong() {
        assert_matches!(
            parallel_beam_c(
                origin(),
                no_rotation(),
                (millimeter!(1.0), millimeter!(1.0)),
                (0, 1),
                default_wavelength(),
                ""
            ),
            Err(SourceError::InvalidSampleCount(_))
        );
    }
    #[test]
    fn parallel_beam_p_center() {
        let rays = parallel_beam_p(
            millimeter!(1.0, 2.0, 3.0),
            no_rotation(),
            millimeter!(0.5),
            (5, 10),
            default_wavelength(),
            "",
        )
        .unwrap();
        assert_eq!(rays.nr_of_rays(), 41);
        assert_eq!(rays.positions()[0], millimeter!(1.0, 2.0, 3.0));
    }
    #[test]
    fn point_source_c_common_origin() {
        let rays = point_source_c(
            millimeter!(0.0, 0.0, -5.0),
            no_rotation(),
            (degree!(10.0), degree!(10.0)),
            (4, 4),
            nanometer!(633.0),
            "",
        )
        .unwrap();
        assert_eq!(rays.nr_of_rays(), 16);
        for ray in &rays {
            assert_eq!(ray.position(), millimeter!(0.0, 0.0, -5.0));
            assert_eq!(ray.wavelength(), nanometer!(633.0));
        }
    }
    #[test]
    fn point_source_p_rotated() {
        let rays = point_source_p(
            origin(),
            degree!(0.0, 90.0, 0.0),
            degree!(10.0),
            (3, 6),
            default_wavelength(),
            "",
        )
        .unwrap();
        assert_eq!(rays.nr_of_rays(), 13);
        assert_relative_eq!(
            rays.iter().next().unwrap().direction(),
            vector![1.0, 0.0, 0.0],
            epsilon = 1e-12
        );
    }
    #[test]
    fn point_source_p_tilt_before_placement() {
        let rays = point_source_p(
            origin(),
            degree!(0.0, 90.0, 0.0),
            degree!(90.0),
            (2, 4),
            default_wavelength(),
            "",
        )
        .unwrap();
        let directions: Vec<Vector3<f64>> = rays.iter().map(Ray::direction).collect();
        assert_eq!(directions.len(), 5);
        assert_relative_eq!(directions[0], vector![1.0, 0.0, 0.0], epsilon = 1e-12);
        // ring tilt of 45 degree about x, then the placement rotation about y
        let (sin, cos) = (PI / 4.0).sin_cos();
        assert_relative_eq!(directions[1], vector![cos, -sin, 0.0], epsilon = 1e-12);
        // placing first and tilting afterwards leads to a different direction
        let placed_first = Isometry::new_rotation(degree!(45.0, 0.0, 0.0))
            .unwrap()
            .transform_vector_f64(&vector![1.0, 0.0, 0.0]);
        assert_relative_eq!(placed_first, vector![1.0, 0.0, 0.0], epsilon = 1e-12);
        assert!((directions[1] - placed_first).norm() > 0.5);
    }
    #[test]
    fn point_source_c_tilt_before_placement() {
        let rays = point_source_c(
            origin(),
            degree!(0.0, 90.0, 0.0),
            (degree!(90.0), degree!(0.0)),
            (3, 1),
            default_wavelength(),
            "",
        )
        .unwrap();
        let directions: Vec<Vector3<f64>> = rays.iter().map(Ray::direction).collect();
        assert_eq!(directions.len(), 3);
        let (sin, cos) = (PI / 4.0).sin_cos();
        assert_relative_eq!(directions[0], vector![cos, sin, 0.0], epsilon = 1e-12);
        assert_relative_eq!(directions[1], vector![1.0, 0.0, 0.0], epsilon = 1e-12);
        assert_relative_eq!(directions[2], vector![cos, -sin, 0.0], epsilon = 1e-12);
        let placed_first = Isometry::new_rotation(degree!(-45.0, 0.0, 0.0))
            .unwrap()
            .transform_vector_f64(&vector![1.0, 0.0, 0.0]);
        assert!((directions[0] - placed_first).norm() > 0.5);
    }
    #[test]
    fn point_source_r_count() {
        let rays = point_source_r(
            origin(),
            no_rotation(),
            degree!(1.0),
            30,
            default_wavelength(),
            "",
        )
        .unwrap();
        assert_eq!(rays.nr_of_rays(), 30);
        let rays = point_source_r(
            origin(),
            no_rotation(),
            degree!(1.0),
            0,
            default_wavelength(),
            "",
        )
        .unwrap();
        assert!(rays.is_empty());
    }
    #[test]
    fn parallel_beam_list_broadcast() {
        let rays = parallel_beam_list(
            millimeter!(1.0),
            vec![millimeter!(1.0), millimeter!(2.0), millimeter!(3.0)],
            origin(),
            no_rotation(),
            default_wavelength(),
            "",
        )
        .unwrap();
        assert_eq!(rays.nr_of_rays(), 3);
        for (ray, y) in rays.iter().zip([1.0, 2.0, 3.0]) {
            assert_eq!(ray.position(), millimeter!(1.0, y, 0.0));
            assert_eq!(ray.direction(), Vector3::z());
        }
    }
    #[test]
    fn parallel_beam_list_mismatch() {
        assert_matches!(
            parallel_beam_list(
                vec![millimeter!(1.0), millimeter!(2.0)],
                vec![millimeter!(1.0), millimeter!(2.0), millimeter!(3.0)],
                origin(),
                no_rotation(),
                default_wavelength(),
                "",
            ),
            Err(SourceError::ShapeMismatch(_))
        );
    }
    #[test]
    fn parallel_beam_h_inside() {
        let rays = parallel_beam_h(
            origin(),
            no_rotation(),
            millimeter!(1.0),
            41,
            default_wavelength(),
            "",
        )
        .unwrap();
        let nr_of_rays = rays.nr_of_rays();
        assert!((31..=51).contains(&nr_of_rays));
        for pos in rays.positions() {
            assert!(pos.x.value.powi(2) + pos.y.value.powi(2) <= 1.0e-6);
        }
    }
    #[test]
    fn translation_moves_beam() {
        let rays = parallel_beam_c(
            millimeter!(1.0, 0.0, 0.0),
            no_rotation(),
            (millimeter!(2.0), millimeter!(2.0)),
            (3, 3),
            default_wavelength(),
            "",
        )
        .unwrap();
        let center = rays.centroid().unwrap();
        assert_abs_diff_eq!(center.x.value, 0.001, epsilon = 1e-15);
        assert_abs_diff_eq!(center.y.value, 0.0, epsilon = 1e-15);
    }
}
