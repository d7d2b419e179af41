#![warn(missing_docs)]
//! Parallel beam at explicitly given coordinates
use super::{BeamDistribution, RaySeed};
use crate::error::{SourceError, SourceResult};
use itertools::Itertools;
use nalgebra::Point3;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

/// A single coordinate or a list of coordinates along one axis.
///
/// In a beam document, a [`Coordinates`] is either given as a plain value or as a sequence of values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Coordinates {
    /// one value, repeated as needed
    Scalar(Length),
    /// explicit list of values
    List(Vec<Length>),
}
impl Coordinates {
    /// Returns the number of values in this [`Coordinates`] if it is a list.
    #[must_use]
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values.len()),
        }
    }
    fn values(&self, len: usize) -> Vec<Length> {
        match self {
            Self::Scalar(value) => vec![*value; len],
            Self::List(values) => values.clone(),
        }
    }
    fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(value) => value.is_finite(),
            Self::List(values) => values.iter().all(|v| v.is_finite()),
        }
    }
}
impl From<Length> for Coordinates {
    fn from(value: Length) -> Self {
        Self::Scalar(value)
    }
}
impl From<Vec<Length>> for Coordinates {
    fn from(values: Vec<Length>) -> Self {
        Self::List(values)
    }
}

/// Parallel beam at explicitly given (x, y) coordinates
///
/// A scalar coordinate is repeated to match the length of the other axis. If both coordinates are lists, they must
/// have the same length. The rays are emitted in list order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CoordinateList {
    x: Coordinates,
    y: Coordinates,
}
impl CoordinateList {
    /// Create a new [`CoordinateList`] distribution generator.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - `x` and `y` are both lists of different length.
    ///  - one of the coordinates is not finite.
    pub fn new(x: impl Into<Coordinates>, y: impl Into<Coordinates>) -> SourceResult<Self> {
        let list = Self {
            x: x.into(),
            y: y.into(),
        };
        list.validate()?;
        Ok(list)
    }
    fn validate(&self) -> SourceResult<()> {
        if let (Some(len_x), Some(len_y)) = (self.x.list_len(), self.y.list_len()) {
            if len_x != len_y {
                return Err(SourceError::ShapeMismatch(format!(
                    "x and y coordinate lists have different lengths ({len_x} != {len_y})"
                )));
            }
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SourceError::InvalidParameter(
                "coordinates must be finite".into(),
            ));
        }
        Ok(())
    }
    /// Returns the number of rays generated by this [`CoordinateList`].
    #[must_use]
    pub fn nr_of_rays(&self) -> usize {
        self.x.list_len().or_else(|| self.y.list_len()).unwrap_or(1)
    }
    /// Returns the x coordinates of this [`CoordinateList`].
    #[must_use]
    pub const fn x(&self) -> &Coordinates {
        &self.x
    }
    /// Returns the y coordinates of this [`CoordinateList`].
    #[must_use]
    pub const fn y(&self) -> &Coordinates {
        &self.y
    }
}
impl BeamDistribution for CoordinateList {
    fn generate(&self) -> SourceResult<Vec<RaySeed>> {
        self.validate()?;
        let nr_of_rays = self.nr_of_rays();
        Ok(self
            .x
            .values(nr_of_rays)
            .into_iter()
            .zip_eq(self.y.values(nr_of_rays))
            .map(|(x, y)| RaySeed::collimated(Point3::new(x, y, Length::zero())))
            .collect())
    }
}
impl From<CoordinateList> for super::BeamDistType {
    fn from(dist: CoordinateList) -> Self {
        Self::CoordinateList(dist)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use assert_matches::assert_matches;
    use nalgebra::Vector3;
    #[test]
    fn coordinates_from() {
        assert_eq!(
            Coordinates::from(millimeter!(1.0)),
            Coordinates::Scalar(millimeter!(1.0))
        );
        assert_eq!(Coordinates::from(millimeter!(1.0)).list_len(), None);
        assert_eq!(
            Coordinates::from(millimeter!(1.0, 2.0, 3.0, 4.0)).list_len(),
            Some(4)
        );
    }
    #[test]
    fn both_scalar() {
        let list = CoordinateList::new(millimeter!(1.0), millimeter!(2.0)).unwrap();
        assert_eq!(list.nr_of_rays(), 1);
        let seeds = list.generate().unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].position(), millimeter!(1.0, 2.0, 0.0));
        assert_eq!(seeds[0].direction(), Vector3::z());
    }
    #[test]
    fn scalar_broadcast() {
        let y = vec![millimeter!(1.0), millimeter!(2.0), millimeter!(3.0)];
        let seeds = CoordinateList::new(millimeter!(1.0), y)
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].position(), millimeter!(1.0, 1.0, 0.0));
        assert_eq!(seeds[1].position(), millimeter!(1.0, 2.0, 0.0));
        assert_eq!(seeds[2].position(), millimeter!(1.0, 3.0, 0.0));

        let x = vec![millimeter!(-1.0), millimeter!(1.0)];
        let seeds = CoordinateList::new(x, millimeter!(5.0))
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].position(), millimeter!(-1.0, 5.0, 0.0));
        assert_eq!(seeds[1].position(), millimeter!(1.0, 5.0, 0.0));
    }
    #[test]
    fn both_lists() {
        let x = millimeter!(1.0, 2.0, 3.0, 4.0);
        let y = millimeter!(5.0, 6.0, 7.0, 8.0);
        let seeds = CoordinateList::new(x, y).unwrap().generate().unwrap();
        assert_eq!(seeds.len(), 4);
        assert_eq!(seeds[3].position(), millimeter!(4.0, 8.0, 0.0));
    }
    #[test]
    fn shape_mismatch() {
        let x = vec![millimeter!(1.0), millimeter!(2.0)];
        let y = vec![millimeter!(1.0), millimeter!(2.0), millimeter!(3.0)];
        assert_matches!(
            CoordinateList::new(x, y),
            Err(SourceError::ShapeMismatch(_))
        );
    }
    #[test]
    fn empty_lists() {
        let list = CoordinateList::new(Vec::<Length>::new(), millimeter!(1.0)).unwrap();
        assert!(list.generate().unwrap().is_empty());
    }
    #[test]
    fn not_finite() {
        assert_matches!(
            CoordinateList::new(millimeter!(f64::NAN), millimeter!(1.0)),
            Err(SourceError::InvalidParameter(_))
        );
        let y = vec![millimeter!(1.0), millimeter!(f64::INFINITY)];
        assert!(CoordinateList::new(millimeter!(1.0), y).is_err());
    }
}
