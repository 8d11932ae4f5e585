//! Reference ellipsoid used by the projection series.

use crate::{constants::{WGS84_A, WGS84_B}, Error};

/// An ellipsoid of revolution given by its semi-major axis `a` and
/// semi-minor axis `b`, both in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Ellipsoid {
    /// WGS84, with the semi-minor axis rounded to the millimeter.
    pub const WGS84: Ellipsoid = Ellipsoid { a: WGS84_A, b: WGS84_B };

    /// Tries to create an ellipsoid from its two axes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] unless both axes are finite and
    /// `a >= b > 0`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::Ellipsoid;
    ///
    /// // International 1924
    /// let hayford = Ellipsoid::new(6_378_388.0, 6_356_911.946);
    /// assert!(hayford.is_ok());
    ///
    /// assert!(Ellipsoid::new(6_356_752.0, 6_378_137.0).is_err());
    /// assert!(Ellipsoid::new(6_378_137.0, 0.0).is_err());
    /// ```
    pub fn new(a: f64, b: f64) -> Result<Ellipsoid, Error> {
        if !a.is_finite() || !b.is_finite() {
            Err(Error::InvalidEllipsoid(format!("Axes a={a}, b={b} must be finite.")))
        } else if b <= 0. {
            Err(Error::InvalidEllipsoid(format!("Semi-minor axis {b} must be positive.")))
        } else if a < b {
            Err(Error::InvalidEllipsoid(format!("Semi-major axis {a} is smaller than semi-minor axis {b}.")))
        } else {
            Ok(Ellipsoid { a, b })
        }
    }

    /// A sphere of radius `r`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] if `r` is not finite and positive.
    pub fn sphere(r: f64) -> Result<Ellipsoid, Error> {
        Ellipsoid::new(r, r)
    }

    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.b
    }

    /// `n = (a - b) / (a + b)`
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    /// `ep2 = (a² - b²) / b²`
    pub fn second_eccentricity_sq(&self) -> f64 {
        (self.a.powi(2) - self.b.powi(2)) / self.b.powi(2)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_derived_values() {
        let e = Ellipsoid::WGS84;
        assert!((e.third_flattening() - 1.679_220_405_668_6e-3).abs() < 1e-15);
        assert!((e.second_eccentricity_sq() - 6.739_496_819_936e-3).abs() < 1e-14);
    }

    #[test]
    fn sphere_has_no_flattening() {
        let s = Ellipsoid::sphere(6_371_000.).unwrap();
        assert!(s.third_flattening().abs() < f64::EPSILON);
        assert!(s.second_eccentricity_sq().abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_bad_axes() {
        assert!(matches!(Ellipsoid::new(f64::NAN, 1.), Err(Error::InvalidEllipsoid(_))));
        assert!(matches!(Ellipsoid::sphere(-1.), Err(Error::InvalidEllipsoid(_))));
        assert!(matches!(Ellipsoid::new(1., 2.), Err(Error::InvalidEllipsoid(_))));
    }
}
