#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod ellipsoid;
pub mod latlon;
pub mod utm;
pub mod utility;

pub use ellipsoid::Ellipsoid;
pub use latlon::LatLon;
pub use projections::transverse_mercator::TransverseMercator;
pub use utm::{lat_lon_to_utm, utm_to_lat_lon, Utm};

pub mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("UTM zone {0} is outside of valid range [1, 60]")]
    InvalidZone(i32),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
    #[error("Ellipsoid parameters are not valid: {0}")]
    InvalidEllipsoid(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from the same text form its `Display` impl writes.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing why `value` is not a valid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Propagates the error of the target type's [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use geoutm::{LatLon, Utm};
///
/// let coord: LatLon = geoutm::from_str("40.748333 -73.985278").unwrap();
/// assert_eq!(coord.latitude(), 40.748333);
///
/// let coord: Utm = geoutm::from_str("18n 585664.121 4511315.422").unwrap();
/// assert_eq!(coord.zone(), 18);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
