use std::{fmt::Display, str::FromStr};

use crate::{utility::{dms, parse_fields}, utm::Utm, Error, ParseCoord, TransverseMercator};

/// Representation of a Latitude/Longitude point in degrees. Can be converted
/// to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.748333);
    /// assert_eq!(coord.longitude(), -73.985278);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, 180.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if !(-qd..=qd).contains(&lat) {
            log::debug!("Rejecting latitude {lat}");
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-hd..hd).contains(&lon) {
            log::debug!("Rejecting longitude {lon}");
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180).")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use geoutm::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-40.748333, -73.985278).unwrap();
    /// assert!(!coord.is_north());
    ///
    /// // The equator counts as north, whatever the sign of zero
    /// let coord = LatLon::create(-0.0, -73.985278).unwrap();
    /// assert!(coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::{LatLon, Utm};
    ///
    /// let coord_utm = Utm::create(48, false, 801239., 8102939.).unwrap();
    ///
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// assert!((converted.latitude() + 17.138408033).abs() < 1e-6);
    /// assert!((converted.longitude() - 107.831171767).abs() < 1e-6);
    /// ```
    pub fn from_utm(value: &Utm) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Utm`] in the zone containing the point.
    ///
    /// # Errors
    ///
    /// See [`Utm::from_latlon`].
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::LatLon;
    ///
    /// let coord = LatLon::create(-33.298711, 127.000999).unwrap();
    ///
    /// let converted = coord.to_utm().unwrap();
    ///
    /// assert_eq!(converted.zone(), 52);
    /// assert!(!converted.is_north());
    /// assert!((converted.easting() - 313878.33).abs() < 1e-2);
    /// assert!((converted.northing() - 6313814.18).abs() < 1e-2);
    /// ```
    pub fn to_utm(&self) -> Result<Utm, Error> {
        Utm::from_latlon(self)
    }

    /// Converts from [`LatLon`] to [`Utm`] with the given projection and
    /// optional explicit zone.
    ///
    /// # Errors
    ///
    /// See [`Utm::from_latlon_with`].
    pub fn to_utm_with(&self, tm: &TransverseMercator, zone: Option<i32>) -> Result<Utm, Error> {
        Utm::from_latlon_with(tm, self, zone)
    }
}

impl ParseCoord for LatLon {
    /// Parses `"<lat> <lon>"` in degrees, validated as in [`LatLon::create`].
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let [lat, lon] = parse_fields::<2>(value, "Lat/lon").map_err(Error::InvalidCoord)?;

        LatLon::create(lat, lon)
    }
}

impl FromStr for LatLon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LatLon::parse_coord(s)
    }
}

impl From<Utm> for LatLon {
    fn from(value: Utm) -> Self {
        value.to_latlon()
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
