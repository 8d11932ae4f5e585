use std::{fmt::Display, str::FromStr};

use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    utility::{dms, parse_fields},
    Error, ParseCoord, ThisOrThat,
};

pub(crate) mod zonespec {
    pub(crate) const MINUTMZONE: i32 = 1;
    pub(crate) const MAXUTMZONE: i32 = 60;
}

const MAX_EASTING: f64 = 2. * FALSE_EASTING;
const MAX_NORTHING: f64 = FALSE_NORTHING;

/// Representation of a
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point: zone, hemisphere, and easting/northing in meters relative to
/// the zone's false origin.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "is_north"))]
    pub(crate) northp: bool,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: i32, northp: bool, easting: f64, northing: f64) -> Utm {
        Self {
            zone,
            northp,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::InvalidUtmCoords`] if easting is outside `[0, 1000km]`
    /// or northing is outside `[0, 10000km]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::Utm;
    ///
    /// let coord = Utm::create(18, true, 585664.121, 4511315.422);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), 18);
    /// assert_eq!(coord.is_north(), true);
    /// assert!((coord.easting() - 585664.121).abs() < 1e-3);
    /// assert!((coord.northing() - 4511315.422).abs() < 1e-3);
    ///
    /// let invalid_coord_zone = Utm::create(0, true, 585664.121, 4511315.422);
    /// assert!(invalid_coord_zone.is_err());
    ///
    /// let invalid_coord_zone_too_big = Utm::create(61, true, 585664.121, 4511315.422);
    /// assert!(invalid_coord_zone_too_big.is_err());
    ///
    /// let invalid_coord_northing = Utm::create(18, true, 585664.121, -1.0);
    /// assert!(invalid_coord_northing.is_err());
    /// ```
    pub fn create(zone: i32, northp: bool, easting: f64, northing: f64) -> Result<Utm, Error> {
        check_zone(zone)?;
        check_coords(northp, easting, northing)?;

        Ok(Utm::new(zone, northp, easting, northing))
    }

    /// Returns the UTM zone.
    ///
    /// # Example
    /// ```
    /// use geoutm::Utm;
    ///
    /// let coord = Utm::create(18, true, 585664.121, 4511315.422).unwrap();
    /// assert_eq!(coord.zone(), 18);
    /// ```
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns whether the coordinate is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.northp
    }

    /// Returns the UTM easting.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Utm`], picking the zone from the
    /// longitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the derived zone is outside `[1, 60]`,
    /// which only happens for longitudes outside `[-180, 180)`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::{LatLon, Utm};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    ///
    /// let converted = Utm::from_latlon(&coord).unwrap();
    ///
    /// assert_eq!(converted.zone(), 18);
    /// assert!(converted.is_north());
    /// // Same as GeographicLib to the millimeter
    /// assert!((converted.easting() - 585664.121).abs() < 1e-3);
    /// assert!((converted.northing() - 4511315.422).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Result<Utm, Error> {
        Utm::from_latlon_with(&TransverseMercator::utm(), value, None)
    }

    /// Converts from [`LatLon`] to [`Utm`] in an explicit zone, which may be
    /// a neighbour of the zone the point actually lies in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if `zone` is outside `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::{LatLon, Utm};
    ///
    /// let coord = LatLon::create(45.333988, -134.982133).unwrap();
    /// let converted = Utm::from_latlon_in_zone(&coord, 8).unwrap();
    ///
    /// assert_eq!(converted.zone(), 8);
    /// assert!((converted.easting() - 501399.99).abs() < 1e-2);
    ///
    /// assert!(Utm::from_latlon_in_zone(&coord, 61).is_err());
    /// ```
    pub fn from_latlon_in_zone(value: &LatLon, zone: i32) -> Result<Utm, Error> {
        Utm::from_latlon_with(&TransverseMercator::utm(), value, Some(zone))
    }

    /// Converts from [`LatLon`] to [`Utm`] using the given projection. When
    /// `zone` is `None` it is derived from the longitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the resolved zone is outside `[1, 60]`.
    pub fn from_latlon_with(tm: &TransverseMercator, value: &LatLon, zone: Option<i32>) -> Result<Utm, Error> {
        let zone = match zone {
            Some(zone) => zone,
            None => standard_zone(value.longitude)?,
        };
        check_zone(zone)?;

        let (x, y) = tm.map_latlon_to_xy(
            value.latitude.to_radians(),
            value.longitude.to_radians(),
            central_meridian(zone).to_radians(),
        );

        let x = x * tm.k0() + FALSE_EASTING;
        let y = y * tm.k0();

        // South of the equator the northing wraps through the false northing
        let northp = y >= 0.;
        let y = northp.ternary(y, y + FALSE_NORTHING);

        Ok(Utm::new(zone, northp, x, y))
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use geoutm::{LatLon, Utm};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let coord_utm = Utm::create(18, true, 585664.121, 4511315.422).unwrap();
    ///
    /// let converted = coord_utm.to_latlon();
    ///
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-6);
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        self.to_latlon_with(&TransverseMercator::utm())
    }

    /// Converts from [`Utm`] to [`LatLon`] using the given projection.
    pub fn to_latlon_with(&self, tm: &TransverseMercator) -> LatLon {
        let x = (self.easting - FALSE_EASTING) / tm.k0();
        let y = self.northp.ternary(self.northing, self.northing - FALSE_NORTHING) / tm.k0();

        let (phi, lambda) = tm.map_xy_to_latlon(x, y, central_meridian(self.zone).to_radians());

        LatLon::new(phi.to_degrees(), lambda.to_degrees())
    }
}

/// Converts a latitude/longitude pair in degrees to UTM on WGS84. If
/// `zone` is `None` it is picked from the longitude as
/// `floor((lon + 180) / 6) + 1`. Latitude and longitude are not range
/// checked.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] if the explicit or derived zone is outside
/// `[1, 60]`.
///
/// # Usage
///
/// ```
/// use geoutm::lat_lon_to_utm;
///
/// let utm = lat_lon_to_utm(-28.234982, 79.293801, None).unwrap();
///
/// assert_eq!(utm.zone(), 44);
/// assert!(!utm.is_north());
/// assert!((utm.easting() - 332593.76).abs() < 1e-2);
/// assert!((utm.northing() - 6875587.59).abs() < 1e-2);
///
/// assert!(lat_lon_to_utm(0.129899, -178.129381, Some(0)).is_err());
/// ```
pub fn lat_lon_to_utm(latitude: f64, longitude: f64, zone: Option<i32>) -> Result<Utm, Error> {
    Utm::from_latlon_with(&TransverseMercator::utm(), &LatLon::new(latitude, longitude), zone)
}

/// Converts UTM easting/northing on WGS84 back to latitude/longitude in
/// degrees. The hemisphere cannot be recovered from the northing alone, so
/// the caller supplies it.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] if `zone` is outside `[1, 60]`. Easting and
/// northing are not range checked.
///
/// # Usage
///
/// ```
/// use geoutm::utm_to_lat_lon;
///
/// let coord = utm_to_lat_lon(234000., 712398., 24, false).unwrap();
///
/// assert!((coord.latitude() - 6.439349839).abs() < 1e-6);
/// assert!((coord.longitude() + 41.404857229).abs() < 1e-6);
/// ```
pub fn utm_to_lat_lon(easting: f64, northing: f64, zone: i32, south_hemisphere: bool) -> Result<LatLon, Error> {
    check_zone(zone)?;

    Ok(Utm::new(zone, !south_hemisphere, easting, northing).to_latlon())
}

/// Longitude in degrees of the central meridian of `zone`.
pub(crate) fn central_meridian(zone: i32) -> f64 {
    f64::from(dms::ZD * zone) - 183.
}

// Zone containing `lon`, without wrapping. Resolved in f64 so that huge
// and non-finite longitudes are rejected before the cast.
#[allow(clippy::cast_possible_truncation)]
fn standard_zone(lon: f64) -> Result<i32, Error> {
    let zone = ((lon + f64::from(dms::HD)) / f64::from(dms::ZD)).floor() + 1.;
    let min = f64::from(zonespec::MINUTMZONE);
    let max = f64::from(zonespec::MAXUTMZONE);

    if !(min..=max).contains(&zone) {
        log::debug!("Longitude {lon} does not resolve to a UTM zone");
        // Saturating cast, NaN becomes 0
        return Err(Error::InvalidZone(zone as i32));
    }

    let zone = zone as i32;
    log::trace!("Longitude {lon} resolved to UTM zone {zone}");
    Ok(zone)
}

pub(crate) fn check_zone(zone: i32) -> Result<(), Error> {
    if (zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
        Ok(())
    } else {
        log::debug!("Rejecting UTM zone {zone}");
        Err(Error::InvalidZone(zone))
    }
}

fn check_coords(northp: bool, x: f64, y: f64) -> Result<(), Error> {
    if !(0_f64..=MAX_EASTING).contains(&x) {
        log::debug!("Rejecting UTM easting {x}");
        return Err(Error::InvalidUtmCoords(
            format!(
                "Easting {:.2}km not in UTM range [0.00km, {:.2}km]",
                x / 1000.0,
                MAX_EASTING / 1000.0,
            )
        ));
    }

    if !(0_f64..=MAX_NORTHING).contains(&y) {
        log::debug!("Rejecting UTM northing {y}");
        return Err(Error::InvalidUtmCoords(
            format!(
                "Northing {:.2}km not in UTM range for {} hemisphere [0.00km, {:.2}km]",
                y / 1000.0,
                northp.ternary("N", "S"),
                MAX_NORTHING / 1000.0,
            )
        ));
    }

    Ok(())
}

impl ParseCoord for Utm {
    /// Parses the form written by `Display`, e.g. `"18n 585664.121 4511315.422"`.
    /// The hemisphere letter is case-insensitive.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let value = value.trim();
        let (zone_str, rest) = value
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::InvalidUtmCoords(format!("\"{value}\" is missing easting and northing")))?;

        let northp = match zone_str.chars().last().map(|c| c.to_ascii_lowercase()) {
            Some('n') => true,
            Some('s') => false,
            _ => return Err(Error::InvalidUtmCoords(format!("Zone \"{zone_str}\" must end in a hemisphere letter n or s"))),
        };

        let zone = zone_str[..zone_str.len() - 1]
            .parse::<i32>()
            .map_err(|_| Error::InvalidUtmCoords(format!("Zone \"{zone_str}\" is not a number")))?;

        let [easting, northing] = parse_fields::<2>(rest, "UTM").map_err(Error::InvalidUtmCoords)?;

        Utm::create(zone, northp, easting, northing)
    }
}

impl FromStr for Utm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Utm::parse_coord(s)
    }
}

impl TryFrom<LatLon> for Utm {
    type Error = Error;

    fn try_from(value: LatLon) -> Result<Self, Self::Error> {
        Utm::from_latlon(&value)
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{}{} {easting} {northing}",
            self.zone,
            self.northp.ternary("n", "s"),
        )
    }
}
