// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Semi-minor axis b
pub(crate) const WGS84_B: f64 = 6_356_752.314;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

// UTM false origin, in meters
pub(crate) const FALSE_EASTING: f64 = 500_000.;
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;
