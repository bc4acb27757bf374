/// Reference radius of the geomagnetic potential expansion, km
pub const REFERENCE_RADIUS_KM: f64 = 6371.2;

/// WGS84 equatorial radius, km
pub const WGS84_SEMI_MAJOR_AXIS_KM: f64 = 6378.137;
/// WGS84 flattening
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// Highest degree of the IGRF-13 main field expansion
pub const IGRF_MAX_DEGREE: usize = 13;
/// Years past the last epoch for which the predictive secular variation is defined
pub const SECULAR_VARIATION_SPAN_YEARS: f64 = 5.0;

/// Highest degree the Legendre recurrence is allowed to build
pub(crate) const LEGENDRE_DEGREE_LIMIT: usize = 180;
