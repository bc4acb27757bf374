use crate::igrf::vector::{LocalField, SphericalField};
use crate::utils::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_KM};

const MAX_GEODETIC_ITERATIONS: usize = 20;
const GEODETIC_LATITUDE_TOLERANCE: f64 = 1e-14; // radians

/// A location relative to the reference ellipsoid
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GeodeticPoint {
    pub longitude: f64, // degrees east
    pub latitude: f64,  // degrees north
    pub height: f64,    // km above the ellipsoid
}

impl GeodeticPoint {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> GeodeticPoint {
        GeodeticPoint {
            longitude,
            latitude,
            height,
        }
    }
}

/// A location in geocentric spherical coordinates
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GeocentricPoint {
    pub radius: f64,     // km from the centre of the Earth
    pub colatitude: f64, // degrees from the north pole
    pub longitude: f64,  // degrees east
}

impl GeocentricPoint {
    pub fn new(radius: f64, colatitude: f64, longitude: f64) -> GeocentricPoint {
        GeocentricPoint {
            radius,
            colatitude,
            longitude,
        }
    }

    /// Geocentric latitude in degrees
    pub fn latitude(&self) -> f64 {
        90.0 - self.colatitude
    }
}

/// Reference ellipsoid of revolution
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipsoid {
    pub semi_major_axis: f64, // km
    pub flattening: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis: WGS84_SEMI_MAJOR_AXIS_KM,
        flattening: WGS84_FLATTENING,
    };

    pub fn new(semi_major_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            semi_major_axis,
            flattening,
        }
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// First eccentricity squared
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Radius of curvature in the prime vertical at geodetic latitude `latitude` (radians)
    fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let sin_lat = latitude.sin();
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Converts a geodetic longitude, latitude and height to geocentric spherical coordinates.
    /// The point is placed in the meridian plane along the ellipsoid normal, so this is exact at
    /// any height and at the poles. Longitude passes through unchanged.
    pub fn geodetic_to_geocentric(&self, point: &GeodeticPoint) -> GeocentricPoint {
        let latitude = point.latitude.to_radians();
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let n = self.prime_vertical_radius(latitude);

        // Distance from the rotation axis and height above the equatorial plane
        let p = (n + point.height) * cos_lat;
        let z = (n * (1.0 - self.eccentricity_squared()) + point.height) * sin_lat;

        let geocentric_latitude = z.atan2(p).to_degrees();
        GeocentricPoint {
            radius: p.hypot(z),
            colatitude: 90.0 - geocentric_latitude,
            longitude: point.longitude,
        }
    }

    /// Converts geocentric spherical coordinates back to geodetic longitude, latitude and height.
    /// Fixed-point iteration on the geodetic latitude; the height uses the form that stays
    /// well-conditioned at the poles.
    pub fn geocentric_to_geodetic(&self, point: &GeocentricPoint) -> GeodeticPoint {
        let e2 = self.eccentricity_squared();
        let (sin_theta, cos_theta) = point.colatitude.to_radians().sin_cos();
        let p = point.radius * sin_theta.abs();
        let z = point.radius * cos_theta;

        let mut latitude = z.atan2(p * (1.0 - e2));
        for _ in 0..MAX_GEODETIC_ITERATIONS {
            let n = self.prime_vertical_radius(latitude);
            let height = self.height_above(p, z, latitude);
            let next = z.atan2(p * (1.0 - e2 * n / (n + height)));
            let converged = (next - latitude).abs() < GEODETIC_LATITUDE_TOLERANCE;
            latitude = next;
            if converged {
                break;
            }
        }

        GeodeticPoint {
            longitude: point.longitude,
            latitude: latitude.to_degrees(),
            height: self.height_above(p, z, latitude),
        }
    }

    /// Height above the ellipsoid of the meridian-plane point (p, z) whose geodetic latitude
    /// is `latitude` (radians)
    fn height_above(&self, p: f64, z: f64, latitude: f64) -> f64 {
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let n = self.prime_vertical_radius(latitude);
        p * cos_lat + z * sin_lat - self.semi_major_axis * self.semi_major_axis / n
    }
}

/// Converts a geodetic point to geocentric coordinates on the WGS84 ellipsoid
pub fn geodetic_to_geocentric(point: &GeodeticPoint) -> GeocentricPoint {
    Ellipsoid::WGS84.geodetic_to_geocentric(point)
}

/// Converts a geocentric point to geodetic coordinates on the WGS84 ellipsoid
pub fn geocentric_to_geodetic(point: &GeocentricPoint) -> GeodeticPoint {
    Ellipsoid::WGS84.geocentric_to_geodetic(point)
}

/// Rotate a field vector from the geocentric spherical basis into local east/north/up.
/// The north and up axes are tilted from their geocentric counterparts by the deviation of the
/// vertical, `latitude - geocentric_latitude` (both in degrees).
pub fn rotate_to_local_frame(
    field: &SphericalField,
    latitude: f64,
    geocentric_latitude: f64,
) -> LocalField {
    let (sin_d, cos_d) = (latitude - geocentric_latitude).to_radians().sin_cos();

    // Geocentric north is -Btheta, geocentric up is Br
    let north = -field.colatitudinal;
    let up = field.radial;

    LocalField {
        east: field.azimuthal,
        north: north * cos_d - up * sin_d,
        up: north * sin_d + up * cos_d,
    }
}

/// Inverse of [`rotate_to_local_frame`]
pub fn rotate_to_spherical_frame(
    field: &LocalField,
    latitude: f64,
    geocentric_latitude: f64,
) -> SphericalField {
    let (sin_d, cos_d) = (latitude - geocentric_latitude).to_radians().sin_cos();

    let north = field.north * cos_d + field.up * sin_d;
    let up = -field.north * sin_d + field.up * cos_d;

    SphericalField {
        radial: up,
        colatitudinal: -north,
        azimuthal: field.east,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equator_and_poles() {
        let equator = geodetic_to_geocentric(&GeodeticPoint::new(10.0, 0.0, 0.0));
        assert_abs_diff_eq!(equator.radius, WGS84_SEMI_MAJOR_AXIS_KM, epsilon = 1e-9);
        assert_abs_diff_eq!(equator.colatitude, 90.0, epsilon = 1e-12);
        assert_eq!(equator.longitude, 10.0);

        let north = geodetic_to_geocentric(&GeodeticPoint::new(0.0, 90.0, 0.0));
        assert_abs_diff_eq!(north.radius, Ellipsoid::WGS84.semi_minor_axis(), epsilon = 1e-9);
        assert_abs_diff_eq!(north.colatitude, 0.0, epsilon = 1e-9);

        let south = geodetic_to_geocentric(&GeodeticPoint::new(0.0, -90.0, 100.0));
        assert_abs_diff_eq!(
            south.radius,
            Ellipsoid::WGS84.semi_minor_axis() + 100.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(south.colatitude, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn geocentric_latitude_is_smaller() {
        let point = geodetic_to_geocentric(&GeodeticPoint::new(5.32415, 60.39299, 0.0));
        let deviation = 60.39299 - point.latitude();
        // The deviation of the vertical peaks near 0.19 degrees at mid latitudes
        assert!(deviation > 0.15 && deviation < 0.2, "deviation {deviation}");
        assert!(point.radius > 6356.0 && point.radius < 6378.2);
    }

    #[test]
    fn round_trip() {
        for &latitude in &[-90.0, -89.9999, -60.0, -12.5, 0.0, 0.001, 45.0, 60.39299, 89.9999, 90.0]
        {
            for &height in &[-5.0, 0.0, 0.25, 35.0, 400.0, 20000.0] {
                let point = GeodeticPoint::new(-123.4, latitude, height);
                let back = geocentric_to_geodetic(&geodetic_to_geocentric(&point));
                assert_abs_diff_eq!(back.latitude, latitude, epsilon = 1e-9);
                assert_abs_diff_eq!(back.height, height, epsilon = 1e-6);
                assert_eq!(back.longitude, -123.4);
            }
        }
    }

    #[test]
    fn sphere_has_no_deviation() {
        let sphere = Ellipsoid::new(6371.2, 0.0);
        let point = sphere.geodetic_to_geocentric(&GeodeticPoint::new(0.0, 33.0, 10.0));
        assert_abs_diff_eq!(point.latitude(), 33.0, epsilon = 1e-12);
        assert_abs_diff_eq!(point.radius, 6381.2, epsilon = 1e-9);
    }

    #[test]
    fn rotation_is_identity_without_deviation() {
        let field = SphericalField::new(-40000.0, -15000.0, 500.0);
        let local = rotate_to_local_frame(&field, 30.0, 30.0);
        assert_eq!(local.east, 500.0);
        assert_eq!(local.north, 15000.0);
        assert_eq!(local.up, -40000.0);
    }

    #[test]
    fn rotation_round_trip_preserves_magnitude() {
        let field = SphericalField::new(-49079.26, -14855.75, 468.43);
        let local = rotate_to_local_frame(&field, 60.39299, 60.2);
        assert_abs_diff_eq!(local.total_intensity(), field.magnitude(), epsilon = 1e-8);

        let back = rotate_to_spherical_frame(&local, 60.39299, 60.2);
        assert_abs_diff_eq!(back.radial, field.radial, epsilon = 1e-9);
        assert_abs_diff_eq!(back.colatitudinal, field.colatitudinal, epsilon = 1e-9);
        assert_abs_diff_eq!(back.azimuthal, field.azimuthal, epsilon = 1e-12);
    }
}
