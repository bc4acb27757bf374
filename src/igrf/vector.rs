//! Magnetic field vectors, one type per basis so they can't be mixed up.
//!
//! [`SphericalField`] is what the potential evaluator produces. [`LocalField`] is what geodetic
//! callers consume. The only way between the two is through `utils::coords`.

/// Field vector in the geocentric spherical basis, nT
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SphericalField {
    pub radial: f64,        // Br, positive outward
    pub colatitudinal: f64, // Btheta, positive southward
    pub azimuthal: f64,     // Bphi, positive eastward
}

impl SphericalField {
    pub fn new(radial: f64, colatitudinal: f64, azimuthal: f64) -> SphericalField {
        SphericalField {
            radial,
            colatitudinal,
            azimuthal,
        }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.radial, self.colatitudinal, self.azimuthal)
    }

    pub fn is_finite(&self) -> bool {
        self.radial.is_finite() && self.colatitudinal.is_finite() && self.azimuthal.is_finite()
    }

    pub fn magnitude(&self) -> f64 {
        (self.radial * self.radial
            + self.colatitudinal * self.colatitudinal
            + self.azimuthal * self.azimuthal)
            .sqrt()
    }
}

/// Field vector in the local geodetic east/north/up basis, nT
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LocalField {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl LocalField {
    pub fn new(east: f64, north: f64, up: f64) -> LocalField {
        LocalField { east, north, up }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.east, self.north, self.up)
    }

    pub fn is_finite(&self) -> bool {
        self.east.is_finite() && self.north.is_finite() && self.up.is_finite()
    }

    /// Horizontal intensity H, nT
    pub fn horizontal_intensity(&self) -> f64 {
        self.east.hypot(self.north)
    }

    /// Total intensity F, nT
    pub fn total_intensity(&self) -> f64 {
        (self.east * self.east + self.north * self.north + self.up * self.up).sqrt()
    }

    /// Declination D in degrees, positive east of geographic north
    pub fn declination(&self) -> f64 {
        self.east.atan2(self.north).to_degrees()
    }

    /// Inclination I in degrees, positive when the field points down
    pub fn inclination(&self) -> f64 {
        (-self.up).atan2(self.horizontal_intensity()).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn magnetic_elements() {
        let b = LocalField::new(100.0, 100.0, -100.0 * 2.0_f64.sqrt());
        assert_abs_diff_eq!(b.declination(), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.inclination(), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.horizontal_intensity(), 100.0 * 2.0_f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(b.total_intensity(), 200.0, epsilon = 1e-9);
    }

    #[test]
    fn upward_field_has_negative_inclination() {
        let b = LocalField::new(0.0, 20000.0, 40000.0);
        assert!(b.inclination() < 0.0);
        assert_eq!(b.declination(), 0.0);
    }

    #[test]
    fn spherical_magnitude() {
        let b = SphericalField::new(3.0, 4.0, 12.0);
        assert_eq!(b.magnitude(), 13.0);
        assert!(b.is_finite());
        assert!(!SphericalField::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
