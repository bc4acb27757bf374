use crate::igrf::coefficients::GaussCoefficients;
use crate::igrf::legendre::LegendreBasis;
use crate::igrf::vector::SphericalField;
use crate::utils::constants::REFERENCE_RADIUS_KM;

/// Evaluates the field of the truncated spherical harmonic potential
///
/// ```text
/// V = a sum_n (a/r)^(n+1) sum_m [g cos(m phi) + h sin(m phi)] P(n,m)(cos theta)
/// ```
///
/// at `radius` km, the colatitude `basis` was built for and `longitude` degrees, as
/// B = -grad V in the geocentric spherical basis. Degrees above the basis or the coefficient set
/// are skipped.
///
/// The radius is not validated. The result is finite for any positive radius, but the series
/// only describes the field of internal sources, so points inside the Earth (let alone near
/// the core) are the caller's responsibility.
pub fn field_at(
    radius: f64,
    longitude: f64,
    coefficients: &GaussCoefficients,
    basis: &LegendreBasis,
) -> SphericalField {
    let max_degree = coefficients.max_degree().min(basis.max_degree());
    let phi = longitude.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let ratio = REFERENCE_RADIUS_KM / radius;

    let mut b_r = 0.0;
    let mut b_theta = 0.0;
    let mut b_phi = 0.0;

    // (a/r)^(n+2), starting at n = 1
    let mut radial_power = ratio * ratio * ratio;
    for n in 1..=max_degree {
        let mut r_sum = 0.0;
        let mut theta_sum = 0.0;
        let mut phi_sum = 0.0;

        // cos(m phi), sin(m phi) by the angle addition recurrence
        let (mut cos_m, mut sin_m) = (1.0, 0.0);
        for m in 0..=n {
            let g = coefficients.g(n, m);
            let h = coefficients.h(n, m);
            let in_phase = g * cos_m + h * sin_m;

            r_sum += in_phase * basis.value(n, m);
            theta_sum += in_phase * basis.derivative(n, m);
            if m > 0 {
                phi_sum += m as f64 * (g * sin_m - h * cos_m) * basis.value_over_sin(n, m);
            }

            let next_cos = cos_m * cos_phi - sin_m * sin_phi;
            sin_m = sin_m * cos_phi + cos_m * sin_phi;
            cos_m = next_cos;
        }

        b_r += (n + 1) as f64 * radial_power * r_sum;
        b_theta -= radial_power * theta_sum;
        b_phi += radial_power * phi_sum;
        radial_power *= ratio;
    }

    SphericalField {
        radial: b_r,
        colatitudinal: b_theta,
        azimuthal: b_phi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axial_dipole(g10: f64) -> GaussCoefficients {
        let mut c = GaussCoefficients::zeros(1);
        c.set(1, 0, g10, 0.0).unwrap();
        c
    }

    #[test]
    fn axial_dipole_closed_form() {
        let g10 = -30000.0;
        let coeffs = axial_dipole(g10);
        for &(radius, theta) in &[(6371.2, 30.0), (7000.0, 90.0), (12000.0, 150.0)] {
            let basis = LegendreBasis::new(theta, 1).unwrap();
            let b = field_at(radius, 77.0, &coeffs, &basis);
            let q = (REFERENCE_RADIUS_KM / radius).powi(3);
            let (s, c) = f64::to_radians(theta).sin_cos();
            assert_relative_eq!(b.radial, 2.0 * q * g10 * c, epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(b.colatitudinal, q * g10 * s, epsilon = 1e-9, max_relative = 1e-12);
            assert_eq!(b.azimuthal, 0.0);
        }
    }

    #[test]
    fn equatorial_dipole_azimuthal_component() {
        // Dipole along the x axis: V = a^3 g11 sin(t) cos(p) / r^2, so B_phi = q g11 sin(p)
        let mut coeffs = GaussCoefficients::zeros(1);
        coeffs.set(1, 1, 1000.0, 0.0).unwrap();
        for theta in [0.0, 1e-4, 45.0, 90.0, 180.0] {
            let basis = LegendreBasis::new(theta, 1).unwrap();
            let b = field_at(REFERENCE_RADIUS_KM, 30.0, &coeffs, &basis);
            assert_relative_eq!(b.azimuthal, 1000.0 * 0.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn falls_off_with_radius() {
        let mut coeffs = GaussCoefficients::zeros(2);
        coeffs.set(2, 1, 500.0, -250.0).unwrap();
        let basis = LegendreBasis::new(60.0, 2).unwrap();
        let near = field_at(REFERENCE_RADIUS_KM, 10.0, &coeffs, &basis);
        let far = field_at(2.0 * REFERENCE_RADIUS_KM, 10.0, &coeffs, &basis);
        // Quadrupole terms scale as (a/r)^4
        assert_relative_eq!(far.radial * 16.0, near.radial, max_relative = 1e-12);
        assert_relative_eq!(far.colatitudinal * 16.0, near.colatitudinal, max_relative = 1e-12);
        assert_relative_eq!(far.azimuthal * 16.0, near.azimuthal, max_relative = 1e-12);
    }

    #[test]
    fn truncates_to_basis_degree() {
        let mut coeffs = GaussCoefficients::zeros(2);
        coeffs.set(1, 0, -100.0, 0.0).unwrap();
        coeffs.set(2, 0, 1e6, 0.0).unwrap();
        let basis = LegendreBasis::new(40.0, 1).unwrap();
        let b = field_at(REFERENCE_RADIUS_KM, 0.0, &coeffs, &basis);
        let dipole_only = field_at(REFERENCE_RADIUS_KM, 0.0, &axial_dipole(-100.0), &basis);
        assert_eq!(b, dipole_only);
    }
}
