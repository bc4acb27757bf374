use crate::error::IgrfError;

/// Number of values in the conventional packed ordering
/// g(1,0), g(1,1), h(1,1), g(2,0), g(2,1), h(2,1), ... up to `max_degree`
pub const fn packed_len(max_degree: usize) -> usize {
    max_degree * (max_degree + 2)
}

/// Position of (n, m) in the dense lower-triangular layout
#[inline]
pub(crate) const fn triangular_index(n: usize, m: usize) -> usize {
    n * (n + 1) / 2 + m
}

/// Gauss coefficients (or their secular variation rates) for 1 <= n <= max_degree, 0 <= m <= n.
///
/// Stored densely, row by degree. h(n, 0) is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussCoefficients {
    max_degree: usize,
    g: Vec<f64>,
    h: Vec<f64>,
}

impl GaussCoefficients {
    pub fn zeros(max_degree: usize) -> GaussCoefficients {
        let size = triangular_index(max_degree, max_degree) + 1;
        GaussCoefficients {
            max_degree,
            g: vec![0.0; size],
            h: vec![0.0; size],
        }
    }

    /// Builds the coefficient set from values in the packed IGRF ordering.
    ///
    /// # Errors
    /// Will return `Err` if `packed` does not hold exactly `packed_len(max_degree)` values.
    pub fn from_packed(max_degree: usize, packed: &[f64]) -> Result<GaussCoefficients, IgrfError> {
        if packed.len() != packed_len(max_degree) {
            return Err(IgrfError::InvalidTable(format!(
                "Expected {} packed coefficients for degree {}, found {}",
                packed_len(max_degree),
                max_degree,
                packed.len()
            )));
        }
        Ok(GaussCoefficients::unpack(max_degree, packed))
    }

    /// Unpacks without a length check, missing trailing values read as zero
    pub(crate) fn unpack(max_degree: usize, packed: &[f64]) -> GaussCoefficients {
        let mut coeffs = GaussCoefficients::zeros(max_degree);
        let mut values = packed.iter().copied();
        for n in 1..=max_degree {
            for m in 0..=n {
                let idx = triangular_index(n, m);
                coeffs.g[idx] = values.next().unwrap_or_default();
                if m > 0 {
                    coeffs.h[idx] = values.next().unwrap_or_default();
                }
            }
        }
        coeffs
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// g(n, m), zero outside the stored degree range
    #[inline]
    pub fn g(&self, n: usize, m: usize) -> f64 {
        if m > n || n > self.max_degree {
            return 0.0;
        }
        self.g[triangular_index(n, m)]
    }

    /// h(n, m), zero outside the stored degree range and for m = 0
    #[inline]
    pub fn h(&self, n: usize, m: usize) -> f64 {
        if m > n || n > self.max_degree {
            return 0.0;
        }
        self.h[triangular_index(n, m)]
    }

    /// Sets g(n, m) and h(n, m). The h value is dropped for m = 0.
    ///
    /// # Errors
    /// Will return `Err` if (n, m) is not a valid index for this set.
    pub fn set(&mut self, n: usize, m: usize, g: f64, h: f64) -> Result<(), IgrfError> {
        if n == 0 || n > self.max_degree || m > n {
            return Err(IgrfError::InvalidDegree {
                degree: n,
                max: self.max_degree,
            });
        }
        let idx = triangular_index(n, m);
        self.g[idx] = g;
        self.h[idx] = if m == 0 { 0.0 } else { h };
        Ok(())
    }

    /// Iterates over (n, m, g, h) in degree-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64, f64)> + '_ {
        (1..=self.max_degree)
            .flat_map(|n| (0..=n).map(move |m| (n, m)))
            .map(|(n, m)| {
                let idx = triangular_index(n, m);
                (n, m, self.g[idx], self.h[idx])
            })
    }

    /// Copy keeping only degrees up to `max_degree`
    pub fn truncated(&self, max_degree: usize) -> GaussCoefficients {
        let max_degree = max_degree.min(self.max_degree);
        let size = triangular_index(max_degree, max_degree) + 1;
        GaussCoefficients {
            max_degree,
            g: self.g[..size].to_vec(),
            h: self.h[..size].to_vec(),
        }
    }

    /// `self + weight * (other - self)`, element-wise over the larger of the two degrees
    pub(crate) fn lerp(&self, other: &GaussCoefficients, weight: f64) -> GaussCoefficients {
        self.combine(other, |a, b| a + weight * (b - a))
    }

    /// `self + years * rates`, element-wise over the larger of the two degrees
    pub(crate) fn advance(&self, rates: &GaussCoefficients, years: f64) -> GaussCoefficients {
        self.combine(rates, |a, rate| a + rate * years)
    }

    fn combine<F>(&self, other: &GaussCoefficients, op: F) -> GaussCoefficients
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut out = GaussCoefficients::zeros(self.max_degree.max(other.max_degree));
        for n in 1..=out.max_degree {
            for m in 0..=n {
                let idx = triangular_index(n, m);
                out.g[idx] = op(self.g(n, m), other.g(n, m));
                out.h[idx] = op(self.h(n, m), other.h(n, m));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_ordering() {
        // n = 1: g10 g11 h11, n = 2: g20 g21 h21 g22 h22
        let packed = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let coeffs = GaussCoefficients::from_packed(2, &packed).unwrap();
        assert_eq!(coeffs.g(1, 0), 1.0);
        assert_eq!(coeffs.h(1, 0), 0.0);
        assert_eq!((coeffs.g(1, 1), coeffs.h(1, 1)), (2.0, 3.0));
        assert_eq!(coeffs.g(2, 0), 4.0);
        assert_eq!((coeffs.g(2, 1), coeffs.h(2, 1)), (5.0, 6.0));
        assert_eq!((coeffs.g(2, 2), coeffs.h(2, 2)), (7.0, 8.0));
        assert_eq!(coeffs.g(3, 0), 0.0);
        assert_eq!(coeffs.iter().count(), 5);
    }

    #[test]
    fn packed_length_is_checked() {
        assert_eq!(packed_len(13), 195);
        assert!(matches!(
            GaussCoefficients::from_packed(2, &[0.0; 7]),
            Err(IgrfError::InvalidTable(_))
        ));
    }

    #[test]
    fn set_drops_zonal_h() {
        let mut coeffs = GaussCoefficients::zeros(3);
        coeffs.set(3, 0, 10.0, 99.0).unwrap();
        assert_eq!((coeffs.g(3, 0), coeffs.h(3, 0)), (10.0, 0.0));
        assert!(coeffs.set(4, 0, 1.0, 0.0).is_err());
        assert!(coeffs.set(0, 0, 1.0, 0.0).is_err());
        assert!(coeffs.set(2, 3, 1.0, 0.0).is_err());
    }

    #[test]
    fn lerp_across_degrees() {
        let mut low = GaussCoefficients::zeros(1);
        low.set(1, 1, 10.0, -10.0).unwrap();
        let mut high = GaussCoefficients::zeros(2);
        high.set(1, 1, 20.0, -20.0).unwrap();
        high.set(2, 2, 4.0, 8.0).unwrap();

        let mid = low.lerp(&high, 0.25);
        assert_eq!(mid.max_degree(), 2);
        assert_eq!((mid.g(1, 1), mid.h(1, 1)), (12.5, -12.5));
        assert_eq!((mid.g(2, 2), mid.h(2, 2)), (1.0, 2.0));

        // Zero weight reproduces the start exactly
        assert_eq!(high.lerp(&low, 0.0), high);
    }

    #[test]
    fn advance_and_truncate() {
        let mut base = GaussCoefficients::zeros(2);
        base.set(2, 1, 100.0, 50.0).unwrap();
        let mut rates = GaussCoefficients::zeros(2);
        rates.set(2, 1, -2.0, 1.0).unwrap();

        let later = base.advance(&rates, 1.5);
        assert_eq!((later.g(2, 1), later.h(2, 1)), (97.0, 51.5));

        let truncated = later.truncated(1);
        assert_eq!(truncated.max_degree(), 1);
        assert_eq!(truncated.g(2, 1), 0.0);
    }
}
