//! Schmidt quasi-normalized associated Legendre functions.
//!
//! Built by the standard degree/order recurrences starting from P(0,0) = 1:
//!
//! ```text
//! P(n,n) = sqrt((2n-1)/2n) sin(t) P(n-1,n-1)                     (n >= 2, P(1,1) = sin(t))
//! P(n,m) = [(2n-1) cos(t) P(n-1,m) - sqrt((n-1)^2 - m^2) P(n-2,m)] / sqrt(n^2 - m^2)
//! ```
//!
//! with the colatitude derivatives following from differentiating each line. Alongside P the
//! table holds P(n,m) / sin(t) for m >= 1. Every sectoral term carries a factor sin^m(t), so
//! the quotient is seeded as sin^(m-1)(t) and then run through the same order recurrence,
//! which only involves cos(t). Nothing divides by sin(t), and the poles need no special branch.

use crate::error::IgrfError;
use crate::igrf::coefficients::triangular_index;
use crate::utils::constants::LEGENDRE_DEGREE_LIMIT;

/// Legendre values, colatitude derivatives and P / sin(colatitude) for 0 <= m <= n <= max_degree
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreBasis {
    colatitude: f64,
    max_degree: usize,
    p: Vec<f64>,
    dp: Vec<f64>,
    p_over_sin: Vec<f64>,
}

impl LegendreBasis {
    /// Builds the table at `colatitude` degrees.
    ///
    /// # Errors
    /// Will return `Err` if `max_degree` exceeds the supported recurrence depth.
    pub fn new(colatitude: f64, max_degree: usize) -> Result<LegendreBasis, IgrfError> {
        if max_degree > LEGENDRE_DEGREE_LIMIT {
            return Err(IgrfError::InvalidDegree {
                degree: max_degree,
                max: LEGENDRE_DEGREE_LIMIT,
            });
        }
        let (sin_t, cos_t) = colatitude.to_radians().sin_cos();
        let size = triangular_index(max_degree, max_degree) + 1;
        let mut p = vec![0.0; size];
        let mut dp = vec![0.0; size];
        let mut p_over_sin = vec![0.0; size];

        p[0] = 1.0;
        for n in 1..=max_degree {
            // Sectoral term
            let nn = triangular_index(n, n);
            if n == 1 {
                p[nn] = sin_t;
                dp[nn] = cos_t;
                p_over_sin[nn] = 1.0;
            } else {
                let prev = triangular_index(n - 1, n - 1);
                let k = ((2 * n - 1) as f64 / (2 * n) as f64).sqrt();
                p[nn] = k * sin_t * p[prev];
                dp[nn] = k * (cos_t * p[prev] + sin_t * dp[prev]);
                p_over_sin[nn] = k * sin_t * p_over_sin[prev];
            }

            // Remaining orders from the two previous degrees
            for m in 0..n {
                let nf = n as f64;
                let mf = m as f64;
                let denom = (nf * nf - mf * mf).sqrt();
                let a = (2.0 * nf - 1.0) / denom;
                let idx = triangular_index(n, m);
                let i1 = triangular_index(n - 1, m);

                let (p2, dp2, s2, b) = if n >= m + 2 {
                    let i2 = triangular_index(n - 2, m);
                    let b = ((nf - 1.0) * (nf - 1.0) - mf * mf).sqrt() / denom;
                    (p[i2], dp[i2], p_over_sin[i2], b)
                } else {
                    (0.0, 0.0, 0.0, 0.0)
                };

                p[idx] = a * cos_t * p[i1] - b * p2;
                dp[idx] = a * (cos_t * dp[i1] - sin_t * p[i1]) - b * dp2;
                if m > 0 {
                    p_over_sin[idx] = a * cos_t * p_over_sin[i1] - b * s2;
                }
            }
        }

        Ok(LegendreBasis {
            colatitude,
            max_degree,
            p,
            dp,
            p_over_sin,
        })
    }

    /// Colatitude the table was built at, degrees
    pub fn colatitude(&self) -> f64 {
        self.colatitude
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// P(n, m)
    #[inline]
    pub fn value(&self, n: usize, m: usize) -> f64 {
        self.p[triangular_index(n, m)]
    }

    /// dP(n, m) / d(colatitude), per radian
    #[inline]
    pub fn derivative(&self, n: usize, m: usize) -> f64 {
        self.dp[triangular_index(n, m)]
    }

    /// P(n, m) / sin(colatitude), finite at the poles. Zero for m = 0, where the azimuthal
    /// field term vanishes anyway.
    #[inline]
    pub fn value_over_sin(&self, n: usize, m: usize) -> f64 {
        self.p_over_sin[triangular_index(n, m)]
    }
}
