use crate::error::IgrfError;
use crate::igrf::coefficients::GaussCoefficients;
use crate::igrf::store::CoefficientStore;
use tracing::warn;

/// Where a date falls relative to the coefficient table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimeRegime {
    /// Within the tabulated epochs
    Interpolated,
    /// From the last epoch through the secular variation span
    SecularVariation,
    /// Past the secular variation span. Still computed, but accuracy degrades with distance.
    Extrapolated,
}

/// Coefficients for one instant, with the regime they were produced in
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveCoefficients {
    pub coefficients: GaussCoefficients,
    pub decimal_year: f64,
    pub regime: TimeRegime,
}

/// Produces the coefficient set at a given instant from a [`CoefficientStore`]
#[derive(Debug, Copy, Clone)]
pub struct TimeInterpolator<'a> {
    store: &'a CoefficientStore,
}

impl<'a> TimeInterpolator<'a> {
    pub fn new(store: &'a CoefficientStore) -> TimeInterpolator<'a> {
        TimeInterpolator { store }
    }

    /// Checks that `decimal_year` is not before the first epoch. There is no backward
    /// extrapolation.
    ///
    /// # Errors
    /// Will return `Err` if `decimal_year` precedes the first epoch or is NaN.
    pub fn check(&self, decimal_year: f64) -> Result<(), IgrfError> {
        let first_epoch = self.store.first_epoch().year;
        if decimal_year.is_nan() || decimal_year < first_epoch as f64 {
            return Err(IgrfError::DateOutOfRange {
                year: decimal_year,
                first_epoch,
            });
        }
        Ok(())
    }

    /// Coefficients at `decimal_year`.
    ///
    /// Between epochs each coefficient is interpolated linearly. From the last epoch onward the
    /// secular variation rates are applied for the elapsed years, with no upper bound. Dates
    /// past the secular variation span are flagged [`TimeRegime::Extrapolated`] and logged.
    ///
    /// # Errors
    /// Will return `Err` if `decimal_year` precedes the first epoch.
    pub fn coefficients_at(&self, decimal_year: f64) -> Result<EffectiveCoefficients, IgrfError> {
        self.check(decimal_year)?;

        let epochs = self.store.epochs();
        let last = self.store.last_epoch();
        if decimal_year >= last.year as f64 {
            let years = decimal_year - last.year as f64;
            let regime = if years > self.store.secular_variation_span() {
                warn!(
                    "Date {decimal_year:.4} is {years:.2} years past the last epoch {}, beyond the \
                     {} year secular variation span; field accuracy degrades",
                    last.year,
                    self.store.secular_variation_span()
                );
                TimeRegime::Extrapolated
            } else {
                TimeRegime::SecularVariation
            };
            let coefficients = if years == 0.0 {
                last.coefficients.clone()
            } else {
                last.coefficients
                    .advance(self.store.secular_variation(), years)
            };
            return Ok(EffectiveCoefficients {
                coefficients,
                decimal_year,
                regime,
            });
        }

        // First epoch strictly after the date. The checks above put it in 1..epochs.len()
        let upper = epochs.partition_point(|e| e.year as f64 <= decimal_year);
        let (start, end) = (&epochs[upper - 1], &epochs[upper]);
        let weight = (decimal_year - start.year as f64) / (end.year - start.year) as f64;
        let coefficients = if weight == 0.0 {
            start.coefficients.clone()
        } else {
            start.coefficients.lerp(&end.coefficients, weight)
        };
        Ok(EffectiveCoefficients {
            coefficients,
            decimal_year,
            regime: TimeRegime::Interpolated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::igrf::store::Epoch;
    use approx::assert_abs_diff_eq;

    fn coeffs(g10: f64, g11: f64, h11: f64) -> GaussCoefficients {
        let mut c = GaussCoefficients::zeros(1);
        c.set(1, 0, g10, 0.0).unwrap();
        c.set(1, 1, g11, h11).unwrap();
        c
    }

    fn store() -> CoefficientStore {
        CoefficientStore::new(
            vec![
                Epoch::new(2000, coeffs(-100.0, 10.0, 20.0)),
                Epoch::new(2005, coeffs(-90.0, 20.0, 10.0)),
                Epoch::new(2010, coeffs(-80.0, 30.0, 0.0)),
            ],
            coeffs(1.0, -2.0, 4.0),
            5.0,
        )
        .unwrap()
    }

    #[test]
    fn before_first_epoch() {
        let store = store();
        let interp = TimeInterpolator::new(&store);
        assert_eq!(
            interp.coefficients_at(1999.99),
            Err(IgrfError::DateOutOfRange {
                year: 1999.99,
                first_epoch: 2000
            })
        );
        assert!(interp.coefficients_at(f64::NAN).is_err());
    }

    #[test]
    fn on_epochs_is_exact() {
        let store = store();
        let interp = TimeInterpolator::new(&store);
        for epoch in store.epochs() {
            let effective = interp.coefficients_at(epoch.year as f64).unwrap();
            assert_eq!(effective.coefficients, epoch.coefficients);
        }
        assert_eq!(
            interp.coefficients_at(2005.0).unwrap().regime,
            TimeRegime::Interpolated
        );
        assert_eq!(
            interp.coefficients_at(2010.0).unwrap().regime,
            TimeRegime::SecularVariation
        );
    }

    #[test]
    fn between_epochs() {
        let store = store();
        let interp = TimeInterpolator::new(&store);
        let effective = interp.coefficients_at(2006.25).unwrap();
        assert_abs_diff_eq!(effective.coefficients.g(1, 0), -87.5, epsilon = 1e-12);
        assert_abs_diff_eq!(effective.coefficients.g(1, 1), 22.5, epsilon = 1e-12);
        assert_abs_diff_eq!(effective.coefficients.h(1, 1), 7.5, epsilon = 1e-12);
        assert_eq!(effective.decimal_year, 2006.25);
    }

    #[test]
    fn secular_variation_after_last_epoch() {
        let store = store();
        let interp = TimeInterpolator::new(&store);
        let effective = interp.coefficients_at(2011.0).unwrap();
        assert_eq!(effective.coefficients.g(1, 0), -79.0);
        assert_eq!(effective.coefficients.g(1, 1), 28.0);
        assert_eq!(effective.coefficients.h(1, 1), 4.0);
        assert_eq!(effective.regime, TimeRegime::SecularVariation);
    }

    #[test]
    fn far_future_is_flagged_not_refused() {
        let store = store();
        let interp = TimeInterpolator::new(&store);
        let effective = interp.coefficients_at(2030.0).unwrap();
        assert_eq!(effective.regime, TimeRegime::Extrapolated);
        assert_eq!(effective.coefficients.g(1, 0), -60.0);
        assert_eq!(
            interp.coefficients_at(2015.0).unwrap().regime,
            TimeRegime::SecularVariation
        );
    }

    #[test]
    fn single_epoch_table() {
        let store =
            CoefficientStore::new(vec![Epoch::new(2000, coeffs(-1.0, 0.0, 0.0))], coeffs(1.0, 0.0, 0.0), 5.0)
                .unwrap();
        let interp = TimeInterpolator::new(&store);
        assert_eq!(interp.coefficients_at(2000.0).unwrap().coefficients.g(1, 0), -1.0);
        assert_eq!(interp.coefficients_at(2002.0).unwrap().coefficients.g(1, 0), 1.0);
    }
}
