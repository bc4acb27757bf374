use crate::error::IgrfError;
use crate::igrf::coefficients::GaussCoefficients;
use itertools::Itertools;
use tracing::debug;

/// Main-field coefficients tabulated for one epoch
#[derive(Debug, Clone, PartialEq)]
pub struct Epoch {
    pub year: i32,
    pub coefficients: GaussCoefficients,
}

impl Epoch {
    pub fn new(year: i32, coefficients: GaussCoefficients) -> Epoch {
        Epoch { year, coefficients }
    }
}

/// Immutable table of epoch coefficient sets, plus the trailing secular variation record used
/// past the last epoch. Nothing mutates it after construction, so it can be shared freely
/// between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientStore {
    epochs: Vec<Epoch>,
    secular_variation: GaussCoefficients,
    secular_variation_span: f64,
}

impl CoefficientStore {
    /// Builds a store from tabulated epochs and the secular variation rates (per year) that apply
    /// from the last epoch onward for `secular_variation_span` years.
    ///
    /// # Errors
    /// Will return `Err` if there are no epochs, if the epochs are not strictly increasing, or if
    /// the secular variation record has a higher degree than the last epoch.
    pub fn new(
        epochs: Vec<Epoch>,
        secular_variation: GaussCoefficients,
        secular_variation_span: f64,
    ) -> Result<CoefficientStore, IgrfError> {
        let last = epochs
            .last()
            .ok_or_else(|| IgrfError::InvalidTable("Coefficient table has no epochs".to_string()))?;
        if let Some((a, b)) = epochs
            .iter()
            .tuple_windows()
            .find(|(a, b)| a.year >= b.year)
        {
            return Err(IgrfError::InvalidTable(format!(
                "Epochs must be strictly increasing, found {} followed by {}",
                a.year, b.year
            )));
        }
        if secular_variation.max_degree() > last.coefficients.max_degree() {
            return Err(IgrfError::InvalidTable(format!(
                "Secular variation degree {} exceeds degree {} of the last epoch",
                secular_variation.max_degree(),
                last.coefficients.max_degree()
            )));
        }
        if secular_variation_span.is_nan() || secular_variation_span < 0.0 {
            return Err(IgrfError::InvalidTable(format!(
                "Invalid secular variation span {secular_variation_span}"
            )));
        }
        debug!(
            "Coefficient store built with {} epochs ({}..={})",
            epochs.len(),
            epochs[0].year,
            last.year
        );
        Ok(CoefficientStore {
            epochs,
            secular_variation,
            secular_variation_span,
        })
    }

    /// Store from data already known to satisfy the table invariants
    pub(crate) fn from_verified(
        epochs: Vec<Epoch>,
        secular_variation: GaussCoefficients,
        secular_variation_span: f64,
    ) -> CoefficientStore {
        CoefficientStore {
            epochs,
            secular_variation,
            secular_variation_span,
        }
    }

    /// Coefficients tabulated for exactly `year`.
    ///
    /// # Errors
    /// Will return `Err` if `year` is not a tabulated epoch.
    pub fn lookup(&self, year: i32) -> Result<&GaussCoefficients, IgrfError> {
        self.epochs
            .binary_search_by_key(&year, |e| e.year)
            .map(|i| &self.epochs[i].coefficients)
            .map_err(|_| IgrfError::UnknownEpoch(year))
    }

    pub fn epochs(&self) -> &[Epoch] {
        &self.epochs
    }

    pub fn first_epoch(&self) -> &Epoch {
        // Construction guarantees at least one epoch
        &self.epochs[0]
    }

    pub fn last_epoch(&self) -> &Epoch {
        &self.epochs[self.epochs.len() - 1]
    }

    /// Secular variation rates in nT/yr
    pub fn secular_variation(&self) -> &GaussCoefficients {
        &self.secular_variation
    }

    /// Years past the last epoch covered by the secular variation record
    pub fn secular_variation_span(&self) -> f64 {
        self.secular_variation_span
    }

    /// Highest degree found in any epoch
    pub fn max_degree(&self) -> usize {
        self.epochs
            .iter()
            .map(|e| e.coefficients.max_degree())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dipole(g10: f64) -> GaussCoefficients {
        let mut c = GaussCoefficients::zeros(1);
        c.set(1, 0, g10, 0.0).unwrap();
        c
    }

    #[test]
    fn lookup_tabulated_epochs() {
        let store = CoefficientStore::new(
            vec![Epoch::new(2000, dipole(-1.0)), Epoch::new(2005, dipole(-2.0))],
            dipole(0.5),
            5.0,
        )
        .unwrap();
        assert_eq!(store.lookup(2005).unwrap().g(1, 0), -2.0);
        assert_eq!(store.lookup(2003), Err(IgrfError::UnknownEpoch(2003)));
        assert_eq!(store.first_epoch().year, 2000);
        assert_eq!(store.last_epoch().year, 2005);
        assert_eq!(store.max_degree(), 1);
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(matches!(
            CoefficientStore::new(vec![], dipole(0.0), 5.0),
            Err(IgrfError::InvalidTable(_))
        ));
        assert!(matches!(
            CoefficientStore::new(
                vec![Epoch::new(2005, dipole(-1.0)), Epoch::new(2005, dipole(-2.0))],
                dipole(0.0),
                5.0
            ),
            Err(IgrfError::InvalidTable(_))
        ));
        assert!(matches!(
            CoefficientStore::new(
                vec![Epoch::new(2005, dipole(-1.0))],
                GaussCoefficients::zeros(2),
                5.0
            ),
            Err(IgrfError::InvalidTable(_))
        ));
        assert!(matches!(
            CoefficientStore::new(vec![Epoch::new(2005, dipole(-1.0))], dipole(0.0), f64::NAN),
            Err(IgrfError::InvalidTable(_))
        ));
    }
}
