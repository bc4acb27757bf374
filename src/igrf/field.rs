use crate::error::IgrfError;
use crate::igrf::igrf13::igrf13;
use crate::igrf::interpolation::{EffectiveCoefficients, TimeInterpolator, TimeRegime};
use crate::igrf::legendre::LegendreBasis;
use crate::igrf::potential::field_at;
use crate::igrf::store::CoefficientStore;
use crate::igrf::vector::{LocalField, SphericalField};
use crate::utils::coords::{rotate_to_local_frame, Ellipsoid, GeocentricPoint, GeodeticPoint};
use crate::utils::time::ModelTime;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

type Result<T> = std::result::Result<T, IgrfError>;

/// A field vector together with the time regime its coefficients came from
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Evaluation<V> {
    pub field: V,
    pub decimal_year: f64,
    pub regime: TimeRegime,
}

impl<V> Evaluation<V> {
    /// True when the date is past the secular variation span of the model
    pub fn is_extrapolated(&self) -> bool {
        self.regime == TimeRegime::Extrapolated
    }
}

/// Evaluates the main field of a Gauss coefficient model.
///
/// Holds only shared references and plain values, so one instance can be used from many
/// threads at once, and repeated calls with the same inputs return identical results.
#[derive(Debug, Copy, Clone)]
pub struct IgrfModel<'a> {
    store: &'a CoefficientStore,
    max_degree: usize,
    ellipsoid: Ellipsoid,
}

impl Default for IgrfModel<'static> {
    fn default() -> Self {
        IgrfModel::igrf13()
    }
}

impl IgrfModel<'static> {
    /// IGRF-13 at full degree on the WGS84 ellipsoid
    pub fn igrf13() -> IgrfModel<'static> {
        IgrfModel::new(igrf13())
    }
}

impl<'a> IgrfModel<'a> {
    pub fn new(store: &'a CoefficientStore) -> IgrfModel<'a> {
        IgrfModel {
            store,
            max_degree: store.max_degree(),
            ellipsoid: Ellipsoid::WGS84,
        }
    }

    /// Truncates the expansion at `max_degree`.
    ///
    /// # Errors
    /// Will return `Err` if `max_degree` is zero or above the degree of the coefficient table.
    pub fn with_max_degree(mut self, max_degree: usize) -> Result<IgrfModel<'a>> {
        let table_degree = self.store.max_degree();
        if max_degree == 0 || max_degree > table_degree {
            return Err(IgrfError::InvalidDegree {
                degree: max_degree,
                max: table_degree,
            });
        }
        self.max_degree = max_degree;
        Ok(self)
    }

    /// Reference ellipsoid used for geodetic input
    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> IgrfModel<'a> {
        self.ellipsoid = ellipsoid;
        self
    }

    pub fn store(&self) -> &'a CoefficientStore {
        self.store
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Coefficients in effect at `date`, truncated to the model degree.
    ///
    /// # Errors
    /// Will return `Err` if `date` precedes the first epoch of the table.
    pub fn coefficients_at<T: ModelTime>(&self, date: &T) -> Result<EffectiveCoefficients> {
        let mut effective =
            TimeInterpolator::new(self.store).coefficients_at(date.decimal_year())?;
        if effective.coefficients.max_degree() > self.max_degree {
            effective.coefficients = effective.coefficients.truncated(self.max_degree);
        }
        Ok(effective)
    }

    /// Field at a geodetic longitude, latitude (degrees) and height above the ellipsoid (km),
    /// as east/north/up components in nT.
    ///
    /// # Errors
    /// Will return `Err` if the latitude is outside [-90, 90] or the date precedes the table.
    pub fn evaluate_geodetic<T: ModelTime>(
        &self,
        longitude: f64,
        latitude: f64,
        height: f64,
        date: &T,
    ) -> Result<Evaluation<LocalField>> {
        validate_latitude(latitude)?;
        let effective = self.coefficients_at(date)?;
        let point = GeodeticPoint::new(longitude, latitude, height);
        Ok(Evaluation {
            field: self.local_field(&point, &effective)?,
            decimal_year: effective.decimal_year,
            regime: effective.regime,
        })
    }

    /// Field at a geocentric radius (km), colatitude and longitude (degrees), as
    /// radial/colatitudinal/azimuthal components in nT.
    ///
    /// # Errors
    /// Will return `Err` if the colatitude is outside [0, 180] or the date precedes the table.
    pub fn evaluate_geocentric<T: ModelTime>(
        &self,
        radius: f64,
        colatitude: f64,
        longitude: f64,
        date: &T,
    ) -> Result<Evaluation<SphericalField>> {
        validate_colatitude(colatitude)?;
        let effective = self.coefficients_at(date)?;
        let point = GeocentricPoint::new(radius, colatitude, longitude);
        Ok(Evaluation {
            field: self.spherical_field(&point, &effective)?,
            decimal_year: effective.decimal_year,
            regime: effective.regime,
        })
    }

    /// Evaluates many geodetic points at one date in parallel.
    ///
    /// # Errors
    /// Will return `Err` if any latitude is invalid or the date precedes the table. The first
    /// failing point in input order decides the error.
    pub fn par_evaluate_geodetic<T: ModelTime>(
        &self,
        points: &[GeodeticPoint],
        date: &T,
    ) -> Result<Vec<Evaluation<LocalField>>> {
        for point in points {
            validate_latitude(point.latitude)?;
        }
        let effective = self.coefficients_at(date)?;

        let results: Vec<Result<LocalField>> = points
            .par_iter()
            .map(|point| self.local_field(point, &effective))
            .collect();

        let mut evaluations = vec![];
        for res in results {
            evaluations.push(Evaluation {
                field: res?,
                decimal_year: effective.decimal_year,
                regime: effective.regime,
            });
        }
        Ok(evaluations)
    }

    /// Evaluates many geocentric points at one date in parallel.
    ///
    /// # Errors
    /// Will return `Err` if any colatitude is invalid or the date precedes the table.
    pub fn par_evaluate_geocentric<T: ModelTime>(
        &self,
        points: &[GeocentricPoint],
        date: &T,
    ) -> Result<Vec<Evaluation<SphericalField>>> {
        for point in points {
            validate_colatitude(point.colatitude)?;
        }
        let effective = self.coefficients_at(date)?;

        let results: Vec<Result<SphericalField>> = points
            .par_iter()
            .map(|point| self.spherical_field(point, &effective))
            .collect();

        let mut evaluations = vec![];
        for res in results {
            evaluations.push(Evaluation {
                field: res?,
                decimal_year: effective.decimal_year,
                regime: effective.regime,
            });
        }
        Ok(evaluations)
    }

    fn spherical_field(
        &self,
        point: &GeocentricPoint,
        effective: &EffectiveCoefficients,
    ) -> Result<SphericalField> {
        let basis = LegendreBasis::new(point.colatitude, self.max_degree)?;
        Ok(field_at(
            point.radius,
            point.longitude,
            &effective.coefficients,
            &basis,
        ))
    }

    fn local_field(
        &self,
        point: &GeodeticPoint,
        effective: &EffectiveCoefficients,
    ) -> Result<LocalField> {
        let geocentric = self.ellipsoid.geodetic_to_geocentric(point);
        let spherical = self.spherical_field(&geocentric, effective)?;
        Ok(rotate_to_local_frame(
            &spherical,
            point.latitude,
            geocentric.latitude(),
        ))
    }
}

fn validate_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(IgrfError::InvalidLatitude(latitude));
    }
    Ok(())
}

fn validate_colatitude(colatitude: f64) -> Result<()> {
    if !(0.0..=180.0).contains(&colatitude) {
        return Err(IgrfError::InvalidColatitude(colatitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::igrf::coefficients::GaussCoefficients;
    use crate::igrf::store::Epoch;
    use crate::utils::time::DecimalYear;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn input_validation() {
        let model = IgrfModel::igrf13();
        let date = DecimalYear(2021.0);
        assert_eq!(
            model.evaluate_geodetic(0.0, 90.5, 0.0, &date),
            Err(IgrfError::InvalidLatitude(90.5))
        );
        assert!(matches!(
            model.evaluate_geodetic(0.0, f64::NAN, 0.0, &date),
            Err(IgrfError::InvalidLatitude(_))
        ));
        assert_eq!(
            model.evaluate_geocentric(6371.2, -0.1, 0.0, &date),
            Err(IgrfError::InvalidColatitude(-0.1))
        );
        assert_eq!(
            model.evaluate_geocentric(6371.2, 180.1, 0.0, &date),
            Err(IgrfError::InvalidColatitude(180.1))
        );
        assert!(model.evaluate_geocentric(6371.2, 180.0, 0.0, &date).is_ok());
        assert!(model.evaluate_geodetic(0.0, -90.0, 0.0, &date).is_ok());
    }

    #[test]
    fn date_before_table() {
        let model = IgrfModel::igrf13();
        let date = NaiveDate::from_ymd_opt(1899, 6, 1).unwrap();
        assert!(matches!(
            model.evaluate_geodetic(10.0, 50.0, 0.0, &date),
            Err(IgrfError::DateOutOfRange {
                first_epoch: 1900,
                ..
            })
        ));
    }

    #[test]
    fn latitude_is_checked_before_date() {
        let model = IgrfModel::igrf13();
        assert_eq!(
            model.evaluate_geodetic(0.0, 100.0, 0.0, &DecimalYear(1900.0)),
            Err(IgrfError::InvalidLatitude(100.0))
        );
    }

    #[test]
    fn truncation() {
        let model = IgrfModel::igrf13();
        assert!(matches!(
            model.with_max_degree(0),
            Err(IgrfError::InvalidDegree { degree: 0, max: 13 })
        ));
        assert!(model.with_max_degree(14).is_err());

        let dipole = model.with_max_degree(1).unwrap();
        let date = DecimalYear(2020.0);
        let b = dipole
            .evaluate_geocentric(6371.2, 90.0, 0.0, &date)
            .unwrap()
            .field;
        // On the equator at longitude 0 only g11 feeds the radial component, and
        // Btheta = -g10 dP10/dtheta = g10 with dP10/dtheta = -1
        assert_relative_eq!(b.radial, 2.0 * -1450.9, max_relative = 1e-12);
        assert_relative_eq!(b.colatitudinal, -29404.8, max_relative = 1e-12);
        assert_relative_eq!(b.azimuthal, -4652.5, max_relative = 1e-12);

        // Coefficients handed out by a truncated model stop at its degree
        let effective = dipole.coefficients_at(&date).unwrap();
        assert_eq!(effective.coefficients.max_degree(), 1);
        assert_eq!(effective.coefficients.g(1, 0), -29404.8);
        assert_eq!(effective.coefficients.g(2, 0), 0.0);
        let full = model.coefficients_at(&date).unwrap();
        assert_eq!(full.coefficients.max_degree(), 13);
        assert_eq!(full.coefficients.truncated(1), effective.coefficients);
    }

    #[test]
    fn mixed_degree_bracket() {
        // 1995 is tabulated to degree 10 and 2000 to degree 13
        let model = IgrfModel::igrf13();
        let effective = model.coefficients_at(&DecimalYear(1997.5)).unwrap();
        assert_eq!(effective.regime, TimeRegime::Interpolated);
        assert_eq!(effective.coefficients.max_degree(), 13);
        assert_relative_eq!(effective.coefficients.g(1, 0), -29655.7, max_relative = 1e-12);
        assert_relative_eq!(effective.coefficients.g(11, 0), 1.35, max_relative = 1e-12);
        assert_relative_eq!(effective.coefficients.h(13, 13), -0.45, max_relative = 1e-12);

        // The field is linear in the coefficients, so halfway in time is halfway in field
        let store = model.store();
        let basis = LegendreBasis::new(52.0, 13).unwrap();
        let b1995 = field_at(6771.2, -40.0, store.lookup(1995).unwrap(), &basis);
        let b2000 = field_at(6771.2, -40.0, store.lookup(2000).unwrap(), &basis);
        let mid = model
            .evaluate_geocentric(6771.2, 52.0, -40.0, &DecimalYear(1997.5))
            .unwrap()
            .field;
        assert_relative_eq!(mid.radial, 0.5 * (b1995.radial + b2000.radial), max_relative = 1e-12);
        assert_relative_eq!(
            mid.colatitudinal,
            0.5 * (b1995.colatitudinal + b2000.colatitudinal),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mid.azimuthal,
            0.5 * (b1995.azimuthal + b2000.azimuthal),
            max_relative = 1e-12
        );
    }

    #[test]
    fn custom_store() {
        let mut c = GaussCoefficients::zeros(1);
        c.set(1, 0, -30000.0, 0.0).unwrap();
        let store = CoefficientStore::new(
            vec![Epoch::new(2000, c.clone())],
            GaussCoefficients::zeros(1),
            5.0,
        )
        .unwrap();
        let model = IgrfModel::new(&store).with_ellipsoid(Ellipsoid::new(6371.2, 0.0));

        // On a spherical reference the geodetic and geocentric frames coincide
        let local = model
            .evaluate_geodetic(0.0, 0.0, 0.0, &DecimalYear(2001.0))
            .unwrap();
        assert_relative_eq!(local.field.north, 30000.0, max_relative = 1e-12);
        assert!(local.field.up.abs() < 1e-9);
        assert_eq!(local.field.east, 0.0);
        assert_eq!(local.regime, TimeRegime::SecularVariation);
        assert!(!local.is_extrapolated());

        let far = model
            .evaluate_geodetic(0.0, 0.0, 0.0, &DecimalYear(2010.0))
            .unwrap();
        assert!(far.is_extrapolated());
    }

    #[test]
    fn batch_matches_single() {
        let model = IgrfModel::igrf13();
        let date = NaiveDate::from_ymd_opt(2018, 9, 1).unwrap();
        let points: Vec<GeodeticPoint> = (0..50)
            .map(|i| GeodeticPoint::new(i as f64 * 7.0 - 180.0, i as f64 * 3.5 - 87.5, i as f64))
            .collect();
        let batch = model.par_evaluate_geodetic(&points, &date).unwrap();
        assert_eq!(batch.len(), points.len());
        for (point, result) in points.iter().zip(&batch) {
            let single = model
                .evaluate_geodetic(point.longitude, point.latitude, point.height, &date)
                .unwrap();
            assert_eq!(*result, single);
        }

        let mut bad = points.clone();
        bad[10].latitude = -91.0;
        assert_eq!(
            model.par_evaluate_geodetic(&bad, &date),
            Err(IgrfError::InvalidLatitude(-91.0))
        );
    }

    #[test]
    fn geocentric_batch_matches_single() {
        let model = IgrfModel::igrf13();
        let date = DecimalYear(2022.5);
        let points: Vec<GeocentricPoint> = (0..=18)
            .map(|i| GeocentricPoint::new(6500.0 + 100.0 * i as f64, i as f64 * 10.0, 4.0))
            .collect();
        let batch = model.par_evaluate_geocentric(&points, &date).unwrap();
        for (point, result) in points.iter().zip(&batch) {
            let single = model
                .evaluate_geocentric(point.radius, point.colatitude, point.longitude, &date)
                .unwrap();
            assert_eq!(*result, single);
        }
    }
}
