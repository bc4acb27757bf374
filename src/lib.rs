//! Main geomagnetic field from the International Geomagnetic Reference Field.
//!
//! The field is evaluated from a spherical harmonic expansion of the internal potential whose
//! Gauss coefficients are interpolated in time between tabulated epochs, or advanced by the
//! secular variation rates past the last epoch. Points may be given in geodetic coordinates on
//! the WGS84 ellipsoid, giving east/north/up components, or in geocentric spherical coordinates,
//! giving radial/colatitudinal/azimuthal components. All components are in nT.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2021, 3, 28).unwrap();
//! let b = geocotrans::igrf(5.32415, 60.39299, 0.0, &date).unwrap();
//! assert!(b.declination() > 0.0 && b.inclination() > 70.0);
//! ```

use crate::error::IgrfError;
use crate::igrf::field::IgrfModel;
use crate::igrf::vector::{LocalField, SphericalField};
use crate::utils::time::ModelTime;

pub mod error;
pub mod igrf;
pub mod utils;

pub use crate::igrf::field::Evaluation;
pub use crate::igrf::igrf13::igrf13;
pub use crate::igrf::interpolation::TimeRegime;
pub use crate::utils::coords::{Ellipsoid, GeocentricPoint, GeodeticPoint};
pub use crate::utils::time::DecimalYear;

/// IGRF-13 field at a geodetic `longitude` and `latitude` (degrees) and `height` above the WGS84
/// ellipsoid (km), as east/north/up components in nT.
///
/// # Errors
/// Will return `Err` if the latitude is outside [-90, 90] or the date is before 1900.
pub fn igrf<T: ModelTime>(
    longitude: f64,
    latitude: f64,
    height: f64,
    date: &T,
) -> Result<LocalField, IgrfError> {
    Ok(IgrfModel::igrf13()
        .evaluate_geodetic(longitude, latitude, height, date)?
        .field)
}

/// IGRF-13 field at geocentric `radius` (km), `colatitude` and `longitude` (degrees), as
/// radial/colatitudinal/azimuthal components in nT.
///
/// # Errors
/// Will return `Err` if the colatitude is outside [0, 180] or the date is before 1900.
pub fn igrf_gc<T: ModelTime>(
    radius: f64,
    colatitude: f64,
    longitude: f64,
    date: &T,
) -> Result<SphericalField, IgrfError> {
    Ok(IgrfModel::igrf13()
        .evaluate_geocentric(radius, colatitude, longitude, date)?
        .field)
}

#[cfg(feature = "python")]
mod python {
    use crate::igrf::field::IgrfModel;
    use crate::utils::coords::{GeocentricPoint, GeodeticPoint};
    use crate::utils::time::DecimalYear;
    use itertools::izip;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    fn check_lengths(a: usize, b: usize, c: usize) -> PyResult<()> {
        if a != b || b != c {
            Err(PyValueError::new_err(format!(
                "Coordinate lists must have equal lengths, got {a}, {b} and {c}"
            )))?
        }
        Ok(())
    }

    /// Geodetic IGRF field (east, north, up) in nT at a decimal year.
    #[pyfunction]
    #[pyo3(name = "igrf")]
    #[pyo3(text_signature = "(lon: float, lat: float, h: float, year: float, /)")]
    fn igrf_py(lon: f64, lat: f64, h: f64, year: f64) -> PyResult<(f64, f64, f64)> {
        Ok(crate::igrf(lon, lat, h, &DecimalYear(year))?.as_tuple())
    }

    /// Geocentric IGRF field (Br, Btheta, Bphi) in nT at a decimal year.
    #[pyfunction]
    #[pyo3(name = "igrf_gc")]
    #[pyo3(text_signature = "(r: float, theta: float, phi: float, year: float, /)")]
    fn igrf_gc_py(r: f64, theta: f64, phi: f64, year: f64) -> PyResult<(f64, f64, f64)> {
        Ok(crate::igrf_gc(r, theta, phi, &DecimalYear(year))?.as_tuple())
    }

    /// Geodetic IGRF field for lists of points at one decimal year, evaluated in parallel.
    #[pyfunction]
    #[pyo3(name = "igrf_batch")]
    #[pyo3(text_signature = "(lon: list[float], lat: list[float], h: list[float], year: float, /)")]
    fn igrf_batch_py(
        lon: Vec<f64>,
        lat: Vec<f64>,
        h: Vec<f64>,
        year: f64,
    ) -> PyResult<Vec<(f64, f64, f64)>> {
        check_lengths(lon.len(), lat.len(), h.len())?;
        let points: Vec<GeodeticPoint> = izip!(lon, lat, h)
            .map(|(lon, lat, h)| GeodeticPoint::new(lon, lat, h))
            .collect();
        let fields = IgrfModel::igrf13()
            .par_evaluate_geodetic(&points, &DecimalYear(year))
            .map_err(PyErr::from)?
            .into_iter()
            .map(|e| e.field.as_tuple())
            .collect();
        Ok(fields)
    }

    /// Geocentric IGRF field for lists of points at one decimal year, evaluated in parallel.
    #[pyfunction]
    #[pyo3(name = "igrf_gc_batch")]
    #[pyo3(text_signature = "(r: list[float], theta: list[float], phi: list[float], year: float, /)")]
    fn igrf_gc_batch_py(
        r: Vec<f64>,
        theta: Vec<f64>,
        phi: Vec<f64>,
        year: f64,
    ) -> PyResult<Vec<(f64, f64, f64)>> {
        check_lengths(r.len(), theta.len(), phi.len())?;
        let points: Vec<GeocentricPoint> = izip!(r, theta, phi)
            .map(|(r, theta, phi)| GeocentricPoint::new(r, theta, phi))
            .collect();
        let fields = IgrfModel::igrf13()
            .par_evaluate_geocentric(&points, &DecimalYear(year))
            .map_err(PyErr::from)?
            .into_iter()
            .map(|e| e.field.as_tuple())
            .collect();
        Ok(fields)
    }

    /// Main geomagnetic field from the IGRF-13 model.
    #[pymodule]
    fn geocotrans(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(igrf_py, m)?)?;
        m.add_function(wrap_pyfunction!(igrf_gc_py, m)?)?;
        m.add_function(wrap_pyfunction!(igrf_batch_py, m)?)?;
        m.add_function(wrap_pyfunction!(igrf_gc_batch_py, m)?)?;

        Ok(())
    }
}
