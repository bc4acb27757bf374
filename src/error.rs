use thiserror::Error;

/// Enum of the possible error variants that may be encountered while evaluating the field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IgrfError {
    /// The requested date precedes the earliest epoch of the coefficient table
    #[error("Date {year:.4} precedes the first model epoch {first_epoch}")]
    DateOutOfRange { year: f64, first_epoch: i32 },

    /// A spherical harmonic degree outside what the model or the engine supports
    #[error("Invalid degree {degree}, must be between 1 and {max}")]
    InvalidDegree { degree: usize, max: usize },

    /// Geodetic latitude outside [-90, 90] degrees
    #[error("Invalid latitude {0}, must be within [-90, 90] degrees")]
    InvalidLatitude(f64),

    /// Geocentric colatitude outside [0, 180] degrees
    #[error("Invalid colatitude {0}, must be within [0, 180] degrees")]
    InvalidColatitude(f64),

    /// An epoch that is not tabulated in the coefficient store
    #[error("Epoch {0} is not in the coefficient table")]
    UnknownEpoch(i32),

    /// The coefficient table handed to the store breaks one of its invariants
    #[error("{0}")]
    InvalidTable(String),
}

#[cfg(feature = "python")]
impl From<IgrfError> for pyo3::PyErr {
    fn from(value: IgrfError) -> Self {
        let msg = value.to_string();
        pyo3::exceptions::PyValueError::new_err(msg)
    }
}
