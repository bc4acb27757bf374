pub mod coefficients;
pub mod field;
pub mod igrf13;
pub mod interpolation;
pub mod legendre;
pub mod potential;
pub mod store;
pub mod vector;
