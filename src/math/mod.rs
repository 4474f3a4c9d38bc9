//! Numeric primitives: grid generation and the Gaussian evaluator.

pub mod gaussian;
pub mod grid;

pub use gaussian::{gauss, gauss_over};
pub use grid::{gaussian_centers, linspace};
