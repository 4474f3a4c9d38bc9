//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the run configuration (`SumConfig`) and its defaults
//! - the computed curve (`SumCurve`)
//! - the portable curve-file schema (`CurveFile`, `CurveGrid`)

pub mod types;

pub use types::*;
