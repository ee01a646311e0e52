//! Water-quality indices for citizen-science measurements.
//!
//! Four independent calculators turn raw readings into an [`IndexResult`]:
//!
//! * [`BachIndex`]: chemical/physical parameters, weighted geometric mean of
//!   interpolated sub-scores.
//! * [`SaprobicIndex`]: indicator taxa, abundance-weighted mean.
//! * [`TrophicIndex`]: chlorophyll, visible depth and phosphate of standing
//!   water.
//! * [`StructureIndex`]: ten ordinal structure categories of running water.
//!
//! The calculators are pure functions. [`WaterIndexPlugin`] wires them into a
//! Bevy app, recomputing indices of measurement entities when their inputs
//! change.

pub mod bach;
pub mod config;
pub mod error;
pub mod index;
pub mod interpolation;
pub mod measurement;
pub mod parameters;
pub mod saprobic;
pub mod structure;
pub mod trophic;

pub use bach::BachIndex;
pub use config::{IndexConfig, ValidityLevel};
pub use error::{IndexError, TableError};
pub use index::{FlowType, IndexCalculator, IndexKind, IndexResult};
pub use interpolation::{lin_est, LookupTable};
pub use measurement::{
    IndexUpdated, MeasurementIndices, MeasurementParameters, WaterBody, WaterIndexPlugin,
};
pub use parameters::ParameterSet;
pub use saprobic::SaprobicIndex;
pub use structure::{StructuralAssessment, StructureIndex};
pub use trophic::TrophicIndex;
