//! The shared index contract: calculator trait, result type and index kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bach::BachIndex;
use crate::parameters::ParameterSet;
use crate::saprobic::SaprobicIndex;
use crate::structure::{StructuralAssessment, StructureIndex};
use crate::trophic::TrophicIndex;

// ---------------------------------------------------------------------------
// IndexResult
// ---------------------------------------------------------------------------

/// Output of one full index computation.
///
/// `value` is `None` when nothing could be computed, and then so are
/// `classification` and `description`. `validity` is always set and lies in
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexResult {
    pub value: Option<f64>,
    pub classification: Option<String>,
    pub description: Option<String>,
    pub validity: f64,
}

impl IndexResult {
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

/// Validity is stored with two decimal places.
pub fn round_validity(validity: f64) -> f64 {
    ((validity * 100.0).round() / 100.0).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Calculator trait
// ---------------------------------------------------------------------------

/// A water-quality index.
///
/// Implementors are stateless; every method is a pure function of its input.
/// [`update`](IndexCalculator::update) runs the full lifecycle
/// value → classification → description → validity.
pub trait IndexCalculator {
    /// What the index is computed from.
    type Input: ?Sized;

    const KIND: IndexKind;

    /// `None` when the input holds nothing this index can use.
    fn calculate_index(input: &Self::Input) -> Option<f64>;

    /// `None` when `value` falls outside every class.
    fn calculate_classification(value: f64) -> Option<&'static str>;

    /// `None` when `value` falls outside every class.
    fn calculate_description(value: f64) -> Option<&'static str>;

    /// Depends only on which inputs are present, never on their values.
    fn calculate_validity(input: &Self::Input) -> f64;

    fn update(input: &Self::Input) -> IndexResult {
        let value = Self::calculate_index(input);
        IndexResult {
            value,
            classification: value
                .and_then(Self::calculate_classification)
                .map(str::to_owned),
            description: value
                .and_then(Self::calculate_description)
                .map(str::to_owned),
            validity: round_validity(Self::calculate_validity(input)),
        }
    }
}

// ---------------------------------------------------------------------------
// Flow type
// ---------------------------------------------------------------------------

/// Whether a water body is running (streams, rivers) or standing (lakes,
/// ponds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Standing,
    Running,
}

impl FlowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowType::Standing => "standing",
            FlowType::Running => "running",
        }
    }
}

impl FromStr for FlowType {
    type Err = crate::error::IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standing" => Ok(FlowType::Standing),
            "running" => Ok(FlowType::Running),
            other => Err(crate::error::IndexError::UnknownCategory {
                field: "flow type",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// IndexKind
// ---------------------------------------------------------------------------

/// Runtime tag for the four indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Bach,
    Saprobic,
    Trophic,
    Structure,
}

impl IndexKind {
    pub const ALL: [IndexKind; 4] = [
        IndexKind::Bach,
        IndexKind::Saprobic,
        IndexKind::Trophic,
        IndexKind::Structure,
    ];

    /// Indices computed from a [`ParameterSet`].
    pub const PARAMETER_BASED: [IndexKind; 3] =
        [IndexKind::Bach, IndexKind::Saprobic, IndexKind::Trophic];

    pub fn name(&self) -> &'static str {
        match self {
            IndexKind::Bach => "BACH Index",
            IndexKind::Saprobic => "Saprobic Index",
            IndexKind::Trophic => "Trophic Index",
            IndexKind::Structure => "Physical-Structural Index",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            IndexKind::Bach => "bach",
            IndexKind::Saprobic => "saprobic",
            IndexKind::Trophic => "trophic",
            IndexKind::Structure => "structure",
        }
    }

    /// Whether the index means anything for a water of this flow type.
    ///
    /// Trophic state is assessed for standing water only; biological and
    /// structural surveys for running water only. Chemistry applies to both,
    /// and to waters of unknown flow type.
    pub fn valid_flow_type(&self, flow_type: Option<FlowType>) -> bool {
        match self {
            IndexKind::Bach => true,
            IndexKind::Trophic => flow_type == Some(FlowType::Standing),
            IndexKind::Saprobic | IndexKind::Structure => flow_type == Some(FlowType::Running),
        }
    }

    /// Whether a result belongs in exports: the flow type must apply and at
    /// least one input must have been present.
    pub fn is_reportable(&self, result: &IndexResult, flow_type: Option<FlowType>) -> bool {
        result.validity > 0.0 && self.valid_flow_type(flow_type)
    }

    /// Run the calculator behind this tag.
    pub fn update(&self, parameters: &ParameterSet, assessment: &StructuralAssessment) -> IndexResult {
        match self {
            IndexKind::Bach => BachIndex::update(parameters),
            IndexKind::Saprobic => SaprobicIndex::update(parameters),
            IndexKind::Trophic => TrophicIndex::update(parameters),
            IndexKind::Structure => StructureIndex::update(assessment),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
