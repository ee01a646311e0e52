//! Measurement entities.
//!
//! A measurement entity carries [`MeasurementParameters`] and/or a
//! [`StructuralAssessment`](crate::structure::StructuralAssessment),
//! optionally with the [`WaterBody`] it was taken at. Whenever its inputs change, [`WaterIndexPlugin`] recomputes the
//! affected indices into [`MeasurementIndices`] and sends an [`IndexUpdated`]
//! event per index.

mod systems;

pub use systems::{
    log_insufficient_indices, update_parameter_indices, update_structure_index, validity_alert,
};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::IndexConfig;
use crate::index::{FlowType, IndexKind, IndexResult};
use crate::parameters::ParameterSet;

// =============================================================================
// Components
// =============================================================================

/// Chemical and biological readings of one measurement.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementParameters(pub ParameterSet);

/// The water a measurement was taken at. Without it the flow type is unknown.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterBody {
    pub flow_type: Option<FlowType>,
}

impl WaterBody {
    pub fn running() -> Self {
        Self {
            flow_type: Some(FlowType::Running),
        }
    }

    pub fn standing() -> Self {
        Self {
            flow_type: Some(FlowType::Standing),
        }
    }
}

/// Latest result of every index computed for a measurement.
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementIndices {
    pub bach: Option<IndexResult>,
    pub saprobic: Option<IndexResult>,
    pub trophic: Option<IndexResult>,
    pub structure: Option<IndexResult>,
}

impl MeasurementIndices {
    pub fn get(&self, kind: IndexKind) -> Option<&IndexResult> {
        match kind {
            IndexKind::Bach => self.bach.as_ref(),
            IndexKind::Saprobic => self.saprobic.as_ref(),
            IndexKind::Trophic => self.trophic.as_ref(),
            IndexKind::Structure => self.structure.as_ref(),
        }
    }

    pub fn set(&mut self, kind: IndexKind, result: IndexResult) {
        let slot = match kind {
            IndexKind::Bach => &mut self.bach,
            IndexKind::Saprobic => &mut self.saprobic,
            IndexKind::Trophic => &mut self.trophic,
            IndexKind::Structure => &mut self.structure,
        };
        *slot = Some(result);
    }

    /// Results worth exporting for a water of `flow_type`, in index order.
    pub fn reportable(&self, flow_type: Option<FlowType>) -> Vec<(IndexKind, &IndexResult)> {
        IndexKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|result| (kind, result)))
            .filter(|(kind, result)| kind.is_reportable(result, flow_type))
            .collect()
    }
}

// =============================================================================
// Events
// =============================================================================

/// Sent once per index whenever it was recomputed for a measurement.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct IndexUpdated {
    pub entity: Entity,
    pub kind: IndexKind,
    pub result: IndexResult,
}

// =============================================================================
// Plugin
// =============================================================================

pub struct WaterIndexPlugin;

impl Plugin for WaterIndexPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IndexConfig>()
            .add_event::<IndexUpdated>()
            .add_systems(
                Update,
                (
                    update_parameter_indices,
                    update_structure_index,
                    log_insufficient_indices,
                )
                    .chain(),
            );
    }
}
