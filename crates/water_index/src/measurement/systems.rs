use bevy::prelude::*;

use crate::bach::BachIndex;
use crate::config::{IndexConfig, ValidityLevel};
use crate::index::{FlowType, IndexCalculator, IndexKind, IndexResult};
use crate::saprobic::SaprobicIndex;
use crate::structure::{StructuralAssessment, StructureIndex};
use crate::trophic::TrophicIndex;

use super::{IndexUpdated, MeasurementIndices, MeasurementParameters, WaterBody};

/// Store `results` on the entity, inserting [`MeasurementIndices`] on first
/// use, and announce each of them.
fn store_results(
    commands: &mut Commands,
    events: &mut EventWriter<IndexUpdated>,
    entity: Entity,
    indices: Option<Mut<MeasurementIndices>>,
    results: Vec<(IndexKind, IndexResult)>,
) {
    match indices {
        Some(mut indices) => {
            for (kind, result) in &results {
                indices.set(*kind, result.clone());
            }
        }
        None => {
            let mut indices = MeasurementIndices::default();
            for (kind, result) in &results {
                indices.set(*kind, result.clone());
            }
            commands.entity(entity).insert(indices);
        }
    }
    for (kind, result) in results {
        events.send(IndexUpdated {
            entity,
            kind,
            result,
        });
    }
}

/// Recomputes BACH, saprobic and trophic indices of every measurement whose
/// parameters changed.
pub fn update_parameter_indices(
    mut commands: Commands,
    mut measurements: Query<
        (Entity, &MeasurementParameters, Option<&mut MeasurementIndices>),
        Changed<MeasurementParameters>,
    >,
    mut events: EventWriter<IndexUpdated>,
) {
    for (entity, parameters, indices) in &mut measurements {
        let results = vec![
            (IndexKind::Bach, BachIndex::update(&parameters.0)),
            (IndexKind::Saprobic, SaprobicIndex::update(&parameters.0)),
            (IndexKind::Trophic, TrophicIndex::update(&parameters.0)),
        ];
        info!(
            "Recomputed parameter indices for {:?} from {} readings",
            entity,
            parameters.0.len()
        );
        store_results(&mut commands, &mut events, entity, indices, results);
    }
}

/// Recomputes the structure index of every measurement whose assessment
/// changed.
pub fn update_structure_index(
    mut commands: Commands,
    mut measurements: Query<
        (Entity, &StructuralAssessment, Option<&mut MeasurementIndices>),
        Changed<StructuralAssessment>,
    >,
    mut events: EventWriter<IndexUpdated>,
) {
    for (entity, assessment, indices) in &mut measurements {
        let result = StructureIndex::update(assessment);
        info!(
            "Recomputed structure index for {:?} from {} categories",
            entity,
            assessment.assessed_count()
        );
        store_results(
            &mut commands,
            &mut events,
            entity,
            indices,
            vec![(IndexKind::Structure, result)],
        );
    }
}

/// The validity level worth logging for `ev`, or `None` when the index does
/// not apply to a water of `flow_type` or the result is fully valid.
pub fn validity_alert(
    config: &IndexConfig,
    ev: &IndexUpdated,
    flow_type: Option<FlowType>,
) -> Option<ValidityLevel> {
    if !ev.kind.is_reportable(&ev.result, flow_type) {
        return None;
    }
    match config.validity_level(ev.result.validity) {
        ValidityLevel::Sufficient => None,
        level => Some(level),
    }
}

/// Warns about recomputed results too weak to be trusted. Indices that do not
/// apply to the measurement's water body are skipped.
pub fn log_insufficient_indices(
    config: Res<IndexConfig>,
    mut events: EventReader<IndexUpdated>,
    water_bodies: Query<&WaterBody>,
) {
    for ev in events.read() {
        let flow_type = water_bodies.get(ev.entity).ok().and_then(|body| body.flow_type);
        match validity_alert(&config, ev, flow_type) {
            Some(ValidityLevel::Insufficient) => warn!(
                "{} of {:?} has insufficient validity {:.2} (limit {:.2})",
                ev.kind, ev.entity, ev.result.validity, config.validity_limit
            ),
            Some(_) => debug!(
                "{} of {:?} has reduced validity {:.2}",
                ev.kind, ev.entity, ev.result.validity
            ),
            None => {}
        }
    }
}
