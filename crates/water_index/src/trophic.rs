//! Trophic index of standing water.
//!
//! Chlorophyll, visible depth and phosphate are each sorted into a trophic
//! class from 1 (oligotroph) to 5 (hypertroph); the index is the weighted
//! mean of the classes found.

use crate::index::{IndexCalculator, IndexKind};
use crate::parameters::{self, ParameterSet};

/// Upper bounds (inclusive) of classes 1..=4 for chlorophyll in µg/l.
const CHLOROPHYLL_BOUNDS: [f64; 4] = [5.4, 9.7, 31.0, 100.0];
/// Lower bounds (inclusive) of classes 1..=4 for visible depth in m.
const VISIBLE_DEPTH_BOUNDS: [f64; 4] = [8.0, 2.0, 0.8, 0.3];
/// Upper bounds (inclusive) of classes 1..=4 for phosphate in mg/l.
const PHOSPHATE_BOUNDS: [f64; 4] = [0.01, 0.03, 0.08, 0.2];

const CHLOROPHYLL_WEIGHT: f64 = 6.0;
const VISIBLE_DEPTH_WEIGHT: f64 = 4.0;
const PHOSPHATE_WEIGHT: f64 = 4.0;

const CHLOROPHYLL_VALIDITY: f64 = 0.6;
const VISIBLE_DEPTH_VALIDITY: f64 = 0.4;
const PHOSPHATE_VALIDITY: f64 = 0.4;

const CLASSES: [(&str, &str); 5] = [
    ("I", "oligotroph"),
    ("II", "mesotroph"),
    ("III", "eutroph"),
    ("IV", "polytroph"),
    ("V", "hypertroph"),
];

/// Higher concentration, higher class.
fn class_ascending(raw: f64, bounds: &[f64; 4]) -> u8 {
    bounds
        .iter()
        .position(|&bound| raw <= bound)
        .map_or(5, |i| i as u8 + 1)
}

/// Deeper visibility, lower class.
fn class_descending(raw: f64, bounds: &[f64; 4]) -> u8 {
    bounds
        .iter()
        .position(|&bound| raw >= bound)
        .map_or(5, |i| i as u8 + 1)
}

pub fn chlorophyll_class(raw: f64) -> u8 {
    class_ascending(raw, &CHLOROPHYLL_BOUNDS)
}

pub fn visible_depth_class(raw: f64) -> u8 {
    class_descending(raw, &VISIBLE_DEPTH_BOUNDS)
}

pub fn phosphate_class(raw: f64) -> u8 {
    class_ascending(raw, &PHOSPHATE_BOUNDS)
}

/// `(class, weight)` of every trophic parameter present.
fn found_classes(params: &ParameterSet) -> Vec<(u8, f64)> {
    let sources: [(&str, fn(f64) -> u8, f64); 3] = [
        (parameters::CHLOROPHYLL, chlorophyll_class, CHLOROPHYLL_WEIGHT),
        (parameters::VISIBLE_DEPTH, visible_depth_class, VISIBLE_DEPTH_WEIGHT),
        (parameters::PHOSPHATE, phosphate_class, PHOSPHATE_WEIGHT),
    ];
    sources
        .into_iter()
        .filter_map(|(id, classify, weight)| params.get(id).map(|raw| (classify(raw), weight)))
        .collect()
}

/// Round to the nearest class, ties to even.
fn class_of(value: f64) -> Option<(&'static str, &'static str)> {
    let rounded = value.round_ties_even();
    if !(1.0..=5.0).contains(&rounded) {
        return None;
    }
    CLASSES.get(rounded as usize - 1).copied()
}

pub struct TrophicIndex;

impl IndexCalculator for TrophicIndex {
    type Input = ParameterSet;

    const KIND: IndexKind = IndexKind::Trophic;

    fn calculate_index(params: &ParameterSet) -> Option<f64> {
        let found = found_classes(params);
        let sum_of_weights: f64 = found.iter().map(|(_, w)| w).sum();
        if sum_of_weights == 0.0 {
            return None;
        }
        let index_sum: f64 = found.iter().map(|&(class, w)| f64::from(class) * w).sum();
        Some(index_sum / sum_of_weights)
    }

    fn calculate_classification(value: f64) -> Option<&'static str> {
        class_of(value).map(|(class, _)| class)
    }

    fn calculate_description(value: f64) -> Option<&'static str> {
        class_of(value).map(|(_, description)| description)
    }

    fn calculate_validity(params: &ParameterSet) -> f64 {
        let mut validity = 0.0;
        if params.contains(parameters::CHLOROPHYLL) {
            validity += CHLOROPHYLL_VALIDITY;
        }
        if params.contains(parameters::VISIBLE_DEPTH) {
            validity += VISIBLE_DEPTH_VALIDITY;
        }
        if params.contains(parameters::PHOSPHATE) {
            validity += PHOSPHATE_VALIDITY;
        }
        f64::min(validity, 1.0)
    }
}
