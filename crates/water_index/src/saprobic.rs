//! Saprobic index from macroinvertebrate indicator taxa.
//!
//! Each taxon carries a saprobic value; the index is the abundance-weighted
//! mean of the values of the taxa found.

use crate::index::{IndexCalculator, IndexKind};
use crate::parameters::{self, ParameterSet};

/// Indicator taxa and their saprobic values.
pub static SAPROBIC_INDICATORS: [(&str, f64); 7] = [
    (parameters::PLECOPTERA, 1.3),
    (parameters::ODONATA, 2.0),
    (parameters::HIRUDINEA, 2.5),
    (parameters::GASTROPODA, 2.1),
    (parameters::DIPTERA, 3.0),
    (parameters::AMPHIPODA, 2.0),
    (parameters::TRICHOPTERA, 1.8),
];

/// From this total abundance on, the sample counts as fully valid.
const FULL_VALIDITY_ABUNDANCE: f64 = 15.0;
const VALIDITY_PER_INDIVIDUAL: f64 = 0.07;

/// Ascending class bounds: a value strictly below the bound gets the class.
static CLASSES: [(f64, &str, &str); 7] = [
    (1.5, "I", "unbelastet (oligosaprobe Zone)"),
    (1.8, "I-II", "gering belastet"),
    (2.3, "II", "mäßig belastet (β-mesosaprobe Zone)"),
    (2.7, "II-III", "kritisch belastet"),
    (3.2, "III", "stark verschmutzt (α-mesosaprobe Zone)"),
    (3.5, "III-IV", "sehr stark verschmutzt"),
    (4.0, "IV", "übermäßig verschmutzt (polysaprobe Zone)"),
];

/// `(abundance, saprobic value)` of every indicator taxon found.
fn found_taxa(params: &ParameterSet) -> impl Iterator<Item = (f64, f64)> + '_ {
    SAPROBIC_INDICATORS.iter().filter_map(|&(taxon, saprobic)| {
        params
            .get(taxon)
            .filter(|&abundance| abundance > 0.0)
            .map(|abundance| (abundance, saprobic))
    })
}

/// Sum of the abundances of all indicator taxa found.
pub fn total_abundance(params: &ParameterSet) -> f64 {
    found_taxa(params).map(|(abundance, _)| abundance).sum()
}

pub struct SaprobicIndex;

impl IndexCalculator for SaprobicIndex {
    type Input = ParameterSet;

    const KIND: IndexKind = IndexKind::Saprobic;

    fn calculate_index(params: &ParameterSet) -> Option<f64> {
        let (weighted, total) = found_taxa(params).fold(
            (0.0, 0.0),
            |(weighted, total), (abundance, saprobic)| {
                (weighted + abundance * saprobic, total + abundance)
            },
        );
        (total > 0.0).then(|| weighted / total)
    }

    fn calculate_classification(value: f64) -> Option<&'static str> {
        CLASSES
            .iter()
            .find(|(bound, _, _)| value < *bound)
            .map(|(_, class, _)| *class)
    }

    fn calculate_description(value: f64) -> Option<&'static str> {
        CLASSES
            .iter()
            .find(|(bound, _, _)| value < *bound)
            .map(|(_, _, description)| *description)
    }

    fn calculate_validity(params: &ParameterSet) -> f64 {
        let total = total_abundance(params);
        if total < FULL_VALIDITY_ABUNDANCE {
            (total * VALIDITY_PER_INDIVIDUAL).min(1.0)
        } else {
            1.0
        }
    }
}
