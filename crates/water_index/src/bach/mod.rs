//! BACH chemical/physical water-quality index.
//!
//! Eight measured parameters are mapped to 0–100 sub-scores through the
//! lookup tables in [`tables`] and combined as a weighted geometric mean:
//!
//! | Parameter              | Identifier     | Weight |
//! |------------------------|----------------|--------|
//! | Temperature            | `temp`         |  0.08  |
//! | Oxygen saturation      | `o2`           |  0.20  |
//! | BOD5                   | `bsb5`         |  0.20  |
//! | pH                     | `ph`           |  0.10  |
//! | Nitrate                | `no3`          |  0.10  |
//! | Phosphate              | `po4`          |  0.10  |
//! | Ammonium               | `nh4`          |  0.15  |
//! | Conductivity           | `conductivity` |  0.07  |
//!
//! Weights are renormalised over the parameters actually present.

pub mod tables;

use bevy::log::debug;

use crate::index::{IndexCalculator, IndexKind};
use crate::interpolation::LookupTable;
use crate::parameters::{self, ParameterSet};

pub use tables::{TableAnomaly, TABLE_ANOMALIES};

/// One BACH sub-parameter: identifier, weight and scoring curve.
#[derive(Debug, Clone, Copy)]
pub struct SubParameter {
    pub id: &'static str,
    pub weight: f64,
    pub table: &'static LookupTable,
}

pub static SUB_PARAMETERS: [SubParameter; 8] = [
    SubParameter {
        id: parameters::TEMPERATURE,
        weight: 0.08,
        table: &tables::TEMPERATURE,
    },
    SubParameter {
        id: parameters::OXYGEN_SATURATION,
        weight: 0.20,
        table: &tables::OXYGEN_SATURATION,
    },
    SubParameter {
        id: parameters::BOD5,
        weight: 0.20,
        table: &tables::BOD5,
    },
    SubParameter {
        id: parameters::PH,
        weight: 0.10,
        table: &tables::PH,
    },
    SubParameter {
        id: parameters::NITRATE,
        weight: 0.10,
        table: &tables::NITRATE,
    },
    SubParameter {
        id: parameters::PHOSPHATE,
        weight: 0.10,
        table: &tables::PHOSPHATE,
    },
    SubParameter {
        id: parameters::AMMONIUM,
        weight: 0.15,
        table: &tables::AMMONIUM,
    },
    SubParameter {
        id: parameters::CONDUCTIVITY,
        weight: 0.07,
        table: &tables::CONDUCTIVITY,
    },
];

/// Descending class bounds: a value strictly above the bound gets the class.
/// The last class starts at zero inclusive.
static CLASSES: [(f64, &str, &str); 7] = [
    (83.0, "I", "unbelastet"),
    (73.0, "I-II", "gering belastet"),
    (56.0, "II", "mäßig belastet"),
    (44.0, "II-III", "kritisch belastet"),
    (27.0, "III", "stark verschmutzt"),
    (17.0, "III-IV", "übermäßig verschmutzt"),
    (0.0, "IV", "übermäßig stark verschmutzt"),
];

fn class_of(value: f64) -> Option<&'static (f64, &'static str, &'static str)> {
    let (last, upper) = CLASSES.split_last()?;
    upper
        .iter()
        .find(|(bound, _, _)| value > *bound)
        .or_else(|| (value >= last.0).then_some(last))
}

/// Sub-score of a single parameter, or `None` if it was not measured.
pub fn sub_score(params: &ParameterSet, sub: &SubParameter) -> Option<f64> {
    params.get(sub.id).and_then(|raw| sub.table.evaluate(raw))
}

pub struct BachIndex;

impl IndexCalculator for BachIndex {
    type Input = ParameterSet;

    const KIND: IndexKind = IndexKind::Bach;

    fn calculate_index(params: &ParameterSet) -> Option<f64> {
        let scores: Vec<(f64, f64)> = SUB_PARAMETERS
            .iter()
            .filter_map(|sub| sub_score(params, sub).map(|score| (score, sub.weight)))
            .collect();

        let sum_of_weights: f64 = scores.iter().map(|(_, w)| w).sum();
        if scores.is_empty() || sum_of_weights <= 0.0 {
            return None;
        }

        let index = scores
            .iter()
            .fold(1.0, |acc, (score, weight)| acc * score.powf(weight / sum_of_weights));
        debug!(
            "BACH index {:.2} from {} sub-score(s)",
            index,
            scores.len()
        );
        Some(index)
    }

    fn calculate_classification(value: f64) -> Option<&'static str> {
        class_of(value).map(|(_, class, _)| *class)
    }

    fn calculate_description(value: f64) -> Option<&'static str> {
        class_of(value).map(|(_, _, description)| *description)
    }

    fn calculate_validity(params: &ParameterSet) -> f64 {
        SUB_PARAMETERS
            .iter()
            .filter(|sub| params.contains(sub.id))
            .map(|sub| sub.weight)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::*;

    fn single(id: &str, value: f64) -> ParameterSet {
        ParameterSet::new().with(id, value)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = SUB_PARAMETERS.iter().map(|s| s.weight).sum();
        assert!(approx(total, 1.0));
    }

    #[test]
    fn test_empty_params() {
        let params = ParameterSet::new();
        assert_eq!(BachIndex::calculate_index(&params), None);
        assert_eq!(BachIndex::calculate_validity(&params), 0.0);
        let result = BachIndex::update(&params);
        assert_eq!(result.value, None);
        assert_eq!(result.classification, None);
        assert_eq!(result.description, None);
        assert_eq!(result.validity, 0.0);
    }

    #[test]
    fn test_unrelated_params_ignored() {
        let params = single(PLECOPTERA, 12.0);
        assert_eq!(BachIndex::calculate_index(&params), None);
        assert_eq!(BachIndex::calculate_validity(&params), 0.0);
    }

    #[test]
    fn test_temperature_lower_boundary() {
        assert_eq!(BachIndex::calculate_index(&single(TEMPERATURE, 14.0)), Some(100.0));
        assert_eq!(BachIndex::calculate_index(&single(TEMPERATURE, 4.0)), Some(100.0));
    }

    #[test]
    fn test_temperature_saturates_beyond_table() {
        assert_eq!(BachIndex::calculate_index(&single(TEMPERATURE, 35.0)), Some(1.0));
    }

    #[test]
    fn test_single_parameter_is_its_sub_score() {
        // With one parameter the normalised weight is 1.
        let index = BachIndex::calculate_index(&single(NITRATE, 5.0)).unwrap();
        assert!(approx(index, 85.0));
        let index = BachIndex::calculate_index(&single(CONDUCTIVITY, 160.0)).unwrap();
        assert!(approx(index, 99.8));
    }

    #[test]
    fn test_clamp_values() {
        assert_eq!(BachIndex::calculate_index(&single(OXYGEN_SATURATION, -3.0)), Some(2.0));
        assert_eq!(BachIndex::calculate_index(&single(OXYGEN_SATURATION, 150.0)), Some(83.0));
        assert_eq!(BachIndex::calculate_index(&single(BOD5, 20.0)), Some(4.0));
        assert_eq!(BachIndex::calculate_index(&single(PH, 2.0)), Some(1.0));
        assert_eq!(BachIndex::calculate_index(&single(PH, 11.0)), Some(10.5));
        assert_eq!(BachIndex::calculate_index(&single(NITRATE, 50.0)), Some(10.0));
        assert_eq!(BachIndex::calculate_index(&single(PHOSPHATE, 9.0)), Some(1.0));
        assert_eq!(BachIndex::calculate_index(&single(AMMONIUM, 20.0)), Some(3.5));
        assert_eq!(BachIndex::calculate_index(&single(CONDUCTIVITY, 9000.0)), Some(2.0));
    }

    #[test]
    fn test_single_sub_score_within_table_range() {
        for sub in &SUB_PARAMETERS {
            let (lo, hi) = sub.table.y_range();
            for raw in [-1.0, 0.0, 0.3, 1.7, 6.3, 7.15, 14.2, 22.0, 95.5, 480.0, 6000.0] {
                let index = BachIndex::calculate_index(&single(sub.id, raw)).unwrap();
                assert!(
                    index >= lo - 1e-9 && index <= hi + 1e-9,
                    "{}={} gave {}",
                    sub.id,
                    raw,
                    index
                );
            }
        }
    }

    #[test]
    fn test_weighted_geometric_mean() {
        // temp=14 -> 100, o2=50 -> 30; weights 0.08 and 0.20.
        let params = ParameterSet::new()
            .with(TEMPERATURE, 14.0)
            .with(OXYGEN_SATURATION, 50.0);
        let expected = 100f64.powf(0.08 / 0.28) * 30f64.powf(0.20 / 0.28);
        let index = BachIndex::calculate_index(&params).unwrap();
        assert!(approx(index, expected));
    }

    #[test]
    fn test_all_parameters_clean_water() {
        let params = ParameterSet::new()
            .with(TEMPERATURE, 12.0)
            .with(OXYGEN_SATURATION, 100.0)
            .with(BOD5, 0.0)
            .with(PH, 7.25)
            .with(NITRATE, 0.0)
            .with(PHOSPHATE, 0.0)
            .with(AMMONIUM, 0.0)
            .with(CONDUCTIVITY, 150.0);
        let result = BachIndex::update(&params);
        assert!(approx(result.value.unwrap(), 100.0));
        assert_eq!(result.classification.as_deref(), Some("I"));
        assert_eq!(result.description.as_deref(), Some("unbelastet"));
        assert_eq!(result.validity, 1.0);
    }

    #[test]
    fn test_classification_examples() {
        assert_eq!(BachIndex::calculate_classification(85.0), Some("I"));
        assert_eq!(BachIndex::calculate_classification(50.0), Some("II-III"));
        assert_eq!(BachIndex::calculate_classification(10.0), Some("IV"));
    }

    #[test]
    fn test_classification_boundaries_are_exclusive() {
        assert_eq!(BachIndex::calculate_classification(83.0), Some("I-II"));
        assert_eq!(BachIndex::calculate_classification(73.0), Some("II"));
        assert_eq!(BachIndex::calculate_classification(56.0), Some("II-III"));
        assert_eq!(BachIndex::calculate_classification(44.0), Some("III"));
        assert_eq!(BachIndex::calculate_classification(27.0), Some("III-IV"));
        assert_eq!(BachIndex::calculate_classification(17.0), Some("IV"));
        assert_eq!(BachIndex::calculate_classification(0.0), Some("IV"));
    }

    #[test]
    fn test_classification_negative_is_none() {
        assert_eq!(BachIndex::calculate_classification(-0.5), None);
        assert_eq!(BachIndex::calculate_description(-0.5), None);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(BachIndex::calculate_description(90.0), Some("unbelastet"));
        assert_eq!(BachIndex::calculate_description(60.0), Some("mäßig belastet"));
        assert_eq!(BachIndex::calculate_description(20.0), Some("übermäßig verschmutzt"));
        assert_eq!(
            BachIndex::calculate_description(5.0),
            Some("übermäßig stark verschmutzt")
        );
    }

    #[test]
    fn test_validity_is_sum_of_present_weights() {
        let params = ParameterSet::new()
            .with(OXYGEN_SATURATION, 90.0)
            .with(AMMONIUM, 0.5);
        assert!(approx(BachIndex::calculate_validity(&params), 0.35));
    }

    #[test]
    fn test_validity_ignores_values() {
        let a = ParameterSet::new().with(PH, 7.0).with(BOD5, 1.0);
        let b = ParameterSet::new().with(PH, 3.0).with(BOD5, 40.0);
        assert_eq!(
            BachIndex::calculate_validity(&a),
            BachIndex::calculate_validity(&b)
        );
    }

    #[test]
    fn test_update_idempotent() {
        let params = ParameterSet::new()
            .with(TEMPERATURE, 19.3)
            .with(PH, 6.4)
            .with(AMMONIUM, 0.3);
        assert_eq!(BachIndex::update(&params), BachIndex::update(&params));
    }
}
