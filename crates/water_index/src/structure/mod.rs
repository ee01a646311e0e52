//! Physical-structural index of running water.
//!
//! Ten ordinal categories are assessed on site. The index is the plain mean
//! of the ranks of all categories that were assessed.

pub mod categories;

use bevy::log::debug;
use bevy::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::index::{IndexCalculator, IndexKind};

pub use categories::{
    BankStructure, BankVegetation, Continuity, Course, CrossSection, DepthVariance, Flow, Margin,
    Riverbed, StructureCategory, Utilization,
};

/// Validity contributed by each assessed category.
const VALIDITY_PER_CATEGORY: f64 = 0.1;

/// Inclusive upper bounds of classes I..V.
static CLASSES: [(f64, &str, &str); 5] = [
    (1.5, "I", "natürlich"),
    (2.5, "II", "naturnah"),
    (3.5, "III", "verändert"),
    (4.5, "IV", "beeinträchtigt"),
    (5.0, "V", "geschädigt"),
];

// ---------------------------------------------------------------------------
// StructuralAssessment
// ---------------------------------------------------------------------------

/// One on-site structure survey. Every field defaults to unknown.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralAssessment {
    pub utilization: Utilization,
    pub margin: Margin,
    pub course: Course,
    pub bank_vegetation: BankVegetation,
    pub bank_structure: BankStructure,
    pub cross_section: CrossSection,
    pub flow: Flow,
    pub depth_variance: DepthVariance,
    pub riverbed: Riverbed,
    pub continuity: Continuity,
}

impl StructuralAssessment {
    /// The most natural option in every category.
    pub fn natural() -> Self {
        Self {
            utilization: Utilization::Natural,
            margin: Margin::Large,
            course: Course::Natural,
            bank_vegetation: BankVegetation::Continuous,
            bank_structure: BankStructure::Natural,
            cross_section: CrossSection::VeryShallow,
            flow: Flow::Mosaic,
            depth_variance: DepthVariance::Mosaic,
            riverbed: Riverbed::Mosaic,
            continuity: Continuity::Natural,
        }
    }

    /// Ranks in field order, `None` where unknown.
    pub fn ranks(&self) -> [Option<u8>; 10] {
        [
            self.utilization.rank(),
            self.margin.rank(),
            self.course.rank(),
            self.bank_vegetation.rank(),
            self.bank_structure.rank(),
            self.cross_section.rank(),
            self.flow.rank(),
            self.depth_variance.rank(),
            self.riverbed.rank(),
            self.continuity.rank(),
        ]
    }

    /// Number of categories that were assessed.
    pub fn assessed_count(&self) -> usize {
        self.ranks().iter().flatten().count()
    }
}

// ---------------------------------------------------------------------------
// StructureIndex
// ---------------------------------------------------------------------------

fn class_of(value: f64) -> Option<&'static (f64, &'static str, &'static str)> {
    CLASSES.iter().find(|(bound, _, _)| value <= *bound)
}

pub struct StructureIndex;

impl IndexCalculator for StructureIndex {
    type Input = StructuralAssessment;

    const KIND: IndexKind = IndexKind::Structure;

    fn calculate_index(assessment: &StructuralAssessment) -> Option<f64> {
        let (sum, count) = assessment
            .ranks()
            .into_iter()
            .flatten()
            .fold((0u32, 0u32), |(sum, count), rank| (sum + u32::from(rank), count + 1));
        if count == 0 {
            return None;
        }
        let value = f64::from(sum) / f64::from(count);
        debug!("structure index {value:.2} from {count} categories");
        Some(value)
    }

    fn calculate_classification(value: f64) -> Option<&'static str> {
        class_of(value).map(|(_, class, _)| *class)
    }

    fn calculate_description(value: f64) -> Option<&'static str> {
        class_of(value).map(|(_, _, description)| *description)
    }

    fn calculate_validity(assessment: &StructuralAssessment) -> f64 {
        VALIDITY_PER_CATEGORY * assessment.assessed_count() as f64
    }
}
