//! The ten ordinal assessment categories of the structure index.
//!
//! Options are listed from most natural (rank 1) to most degraded (rank 5).
//! Every category also has an `Unknown` option that is left out of the index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// Common behaviour of all structural categories.
pub trait StructureCategory: Copy + Eq + 'static {
    /// Field name on [`super::StructuralAssessment`].
    const FIELD: &'static str;

    /// Known options, rank 1 first.
    fn levels() -> &'static [Self];

    /// Stable identifier, as stored by callers.
    fn as_str(&self) -> &'static str;

    /// Human-readable description of the option.
    fn label(&self) -> &'static str;

    /// 1..=5, `None` for unknown.
    fn rank(&self) -> Option<u8> {
        Self::levels()
            .iter()
            .position(|level| level == self)
            .map(|i| i as u8 + 1)
    }

    fn is_known(&self) -> bool {
        self.rank().is_some()
    }
}

macro_rules! structure_category {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => ($id:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
            #[default]
            #[serde(rename = "unknown")]
            Unknown,
        }

        impl $name {
            pub const LEVELS: &'static [$name] = &[$($name::$variant),+];
        }

        impl StructureCategory for $name {
            const FIELD: &'static str = $field;

            fn levels() -> &'static [Self] {
                Self::LEVELS
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                    $name::Unknown => "unknown",
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown => "unknown",
                }
            }
        }

        impl FromStr for $name {
            type Err = IndexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s == "unknown" {
                    return Ok($name::Unknown);
                }
                Self::LEVELS
                    .iter()
                    .copied()
                    .find(|level| level.as_str() == s)
                    .ok_or_else(|| IndexError::UnknownCategory {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

structure_category! {
    /// Land use around the water.
    Utilization, "utilization" {
        Natural => ("natural", "natural forest (deciduous trees)"),
        Extensive => ("extensive", "extensive use: unfertilized or small grazed meadows, no buildings"),
        Mixed => ("mixed", "smaller fields, pastures or gardens, coniferous forest"),
        Intensive => ("intensive", "intensive farming and arable land, some buildings"),
        Artificial => ("artificial", "village, industrial area"),
    }
}

structure_category! {
    /// Width of the unused margin strip.
    Margin, "margin" {
        Large => ("large", "> 20 m"),
        Medium => ("medium", "approx. 5-20 m"),
        Small => ("small", "approx. 2-5 m"),
        Tiny => ("tiny", "< 2 m"),
        Absent => ("none", "non-existent"),
    }
}

structure_category! {
    /// Shape of the water course.
    Course, "course" {
        Natural => ("natural", "curved (not modified)"),
        Changed => ("changed", "partly curved (partly modified)"),
        Stretched => ("stretched", "stretched (moderately modified)"),
        Straight => ("straight", "straight (strongly modified)"),
        Artificial => ("artificial", "straight (completely modified)"),
    }
}

structure_category! {
    BankVegetation, "bank_vegetation" {
        Continuous => ("continuous", "continuous grove (deciduous trees), several meters wide"),
        Narrow => ("narrow", "narrow continuous grove, wet meadow, tall herbaceous plants or reeds"),
        Sparse => ("sparse", "sparse grove, herbaceous vegetation of stinging nettles and other nutrient indicators"),
        NonNative => ("non-native", "individual trees, non-native vegetation (cottonwoods, conifers, or ornamental shrubs), mowed bank"),
        Artificial => ("artificial", "no trees, no herbaceous vegetation, paved bank"),
    }
}

structure_category! {
    BankStructure, "bank_structure" {
        Natural => ("natural", "no fixed banks, many inlets and widenings, water body can expand unhindered in width"),
        Straight => ("straight", "banks straightened, not visibly fixed, some indentations and widenings"),
        Strengthened => ("strengthened", "banks partly strengthened (< 50%), bank failures possible"),
        Fixed => ("fixed", "banks predominantly strengthened (>50%) by stone fills or wooden piles."),
        Artificial => ("artificial", "straight bank, steep slope, strengthened (pavement, concrete or similar)"),
    }
}

structure_category! {
    /// Width to depth ratio of the profile.
    CrossSection, "cross_section" {
        VeryShallow => ("very-shallow", "very shallow (width:depth > 10:1)"),
        Shallow => ("shallow", "shallow (width:depth approx. 5:1)"),
        Moderate => ("moderate", "moderately deep (width:depth approx. 3:1)"),
        Deep => ("deep", "deep (width:depth approx. 2:1)"),
        VeryDeep => ("very-deep", "very deep (width:depth < 2:1)"),
    }
}

structure_category! {
    Flow, "flow" {
        Mosaic => ("mosaic", "mosaic-like, different flow patterns next to and behind each other"),
        Alternating => ("alternating", "fast and slow flowing water alternate in close succession"),
        Intervals => ("intervals", "alternation of slow and fast flowing water at longer intervals"),
        Mixed => ("mixed", "alternation of slow and fast flowing water recognizable"),
        Uniform => ("uniform", "uniform flowing water"),
    }
}

structure_category! {
    DepthVariance, "depth_variance" {
        Mosaic => ("mosaic", "mosaic-like alternation between deep and shallow water areas"),
        Major => ("major", "major depth variance"),
        Moderate => ("moderate", "moderate depth variance"),
        Minor => ("minor", "minor depth variance"),
        Uniform => ("uniform", "no depth variance"),
    }
}

structure_category! {
    Riverbed, "riverbed" {
        Mosaic => ("mosaic", "mosaic-like distribution of sand/gravel/stones and deadwood, pronounced formation of islands"),
        Diverse => ("diverse", "diversified riverbed (sand/gravel/stones/deadwood), rudimentary formation of islands"),
        Intervals => ("intervals", "more uniform riverbed, different structures at greater intervals"),
        Mixed => ("mixed", "silted/paved/concreted riverbed over long stretches"),
        Uniform => ("uniform", "uniform riverbed, completely silted/paved/concreted"),
    }
}

structure_category! {
    /// Passability for fish and invertebrates.
    Continuity, "continuity" {
        Natural => ("natural", "no obstacles, natural waterfall/cascade"),
        Step => ("step", "piping < 2 m, artificial step of single stones, can be overcome by fish and invertebrates"),
        Obstacle => ("obstacle", "piping 2-5m, minor step (< 30 cm), can be overcome by fish, fish ladder"),
        Hindrance => ("hindrance", "piping 5-10m, major step or other barriers (30-100 cm)"),
        Blocked => ("blocked", "piping > 10 m, step or other barriers > 100 cm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        assert_eq!(Utilization::Natural.rank(), Some(1));
        assert_eq!(Utilization::Artificial.rank(), Some(5));
        assert_eq!(Margin::Absent.rank(), Some(5));
        assert_eq!("none".parse::<Margin>().unwrap(), Margin::Absent);
        assert_eq!(CrossSection::Moderate.rank(), Some(3));
        assert_eq!(Continuity::Hindrance.rank(), Some(4));
        assert_eq!(Riverbed::Unknown.rank(), None);
    }

    #[test]
    fn test_every_category_has_five_levels() {
        assert_eq!(Utilization::levels().len(), 5);
        assert_eq!(Margin::levels().len(), 5);
        assert_eq!(Course::levels().len(), 5);
        assert_eq!(BankVegetation::levels().len(), 5);
        assert_eq!(BankStructure::levels().len(), 5);
        assert_eq!(CrossSection::levels().len(), 5);
        assert_eq!(Flow::levels().len(), 5);
        assert_eq!(DepthVariance::levels().len(), 5);
        assert_eq!(Riverbed::levels().len(), 5);
        assert_eq!(Continuity::levels().len(), 5);
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Flow::default(), Flow::Unknown);
        assert!(!Flow::default().is_known());
    }

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("non-native".parse::<BankVegetation>().unwrap(), BankVegetation::NonNative);
        assert_eq!("very-deep".parse::<CrossSection>().unwrap(), CrossSection::VeryDeep);
        assert_eq!("unknown".parse::<DepthVariance>().unwrap(), DepthVariance::Unknown);
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = "muddy".parse::<Riverbed>().unwrap_err();
        match err {
            IndexError::UnknownCategory { field, value } => {
                assert_eq!(field, "riverbed");
                assert_eq!(value, "muddy");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_identifier_round_trip_through_display() {
        for level in Course::levels() {
            assert_eq!(level.to_string().parse::<Course>().unwrap(), *level);
        }
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&BankStructure::Strengthened).unwrap();
        assert_eq!(json, r#""strengthened""#);
        let parsed: Margin = serde_json::from_str(r#""unknown""#).unwrap();
        assert_eq!(parsed, Margin::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Margin::Large.label(), "> 20 m");
        assert_eq!(Flow::Uniform.label(), "uniform flowing water");
        assert_eq!(Continuity::FIELD, "continuity");
    }
}
