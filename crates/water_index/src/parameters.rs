//! Measured parameter values keyed by identifier.

use std::collections::BTreeMap;

use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::error::IndexError;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

pub const TEMPERATURE: &str = "temp";
pub const OXYGEN_SATURATION: &str = "o2";
pub const BOD5: &str = "bsb5";
pub const PH: &str = "ph";
pub const NITRATE: &str = "no3";
pub const PHOSPHATE: &str = "po4";
pub const AMMONIUM: &str = "nh4";
pub const CONDUCTIVITY: &str = "conductivity";
pub const CHLOROPHYLL: &str = "chlorophyll";
pub const VISIBLE_DEPTH: &str = "visdepth";

pub const PLECOPTERA: &str = "plecoptera";
pub const ODONATA: &str = "odonata";
pub const HIRUDINEA: &str = "hirudinea";
pub const GASTROPODA: &str = "gastropoda";
pub const DIPTERA: &str = "diptera";
pub const AMPHIPODA: &str = "amphipoda";
pub const TRICHOPTERA: &str = "trichoptera";

// ---------------------------------------------------------------------------
// ParameterSet
// ---------------------------------------------------------------------------

/// Values of one measurement event. An identifier that is absent was not
/// measured; it is never read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a sequence of readings. A later reading of the same
    /// identifier replaces an earlier one.
    pub fn from_readings<I, K>(readings: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut set = Self::new();
        for (id, value) in readings {
            set.insert(id, value);
        }
        set
    }

    /// Parse a flat JSON object such as `{"temp": 14.5, "ph": 7.1}`.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let raw: BTreeMap<String, f64> =
            serde_json::from_str(json).map_err(IndexError::Parameters)?;
        Ok(Self::from_readings(raw))
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, id: impl Into<String>, value: f64) -> Self {
        self.insert(id, value);
        self
    }

    /// Store `value` under `id`. Non-finite values are dropped (the parameter
    /// stays unmeasured) and `false` is returned.
    pub fn insert(&mut self, id: impl Into<String>, value: f64) -> bool {
        let id = id.into();
        if !value.is_finite() {
            warn!("Ignoring non-finite value {} for parameter '{}'", value, id);
            return false;
        }
        self.values.insert(id, value);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<f64> {
        self.values.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self::from_readings(iter)
    }
}

impl<K: Into<String>> Extend<(K, f64)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (id, value) in iter {
            self.insert(id, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_not_zero() {
        let params = ParameterSet::new().with(TEMPERATURE, 0.0);
        assert_eq!(params.get(TEMPERATURE), Some(0.0));
        assert_eq!(params.get(PH), None);
        assert!(!params.contains(PH));
    }

    #[test]
    fn test_later_reading_wins() {
        let params = ParameterSet::from_readings([(PH, 6.5), (TEMPERATURE, 12.0), (PH, 7.2)]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(PH), Some(7.2));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut params = ParameterSet::new();
        assert!(!params.insert(OXYGEN_SATURATION, f64::NAN));
        assert!(!params.insert(OXYGEN_SATURATION, f64::INFINITY));
        assert!(params.is_empty());
        assert!(params.insert(OXYGEN_SATURATION, 95.0));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_identifiers_sorted() {
        let params: ParameterSet = [(PH, 7.0), (BOD5, 2.0), (NITRATE, 5.0)].into_iter().collect();
        let ids: Vec<&str> = params.identifiers().collect();
        assert_eq!(ids, vec!["bsb5", "no3", "ph"]);
    }

    #[test]
    fn test_from_json() {
        let params = ParameterSet::from_json(r#"{"temp": 14.5, "plecoptera": 3}"#).unwrap();
        assert_eq!(params.get(TEMPERATURE), Some(14.5));
        assert_eq!(params.get(PLECOPTERA), Some(3.0));
    }

    #[test]
    fn test_from_json_rejects_non_numeric() {
        let err = ParameterSet::from_json(r#"{"temp": "warm"}"#).unwrap_err();
        assert!(matches!(err, IndexError::Parameters(_)));
    }

    #[test]
    fn test_serde_transparent() {
        let params = ParameterSet::new().with(PH, 7.5);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"ph":7.5}"#);
    }

    #[test]
    fn test_extend_and_remove() {
        let mut params = ParameterSet::new();
        params.extend([(AMMONIUM, 0.1), (PHOSPHATE, 0.2)]);
        assert_eq!(params.remove(AMMONIUM), Some(0.1));
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("po4", 0.2)]);
    }
}
