//! Dataset Table Module
//! Category labels plus one labeled numeric series per statistic kind.

use crate::data::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("dataset '{kind}' has {found} values for {expected} labels")]
    Misaligned {
        kind: String,
        expected: usize,
        found: usize,
    },
}

/// A labeled series of values aligned with the table's category labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Read-only table of datasets keyed by statistic kind.
///
/// Every dataset holds exactly one value per label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetTable {
    labels: Vec<String>,
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetTable {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            datasets: BTreeMap::new(),
        }
    }

    /// Builder form of [`DatasetTable::insert`].
    pub fn with_dataset(
        mut self,
        kind: impl Into<String>,
        dataset: Dataset,
    ) -> Result<Self, TableError> {
        self.insert(kind, dataset)?;
        Ok(self)
    }

    /// Add or replace the dataset for `kind`.
    pub fn insert(&mut self, kind: impl Into<String>, dataset: Dataset) -> Result<(), TableError> {
        let kind = kind.into();
        if dataset.values.len() != self.labels.len() {
            return Err(TableError::Misaligned {
                kind,
                expected: self.labels.len(),
                found: dataset.values.len(),
            });
        }
        self.datasets.insert(kind, dataset);
        Ok(())
    }

    /// Check alignment of every dataset. Needed after deserializing.
    pub fn validate(&self) -> Result<(), TableError> {
        for (kind, dataset) in &self.datasets {
            if dataset.values.len() != self.labels.len() {
                return Err(TableError::Misaligned {
                    kind: kind.clone(),
                    expected: self.labels.len(),
                    found: dataset.values.len(),
                });
            }
        }
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, kind: &str) -> Option<&Dataset> {
        self.datasets.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.datasets.contains_key(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Available kinds: known statistic kinds first in display order, then
    /// any other keys alphabetically.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = StatKind::ALL
            .iter()
            .map(|k| k.key())
            .filter(|k| self.datasets.contains_key(*k))
            .map(str::to_string)
            .collect();

        kinds.extend(
            self.datasets
                .keys()
                .filter(|key| !StatKind::ALL.iter().any(|k| k.key() == key.as_str()))
                .cloned(),
        );
        kinds
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn rejects_misaligned_dataset() {
        let err = DatasetTable::new(labels())
            .with_dataset("gold", Dataset::new("Gold", vec![1.0, 2.0]))
            .unwrap_err();
        assert_eq!(
            err,
            TableError::Misaligned {
                kind: "gold".to_string(),
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn kinds_lists_known_kinds_first() {
        let table = DatasetTable::new(labels())
            .with_dataset("zeta", Dataset::new("Zeta", vec![0.0; 3]))
            .unwrap()
            .with_dataset("gold", Dataset::new("Gold", vec![0.0; 3]))
            .unwrap()
            .with_dataset("kills", Dataset::new("Kills", vec![0.0; 3]))
            .unwrap();
        assert_eq!(table.kinds(), vec!["kills", "gold", "zeta"]);
    }

    #[test]
    fn kinds_keeps_keys_that_differ_from_known_kinds_by_case() {
        let json = r#"{"labels": ["A"], "datasets": {
            "Gold": {"label": "Gold", "values": [1]},
            "KILLS": {"label": "Kills", "values": [2]},
            "cs": {"label": "CS", "values": [3]}
        }}"#;
        let table: DatasetTable = serde_json::from_str(json).unwrap();
        assert!(table.validate().is_ok());
        assert_eq!(table.kinds(), vec!["cs", "Gold", "KILLS"]);
    }

    #[test]
    fn json_shape_matches_page_payload() {
        let json = r#"{
            "labels": ["A", "B", "C"],
            "datasets": { "gold": { "label": "Gold", "values": [1, 2, 3] } }
        }"#;
        let table: DatasetTable = serde_json::from_str(json).unwrap();
        assert!(table.validate().is_ok());
        assert_eq!(
            table.get("gold"),
            Some(&Dataset::new("Gold", vec![1.0, 2.0, 3.0]))
        );
        assert!(table.get("kills").is_none());
    }

    #[test]
    fn validate_catches_bad_json() {
        let json = r#"{"labels": ["A"], "datasets": {"gold": {"label": "Gold", "values": [1, 2]}}}"#;
        let table: DatasetTable = serde_json::from_str(json).unwrap();
        assert!(table.validate().is_err());
    }
}
