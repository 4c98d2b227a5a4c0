use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Patient – one subject (one data line of the source file)
// ---------------------------------------------------------------------------

/// One subject's identity, demographic fields, and inflammation series.
///
/// A plain value holder: fields are set at construction and never
/// reassigned. No validation is performed on field values; `sex` and
/// `group` are free-form labels and the numeric fields are trusted to have
/// been parsed upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Opaque identifier, unique within a dataset by convention (not
    /// enforced).
    pub id: String,
    /// Categorical sex label.
    pub sex: String,
    /// Experimental/control group assignment.
    pub group: String,
    /// Age in years.
    pub age: u32,
    /// Per-timepoint inflammation measurements, in observation order.
    pub measurements: Vec<i64>,
}

impl Patient {
    /// Cohort key combining sex and group, e.g. `"M-control"`.
    ///
    /// Pure and recomputed on each call.
    pub fn stratification_label(&self) -> String {
        format!("{}-{}", self.sex, self.group)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// Ordered, read-only collection of patients.
///
/// Element order matches data-line order of the source file (header
/// excluded). The order carries no semantic meaning but is preserved for
/// reproducibility of downstream analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    patients: Vec<Patient>,
}

impl Dataset {
    /// Wrap an ordered list of patients, taking ownership.
    pub fn new(patients: Vec<Patient>) -> Self {
        Dataset { patients }
    }

    /// Number of patients.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Positional access. Valid indices are `0..len()`.
    pub fn get(&self, index: usize) -> Result<&Patient> {
        self.patients.get(index).ok_or(DataError::OutOfRange {
            index,
            len: self.patients.len(),
        })
    }

    /// Iterate patients in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Patient> {
        self.patients.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Patient;
    type IntoIter = std::slice::Iter<'a, Patient>;

    fn into_iter(self) -> Self::IntoIter {
        self.patients.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> Patient {
        Patient {
            id: "p01".to_string(),
            sex: "M".to_string(),
            group: "control".to_string(),
            age: 34,
            measurements: vec![0, 1, 2],
        }
    }

    #[test]
    fn stratification_label_joins_sex_and_group() {
        let p = sample_patient();
        assert_eq!(p.stratification_label(), "M-control");
    }

    #[test]
    fn stratification_label_is_deterministic() {
        let p = sample_patient();
        let first = p.stratification_label();
        let second = p.stratification_label();
        assert_eq!(first, second);
        assert_eq!(first, format!("{}-{}", p.sex, p.group));
    }

    #[test]
    fn dataset_preserves_order() {
        let mut patients = Vec::new();
        for i in 0..3 {
            let mut p = sample_patient();
            p.id = format!("p{i:02}");
            patients.push(p);
        }
        let ds = Dataset::new(patients);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        for i in 0..3 {
            assert_eq!(ds.get(i).unwrap().id, format!("p{i:02}"));
        }
    }

    #[test]
    fn get_past_end_is_out_of_range() {
        let ds = Dataset::new(vec![sample_patient()]);
        let err = ds.get(1).unwrap_err();
        assert!(matches!(
            err,
            crate::error::DataError::OutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn empty_dataset_rejects_any_index() {
        let ds = Dataset::new(Vec::new());
        assert_eq!(ds.len(), 0);
        assert!(ds.is_empty());
        assert!(ds.get(0).is_err());
    }

    #[test]
    fn patient_serde_round_trip() {
        let p = sample_patient();
        let json = serde_json::to_string(&p).unwrap();
        let back: Patient = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
