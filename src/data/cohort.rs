use std::collections::BTreeMap;

use super::model::{Dataset, Patient};

// ---------------------------------------------------------------------------
// Cohort grouping: which patients share a stratification label
// ---------------------------------------------------------------------------

/// Per-cohort membership: maps stratification label → dataset indices.
/// Each index list is in dataset order.
pub type CohortIndex = BTreeMap<String, Vec<usize>>;

/// Group a dataset's patients by stratification label.
pub fn cohort_indices(dataset: &Dataset) -> CohortIndex {
    let mut cohorts = CohortIndex::new();
    for (i, patient) in dataset.iter().enumerate() {
        cohorts
            .entry(patient.stratification_label())
            .or_default()
            .push(i);
    }
    cohorts
}

/// Per-timepoint mean of the measurement series across a set of patients.
///
/// Series may be ragged: each timepoint averages only the patients whose
/// series reaches it. The result is as long as the longest series; an
/// empty input yields an empty series.
pub fn mean_series<'a>(patients: impl IntoIterator<Item = &'a Patient>) -> Vec<f64> {
    let mut sums: Vec<f64> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for patient in patients {
        if patient.measurements.len() > sums.len() {
            sums.resize(patient.measurements.len(), 0.0);
            counts.resize(patient.measurements.len(), 0);
        }
        for (t, &value) in patient.measurements.iter().enumerate() {
            sums[t] += value as f64;
            counts[t] += 1;
        }
    }

    sums.iter()
        .zip(&counts)
        .map(|(&sum, &count)| sum / count as f64)
        .collect()
}

/// Mean measurement series for every cohort in the dataset.
pub fn cohort_mean_series(dataset: &Dataset) -> BTreeMap<String, Vec<f64>> {
    let mut by_label: BTreeMap<String, Vec<&Patient>> = BTreeMap::new();
    for patient in dataset {
        by_label
            .entry(patient.stratification_label())
            .or_default()
            .push(patient);
    }
    by_label
        .into_iter()
        .map(|(label, members)| (label, mean_series(members)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str, sex: &str, group: &str, measurements: Vec<i64>) -> Patient {
        Patient {
            id: id.to_string(),
            sex: sex.to_string(),
            group: group.to_string(),
            age: 30,
            measurements,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            patient("p01", "M", "control", vec![0, 2, 4]),
            patient("p02", "F", "treatment", vec![1, 1, 1]),
            patient("p03", "M", "control", vec![2, 4, 6]),
        ])
    }

    #[test]
    fn groups_by_stratification_label_in_dataset_order() {
        let ds = sample_dataset();
        let cohorts = cohort_indices(&ds);
        assert_eq!(cohorts.len(), 2);
        assert_eq!(cohorts["M-control"], vec![0, 2]);
        assert_eq!(cohorts["F-treatment"], vec![1]);
    }

    #[test]
    fn mean_series_averages_per_timepoint() {
        let ds = sample_dataset();
        let means = mean_series([ds.get(0).unwrap(), ds.get(2).unwrap()]);
        assert_eq!(means, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn mean_series_handles_ragged_input() {
        let a = patient("p01", "M", "control", vec![2, 4]);
        let b = patient("p02", "M", "control", vec![4, 4, 9]);
        let means = mean_series([&a, &b]);
        // Third timepoint is covered by one patient only.
        assert_eq!(means, vec![3.0, 4.0, 9.0]);
    }

    #[test]
    fn mean_series_of_nothing_is_empty() {
        assert!(mean_series(std::iter::empty::<&Patient>()).is_empty());
    }

    #[test]
    fn cohort_means_cover_every_label() {
        let ds = sample_dataset();
        let means = cohort_mean_series(&ds);
        assert_eq!(means["M-control"], vec![1.0, 3.0, 5.0]);
        assert_eq!(means["F-treatment"], vec![1.0, 1.0, 1.0]);
    }
}
