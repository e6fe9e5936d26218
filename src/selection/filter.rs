use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Dataset};

use super::SelectionBounds;

/// Points of one source dataset that fell inside a selection.
///
/// `indexes` are positions in the source dataset. `labels` is present only
/// when the source dataset carries per-point labels, and is aligned with
/// `data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectedDataset {
    pub data: Vec<DataPoint>,
    pub indexes: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl SelectedDataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[must_use]
pub fn filter_dataset(dataset: &Dataset, bounds: &SelectionBounds) -> SelectedDataset {
    let mut selected = SelectedDataset {
        labels: dataset.labels.as_ref().map(|_| Vec::new()),
        ..SelectedDataset::default()
    };

    for (index, point) in dataset.data.iter().enumerate() {
        if !bounds.contains(point) {
            continue;
        }
        selected.data.push(point.clone());
        selected.indexes.push(index);
        if let (Some(out), Some(source)) = (selected.labels.as_mut(), dataset.labels.as_ref()) {
            // Missing trailing labels read as empty.
            out.push(source.get(index).cloned().unwrap_or_default());
        }
    }

    selected
}

/// One result per dataset, in dataset order.
#[must_use]
pub fn filter_datasets(datasets: &[Dataset], bounds: &SelectionBounds) -> Vec<SelectedDataset> {
    datasets
        .iter()
        .map(|dataset| filter_dataset(dataset, bounds))
        .collect()
}
