//! Dataset composition statistics.
//!
//! Schematism datasets mix positive pages (any entity annotated), negative
//! pages (all `"O"`), and pages carrying only a page number. The balance
//! matters when sampling evaluation subsets, so these counts are computed per
//! schematism volume and in total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page counts for one schematism volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchematismCounts {
    /// Pages with at least one non-`"O"` label.
    pub positive: usize,
    /// Pages labeled entirely `"O"`.
    pub negative: usize,
    /// Pages whose labels are limited to page-number tags and `"O"`.
    pub page_number_only: usize,
}

/// Dataset-wide composition statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Total number of pages seen.
    pub total_examples: usize,
    /// Pages with at least one annotation.
    pub positive: usize,
    /// Pages with no annotations.
    pub negative: usize,
    /// `negative / positive`, `None` when there are no positive pages.
    pub neg_to_pos_ratio: Option<f64>,
    /// Pages carrying only a page number.
    pub page_number_only: usize,
    /// `page_number_only / total`, `None` for an empty dataset.
    pub page_number_only_ratio: Option<f64>,
    /// Counts grouped by schematism volume.
    pub schematisms: BTreeMap<String, SchematismCounts>,
}

/// Whether a label belongs to the page-number-only set.
fn is_page_only_label(label: &str) -> bool {
    matches!(label, "O" | "B-page_number" | "I-page_number")
}

/// Derive the schematism volume name from a page filename.
///
/// Filenames look like `wloclawek_1872_0005.jpg`; the volume is everything
/// before the final `_` segment.
fn schematism_of(filename: &str) -> String {
    match filename.rsplit_once('_') {
        Some((volume, _)) => volume.to_string(),
        None => String::new(),
    }
}

/// Compute composition statistics over `(filename, labels)` samples.
pub fn compute_dataset_stats<'a, I, S>(samples: I) -> DatasetStats
where
    I: IntoIterator<Item = (&'a str, &'a [S])>,
    S: AsRef<str> + 'a,
{
    let mut stats = DatasetStats::default();

    for (filename, labels) in samples {
        let counts = stats
            .schematisms
            .entry(schematism_of(filename))
            .or_default();

        let has_annotation = labels.iter().any(|l| l.as_ref() != "O");
        if has_annotation {
            counts.positive += 1;
        } else {
            counts.negative += 1;
        }

        if labels.iter().all(|l| is_page_only_label(l.as_ref())) {
            counts.page_number_only += 1;
        }

        stats.total_examples += 1;
    }

    stats.positive = stats.schematisms.values().map(|c| c.positive).sum();
    stats.negative = stats.schematisms.values().map(|c| c.negative).sum();
    stats.page_number_only = stats.schematisms.values().map(|c| c.page_number_only).sum();

    stats.neg_to_pos_ratio = if stats.positive > 0 {
        Some(stats.negative as f64 / stats.positive as f64)
    } else {
        None
    };
    stats.page_number_only_ratio = if stats.total_examples > 0 {
        Some(stats.page_number_only as f64 / stats.total_examples as f64)
    } else {
        None
    };

    stats
}
