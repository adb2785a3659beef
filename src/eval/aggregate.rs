//! Aggregation of per-page metrics across a dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::eval::scorer::PageMetrics;

/// Mean/min/max summary of one metric across pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Minimum observed value.
    pub min: f64,
    /// Maximum observed value.
    pub max: f64,
    /// Number of samples.
    pub n: usize,
}

impl MetricSummary {
    /// Summarize a slice of samples. Empty input yields all zeros.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let sum: f64 = samples.iter().sum();
        Self {
            mean: sum / samples.len() as f64,
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            n: samples.len(),
        }
    }
}

/// Per-field summaries of the four derived rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Precision across pages.
    pub precision: MetricSummary,
    /// Recall across pages.
    pub recall: MetricSummary,
    /// F1 across pages.
    pub f1: MetricSummary,
    /// Accuracy across pages.
    pub accuracy: MetricSummary,
}

/// Aggregate per-page metrics into per-field mean/min/max summaries.
///
/// A field contributes a sample for every page whose metrics mention it;
/// pages evaluated with different field sets simply contribute to different
/// keys.
#[must_use]
pub fn aggregate_pages(pages: &[PageMetrics]) -> BTreeMap<String, FieldSummary> {
    let mut samples: BTreeMap<String, [Vec<f64>; 4]> = BTreeMap::new();

    for page in pages {
        for (field, metrics) in &page.fields {
            let entry = samples.entry(field.clone()).or_default();
            entry[0].push(metrics.precision);
            entry[1].push(metrics.recall);
            entry[2].push(metrics.f1);
            entry[3].push(metrics.accuracy);
        }
    }

    samples
        .into_iter()
        .map(|(field, [precision, recall, f1, accuracy])| {
            (
                field,
                FieldSummary {
                    precision: MetricSummary::from_samples(&precision),
                    recall: MetricSummary::from_samples(&recall),
                    f1: MetricSummary::from_samples(&f1),
                    accuracy: MetricSummary::from_samples(&accuracy),
                },
            )
        })
        .collect()
}
