//! Fuzzy-matching evaluation of predicted page records against ground truth.
//!
//! Two [`PageRecord`]s for the same physical page carry no stable
//! identifiers, so evaluation proceeds in two steps:
//!
//! 1. [`match_entries`] establishes a one-to-one entry correspondence by
//!    greedy best-fuzzy-match on the normalized `parish` field, subject to a
//!    similarity cutoff.
//! 2. [`evaluate_page`] scores every field (page-level scalars plus entry
//!    fields under that correspondence) into per-field TP/FP/FN counters and
//!    derives precision, recall, F1, and accuracy.
//!
//! # Example
//!
//! ```
//! use schematism::eval::{evaluate_page, EvalConfig};
//! use schematism::{Entry, PageRecord};
//!
//! let truth = PageRecord {
//!     page_number: Some("41".into()),
//!     deanery: None,
//!     entries: vec![Entry::new("Głuchów").with_building_material("lig.")],
//! };
//! let prediction = PageRecord {
//!     page_number: Some("41".into()),
//!     deanery: None,
//!     entries: vec![Entry::new("Głuchow").with_building_material("mur.")],
//! };
//!
//! let metrics = evaluate_page(&prediction, &truth, &EvalConfig::default());
//! assert_eq!(metrics.get("parish").unwrap().true_positives, 1);
//! assert_eq!(metrics.get("building_material").unwrap().false_positives, 1);
//! ```

mod aggregate;
mod matcher;
mod scorer;
mod stats;

pub use aggregate::{aggregate_pages, FieldSummary, MetricSummary};
pub use matcher::{match_entries, MatchOutcome};
pub use scorer::{evaluate_page, FieldMetrics, PageMetrics};
pub use stats::{compute_dataset_stats, DatasetStats, SchematismCounts};

use crate::record::EntryField;
use crate::similarity::{token_set_ratio, Scorer};

/// Default similarity cutoff on the 0-100 scale.
pub const DEFAULT_CUTOFF: f64 = 80.0;

/// Evaluation configuration: the fuzzy scorer, its cutoff, and the entry
/// fields to score.
///
/// Constructed once and passed by reference into the matcher and scorer;
/// there is no ambient global configuration.
#[derive(Clone)]
pub struct EvalConfig {
    /// Minimum similarity (0-100) for a value pair or entry match to count.
    pub cutoff: f64,
    /// Fuzzy scorer used for both entry matching and field comparison.
    pub scorer: Scorer,
    /// Entry fields to score, parish first (it anchors the matching).
    pub entry_fields: Vec<EntryField>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            scorer: token_set_ratio,
            entry_fields: EntryField::ALL.to_vec(),
        }
    }
}

impl EvalConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity cutoff.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the fuzzy scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }
}
