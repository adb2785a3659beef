//! Field-level scoring of a matched page pair.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::eval::matcher::match_entries;
use crate::eval::EvalConfig;
use crate::normalize::normalize_field;
use crate::record::{EntryField, PageRecord};
use crate::similarity::Scorer;

/// TP/FP/FN counters and derived rates for one field.
///
/// Derived rates are `0.0` exactly when their denominator is zero, and are
/// rounded to three decimal places for reporting stability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetrics {
    /// True positives.
    #[serde(rename = "TP")]
    pub true_positives: u32,
    /// False positives.
    #[serde(rename = "FP")]
    pub false_positives: u32,
    /// False negatives.
    #[serde(rename = "FN")]
    pub false_negatives: u32,
    /// `TP / (TP + FP)`.
    pub precision: f64,
    /// `TP / (TP + FN)`.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// `TP / (TP + FP + FN)`.
    pub accuracy: f64,
}

impl FieldMetrics {
    fn add(&mut self, tp: u32, fp: u32, fn_count: u32) {
        self.true_positives += tp;
        self.false_positives += fp;
        self.false_negatives += fn_count;
    }

    /// Compare one (ground-truth, predicted) value pair, both already
    /// normalized (empty string = absent):
    ///
    /// - both absent: no counters change,
    /// - truth absent, prediction present: FP,
    /// - truth present, prediction absent: FN,
    /// - both present, similarity at or above cutoff: TP,
    /// - both present, similarity below cutoff: FP and FN (a wrong value is
    ///   both a missed truth and a spurious prediction).
    fn score_pair(&mut self, truth: &str, predicted: &str, scorer: Scorer, cutoff: f64) {
        if truth.is_empty() {
            if !predicted.is_empty() {
                self.add(0, 1, 0);
            }
        } else if predicted.is_empty() {
            self.add(0, 0, 1);
        } else if scorer(truth, predicted) >= cutoff {
            self.add(1, 0, 0);
        } else {
            self.add(0, 1, 1);
        }
    }

    /// Compute the derived rates from the final counters.
    pub fn finalize(&mut self) {
        let tp = f64::from(self.true_positives);
        let fp = f64::from(self.false_positives);
        let fn_count = f64::from(self.false_negatives);

        let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
        let recall = if tp + fn_count > 0.0 { tp / (tp + fn_count) } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let accuracy = if tp + fp + fn_count > 0.0 {
            tp / (tp + fp + fn_count)
        } else {
            0.0
        };

        self.precision = round3(precision);
        self.recall = round3(recall);
        self.f1 = round3(f1);
        self.accuracy = round3(accuracy);
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Per-field metrics for one page comparison, keyed by field name
/// (`page_number`, `deanery`, and the entry fields).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Metrics per field name.
    pub fields: BTreeMap<String, FieldMetrics>,
}

impl PageMetrics {
    fn with_fields(config: &EvalConfig) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("page_number".to_string(), FieldMetrics::default());
        fields.insert("deanery".to_string(), FieldMetrics::default());
        for field in &config.entry_fields {
            fields.insert(field.as_label().to_string(), FieldMetrics::default());
        }
        Self { fields }
    }

    /// Metrics for a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldMetrics> {
        self.fields.get(field)
    }

    fn field_mut(&mut self, field: &str) -> &mut FieldMetrics {
        self.fields.entry(field.to_string()).or_default()
    }

    fn finalize(&mut self) {
        for metrics in self.fields.values_mut() {
            metrics.finalize();
        }
    }
}

/// Score a predicted page record against ground truth.
///
/// Page-level scalars are compared directly; entries are paired by
/// [`match_entries`] first. Each successful entry match contributes one
/// `parish` true positive by construction, and the remaining entry fields of
/// the pair are compared value-by-value. Every field of an unmatched
/// ground-truth entry counts as a false negative; every field of an unmatched
/// prediction counts as a false positive.
///
/// All values are normalized (diacritics stripped, lowercased, edge
/// punctuation removed) on both sides before comparison. The function never
/// fails: empty pages and empty entry lists are valid inputs.
#[must_use]
pub fn evaluate_page(predicted: &PageRecord, ground_truth: &PageRecord, config: &EvalConfig) -> PageMetrics {
    let mut metrics = PageMetrics::with_fields(config);

    // Page-level scalars.
    let scalar_pairs = [
        ("page_number", &ground_truth.page_number, &predicted.page_number),
        ("deanery", &ground_truth.deanery, &predicted.deanery),
    ];
    for (field, truth_value, predicted_value) in scalar_pairs {
        let truth = normalize_field(truth_value.as_deref());
        let prediction = normalize_field(predicted_value.as_deref());
        metrics
            .field_mut(field)
            .score_pair(&truth, &prediction, config.scorer, config.cutoff);
    }

    // Entries under the fuzzy correspondence.
    let outcome = match_entries(&predicted.entries, &ground_truth.entries, config);

    for &(truth_index, predicted_index) in &outcome.pairs {
        let truth_entry = &ground_truth.entries[truth_index];
        let predicted_entry = &predicted.entries[predicted_index];

        for &field in &config.entry_fields {
            if field == EntryField::Parish {
                // The match itself is the evidence of a correct parish.
                metrics.field_mut(field.as_label()).add(1, 0, 0);
                continue;
            }
            let truth = normalize_field(truth_entry.field(field));
            let prediction = normalize_field(predicted_entry.field(field));
            metrics
                .field_mut(field.as_label())
                .score_pair(&truth, &prediction, config.scorer, config.cutoff);
        }
    }

    for _ in &outcome.unmatched_truth {
        for &field in &config.entry_fields {
            metrics.field_mut(field.as_label()).add(0, 0, 1);
        }
    }
    for _ in &outcome.unmatched_predicted {
        for &field in &config.entry_fields {
            metrics.field_mut(field.as_label()).add(0, 1, 0);
        }
    }

    metrics.finalize();
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Entry;

    fn counts(metrics: &PageMetrics, field: &str) -> (u32, u32, u32) {
        let m = metrics.get(field).unwrap();
        (m.true_positives, m.false_positives, m.false_negatives)
    }

    #[test]
    fn perfect_page_scores_all_true_positives() {
        let page = PageRecord {
            page_number: Some("41".into()),
            deanery: Some("Mielec".into()),
            entries: vec![Entry::new("Czermin")
                .with_dedication("S. Clementem")
                .with_building_material("mur.")],
        };
        let metrics = evaluate_page(&page, &page, &EvalConfig::default());

        for field in ["page_number", "deanery", "parish", "dedication", "building_material"] {
            assert_eq!(counts(&metrics, field), (1, 0, 0), "field {field}");
            let m = metrics.get(field).unwrap();
            assert_eq!(m.precision, 1.0);
            assert_eq!(m.recall, 1.0);
            assert_eq!(m.f1, 1.0);
            assert_eq!(m.accuracy, 1.0);
        }
    }

    #[test]
    fn value_mismatch_counts_both_fp_and_fn() {
        let truth = PageRecord {
            page_number: None,
            deanery: None,
            entries: vec![Entry::new("Głuchów")
                .with_dedication("S. Mathias Ap.")
                .with_building_material("lig.")],
        };
        let predicted = PageRecord {
            page_number: None,
            deanery: None,
            entries: vec![Entry::new("Głuchow")
                .with_dedication("S. Mathias Ap.")
                .with_building_material("mur.")],
        };

        let metrics = evaluate_page(&predicted, &truth, &EvalConfig::default());
        assert_eq!(counts(&metrics, "parish"), (1, 0, 0));
        assert_eq!(counts(&metrics, "dedication"), (1, 0, 0));
        assert_eq!(counts(&metrics, "building_material"), (0, 1, 1));
        assert_eq!(metrics.get("building_material").unwrap().f1, 0.0);
    }

    #[test]
    fn unmatched_entries_penalize_every_field() {
        // 2 truth entries, 3 predictions, only one fuzzy pair.
        let truth = PageRecord {
            page_number: None,
            deanery: None,
            entries: vec![Entry::new("Czermin"), Entry::new("Wrzawa")],
        };
        let predicted = PageRecord {
            page_number: None,
            deanery: None,
            entries: vec![Entry::new("Czermin"), Entry::new("Borki"), Entry::new("Trzesn")],
        };

        let metrics = evaluate_page(&predicted, &truth, &EvalConfig::default());
        assert_eq!(counts(&metrics, "parish"), (1, 2, 1));
        assert_eq!(counts(&metrics, "dedication"), (0, 2, 1));
        assert_eq!(counts(&metrics, "building_material"), (0, 2, 1));
    }

    #[test]
    fn absent_values_score_asymmetrically() {
        let truth = PageRecord {
            page_number: Some("41".into()),
            deanery: None,
            entries: vec![],
        };
        let predicted = PageRecord {
            page_number: None,
            deanery: Some("Mielec".into()),
            entries: vec![],
        };

        let metrics = evaluate_page(&predicted, &truth, &EvalConfig::default());
        // truth present, prediction absent
        assert_eq!(counts(&metrics, "page_number"), (0, 0, 1));
        // truth absent, prediction present
        assert_eq!(counts(&metrics, "deanery"), (0, 1, 0));
    }

    #[test]
    fn blank_pages_leave_all_counters_zero() {
        let blank = PageRecord::default();
        let metrics = evaluate_page(&blank, &blank, &EvalConfig::default());

        for (field, m) in &metrics.fields {
            assert_eq!((m.true_positives, m.false_positives, m.false_negatives), (0, 0, 0));
            assert_eq!(m.precision, 0.0, "field {field}");
            assert_eq!(m.recall, 0.0);
            assert_eq!(m.f1, 0.0);
            assert_eq!(m.accuracy, 0.0);
        }
    }

    #[test]
    fn rates_are_rounded_to_three_places() {
        // 1 TP, 2 FP -> precision 1/3.
        let truth = PageRecord {
            page_number: None,
            deanery: None,
            entries: vec![Entry::new("Czermin")],
        };
        let predicted = PageRecord {
            page_number: None,
            deanery: None,
            entries: vec![Entry::new("Czermin"), Entry::new("Borki"), Entry::new("Trzesn")],
        };

        let metrics = evaluate_page(&predicted, &truth, &EvalConfig::default());
        let parish = metrics.get("parish").unwrap();
        assert_eq!(parish.precision, 0.333);
        assert_eq!(parish.recall, 1.0);
        assert_eq!(parish.f1, 0.5);
        assert_eq!(parish.accuracy, 0.333);
    }

    #[test]
    fn metric_bounds_hold() {
        let truth = PageRecord {
            page_number: Some("9".into()),
            deanery: Some("Mielec".into()),
            entries: vec![Entry::new("A"), Entry::new("B")],
        };
        let predicted = PageRecord {
            page_number: Some("14".into()),
            deanery: None,
            entries: vec![Entry::new("zzz")],
        };

        let metrics = evaluate_page(&predicted, &truth, &EvalConfig::default());
        for m in metrics.fields.values() {
            for value in [m.precision, m.recall, m.f1, m.accuracy] {
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn serializes_with_counter_names() {
        let mut metrics = FieldMetrics::default();
        metrics.add(2, 1, 0);
        metrics.finalize();
        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"TP\":2"));
        assert!(json.contains("\"FP\":1"));
        assert!(json.contains("\"FN\":0"));
    }
}
