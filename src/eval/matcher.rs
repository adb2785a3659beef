//! Greedy entry matching between predicted and ground-truth entry lists.

use tracing::debug;

use crate::eval::EvalConfig;
use crate::normalize::normalize_field;
use crate::record::Entry;
use crate::similarity::extract_one;

/// Result of matching predicted entries against ground-truth entries.
///
/// All three collections hold indices into the input slices, so the
/// conservation invariants hold by construction:
/// `pairs.len() + unmatched_truth.len() == ground_truth.len()` and
/// `pairs.len() + unmatched_predicted.len() == predicted.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Matched `(ground_truth_index, predicted_index)` pairs, in ground-truth
    /// list order.
    pub pairs: Vec<(usize, usize)>,
    /// Ground-truth entries with no prediction above the cutoff (false
    /// negatives).
    pub unmatched_truth: Vec<usize>,
    /// Predicted entries never claimed by any ground-truth entry (false
    /// positives).
    pub unmatched_predicted: Vec<usize>,
}

/// Greedily pair ground-truth entries with predicted entries by fuzzy
/// similarity on the normalized `parish` field.
///
/// Ground-truth entries are processed in list order against a shrinking pool
/// of available predictions, so no prediction is matched twice. A match
/// requires the score to reach `config.cutoff`. Ties are broken
/// deterministically: highest score wins, earliest pool position on equal
/// scores.
///
/// Matching failure is a scoring outcome, never an error; degenerate inputs
/// (either list empty) simply leave everything unmatched.
#[must_use]
pub fn match_entries(predicted: &[Entry], ground_truth: &[Entry], config: &EvalConfig) -> MatchOutcome {
    let predicted_names: Vec<String> = predicted
        .iter()
        .map(|e| normalize_field(e.parish.as_deref()))
        .collect();

    // Pool of still-available predicted indices.
    let mut available: Vec<usize> = (0..predicted.len()).collect();
    let mut outcome = MatchOutcome::default();

    for (truth_index, truth_entry) in ground_truth.iter().enumerate() {
        let truth_name = normalize_field(truth_entry.parish.as_deref());
        let choices: Vec<&str> = available.iter().map(|&i| predicted_names[i].as_str()).collect();

        match extract_one(&truth_name, &choices, config.scorer, config.cutoff) {
            Some((pool_position, score)) => {
                let predicted_index = available.remove(pool_position);
                debug!(
                    truth = %truth_name,
                    predicted = %predicted_names[predicted_index],
                    score,
                    "entry matched"
                );
                outcome.pairs.push((truth_index, predicted_index));
            }
            None => {
                debug!(truth = %truth_name, "no entry match above cutoff");
                outcome.unmatched_truth.push(truth_index);
            }
        }
    }

    outcome.unmatched_predicted = available;
    outcome
}
