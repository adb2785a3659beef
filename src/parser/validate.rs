//! BIO tag-grammar validation.
//!
//! A pure diagnostic pass over a label sequence, independent of the span
//! assembler. The assembler is deliberately tolerant of malformed input;
//! dataset-quality checks use this validator to surface what the assembler
//! silently absorbs. Issues are reported, never raised, and processing is
//! never halted.

/// Check a label sequence for BIO grammar violations.
///
/// Returns human-readable issue strings; an empty list means the sequence is
/// valid. One position can produce multiple issues (e.g. an invalid prefix
/// that also mismatches the previous entity), which is intentional for
/// exhaustive diagnostics.
///
/// Checks per position (skipping `"O"`):
///
/// 1. missing `-` separator (malformed tag),
/// 2. prefix outside `{B, I}`,
/// 3. `I` at the start of the sequence or immediately after `"O"`,
/// 4. `I` whose entity type differs from the previous BIO tag's type.
#[must_use]
pub fn validate_bio_sequence<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut issues = Vec::new();

    for (i, label) in labels.iter().enumerate() {
        let label = label.as_ref();
        if label == "O" {
            continue;
        }

        let Some((prefix, kind)) = label.split_once('-') else {
            issues.push(format!(
                "Position {i}: Invalid tag format '{label}' (missing BIO prefix)"
            ));
            continue;
        };

        if prefix != "B" && prefix != "I" {
            issues.push(format!(
                "Position {i}: Invalid BIO prefix '{prefix}' in '{label}'"
            ));
        }

        if prefix == "I" {
            if i == 0 {
                issues.push(format!(
                    "Position {i}: I-tag '{label}' has no preceding tag"
                ));
            } else {
                let prev = labels[i - 1].as_ref();
                if prev == "O" {
                    issues.push(format!("Position {i}: I-tag '{label}' follows O tag"));
                } else if let Some((_, prev_kind)) = prev.split_once('-') {
                    if prev_kind != kind {
                        issues.push(format!(
                            "Position {i}: I-tag '{label}' doesn't match previous entity '{prev_kind}'"
                        ));
                    }
                }
            }
        }
    }

    issues
}
