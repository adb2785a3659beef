//! Span assembly: flat BIO-labeled tokens into typed entity spans.

/// A contiguous run of same-type tokens merged into one labeled text unit.
///
/// The kind stays a raw string because the label inventory is owned by the
/// upstream model; [`build_page`](crate::parser::build_page) parses it into
/// an [`EntityKind`](crate::EntityKind) when routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Entity type suffix of the BIO label (e.g. `"parish"`).
    pub kind: String,
    /// Space-joined text of the constituent tokens.
    pub text: String,
}

impl Span {
    /// Create a span.
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// Convert parallel `(words, labels)` sequences into an ordered span list.
///
/// The state machine keeps one open buffer at a time:
///
/// - `"O"` flushes the open buffer, if any.
/// - A label without a `-` separator is malformed and the token is dropped;
///   the open buffer is untouched. Strict diagnostics live in
///   [`validate_bio_sequence`](crate::parser::validate_bio_sequence).
/// - `B-X`, or any label whose type differs from the open buffer's type,
///   flushes the buffer and opens a new one of type `X`. An `I-X` with no
///   open buffer therefore starts a span by itself (tolerant behavior).
/// - `I-X` matching the open type appends to the buffer.
/// - End of sequence flushes the remaining buffer.
///
/// Every token contributes to exactly one span or is dropped; span order
/// follows input order.
#[must_use]
pub fn assemble_spans<S: AsRef<str>>(words: &[S], labels: &[S]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut open_kind: Option<&str> = None;

    let mut flush = |buffer: &mut Vec<&str>, open_kind: &mut Option<&str>, spans: &mut Vec<Span>| {
        if let Some(kind) = open_kind.take() {
            if !buffer.is_empty() {
                spans.push(Span::new(kind, buffer.join(" ")));
            }
            buffer.clear();
        }
    };

    for (word, label) in words.iter().zip(labels.iter()) {
        let word = word.as_ref();
        let label = label.as_ref();

        if label == "O" {
            flush(&mut buffer, &mut open_kind, &mut spans);
            continue;
        }

        let Some((prefix, kind)) = label.split_once('-') else {
            // Malformed label: drop the token, keep the buffer.
            continue;
        };

        if prefix == "B" || open_kind != Some(kind) {
            flush(&mut buffer, &mut open_kind, &mut spans);
            open_kind = Some(kind);
            buffer.push(word);
        } else {
            buffer.push(word);
        }
    }

    flush(&mut buffer, &mut open_kind, &mut spans);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_contiguous_same_type_tokens() {
        let words = ["S.", "Clementem", "P.", "M."];
        let labels = ["B-dedication", "I-dedication", "I-dedication", "I-dedication"];
        let spans = assemble_spans(&words, &labels);
        assert_eq!(spans, vec![Span::new("dedication", "S. Clementem P. M.")]);
    }

    #[test]
    fn outside_tokens_split_spans() {
        let words = ["Czermin", "p.", "Gluchow"];
        let labels = ["B-parish", "O", "B-parish"];
        let spans = assemble_spans(&words, &labels);
        assert_eq!(
            spans,
            vec![Span::new("parish", "Czermin"), Span::new("parish", "Gluchow")]
        );
    }

    #[test]
    fn type_switch_without_outside_flushes() {
        let words = ["Czermin", "mur."];
        let labels = ["B-parish", "I-building_material"];
        let spans = assemble_spans(&words, &labels);
        assert_eq!(
            spans,
            vec![
                Span::new("parish", "Czermin"),
                Span::new("building_material", "mur."),
            ]
        );
    }

    #[test]
    fn orphan_inside_tag_starts_span() {
        // I-parish after O still opens a buffer; B-parish then flushes it.
        let words = ["x", "Czermin", "Gluchow"];
        let labels = ["O", "I-parish", "B-parish"];
        let spans = assemble_spans(&words, &labels);
        assert_eq!(
            spans,
            vec![Span::new("parish", "Czermin"), Span::new("parish", "Gluchow")]
        );
    }

    #[test]
    fn malformed_labels_are_dropped() {
        let words = ["Czermin", "junk", "Kamien"];
        let labels = ["B-parish", "parish", "I-parish"];
        let spans = assemble_spans(&words, &labels);
        // Malformed token dropped; the buffer survives and "Kamien" appends.
        assert_eq!(spans, vec![Span::new("parish", "Czermin Kamien")]);
    }

    #[test]
    fn trailing_buffer_is_flushed() {
        let words = ["41"];
        let labels = ["B-page_number"];
        assert_eq!(
            assemble_spans(&words, &labels),
            vec![Span::new("page_number", "41")]
        );
    }

    #[test]
    fn empty_and_all_outside_inputs() {
        let none: [&str; 0] = [];
        assert!(assemble_spans(&none, &none).is_empty());
        assert!(assemble_spans(&["a", "b"], &["O", "O"]).is_empty());
    }

    #[test]
    fn reassembling_spans_is_idempotent() {
        let words = ["41", "Czermin", "mur.", "S.", "Clementem"];
        let labels = [
            "B-page_number",
            "B-parish",
            "B-building_material",
            "B-dedication",
            "I-dedication",
        ];
        let spans = assemble_spans(&words, &labels);

        let span_words: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        let span_labels: Vec<String> = spans.iter().map(|s| format!("B-{}", s.kind)).collect();
        let reassembled = assemble_spans(&span_words, &span_labels.iter().map(String::as_str).collect::<Vec<_>>());

        assert_eq!(reassembled, spans);
    }
}
