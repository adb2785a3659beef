//! Reading-order sorting of OCR tokens.
//!
//! OCR providers and token-classification models emit tokens in
//! provider-dependent order. For the single-column layouts this crate
//! targets, sorting by the box's top edge and then its left edge recovers a
//! usable top-to-bottom, left-to-right reading order.

use serde::{Deserialize, Serialize};

/// An axis-aligned word bounding box in the 0-1000 normalized page space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge.
    pub x2: i32,
    /// Bottom edge.
    pub y2: i32,
}

impl BoundingBox {
    /// Create a box from its corner coordinates.
    #[must_use]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<[i32; 4]> for BoundingBox {
    fn from(coords: [i32; 4]) -> Self {
        Self::new(coords[0], coords[1], coords[2], coords[3])
    }
}

/// Reorder parallel `(words, boxes, labels)` sequences by ascending
/// `(y1, x1)`.
///
/// When boxes are absent or their length does not match the word list, the
/// input passes through unchanged; text-only OCR output must still flow
/// through the pipeline. The sort is stable, so tokens on the same line keep
/// their OCR order when their left edges tie.
#[must_use]
pub fn sort_reading_order<S: AsRef<str>>(
    words: &[S],
    boxes: &[BoundingBox],
    labels: &[S],
) -> (Vec<String>, Vec<BoundingBox>, Vec<String>) {
    let passthrough = || {
        (
            words.iter().map(|w| w.as_ref().to_string()).collect(),
            boxes.to_vec(),
            labels.iter().map(|l| l.as_ref().to_string()).collect(),
        )
    };

    if boxes.is_empty() || boxes.len() != words.len() || labels.len() != words.len() {
        return passthrough();
    }

    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by_key(|&i| (boxes[i].y1, boxes[i].x1));

    (
        order.iter().map(|&i| words[i].as_ref().to_string()).collect(),
        order.iter().map(|&i| boxes[i]).collect(),
        order.iter().map(|&i| labels[i].as_ref().to_string()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_top_to_bottom_then_left_to_right() {
        let words = ["right", "below", "left"];
        let labels = ["O", "O", "O"];
        let boxes = [
            BoundingBox::new(500, 10, 520, 20),
            BoundingBox::new(10, 200, 30, 210),
            BoundingBox::new(10, 10, 30, 20),
        ];

        let (sorted_words, sorted_boxes, _) = sort_reading_order(&words, &boxes, &labels);
        assert_eq!(sorted_words, ["left", "right", "below"]);
        assert_eq!(sorted_boxes[0].x1, 10);
    }

    #[test]
    fn stable_for_equal_positions() {
        let words = ["a", "b"];
        let labels = ["O", "O"];
        let boxes = [BoundingBox::new(5, 5, 6, 6); 2];

        let (sorted_words, _, _) = sort_reading_order(&words, &boxes, &labels);
        assert_eq!(sorted_words, ["a", "b"]);
    }

    #[test]
    fn passthrough_without_boxes() {
        let words = ["b", "a"];
        let labels = ["B-parish", "O"];

        let (sorted_words, sorted_boxes, sorted_labels) =
            sort_reading_order(&words, &[], &labels);
        assert_eq!(sorted_words, ["b", "a"]);
        assert!(sorted_boxes.is_empty());
        assert_eq!(sorted_labels, ["B-parish", "O"]);
    }

    #[test]
    fn passthrough_on_length_mismatch() {
        let words = ["a", "b", "c"];
        let labels = ["O", "O", "O"];
        let boxes = [BoundingBox::new(9, 9, 10, 10)];

        let (sorted_words, _, _) = sort_reading_order(&words, &boxes, &labels);
        assert_eq!(sorted_words, ["a", "b", "c"]);
    }
}
