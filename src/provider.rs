//! External collaborator seams: OCR, sequence labeling, LLM extraction.
//!
//! The core consumes and produces only in-memory data; everything that
//! touches a model, a network, or a disk sits behind one of these narrow
//! traits and is wired in by the orchestration layer. [`MockLabeler`] is the
//! only implementation shipped here, for tests.

use crate::error::{Error, Result};
use crate::parser::BoundingBox;
use crate::record::ModelOutput;

/// One page of OCR output: word strings plus optional parallel boxes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OcrPage {
    /// Recognized words in provider order.
    pub words: Vec<String>,
    /// Word boxes in the 0-1000 normalized space; empty in text-only mode.
    pub boxes: Vec<BoundingBox>,
}

/// An OCR engine returning per-word text and boxes for a page image.
pub trait OcrProvider {
    /// Recognize one page image.
    fn recognize(&self, image: &[u8]) -> Result<OcrPage>;

    /// Recognize a page as one concatenated string (text-only mode).
    fn recognize_text(&self, image: &[u8]) -> Result<String> {
        Ok(self.recognize(image)?.words.join(" "))
    }
}

/// Fixed id-to-label mapping owned by a sequence-labeling model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    labels: Vec<String>,
}

impl LabelMap {
    /// Create a map where the label at index `i` corresponds to id `i`.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// The label for an id, if in range.
    #[must_use]
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// The id for a label, if present.
    #[must_use]
    pub fn id(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Resolve a sequence of label ids to label strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when an id is outside the map.
    pub fn resolve(&self, ids: &[usize]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.label(id).map(str::to_string).ok_or_else(|| {
                    Error::invalid_input(format!(
                        "label id {id} out of range (map has {} labels)",
                        self.labels.len()
                    ))
                })
            })
            .collect()
    }

    /// Number of labels in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A token-classification model assigning one label id per word.
pub trait SequenceLabeler {
    /// Label ids for the given words (and boxes, when the model is
    /// layout-aware).
    fn label_ids(&self, words: &[String], boxes: &[BoundingBox]) -> Result<Vec<usize>>;

    /// The model's id-to-label mapping.
    fn label_map(&self) -> &LabelMap;

    /// Label strings for the given words, resolved through the map.
    fn labels(&self, words: &[String], boxes: &[BoundingBox]) -> Result<Vec<String>> {
        let ids = self.label_ids(words, boxes)?;
        self.label_map().resolve(&ids)
    }
}

/// A vision/text model producing a structured page record for an image.
pub trait PageExtractor {
    /// Extract a page record from an image, optionally with OCR text and a
    /// rendered hint block. The output may still be a raw JSON string; the
    /// caller resolves it through [`ModelOutput::into_record`].
    fn extract(&self, image: &[u8], text: Option<&str>) -> Result<ModelOutput>;
}

/// A canned sequence labeler for tests.
///
/// # Example
///
/// ```
/// use schematism::provider::{LabelMap, MockLabeler, SequenceLabeler};
///
/// let mock = MockLabeler::new(LabelMap::new(vec!["O".into(), "B-parish".into()]))
///     .with_ids(vec![1, 0]);
/// let words = vec!["Czermin".to_string(), "x".to_string()];
/// let labels = mock.labels(&words, &[]).unwrap();
/// assert_eq!(labels, ["B-parish", "O"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockLabeler {
    map: LabelMap,
    ids: Vec<usize>,
}

impl MockLabeler {
    /// Create a mock with the given label map.
    #[must_use]
    pub fn new(map: LabelMap) -> Self {
        Self { map, ids: Vec::new() }
    }

    /// Set the label ids to return on every call.
    #[must_use]
    pub fn with_ids(mut self, ids: Vec<usize>) -> Self {
        self.ids = ids;
        self
    }
}

impl SequenceLabeler for MockLabeler {
    fn label_ids(&self, _words: &[String], _boxes: &[BoundingBox]) -> Result<Vec<usize>> {
        Ok(self.ids.clone())
    }

    fn label_map(&self) -> &LabelMap {
        &self.map
    }
}
