//! BIO-tag-to-structured-record parsing pipeline.
//!
//! Converts the flat per-token output of a sequence-labeling model into a
//! nested [`PageRecord`]:
//!
//! ```text
//! (words, boxes, labels) -> reading-order sort -> span assembly -> page build
//! ```
//!
//! Each stage is a pure function and usable on its own; [`parse_page`] is the
//! composed pipeline. The assembler tolerates malformed labels (dropping the
//! token), while [`validate_bio_sequence`] reports them for dataset-quality
//! checks without affecting parsing.
//!
//! # Example
//!
//! ```
//! use schematism::parser::parse_page;
//!
//! let words = ["41", "Czermin", "mur.", "S.", "Clementem"];
//! let labels = [
//!     "B-page_number",
//!     "B-parish",
//!     "B-building_material",
//!     "B-dedication",
//!     "I-dedication",
//! ];
//!
//! let page = parse_page(&words, &[], &labels);
//! assert_eq!(page.page_number.as_deref(), Some("41"));
//! assert_eq!(page.entries[0].parish.as_deref(), Some("Czermin"));
//! assert_eq!(page.entries[0].dedication.as_deref(), Some("S. Clementem"));
//! ```

mod layout;
mod page;
mod spans;
mod validate;

pub use layout::{sort_reading_order, BoundingBox};
pub use page::build_page;
pub use spans::{assemble_spans, Span};
pub use validate::validate_bio_sequence;

use crate::record::PageRecord;

/// Run the full parsing pipeline over one page.
///
/// `boxes` may be empty (text-only OCR); the reading-order sort degrades to a
/// no-op when boxes are absent or misaligned with the word list.
#[must_use]
pub fn parse_page<S: AsRef<str>>(words: &[S], boxes: &[BoundingBox], labels: &[S]) -> PageRecord {
    let (words, _boxes, labels) = sort_reading_order(words, boxes, labels);
    let spans = assemble_spans(&words, &labels);
    build_page(&spans)
}
