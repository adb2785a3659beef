//! # schematism
//!
//! Structured record extraction from OCR'd historical schematisms.
//!
//! Schematisms are 19th-century ecclesiastical directories listing the
//! parishes of a deanery page by page. Given per-word OCR output and BIO
//! labels from a token-classification model, this crate rebuilds the page's
//! logical structure, and scores model predictions against ground truth with
//! OCR-tolerant fuzzy matching.
//!
//! - **Parsing**: reading-order sort, BIO span assembly, page record
//!   construction, BIO sequence validation
//! - **Evaluation**: fuzzy entry matching, per-field TP/FP/FN scoring,
//!   dataset-level aggregation and composition statistics
//! - **Canonicalization**: mapping historical-Latin field values onto a
//!   canonical vocabulary
//!
//! ## Quick Start
//!
//! ```rust
//! use schematism::parser::{parse_page, BoundingBox};
//!
//! let words = vec!["41", "Czermin", "mur."];
//! let boxes = vec![
//!     BoundingBox::new(10, 5, 30, 15),
//!     BoundingBox::new(12, 40, 80, 52),
//!     BoundingBox::new(90, 40, 120, 52),
//! ];
//! let labels = vec!["B-page_number", "B-parish", "B-building_material"];
//!
//! let page = parse_page(&words, &boxes, &labels);
//! assert_eq!(page.page_number.as_deref(), Some("41"));
//! assert_eq!(page.entries[0].parish.as_deref(), Some("Czermin"));
//! assert_eq!(page.entries[0].building_material.as_deref(), Some("mur."));
//! ```
//!
//! ## Evaluation
//!
//! ```rust
//! use schematism::eval::{evaluate_page, EvalConfig};
//! use schematism::record::{Entry, PageRecord};
//!
//! let truth = PageRecord {
//!     page_number: Some("41".into()),
//!     deanery: None,
//!     entries: vec![Entry::new("Głuchów")],
//! };
//! let predicted = PageRecord {
//!     page_number: Some("41".into()),
//!     deanery: None,
//!     entries: vec![Entry::new("Głuchow")], // OCR dropped a diacritic
//! };
//!
//! let metrics = evaluate_page(&predicted, &truth, &EvalConfig::default());
//! assert_eq!(metrics.get("parish").unwrap().true_positives, 1);
//! ```
//!
//! ## Design
//!
//! - **Pure core**: parsing and scoring consume and produce in-memory data;
//!   OCR engines and models sit behind the traits in [`provider`]
//! - **Fuzzy by default**: all text comparison runs through diacritic- and
//!   case-insensitive normalization plus token-set similarity
//! - **Strict counts, derived rates**: scoring accumulates integer TP/FP/FN
//!   and derives precision/recall/F1/accuracy at the end

#![warn(missing_docs)]

pub mod cache;
mod error;
pub mod eval;
pub mod mapping;
pub mod normalize;
pub mod parser;
pub mod provider;
pub mod record;
pub mod similarity;

pub use error::{Error, Result};
pub use record::{Entry, EntityKind, EntryField, ModelOutput, PageRecord, NO_INFORMATION};

/// Commonly used items, for glob import in binaries and tests.
pub mod prelude {
    pub use crate::eval::{aggregate_pages, evaluate_page, EvalConfig, PageMetrics};
    pub use crate::mapping::ValueMapper;
    pub use crate::normalize::normalize_text;
    pub use crate::parser::{parse_page, validate_bio_sequence, BoundingBox, Span};
    pub use crate::record::{Entry, EntryField, PageRecord};
    pub use crate::{Error, Result};
}
