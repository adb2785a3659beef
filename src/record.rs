//! Structured page records for schematism pages.
//!
//! A [`PageRecord`] is the canonical structured form of one scanned page:
//! page-level scalars (`page_number`, `deanery`) plus a list of parish
//! [`Entry`] records. Both extraction pipelines (token classification and
//! vision LLM) and the ground-truth source produce this shape, so evaluation
//! only ever compares `PageRecord` against `PageRecord`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sentinel used by the ground-truth annotations to mean "no information".
///
/// Ground-truth JSON replaces missing values with this string; it must be
/// normalized to `null` before any record is used.
pub const NO_INFORMATION: &str = "[brak_informacji]";

/// Entity types recognized on a schematism page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Printed page number (page-level scalar).
    PageNumber,
    /// Deanery heading (page-level scalar).
    Deanery,
    /// Parish name; every new parish span opens a new entry.
    Parish,
    /// Church dedication (patron saint).
    Dedication,
    /// Building material abbreviation (e.g. "mur.", "lig.").
    BuildingMaterial,
}

impl EntityKind {
    /// All entity kinds, in routing order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::PageNumber,
        EntityKind::Deanery,
        EntityKind::Parish,
        EntityKind::Dedication,
        EntityKind::BuildingMaterial,
    ];

    /// Parse the entity-type suffix of a BIO label (e.g. `"parish"`).
    ///
    /// Returns `None` for labels outside the schematism inventory; the page
    /// builder silently ignores those spans.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "page_number" => Some(EntityKind::PageNumber),
            "deanery" => Some(EntityKind::Deanery),
            "parish" => Some(EntityKind::Parish),
            "dedication" => Some(EntityKind::Dedication),
            "building_material" => Some(EntityKind::BuildingMaterial),
            _ => None,
        }
    }

    /// The label string for this kind, as it appears in BIO tags and metrics.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            EntityKind::PageNumber => "page_number",
            EntityKind::Deanery => "deanery",
            EntityKind::Parish => "parish",
            EntityKind::Dedication => "dedication",
            EntityKind::BuildingMaterial => "building_material",
        }
    }
}

/// Entry-level fields, i.e. the subset of [`EntityKind`] that lives on an
/// [`Entry`] rather than on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    /// The anchoring field; always present on stored entries.
    Parish,
    /// Church dedication.
    Dedication,
    /// Building material.
    BuildingMaterial,
}

impl EntryField {
    /// All entry fields, parish first.
    pub const ALL: [EntryField; 3] = [
        EntryField::Parish,
        EntryField::Dedication,
        EntryField::BuildingMaterial,
    ];

    /// The field name used in JSON and metric reports.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            EntryField::Parish => "parish",
            EntryField::Dedication => "dedication",
            EntryField::BuildingMaterial => "building_material",
        }
    }
}

/// One parish record within a page.
///
/// `dedication` and `building_material` may be absent; every entry stored in
/// a [`PageRecord`] has a non-null `parish`, because the parish span is what
/// opens the entry during page construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Parish name (entry anchor).
    pub parish: Option<String>,
    /// Church dedication, if annotated.
    pub dedication: Option<String>,
    /// Building material, if annotated.
    pub building_material: Option<String>,
}

impl Entry {
    /// Create an entry with only the parish set.
    #[must_use]
    pub fn new(parish: impl Into<String>) -> Self {
        Self {
            parish: Some(parish.into()),
            dedication: None,
            building_material: None,
        }
    }

    /// Set the dedication.
    #[must_use]
    pub fn with_dedication(mut self, dedication: impl Into<String>) -> Self {
        self.dedication = Some(dedication.into());
        self
    }

    /// Set the building material.
    #[must_use]
    pub fn with_building_material(mut self, material: impl Into<String>) -> Self {
        self.building_material = Some(material.into());
        self
    }

    /// Access a field by its [`EntryField`] tag.
    #[must_use]
    pub fn field(&self, field: EntryField) -> Option<&str> {
        match field {
            EntryField::Parish => self.parish.as_deref(),
            EntryField::Dedication => self.dedication.as_deref(),
            EntryField::BuildingMaterial => self.building_material.as_deref(),
        }
    }
}

/// The canonical structured form of one schematism page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Printed page number, if found.
    pub page_number: Option<String>,
    /// Deanery heading, if found.
    pub deanery: Option<String>,
    /// Parish entries in reading order. Empty on negative/blank pages.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl PageRecord {
    /// Parse a page record from JSON, normalizing the `"[brak_informacji]"`
    /// sentinel to `null` first.
    ///
    /// Used for both ground-truth pages and raw model responses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) when the cleaned string is
    /// not valid JSON in the page record shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        let sentinel = format!("\"{NO_INFORMATION}\"");
        let cleaned = raw.replace(&sentinel, "null");
        Ok(serde_json::from_str(&cleaned)?)
    }
}

/// Output of an extraction model: either a raw JSON string that still needs
/// parsing, or an already-structured page record.
///
/// Modeling this as a sum type keeps the "string or dict" distinction
/// explicit instead of inspecting types at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// Unparsed response text (expected to be JSON).
    Raw(String),
    /// Already-structured page record.
    Parsed(PageRecord),
}

impl ModelOutput {
    /// Resolve to a [`PageRecord`], parsing raw responses (with sentinel
    /// normalization) as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) when a raw response is not
    /// valid page-record JSON.
    pub fn into_record(self) -> Result<PageRecord> {
        match self {
            ModelOutput::Raw(raw) => PageRecord::from_json(&raw),
            ModelOutput::Parsed(record) => Ok(record),
        }
    }
}
