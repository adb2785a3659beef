//! Canonicalization of extracted field values via mapping tables.
//!
//! LLM and OCR output carries historical-Latin spellings and abbreviations
//! ("lap.", "S. Mathiae Ap.") that must be mapped onto a canonical local
//! vocabulary before scoring. Lookup is exact-key first, then fuzzy over the
//! table keys with a plain edit-distance scorer; values with no mapping
//! resolve to `None` rather than passing through unmapped.

use std::collections::BTreeMap;

use tracing::debug;

use crate::record::PageRecord;
use crate::similarity::{extract_one, ratio, Scorer};

/// Maps raw `dedication` and `building_material` values onto canonical forms.
///
/// Built from explicit mapping tables; loading those tables from disk or
/// configuration belongs to the orchestration layer.
#[derive(Debug, Clone)]
pub struct ValueMapper {
    dedication: BTreeMap<String, String>,
    building_material: BTreeMap<String, String>,
    cutoff: f64,
    scorer: Scorer,
}

impl ValueMapper {
    /// Create a mapper from the two mapping tables.
    #[must_use]
    pub fn new(
        dedication: BTreeMap<String, String>,
        building_material: BTreeMap<String, String>,
    ) -> Self {
        Self {
            dedication,
            building_material,
            cutoff: 80.0,
            scorer: ratio,
        }
    }

    /// Set the fuzzy-fallback cutoff (0-100).
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    fn fuzzy_lookup(&self, text: &str, table: &BTreeMap<String, String>) -> Option<String> {
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        let (index, score) = extract_one(text, &keys, self.scorer, self.cutoff)?;
        debug!(text, key = keys[index], score, "fuzzy mapping hit");
        table.get(keys[index]).cloned()
    }

    /// Map a building-material value: exact key match, then fuzzy over keys.
    #[must_use]
    pub fn map_building_material(&self, text: &str) -> Option<String> {
        if let Some(value) = self.building_material.get(text) {
            return Some(value.clone());
        }
        self.fuzzy_lookup(text, &self.building_material)
    }

    /// Map a dedication value: containment of a known key or canonical value
    /// inside the text, then fuzzy over keys.
    ///
    /// Dedications are long phrases, so substring containment catches the
    /// common case of a known saint name embedded in extra OCR tokens.
    #[must_use]
    pub fn map_dedication(&self, text: &str) -> Option<String> {
        for (key, value) in &self.dedication {
            if text.contains(key.as_str()) || text.contains(value.as_str()) {
                return Some(value.clone());
            }
        }
        self.fuzzy_lookup(text, &self.dedication)
    }

    /// Return a new record with every entry's `dedication` and
    /// `building_material` mapped to canonical forms.
    ///
    /// Absent fields stay absent; present values with no mapping become
    /// `None`. The input record is not mutated.
    #[must_use]
    pub fn apply(&self, record: &PageRecord) -> PageRecord {
        let mut mapped = record.clone();
        for entry in &mut mapped.entries {
            entry.building_material = entry
                .building_material
                .as_deref()
                .and_then(|text| self.map_building_material(text));
            entry.dedication = entry
                .dedication
                .as_deref()
                .and_then(|text| self.map_dedication(text));
        }
        mapped
    }
}
