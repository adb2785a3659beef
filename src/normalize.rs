//! Text normalization applied before fuzzy comparison.
//!
//! Historical-Latin orthography and OCR diacritic noise make exact string
//! comparison useless ("Głuchów" vs "Głuchow" vs "Gluchow"). Every value is
//! therefore normalized on both sides before matching or scoring: trailing
//! punctuation stripped, NFKD-decomposed with combining marks dropped,
//! non-ASCII residue removed, lowercased.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::record::Entry;

/// Normalize a text value for fuzzy comparison.
///
/// # Examples
///
/// ```
/// use schematism::normalize::normalize_text;
///
/// assert_eq!(normalize_text("Głuchów,"), "guchow");
/// assert_eq!(normalize_text(" S. Clementem. "), "s. clementem");
/// assert_eq!(normalize_text(""), "");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';'));
    trimmed
        .nfkd()
        .filter(|c| !is_combining_mark(*c) && c.is_ascii())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Normalize an optional field, mapping `None` to the empty string.
///
/// Empty string is the "value absent" representation used by the scorer's
/// counter rules.
#[must_use]
pub fn normalize_field(value: Option<&str>) -> String {
    value.map(normalize_text).unwrap_or_default()
}

/// Normalize every present field of an entry; absent fields stay absent.
#[must_use]
pub fn normalize_entry(entry: &Entry) -> Entry {
    Entry {
        parish: entry.parish.as_deref().map(normalize_text),
        dedication: entry.dedication.as_deref().map(normalize_text),
        building_material: entry.building_material.as_deref().map(normalize_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_via_nfkd() {
        // ó decomposes to o + combining acute; ł has no decomposition and is
        // dropped as non-ASCII residue, matching the original behavior.
        assert_eq!(normalize_text("Głuchów"), "guchow");
        assert_eq!(normalize_text("Głuchow"), "guchow");
        assert_eq!(normalize_text("Świątniki"), "swiatniki");
    }

    #[test]
    fn strips_edge_punctuation_only() {
        assert_eq!(normalize_text("mur.,"), "mur");
        assert_eq!(normalize_text("S. Mathias Ap."), "s. mathias ap");
        // interior punctuation survives
        assert_eq!(normalize_text("a.b"), "a.b");
    }

    #[test]
    fn empty_and_none_fields() {
        assert_eq!(normalize_text("  ,. ;"), "");
        assert_eq!(normalize_field(None), "");
        assert_eq!(normalize_field(Some("Czermin")), "czermin");
    }

    #[test]
    fn entry_normalization_preserves_absence() {
        let entry = Entry::new("Głuchów").with_building_material("Lig.");
        let normalized = normalize_entry(&entry);
        assert_eq!(normalized.parish.as_deref(), Some("guchow"));
        assert_eq!(normalized.dedication, None);
        assert_eq!(normalized.building_material.as_deref(), Some("lig"));
    }
}
