//! Page structure building: typed spans into a nested page record.

use crate::parser::spans::Span;
use crate::record::{EntityKind, Entry, PageRecord};

/// Assemble a [`PageRecord`] from an ordered span list.
///
/// Page-level scalars (`page_number`, `deanery`) are overwritten on every
/// occurrence: last write wins. This is a documented tolerance of duplicate
/// OCR detections, not deduplication, and it can let late noise overwrite an
/// earlier correct reading; the behavior is pinned by tests rather than
/// silently changed.
///
/// Each `parish` span flushes the currently open entry (if it has a parish)
/// and opens a fresh one; `dedication` and `building_material` set the
/// corresponding field on the open entry, last write winning within one
/// entry. Spans of unknown kind are ignored.
///
/// A page with zero parish spans yields an empty `entries` list, which is a
/// valid outcome for negative/blank pages.
#[must_use]
pub fn build_page(spans: &[Span]) -> PageRecord {
    let mut page = PageRecord::default();
    let mut current = Entry::default();

    for span in spans {
        match EntityKind::from_label(&span.kind) {
            Some(EntityKind::PageNumber) => page.page_number = Some(span.text.clone()),
            Some(EntityKind::Deanery) => page.deanery = Some(span.text.clone()),
            Some(EntityKind::Parish) => {
                if current.parish.is_some() {
                    page.entries.push(std::mem::take(&mut current));
                }
                current.parish = Some(span.text.clone());
            }
            Some(EntityKind::Dedication) => current.dedication = Some(span.text.clone()),
            Some(EntityKind::BuildingMaterial) => {
                current.building_material = Some(span.text.clone());
            }
            None => {}
        }
    }

    if current.parish.is_some() {
        page.entries.push(current);
    }

    page
}
