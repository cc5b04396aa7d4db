pub mod blocks;
pub mod classify;
pub mod diagnostics;
pub mod extract;
pub mod pages;

use crate::record::MuseumRecord;
use diagnostics::DiagnosticSink;
use pages::Page;

/// Three-step pipeline: first line → blocks → record.
/// Returns `None` for pages that are not museum entries.
pub fn process_page(page: &Page, sink: &mut dyn DiagnosticSink) -> Option<MuseumRecord> {
    let heading = classify::classify_page(page)?;
    let blocks = blocks::segment_blocks(page);
    Some(extract::extract_record(&blocks, &heading, sink))
}
