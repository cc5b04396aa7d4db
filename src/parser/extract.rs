use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use super::blocks::Block;
use super::classify::PageHeading;
use super::diagnostics::{Diagnostic, DiagnosticSink};
use crate::record::MuseumRecord;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)?[a-z.-]+(?:/\S*)?$").unwrap());

const PHONE_PREFIX: &str = "Phone ";

/// Name/location, contact, description, page-number footer.
pub const MIN_BLOCKS: usize = 4;

/// Build a record from a classified page's blocks.
///
/// Block 0 carries the heading and location, block 1 the contact lines.
/// Description and footer blocks are ignored.
pub fn extract_record(
    blocks: &[Block],
    heading: &PageHeading,
    sink: &mut dyn DiagnosticSink,
) -> MuseumRecord {
    let mut record = MuseumRecord::new(&heading.name, &heading.last_updated);

    if blocks.len() < MIN_BLOCKS {
        sink.report(Diagnostic::IncompleteRecord {
            name: heading.name.clone(),
            blocks: blocks.len(),
        });
        return record;
    }

    record.location = location(&blocks[0]);
    if record.location.is_none() {
        sink.report(Diagnostic::MissingLocation {
            name: heading.name.clone(),
        });
    }

    let contact_lines = blocks[1].trimmed();
    extract_contact(&mut record, &contact_lines, sink);

    if !record.is_complete() {
        sink.report(Diagnostic::UnexpectedFieldCount {
            name: heading.name.clone(),
            fields: record.field_count(),
            contact_lines,
        });
    }

    record
}

fn location(block: &Block) -> Option<String> {
    if block.len() > 1 {
        block.lines.last().map(|l| l.trim().to_string())
    } else {
        None
    }
}

/// Peel url and email off the front, phone off the back; the rest is the
/// street address.
fn extract_contact(record: &mut MuseumRecord, lines: &[String], sink: &mut dyn DiagnosticSink) {
    let name = &record.name;
    let mut rest: VecDeque<&str> = lines.iter().map(String::as_str).collect();

    let url = rest.front().filter(|l| URL_RE.is_match(l)).map(|l| l.to_string());
    if url.is_some() {
        rest.pop_front();
    } else {
        sink.report(Diagnostic::MissingUrl { name: name.clone() });
    }

    let email = rest.front().filter(|l| l.contains('@')).map(|l| l.to_string());
    if email.is_some() {
        rest.pop_front();
    } else {
        sink.report(Diagnostic::MissingEmail { name: name.clone() });
    }

    let phone = rest
        .back()
        .and_then(|l| l.strip_prefix(PHONE_PREFIX))
        .map(str::to_string);
    if phone.is_some() {
        rest.pop_back();
    } else {
        sink.report(Diagnostic::MissingPhone { name: name.clone() });
    }

    let address = if rest.is_empty() {
        None
    } else {
        Some(rest.into_iter().collect::<Vec<_>>().join(" "))
    };

    record.url = url;
    record.email = email;
    record.phone = phone;
    record.address = address;
}
