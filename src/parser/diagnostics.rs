use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

/// Advisory findings raised while extracting a record. None of them stop the
/// page from being written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    IncompleteRecord { name: String, blocks: usize },
    MissingLocation { name: String },
    MissingUrl { name: String },
    MissingEmail { name: String },
    MissingPhone { name: String },
    UnexpectedFieldCount {
        name: String,
        fields: usize,
        contact_lines: Vec<String>,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::IncompleteRecord { .. } => "incomplete_record",
            Diagnostic::MissingLocation { .. } => "missing_location",
            Diagnostic::MissingUrl { .. } => "missing_url",
            Diagnostic::MissingEmail { .. } => "missing_email",
            Diagnostic::MissingPhone { .. } => "missing_phone",
            Diagnostic::UnexpectedFieldCount { .. } => "unexpected_field_count",
        }
    }

    pub fn museum(&self) -> &str {
        match self {
            Diagnostic::IncompleteRecord { name, .. }
            | Diagnostic::MissingLocation { name }
            | Diagnostic::MissingUrl { name }
            | Diagnostic::MissingEmail { name }
            | Diagnostic::MissingPhone { name }
            | Diagnostic::UnexpectedFieldCount { name, .. } => name,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IncompleteRecord { blocks, .. } => {
                write!(f, "only {} blocks on page, kept name and year only", blocks)
            }
            Diagnostic::MissingLocation { .. } => write!(f, "no location line"),
            Diagnostic::MissingUrl { .. } => write!(f, "no url line"),
            Diagnostic::MissingEmail { .. } => write!(f, "no email line"),
            Diagnostic::MissingPhone { .. } => write!(f, "no phone line"),
            Diagnostic::UnexpectedFieldCount {
                fields,
                contact_lines,
                ..
            } => write!(f, "{} fields, contact block: {:?}", fields, contact_lines),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Logs every diagnostic as a warning and tallies them by kind.
#[derive(Debug, Default)]
pub struct TracingSink {
    counts: BTreeMap<&'static str, usize>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> &BTreeMap<&'static str, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let kind = diagnostic.kind();
        warn!(museum = diagnostic.museum(), kind, "{}", diagnostic);
        *self.counts.entry(kind).or_insert(0) += 1;
    }
}
