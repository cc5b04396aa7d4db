use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::record::MuseumRecord;

pub const DEFAULT_OUTPUT_DIR: &str = "museums-json";

const FALLBACK_STEM: &str = "unnamed";

/// Output filename for a museum: ASCII slug of its name plus `.json`.
pub fn file_name(name: &str) -> String {
    let stem = slug::slugify(name);
    if stem.is_empty() {
        warn!(museum = name, "name has no sluggable characters, using {:?}", FALLBACK_STEM);
        format!("{}.json", FALLBACK_STEM)
    } else {
        format!("{}.json", stem)
    }
}

/// Write `record` as pretty JSON into `dir`, replacing any file with the
/// same slug.
pub fn write_record(record: &MuseumRecord, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(file_name(&record.name));
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, record)
        .with_context(|| format!("Failed to serialize {}", record.name))?;
    writer.write_all(b"\n")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(museum = %record.name, path = %path.display(), "wrote record");
    Ok(path)
}
