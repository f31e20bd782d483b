use std::path::Path;

use anyhow::Context as _;

use crate::formats::BookRecord;

/// Writes one dataset as comma-delimited UTF-8 CSV: header row first, one
/// row per record in insertion order, no index column. The parent directory
/// is created if absent.
pub fn write_csv(records: &[BookRecord], path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;

    // Header written explicitly so an empty dataset still produces one.
    writer
        .write_record(BookRecord::FIELDS)
        .context("write csv header")?;
    for record in records {
        writer.serialize(record).context("write csv row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;

    Ok(())
}
