use crate::models::TableRow;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save rows as CSV with header.
pub fn save_csv<P: AsRef<Path>>(rows: &[TableRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(["country_code", "indicator_id", "year", "value"])?;
    for r in rows {
        wtr.serialize((&r.country_code, &r.indicator_id, r.year, r.value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save rows as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(rows: &[TableRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
