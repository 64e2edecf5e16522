//! Comma-separated export of a snapshot history.
//!
//! One row per entry: the recording time in Unix milliseconds, the nine
//! parameters as given, then the tracked metrics at fixed precision.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use policylab_types::ParameterField;
use tracing::info;

use crate::error::ReportError;
use crate::history::{HistoryEntry, SnapshotHistory};
use crate::metric::Metric;

/// Header line, without the trailing newline.
pub fn header() -> String {
    let mut columns = vec!["timestamp"];
    columns.extend(ParameterField::ALL.iter().map(|field| field.as_str()));
    columns.extend(Metric::ALL.iter().map(|metric| metric.column()));
    columns.join(",")
}

/// Render one entry as a row, without the trailing newline.
pub fn render_row(entry: &HistoryEntry) -> Result<String, ReportError> {
    let mut row = entry.recorded_at.timestamp_millis().to_string();
    for field in ParameterField::ALL {
        write!(row, ",{}", entry.params.get(field))?;
    }
    for metric in Metric::ALL {
        write!(
            row,
            ",{:.prec$}",
            metric.read(&entry.snapshot),
            prec = metric.precision()
        )?;
    }
    Ok(row)
}

/// Write the header and every entry, oldest first.
pub fn write_csv<W: Write>(history: &SnapshotHistory, mut writer: W) -> Result<(), ReportError> {
    writeln!(writer, "{}", header())?;
    for entry in history {
        writeln!(writer, "{}", render_row(entry)?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the whole export into a string.
pub fn to_csv_string(history: &SnapshotHistory) -> Result<String, ReportError> {
    let mut out = header();
    out.push('\n');
    for entry in history {
        out.push_str(&render_row(entry)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write the export to a file, returning the number of data rows.
pub fn export_csv(history: &SnapshotHistory, path: &Path) -> Result<usize, ReportError> {
    let file = File::create(path)?;
    write_csv(history, BufWriter::new(file))?;
    info!(path = %path.display(), rows = history.len(), "history exported");
    Ok(history.len())
}
