//! Writing reports and exports to disk.
use crate::error::{ReportError, Result};
use codemap_core::analysis::rank_extensions;
use codemap_core::model::{DirNode, ScanStats};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write a rendered document to `path`, replacing any existing file.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| ReportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote report to {} ({} bytes)", path.display(), html.len());
    Ok(())
}

/// Write the per-extension breakdown as CSV, largest first.
///
/// Columns: `extension,files,bytes,percent`.
pub fn to_csv(stats: &ScanStats, w: impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(["extension", "files", "bytes", "percent"])?;
    for share in rank_extensions(stats) {
        writer.write_record([
            share.extension.to_string(),
            share.count.to_string(),
            share.size.to_string(),
            format!("{:.1}", share.percent),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// The tree and statistics as one JSON document.
pub fn to_json(root: &DirNode, stats: &ScanStats) -> serde_json::Value {
    serde_json::json!({
        "root": root,
        "stats": {
            "files": stats.file_count,
            "directories": stats.dir_count,
            "total_size": root.size,
            "extensions": stats.extensions(),
        }
    })
}

/// Write the CSV breakdown to `path`.
pub fn write_csv(path: &Path, stats: &ScanStats) -> Result<()> {
    let file = fs::File::create(path).map_err(|source| ReportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    to_csv(stats, std::io::BufWriter::new(file))?;
    info!("Wrote extension breakdown to {}", path.display());
    Ok(())
}

/// Write the JSON export to `path`.
pub fn write_json(path: &Path, root: &DirNode, stats: &ScanStats) -> Result<()> {
    let json = serde_json::to_string_pretty(&to_json(root, stats))?;
    fs::write(path, json).map_err(|source| ReportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote JSON export to {}", path.display());
    Ok(())
}
