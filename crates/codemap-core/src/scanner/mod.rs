//! Scanner module — walks a directory tree into a [`ScanResult`].
//!
//! The walk is a plain single-threaded depth-first recursion. Entries are
//! visited in name order so two scans of the same tree produce identical
//! results regardless of how the filesystem lists them.
pub mod ignore;
pub mod walk;

use crate::model::{DirNode, ScanStats};
use compact_str::CompactString;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

pub use ignore::{IgnoreRules, DEFAULT_IGNORED_NAMES};

/// Options controlling a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Names excluded from the tree and from statistics.
    pub ignore: IgnoreRules,
}

/// The tree and statistics produced by one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// The scan root. Always present, even when it has no children.
    pub root: DirNode,
    pub stats: ScanStats,
    /// Directories and entries that were skipped because they could not be
    /// read. Never surfaced in the report.
    pub error_count: u64,
}

/// Scan `root_path` with the default ignore rules.
pub fn scan(root_path: &Path) -> ScanResult {
    scan_with(root_path, &ScanOptions::default())
}

/// Scan `root_path` with explicit options.
///
/// Never fails: an unreadable root produces an empty root node and zero
/// statistics so the caller can still render a report.
pub fn scan_with(root_path: &Path, options: &ScanOptions) -> ScanResult {
    let start = Instant::now();
    info!("Starting scan of {}", root_path.display());

    let name = CompactString::from(root_display_name(root_path));
    let visit = walk::visit_dir(root_path, name, &options.ignore);
    if !visit.listed {
        warn!(
            "Could not list scan root {}; producing an empty report",
            root_path.display()
        );
    }

    info!(
        "Scan complete: {} files, {} dirs, {} unreadable in {:?}",
        visit.stats.file_count,
        visit.stats.dir_count,
        visit.error_count,
        start.elapsed()
    );

    ScanResult {
        root: visit.dir,
        stats: visit.stats,
        error_count: visit.error_count,
    }
}

/// Derive a display name for the scan root.
///
/// Uses the last path segment; paths without one (`/`, `.`, `C:\`) fall back
/// to the path text itself.
pub fn root_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }
    let s = path.to_string_lossy();
    let trimmed = s.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        s.to_string()
    } else {
        trimmed.to_string()
    }
}
