//! Scan-wide counters: files, directories and per-extension totals.
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// Count and byte total for a single extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub extension: CompactString,
    pub count: u64,
    pub size: u64,
}

/// Statistics accumulated during a scan.
///
/// Extension entries are kept in the order each extension was first seen.
/// Ranking code relies on this for stable tie-breaking, so entries are held
/// in a `Vec` with a side index rather than iterated out of a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files included in the tree.
    pub file_count: u64,

    /// Directories visited, including those later pruned as empty.
    pub dir_count: u64,

    extensions: Vec<ExtensionStats>,

    index: HashMap<CompactString, usize>,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one included file of the given extension and size.
    pub fn record_file(&mut self, extension: &str, size: u64) {
        self.file_count += 1;
        self.add_extension(extension, 1, size);
    }

    /// Count one visited directory.
    #[inline]
    pub fn record_dir(&mut self) {
        self.dir_count += 1;
    }

    /// Fold the statistics of a later-visited subtree into `self`.
    ///
    /// Extensions new to `self` are appended in `other`'s order, which keeps
    /// first-seen ordering intact across a depth-first walk.
    pub fn merge(&mut self, other: ScanStats) {
        self.file_count += other.file_count;
        self.dir_count += other.dir_count;
        for ext in other.extensions {
            self.add_extension(&ext.extension, ext.count, ext.size);
        }
    }

    /// Extension entries in first-seen order.
    pub fn extensions(&self) -> &[ExtensionStats] {
        &self.extensions
    }

    /// Look up one extension's totals.
    pub fn extension(&self, extension: &str) -> Option<&ExtensionStats> {
        self.index.get(extension).map(|&i| &self.extensions[i])
    }

    /// Number of distinct extensions seen.
    #[inline]
    pub fn distinct_extensions(&self) -> usize {
        self.extensions.len()
    }

    /// Byte total across every extension.
    pub fn total_size(&self) -> u64 {
        self.extensions.iter().map(|e| e.size).sum()
    }

    fn add_extension(&mut self, extension: &str, count: u64, size: u64) {
        match self.index.get(extension) {
            Some(&i) => {
                let entry = &mut self.extensions[i];
                entry.count += count;
                entry.size += size;
            }
            None => {
                let key = CompactString::from(extension);
                self.index.insert(key.clone(), self.extensions.len());
                self.extensions.push(ExtensionStats {
                    extension: key,
                    count,
                    size,
                });
            }
        }
    }
}
