//! Recursive depth-first directory walk.
//!
//! Each directory visit returns its own [`Visit`]: the directory node built
//! from its surviving children plus the statistics gathered underneath it.
//! Parents fold child visits in with [`DirNode::push`] and
//! [`ScanStats::merge`], so no accumulator is shared across stack frames and
//! any subtree can be visited (and tested) on its own.
use crate::model::{DirNode, FileNode, Node, ScanStats};
use crate::scanner::ignore::IgnoreRules;
use compact_str::CompactString;
use std::ffi::OsString;
use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of visiting one directory.
#[derive(Debug, Default)]
pub struct Visit {
    /// The directory with its non-empty subtrees and files attached.
    pub dir: DirNode,

    /// Statistics for everything visited below (not including) this directory.
    pub stats: ScanStats,

    /// `false` if this directory itself could not be listed.
    pub listed: bool,

    /// Directories and entries skipped because they could not be read.
    pub error_count: u64,
}

/// A directory entry that survived name filtering, ready to classify.
struct Entry {
    name: OsString,
    path: PathBuf,
    file_type: FileType,
}

/// Visit the directory at `path`, naming the resulting node `name`.
///
/// A directory that cannot be listed yields an empty, unlisted visit and the
/// walk carries on; no error ever escapes.
pub fn visit_dir(path: &Path, name: CompactString, rules: &IgnoreRules) -> Visit {
    let real = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let mut ancestors = vec![real];
    visit_inner(path, name, rules, &mut ancestors)
}

/// `ancestors` holds the canonical paths of every directory on the current
/// branch, ending with the one at `path`.
fn visit_inner(
    path: &Path,
    name: CompactString,
    rules: &IgnoreRules,
    ancestors: &mut Vec<PathBuf>,
) -> Visit {
    let mut visit = Visit {
        dir: DirNode::new(name),
        ..Default::default()
    };

    let entries = match read_sorted(path, rules, &mut visit.error_count) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Skipping unreadable directory {}: {err}", path.display());
            visit.error_count += 1;
            return visit;
        }
    };
    visit.listed = true;

    for entry in entries {
        let name = CompactString::from(entry.name.to_string_lossy());
        match classify(&entry, ancestors) {
            Ok(EntryKind::File(size)) => {
                let file = FileNode::new(name, size);
                visit.stats.record_file(&file.extension, size);
                visit.dir.push(Node::File(file));
            }
            Ok(EntryKind::Dir(real)) => {
                if ancestors.contains(&real) {
                    debug!(
                        "Skipping {}: links back to {}",
                        entry.path.display(),
                        real.display()
                    );
                    visit.error_count += 1;
                    continue;
                }
                // Counted on visit, before we know whether it survives pruning.
                visit.stats.record_dir();
                ancestors.push(real);
                let child = visit_inner(&entry.path, name, rules, ancestors);
                ancestors.pop();
                visit.error_count += child.error_count;
                visit.stats.merge(child.stats);
                if !child.dir.is_empty() {
                    visit.dir.push(Node::Dir(child.dir));
                }
            }
            Ok(EntryKind::Other) => {}
            Err(err) => {
                debug!("Skipping unreadable entry {}: {err}", entry.path.display());
                visit.error_count += 1;
            }
        }
    }

    visit
}

enum EntryKind {
    File(u64),
    /// A directory, or a symlink resolving to one, with its canonical path.
    Dir(PathBuf),
    /// Sockets, FIFOs, devices and dangling links.
    Other,
}

/// List `path`, drop ignored names and sort by name.
///
/// Sorting here makes the walk independent of the filesystem's raw listing
/// order. Entries whose name or type cannot be read are counted and dropped.
fn read_sorted(
    path: &Path,
    rules: &IgnoreRules,
    error_count: &mut u64,
) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("Skipping entry in {}: {err}", path.display());
                *error_count += 1;
                continue;
            }
        };
        let name = entry.file_name();
        if rules.is_ignored(&name.to_string_lossy()) {
            continue;
        }
        match entry.file_type() {
            Ok(file_type) => entries.push(Entry {
                name,
                path: entry.path(),
                file_type,
            }),
            Err(err) => {
                debug!("Skipping {}: {err}", entry.path().display());
                *error_count += 1;
            }
        }
    }
    entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Decide what an entry contributes to the tree.
///
/// Symlinks are followed: a link to a file counts the target's size and a
/// link to a directory is walked like a real subdirectory.
fn classify(entry: &Entry, ancestors: &[PathBuf]) -> io::Result<EntryKind> {
    let ft = entry.file_type;
    if ft.is_file() {
        return Ok(EntryKind::File(fs::symlink_metadata(&entry.path)?.len()));
    }
    if ft.is_dir() {
        // A real directory under a canonical parent is already canonical.
        let real = match ancestors.last() {
            Some(parent) => parent.join(&entry.name),
            None => fs::canonicalize(&entry.path)?,
        };
        return Ok(EntryKind::Dir(real));
    }
    if ft.is_symlink() {
        let target = fs::metadata(&entry.path)?;
        if target.is_file() {
            return Ok(EntryKind::File(target.len()));
        }
        if target.is_dir() {
            return Ok(EntryKind::Dir(fs::canonicalize(&entry.path)?));
        }
    }
    Ok(EntryKind::Other)
}
