//! Sidebar summary — headline counts for the scan.
use crate::html::html_escape;
use codemap_core::model::size::{format_count, format_size};
use codemap_core::model::{DirNode, ScanStats};

/// Render the summary block: files, directories, total size and the number
/// of distinct extensions.
pub fn summary_panel(root: &DirNode, stats: &ScanStats) -> String {
    let rows = [
        ("Files", format_count(stats.file_count)),
        ("Directories", format_count(stats.dir_count)),
        ("Total size", format_size(root.size)),
        ("File types", format_count(stats.distinct_extensions() as u64)),
    ];

    let mut out = String::from("<h1>📊 Summary</h1>\n");
    for (label, value) in rows {
        out.push_str(&format!(
            r#"<div class="stat"><span>{label}</span><span class="stat-value">{}</span></div>"#,
            html_escape(&value)
        ));
        out.push('\n');
    }
    out
}
