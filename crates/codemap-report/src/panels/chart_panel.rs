//! Chart panel — relative-size bars for the largest extensions.
use crate::html::html_escape;
use crate::theme::extension_color;
use codemap_core::analysis::top_extensions;
use codemap_core::model::ScanStats;

/// Render the "By file type" breakdown.
///
/// Shows up to `top_n` extensions ranked by total bytes. Bar widths are each
/// extension's share of *all* scanned bytes, so the visible bars need not
/// add up to 100%. Widths keep full precision; only the label is rounded.
pub fn chart_panel(stats: &ScanStats, top_n: usize) -> String {
    let mut out = String::from("<h2>By file type</h2>\n");

    let shares = top_extensions(stats, top_n);
    if shares.is_empty() {
        out.push_str(r#"<p class="empty">No files scanned.</p>"#);
        out.push('\n');
        return out;
    }

    for share in shares {
        let ext = html_escape(&share.extension);
        out.push_str(&format!(
            r#"<div class="bar-row" title="{count} files"><span class="bar-label">{ext}</span><div class="bar" style="width:{width}%;background:{color}"></div><span class="bar-pct">{pct:.1}%</span></div>"#,
            count = share.count,
            width = share.percent,
            pct = share.percent,
            color = extension_color(&share.extension),
        ));
        out.push('\n');
    }
    out
}
