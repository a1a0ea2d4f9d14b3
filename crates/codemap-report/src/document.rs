//! Assembles the complete, self-contained report document.
//!
//! Layout: a sidebar with the summary and the extension chart, a main panel
//! with the search box and tree mount point, and one inline script holding
//! the serialized tree, the colour map and the viewer code. Nothing is
//! loaded from the network or from separate files.
use crate::config::ReportOptions;
use crate::error::Result;
use crate::html::{html_escape, script_json};
use crate::panels::{chart_panel, summary_panel, tree_panel};
use crate::theme::{Palette, EXTENSION_COLORS, FALLBACK_COLOR};
use codemap_core::model::{DirNode, ScanStats};
use std::collections::BTreeMap;
use tracing::debug;

const STYLE: &str = include_str!("../assets/style.css");
const VIEWER_SCRIPT: &str = include_str!("../assets/viewer.js");

/// Render a scan with the default options.
pub fn render(root: &DirNode, stats: &ScanStats) -> Result<String> {
    render_with(root, stats, &ReportOptions::default())
}

/// Render a scan into a complete HTML document.
///
/// Output is a pure function of the inputs: the same scan always renders to
/// the same bytes.
pub fn render_with(
    root: &DirNode,
    stats: &ScanStats,
    options: &ReportOptions,
) -> Result<String> {
    debug_assert!(
        root.is_consistent(),
        "directory sizes must roll up and empty subtrees must be pruned"
    );

    let palette = Palette::for_mode(options.theme);
    let colors: BTreeMap<&str, &str> = EXTENSION_COLORS.iter().copied().collect();

    let data_json = script_json(root)?;
    let colors_json = script_json(&colors)?;
    let fallback_json = script_json(FALLBACK_COLOR)?;
    debug!("Embedding {} bytes of tree data", data_json.len());

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
{variables}
{style}  </style>
</head><body>
  <div class="container">
    <div class="sidebar">
{summary}{chart}    </div>
    <div class="main">
{tree}    </div>
  </div>
  <script>
const data = {data_json};
const colors = {colors_json};
const fallbackColor = {fallback_json};
{script}  </script>
</body></html>
"#,
        title = html_escape(&options.title_for(&root.name)),
        variables = palette.css_variables(),
        style = STYLE,
        summary = summary_panel(root, stats),
        chart = chart_panel(stats, options.top_extensions),
        tree = tree_panel(root),
        script = VIEWER_SCRIPT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use codemap_core::model::{FileNode, Node};

    fn sample() -> (DirNode, ScanStats) {
        let mut src = DirNode::new("src");
        src.push(Node::File(FileNode::new("app.ts", 300)));
        let mut root = DirNode::new("project");
        root.push(Node::Dir(src));
        root.push(Node::File(FileNode::new("README.md", 100)));

        let mut stats = ScanStats::new();
        stats.record_dir();
        stats.record_file(".ts", 300);
        stats.record_file(".md", 100);
        (root, stats)
    }

    #[test]
    fn document_has_sidebar_main_and_script() {
        let (root, stats) = sample();
        let html = render(&root, &stats).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="sidebar">"#));
        assert!(html.contains(r#"<div class="main">"#));
        assert!(html.contains("<title>Codebase Explorer - project</title>"));
        assert!(html.contains(r#"const data = {"name":"project","children":["#));
        assert!(html.contains(r##"const colors = {".c":"#555555""##));
        assert!(html.contains(r##"const fallbackColor = "#6b7280";"##));
        assert!(html.contains("function applyFilter(query)"));
    }

    #[test]
    fn viewer_script_is_embedded_whole() {
        let (root, stats) = sample();
        let html = render(&root, &stats).unwrap();

        assert!(html.contains(VIEWER_SCRIPT));
        // Case-insensitive matching over root-relative paths, as in `filter_tree`.
        assert!(VIEWER_SCRIPT.contains("applyFilter(e.target.value.toLowerCase())"));
        assert!(VIEWER_SCRIPT.contains("path.toLowerCase().includes(query)"));
        assert!(VIEWER_SCRIPT.contains("data.children.forEach(c => match(c, '', query"));
    }

    #[test]
    fn document_is_self_contained() {
        let (root, stats) = sample();
        let html = render(&root, &stats).unwrap();
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("src=\""));
    }

    #[test]
    fn render_is_deterministic() {
        let (root, stats) = sample();
        assert_eq!(render(&root, &stats).unwrap(), render(&root, &stats).unwrap());
    }

    #[test]
    fn options_change_title_theme_and_chart_size() {
        let (root, stats) = sample();
        let options = ReportOptions {
            top_extensions: 1,
            title: Some("My <Map>".into()),
            theme: ThemeMode::Light,
        };
        let html = render_with(&root, &stats, &options).unwrap();

        assert!(html.contains("<title>My &lt;Map&gt;</title>"));
        assert!(html.contains("--bg: #f5f5f5;"));
        assert_eq!(html.matches(r#"class="bar-row""#).count(), 1);
    }

    #[test]
    fn hostile_names_cannot_break_out_of_the_script() {
        let mut root = DirNode::new("root");
        root.push(Node::File(FileNode::new("</script><img>.js", 1)));
        let mut stats = ScanStats::new();
        stats.record_file(".js", 1);

        let html = render(&root, &stats).unwrap();
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
