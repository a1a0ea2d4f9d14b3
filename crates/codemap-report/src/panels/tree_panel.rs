//! Main tree panel — search box and the mount point for the viewer script.
use crate::html::html_escape;
use codemap_core::model::DirNode;

/// Render the search input, the root heading and the empty list the viewer
/// script fills in.
pub fn tree_panel(root: &DirNode) -> String {
    format!(
        r#"<input type="text" class="search" placeholder="🔍 Search files..." id="search" autocomplete="off">
<h1>📁 {name}</h1>
<ul class="tree" id="root"></ul>
<noscript><p class="empty">Enable JavaScript to browse the tree.</p></noscript>
"#,
        name = html_escape(&root.name)
    )
}
