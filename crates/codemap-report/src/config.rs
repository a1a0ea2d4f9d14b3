//! Report configuration types.
use crate::theme::ThemeMode;
use codemap_core::analysis::DEFAULT_TOP_EXTENSIONS;

/// File name the report is written under.
pub const OUTPUT_FILE_NAME: &str = "codebase-map.html";

/// Options controlling how a scan is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of extensions shown in the size breakdown chart.
    pub top_extensions: usize,

    /// Page title. Defaults to `Codebase Explorer - <root name>`.
    pub title: Option<String>,

    pub theme: ThemeMode,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_extensions: DEFAULT_TOP_EXTENSIONS,
            title: None,
            theme: ThemeMode::Dark,
        }
    }
}

impl ReportOptions {
    /// The page title for a scan rooted at `root_name`.
    pub fn title_for(&self, root_name: &str) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Codebase Explorer - {root_name}"),
        }
    }
}
