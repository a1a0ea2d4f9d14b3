//! Colour scheme and visual theme for the report.
//!
//! Provides dark and light palettes, emitted as CSS custom properties so the
//! static stylesheet references semantically-named values rather than raw
//! hex codes, plus the fixed extension → colour lookup used by the bar chart
//! and the tree's file dots.

/// Which theme the report is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Semantic colour palette for the report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_hover: &'static str,
    pub separator: &'static str,
    pub text_primary: &'static str,
    pub text_heading: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub folder: &'static str,
}

impl Palette {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            background: "#1a1a2e",
            surface: "#252542",
            surface_hover: "#2d2d44",
            separator: "#3d3d5c",
            text_primary: "#eeeeee",
            text_heading: "#ffffff",
            text_secondary: "#aaaaaa",
            text_muted: "#888888",
            accent: "#4fc3f7",
            folder: "#ffd700",
        }
    }

    /// Light theme — optional toggle.
    pub fn light() -> Self {
        Self {
            background: "#f5f5f5",
            surface: "#ffffff",
            surface_hover: "#e8e8ef",
            separator: "#d0d0d8",
            text_primary: "#1e1e2e",
            text_heading: "#101018",
            text_secondary: "#4a4a5a",
            text_muted: "#8a8a9a",
            accent: "#3a6fd8",
            folder: "#c09820",
        }
    }

    /// Get the palette for the given mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Render the palette as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --bg: {}; --surface: {}; --surface-hover: {}; --separator: {}; \
             --text: {}; --heading: {}; --text-secondary: {}; --muted: {}; \
             --accent: {}; --folder: {}; }}",
            self.background,
            self.surface,
            self.surface_hover,
            self.separator,
            self.text_primary,
            self.text_heading,
            self.text_secondary,
            self.text_muted,
            self.accent,
            self.folder,
        )
    }
}

/// Colour for extensions missing from [`EXTENSION_COLORS`].
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Fixed display colour per extension, keyed by the scanner's extension form
/// (lower-case, leading dot).
pub const EXTENSION_COLORS: &[(&str, &str)] = &[
    (".js", "#f7df1e"),
    (".ts", "#3178c6"),
    (".py", "#3776ab"),
    (".go", "#00add8"),
    (".rs", "#dea584"),
    (".rb", "#cc342d"),
    (".css", "#264de4"),
    (".html", "#e34c26"),
    (".json", "#6b7280"),
    (".md", "#083fa1"),
    (".yaml", "#cb171e"),
    (".yml", "#cb171e"),
    (".mdx", "#083fa1"),
    (".tsx", "#3178c6"),
    (".jsx", "#61dafb"),
    (".sh", "#4eaa25"),
    (".java", "#b07219"),
    (".c", "#555555"),
    (".cpp", "#f34b7d"),
    (".h", "#555555"),
    (".php", "#4F5D95"),
    (".swift", "#ffac45"),
    (".kt", "#A97BFF"),
    (".scala", "#c22d40"),
    (".vue", "#41b883"),
    (".svelte", "#ff3e00"),
    (".scss", "#c6538c"),
    (".less", "#1d365d"),
];

/// Map an extension to its display colour, falling back to neutral gray.
pub fn extension_color(extension: &str) -> &'static str {
    EXTENSION_COLORS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or(FALLBACK_COLOR, |&(_, color)| color)
}
