//! Presentation configuration

/// Settings for how the controller presents the outline.
///
/// # Example
///
/// ```
/// use outline::OutlineConfig;
///
/// let config = OutlineConfig::default()
///     .with_indent_width(12)
///     .with_placeholder("Nothing here");
/// assert_eq!(config.indent_width, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Indentation per nesting level, in presentation units.
    ///
    /// Default: 20
    pub indent_width: u16,

    /// Glyph shown on expanded entries.
    ///
    /// Default: `▼`
    pub expanded_glyph: String,

    /// Glyph shown on collapsed entries.
    ///
    /// Default: `▶`
    pub collapsed_glyph: String,

    /// Text shown instead of the tree when there is no outline.
    ///
    /// Default: `No outline available`
    pub placeholder: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            indent_width: 20,
            expanded_glyph: "▼".to_string(),
            collapsed_glyph: "▶".to_string(),
            placeholder: "No outline available".to_string(),
        }
    }
}

impl OutlineConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation per level.
    pub fn with_indent_width(mut self, width: u16) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets the expanded and collapsed glyphs.
    pub fn with_glyphs(mut self, expanded: impl Into<String>, collapsed: impl Into<String>) -> Self {
        self.expanded_glyph = expanded.into();
        self.collapsed_glyph = collapsed.into();
        self
    }

    /// Sets the empty-outline placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Glyph for an expandable entry in the given state.
    pub fn glyph(&self, expanded: bool) -> &str {
        if expanded {
            &self.expanded_glyph
        } else {
            &self.collapsed_glyph
        }
    }
}
