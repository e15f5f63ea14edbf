//! Outline presentation.

use crate::node::{Emphasis, Rgb};
use crate::source::OutlineSource;
use crate::tree::NodePath;

use super::state::OutlineController;

/// Title styling for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitleStyle {
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Rgb>,
}

impl TitleStyle {
    /// CSS `font-weight` value.
    pub fn font_weight(&self) -> &'static str {
        if self.bold { "bold" } else { "normal" }
    }

    /// CSS `font-style` value.
    pub fn font_style(&self) -> &'static str {
        if self.italic { "italic" } else { "normal" }
    }

    /// CSS `color` value; `inherit` when the entry has no color.
    pub fn color_css(&self) -> String {
        self.color
            .map(|c| c.css())
            .unwrap_or_else(|| "inherit".to_string())
    }

    /// Inline CSS declarations for the title.
    pub fn css(&self) -> String {
        format!(
            "font-weight: {}; font-style: {}; color: {}",
            self.font_weight(),
            self.font_style(),
            self.color_css()
        )
    }
}

impl From<Emphasis> for TitleStyle {
    fn from(emphasis: Emphasis) -> Self {
        Self {
            bold: emphasis.bold,
            italic: emphasis.italic,
            color: emphasis.color,
        }
    }
}

/// One visible, clickable row of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    /// Identity of the entry; pass to [`OutlineController::activate`].
    pub path: NodePath,
    pub title: String,
    /// Nesting level (0 = top-level).
    pub depth: usize,
    /// Left offset: depth × configured indent width.
    pub indent: u32,
    /// Expand/collapse indicator; `None` for leaves.
    pub glyph: Option<String>,
    pub style: TitleStyle,
    pub is_expanded: bool,
    pub has_destination: bool,
}

/// What the outline panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineView {
    /// There is no outline; show this text instead.
    Placeholder(String),
    /// Visible entries, top to bottom.
    Rows(Vec<OutlineRow>),
}

impl OutlineView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// The visible rows (empty for the placeholder).
    pub fn rows(&self) -> &[OutlineRow] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Rows(rows) => rows,
        }
    }

    /// Plain-text listing, two spaces per level.
    pub fn to_text(&self) -> String {
        match self {
            Self::Placeholder(text) => text.clone(),
            Self::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let indent = "  ".repeat(row.depth);
                    match &row.glyph {
                        Some(glyph) => format!("{}{} {}", indent, glyph, row.title),
                        None => format!("{}  {}", indent, row.title),
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Left offset for an entry at `depth`, saturating at `u32::MAX`.
fn indent_for(depth: usize, indent_width: u16) -> u32 {
    u32::try_from(depth)
        .unwrap_or(u32::MAX)
        .saturating_mul(u32::from(indent_width))
}

impl<S: OutlineSource> OutlineController<S> {
    /// Build the current view.
    pub fn view(&self) -> OutlineView {
        let Ok(guard) = self.inner.read() else {
            return OutlineView::Placeholder(self.config.placeholder.clone());
        };
        if guard.tree.is_empty() {
            return OutlineView::Placeholder(self.config.placeholder.clone());
        }

        let rows = guard
            .visible
            .iter()
            .filter_map(|flat| {
                let node = guard.tree.get(&flat.path)?;
                let glyph = flat
                    .has_children
                    .then(|| self.config.glyph(flat.is_expanded).to_string());
                Some(OutlineRow {
                    path: flat.path.clone(),
                    title: node.title.clone(),
                    depth: flat.depth,
                    indent: indent_for(flat.depth, self.config.indent_width),
                    glyph,
                    style: node.emphasis.into(),
                    is_expanded: flat.is_expanded,
                    has_destination: node.has_destination(),
                })
            })
            .collect();
        OutlineView::Rows(rows)
    }
}
