//! Outline entries as produced by an [`OutlineSource`](crate::source::OutlineSource).

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB color triple, each component in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS functional notation, e.g. `rgb(255,0,0)`.
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self(r, g, b)
    }
}

/// Presentational hints attached to an outline entry.
///
/// Carried through unmodified from the source to the rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Emphasis {
    /// Render the title in bold.
    #[serde(default)]
    pub bold: bool,
    /// Render the title in italics.
    #[serde(default)]
    pub italic: bool,
    /// Title color, if the document specifies one.
    #[serde(default)]
    pub color: Option<Rgb>,
}

impl Emphasis {
    /// Returns `true` if no hint is set.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && self.color.is_none()
    }
}

/// One entry in a document outline.
///
/// `D` is the source's destination reference. The outline never inspects it;
/// it is handed back to the source when the entry is activated.
///
/// The serde shape follows the common outline layout:
///
/// ```json
/// { "title": "Ch1", "dest": "chapter-1", "bold": true, "color": [255, 0, 0],
///   "items": [ { "title": "1.1", "dest": null } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineNode<D> {
    /// Display label.
    pub title: String,
    /// Where this entry points in the document, if anywhere.
    #[serde(rename = "dest", default = "Option::default")]
    pub destination: Option<D>,
    /// Child entries in document reading order.
    #[serde(rename = "items", default = "Vec::new")]
    pub children: Vec<OutlineNode<D>>,
    /// Style hints.
    #[serde(flatten)]
    pub emphasis: Emphasis,
}

impl<D> OutlineNode<D> {
    /// Create a leaf entry with no destination.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            destination: None,
            children: Vec::new(),
            emphasis: Emphasis::default(),
        }
    }

    /// Set the destination reference.
    pub fn with_destination(mut self, destination: D) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Append a child entry.
    pub fn with_child(mut self, child: OutlineNode<D>) -> Self {
        self.children.push(child);
        self
    }

    /// Replace all children.
    pub fn with_children(mut self, children: Vec<OutlineNode<D>>) -> Self {
        self.children = children;
        self
    }

    /// Mark the title bold.
    pub fn bold(mut self) -> Self {
        self.emphasis.bold = true;
        self
    }

    /// Mark the title italic.
    pub fn italic(mut self) -> Self {
        self.emphasis.italic = true;
        self
    }

    /// Set the title color.
    pub fn with_color(mut self, color: impl Into<Rgb>) -> Self {
        self.emphasis.color = Some(color.into());
        self
    }

    /// Whether this entry can be expanded.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether activating this entry resolves a destination.
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }
}
