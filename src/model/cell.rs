//! Table cell types.

use serde::Serialize;

/// One logical slot of a table grid.
///
/// `Empty` marks a slot that no markup element claimed, either because its
/// row was shorter than the widest row or because spans left a gap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum Cell {
    /// Content of a `<th>` element
    Header(String),
    /// Content of a `<td>` element
    Data(String),
    /// Grid placeholder
    #[default]
    Empty,
}

impl Cell {
    /// Whether the cell counts as a header.
    ///
    /// Placeholders count as headers so that a header row padded with
    /// empty slots is still recognised as one.
    pub fn is_header(&self) -> bool {
        !matches!(self, Cell::Data(_))
    }

    /// Cell text (empty for placeholders).
    pub fn text(&self) -> &str {
        match self {
            Cell::Header(text) | Cell::Data(text) => text,
            Cell::Empty => "",
        }
    }

    /// Check if this slot was never written.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}
