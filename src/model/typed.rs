//! Typed projections of extracted objects.

use scraper::ElementRef;

/// Table rows converted into caller-defined values.
#[derive(Debug, Clone)]
pub struct TypedTable<'a, T> {
    /// Name of the source table
    pub name: String,

    /// Header texts, when the first grid row was treated as headers
    pub headers: Option<Vec<String>>,

    /// Converted rows
    pub rows: Vec<T>,

    /// Source `<table>` element
    pub source: ElementRef<'a>,
}

impl<'a, T> TypedTable<'a, T> {
    /// Get the number of converted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows were converted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// List values converted into caller-defined values.
#[derive(Debug, Clone)]
pub struct TypedList<'a, T> {
    /// Name of the source list or definition group
    pub name: String,

    /// Converted values
    pub values: Vec<T>,

    /// Source element
    pub source: ElementRef<'a>,
}

impl<'a, T> TypedList<'a, T> {
    /// Get the number of converted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values were converted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
