//! The closed set of extractable objects.

use std::fmt;

use scraper::ElementRef;
use serde::Serialize;

use super::{DefinitionListObject, ListObject, Table};

/// Kind of an extracted object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Table,
    List,
    DefinitionList,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Table => "table",
            ObjectKind::List => "list",
            ObjectKind::DefinitionList => "definition list",
        };
        f.write_str(name)
    }
}

/// A table, list, or definition list found in a document.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedObject<'a> {
    Table(Table<'a>),
    List(ListObject<'a>),
    DefinitionList(DefinitionListObject<'a>),
}

impl<'a> ExtractedObject<'a> {
    /// Resolved name of the object.
    pub fn name(&self) -> &str {
        match self {
            ExtractedObject::Table(t) => &t.name,
            ExtractedObject::List(l) => &l.name,
            ExtractedObject::DefinitionList(d) => &d.name,
        }
    }

    /// Kind of the object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            ExtractedObject::Table(_) => ObjectKind::Table,
            ExtractedObject::List(_) => ObjectKind::List,
            ExtractedObject::DefinitionList(_) => ObjectKind::DefinitionList,
        }
    }

    /// Element the object was extracted from.
    pub fn source(&self) -> ElementRef<'a> {
        match self {
            ExtractedObject::Table(t) => t.source,
            ExtractedObject::List(l) => l.source,
            ExtractedObject::DefinitionList(d) => d.source,
        }
    }

    pub fn as_table(&self) -> Option<&Table<'a>> {
        match self {
            ExtractedObject::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListObject<'a>> {
        match self {
            ExtractedObject::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_definition_list(&self) -> Option<&DefinitionListObject<'a>> {
        match self {
            ExtractedObject::DefinitionList(d) => Some(d),
            _ => None,
        }
    }
}
