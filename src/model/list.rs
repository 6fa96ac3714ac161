//! List and definition list types.

use scraper::ElementRef;
use serde::Serialize;

/// An ordered sequence of text values taken from `<ol>`/`<ul>` markup, or
/// one term group of a definition list.
#[derive(Debug, Clone, Serialize)]
pub struct ListObject<'a> {
    /// Resolved name
    pub name: String,

    /// Values in document order
    pub values: Vec<String>,

    /// Source element (the list, or the group's `<dt>`)
    #[serde(skip)]
    pub source: ElementRef<'a>,
}

impl<'a> ListObject<'a> {
    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A `<dl>` grouped by term.
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionListObject<'a> {
    /// Resolved, document-unique name
    pub name: String,

    /// One list per `<dt>` term, in document order
    pub definitions: Vec<ListObject<'a>>,

    /// Source `<dl>` element
    #[serde(skip)]
    pub source: ElementRef<'a>,
}

impl<'a> DefinitionListObject<'a> {
    /// Name of the group holding content that precedes the first term.
    pub const UNDEFINED_GROUP: &'static str = "Undefined";

    /// Get a group by its term name.
    pub fn group(&self, name: &str) -> Option<&ListObject<'a>> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_group_lookup() {
        let html = Html::parse_fragment("<dl></dl>");
        let source = html.root_element();
        let group = |name: &str, values: &[&str]| ListObject {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
            source,
        };
        let dl = DefinitionListObject {
            name: "Glossary".to_string(),
            definitions: vec![group("Term1", &["D1", "D1b"]), group("Term2", &["D2"])],
            source,
        };

        assert_eq!(dl.len(), 2);
        assert_eq!(dl.group("Term1").map(ListObject::len), Some(2));
        assert!(dl.group("Term3").is_none());
    }
}
