//! Named, typed access to the objects of a parsed document.
//!
//! An [`HtmlDocument`] owns the parsed tree. Its [`ObjectModel`] snapshot is
//! built once and borrows from it; every lookup afterwards is a read-only
//! query, so one snapshot can serve any number of callers.
//!
//! # Example
//!
//! ```
//! use unhtml::HtmlDocument;
//!
//! let doc = HtmlDocument::parse(
//!     "<table id=\"Scores\"><tr><th>Name</th><th>Score</th></tr>\
//!      <tr><td>Ann</td><td>7</td></tr></table>",
//! );
//! let objects = doc.objects();
//! let scores = objects
//!     .get_table("Scores", true, |row| (row[0].to_string(), row[1].parse::<u32>().ok()))
//!     .unwrap();
//!
//! assert_eq!(scores.headers, Some(vec!["Name".to_string(), "Score".to_string()]));
//! assert_eq!(scores.rows, vec![("Ann".to_string(), Some(7))]);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use scraper::Html;

use crate::error::{Error, Result};
use crate::infer::InferenceContext;
use crate::model::{
    Cell, DefinitionListObject, ExtractedObject, ListObject, ObjectKind, Table, TypedList,
    TypedTable,
};
use crate::parser::{DocumentScanner, ScanOptions};

/// A parsed HTML document.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a document from text.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Parse a document from UTF-8 bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::parse(std::str::from_utf8(data)?))
    }

    /// Parse a document from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse a document from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// The underlying parsed tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Build the object snapshot with default options.
    pub fn objects(&self) -> ObjectModel<'_> {
        self.objects_with(&ScanOptions::default())
    }

    /// Build the object snapshot with custom options.
    pub fn objects_with(&self, options: &ScanOptions) -> ObjectModel<'_> {
        ObjectModel::new(DocumentScanner::new(options.clone()).scan(&self.html))
    }

    /// Build the object snapshot with header inference on every table.
    pub fn objects_with_inference(
        &self,
        options: &ScanOptions,
        context: &InferenceContext,
    ) -> ObjectModel<'_> {
        ObjectModel::new(DocumentScanner::with_inference(options.clone(), context).scan(&self.html))
    }
}

/// Objects of one document, addressable by name.
#[derive(Debug, Clone)]
pub struct ObjectModel<'a> {
    objects: Vec<ExtractedObject<'a>>,
    index: HashMap<(ObjectKind, String), usize>,
}

/// Lookup order for [`ObjectModel::get`].
const KIND_ORDER: [ObjectKind; 3] = [
    ObjectKind::Table,
    ObjectKind::List,
    ObjectKind::DefinitionList,
];

impl<'a> ObjectModel<'a> {
    /// Index `objects` by kind and name.
    ///
    /// Names are unique per object kind, so a table and a list may share a
    /// name and both stay reachable through [`table`](Self::table) and
    /// [`list`](Self::list).
    pub fn new(objects: Vec<ExtractedObject<'a>>) -> Self {
        let mut index: HashMap<(ObjectKind, String), usize> = HashMap::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            let key = (object.kind(), object.name().to_string());
            if index.contains_key(&key) {
                log::warn!(
                    "ObjectModel: duplicate {} '{}' is only reachable by iteration",
                    object.kind(),
                    object.name()
                );
                continue;
            }
            index.insert(key, i);
        }
        log::debug!("ObjectModel: indexed {} objects", index.len());
        Self { objects, index }
    }

    /// Get an object by name.
    ///
    /// When several kinds share the name, tables come before lists and
    /// lists before definition lists.
    pub fn get(&self, name: &str) -> Result<&ExtractedObject<'a>> {
        KIND_ORDER
            .iter()
            .find_map(|&kind| self.lookup(kind, name))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    fn lookup(&self, kind: ObjectKind, name: &str) -> Option<&ExtractedObject<'a>> {
        self.index
            .get(&(kind, name.to_string()))
            .map(|&i| &self.objects[i])
    }

    /// Object of `kind` named `name`; `WrongKind` only when the name
    /// exists under another kind alone.
    fn get_kind(&self, kind: ObjectKind, name: &str) -> Result<&ExtractedObject<'a>> {
        if let Some(object) = self.lookup(kind, name) {
            return Ok(object);
        }
        let other = self.get(name)?;
        Err(Error::WrongKind {
            name: name.to_string(),
            expected: kind,
            found: other.kind(),
        })
    }

    /// Get a table by name.
    pub fn table(&self, name: &str) -> Result<&Table<'a>> {
        self.get_kind(ObjectKind::Table, name)?
            .as_table()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Get a list by name.
    pub fn list(&self, name: &str) -> Result<&ListObject<'a>> {
        self.get_kind(ObjectKind::List, name)?
            .as_list()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Get a definition list by name.
    pub fn definition_list(&self, name: &str) -> Result<&DefinitionListObject<'a>> {
        self.get_kind(ObjectKind::DefinitionList, name)?
            .as_definition_list()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Convert the rows of a table.
    ///
    /// With `has_headers`, the first grid row becomes the header row and is
    /// not converted.
    pub fn get_table<T, F>(&self, name: &str, has_headers: bool, mut convert: F) -> Result<TypedTable<'a, T>>
    where
        F: FnMut(&[&str]) -> T,
    {
        let table = self.table(name)?;

        let (headers, body) = match table.rows.split_first() {
            Some((first, rest)) if has_headers => (Some(first.texts()), rest),
            _ => (None, table.rows.as_slice()),
        };

        let rows = body
            .iter()
            .map(|row| {
                let texts: Vec<&str> = row.cells.iter().map(Cell::text).collect();
                convert(&texts)
            })
            .collect();

        Ok(TypedTable {
            name: table.name.clone(),
            headers,
            rows,
            source: table.source,
        })
    }

    /// Convert the values of a list.
    pub fn get_list<T, F>(&self, name: &str, convert: F) -> Result<TypedList<'a, T>>
    where
        F: FnMut(&str) -> T,
    {
        Ok(typed_list(self.list(name)?, convert))
    }

    /// Convert the values of one group of a definition list.
    pub fn get_nested_list<T, F>(&self, name: &str, index: usize, convert: F) -> Result<TypedList<'a, T>>
    where
        F: FnMut(&str) -> T,
    {
        let dl = self.definition_list(name)?;
        let group = dl.definitions.get(index).ok_or_else(|| Error::IndexOutOfRange {
            name: name.to_string(),
            index,
            len: dl.definitions.len(),
        })?;
        Ok(typed_list(group, convert))
    }

    /// Object names in extraction order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects.iter().map(ExtractedObject::name)
    }

    /// All objects in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtractedObject<'a>> + '_ {
        self.objects.iter()
    }

    /// All objects as a slice.
    pub fn as_slice(&self) -> &[ExtractedObject<'a>] {
        &self.objects
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table<'a>> + '_ {
        self.objects.iter().filter_map(ExtractedObject::as_table)
    }

    pub fn lists(&self) -> impl Iterator<Item = &ListObject<'a>> + '_ {
        self.objects.iter().filter_map(ExtractedObject::as_list)
    }

    pub fn definition_lists(&self) -> impl Iterator<Item = &DefinitionListObject<'a>> + '_ {
        self.objects.iter().filter_map(ExtractedObject::as_definition_list)
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the document has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

fn typed_list<'a, T, F>(list: &ListObject<'a>, convert: F) -> TypedList<'a, T>
where
    F: FnMut(&str) -> T,
{
    TypedList {
        name: list.name.clone(),
        values: list.values.iter().map(String::as_str).map(convert).collect(),
        source: list.source,
    }
}
