//! # unhtml
//!
//! Structured data extraction from HTML documents.
//!
//! This library finds the tables, lists, and definition lists of an HTML
//! page, gives each one a stable name, and lets callers read them back as
//! typed values by that name.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unhtml::{parse_file, render};
//!
//! fn main() -> unhtml::Result<()> {
//!     // Parse an HTML file
//!     let doc = parse_file("report.html")?;
//!
//!     // Read one table by name
//!     let objects = doc.objects();
//!     let prices = objects.get_table("Prices", true, |row| row.join(", "))?;
//!     println!("{:?}", prices.rows);
//!
//!     // Or dump everything as Markdown
//!     println!("{}", render::to_markdown(objects.as_slice()));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Span-aware tables**: `rowspan`/`colspan` are resolved into a dense grid
//! - **Stable naming**: names come from headings, captions, and attributes
//! - **Header inference**: optional column names, units, and types per table
//! - **Typed access**: convert rows and items with plain closures
//! - **Output formats**: Markdown and JSON

pub mod error;
pub mod infer;
pub mod model;
pub mod parser;
pub mod render;
pub mod runtime;

// Re-export commonly used types
pub use error::{Error, Result};
pub use infer::{
    DefaultHeaderParser, HeaderClassifier, HeaderInference, HeaderParser, HeuristicInference,
    InferenceContext, InferredHeaders, InferredProperty, InferredType, StandardUnits, Unit,
    UnitProvider,
};
pub use model::{
    Cell, DefinitionListObject, ExtractedObject, ListObject, ObjectKind, Row, Table, TableSchema,
    TypedList, TypedTable,
};
pub use parser::{
    DefinitionListExtractor, DocumentScanner, ListExtractor, NameGenerator, ObjectKinds,
    ScanOptions, TableGridBuilder,
};
pub use render::JsonFormat;
pub use runtime::{HtmlDocument, ObjectModel};

use std::io::Read;
use std::path::Path;

/// Parse an HTML string.
///
/// Parsing is lenient and never fails; malformed markup is repaired the
/// way browsers repair it.
///
/// # Example
///
/// ```
/// use unhtml::parse_str;
///
/// let doc = parse_str("<ul id=\"Colors\"><li>Red</li><li>Blue</li></ul>");
/// let colors = doc.objects().get_list("Colors", str::to_string).unwrap();
/// assert_eq!(colors.values, vec!["Red", "Blue"]);
/// ```
pub fn parse_str(text: &str) -> HtmlDocument {
    HtmlDocument::parse(text)
}

/// Parse an HTML file.
///
/// # Arguments
///
/// * `path` - Path to the HTML file
///
/// # Returns
///
/// A `Result` containing the parsed `HtmlDocument` or an error.
///
/// # Example
///
/// ```no_run
/// use unhtml::parse_file;
///
/// let doc = parse_file("report.html").unwrap();
/// println!("Objects: {}", doc.objects().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<HtmlDocument> {
    HtmlDocument::from_file(path)
}

/// Parse HTML from UTF-8 bytes.
///
/// # Example
///
/// ```no_run
/// use unhtml::parse_bytes;
///
/// let data = std::fs::read("report.html").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<HtmlDocument> {
    HtmlDocument::from_bytes(data)
}

/// Parse HTML from a reader.
///
/// # Arguments
///
/// * `reader` - Any type implementing `Read`
///
/// # Example
///
/// ```no_run
/// use unhtml::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("report.html").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<HtmlDocument> {
    HtmlDocument::from_reader(reader)
}

/// Convert the objects of an HTML file to Markdown.
///
/// # Example
///
/// ```no_run
/// use unhtml::to_markdown;
///
/// let markdown = to_markdown("report.html").unwrap();
/// std::fs::write("report.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_markdown(doc.objects().as_slice()))
}

/// Convert the objects of an HTML file to JSON.
///
/// # Example
///
/// ```no_run
/// use unhtml::{to_json, JsonFormat};
///
/// let json = to_json("report.html", JsonFormat::Pretty).unwrap();
/// std::fs::write("report.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(doc.objects().as_slice(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str() {
        let doc = parse_str("<ol><li>One</li><li>Two</li></ol>");
        let objects = doc.objects();
        assert_eq!(objects.names().collect::<Vec<_>>(), vec!["List1"]);
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let result = parse_bytes(&[0x3c, 0xff, 0xfe]);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/page.html");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
