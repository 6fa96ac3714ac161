//! Object model types for content extracted from HTML documents.
//!
//! Every extracted object borrows its source element from the parsed
//! `scraper::Html` tree, so the object graph can never outlive the document
//! it was read from.

mod cell;
mod list;
mod object;
mod table;
mod typed;

pub use cell::Cell;
pub use list::{DefinitionListObject, ListObject};
pub use object::{ExtractedObject, ObjectKind};
pub use table::{Row, Table, TableSchema};
pub use typed::{TypedList, TypedTable};
