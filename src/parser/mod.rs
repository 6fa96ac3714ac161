//! HTML object extraction module.

mod grid;
mod list;
mod naming;
mod options;
mod scanner;
mod text;

pub use grid::TableGridBuilder;
pub use list::{DefinitionListExtractor, ListExtractor};
pub use naming::{clean_name, nice_pascal_name, resolve_name, NameGenerator};
pub use options::{ObjectKinds, ScanOptions};
pub use scanner::{scan, scan_with_inference, DocumentScanner};
pub use text::{inner_text, inner_text_excluding};

pub(crate) use options::ScanMode;
