//! Whole-document scanning.

use scraper::{ElementRef, Html};

use super::grid::TableGridBuilder;
use super::list::{DefinitionListExtractor, ListExtractor};
use super::naming::NameGenerator;
use super::{ScanMode, ScanOptions};
use crate::infer::InferenceContext;
use crate::model::ExtractedObject;

/// An element together with its ancestors, nearest first.
type Located<'a> = (ElementRef<'a>, Vec<ElementRef<'a>>);

/// Finds and extracts every table, list, and definition list of a document.
///
/// Results are ordered tables first, then lists, then definition lists,
/// each in document order. Every call to [`scan`](Self::scan) starts with
/// fresh name generators, so scanning the same document twice yields the
/// same names.
pub struct DocumentScanner<'c> {
    options: ScanOptions,
    mode: ScanMode<'c>,
}

impl DocumentScanner<'static> {
    /// Create a scanner for runtime extraction.
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            mode: ScanMode::Runtime,
        }
    }
}

impl<'c> DocumentScanner<'c> {
    /// Create a scanner for design-time extraction; every table gets a
    /// schema from `context`.
    pub fn with_inference(options: ScanOptions, context: &'c InferenceContext) -> Self {
        Self {
            options,
            mode: ScanMode::DesignTime(context),
        }
    }

    /// Scan a parsed document.
    pub fn scan<'a>(&self, document: &'a Html) -> Vec<ExtractedObject<'a>> {
        self.scan_element(document.root_element())
    }

    /// Scan the subtree below `root`.
    pub fn scan_element<'a>(&self, root: ElementRef<'a>) -> Vec<ExtractedObject<'a>> {
        let mut objects = Vec::new();
        let kinds = self.options.kinds;

        if kinds.tables {
            let builder = TableGridBuilder::with_mode(self.options.include_layout_tables, self.mode);
            let mut names = NameGenerator::new();
            let tables = find_elements(root, &["table"])
                .into_iter()
                .filter(|(table, _)| self.options.include_layout_tables || !is_layout_table(*table));

            for (i, (table, ancestors)) in tables.enumerate() {
                if let Some(table) = builder.build(table, &ancestors, i, &mut names) {
                    objects.push(ExtractedObject::Table(table));
                }
            }
        }

        if kinds.lists {
            let mut names = NameGenerator::new();
            for (i, (list, ancestors)) in find_elements(root, &["ol", "ul"]).into_iter().enumerate() {
                if let Some(list) = ListExtractor.build(list, &ancestors, i, &mut names) {
                    objects.push(ExtractedObject::List(list));
                }
            }
        }

        if kinds.definition_lists {
            let mut names = NameGenerator::new();
            for (i, (dl, ancestors)) in find_elements(root, &["dl"]).into_iter().enumerate() {
                if let Some(dl) = DefinitionListExtractor.build(dl, &ancestors, i, &mut names) {
                    objects.push(ExtractedObject::DefinitionList(dl));
                }
            }
        }

        log::debug!("DocumentScanner: extracted {} objects", objects.len());
        objects
    }
}

/// Scan `document` for runtime use.
pub fn scan<'a>(document: &'a Html, options: &ScanOptions) -> Vec<ExtractedObject<'a>> {
    DocumentScanner::new(options.clone()).scan(document)
}

/// Scan `document` with header inference.
pub fn scan_with_inference<'a>(
    document: &'a Html,
    options: &ScanOptions,
    context: &InferenceContext,
) -> Vec<ExtractedObject<'a>> {
    DocumentScanner::with_inference(options.clone(), context).scan(document)
}

/// Elements below `root` with one of `names`, in document order.
fn find_elements<'a>(root: ElementRef<'a>, names: &[&str]) -> Vec<Located<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| names.contains(&e.value().name()))
        .map(|e| (e, e.ancestors().filter_map(ElementRef::wrap).collect()))
        .collect()
}

/// Tables marked up purely for presentation.
fn is_layout_table(table: ElementRef<'_>) -> bool {
    let element = table.value();
    element.attr("cellspacing") == Some("0") && element.attr("cellpadding") == Some("0")
}
