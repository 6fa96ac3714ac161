//! List and definition list extraction.

use scraper::ElementRef;

use super::naming::{nice_pascal_name, resolve_name, NameGenerator};
use super::text::{inner_text, trimmed_text_nodes};
use crate::model::{DefinitionListObject, ListObject};

/// Lists need at least this many values to carry any structure
const MIN_LIST_VALUES: usize = 2;

/// Definition lists need at least this many groups
const MIN_DEFINITION_GROUPS: usize = 2;

/// Flattens `<ol>`/`<ul>` items into ordered text values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListExtractor;

impl ListExtractor {
    /// Build a named list from `element`.
    ///
    /// Every text node below each `<li>` contributes one trimmed value,
    /// including text of nested lists. Nodes that trim to nothing are kept
    /// as empty values.
    pub fn build<'a>(
        &self,
        element: ElementRef<'a>,
        ancestors: &[ElementRef<'a>],
        index: usize,
        names: &mut NameGenerator,
    ) -> Option<ListObject<'a>> {
        let values = self.values(element);
        if values.len() < MIN_LIST_VALUES {
            log::debug!("ListExtractor: skipping list with {} values", values.len());
            return None;
        }

        let default_name = format!("List{}", index + 1);
        Some(ListObject {
            name: names.unique(&resolve_name(element, ancestors, &default_name)),
            values,
            source: element,
        })
    }

    /// Item values of `element` in document order.
    pub fn values(&self, element: ElementRef<'_>) -> Vec<String> {
        let mut items = Vec::new();
        collect_items(element, &mut items);

        let mut values = Vec::new();
        for item in items {
            trimmed_text_nodes(item, &mut values);
        }
        values
    }
}

/// `<li>` elements below `element`; matched items and nested lists are not
/// searched further.
fn collect_items<'a>(element: ElementRef<'a>, items: &mut Vec<ElementRef<'a>>) {
    for child in element.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "li" => items.push(child),
            "ol" | "ul" => {}
            _ => collect_items(child, items),
        }
    }
}

/// Groups `<dl>` content by `<dt>` term.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionListExtractor;

impl DefinitionListExtractor {
    /// Build a named definition list from `element`.
    pub fn build<'a>(
        &self,
        element: ElementRef<'a>,
        ancestors: &[ElementRef<'a>],
        index: usize,
        names: &mut NameGenerator,
    ) -> Option<DefinitionListObject<'a>> {
        let definitions = self.groups(element);
        if definitions.len() < MIN_DEFINITION_GROUPS {
            log::debug!(
                "DefinitionListExtractor: skipping definition list with {} groups",
                definitions.len()
            );
            return None;
        }

        let default_name = format!("DefinitionList{}", index + 1);
        Some(DefinitionListObject {
            name: names.unique(&resolve_name(element, ancestors, &default_name)),
            definitions,
            source: element,
        })
    }

    /// Term groups of `element`.
    ///
    /// Each `<dt>` opens a group named after its text; every other child
    /// element adds its text to the open group. Content before the first
    /// term lands in a group named `Undefined`.
    pub fn groups<'a>(&self, element: ElementRef<'a>) -> Vec<ListObject<'a>> {
        let mut groups: Vec<ListObject<'a>> = Vec::new();

        for child in element.children().filter_map(ElementRef::wrap) {
            if child.value().name() == "dt" {
                groups.push(ListObject {
                    name: nice_pascal_name(&inner_text(child)),
                    values: Vec::new(),
                    source: child,
                });
                continue;
            }

            let value = inner_text(child);
            match groups.last_mut() {
                Some(group) => group.values.push(value),
                None => groups.push(ListObject {
                    name: DefinitionListObject::UNDEFINED_GROUP.to_string(),
                    values: vec![value],
                    source: child,
                }),
            }
        }

        groups
    }
}
