//! Name resolution for extracted objects.
//!
//! Names come from the nearest preceding heading, a `<caption>`, or one of
//! the element's identifying attributes, in that order. The heuristic never
//! fails: without any signal the caller's positional default is used.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use super::text::inner_text;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^h\d$").expect("heading pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Attributes consulted for a name, highest priority first.
const NAME_ATTRIBUTES: [&str; 4] = ["id", "name", "title", "summary"];

/// Number of ancestors searched for a preceding heading.
const HEADING_SEARCH_DEPTH: usize = 2;

/// Derive a human-readable name for `element`.
///
/// `ancestors` is the element's ancestor chain, nearest first.
pub fn resolve_name(element: ElementRef<'_>, ancestors: &[ElementRef<'_>], default_name: &str) -> String {
    if let Some(heading) = preceding_heading(element, ancestors) {
        let text = inner_text(heading);
        if !text.trim().is_empty() {
            return clean_name(&text);
        }
    }

    if let Some(caption) = caption(element) {
        let text = inner_text(caption);
        if !text.trim().is_empty() {
            return text;
        }
    }

    if let Some(value) = NAME_ATTRIBUTES
        .iter()
        .filter_map(|a| element.value().attr(a))
        .find(|v| !v.trim().is_empty())
    {
        return clean_name(value);
    }

    default_name.to_string()
}

/// Last heading before `element` inside its nearest ancestor that has one.
fn preceding_heading<'a>(element: ElementRef<'a>, ancestors: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    ancestors
        .iter()
        .take(HEADING_SEARCH_DEPTH)
        .find_map(|scope| {
            scope
                .descendants()
                .take_while(|node| node.id() != element.id())
                .filter_map(ElementRef::wrap)
                .filter(|e| HEADING.is_match(e.value().name()))
                .last()
        })
}

fn caption(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "caption")
}

/// Normalise heading or attribute text into a name.
pub fn clean_name(text: &str) -> String {
    let text = text.replace('–', "-");
    WHITESPACE
        .replace_all(&text, " ")
        .replace("[edit]", "")
        .trim()
        .to_string()
}

/// Convert free text into a PascalCase identifier-like name.
///
/// Words break on non-alphanumeric characters and on case changes
/// (`fooBar`, `HTTPServer`).
pub fn nice_pascal_name(text: &str) -> String {
    let mut name = String::with_capacity(text.len());
    for word in split_words(text) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(&chars.as_str().to_lowercase());
        }
    }
    name
}

fn split_words(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&text[s..pos]);
            }
            continue;
        }

        match start {
            None => start = Some(pos),
            Some(s) => {
                let prev = chars[i - 1].1;
                let next = chars.get(i + 1).map(|&(_, n)| n);
                let boundary = c.is_uppercase()
                    && (prev.is_lowercase()
                        || prev.is_numeric()
                        || (prev.is_uppercase() && next.is_some_and(char::is_lowercase)));
                if boundary {
                    words.push(&text[s..pos]);
                    start = Some(pos);
                }
            }
        }
    }

    if let Some(s) = start {
        words.push(&text[s..]);
    }
    words
}

/// Hands out names that are unique within one generator.
///
/// The first request for a name returns it unchanged. Later requests for a
/// taken name increment its trailing number (`Table1` -> `Table2`) or append
/// one (`Revenue` -> `Revenue2`, `Sales data` -> `Sales data 2`).
#[derive(Debug, Default)]
pub struct NameGenerator {
    used: HashSet<String>,
}

impl NameGenerator {
    /// Create an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve and return a unique variant of `name`.
    pub fn unique(&mut self, name: &str) -> String {
        let mut name = name.to_string();
        while self.used.contains(&name) {
            name = next_candidate(&name);
        }
        self.used.insert(name.clone());
        name
    }
}

fn next_candidate(name: &str) -> String {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let number = &name[stem.len()..];

    match number.parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
        Some(next) => format!("{}{}", stem, next),
        None if name.contains(' ') => format!("{} 2", name),
        None => format!("{}2", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn resolve(html: &str, selector: &str, default_name: &str) -> String {
        let html = Html::parse_document(html);
        let selector = Selector::parse(selector).unwrap();
        let element = html.select(&selector).next().unwrap();
        let ancestors: Vec<_> = element.ancestors().filter_map(ElementRef::wrap).collect();
        resolve_name(element, &ancestors, default_name)
    }

    #[test]
    fn test_name_from_preceding_heading() {
        let name = resolve(
            "<h1>Ignored</h1><h2>Population  by\nyear [edit]</h2><table id=\"t\"></table>",
            "table",
            "Table1",
        );
        assert_eq!(name, "Population by year");
    }

    #[test]
    fn test_heading_after_element_is_ignored() {
        let name = resolve("<table><tr><td>x</td></tr></table><h2>After</h2>", "table", "Table1");
        assert_eq!(name, "Table1");
    }

    #[test]
    fn test_heading_two_levels_up() {
        let html = "<div><h3>Results</h3><section><div><table></table></div></section></div>";
        // Ancestors are div, section, div: the heading lives in the third.
        assert_eq!(resolve(html, "table", "Table1"), "Table1");

        let html = "<div><h3>Results</h3><section><table></table></section></div>";
        assert_eq!(resolve(html, "table", "Table1"), "Results");
    }

    #[test]
    fn test_name_from_caption() {
        let name = resolve(
            "<table id=\"ignored\"><caption> Quarterly  sales </caption><tr><td>1</td></tr></table>",
            "table",
            "Table1",
        );
        assert_eq!(name, " Quarterly  sales ");
    }

    #[test]
    fn test_name_from_attributes() {
        assert_eq!(resolve("<table id=\"Revenue\"></table>", "table", "Table1"), "Revenue");
        assert_eq!(
            resolve("<table title=\"a – b\" summary=\"s\"></table>", "table", "Table1"),
            "a - b"
        );
        assert_eq!(resolve("<table summary=\"Summary\"></table>", "table", "Table1"), "Summary");
    }

    #[test]
    fn test_blank_signals_fall_through() {
        assert_eq!(resolve("<h2>  </h2><table id=\" \"></table>", "table", "Table3"), "Table3");
    }

    #[test]
    fn test_blank_attribute_falls_through_to_next_attribute() {
        assert_eq!(
            resolve("<table id=\" \" title=\"Revenue\"></table>", "table", "Table1"),
            "Revenue"
        );
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("  2010–2020\t results [edit] "), "2010-2020 results");
        assert_eq!(clean_name("plain"), "plain");
    }

    #[test]
    fn test_nice_pascal_name() {
        assert_eq!(nice_pascal_name("Term1"), "Term1");
        assert_eq!(nice_pascal_name("HTTP status"), "HttpStatus");
        assert_eq!(nice_pascal_name("first-name"), "FirstName");
        assert_eq!(nice_pascal_name("camelCase word"), "CamelCaseWord");
        assert_eq!(nice_pascal_name("HTTPServer"), "HttpServer");
        assert_eq!(nice_pascal_name("  "), "");
    }

    #[test]
    fn test_name_generator() {
        let mut names = NameGenerator::new();
        assert_eq!(names.unique("Revenue"), "Revenue");
        assert_eq!(names.unique("Revenue"), "Revenue2");
        assert_eq!(names.unique("Revenue"), "Revenue3");
        assert_eq!(names.unique("Table1"), "Table1");
        assert_eq!(names.unique("Table1"), "Table2");
        assert_eq!(names.unique("Sales data"), "Sales data");
        assert_eq!(names.unique("Sales data"), "Sales data 2");
        assert_eq!(names.unique(""), "");
        assert_eq!(names.unique(""), "2");
    }

    #[test]
    fn test_name_generators_are_independent() {
        let mut tables = NameGenerator::new();
        let mut lists = NameGenerator::new();
        assert_eq!(tables.unique("Items"), "Items");
        assert_eq!(lists.unique("Items"), "Items");
    }
}
