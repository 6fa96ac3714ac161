//! Header name parsing with unit suffixes.

use std::sync::LazyLock;

use regex::Regex;

use super::{HeaderParser, Unit, UnitProvider};
use crate::parser::NameGenerator;

static UNIT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.*?)\s*\((?P<unit>[^()]+)\)\s*$").expect("unit suffix pattern is valid")
});

/// Splits `Name (unit)` headers and fills in missing column names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeaderParser;

impl HeaderParser for DefaultHeaderParser {
    fn parse_headers(
        &self,
        names: Option<&[String]>,
        column_count: usize,
        units: &dyn UnitProvider,
    ) -> Vec<(String, Option<Unit>)> {
        let mut generator = NameGenerator::new();

        (0..column_count)
            .map(|c| {
                let raw = names
                    .and_then(|n| n.get(c))
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty());

                let (name, unit) = match raw {
                    Some(raw) => split_unit(raw, units),
                    None => (format!("Column{}", c + 1), None),
                };
                (generator.unique(&name), unit)
            })
            .collect()
    }
}

fn split_unit(header: &str, units: &dyn UnitProvider) -> (String, Option<Unit>) {
    if let Some(caps) = UNIT_SUFFIX.captures(header) {
        let name = caps["name"].trim();
        if !name.is_empty() {
            if let Some(unit) = units.find_unit(&caps["unit"]) {
                return (name.to_string(), Some(unit));
            }
        }
    }
    (header.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::StandardUnits;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_units_are_split_off() {
        let headers = DefaultHeaderParser.parse_headers(
            Some(names(&["Distance (km)", "Price (USD)", "Notes (see below)"]).as_slice()),
            3,
            &StandardUnits,
        );

        assert_eq!(headers[0], ("Distance".to_string(), Some(Unit::new("km", "length"))));
        assert_eq!(headers[1], ("Price".to_string(), Some(Unit::new("USD", "currency"))));
        assert_eq!(headers[2], ("Notes (see below)".to_string(), None));
    }

    #[test]
    fn test_missing_names_are_generated() {
        let headers = DefaultHeaderParser.parse_headers(None, 2, &StandardUnits);
        assert_eq!(
            headers,
            vec![("Column1".to_string(), None), ("Column2".to_string(), None)]
        );

        let headers =
            DefaultHeaderParser.parse_headers(Some(names(&["Name", " "]).as_slice()), 3, &StandardUnits);
        let names: Vec<_> = headers.into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Name", "Column2", "Column3"]);
    }

    #[test]
    fn test_duplicate_names_are_made_unique() {
        let headers =
            DefaultHeaderParser.parse_headers(Some(names(&["Value", "Value"]).as_slice()), 2, &StandardUnits);
        assert_eq!(headers[0].0, "Value");
        assert_eq!(headers[1].0, "Value2");
    }
}
