//! Header and column type inference for extracted tables.
//!
//! Inference only runs in design-time extraction. The engines are pluggable
//! through [`HeaderInference`], [`HeaderParser`], and [`UnitProvider`];
//! [`InferenceContext::default`] wires in the built-in heuristics.

mod headers;
mod heuristic;
mod units;

pub use headers::DefaultHeaderParser;
pub use heuristic::{HeuristicInference, InferredType};
pub use units::{StandardUnits, Unit, UnitProvider};

use serde::Serialize;

use crate::model::{Row, TableSchema};

/// Type information for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredProperty {
    /// Column name
    pub name: String,

    /// Column type
    #[serde(rename = "type")]
    pub ty: InferredType,

    /// Whether some cells in the column are blank
    pub optional: bool,
}

/// Outcome of header inference over a text grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InferredHeaders {
    /// Whether row 0 holds headers
    pub has_headers: bool,

    /// Header names, one per column
    pub header_names: Option<Vec<String>>,

    /// Units, one per column; when present together with `header_names`
    /// no further header parsing happens
    pub units: Option<Vec<Option<Unit>>>,

    /// Per-column types
    pub inferred_properties: Option<Vec<InferredProperty>>,
}

/// Decides whether a table has a header row and what its columns hold.
pub trait HeaderInference: Send + Sync {
    /// Infer headers from the table's cell texts.
    fn infer_headers(&self, rows: &[Vec<String>]) -> InferredHeaders;
}

/// Turns raw header strings into column names with optional units.
pub trait HeaderParser: Send + Sync {
    /// Produce exactly `column_count` entries.
    fn parse_headers(
        &self,
        names: Option<&[String]>,
        column_count: usize,
        units: &dyn UnitProvider,
    ) -> Vec<(String, Option<Unit>)>;
}

/// The inference collaborators used by design-time extraction.
pub struct InferenceContext {
    inference: Box<dyn HeaderInference>,
    header_parser: Box<dyn HeaderParser>,
    units: Box<dyn UnitProvider>,
}

impl InferenceContext {
    /// Create a context with the built-in heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the header inference engine.
    pub fn with_inference(mut self, inference: impl HeaderInference + 'static) -> Self {
        self.inference = Box::new(inference);
        self
    }

    /// Replace the header parser.
    pub fn with_header_parser(mut self, parser: impl HeaderParser + 'static) -> Self {
        self.header_parser = Box::new(parser);
        self
    }

    /// Replace the unit provider.
    pub fn with_units(mut self, units: impl UnitProvider + 'static) -> Self {
        self.units = Box::new(units);
        self
    }
}

impl Default for InferenceContext {
    fn default() -> Self {
        Self {
            inference: Box::new(HeuristicInference::default()),
            header_parser: Box::new(DefaultHeaderParser),
            units: Box::new(StandardUnits),
        }
    }
}

impl std::fmt::Debug for InferenceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceContext").finish_non_exhaustive()
    }
}

/// Derives a [`TableSchema`] for a table grid.
pub struct HeaderClassifier<'c> {
    context: &'c InferenceContext,
}

impl<'c> HeaderClassifier<'c> {
    pub fn new(context: &'c InferenceContext) -> Self {
        Self { context }
    }

    /// Classify the header row of `rows`.
    ///
    /// A first row made only of header cells is taken as-is. Anything else
    /// goes to the inference engine, with the header parser filling in
    /// names and units the engine did not resolve together.
    pub fn classify(&self, rows: &[Row<'_>]) -> TableSchema {
        let column_count = rows.first().map(Row::len).unwrap_or(0);

        if let Some(first) = rows.first().filter(|r| r.is_header_row()) {
            log::debug!("HeaderClassifier: first row is a <th> header row");
            return TableSchema {
                has_headers: true,
                header_names_and_units: first.texts().into_iter().map(|n| (n, None)).collect(),
                inferred_properties: None,
            };
        }

        let texts: Vec<Vec<String>> = rows.iter().map(Row::texts).collect();
        let inferred = self.context.inference.infer_headers(&texts);
        log::debug!(
            "HeaderClassifier: inference reports has_headers={}",
            inferred.has_headers
        );

        let header_names_and_units = match (&inferred.header_names, &inferred.units) {
            (Some(names), Some(units)) if names.len() == column_count && units.len() == column_count => {
                names.iter().cloned().zip(units.iter().cloned()).collect()
            }
            _ => self.context.header_parser.parse_headers(
                inferred.header_names.as_deref(),
                column_count,
                self.context.units.as_ref(),
            ),
        };

        TableSchema {
            has_headers: inferred.has_headers,
            header_names_and_units,
            inferred_properties: inferred.inferred_properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableGridBuilder;
    use scraper::{Html, Selector};

    struct FixedInference(InferredHeaders);

    impl HeaderInference for FixedInference {
        fn infer_headers(&self, _rows: &[Vec<String>]) -> InferredHeaders {
            self.0.clone()
        }
    }

    fn classify(html: &str, context: &InferenceContext) -> TableSchema {
        let html = Html::parse_document(html);
        let selector = Selector::parse("table").unwrap();
        let table = html.select(&selector).next().unwrap();
        let rows = TableGridBuilder::new(false).build_grid(table).unwrap();
        HeaderClassifier::new(context).classify(&rows)
    }

    #[test]
    fn test_th_row_is_header() {
        let schema = classify(
            "<table><tr><th>X</th><th>Y (km)</th></tr><tr><td>1</td><td>2</td></tr></table>",
            &InferenceContext::default(),
        );

        assert!(schema.has_headers);
        assert_eq!(
            schema.header_names_and_units,
            vec![("X".to_string(), None), ("Y (km)".to_string(), None)]
        );
        assert!(schema.inferred_properties.is_none());
    }

    #[test]
    fn test_inferred_header_with_units() {
        let schema = classify(
            "<table>\
             <tr><td>City</td><td>Distance (km)</td></tr>\
             <tr><td>Busan</td><td>325</td></tr>\
             <tr><td>Daegu</td><td>237.5</td></tr>\
             </table>",
            &InferenceContext::default(),
        );

        assert!(schema.has_headers);
        assert_eq!(schema.header_names_and_units[0], ("City".to_string(), None));
        assert_eq!(
            schema.header_names_and_units[1],
            ("Distance".to_string(), Some(Unit::new("km", "length")))
        );
        let properties = schema.inferred_properties.unwrap();
        assert_eq!(properties[1].ty, InferredType::Float);
    }

    #[test]
    fn test_no_headers_get_generated_names() {
        let schema = classify(
            "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>",
            &InferenceContext::default(),
        );

        assert!(!schema.has_headers);
        assert_eq!(
            schema.header_names_and_units,
            vec![("Column1".to_string(), None), ("Column2".to_string(), None)]
        );
    }

    #[test]
    fn test_joint_names_and_units_skip_parser() {
        let context = InferenceContext::new().with_inference(FixedInference(InferredHeaders {
            has_headers: true,
            header_names: Some(vec!["Speed (km)".to_string()]),
            units: Some(vec![Some(Unit::new("km/h", "speed"))]),
            inferred_properties: None,
        }));
        let schema = classify(
            "<table><tr><td>Speed (km)</td></tr><tr><td>1</td></tr></table>",
            &context,
        );

        assert_eq!(
            schema.header_names_and_units,
            vec![("Speed (km)".to_string(), Some(Unit::new("km/h", "speed")))]
        );
    }
}
