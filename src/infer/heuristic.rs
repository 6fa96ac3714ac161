//! Default header and column type inference.
//!
//! Each cell gets a primitive type; a column's type is the unification of
//! its cells. Row 0 is a header row when one of its non-blank cells has a
//! type that differs from the rest of its column.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::{HeaderInference, InferredHeaders, InferredProperty};

static GROUPED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("grouped number pattern is valid")
});

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Primitive type of a cell or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    Bool,
    Int,
    Float,
    Date,
    String,
}

impl InferredType {
    /// Infer the type of one cell. Blank text has no type.
    pub fn of(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let ty = if matches!(
            text.to_ascii_lowercase().as_str(),
            "true" | "false" | "yes" | "no"
        ) {
            InferredType::Bool
        } else if let Some(number) = number_type(text) {
            number
        } else if DATE_FORMATS
            .iter()
            .any(|f| NaiveDate::parse_from_str(text, f).is_ok())
        {
            InferredType::Date
        } else {
            InferredType::String
        };
        Some(ty)
    }

    /// Most specific type covering both inputs.
    pub fn unify(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        use InferredType::*;
        match (a, b) {
            (None, t) | (t, None) => t,
            (Some(x), Some(y)) if x == y => Some(x),
            (Some(Int), Some(Float)) | (Some(Float), Some(Int)) => Some(Float),
            _ => Some(String),
        }
    }
}

/// `Int` or `Float` when `text` is a finite number, allowing `,` digit
/// grouping.
fn number_type(text: &str) -> Option<InferredType> {
    let plain = if GROUPED_NUMBER.is_match(text) {
        text.replace(',', "")
    } else {
        text.to_string()
    };

    if plain.parse::<i64>().is_ok() {
        return Some(InferredType::Int);
    }
    match plain.parse::<f64>() {
        Ok(n) if n.is_finite() && plain.chars().any(|c| c.is_ascii_digit()) => {
            Some(InferredType::Float)
        }
        _ => None,
    }
}

/// Type-based header detection used when no other engine is configured.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicInference {
    /// Minimum number of rows before header detection is attempted
    pub min_rows: usize,
}

impl Default for HeuristicInference {
    fn default() -> Self {
        Self { min_rows: 3 }
    }
}

impl HeuristicInference {
    fn row_types(row: &[String], column_count: usize) -> Vec<Option<InferredType>> {
        (0..column_count)
            .map(|c| row.get(c).and_then(|text| InferredType::of(text)))
            .collect()
    }
}

impl HeaderInference for HeuristicInference {
    fn infer_headers(&self, rows: &[Vec<String>]) -> InferredHeaders {
        if rows.len() < self.min_rows.max(2) {
            log::debug!("HeuristicInference: {} rows are too few to infer headers", rows.len());
            return InferredHeaders::default();
        }

        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let header_types = Self::row_types(&rows[0], column_count);
        let body_types = rows[1..]
            .iter()
            .map(|row| Self::row_types(row, column_count))
            .fold(vec![None; column_count], |acc, types| {
                acc.into_iter()
                    .zip(types)
                    .map(|(a, b)| InferredType::unify(a, b))
                    .collect()
            });

        // Blank header cells say nothing about the row.
        let differs = header_types
            .iter()
            .zip(&body_types)
            .any(|(header, body)| header.is_some() && header != body);
        if !differs {
            log::debug!("HeuristicInference: first row looks like data");
            return InferredHeaders::default();
        }

        let header_names: Vec<String> = (0..column_count)
            .map(|c| rows[0].get(c).map(|s| s.trim().to_string()).unwrap_or_default())
            .collect();
        let inferred_properties = header_names
            .iter()
            .zip(&body_types)
            .enumerate()
            .map(|(c, (name, ty))| InferredProperty {
                name: name.clone(),
                ty: ty.unwrap_or(InferredType::String),
                optional: rows[1..]
                    .iter()
                    .any(|row| row.get(c).map_or(true, |t| t.trim().is_empty())),
            })
            .collect();

        InferredHeaders {
            has_headers: true,
            header_names: Some(header_names),
            units: None,
            inferred_properties: Some(inferred_properties),
        }
    }
}
