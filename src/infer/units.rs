//! Units of measure recognised in column headers.

use serde::Serialize;

/// A unit of measure attached to a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Symbol as written in the header (e.g. `km`, `USD`)
    pub symbol: String,

    /// Measured quantity (e.g. `length`, `currency`)
    pub quantity: String,
}

impl Unit {
    pub fn new(symbol: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            quantity: quantity.into(),
        }
    }
}

/// Looks up units by symbol.
pub trait UnitProvider: Send + Sync {
    /// Find the unit written as `symbol`, if known.
    fn find_unit(&self, symbol: &str) -> Option<Unit>;
}

/// Built-in table of common units.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnits;

const STANDARD_UNITS: &[(&str, &str)] = &[
    ("mm", "length"),
    ("cm", "length"),
    ("m", "length"),
    ("km", "length"),
    ("in", "length"),
    ("ft", "length"),
    ("mi", "length"),
    ("mm²", "area"),
    ("m²", "area"),
    ("km²", "area"),
    ("mL", "volume"),
    ("L", "volume"),
    ("mg", "mass"),
    ("g", "mass"),
    ("kg", "mass"),
    ("t", "mass"),
    ("lb", "mass"),
    ("ms", "time"),
    ("s", "time"),
    ("min", "time"),
    ("h", "time"),
    ("°C", "temperature"),
    ("°F", "temperature"),
    ("K", "temperature"),
    ("km/h", "speed"),
    ("mph", "speed"),
    ("B", "data"),
    ("KB", "data"),
    ("MB", "data"),
    ("GB", "data"),
    ("TB", "data"),
    ("W", "power"),
    ("kW", "power"),
    ("MW", "power"),
    ("%", "ratio"),
    ("USD", "currency"),
    ("EUR", "currency"),
    ("GBP", "currency"),
    ("JPY", "currency"),
    ("KRW", "currency"),
    ("CNY", "currency"),
];

impl UnitProvider for StandardUnits {
    fn find_unit(&self, symbol: &str) -> Option<Unit> {
        let symbol = symbol.trim();
        STANDARD_UNITS
            .iter()
            .find(|(s, _)| *s == symbol)
            .or_else(|| {
                STANDARD_UNITS
                    .iter()
                    .find(|(s, _)| s.eq_ignore_ascii_case(symbol))
            })
            .map(|(s, q)| Unit::new(*s, *q))
    }
}
