//! Scanning options and configuration.

use crate::infer::InferenceContext;

/// Options for scanning HTML documents.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Keep tables marked `cellspacing="0" cellpadding="0"`, which are
    /// usually page layout rather than data
    pub include_layout_tables: bool,

    /// Which object kinds to extract
    pub kinds: ObjectKinds,
}

impl ScanOptions {
    /// Create new scan options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude layout tables.
    pub fn with_layout_tables(mut self, include: bool) -> Self {
        self.include_layout_tables = include;
        self
    }

    /// Set which object kinds to extract.
    pub fn with_kinds(mut self, kinds: ObjectKinds) -> Self {
        self.kinds = kinds;
        self
    }

    /// Extract tables only.
    pub fn tables_only(mut self) -> Self {
        self.kinds = ObjectKinds {
            tables: true,
            lists: false,
            definition_lists: false,
        };
        self
    }
}

/// Selection of object kinds to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectKinds {
    /// `<table>` elements
    pub tables: bool,
    /// `<ol>` and `<ul>` elements
    pub lists: bool,
    /// `<dl>` elements
    pub definition_lists: bool,
}

impl Default for ObjectKinds {
    fn default() -> Self {
        Self {
            tables: true,
            lists: true,
            definition_lists: true,
        }
    }
}

/// Whether tables get header inference.
///
/// Runtime extraction never runs inference; design-time extraction always
/// does and attaches a schema to every table.
#[derive(Clone, Copy)]
pub(crate) enum ScanMode<'c> {
    Runtime,
    DesignTime(&'c InferenceContext),
}
