//! Rendering module for converting extracted objects to output formats.

mod json;
mod markdown;

pub use json::{to_json, JsonFormat};
pub use markdown::{render_object, to_markdown};
