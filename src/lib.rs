//! # paperform
//!
//! An adaptive two-column paper-form engine.
//!
//! Online forms are easy to print badly. A naive single-column dump wastes
//! half the sheet; a fixed grid breaks the moment a label wraps or a radio
//! group grows a sixth option. paperform takes the ordered field list an
//! admin authored and fits it onto one A4 page laid out for handwriting and
//! scanning: character boxes, ruled areas, explicit choice markers, corner
//! registration marks.
//!
//! Layout is a pure function of the field list and the page geometry. Each
//! field's height is estimated from its type, label length and option count,
//! then fields are dropped into whichever column is shorter. Textareas span
//! both columns and resynchronize them. Nothing is reordered and nothing is
//! paginated: a form that doesn't fit is still rendered, with a warning per
//! overflowing field.
//!
//! ## Architecture
//!
//! ```text
//! Input (FormConfig / JSON)
//!       ↓
//!   [model]     — Form config, field descriptors, field types
//!       ↓
//!   [layout]    — Height estimate + greedy two-column balance
//!       ↓
//!   [render]    — Per-type field drawing onto a DrawSurface
//!       ↓
//!   [document]  — Corner marks, header, fields, footer
//!       ↓
//!   [pdf]       — Serialize to PDF bytes
//!       ↓
//!   [output]    — bytes / data URI / blob / file on disk
//! ```

pub mod document;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod output;
pub mod pdf;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{generate, RenderOptions, RenderedForm};
pub use error::{PaperFormError, Result};
pub use geometry::PageGeometry;
pub use layout::{layout, Column, LayoutWarning, PlacedField};
pub use model::{FieldDescriptor, FieldType, FormConfig};
pub use output::{
    download, download_with, render, render_blob, render_blob_with, render_data_uri,
    render_data_uri_with, render_with, PdfBlob,
};

/// Render a form described as JSON to PDF bytes.
pub fn render_json(json: &str) -> Result<Vec<u8>> {
    render_json_with(json, &RenderOptions::default())
}

/// Render a JSON form with explicit geometry or a pinned footer date.
pub fn render_json_with(json: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let config = FormConfig::from_json(json)?;
    render_with(&config, options)
}
