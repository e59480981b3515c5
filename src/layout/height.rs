//! Per-field height estimation.
//!
//! Heights are estimated from the descriptor alone, before anything is
//! measured or drawn, so the balancer stays a pure function of its input.
//! The estimate is deliberately stepped rather than exact: choice fields
//! reserve one, two or three option rows depending on how many options they
//! carry, and long labels reserve extra lines at a fixed characters-per-line
//! rate.
//!
//! One measurement is made: a choice field never reserves fewer rows than
//! its options actually wrap into at the column width. Two long options can
//! need two rows even though the step allows one.

use crate::font::StandardFont;
use crate::geometry::PageGeometry;
use crate::model::{FieldDescriptor, FieldType};
use crate::render::options::layout_options;

/// Vertical space `field` needs, label included, excluding inter-field spacing.
pub fn estimate_height(field: &FieldDescriptor, geometry: &PageGeometry) -> f64 {
    let body = match &field.field_type {
        FieldType::Textarea => geometry.textarea_body,
        FieldType::Select | FieldType::Radio | FieldType::Checkbox => {
            let options = field.effective_options();
            let rows = option_row_allowance(options.len())
                .max(wrapped_option_rows(&options, geometry));
            geometry.choice_base + rows as f64 * geometry.option_row_height
        }
        FieldType::Text
        | FieldType::Number
        | FieldType::Email
        | FieldType::Phone
        | FieldType::Url
        | FieldType::Date
        | FieldType::Boolean
        | FieldType::File
        | FieldType::Other(_) => geometry.single_line_body,
    };

    let extra_lines = estimated_label_lines(field, geometry) - 1;
    geometry.label_height + extra_lines as f64 * geometry.label_line_height + body
}

/// Option rows reserved for a choice field with `count` options.
pub fn option_row_allowance(count: usize) -> usize {
    match count {
        0..=2 => 1,
        3..=4 => 2,
        _ => 3,
    }
}

/// Rows the options occupy once laid out across a column.
pub fn wrapped_option_rows(options: &[&str], geometry: &PageGeometry) -> usize {
    let size = geometry.font_sizes.option;
    let layout = layout_options(
        options,
        geometry.column_width(),
        |s| StandardFont::Helvetica.measure_mm(s, size),
        geometry,
    );
    layout.rows
}

/// Approximate number of label lines: `ceil(chars / chars_per_line)`, at least one.
pub fn estimated_label_lines(field: &FieldDescriptor, geometry: &PageGeometry) -> usize {
    let chars = field.label_text().chars().count();
    chars.div_ceil(geometry.label_chars_per_line.max(1)).max(1)
}
