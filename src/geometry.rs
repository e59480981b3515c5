//! # Page Geometry
//!
//! Every length the engine uses, in millimeters, plus font sizes in points.
//! The defaults describe an A4 page; a caller may override any subset per
//! invocation by deserializing a partial JSON object over them.

use serde::{Deserialize, Serialize};

/// Millimeters per PDF point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Edge values (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Edges {
    fn default() -> Self {
        Self {
            top: 14.0,
            right: 10.0,
            bottom: 15.0,
            left: 10.0,
        }
    }
}

impl Edges {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Font size tiers, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizes {
    pub title: f64,
    pub label: f64,
    pub option: f64,
    pub instructions: f64,
    pub footer: f64,
    /// Faint hints such as the MM / DD / YYYY captions.
    pub hint: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 14.0,
            label: 9.0,
            option: 8.0,
            instructions: 7.0,
            footer: 7.0,
            hint: 5.0,
        }
    }
}

/// Stroke widths, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeWidths {
    pub border: f64,
    pub thick: f64,
    pub guide: f64,
    pub rule: f64,
}

impl Default for StrokeWidths {
    fn default() -> Self {
        Self {
            border: 0.5,
            thick: 1.0,
            guide: 0.2,
            rule: 0.3,
        }
    }
}

/// Page and field geometry for one layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: Edges,
    pub column_gap: f64,
    /// Vertical gap left below every placed field.
    pub field_spacing: f64,

    /// Height of the first label line.
    pub label_height: f64,
    /// Extra height for each wrapped label line after the first.
    pub label_line_height: f64,
    /// Characters per label line assumed by the height estimate.
    pub label_chars_per_line: usize,

    pub single_line_body: f64,
    pub textarea_body: f64,
    /// Gap between a choice label and its first option row.
    pub choice_base: f64,
    pub option_row_height: f64,
    pub option_padding: f64,
    pub marker_size: f64,

    pub char_box_width: f64,
    pub char_box_height: f64,
    pub number_box_cap: usize,
    pub phone_box_count: usize,
    pub textarea_line_spacing: f64,

    pub corner_marker_inset: f64,
    pub corner_marker_length: f64,

    pub font_sizes: FontSizes,
    pub strokes: StrokeWidths,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: Edges::default(),
            column_gap: 4.0,
            field_spacing: 4.0,
            label_height: 5.0,
            label_line_height: 4.0,
            label_chars_per_line: 45,
            single_line_body: 10.0,
            textarea_body: 30.0,
            choice_base: 2.0,
            option_row_height: 6.0,
            option_padding: 4.0,
            marker_size: 4.0,
            char_box_width: 6.0,
            char_box_height: 8.0,
            number_box_cap: 10,
            phone_box_count: 12,
            textarea_line_spacing: 6.0,
            corner_marker_inset: 5.0,
            corner_marker_length: 8.0,
            font_sizes: FontSizes::default(),
            strokes: StrokeWidths::default(),
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f64 {
        self.page_width - self.margin.horizontal()
    }

    pub fn column_width(&self) -> f64 {
        (self.content_width() - self.column_gap) / 2.0
    }

    /// X of the left edge of column 0 and column 1.
    pub fn column_x(&self, right: bool) -> f64 {
        if right {
            self.margin.left + self.column_width() + self.column_gap
        } else {
            self.margin.left
        }
    }

    /// The printable bottom boundary. Fields ending below it overflow.
    pub fn max_y(&self) -> f64 {
        self.page_height - self.margin.bottom
    }

    /// Override any subset of the defaults from a JSON object.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
