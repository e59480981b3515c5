//! # Field Rendering
//!
//! Rendering is decoupled from any output format through [`DrawSurface`], a
//! capability exposing the handful of primitives a paper form needs:
//! rectangles, lines, circles and text, plus text measurement.
//!
//! All coordinates are page millimeters with the origin at the top-left
//! corner and y growing downward. Text `y` is the baseline. Backends convert
//! to whatever their native space is (the PDF backend flips y and scales to
//! points).
//!
//! ```text
//!   PlacedField ──► fields::render_field ──► DrawSurface
//!                                             ├─ pdf::PdfSurface
//!                                             └─ DisplayList
//! ```

pub mod display_list;
pub mod fields;
pub mod options;
pub mod text;

pub use display_list::{DisplayList, DrawOp};
pub use fields::render_field;
pub use options::{layout_options, OptionLayout, OptionPlacement};
pub use text::wrap_text;

use serde::Serialize;

use crate::font::StandardFont;

/// An RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    /// Writing guides inside boxes. Light enough to be ignored by OCR.
    pub const GUIDE: Color = Color { r: 200.0 / 255.0, g: 200.0 / 255.0, b: 200.0 / 255.0 };
    /// Header instruction line.
    pub const INSTRUCTION: Color = Color { r: 80.0 / 255.0, g: 80.0 / 255.0, b: 80.0 / 255.0 };
    /// Footer text and field hints.
    pub const MUTED: Color = Color { r: 100.0 / 255.0, g: 100.0 / 255.0, b: 100.0 / 255.0 };
}

/// Outline style for rectangles, lines and circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    /// Line width in millimeters.
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Horizontal anchoring of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// How a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    #[serde(skip)]
    pub font: StandardFont,
    /// Font size in points.
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn regular(size: f64) -> Self {
        Self {
            font: StandardFont::Helvetica,
            size,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }

    pub fn bold(size: f64) -> Self {
        Self {
            font: StandardFont::HelveticaBold,
            ..Self::regular(size)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// The drawing capability every backend implements.
pub trait DrawSurface {
    /// Outline a rectangle whose top-left corner is `(x, y)`.
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: &Stroke);

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke);

    /// Outline a circle centered on `(cx, cy)`.
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke: &Stroke);

    /// Draw `text` with its baseline at `y`, anchored at `x` per `style.align`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);

    /// Width of `text` in millimeters. Defaults to the standard font metrics.
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> f64 {
        style.font.measure_mm(text, style.size)
    }
}

/// Left edge of a text run of `width` anchored at `x`.
pub fn aligned_x(x: f64, width: f64, align: TextAlign) -> f64 {
    match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_levels() {
        assert_eq!(Color::BLACK, Color { r: 0.0, g: 0.0, b: 0.0 });
        assert!(Color::GUIDE.r > Color::MUTED.r);
        assert!(Color::MUTED.r > Color::INSTRUCTION.r);
        assert_eq!(Color::GUIDE.r, Color::GUIDE.g);
    }

    #[test]
    fn alignment_offsets() {
        assert_eq!(aligned_x(100.0, 20.0, TextAlign::Left), 100.0);
        assert_eq!(aligned_x(100.0, 20.0, TextAlign::Center), 90.0);
        assert_eq!(aligned_x(100.0, 20.0, TextAlign::Right), 80.0);
    }

    #[test]
    fn bold_style_measures_wider() {
        let list = DisplayList::new();
        let regular = list.measure_text_width("Contact Method", &TextStyle::regular(9.0));
        let bold = list.measure_text_width("Contact Method", &TextStyle::bold(9.0));
        assert!(bold > regular);
    }
}
