//! A recording surface.
//!
//! Captures every primitive in order instead of rasterizing or serializing
//! it. Handy for asserting on rendering in tests, and for callers who want to
//! replay a form onto their own backend (a canvas preview, an SVG export).

use serde::Serialize;

use super::{DrawSurface, Stroke, TextStyle};

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: Stroke,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        stroke: Stroke,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    /// The text of every text op, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for DisplayList {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: &Stroke) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: *stroke,
        });
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke: &Stroke) {
        self.ops.push(DrawOp::Circle {
            cx,
            cy,
            radius,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }
}
