//! # Two-Column Layout
//!
//! Assigns every field a rectangle on the page. The algorithm is a single
//! greedy pass in input order:
//!
//! 1. Start both column cursors at the top of the content area
//! 2. A full-width field (textarea) goes at the lower of the two cursors,
//!    spans both columns, and pulls both cursors to its bottom
//! 3. Any other field goes into whichever column is shorter, left on a tie
//! 4. A field whose bottom passes the printable area is still placed; the
//!    overflow is reported, never reflowed
//!
//! Fields are never reordered. The page is a single sheet, so there is no
//! page break: a form that is too long simply runs off the bottom, and the
//! caller gets a warning for each field that does.
//!
//! The cursor is an immutable value folded over the field list, so layout is
//! a pure function of `(fields, start_y, max_y, geometry)`.

pub mod height;

use std::fmt;

use serde::Serialize;

use crate::geometry::PageGeometry;
use crate::model::FieldDescriptor;

pub use height::estimate_height;

/// Which column a field occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i8")]
pub enum Column {
    Left,
    Right,
    /// Spans both columns.
    Full,
}

impl Column {
    /// 0 for left, 1 for right, -1 for full width.
    pub fn index(self) -> i8 {
        match self {
            Column::Left => 0,
            Column::Right => 1,
            Column::Full => -1,
        }
    }
}

impl From<Column> for i8 {
    fn from(column: Column) -> Self {
        column.index()
    }
}

/// A field with its assigned rectangle, in page millimeters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedField<'a> {
    pub field: &'a FieldDescriptor,
    pub column: Column,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacedField<'_> {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// The running Y position of each column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutCursor {
    pub left_y: f64,
    pub right_y: f64,
}

impl LayoutCursor {
    pub fn new(start_y: f64) -> Self {
        Self {
            left_y: start_y,
            right_y: start_y,
        }
    }

    /// The lowest point reached by either column.
    pub fn bottom(&self) -> f64 {
        self.left_y.max(self.right_y)
    }

    pub fn is_synchronized(&self) -> bool {
        self.left_y == self.right_y
    }

    /// Place one field, returning the advanced cursor alongside the placement.
    pub fn place<'a>(
        self,
        field: &'a FieldDescriptor,
        geometry: &PageGeometry,
    ) -> (LayoutCursor, PlacedField<'a>) {
        let height = estimate_height(field, geometry);

        if field.field_type.is_full_width() {
            let y = self.bottom();
            let next_y = y + height + geometry.field_spacing;
            let placed = PlacedField {
                field,
                column: Column::Full,
                x: geometry.margin.left,
                y,
                width: geometry.content_width(),
                height,
            };
            return (LayoutCursor::new(next_y), placed);
        }

        let right = self.right_y < self.left_y;
        let y = if right { self.right_y } else { self.left_y };
        let next_y = y + height + geometry.field_spacing;
        let placed = PlacedField {
            field,
            column: if right { Column::Right } else { Column::Left },
            x: geometry.column_x(right),
            y,
            width: geometry.column_width(),
            height,
        };
        let next = if right {
            LayoutCursor {
                right_y: next_y,
                ..self
            }
        } else {
            LayoutCursor {
                left_y: next_y,
                ..self
            }
        };
        (next, placed)
    }
}

/// A non-fatal problem found while laying out or rendering a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutWarning {
    /// A field ends below the printable area and is drawn off the page.
    Overflow {
        field_id: String,
        bottom: f64,
        max_y: f64,
    },
    /// The field type is unknown and was rendered as a plain text box.
    UnsupportedFieldType { field_id: String, field_type: String },
    /// A choice field had no options; placeholders were drawn instead.
    EmptyOptions { field_id: String },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::Overflow {
                field_id,
                bottom,
                max_y,
            } => write!(
                f,
                "field '{}' ends at {:.1}mm, past the printable bottom at {:.1}mm",
                field_id, bottom, max_y
            ),
            LayoutWarning::UnsupportedFieldType {
                field_id,
                field_type,
            } => write!(
                f,
                "field '{}' has unsupported type '{}', rendered as text",
                field_id, field_type
            ),
            LayoutWarning::EmptyOptions { field_id } => {
                write!(f, "field '{}' has no options, using placeholders", field_id)
            }
        }
    }
}

/// The result of one layout run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan<'a> {
    /// One entry per input field, in input order.
    pub placed: Vec<PlacedField<'a>>,
    /// Cursor state after the last field.
    pub cursor: LayoutCursor,
    pub overflows: Vec<LayoutWarning>,
}

impl LayoutPlan<'_> {
    pub fn has_overflow(&self) -> bool {
        !self.overflows.is_empty()
    }
}

/// Balance `fields` across two columns between `start_y` and `max_y`.
pub fn layout<'a>(
    fields: &'a [FieldDescriptor],
    start_y: f64,
    max_y: f64,
    geometry: &PageGeometry,
) -> LayoutPlan<'a> {
    let (cursor, placed) = fields.iter().fold(
        (LayoutCursor::new(start_y), Vec::with_capacity(fields.len())),
        |(cursor, mut placed), field| {
            let (next, placement) = cursor.place(field, geometry);
            placed.push(placement);
            (next, placed)
        },
    );

    let overflows: Vec<LayoutWarning> = placed
        .iter()
        .filter(|p| p.bottom() > max_y)
        .map(|p| LayoutWarning::Overflow {
            field_id: p.field.id.clone(),
            bottom: p.bottom(),
            max_y,
        })
        .collect();

    for warning in &overflows {
        tracing::warn!(%warning, "layout overflow");
    }

    tracing::debug!(
        fields = placed.len(),
        start_y,
        max_y,
        bottom = cursor.bottom(),
        "laid out form fields"
    );

    LayoutPlan {
        placed,
        cursor,
        overflows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    fn text(id: &str) -> FieldDescriptor {
        FieldDescriptor::new(id, id, FieldType::Text)
    }

    fn textarea(id: &str) -> FieldDescriptor {
        FieldDescriptor::new(id, id, FieldType::Textarea)
    }

    #[test]
    fn tie_goes_left_then_right() {
        let g = PageGeometry::default();
        let fields = vec![text("a"), text("b"), text("c")];
        let plan = layout(&fields, 30.0, 282.0, &g);
        let columns: Vec<Column> = plan.placed.iter().map(|p| p.column).collect();
        assert_eq!(columns, vec![Column::Left, Column::Right, Column::Left]);
        assert_eq!(plan.placed[0].x, 10.0);
        assert_eq!(plan.placed[1].x, 107.0);
        assert_eq!(plan.placed[2].y, 49.0);
    }

    #[test]
    fn full_width_synchronizes_cursors() {
        let g = PageGeometry::default();
        let a = text("a");
        let b = FieldDescriptor::new("b", "b", FieldType::Radio).with_options(["1", "2", "3"]);
        let notes = textarea("notes");

        let cursor = LayoutCursor::new(30.0);
        let (cursor, _) = cursor.place(&a, &g);
        let (cursor, _) = cursor.place(&b, &g);
        assert!(!cursor.is_synchronized());

        let (cursor, placed) = cursor.place(&notes, &g);
        assert!(cursor.is_synchronized());
        assert_eq!(placed.column, Column::Full);
        assert_eq!(placed.y, 53.0);
        assert_eq!(placed.width, 190.0);
        assert_eq!(cursor.left_y, 53.0 + 35.0 + 4.0);
    }

    #[test]
    fn column_index_values() {
        assert_eq!(Column::Left.index(), 0);
        assert_eq!(Column::Right.index(), 1);
        assert_eq!(Column::Full.index(), -1);
        assert_eq!(serde_json::to_string(&Column::Full).unwrap(), "-1");
    }

    #[test]
    fn empty_form_places_nothing() {
        let g = PageGeometry::default();
        let plan = layout(&[], 30.0, 282.0, &g);
        assert!(plan.placed.is_empty());
        assert!(plan.cursor.is_synchronized());
        assert_eq!(plan.cursor.bottom(), 30.0);
    }

    #[test]
    fn overflow_is_reported_not_fatal() {
        let g = PageGeometry::default();
        let fields: Vec<_> = (0..20).map(|i| textarea(&format!("t{i}"))).collect();
        let plan = layout(&fields, 30.0, 282.0, &g);
        assert_eq!(plan.placed.len(), 20);
        assert!(plan.has_overflow());
        // 30 + 6 * 39 = 264; the 7th textarea ends at 264 + 35 = 299
        assert!(matches!(
            &plan.overflows[0],
            LayoutWarning::Overflow { field_id, .. } if field_id == "t6"
        ));
        assert_eq!(plan.overflows.len(), 14);
    }

    #[test]
    fn warning_messages() {
        let w = LayoutWarning::EmptyOptions {
            field_id: "pick".to_string(),
        };
        assert_eq!(w.to_string(), "field 'pick' has no options, using placeholders");
    }
}
