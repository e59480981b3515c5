//! Per-type field drawing.
//!
//! Every field starts with its bold label, wrapped to the field width. What
//! follows depends on the type, and each shape is chosen to make handwriting
//! easy to recognize after scanning: character boxes where one glyph per cell
//! helps (email, phone, number, date), ruled boxes where free text goes, and
//! explicit markers for choices.

use crate::geometry::PageGeometry;
use crate::layout::PlacedField;
use crate::model::FieldType;

use super::options::layout_options;
use super::text::wrap_text;
use super::{Color, DrawSurface, Stroke, TextStyle};

/// Labels of the three date clusters and how many boxes each gets.
const DATE_CLUSTERS: [(&str, usize); 3] = [("MM", 2), ("DD", 2), ("YYYY", 4)];
/// Horizontal room left between date clusters for the separator glyph.
const DATE_SEPARATOR_GAP: f64 = 4.0;
const BOOLEAN_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Draw one placed field.
pub fn render_field<S>(placed: &PlacedField<'_>, surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let body_y = draw_label(placed, surface, geometry);

    match &placed.field.field_type {
        FieldType::Textarea => draw_textarea(placed, body_y, surface, geometry),
        FieldType::Email => {
            let count = fitting_boxes(placed.width, geometry);
            draw_char_boxes(placed.x, body_y, count, surface, geometry);
        }
        FieldType::Phone => {
            let count = geometry.phone_box_count.min(fitting_boxes(placed.width, geometry));
            draw_char_boxes(placed.x, body_y, count, surface, geometry);
        }
        FieldType::Number => {
            let count = geometry.number_box_cap.min(fitting_boxes(placed.width, geometry));
            draw_char_boxes(placed.x, body_y, count, surface, geometry);
        }
        FieldType::Date => draw_date(placed.x, body_y, surface, geometry),
        FieldType::Select | FieldType::Radio => {
            let options = placed.field.effective_options();
            draw_options(placed, &options, true, body_y, surface, geometry);
        }
        FieldType::Checkbox => {
            let options = placed.field.effective_options();
            draw_options(placed, &options, false, body_y, surface, geometry);
        }
        FieldType::Boolean => {
            draw_options(placed, &BOOLEAN_OPTIONS, false, body_y, surface, geometry)
        }
        FieldType::Text | FieldType::Url | FieldType::File | FieldType::Other(_) => {
            draw_text_box(placed, body_y, surface, geometry)
        }
    }
}

/// Draw the wrapped label and return the Y where the field body starts.
fn draw_label<S>(placed: &PlacedField<'_>, surface: &mut S, geometry: &PageGeometry) -> f64
where
    S: DrawSurface + ?Sized,
{
    let style = TextStyle::bold(geometry.font_sizes.label);
    let lines = wrap_text(&placed.field.label_text(), placed.width, |s| {
        surface.measure_text_width(s, &style)
    });
    let baseline = placed.y + geometry.label_height * 0.7;
    for (i, line) in lines.iter().enumerate() {
        let y = baseline + i as f64 * geometry.label_line_height;
        surface.draw_text(line, placed.x, y, &style);
    }
    placed.y + geometry.label_height + (lines.len() - 1) as f64 * geometry.label_line_height
}

fn border(geometry: &PageGeometry) -> Stroke {
    Stroke::new(geometry.strokes.border, Color::BLACK)
}

fn guide(geometry: &PageGeometry) -> Stroke {
    Stroke::new(geometry.strokes.guide, Color::GUIDE)
}

/// How many character boxes fit across `width`.
fn fitting_boxes(width: f64, geometry: &PageGeometry) -> usize {
    if geometry.char_box_width <= 0.0 {
        return 0;
    }
    let count = (width / geometry.char_box_width).floor();
    if count.is_finite() {
        count.max(0.0) as usize
    } else {
        0
    }
}

fn draw_char_boxes<S>(x: f64, y: f64, count: usize, surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let stroke = border(geometry);
    for i in 0..count {
        surface.draw_rect(
            x + i as f64 * geometry.char_box_width,
            y,
            geometry.char_box_width,
            geometry.char_box_height,
            &stroke,
        );
    }
}

/// A single bordered box with a faint writing line near its bottom.
fn draw_text_box<S>(placed: &PlacedField<'_>, y: f64, surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let h = geometry.single_line_body;
    surface.draw_rect(placed.x, y, placed.width, h, &border(geometry));
    let line_y = y + h - 3.0;
    surface.draw_line(
        placed.x + 2.0,
        line_y,
        placed.right() - 2.0,
        line_y,
        &guide(geometry),
    );
}

/// One box filling the rest of the field, ruled at a fixed line spacing.
fn draw_textarea<S>(placed: &PlacedField<'_>, y: f64, surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let h = (placed.bottom() - y).max(geometry.single_line_body);
    surface.draw_rect(placed.x, y, placed.width, h, &border(geometry));

    let stroke = guide(geometry);
    let spacing = geometry.textarea_line_spacing;
    if spacing <= 0.0 {
        return;
    }
    let mut line_y = y + spacing;
    while line_y < y + h - 2.0 {
        surface.draw_line(placed.x + 2.0, line_y, placed.right() - 2.0, line_y, &stroke);
        line_y += spacing;
    }
}

/// MM / DD / YYYY box clusters separated by slashes.
fn draw_date<S>(x: f64, y: f64, surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let hint = TextStyle::regular(geometry.font_sizes.hint).with_color(Color::MUTED);
    let slash = TextStyle::regular(geometry.font_sizes.label);
    let bw = geometry.char_box_width;
    let box_y = y + 2.0;

    let mut cluster_x = x;
    for (i, (caption, count)) in DATE_CLUSTERS.iter().enumerate() {
        if i > 0 {
            surface.draw_text("/", cluster_x - DATE_SEPARATOR_GAP + 1.0, box_y + 5.5, &slash);
        }
        surface.draw_text(caption, cluster_x, y + 1.8, &hint);
        draw_char_boxes(cluster_x, box_y, *count, surface, geometry);
        cluster_x += *count as f64 * bw + DATE_SEPARATOR_GAP;
    }
}

/// A row (or two) of option markers, each followed by its text.
fn draw_options<S>(
    placed: &PlacedField<'_>,
    options: &[&str],
    round: bool,
    y: f64,
    surface: &mut S,
    geometry: &PageGeometry,
) where
    S: DrawSurface + ?Sized,
{
    let style = TextStyle::regular(geometry.font_sizes.option);
    let layout = layout_options(
        options,
        placed.width,
        |s| surface.measure_text_width(s, &style),
        geometry,
    );

    let stroke = border(geometry);
    let m = geometry.marker_size;
    let top = y + geometry.choice_base;

    for option in &layout.placements {
        let ox = placed.x + option.x;
        let oy = top + option.row as f64 * geometry.option_row_height;
        if round {
            surface.draw_circle(ox + m / 2.0, oy + m / 2.0, m / 2.0, &stroke);
        } else {
            surface.draw_rect(ox, oy, m, m, &stroke);
        }
        surface.draw_text(option.text, ox + m + 1.5, oy + m * 0.8, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Column, PlacedField};
    use crate::model::FieldDescriptor;
    use crate::render::{DisplayList, DrawOp};

    fn place(field: &FieldDescriptor, width: f64, height: f64) -> PlacedField<'_> {
        PlacedField {
            field,
            column: Column::Left,
            x: 10.0,
            y: 30.0,
            width,
            height,
        }
    }

    fn render(field: &FieldDescriptor, width: f64, height: f64) -> DisplayList {
        let g = PageGeometry::default();
        let mut list = DisplayList::new();
        render_field(&place(field, width, height), &mut list, &g);
        list
    }

    #[test]
    fn text_field_has_box_and_guide() {
        let f = FieldDescriptor::new("n", "Name", FieldType::Text);
        let list = render(&f, 93.0, 15.0);
        assert_eq!(list.texts(), vec!["Name"]);
        assert_eq!(list.rects().count(), 1);
        assert_eq!(list.lines().count(), 1);
        match list.rects().next() {
            Some(DrawOp::Rect { y, height, .. }) => {
                assert_eq!(*y, 35.0);
                assert_eq!(*height, 10.0);
            }
            other => panic!("expected rect, got {other:?}"),
        };
    }

    #[test]
    fn email_boxes_fill_width() {
        let f = FieldDescriptor::new("e", "Email", FieldType::Email);
        assert_eq!(render(&f, 93.0, 15.0).rects().count(), 15);
        assert_eq!(render(&f, 190.0, 15.0).rects().count(), 31);
    }

    #[test]
    fn phone_has_fixed_box_count() {
        let f = FieldDescriptor::new("p", "Phone", FieldType::Phone);
        assert_eq!(render(&f, 93.0, 15.0).rects().count(), 12);
        assert_eq!(render(&f, 190.0, 15.0).rects().count(), 12);
    }

    #[test]
    fn number_boxes_are_capped() {
        let f = FieldDescriptor::new("a", "Age", FieldType::Number);
        assert_eq!(render(&f, 93.0, 15.0).rects().count(), 10);
        assert_eq!(render(&f, 30.0, 15.0).rects().count(), 5);
    }

    #[test]
    fn date_has_three_clusters_and_two_slashes() {
        let f = FieldDescriptor::new("d", "Birthday", FieldType::Date);
        let list = render(&f, 93.0, 15.0);
        assert_eq!(list.rects().count(), 8);
        let texts = list.texts();
        assert_eq!(texts.iter().filter(|t| **t == "/").count(), 2);
        for caption in ["MM", "DD", "YYYY"] {
            assert!(texts.contains(&caption), "missing {caption}");
        }
    }

    #[test]
    fn textarea_is_ruled() {
        let f = FieldDescriptor::new("t", "Notes", FieldType::Textarea);
        let list = render(&f, 190.0, 35.0);
        assert_eq!(list.rects().count(), 1);
        // box 30mm tall, guides every 6mm while below bottom - 2: 6, 12, 18, 24
        assert_eq!(list.lines().count(), 4);
    }

    #[test]
    fn radio_draws_circles_checkbox_draws_squares() {
        let radio = FieldDescriptor::new("r", "Contact", FieldType::Radio)
            .with_options(["Email", "Phone", "Text"]);
        let list = render(&radio, 93.0, 19.0);
        assert_eq!(list.circles().count(), 3);
        assert_eq!(list.rects().count(), 0);

        let check = FieldDescriptor::new("c", "Contact", FieldType::Checkbox)
            .with_options(["Email", "Phone", "Text"]);
        let list = render(&check, 93.0, 19.0);
        assert_eq!(list.circles().count(), 0);
        assert_eq!(list.rects().count(), 3);
    }

    #[test]
    fn select_renders_as_radio() {
        let f = FieldDescriptor::new("s", "Size", FieldType::Select).with_options(["S", "M", "L"]);
        assert_eq!(render(&f, 93.0, 19.0).circles().count(), 3);
    }

    #[test]
    fn choice_without_options_gets_placeholders() {
        let f = FieldDescriptor::new("c", "Pick", FieldType::Checkbox);
        let list = render(&f, 93.0, 13.0);
        let texts = list.texts();
        assert!(texts.contains(&"Option 1"));
        assert!(texts.contains(&"Option 2"));
    }

    #[test]
    fn long_choice_label_wraps_and_pushes_options_down() {
        let label = "Which of the following community programs would you like to hear more about";
        let short =
            FieldDescriptor::new("c", "Programs", FieldType::Radio).with_options(["A", "B"]);
        let long = FieldDescriptor::new("c", label, FieldType::Radio).with_options(["A", "B"]);

        let first_marker_y = |list: &DisplayList| match list.circles().next() {
            Some(DrawOp::Circle { cy, .. }) => *cy,
            other => panic!("expected circle, got {other:?}"),
        };

        let short_list = render(&short, 93.0, 13.0);
        let long_list = render(&long, 93.0, 21.0);
        let label_lines = long_list.texts().len() - 2;
        assert!(label_lines >= 2, "label should wrap");
        let joined = long_list.texts()[..label_lines].join(" ");
        assert_eq!(joined, label);
        assert_eq!(
            first_marker_y(&long_list) - first_marker_y(&short_list),
            (label_lines - 1) as f64 * 4.0
        );
    }

    #[test]
    fn boolean_is_yes_no() {
        let f = FieldDescriptor::new("b", "Subscribe", FieldType::Boolean);
        let list = render(&f, 93.0, 15.0);
        assert_eq!(list.texts(), vec!["Subscribe", "Yes", "No"]);
        assert_eq!(list.rects().count(), 2);
    }

    #[test]
    fn unknown_type_falls_back_to_text_box() {
        let f = FieldDescriptor::new("x", "Signature", FieldType::Other("signature".to_string()));
        let list = render(&f, 93.0, 15.0);
        assert_eq!(list.rects().count(), 1);
        assert_eq!(list.lines().count(), 1);
    }

    #[test]
    fn required_label_has_asterisk() {
        let f = FieldDescriptor::new("n", "Name", FieldType::Text).required();
        assert_eq!(render(&f, 93.0, 15.0).texts()[0], "Name *");
    }

    #[test]
    fn wrapped_options_stay_inside_estimated_height() {
        let g = PageGeometry::default();
        let f = FieldDescriptor::new("c", "Consent", FieldType::Checkbox).with_options([
            "I agree to be contacted about upcoming volunteer events",
            "I agree to have my photo used in community newsletters",
        ]);
        let height = crate::layout::estimate_height(&f, &g);
        let placed = place(&f, g.column_width(), height);
        let list = render(&f, g.column_width(), height);

        let lowest = list
            .rects()
            .map(|op| match op {
                DrawOp::Rect { y, height, .. } => y + height,
                _ => 0.0,
            })
            .fold(0.0, f64::max);
        assert!(lowest > placed.y + 12.0, "second row was drawn");
        assert!(lowest <= placed.bottom());
    }
}
