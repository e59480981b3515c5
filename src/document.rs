//! # Document Assembly
//!
//! Builds the finished page around the balanced fields:
//!
//! ```text
//!  ┌┐                                   ┌┐   corner markers
//!              Form Title                     14pt bold
//!        optional description                 7pt
//!   PRINT CLEARLY IN BLACK OR BLUE INK • ...  instruction line
//!  ─────────────────────────────────────────  separator rule
//!   [field]              [field]
//!   [full-width textarea.................]
//!   ...
//!  Form ID: x      Scan at 300 DPI ...      Generated: 2026-01-01
//!  └┘                                   └┘
//! ```
//!
//! [`compose`] draws onto any [`DrawSurface`]; [`generate`] runs it against
//! the PDF backend and serializes the result.

use chrono::{Local, NaiveDate};

use crate::error::{PaperFormError, Result};
use crate::geometry::PageGeometry;
use crate::layout::{layout, LayoutWarning};
use crate::model::{FieldType, FormConfig};
use crate::pdf::{Metadata, PdfSurface, PdfWriter};
use crate::render::{render_field, wrap_text, Color, DrawSurface, Stroke, TextAlign, TextStyle};

pub const INSTRUCTIONS: &str =
    "PRINT CLEARLY IN BLACK OR BLUE INK • STAY WITHIN BOXES • USE BLOCK LETTERS";
pub const SCAN_NOTE: &str = "Scan at 300 DPI minimum • Ensure good lighting • Keep form flat";

/// Vertical advance after each title line.
const TITLE_ADVANCE: f64 = 6.0;
const DESCRIPTION_ADVANCE: f64 = 4.0;
const INSTRUCTION_ADVANCE: f64 = 5.0;
/// Gap between the separator rule and the first field.
const RULE_ADVANCE: f64 = 5.0;
/// Footer baseline distance below the printable bottom.
const FOOTER_OFFSET: f64 = 5.0;

/// Per-call settings. Nothing here is global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub geometry: PageGeometry,
    /// Date printed in the footer. `None` means today, local time.
    pub generated_on: Option<NaiveDate>,
}

impl RenderOptions {
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    fn date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// A finished form.
#[derive(Debug, Clone)]
pub struct RenderedForm {
    pub bytes: Vec<u8>,
    /// Suggested file name, see [`sanitize_file_name`].
    pub file_name: String,
    /// Everything that went wrong without stopping the render.
    pub warnings: Vec<LayoutWarning>,
}

/// Lay out and render `config` into a single-page PDF.
#[tracing::instrument(
    skip_all,
    fields(form_id = %config.form_id, field_count = config.fields.len())
)]
pub fn generate(config: &FormConfig, options: &RenderOptions) -> Result<RenderedForm> {
    let geometry = &options.geometry;
    validate_geometry(geometry)?;

    let mut surface = PdfSurface::new(geometry.page_width, geometry.page_height);
    let warnings = compose(config, geometry, options.date(), &mut surface);

    let metadata = Metadata {
        title: Some(config.title.clone()),
        subject: config.description.clone(),
    };
    let bytes = PdfWriter::new().write(&surface, &metadata);

    tracing::debug!(bytes = bytes.len(), warnings = warnings.len(), "rendered paper form");

    Ok(RenderedForm {
        bytes,
        file_name: sanitize_file_name(&config.title),
        warnings,
    })
}

fn validate_geometry(geometry: &PageGeometry) -> Result<()> {
    if geometry.page_width <= 0.0 || geometry.page_height <= 0.0 {
        return Err(PaperFormError::InvalidForm(format!(
            "page size must be positive, got {}x{}mm",
            geometry.page_width, geometry.page_height
        )));
    }
    let sizes = [
        ("charBoxWidth", geometry.char_box_width),
        ("charBoxHeight", geometry.char_box_height),
        ("markerSize", geometry.marker_size),
        ("optionRowHeight", geometry.option_row_height),
    ];
    for (name, value) in sizes {
        if !(value > 0.0 && value.is_finite()) {
            return Err(PaperFormError::InvalidForm(format!(
                "`{}` must be a positive length, got {}",
                name, value
            )));
        }
    }
    if geometry.column_width() <= 0.0 {
        return Err(PaperFormError::InvalidForm(format!(
            "margins and column gap leave no room for columns on a {}mm wide page",
            geometry.page_width
        )));
    }
    Ok(())
}

/// Draw the whole page onto `surface` and return the collected warnings.
pub fn compose<S>(
    config: &FormConfig,
    geometry: &PageGeometry,
    date: NaiveDate,
    surface: &mut S,
) -> Vec<LayoutWarning>
where
    S: DrawSurface + ?Sized,
{
    draw_corner_markers(surface, geometry);
    let start_y = draw_header(config, surface, geometry);
    tracing::debug!(start_y, max_y = geometry.max_y(), "header drawn");

    let mut warnings = field_warnings(config);
    for warning in &warnings {
        tracing::warn!(%warning, "degraded field");
    }

    let plan = layout(&config.fields, start_y, geometry.max_y(), geometry);
    for placed in &plan.placed {
        render_field(placed, surface, geometry);
    }
    warnings.extend(plan.overflows);

    draw_footer(config, date, surface, geometry);
    warnings
}

fn field_warnings(config: &FormConfig) -> Vec<LayoutWarning> {
    let mut warnings = Vec::new();
    for field in &config.fields {
        if let FieldType::Other(tag) = &field.field_type {
            warnings.push(LayoutWarning::UnsupportedFieldType {
                field_id: field.id.clone(),
                field_type: tag.clone(),
            });
        }
        if field.has_missing_options() {
            warnings.push(LayoutWarning::EmptyOptions {
                field_id: field.id.clone(),
            });
        }
    }
    warnings
}

/// L-shaped registration marks in each page corner.
fn draw_corner_markers<S>(surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let stroke = Stroke::new(geometry.strokes.thick, Color::BLACK);
    let inset = geometry.corner_marker_inset;
    let len = geometry.corner_marker_length;
    let (left, right) = (inset, geometry.page_width - inset);
    let (top, bottom) = (inset, geometry.page_height - inset);

    // (corner x, corner y, horizontal direction, vertical direction)
    let corners = [
        (left, top, 1.0, 1.0),
        (right, top, -1.0, 1.0),
        (left, bottom, 1.0, -1.0),
        (right, bottom, -1.0, -1.0),
    ];
    for (x, y, dx, dy) in corners {
        surface.draw_line(x, y, x + dx * len, y, &stroke);
        surface.draw_line(x, y, x, y + dy * len, &stroke);
    }
}

/// Draw title, description, instructions and the separator rule. Returns the
/// Y where fields start.
fn draw_header<S>(config: &FormConfig, surface: &mut S, geometry: &PageGeometry) -> f64
where
    S: DrawSurface + ?Sized,
{
    let center = geometry.page_width / 2.0;
    let width = geometry.content_width();
    let mut y = geometry.margin.top;

    let title_style = TextStyle::bold(geometry.font_sizes.title).with_align(TextAlign::Center);
    let title_lines = wrap_text(&config.title, width, |s| {
        surface.measure_text_width(s, &title_style)
    });
    for line in &title_lines {
        surface.draw_text(line, center, y, &title_style);
        y += TITLE_ADVANCE;
    }

    if let Some(description) = config.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let style = TextStyle::regular(geometry.font_sizes.instructions)
            .with_color(Color::MUTED)
            .with_align(TextAlign::Center);
        let lines = wrap_text(description, width, |s| surface.measure_text_width(s, &style));
        for line in &lines {
            surface.draw_text(line, center, y, &style);
            y += DESCRIPTION_ADVANCE;
        }
    }

    let instruction_style = TextStyle::regular(geometry.font_sizes.instructions)
        .with_color(Color::INSTRUCTION)
        .with_align(TextAlign::Center);
    surface.draw_text(INSTRUCTIONS, center, y, &instruction_style);
    y += INSTRUCTION_ADVANCE;

    surface.draw_line(
        geometry.margin.left,
        y,
        geometry.page_width - geometry.margin.right,
        y,
        &Stroke::new(geometry.strokes.rule, Color::BLACK),
    );
    y + RULE_ADVANCE
}

fn draw_footer<S>(config: &FormConfig, date: NaiveDate, surface: &mut S, geometry: &PageGeometry)
where
    S: DrawSurface + ?Sized,
{
    let y = geometry.max_y() + FOOTER_OFFSET;
    let style = TextStyle::regular(geometry.font_sizes.footer).with_color(Color::MUTED);

    surface.draw_text(
        &format!("Form ID: {}", config.form_id),
        geometry.margin.left,
        y,
        &style,
    );
    surface.draw_text(
        SCAN_NOTE,
        geometry.page_width / 2.0,
        y,
        &style.with_align(TextAlign::Center),
    );
    surface.draw_text(
        &format!("Generated: {}", date.format("%Y-%m-%d")),
        geometry.page_width - geometry.margin.right,
        y,
        &style.with_align(TextAlign::Right),
    );
}

/// `"Customer Survey 2026"` becomes `"Customer_Survey_2026_paper_form.pdf"`.
///
/// Every character that is not an ASCII letter or digit is replaced with an
/// underscore, one for one.
pub fn sanitize_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_paper_form.pdf")
}
