//! # PDF Serializer
//!
//! A [`DrawSurface`] that turns drawing primitives into PDF content-stream
//! operators, and a writer that wraps that stream into a complete
//! single-page PDF 1.7 file.
//!
//! We write the raw bytes ourselves. A paper form only needs stroked
//! rectangles, lines, Bézier circles and text in two standard fonts.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj Catalog
//! 2 0 obj Pages
//! 3 0 obj Helvetica        (Type1, no embedding)
//! 4 0 obj Helvetica-Bold
//! 5 0 obj content stream   (FlateDecode)
//! 6 0 obj Page
//! 7 0 obj Info             (optional)
//! xref / trailer / %%EOF
//! ```
//!
//! Geometry arrives in millimeters with y growing downward; the surface
//! converts to points and flips y against the page height.

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::font::StandardFont;
use crate::geometry::MM_PER_PT;
use crate::render::{aligned_x, Color, DrawSurface, Stroke, TextStyle};

/// Bézier control-point factor for approximating a quarter circle.
const KAPPA: f64 = 0.5522847498;

fn pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

/// Accumulates content-stream operators for one page.
pub struct PdfSurface {
    page_width: f64,
    page_height: f64,
    stream: String,
}

impl PdfSurface {
    /// A blank page of the given size in millimeters.
    pub fn new(page_width: f64, page_height: f64) -> Self {
        Self {
            page_width,
            page_height,
            stream: String::new(),
        }
    }

    /// The uncompressed content stream written so far.
    pub fn content(&self) -> &str {
        &self.stream
    }

    /// Page size in points.
    pub fn page_size_pt(&self) -> (f64, f64) {
        (pt(self.page_width), pt(self.page_height))
    }

    fn y(&self, y: f64) -> f64 {
        pt(self.page_height - y)
    }

    fn begin_stroke(&mut self, stroke: &Stroke) {
        let c = stroke.color;
        let _ = write!(
            self.stream,
            "q\n{:.3} {:.3} {:.3} RG\n{:.2} w\n",
            c.r,
            c.g,
            c.b,
            pt(stroke.width)
        );
    }
}

impl DrawSurface for PdfSurface {
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, stroke: &Stroke) {
        self.begin_stroke(stroke);
        let _ = write!(
            self.stream,
            "{:.2} {:.2} {:.2} {:.2} re\nS\nQ\n",
            pt(x),
            self.y(y + height),
            pt(width),
            pt(height)
        );
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke) {
        self.begin_stroke(stroke);
        let (y1, y2) = (self.y(y1), self.y(y2));
        let _ = write!(
            self.stream,
            "{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ\n",
            pt(x1),
            y1,
            pt(x2),
            y2
        );
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke: &Stroke) {
        self.begin_stroke(stroke);
        let (cx, cy, r) = (pt(cx), self.y(cy), pt(radius));
        let k = r * KAPPA;
        let _ = write!(self.stream, "{:.2} {:.2} m\n", cx + r, cy);
        let curves = [
            (cx + r, cy + k, cx + k, cy + r, cx, cy + r),
            (cx - k, cy + r, cx - r, cy + k, cx - r, cy),
            (cx - r, cy - k, cx - k, cy - r, cx, cy - r),
            (cx + k, cy - r, cx + r, cy - k, cx + r, cy),
        ];
        for (x1, y1, x2, y2, x3, y3) in curves {
            let _ = write!(
                self.stream,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
                x1, y1, x2, y2, x3, y3
            );
        }
        let _ = write!(self.stream, "h\nS\nQ\n");
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let width = self.measure_text_width(text, style);
        let x = aligned_x(x, width, style.align);
        let Color { r, g, b } = style.color;
        let _ = write!(
            self.stream,
            "BT\n{:.3} {:.3} {:.3} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
            r,
            g,
            b,
            style.font.resource_name(),
            style.size,
            pt(x),
            self.y(y),
            encode_winansi(text)
        );
    }
}

/// Document metadata embedded in the PDF Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: Option<String>,
    pub subject: Option<String>,
}

pub struct PdfWriter;

struct PdfObject {
    data: Vec<u8>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write a finished surface as a single-page PDF.
    pub fn write(&self, surface: &PdfSurface, metadata: &Metadata) -> Vec<u8> {
        let fonts = [StandardFont::Helvetica, StandardFont::HelveticaBold];
        // Object 0 is the free-list head; real objects are 1-indexed.
        let mut objects: Vec<PdfObject> = vec![PdfObject { data: vec![] }];

        objects.push(PdfObject {
            data: b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        });
        objects.push(PdfObject {
            data: b"<< /Type /Pages /Kids [6 0 R] /Count 1 >>".to_vec(),
        });

        for font in fonts {
            objects.push(PdfObject {
                data: format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.pdf_name()
                )
                .into_bytes(),
            });
        }

        let compressed = compress_to_vec_zlib(surface.content().as_bytes(), 6);
        let mut content_data: Vec<u8> = Vec::new();
        let _ = write!(
            content_data,
            "<< /Length {} /Filter /FlateDecode >>\nstream\n",
            compressed.len()
        );
        content_data.extend_from_slice(&compressed);
        content_data.extend_from_slice(b"\nendstream");
        objects.push(PdfObject { data: content_data });

        let font_resources: String = fonts
            .iter()
            .enumerate()
            .map(|(i, font)| format!("/{} {} 0 R", font.resource_name(), i + 3))
            .collect::<Vec<_>>()
            .join(" ");
        let (w, h) = surface.page_size_pt();
        objects.push(PdfObject {
            data: format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents 5 0 R /Resources << /Font << {} >> >> >>",
                w, h, font_resources
            )
            .into_bytes(),
        });

        let info_obj_id = if metadata.title.is_some() || metadata.subject.is_some() {
            let mut info = String::from("<< ");
            if let Some(ref title) = metadata.title {
                let _ = write!(info, "/Title ({}) ", encode_winansi(title));
            }
            if let Some(ref subject) = metadata.subject {
                let _ = write!(info, "/Subject ({}) ", encode_winansi(subject));
            }
            let _ = write!(
                info,
                "/Producer (paperform {}) /Creator (paperform) >>",
                env!("CARGO_PKG_VERSION")
            );
            objects.push(PdfObject {
                data: info.into_bytes(),
            });
            Some(objects.len() - 1)
        } else {
            None
        };

        Self::serialize(&objects, info_obj_id)
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(objects: &[PdfObject], info_obj_id: Option<usize>) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let _ = write!(output, "{} 0 obj\n", i);
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(output, "trailer\n<< /Size {} /Root 1 0 R", objects.len());
        if let Some(info_id) = info_obj_id {
            let _ = write!(output, " /Info {} 0 R", info_id);
        }
        let _ = write!(output, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);

        output
    }
}

/// Encode text as the body of a PDF literal string in WinAnsiEncoding.
///
/// Delimiters are escaped, bytes outside printable ASCII become octal
/// escapes, and characters WinAnsi can't represent become `?`.
fn encode_winansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let b = unicode_to_winansi(ch).unwrap_or(b'?');
        match b {
            b'\\' => out.push_str("\\\\"),
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            0x20..=0x7E => out.push(b as char),
            _ => {
                let _ = write!(out, "\\{:03o}", b);
            }
        }
    }
    out
}

/// Map a Unicode codepoint to a WinAnsiEncoding byte value.
///
/// WinAnsiEncoding is based on Windows-1252. Most codepoints in
/// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
/// contains special mappings for smart quotes, bullets, dashes, etc.
fn unicode_to_winansi(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    match cp {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}
