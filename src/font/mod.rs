//! # Font Metrics
//!
//! The form only ever uses two of the 14 standard PDF fonts, Helvetica and
//! Helvetica-Bold. Neither needs embedding, so all we carry is their width
//! tables for measuring labels and option text.

pub mod metrics;

pub use metrics::StandardFontMetrics;

use crate::geometry::MM_PER_PT;

/// The standard fonts used on a paper form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in content streams (`/F1`, `/F2`).
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    pub fn metrics(&self) -> &'static StandardFontMetrics {
        match self {
            Self::Helvetica => &metrics::HELVETICA,
            Self::HelveticaBold => &metrics::HELVETICA_BOLD,
        }
    }

    /// Width of `text` in millimeters at `font_size` points.
    pub fn measure_mm(&self, text: &str, font_size: f64) -> f64 {
        self.metrics().measure_string(text, font_size, 0.0) * MM_PER_PT
    }
}
