//! Horizontal layout of choice options.
//!
//! Options sit side by side after the label. Each option needs room for its
//! marker, its text and some padding. When the whole set fits the available
//! width they go on a single row, each advancing by its own width. When it
//! doesn't, the set splits into rows of `ceil(n / 2)` options spread over
//! equal cells.

use crate::geometry::PageGeometry;

/// Where one option goes, relative to the field's left edge and first row.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionPlacement<'a> {
    pub text: &'a str,
    /// Offset of the marker from the field's left edge.
    pub x: f64,
    pub row: usize,
    /// Horizontal space reserved for this option.
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionLayout<'a> {
    pub placements: Vec<OptionPlacement<'a>>,
    pub rows: usize,
    pub multi_row: bool,
    /// Sum of every option's natural width (marker + text + padding).
    pub natural_width: f64,
}

/// Natural width of a single option.
pub fn option_width<F>(text: &str, measure: &F, geometry: &PageGeometry) -> f64
where
    F: Fn(&str) -> f64,
{
    geometry.marker_size + measure(text) + geometry.option_padding
}

/// Arrange `options` into rows no wider than `available`.
pub fn layout_options<'a, F>(
    options: &[&'a str],
    available: f64,
    measure: F,
    geometry: &PageGeometry,
) -> OptionLayout<'a>
where
    F: Fn(&str) -> f64,
{
    let widths: Vec<f64> = options
        .iter()
        .map(|text| option_width(text, &measure, geometry))
        .collect();
    let natural_width: f64 = widths.iter().sum();

    if options.is_empty() {
        return OptionLayout {
            placements: vec![],
            rows: 0,
            multi_row: false,
            natural_width,
        };
    }

    if natural_width <= available {
        let mut x = 0.0;
        let placements = options
            .iter()
            .zip(&widths)
            .map(|(&text, &width)| {
                let placement = OptionPlacement { text, x, row: 0, width };
                x += width;
                placement
            })
            .collect();
        return OptionLayout {
            placements,
            rows: 1,
            multi_row: false,
            natural_width,
        };
    }

    let per_row = options.len().div_ceil(2);
    let cell = available / per_row as f64;
    let placements = options
        .iter()
        .enumerate()
        .map(|(i, &text)| OptionPlacement {
            text,
            x: (i % per_row) as f64 * cell,
            row: i / per_row,
            width: cell,
        })
        .collect();

    OptionLayout {
        placements,
        rows: options.len().div_ceil(per_row),
        multi_row: true,
        natural_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn short_options_share_one_row() {
        let g = PageGeometry::default();
        let layout = layout_options(&["Yes", "No"], 93.0, unit, &g);
        assert!(!layout.multi_row);
        assert_eq!(layout.rows, 1);
        // marker 4 + text 3 + padding 4
        assert_eq!(layout.placements[0].x, 0.0);
        assert_eq!(layout.placements[1].x, 11.0);
        assert!(layout.natural_width <= 93.0);
    }

    #[test]
    fn overflowing_options_split_into_two_rows() {
        let g = PageGeometry::default();
        let opts = ["Social Media", "Email Newsletter", "Friend or Family", "Website", "Other"];
        let layout = layout_options(&opts, 40.0, unit, &g);
        assert!(layout.multi_row);
        assert_eq!(layout.rows, 2);
        // ceil(5 / 2) = 3 per row
        let first_row: Vec<_> = layout.placements.iter().filter(|p| p.row == 0).collect();
        assert_eq!(first_row.len(), 3);
        assert!((layout.placements[1].x - 40.0 / 3.0).abs() < 1e-9);
        assert_eq!(layout.placements[3].row, 1);
        assert_eq!(layout.placements[3].x, 0.0);
    }

    #[test]
    fn exact_fit_stays_single_row() {
        let g = PageGeometry::default();
        // 4 + 2 + 4 = 10 each
        let layout = layout_options(&["ab", "cd"], 20.0, unit, &g);
        assert!(!layout.multi_row);
        let layout = layout_options(&["ab", "cd"], 19.99, unit, &g);
        assert!(layout.multi_row);
    }

    #[test]
    fn no_options_no_rows() {
        let g = PageGeometry::default();
        let layout = layout_options(&[], 93.0, unit, &g);
        assert_eq!(layout.rows, 0);
        assert!(layout.placements.is_empty());
    }
}
