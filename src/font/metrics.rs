//! Advance widths for the standard PDF fonts we draw with.
//!
//! Values are the AFM widths (1/1000 em) for the printable ASCII range
//! 0x20..=0x7E. Characters outside that range fall back to `default_width`,
//! which is close enough for label wrapping and option sizing.

/// Width table for one standard font.
#[derive(Debug, Clone, Copy)]
pub struct StandardFontMetrics {
    widths: &'static [u16; 95],
    default_width: u16,
}

impl StandardFontMetrics {
    /// Advance width of a character in points at the given size.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        let cp = ch as u32;
        let w = if (0x20..=0x7E).contains(&cp) {
            self.widths[(cp - 0x20) as usize]
        } else {
            self.default_width
        };
        w as f64 / 1000.0 * font_size
    }

    /// Width of a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64, letter_spacing: f64) -> f64 {
        text.chars()
            .map(|ch| self.char_width(ch, font_size) + letter_spacing)
            .sum()
    }
}

pub const HELVETICA: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
    ],
    default_width: 556,
};

pub const HELVETICA_BOLD: StandardFontMetrics = StandardFontMetrics {
    widths: &[
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
    ],
    default_width: 611,
};
