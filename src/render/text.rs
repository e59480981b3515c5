//! Greedy word wrapping for labels.
//!
//! Break opportunities come from UAX#14 so hyphenated words and slashes
//! ("Friend/Family") break where a reader expects. Each line takes as many
//! segments as fit; a single segment wider than the line goes on a line of
//! its own rather than being cut.

use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Wrap `text` into lines no wider than `max_width` as measured by `measure`.
///
/// Always returns at least one line (empty text yields one empty line).
pub fn wrap_text<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (end, opportunity) in linebreaks(text) {
        let segment = &text[start..end];
        start = end;

        let candidate = format!("{}{}", current, segment);
        if current.is_empty() || measure(candidate.trim_end()) <= max_width {
            current = candidate;
        } else {
            lines.push(current.trim_end().to_string());
            current = segment.to_string();
        }

        if opportunity == BreakOpportunity::Mandatory {
            let line = current.trim_end_matches(['\n', '\r']).trim_end().to_string();
            if !line.is_empty() || end < text.len() {
                lines.push(line);
            }
            current.clear();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every char is one unit wide.
    fn unit(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text("Name", 20.0, unit), vec!["Name"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 20.0, unit), vec![""]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("How did you hear about this event", 12.0, unit);
        assert_eq!(lines, vec!["How did you", "hear about", "this event"]);
        for line in &lines {
            assert!(unit(line) <= 12.0);
        }
    }

    #[test]
    fn long_word_is_not_truncated() {
        let lines = wrap_text("Supercalifragilistic yes", 8.0, unit);
        assert_eq!(lines, vec!["Supercalifragilistic", "yes"]);
    }

    #[test]
    fn no_text_is_lost() {
        let text = "Preferred contact method for follow-up communication";
        let lines = wrap_text(text, 15.0, unit);
        let rejoined: String = lines.join(" ");
        let normalized = rejoined.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(normalized.replace("- ", "-"), text);
    }
}
