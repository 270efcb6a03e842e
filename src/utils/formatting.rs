//! Formatting utilities used for CLI outputs.

use crate::utils::time::format_hours;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours as `07h 30m`; `short` gives `07:30`.
pub fn hours2readable(hours: f64, short: bool) -> String {
    if short {
        return format_hours(hours);
    }
    if !hours.is_finite() {
        return "--h --m".to_string();
    }
    let total = (hours * 60.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let m = total.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Day selector line: selected day in bold between brackets.
pub fn selector_entry(label: &str, selected: bool) -> String {
    if selected {
        bold(&format!("[{label}]"))
    } else {
        format!(" {label} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_hours() {
        assert_eq!(hours2readable(7.5, false), "07h 30m");
        assert_eq!(hours2readable(7.5, true), "07:30");
        assert_eq!(hours2readable(-0.5, false), "-00h 30m");
    }

    #[test]
    fn selector_marks_selection() {
        assert_eq!(selector_entry("Day 1 (2025-03-01)", false), " Day 1 (2025-03-01) ");
        assert!(selector_entry("Day 1 (2025-03-01)", true).contains("[Day 1 (2025-03-01)]"));
    }
}
