//! Time utilities: parsing log-sheet timestamps into hours, formatting hours.

/// Convert a log-sheet timestamp into hours as a real number.
///
/// Accepted forms:
/// - `HH:MM:SS` → `HH + MM/60 + SS/3600`
/// - `<N> day(s), HH:MM:SS` → `N*24 + HH + MM/60 + SS/3600`
///
/// Hours may be a single digit and seconds may carry a fraction, as printed
/// by Python `timedelta`. Anything else returns `None`.
pub fn parse_time_to_hours(t: &str) -> Option<f64> {
    let t = t.trim();

    if t.contains("day") {
        let (day_part, clock) = t.split_once(',')?;
        let days = parse_day_count(day_part)?;
        return parse_clock(clock.trim()).map(|h| days * 24.0 + h);
    }

    parse_clock(t)
}

/// "1 day" / "-1 day" / "3 days" → signed day count
fn parse_day_count(s: &str) -> Option<f64> {
    let mut parts = s.split_whitespace();
    let count = parts.next()?.parse::<i64>().ok()?;
    match parts.next() {
        Some("day") | Some("days") => Some(count as f64),
        _ => None,
    }
}

fn parse_clock(s: &str) -> Option<f64> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let h = parse_component(parts[0])?;
    let m = parse_component(parts[1])?;
    let sec = parse_component(parts[2])?;

    Some(h + m / 60.0 + sec / 3600.0)
}

fn parse_component(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount of hours as `HH:MM` (rounded to the minute).
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "--:--".to_string();
    }
    let total = (hours * 60.0).round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let m = total.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Absolute hours → time of day. An interval ending exactly at midnight
/// ends at `24:00`, not `00:00`.
pub fn wall_clock(hours: f64, is_end: bool) -> String {
    let in_day = hours.rem_euclid(24.0);
    if is_end && in_day == 0.0 && hours > 0.0 {
        return "24:00".to_string();
    }
    format_hours(in_day)
}

/// Wall-clock hour label for a gridline: `(start + offset) mod 24` as `HH:00`.
pub fn hour_label(start_hour: i64, offset: i64) -> String {
    format!("{:02}:00", (start_hour + offset).rem_euclid(24))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wall_clock_wraps_multi_day_hours() {
        assert_eq!(wall_clock(26.5, false), "02:30");
        assert_eq!(wall_clock(6.0, true), "06:00");
        assert_eq!(wall_clock(26.0, true), "02:00");
        assert_eq!(wall_clock(24.0, true), "24:00");
        assert_eq!(wall_clock(24.0, false), "00:00");
    }

    #[test]
    fn plain_clock() {
        assert!(approx(parse_time_to_hours("06:30:00").unwrap(), 6.5));
        assert!(approx(parse_time_to_hours("0:00:36").unwrap(), 0.01));
        assert!(approx(parse_time_to_hours("23:59:00").unwrap(), 23.0 + 59.0 / 60.0));
    }

    #[test]
    fn multi_day_form() {
        assert_eq!(parse_time_to_hours("1 day, 02:30:00"), Some(26.5));
        assert_eq!(parse_time_to_hours("2 days, 00:00:00"), Some(48.0));
        assert_eq!(parse_time_to_hours("-1 day, 23:00:00"), Some(-1.0));
    }

    #[test]
    fn fractional_seconds() {
        let h = parse_time_to_hours("0:00:01.800000").unwrap();
        assert!(approx(h, 1.8 / 3600.0));
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        for bad in [
            "", "12:00", "ab:cd:ef", "12:xx:00", "1 day 02:30:00", "x day, 01:00:00",
            "1 week, 01:00:00", "-3:00:00", "12:00:00:00", "NaN:00:00", "inf:00:00",
        ] {
            assert_eq!(parse_time_to_hours(bad), None, "input {bad:?}");
        }
    }

    #[test]
    fn monotonic_within_same_day_prefix() {
        let mut times = Vec::new();
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                for s in [0, 29, 59] {
                    times.push(format!("{h:02}:{m:02}:{s:02}"));
                }
            }
        }
        times.sort();

        let parsed: Vec<f64> = times
            .iter()
            .map(|t| parse_time_to_hours(t).unwrap())
            .collect();
        assert!(parsed.windows(2).all(|w| w[0] <= w[1]));

        let with_day: Vec<f64> = times
            .iter()
            .map(|t| parse_time_to_hours(&format!("1 day, {t}")).unwrap())
            .collect();
        assert!(with_day.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn format_and_labels() {
        assert_eq!(format_hours(26.5), "26:30");
        assert_eq!(format_hours(-0.25), "-00:15");
        assert_eq!(format_hours(f64::NAN), "--:--");
        assert_eq!(hour_label(22, 3), "01:00");
        assert_eq!(hour_label(6, 0), "06:00");
    }
}
