use chrono::{DateTime, Local};

const HOURS_PER_DAY: u32 = 24;
const HOURS_PER_WEEK: u32 = 168;

/// Render an hour count as a human label: "1 hour", "8 hours", "1 day",
/// "2 weeks".
///
/// Exact week multiples render as weeks and exact day multiples as days;
/// anything else falls back to plain hours (30 -> "30 hours"), so the label
/// is never a lossy rounding of the configured value.
pub fn format_duration(hours: u32) -> String {
    if hours >= HOURS_PER_WEEK && hours % HOURS_PER_WEEK == 0 {
        pluralize(hours / HOURS_PER_WEEK, "week")
    } else if hours >= HOURS_PER_DAY && hours % HOURS_PER_DAY == 0 {
        pluralize(hours / HOURS_PER_DAY, "day")
    } else {
        pluralize(hours, "hour")
    }
}

/// Render a full instant for display, e.g. "Aug 7, 2026 3:04 PM".
pub fn format_instant(at: DateTime<Local>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Render the calendar day of an instant, e.g. "Aug 7, 2026".
pub fn format_day(at: DateTime<Local>) -> String {
    at.format("%b %-d, %Y").to_string()
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, "1 hour")]
    #[case(2, "2 hours")]
    #[case(4, "4 hours")]
    #[case(12, "12 hours")]
    #[case(23, "23 hours")]
    #[case(24, "1 day")]
    #[case(48, "2 days")]
    #[case(72, "3 days")]
    #[case(168, "1 week")]
    #[case(336, "2 weeks")]
    fn test_format_duration_presets(#[case] hours: u32, #[case] expected: &str) {
        assert_eq!(format_duration(hours), expected);
    }

    #[rstest]
    #[case(30, "30 hours")]
    #[case(25, "25 hours")]
    #[case(200, "200 hours")]
    #[case(192, "8 days")]
    #[case(169, "169 hours")]
    fn test_format_duration_non_multiples_fall_back(#[case] hours: u32, #[case] expected: &str) {
        assert_eq!(format_duration(hours), expected);
    }

    #[test]
    fn test_format_instant() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 15, 4, 0).unwrap();
        assert_eq!(format_instant(at), "Mar 9, 2024 3:04 PM");
    }

    #[test]
    fn test_format_instant_morning() {
        let at = Local.with_ymd_and_hms(2024, 12, 31, 0, 30, 0).unwrap();
        assert_eq!(format_instant(at), "Dec 31, 2024 12:30 AM");
    }

    #[test]
    fn test_format_day() {
        let at = Local.with_ymd_and_hms(2025, 1, 2, 23, 59, 0).unwrap();
        assert_eq!(format_day(at), "Jan 2, 2025");
    }
}
