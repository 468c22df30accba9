// Date utility functions
// Label text for day columns and hour rows

use chrono::Weekday;

/// Map a weekday number (1 = Monday .. 7 = Sunday) to a chrono weekday.
pub fn weekday_from_number(day: u8) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Short day name ("Mon"), empty for numbers outside the week.
pub fn day_label(day: u8) -> String {
    weekday_from_number(day)
        .map(|weekday| weekday.to_string())
        .unwrap_or_default()
}

/// Hour row label, zero padded: `09:00`.
pub fn hour_label(hour: u8) -> String {
    format!("{:02}:00", hour)
}
