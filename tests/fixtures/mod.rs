// Test fixtures - reusable test data
// Provides consistent timetable data across test files

#![allow(dead_code)]

use timetable_grid::models::event::Event;
use timetable_grid::models::week_reference::WeekReference;

/// Semester timetable as the data loader would hand it over
pub const SEMESTER_JSON: &str = r#"[
    { "day": 1, "start": 10, "end": 12, "unit": "FIT2004", "type": "Lecture",  "location": "S3",    "overlap": false, "weeks": [1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12] },
    { "day": 1, "start": 14, "end": 16, "unit": "MTH2010", "type": "Workshop", "location": "G12",   "overlap": false, "weeks": [1, 3, 5, 8, 10, 12] },
    { "day": 3, "start": 9,  "end": 10, "unit": "FIT2004", "type": "Tutorial", "location": "LTB",   "overlap": true,  "weeks": [2, 3, 4, 5, 6, 8, 9, 10, 11, 12] },
    { "day": 3, "start": 9,  "end": 11, "unit": "FIT2100", "type": "Lab",      "location": "14 Rn", "overlap": true,  "weeks": [6] },
    { "day": 5, "start": 15, "end": 18, "unit": "FIT2100", "type": "Lecture",  "location": "E7",    "overlap": false, "weeks": [1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12] }
]"#;

pub fn semester_events() -> Vec<Event> {
    serde_json::from_str(SEMESTER_JSON).expect("fixture events should parse")
}

pub fn semester_units() -> Vec<String> {
    ["FIT2004", "FIT2100", "MTH2010"]
        .iter()
        .map(|unit| unit.to_string())
        .collect()
}

/// Twelve teaching weeks with a break after week 6
pub fn semester_weeks() -> WeekReference {
    let mut weeks = WeekReference::new();
    for week in 1..=6 {
        weeks.insert(week, format!("W{}", week));
    }
    weeks.insert(7, "Break");
    for week in 8..=12 {
        weeks.insert(week, format!("W{}", week - 1));
    }
    weeks
}

/// The two-event layout used throughout the grid tests
pub fn two_sessions() -> Vec<Event> {
    vec![Event::new(2, 9, 10).unwrap(), Event::new(4, 13, 15).unwrap()]
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
