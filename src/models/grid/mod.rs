//! Display props handed to the label and event renderers.
//!
//! Each struct is a flat, serializable snapshot of one rendered item. Grid
//! coordinates are `None` when the underlying domain value has no position
//! in the current mapping.

use serde::{Deserialize, Serialize};

/// A day column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLabelProps {
    /// Position within the rendered day label list (used for hiding)
    pub index: usize,
    /// Weekday number
    pub day: u8,
    pub column: Option<u32>,
    /// Short weekday name, empty for unnamed days
    pub text: String,
    pub hidden: bool,
}

/// An hour row header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourLabelProps {
    /// Position within the rendered hour label list (used for hiding)
    pub index: usize,
    pub hour: u8,
    pub row: Option<u32>,
    /// Zero padded `HH:00`
    pub text: String,
    pub hidden: bool,
}

/// A single event block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProps {
    /// Position within the input event list (used for hiding)
    pub index: usize,
    /// Index of the event's unit within the supplied unit list, drives the colour
    pub unit_index: Option<usize>,
    pub column: Option<u32>,
    pub row_start: Option<u32>,
    pub row_end: Option<u32>,
    pub overlap: bool,
    pub hidden: bool,
    pub unit: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    /// Week labels to show next to the event (see `resolve_exceptions`)
    pub exceptions: Vec<String>,
}
