// Event module
// A single timed session on the weekly timetable

use serde::{Deserialize, Serialize};

/// One scheduled session placed on the weekly grid.
///
/// `day` is the weekday number (1 = Monday .. 7 = Sunday), `start` and `end`
/// are whole hours. `weeks` lists the teaching weeks the session runs in;
/// more than one entry makes it a recurring session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub day: u8,
    pub start: u8,
    pub end: u8,
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub overlap: bool,
    #[serde(default)]
    pub weeks: Vec<u32>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `day` - Weekday number (1 = Monday)
    /// * `start` - Start hour
    /// * `end` - End hour (must be after `start`)
    ///
    /// # Examples
    /// ```
    /// use timetable_grid::models::event::Event;
    ///
    /// let event = Event::new(2, 9, 11).unwrap();
    /// assert_eq!(event.duration_hours(), 2);
    /// ```
    pub fn new(day: u8, start: u8, end: u8) -> Result<Self, String> {
        let event = Self {
            day,
            start,
            end,
            unit: String::new(),
            kind: String::new(),
            location: String::new(),
            overlap: false,
            weeks: Vec::new(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.end <= self.start {
            return Err("Event end hour must be after start hour".to_string());
        }
        Ok(())
    }

    /// Check if this session runs in more than one week
    pub fn is_recurring(&self) -> bool {
        self.weeks.len() > 1
    }

    /// Number of grid rows the event spans
    pub fn duration_hours(&self) -> u8 {
        self.end.saturating_sub(self.start)
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    day: Option<u8>,
    start: Option<u8>,
    end: Option<u8>,
    unit: Option<String>,
    kind: Option<String>,
    location: Option<String>,
    overlap: bool,
    weeks: Vec<u32>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weekday number
    pub fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    /// Set the start and end hours
    pub fn hours(mut self, start: u8, end: u8) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the unit code
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the session type (lecture, tutorial, ...)
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Flag the event as overlapping another one
    pub fn overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    /// Set the weeks the event runs in
    pub fn weeks(mut self, weeks: impl IntoIterator<Item = u32>) -> Self {
        self.weeks = weeks.into_iter().collect();
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let day = self.day.ok_or("Event day is required")?;
        let start = self.start.ok_or("Event start hour is required")?;
        let end = self.end.ok_or("Event end hour is required")?;

        let event = Event {
            day,
            start,
            end,
            unit: self.unit.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            overlap: self.overlap,
            weeks: self.weeks,
        };

        event.validate()?;
        Ok(event)
    }
}
