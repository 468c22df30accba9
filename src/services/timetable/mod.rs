//! Weekly timetable component.
//!
//! Owns the input events and the current [`GridState`], and turns them into
//! label and event props for the display layer. All interaction callbacks
//! replace the state through pure transitions.

mod error;
mod exceptions;
mod range;
mod visibility;

pub use error::{TimetableError, TimetableResult};
pub use exceptions::{resolve_exceptions, ExceptionCache, DEFAULT_ONLY_LABEL};
pub use range::{day_mapping, hour_mapping, RangeMapping};
pub use visibility::{GridAction, GridState, VisibilityState};

use std::cell::RefCell;

use crate::models::event::Event;
use crate::models::grid::{DayLabelProps, EventProps, HourLabelProps};
use crate::models::settings::TimetableSettings;
use crate::models::week_reference::WeekReference;
use crate::utils::date::{day_label, hour_label};

pub struct Timetable {
    events: Vec<Event>,
    units: Vec<String>,
    settings: TimetableSettings,
    exceptions: RefCell<ExceptionCache>,
    state: GridState,
}

impl Timetable {
    /// Validate `events` and compute the initial grid.
    ///
    /// A break sentinel set in `settings` replaces the week reference's own;
    /// otherwise the reference keeps its label.
    pub fn new(
        events: Vec<Event>,
        units: Vec<String>,
        week_reference: Option<WeekReference>,
        settings: TimetableSettings,
    ) -> TimetableResult<Self> {
        if let Some((index, event)) = events
            .iter()
            .enumerate()
            .find(|(_, event)| event.validate().is_err())
        {
            return Err(TimetableError::InvalidEvent {
                index,
                start: event.start,
                end: event.end,
            });
        }

        let state = GridState::initialize(&events, settings.base_offset)?;
        log::info!(
            "Timetable initialized: {} events, days {}..={}, hours {}..{}",
            events.len(),
            state.days.min,
            state.days.max,
            state.hours.min,
            state.hours.max
        );

        let week_reference = match (week_reference, &settings.break_label) {
            (Some(reference), Some(label)) => Some(reference.with_break_label(label.clone())),
            (reference, _) => reference,
        };
        let exceptions = RefCell::new(ExceptionCache::with_only_label(
            week_reference,
            settings.only_label.clone(),
        ));

        Ok(Self {
            events,
            units,
            settings,
            exceptions,
            state,
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn settings(&self) -> &TimetableSettings {
        &self.settings
    }

    pub fn has_hidden(&self) -> bool {
        !self.state.hidden.is_empty()
    }

    pub fn remove(&mut self, event_index: usize) {
        self.dispatch(GridAction::HideEvent(event_index));
    }

    pub fn remove_day(&mut self, label_index: usize, day: u8) {
        self.dispatch(GridAction::HideDay { label_index, day });
    }

    pub fn remove_hour(&mut self, label_index: usize, hour: u8) {
        self.dispatch(GridAction::HideHour { label_index, hour });
    }

    /// Show everything again, laying the grid out exactly as on creation.
    pub fn unhide_all(&mut self) -> TimetableResult<()> {
        self.state = self.state.rebuild(&self.events, self.settings.base_offset)?;
        log::info!("All days, hours and events restored");
        Ok(())
    }

    fn dispatch(&mut self, action: GridAction) {
        self.state = self.state.clone().apply(action);
    }

    pub fn day_labels(&self) -> Vec<DayLabelProps> {
        self.state
            .days
            .sequence
            .iter()
            .enumerate()
            .map(|(index, &day)| DayLabelProps {
                index,
                day,
                column: self.state.days.position(day),
                text: day_label(day),
                hidden: self.state.is_day_hidden(index),
            })
            .collect()
    }

    pub fn hour_labels(&self) -> Vec<HourLabelProps> {
        self.state
            .hours
            .sequence
            .iter()
            .enumerate()
            .map(|(index, &hour)| HourLabelProps {
                index,
                hour,
                row: self.state.hours.position(hour),
                text: hour_label(hour),
                hidden: self.state.is_hour_hidden(index),
            })
            .collect()
    }

    /// Props for every event, in input order.
    pub fn event_props(&self) -> Vec<EventProps> {
        let state = &self.state;
        let mut exceptions = self.exceptions.borrow_mut();

        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let unit_index = self.units.iter().position(|unit| *unit == event.unit);
                if unit_index.is_none() {
                    log::warn!("Unit {:?} of event {} is not in the unit list", event.unit, index);
                }

                EventProps {
                    index,
                    unit_index,
                    column: state.days.position(event.day),
                    row_start: state.hours.position(event.start),
                    row_end: state.hours.position(event.end),
                    overlap: event.overlap,
                    hidden: state.is_event_hidden(index),
                    unit: event.unit.clone(),
                    kind: event.kind.clone(),
                    location: event.location.clone(),
                    exceptions: exceptions.resolve(event),
                }
            })
            .collect()
    }
}
