//! Hidden events, day columns and hour rows.
//!
//! `GridState` is an immutable record: every user action produces a new
//! state through [`GridState::apply`]. Hiding the leading day or hour
//! collapses that grid line so the grid has no gap at its origin; hiding any
//! other day or hour only suppresses it, leaving a blank column or row.
//!
//! Label indices are only meaningful for the mappings they were rendered
//! from. The only transition that rebuilds the mappings,
//! [`GridState::rebuild`], also clears every hidden set and bumps
//! `generation`, so a stale index can never hide an unrelated item.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error::TimetableResult;
use super::range::{day_mapping, hour_mapping, RangeMapping};
use crate::models::event::Event;

/// Indices of hidden items in their rendered lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityState {
    pub events: BTreeSet<usize>,
    pub day_labels: BTreeSet<usize>,
    pub hour_labels: BTreeSet<usize>,
}

impl VisibilityState {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.day_labels.is_empty() && self.hour_labels.is_empty()
    }
}

/// A user request to hide part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    HideEvent(usize),
    HideDay { label_index: usize, day: u8 },
    HideHour { label_index: usize, hour: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub days: RangeMapping,
    pub hours: RangeMapping,
    pub hidden: VisibilityState,
    /// Incremented every time the mappings are rebuilt
    pub generation: u64,
}

impl GridState {
    /// Compute fresh mappings for `events` with nothing hidden.
    pub fn initialize(events: &[Event], base: u32) -> TimetableResult<Self> {
        Ok(Self {
            days: day_mapping(events, base)?,
            hours: hour_mapping(events, base)?,
            hidden: VisibilityState::default(),
            generation: 0,
        })
    }

    /// Unhide everything: rebuild both mappings from the original events and
    /// clear every hidden set in the same step.
    pub fn rebuild(&self, events: &[Event], base: u32) -> TimetableResult<Self> {
        let mut state = Self::initialize(events, base)?;
        state.generation = self.generation + 1;
        log::debug!("Grid rebuilt, generation {}", state.generation);
        Ok(state)
    }

    pub fn apply(mut self, action: GridAction) -> Self {
        match action {
            GridAction::HideEvent(index) => {
                self.hidden.events.insert(index);
            }
            GridAction::HideDay { label_index, day } => {
                hide_line(&mut self.days, &mut self.hidden.day_labels, label_index, day);
            }
            GridAction::HideHour { label_index, hour } => {
                hide_line(&mut self.hours, &mut self.hidden.hour_labels, label_index, hour);
            }
        }
        log::debug!("Applied {:?}", action);
        self
    }

    pub fn is_event_hidden(&self, index: usize) -> bool {
        self.hidden.events.contains(&index)
    }

    pub fn is_day_hidden(&self, label_index: usize) -> bool {
        self.hidden.day_labels.contains(&label_index)
    }

    pub fn is_hour_hidden(&self, label_index: usize) -> bool {
        self.hidden.hour_labels.contains(&label_index)
    }
}

fn hide_line(mapping: &mut RangeMapping, hidden: &mut BTreeSet<usize>, label_index: usize, value: u8) {
    if !hidden.insert(label_index) {
        return;
    }
    // The leading line only advances while labelled values remain.
    let is_leading = value == mapping.min && mapping.sequence.last().is_some_and(|last| value <= *last);
    if is_leading {
        mapping.collapse_leading();
    }
}
