//! Day and hour ranges compressed onto contiguous grid lines.
//!
//! Both mappings are derived from a single min/max scan over the events. The
//! visible sequence is generated arithmetically, so every value between the
//! extremes gets a grid line even when no event uses it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{TimetableError, TimetableResult};
use crate::models::event::Event;

/// Ordered mapping from domain values (days or hours) to grid positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeMapping {
    /// Smallest value still occupying the leading grid line
    pub min: u8,
    pub max: u8,
    /// Values that receive a label, in grid order
    pub sequence: Vec<u8>,
    positions: BTreeMap<u8, u32>,
}

impl RangeMapping {
    /// Build a mapping covering `min..=max`. Only `min..=last_label` is
    /// labelled; values after it keep a position for boundary lookups.
    fn contiguous(min: u8, max: u8, last_label: Option<u8>, base: u32) -> Self {
        let sequence = match last_label {
            Some(last) => (min..=last).collect(),
            None => Vec::new(),
        };
        let positions = (min..=max)
            .map(|value| (value, base + u32::from(value - min)))
            .collect();

        Self {
            min,
            max,
            sequence,
            positions,
        }
    }

    /// Grid position of a domain value, `None` if it lies outside the range.
    pub fn position(&self, value: u8) -> Option<u32> {
        self.positions.get(&value).copied()
    }

    pub fn positions(&self) -> &BTreeMap<u8, u32> {
        &self.positions
    }

    /// Pull every position one line towards the origin and advance `min`.
    pub(super) fn collapse_leading(&mut self) {
        for position in self.positions.values_mut() {
            *position = position.saturating_sub(1);
        }
        self.min = self.min.saturating_add(1);
    }
}

/// Column mapping over the days spanned by `events`.
pub fn day_mapping(events: &[Event], base: u32) -> TimetableResult<RangeMapping> {
    let (min, max) = bounds(events.iter().map(|event| (event.day, event.day)))?;
    log::debug!("Day range {}..={} from {} events", min, max, events.len());
    Ok(RangeMapping::contiguous(min, max, Some(max), base))
}

/// Row mapping over the hours spanned by `events`.
///
/// The final hour is a boundary: it gets a position so events ending there
/// have a terminal row line, but no label.
pub fn hour_mapping(events: &[Event], base: u32) -> TimetableResult<RangeMapping> {
    let (min, max) = bounds(events.iter().map(|event| (event.start, event.end)))?;
    log::debug!("Hour range {}..{} from {} events", min, max, events.len());
    Ok(RangeMapping::contiguous(min, max, max.checked_sub(1).filter(|last| *last >= min), base))
}

fn bounds(values: impl Iterator<Item = (u8, u8)>) -> TimetableResult<(u8, u8)> {
    values
        .fold(None, |acc: Option<(u8, u8)>, (low, high)| match acc {
            Some((min, max)) => Some((min.min(low), max.max(high))),
            None => Some((low, high)),
        })
        .ok_or(TimetableError::EmptyInput)
}
