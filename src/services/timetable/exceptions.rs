//! Week annotations for sessions that do not run every week.

use std::collections::HashMap;

use crate::models::event::Event;
use crate::models::week_reference::WeekReference;

pub const DEFAULT_ONLY_LABEL: &str = "Only";

/// Labels describing the weeks `event` deviates from the reference on.
///
/// * no reference: nothing to show
/// * a single week: `["Only", <label>]`
/// * several weeks: every labelled, non-break reference week the event
///   skips, in reference order
/// * no weeks at all: nothing to show
pub fn resolve_exceptions(event: &Event, reference: Option<&WeekReference>) -> Vec<String> {
    resolve_with_prefix(&event.weeks, reference, DEFAULT_ONLY_LABEL)
}

fn resolve_with_prefix(weeks: &[u32], reference: Option<&WeekReference>, only_label: &str) -> Vec<String> {
    let Some(reference) = reference else {
        return Vec::new();
    };

    match weeks {
        [] => Vec::new(),
        [week] => {
            let label = reference.label(*week).unwrap_or_else(|| {
                log::warn!("Week {} is missing from the week reference", week);
                ""
            });
            vec![only_label.to_string(), label.to_string()]
        }
        _ => reference
            .iter()
            .filter(|(week, label)| {
                !weeks.contains(week) && !label.is_empty() && !reference.is_break(label)
            })
            .map(|(_, label)| label.to_string())
            .collect(),
    }
}

/// Memoized exception lists for one week reference.
///
/// Results only depend on the event's weeks, so events sharing a week
/// pattern share one entry.
#[derive(Debug, Clone)]
pub struct ExceptionCache {
    reference: Option<WeekReference>,
    only_label: String,
    entries: HashMap<Vec<u32>, Vec<String>>,
}

impl ExceptionCache {
    pub fn new(reference: Option<WeekReference>) -> Self {
        Self::with_only_label(reference, DEFAULT_ONLY_LABEL)
    }

    pub fn with_only_label(reference: Option<WeekReference>, only_label: impl Into<String>) -> Self {
        Self {
            reference,
            only_label: only_label.into(),
            entries: HashMap::new(),
        }
    }

    pub fn reference(&self) -> Option<&WeekReference> {
        self.reference.as_ref()
    }

    pub fn resolve(&mut self, event: &Event) -> Vec<String> {
        if let Some(cached) = self.entries.get(&event.weeks) {
            return cached.clone();
        }
        let resolved = resolve_with_prefix(&event.weeks, self.reference.as_ref(), &self.only_label);
        self.entries.insert(event.weeks.clone(), resolved.clone());
        resolved
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
