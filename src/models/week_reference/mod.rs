// Week reference module
// Ordered teaching-week labels used to describe recurring sessions

use serde::{Deserialize, Serialize};

/// Label used for non-teaching weeks when none is configured.
pub const DEFAULT_BREAK_LABEL: &str = "Break";

/// Ordered mapping from week number to its display label.
///
/// Iteration follows insertion order, matching the order the weeks were
/// supplied in. Weeks labelled with the break sentinel are never reported as
/// exceptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekReference {
    weeks: Vec<(u32, String)>,
    break_label: String,
}

impl WeekReference {
    pub fn new() -> Self {
        Self {
            weeks: Vec::new(),
            break_label: DEFAULT_BREAK_LABEL.to_string(),
        }
    }

    /// Use a different sentinel for break weeks
    pub fn with_break_label(mut self, label: impl Into<String>) -> Self {
        self.break_label = label.into();
        self
    }

    /// Add a week, replacing the label in place if the week already exists
    pub fn insert(&mut self, week: u32, label: impl Into<String>) {
        let label = label.into();
        match self.weeks.iter_mut().find(|(number, _)| *number == week) {
            Some(entry) => entry.1 = label,
            None => self.weeks.push((week, label)),
        }
    }

    pub fn label(&self, week: u32) -> Option<&str> {
        self.weeks
            .iter()
            .find(|(number, _)| *number == week)
            .map(|(_, label)| label.as_str())
    }

    pub fn break_label(&self) -> &str {
        &self.break_label
    }

    pub fn is_break(&self, label: &str) -> bool {
        label == self.break_label
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.weeks.iter().map(|(week, label)| (*week, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

impl Default for WeekReference {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Into<String>> FromIterator<(u32, L)> for WeekReference {
    fn from_iter<I: IntoIterator<Item = (u32, L)>>(iter: I) -> Self {
        let mut reference = WeekReference::new();
        for (week, label) in iter {
            reference.insert(week, label);
        }
        reference
    }
}
