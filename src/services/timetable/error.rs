//! Error types for timetable construction.

use thiserror::Error;

/// Result type for timetable operations
pub type TimetableResult<T> = Result<T, TimetableError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// No events were supplied, so no day or hour range exists.
    #[error("cannot build a timetable from an empty event list")]
    EmptyInput,

    #[error("event {index} ends at {end} but starts at {start}")]
    InvalidEvent { index: usize, start: u8, end: u8 },
}
