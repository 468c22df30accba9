// Service module exports

pub mod timetable;
