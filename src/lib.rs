// Timetable Grid Library
// Weekly timetable layout: grid coordinates, hiding and week exceptions

pub mod models;
pub mod services;
pub mod utils;
