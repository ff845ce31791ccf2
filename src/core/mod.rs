pub mod calendar;
pub mod config;
pub mod log;
pub mod tags;
