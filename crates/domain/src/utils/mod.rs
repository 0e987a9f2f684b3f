//! Domain utilities

pub mod day;
