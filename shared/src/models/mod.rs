//! Domain models for the weather service

mod weather;

pub use weather::*;
