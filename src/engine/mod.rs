//! Scheduling engine.
//!
//! This module contains the driver that ticks every registered timer once
//! per second and fans the results out to the display and alert sinks.

pub mod driver;

pub use driver::Driver;
