//! Source of "now" for the future-slot filter.
//!
//! Slot generation itself takes `now` as a plain argument; services hold a
//! [`Clock`] so the wall-clock read stays at the edge and tests can pin it.

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send + Sync {
    /// Current shop-local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Reads the machine's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
