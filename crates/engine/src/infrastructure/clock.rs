//! System clock adapter.

use chrono::{NaiveDate, Utc};

use super::ports::ClockPort;

/// Wall-clock implementation of [`ClockPort`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
