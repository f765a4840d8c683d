use chrono::{Local, NaiveDate};

/// Source of "today" used to resolve omitted period keys.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the local system date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
