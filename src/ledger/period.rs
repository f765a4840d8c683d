use std::fmt;

use chrono::NaiveDate;

use super::clock::Clock;

/// Key-formatting strategy for one accumulation granularity.
///
/// Keys are fixed-width, so lexicographic order matches chronological order.
pub trait PeriodFormat {
    const PERIOD: Period;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Day;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Month;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Year;

impl PeriodFormat for Day {
    const PERIOD: Period = Period::Daily;
}

impl PeriodFormat for Month {
    const PERIOD: Period = Period::Monthly;
}

impl PeriodFormat for Year {
    const PERIOD: Period = Period::Yearly;
}

/// Runtime selector over the three granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Monthly, Period::Yearly];

    pub fn key_format(self) -> &'static str {
        match self {
            Period::Daily => "%Y-%m-%d",
            Period::Monthly => "%Y-%m",
            Period::Yearly => "%Y",
        }
    }

    /// Human-readable shape of a key, e.g. `YYYY-MM`.
    pub fn key_hint(self) -> &'static str {
        match self {
            Period::Daily => "YYYY-MM-DD",
            Period::Monthly => "YYYY-MM",
            Period::Yearly => "YYYY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }

    /// What a key of this period names: `date`, `month`, or `year`.
    pub fn noun(self) -> &'static str {
        match self {
            Period::Daily => "date",
            Period::Monthly => "month",
            Period::Yearly => "year",
        }
    }

    pub fn current_label(self) -> &'static str {
        match self {
            Period::Daily => "today",
            Period::Monthly => "current month",
            Period::Yearly => "current year",
        }
    }

    pub fn key_for(self, date: NaiveDate) -> String {
        date.format(self.key_format()).to_string()
    }

    pub fn current_key(self, clock: &dyn Clock) -> String {
        self.key_for(clock.today())
    }

    /// Returns `key` verbatim, or the current period's key when omitted.
    pub fn resolve_key(self, key: Option<&str>, clock: &dyn Clock) -> String {
        match key {
            Some(key) => key.to_string(),
            None => self.current_key(clock),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
