use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use super::{
    clock::{Clock, SystemClock},
    period::{Day, Month, Period, Year},
    report::{section_lines, SUMMARY_TITLE},
    totals::PeriodTotals,
};
use crate::{errors::Result, storage::json_backend};

/// Outcome of [`Ledger::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The source did not exist; the ledger kept its previous state.
    Missing,
}

/// Income accumulated per day, month, and year.
///
/// Persisted as `{ "daily": {..}, "monthly": {..}, "yearly": {..} }`; absent
/// sections load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    daily: PeriodTotals<Day>,
    #[serde(default)]
    monthly: PeriodTotals<Month>,
    #[serde(default)]
    yearly: PeriodTotals<Year>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contribution and returns the key it was booked under.
    ///
    /// An omitted key resolves to today's period on the system clock.
    pub fn add(&mut self, period: Period, key: Option<&str>, amount: f64) -> Result<String> {
        self.add_with_clock(period, key, amount, &SystemClock)
    }

    pub fn add_with_clock(
        &mut self,
        period: Period,
        key: Option<&str>,
        amount: f64,
        clock: &dyn Clock,
    ) -> Result<String> {
        let key = period.resolve_key(key, clock);
        match period {
            Period::Daily => self.daily.add(key.as_str(), amount)?,
            Period::Monthly => self.monthly.add(key.as_str(), amount)?,
            Period::Yearly => self.yearly.add(key.as_str(), amount)?,
        }
        Ok(key)
    }

    pub fn get(&self, period: Period, key: Option<&str>) -> f64 {
        self.get_with_clock(period, key, &SystemClock)
    }

    pub fn get_with_clock(&self, period: Period, key: Option<&str>, clock: &dyn Clock) -> f64 {
        let key = period.resolve_key(key, clock);
        match period {
            Period::Daily => self.daily.get(&key),
            Period::Monthly => self.monthly.get(&key),
            Period::Yearly => self.yearly.get(&key),
        }
    }

    /// Every entry of `period` in ascending key order.
    pub fn list_all(&self, period: Period) -> &BTreeMap<String, f64> {
        match period {
            Period::Daily => self.daily.entries(),
            Period::Monthly => self.monthly.entries(),
            Period::Yearly => self.yearly.entries(),
        }
    }

    pub fn total(&self, period: Period) -> f64 {
        match period {
            Period::Daily => self.daily.total(),
            Period::Monthly => self.monthly.total(),
            Period::Yearly => self.yearly.total(),
        }
    }

    /// Rejects snapshots holding a negative or non-finite amount.
    pub fn validate(&self) -> Result<()> {
        self.daily.validate()?;
        self.monthly.validate()?;
        self.yearly.validate()
    }

    pub fn add_daily(&mut self, date: Option<&str>, amount: f64) -> Result<String> {
        self.add(Period::Daily, date, amount)
    }

    pub fn add_monthly(&mut self, month: Option<&str>, amount: f64) -> Result<String> {
        self.add(Period::Monthly, month, amount)
    }

    pub fn add_yearly(&mut self, year: Option<&str>, amount: f64) -> Result<String> {
        self.add(Period::Yearly, year, amount)
    }

    pub fn get_daily(&self, date: Option<&str>) -> f64 {
        self.get(Period::Daily, date)
    }

    pub fn get_monthly(&self, month: Option<&str>) -> f64 {
        self.get(Period::Monthly, month)
    }

    pub fn get_yearly(&self, year: Option<&str>) -> f64 {
        self.get(Period::Yearly, year)
    }

    pub fn all_daily(&self) -> &BTreeMap<String, f64> {
        self.daily.entries()
    }

    pub fn all_monthly(&self) -> &BTreeMap<String, f64> {
        self.monthly.entries()
    }

    pub fn all_yearly(&self) -> &BTreeMap<String, f64> {
        self.yearly.entries()
    }

    /// Renders the daily, monthly, and yearly sections as one report.
    pub fn summary(&self) -> String {
        let mut lines = vec![SUMMARY_TITLE.to_string()];
        for period in Period::ALL {
            lines.push(String::new());
            lines.extend(section_lines(period, self.list_all(period)));
        }
        lines.join("\n")
    }

    pub fn save(&self, destination: &Path) -> Result<()> {
        json_backend::save_ledger_to_path(self, destination)
    }

    /// Replaces every section with the contents of `source`. On any error,
    /// including an invalid stored amount, the ledger keeps its state.
    pub fn load(&mut self, source: &Path) -> Result<LoadOutcome> {
        match json_backend::load_ledger_from_path(source)? {
            Some(ledger) => {
                *self = ledger;
                Ok(LoadOutcome::Loaded)
            }
            None => Ok(LoadOutcome::Missing),
        }
    }
}
