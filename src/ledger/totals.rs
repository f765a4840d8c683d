use std::{collections::BTreeMap, marker::PhantomData};

use serde::{Deserialize, Serialize};

use super::period::PeriodFormat;
use crate::errors::{LedgerError, Result};

/// Accumulated income per period key for one granularity.
///
/// Serializes as a plain `key -> amount` object; the format marker only
/// selects how omitted keys are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct PeriodTotals<P> {
    entries: BTreeMap<String, f64>,
    #[serde(skip)]
    format: PhantomData<P>,
}

impl<P> Default for PeriodTotals<P> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            format: PhantomData,
        }
    }
}

impl<P: PeriodFormat> PeriodTotals<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `key`, creating the entry on first contribution.
    ///
    /// Negative and non-finite amounts, and contributions that would push the
    /// total past `f64::MAX`, are rejected and leave the totals untouched.
    pub fn add(&mut self, key: impl Into<String>, amount: f64) -> Result<()> {
        validate_amount(amount)?;
        let key = key.into();
        let total = self.get(&key) + amount;
        if !total.is_finite() {
            return Err(LedgerError::TotalOverflow { key, amount });
        }
        tracing::debug!(period = %P::PERIOD, key = %key, amount, total, "income recorded");
        self.entries.insert(key, total);
        Ok(())
    }

    /// Checks every stored amount, e.g. after reading a file written by hand.
    pub fn validate(&self) -> Result<()> {
        self.entries.values().try_for_each(|amount| validate_amount(*amount))
    }

    /// Stored amount for `key`, or zero when nothing was recorded.
    pub fn get(&self, key: &str) -> f64 {
        self.entries.get(key).copied().unwrap_or(0.0)
    }

    /// Entries in ascending key order.
    pub fn entries(&self) -> &BTreeMap<String, f64> {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

}

fn validate_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}
