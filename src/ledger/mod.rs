//! Income ledger: per-period accumulators, key formats, and reports.

pub mod clock;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod report;
pub mod totals;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{Ledger, LoadOutcome};
pub use period::{Day, Month, Period, PeriodFormat, Year};
pub use report::format_amount;
pub use totals::PeriodTotals;
