use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_PERIOD;

/// Error type for period derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Adding one calendar year to the start date left chrono's
    /// representable date range.
    #[error("Coverage period starting {start} exceeds the representable date range")]
    Overflow { start: NaiveDate },
}

/// One paid annual coverage interval and the due date that follows it.
///
/// Derivation is calendar-correct: the due date is the start plus twelve
/// calendar months (chrono clamps Feb 29 starts to Feb 28 in non-leap
/// years), and the period end is the day before the due date. The
/// following invariants therefore hold by construction:
///
/// - `end == start + 1 year - 1 day`
/// - `next_due == end + 1 day`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    start: NaiveDate,
    end: NaiveDate,
    next_due: NaiveDate,
}

impl CoveragePeriod {
    /// Derives the period covering one year from `start`.
    ///
    /// # Errors
    /// Returns [`PeriodError::Overflow`] if the year addition leaves the
    /// representable date range.
    pub fn starting(start: NaiveDate) -> Result<Self, PeriodError> {
        let next_due = start
            .checked_add_months(Months::new(MONTHS_PER_PERIOD))
            .ok_or(PeriodError::Overflow { start })?;
        let end = next_due
            .checked_sub_days(Days::new(1))
            .ok_or(PeriodError::Overflow { start })?;
        Ok(Self {
            start,
            end,
            next_due,
        })
    }

    /// First paid-for day of the period
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last paid-for day of the period
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Day the next payment falls due
    pub const fn next_due(&self) -> NaiveDate {
        self.next_due
    }
}
