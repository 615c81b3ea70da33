//! Shared builders for the test suites.

use chrono::{Months, NaiveDate};

use crate::consts::MONTHS_PER_PERIOD;
use crate::period::CoveragePeriod;
use crate::types::{CoverageRecord, PaymentStatus};

/// Builds a date, panicking on invalid components (tests only).
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month:02}-{day:02}"))
}

/// A fully-dated, unfrozen, paid record whose current period starts on
/// `start` and whose anchor equals that start.
pub fn paid_record(start: NaiveDate) -> CoverageRecord {
    let period = CoveragePeriod::starting(start)
        .unwrap_or_else(|err| panic!("invalid test period start {start}: {err}"));
    CoverageRecord {
        registration_anchor_date: Some(start),
        current_period_start: Some(period.start()),
        current_period_end: Some(period.end()),
        next_due_date: Some(period.next_due()),
        is_frozen: false,
        payment_status: PaymentStatus::Paid,
    }
}

/// A fully-dated, unfrozen record whose next due date is exactly `due`,
/// with the period dates chained backwards from it.
pub fn record_due_on(due: NaiveDate) -> CoverageRecord {
    let start = due
        .checked_sub_months(Months::new(MONTHS_PER_PERIOD))
        .unwrap_or_else(|| panic!("invalid test due date {due}"));
    let mut record = paid_record(start);
    // Chain the end/due from the stored due date, not from the derived
    // period, so a clamped leap-day start still yields the requested due.
    record.current_period_end = due.pred_opt();
    record.next_due_date = Some(due);
    record
}
