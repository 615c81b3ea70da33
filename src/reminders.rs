//! Selection of members who should receive a renewal reminder.
//!
//! A consumer of the core: it classifies every record and keeps those in
//! the due-soon or grace windows. Records without a stored due date fall
//! back to a due date re-derived from the registration anchor, using the
//! same period arithmetic the engine uses.

use chrono::NaiveDate;

use crate::period::CoveragePeriod;
use crate::status::{CoverageStatus, classify};
use crate::types::{CoverageRecord, RenewalPolicy};

/// The due date to remind against: the stored one, or one re-derived from
/// the registration anchor when the stored field is absent.
///
/// The fallback stays consistent with the engine because it goes through
/// [`CoveragePeriod::starting`]; an anchor too large to derive a period
/// from yields no due date.
pub fn effective_due_date(record: &CoverageRecord) -> Option<NaiveDate> {
    if let Some(due) = record.next_due_date {
        return Some(due);
    }
    let anchor = record.registration_anchor_date?;
    CoveragePeriod::starting(anchor)
        .ok()
        .map(|period| period.next_due())
}

/// Scans `records` and selects those due for a reminder as of `today`.
///
/// Returns the index of each selected record paired with its status, which
/// is always [`DueSoon`](CoverageStatus::DueSoon) or
/// [`Grace`](CoverageStatus::Grace). Frozen records are skipped; a frozen
/// member has no active cycle to be reminded about.
pub fn reminder_candidates(
    records: &[CoverageRecord],
    today: NaiveDate,
    policy: &RenewalPolicy,
) -> Vec<(usize, CoverageStatus)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.is_frozen)
        .filter_map(|(index, record)| {
            let status = classify(effective_due_date(record), today, policy);
            match status {
                CoverageStatus::DueSoon | CoverageStatus::Grace => Some((index, status)),
                CoverageStatus::Active | CoverageStatus::Inactive => None,
            }
        })
        .collect()
}
