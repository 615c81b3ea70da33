//! Membership coverage lifecycle engine for an annual-dues program.
//!
//! Answers two questions about a paying member: what lifecycle state their
//! coverage is in right now ([`classify`]), and what a confirmed payment
//! does to their coverage dates ([`confirm_payment`]) — continuing the
//! current annual cycle, or restarting it when the member is new, frozen,
//! or lapsed past grace.
//!
//! Every function is pure and synchronous; all state travels through
//! arguments and return values. The crate works entirely in naive local
//! dates: callers convert wall-clock timestamps to the organization's
//! local frame once, at the boundary, and reduce them to whole days with
//! [`normalize`].

mod consts;
mod engine;
mod period;
mod prelude;
mod reminders;
mod status;
#[cfg(test)]
pub(crate) mod test_utils;
mod types;

pub use consts::*;
pub use engine::{RenewalError, RenewalKind, RenewalOutcome, confirm_payment};
pub use period::{CoveragePeriod, PeriodError};
pub use reminders::{effective_due_date, reminder_candidates};
pub use status::{CoverageStatus, classify};
pub use types::{CoverageRecord, PaymentStatus, RenewalPolicy};

use chrono::{NaiveDate, NaiveDateTime};

/// Reduces a timestamp to local midnight.
///
/// The single entry point from wall-clock time into the engine: every
/// timestamp must pass through here before being compared or stored, so
/// that all comparisons happen on whole days in one reference frame.
/// Total over any valid timestamp.
pub fn normalize(timestamp: NaiveDateTime) -> NaiveDate {
    timestamp.date()
}
