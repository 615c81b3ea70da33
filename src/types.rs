use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{GRACE_DAYS, RENEWAL_WINDOW_DAYS};
use crate::prelude::*;
use crate::status::{CoverageStatus, classify};

/// Whether the most recent payment for a record has been confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Payment expected but not yet confirmed by an administrator
    #[display(fmt = "pending")]
    Pending,
    /// Payment confirmed; the current period is paid for
    #[display(fmt = "paid")]
    Paid,
}

/// Day-count policy for the renewal window and grace period.
///
/// Injected into the classifier, the decision engine, and the reminder
/// selector so the windows can vary by program tier without touching the
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalPolicy {
    /// Days before the due date during which renewal is expected
    pub renewal_window_days: i64,
    /// Days after the due date during which renewal still continues the cycle
    pub grace_days: i64,
}

impl Default for RenewalPolicy {
    fn default() -> Self {
        Self {
            renewal_window_days: RENEWAL_WINDOW_DAYS,
            grace_days: GRACE_DAYS,
        }
    }
}

/// Per-member coverage state as stored by the portal.
///
/// Field names serialize in `camelCase` to match the stored documents.
/// All dates are [`NaiveDate`], so they are midnight-normalized by
/// construction; timestamps must pass through [`crate::normalize`] before
/// reaching this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRecord {
    /// Start of the member's current unbroken annual-cycle lineage;
    /// reset whenever a rejoin occurs
    pub registration_anchor_date: Option<NaiveDate>,
    /// Start of the currently-paid-for year
    pub current_period_start: Option<NaiveDate>,
    /// `current_period_start + 1 year - 1 day`
    pub current_period_end: Option<NaiveDate>,
    /// `current_period_end + 1 day`
    pub next_due_date: Option<NaiveDate>,
    /// True when the member has no active cycle (suspended or never
    /// fully registered)
    pub is_frozen: bool,
    pub payment_status: PaymentStatus,
}

impl CoverageRecord {
    /// A frozen record with no dates, as created at sign-up intake before
    /// the first payment is confirmed.
    pub const fn unregistered() -> Self {
        Self {
            registration_anchor_date: None,
            current_period_start: None,
            current_period_end: None,
            next_due_date: None,
            is_frozen: true,
            payment_status: PaymentStatus::Pending,
        }
    }

    /// True when all four lifecycle dates are present.
    pub const fn is_fully_dated(&self) -> bool {
        self.registration_anchor_date.is_some()
            && self.current_period_start.is_some()
            && self.current_period_end.is_some()
            && self.next_due_date.is_some()
    }

    /// Classifies this record's lifecycle state as of `today`.
    pub fn status(&self, today: NaiveDate, policy: &RenewalPolicy) -> CoverageStatus {
        classify(self.next_due_date, today, policy)
    }
}
