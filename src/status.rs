use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::types::RenewalPolicy;

/// Lifecycle state of a coverage record at a given point in time.
///
/// The four states partition the day line around the due date: more than
/// `renewal_window_days` before it is [`Active`](Self::Active), the window
/// up to (but excluding) the due date is [`DueSoon`](Self::DueSoon), the due
/// date through `grace_days` after it is [`Grace`](Self::Grace), and
/// everything later is [`Inactive`](Self::Inactive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// Paid up; the due date is beyond the renewal window
    #[display(fmt = "active")]
    Active,
    /// Inside the renewal window, before the due date
    #[display(fmt = "due_soon")]
    DueSoon,
    /// On or after the due date, within the grace period
    #[display(fmt = "grace")]
    Grace,
    /// Past grace, or no known due date
    #[display(fmt = "inactive")]
    Inactive,
}

/// Maps a due date and the current date onto a [`CoverageStatus`].
///
/// Pure and total: an absent due date degrades to
/// [`Inactive`](CoverageStatus::Inactive) rather than failing, since "no
/// known due date" is a legitimate state for a never-registered member.
pub fn classify(
    next_due_date: Option<NaiveDate>,
    today: NaiveDate,
    policy: &RenewalPolicy,
) -> CoverageStatus {
    let Some(due) = next_due_date else {
        return CoverageStatus::Inactive;
    };

    // Signed whole-day distance from the due date; negative means before it.
    let days_past_due = today.signed_duration_since(due).num_days();

    if days_past_due < -policy.renewal_window_days {
        CoverageStatus::Active
    } else if days_past_due < 0 {
        CoverageStatus::DueSoon
    } else if days_past_due <= policy.grace_days {
        CoverageStatus::Grace
    } else {
        CoverageStatus::Inactive
    }
}
