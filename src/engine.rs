use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::{CoveragePeriod, PeriodError};
use crate::prelude::*;
use crate::types::{CoverageRecord, PaymentStatus, RenewalPolicy};

/// Error type for payment confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenewalError {
    /// The record is fully dated and not frozen, and today precedes the
    /// renewal window. Confirming a payment now must not recompute period
    /// dates; the caller may only flip the payment status.
    #[error("Payment confirmed on {today}, before the renewal window for {next_due} opens")]
    InvalidRenewalWindow {
        next_due: NaiveDate,
        today: NaiveDate,
    },

    /// Error deriving the new coverage period.
    #[error(transparent)]
    Period(#[from] PeriodError),
}

/// Whether a confirmed payment continued the existing cycle lineage or
/// restarted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalKind {
    /// The payment continues the existing annual cycle; the registration
    /// anchor is left unchanged
    #[display(fmt = "renew")]
    Renew,
    /// The payment starts a brand-new cycle from today; the registration
    /// anchor is reset and the record unfrozen
    #[display(fmt = "rejoin")]
    Rejoin,
}

/// Situations a payment confirmation can land in, in precedence order.
enum RenewalCase {
    /// Frozen, or missing any lifecycle date: treat as a first registration
    NewRegistration,
    /// Today is inside `[due - window, due + grace]`: the cycle continues
    /// from the stored due date
    WithinWindow { due: NaiveDate },
    /// Today is past `due + grace`: the prior cycle lapsed
    PastGrace,
    /// Today precedes `due - window`: refuse to touch the period dates
    TooEarly { due: NaiveDate },
}

fn decide(record: &CoverageRecord, today: NaiveDate, policy: &RenewalPolicy) -> RenewalCase {
    if record.is_frozen {
        return RenewalCase::NewRegistration;
    }
    // Any missing date is signal for a first registration, not an error.
    if !record.is_fully_dated() {
        return RenewalCase::NewRegistration;
    }
    let Some(due) = record.next_due_date else {
        return RenewalCase::NewRegistration;
    };

    let days_past_due = today.signed_duration_since(due).num_days();
    if days_past_due < -policy.renewal_window_days {
        RenewalCase::TooEarly { due }
    } else if days_past_due <= policy.grace_days {
        RenewalCase::WithinWindow { due }
    } else {
        RenewalCase::PastGrace
    }
}

/// The engine's replacement values for a record after a confirmed payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalOutcome {
    period: CoveragePeriod,
    kind: RenewalKind,
}

impl RenewalOutcome {
    /// The newly paid-for coverage period
    pub const fn period(&self) -> CoveragePeriod {
        self.period
    }

    /// How the payment was classified
    pub const fn kind(&self) -> RenewalKind {
        self.kind
    }

    /// True when the payment restarted the cycle lineage
    pub const fn is_rejoin(&self) -> bool {
        matches!(self.kind, RenewalKind::Rejoin)
    }

    /// Produces the full updated record: the three period dates and the
    /// payment status always change; the anchor date and frozen flag change
    /// only on a rejoin.
    pub fn applied_to(&self, record: &CoverageRecord) -> CoverageRecord {
        let mut updated = record.clone();
        updated.current_period_start = Some(self.period.start());
        updated.current_period_end = Some(self.period.end());
        updated.next_due_date = Some(self.period.next_due());
        updated.payment_status = PaymentStatus::Paid;
        match self.kind {
            RenewalKind::Rejoin => {
                updated.registration_anchor_date = Some(self.period.start());
                updated.is_frozen = false;
            }
            RenewalKind::Renew => {}
        }
        updated
    }
}

/// Decides what a confirmed payment does to a coverage record.
///
/// `today` must come from [`crate::normalize`] so every comparison happens
/// on whole local days. The situations, in precedence order:
///
/// 1. Frozen record, or any lifecycle date missing: rejoin from today.
/// 2. Today within `[next_due - window, next_due + grace]`, both bounds
///    inclusive: renew from the stored due date. The computed dates depend
///    only on the due date, so repeated confirmations against the same
///    stored record are byte-identical; a duplicate click that instead
///    reads the written-back record falls into situation 4 and is refused.
/// 3. Today past `next_due + grace`: the cycle lapsed; rejoin from today.
/// 4. Today before `next_due - window`: refused, so a stray confirmation
///    cannot compress or extend a member's paid-for period.
///
/// # Errors
/// Returns [`RenewalError::InvalidRenewalWindow`] in situation 4, and
/// propagates [`PeriodError`] if the new period is not representable.
pub fn confirm_payment(
    record: &CoverageRecord,
    today: NaiveDate,
    policy: &RenewalPolicy,
) -> Result<RenewalOutcome, RenewalError> {
    match decide(record, today, policy) {
        RenewalCase::NewRegistration | RenewalCase::PastGrace => Ok(RenewalOutcome {
            period: CoveragePeriod::starting(today)?,
            kind: RenewalKind::Rejoin,
        }),
        RenewalCase::WithinWindow { due } => Ok(RenewalOutcome {
            period: CoveragePeriod::starting(due)?,
            kind: RenewalKind::Renew,
        }),
        RenewalCase::TooEarly { due } => Err(RenewalError::InvalidRenewalWindow {
            next_due: due,
            today,
        }),
    }
}
