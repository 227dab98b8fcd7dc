use chrono::NaiveDate;

use crate::errors::SubscriptionError;
use crate::subscription::Subscription;

/// Outcome of resolving a subscription's next charge against a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextCharge {
    /// The next charge lands on this date, at or after the reference day.
    Due(NaiveDate),
    /// The series ran into its end date before reaching the reference day.
    /// Carries the final charge of the series, which lies in the past.
    Ended(NaiveDate),
}

impl NextCharge {
    /// The resolved date regardless of whether the series is still running.
    pub fn date(&self) -> NaiveDate {
        match self {
            NextCharge::Due(date) | NextCharge::Ended(date) => *date,
        }
    }

    /// The next charge date, or `None` once the series has terminated.
    pub fn due_date(&self) -> Option<NaiveDate> {
        match self {
            NextCharge::Due(date) => Some(*date),
            NextCharge::Ended(_) => None,
        }
    }
}

/// Resolves the next charge date of `subscription` relative to `today`.
///
/// A reference date at or after `today` is returned unchanged. A past
/// reference date is advanced in cycle-sized steps until it reaches
/// `today`; if a step would pass the end date the walk stops and the last
/// pre-end charge is reported as [`NextCharge::Ended`].
///
/// The walk is bounded by the number of elapsed cycles between the
/// reference date and `today`; malformed records are rejected up front.
pub fn next_charge_date(
    subscription: &Subscription,
    today: NaiveDate,
) -> Result<NextCharge, SubscriptionError> {
    subscription.validate()?;
    if subscription.reference_date >= today {
        return Ok(NextCharge::Due(subscription.reference_date));
    }
    let mut candidate = subscription.reference_date;
    while candidate < today {
        let advanced = subscription.cycle.advance(candidate);
        if let Some(end) = subscription.end_date {
            if advanced > end {
                return Ok(NextCharge::Ended(candidate));
            }
        }
        candidate = advanced;
    }
    Ok(NextCharge::Due(candidate))
}
