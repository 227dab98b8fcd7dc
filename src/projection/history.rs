use chrono::NaiveDate;

use crate::errors::SubscriptionError;
use crate::subscription::Subscription;

/// Ceiling on reconstructed records per subscription: ten years of monthly
/// charges. Bounds the walk for implausibly old reference dates.
pub const MAX_HISTORY_RECORDS: usize = 120;

/// A single past charge reconstructed from the subscription's cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub currency: String,
}

impl PaymentRecord {
    /// Days elapsed between the charge and `today`.
    pub fn days_ago(&self, today: NaiveDate) -> i64 {
        (today - self.date).num_days()
    }
}

/// Reconstructs the charges that have already occurred, newest first.
///
/// Walks forward from the reference date in cycle-sized steps, emitting one
/// record per charge at or before `today` and stopping at the end date when
/// one is set. A subscription whose reference date is still in the future
/// has no history.
pub fn payment_history(
    subscription: &Subscription,
    today: NaiveDate,
) -> Result<Vec<PaymentRecord>, SubscriptionError> {
    subscription.validate()?;
    if subscription.reference_date > today {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    let mut date = subscription.reference_date;
    while date <= today {
        if let Some(end) = subscription.end_date {
            if date > end {
                break;
            }
        }
        records.push(PaymentRecord {
            date,
            amount: subscription.amount,
            currency: subscription.currency.clone(),
        });
        if records.len() >= MAX_HISTORY_RECORDS {
            break;
        }
        date = subscription.cycle.advance(date);
    }

    records.reverse();
    Ok(records)
}

/// Total amount charged so far, derived from the reconstructed history.
pub fn total_spent(
    subscription: &Subscription,
    today: NaiveDate,
) -> Result<f64, SubscriptionError> {
    let count = payment_history(subscription, today)?.len();
    Ok(count as f64 * subscription.amount)
}
