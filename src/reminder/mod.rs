//! Renewal reminder planning.
//!
//! Computes the dates reminders should fire on; delivering them is left to
//! a platform-specific [`ReminderSink`]. Fire times within the day are the
//! sink's concern.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::errors::SubscriptionError;
use crate::projection::{next_charge_date, NextCharge};
use crate::subscription::Subscription;

/// Fire dates for one subscription's notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPlan {
    pub subscription_id: Uuid,
    /// Advance warning `lead_days` before the charge; absent when the
    /// warning day is not strictly in the future.
    pub lead: Option<NaiveDate>,
    /// Day-of-charge notice; absent when the charge is not strictly in the
    /// future.
    pub renewal: Option<NaiveDate>,
}

impl ReminderPlan {
    pub fn is_empty(&self) -> bool {
        self.lead.is_none() && self.renewal.is_none()
    }
}

/// Computes reminder fire dates from the resolved next charge. A terminated
/// or not-yet-due series produces an empty plan.
pub fn plan_reminders(
    subscription: &Subscription,
    today: NaiveDate,
    lead_days: i64,
) -> Result<ReminderPlan, SubscriptionError> {
    let mut plan = ReminderPlan {
        subscription_id: subscription.id,
        lead: None,
        renewal: None,
    };
    let next = match next_charge_date(subscription, today)? {
        NextCharge::Due(date) => date,
        NextCharge::Ended(_) => return Ok(plan),
    };
    if lead_days > 0 {
        let lead = next - Duration::days(lead_days);
        if lead > today {
            plan.lead = Some(lead);
        }
    }
    if next > today {
        plan.renewal = Some(next);
    }
    Ok(plan)
}

/// Destination for planned reminders, typically a platform notification
/// API.
pub trait ReminderSink {
    fn schedule(&mut self, plan: &ReminderPlan);
    fn cancel(&mut self, subscription_id: Uuid);
}

/// Cancels and re-schedules reminders for the whole list, so the sink ends
/// up mirroring the current snapshot.
pub fn sync_all<S: ReminderSink>(
    sink: &mut S,
    subscriptions: &[Subscription],
    today: NaiveDate,
    lead_days: i64,
) -> Result<(), SubscriptionError> {
    for subscription in subscriptions {
        sink.cancel(subscription.id);
        let plan = plan_reminders(subscription, today, lead_days)?;
        if !plan.is_empty() {
            sink.schedule(&plan);
        }
    }
    tracing::debug!(count = subscriptions.len(), "reminder sync complete");
    Ok(())
}
