use chrono::{Duration, NaiveDate};

use crate::errors::SubscriptionError;
use crate::subscription::Subscription;

use super::resolver::{next_charge_date, NextCharge};

pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 14;

/// Sum of active subscriptions' monthly-normalised costs.
pub fn monthly_total(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> Result<f64, SubscriptionError> {
    let mut total = 0.0;
    for subscription in subscriptions {
        subscription.validate()?;
        if subscription.is_active(today) {
            total += subscription.monthly_cost();
        }
    }
    Ok(total)
}

/// Twelve months of the monthly total.
pub fn yearly_total(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> Result<f64, SubscriptionError> {
    Ok(monthly_total(subscriptions, today)? * 12.0)
}

/// Active subscriptions whose resolved next charge falls inside
/// `[today, today + window_days]`, soonest first. Ties keep input order.
pub fn upcoming(
    subscriptions: &[Subscription],
    today: NaiveDate,
    window_days: i64,
) -> Result<Vec<Subscription>, SubscriptionError> {
    let horizon = today + Duration::days(window_days);
    let mut hits: Vec<(NaiveDate, Subscription)> = Vec::new();
    for subscription in subscriptions {
        subscription.validate()?;
        if !subscription.is_active(today) {
            continue;
        }
        if let NextCharge::Due(date) = next_charge_date(subscription, today)? {
            if date <= horizon {
                hits.push((date, subscription.clone()));
            }
        }
    }
    hits.sort_by_key(|(date, _)| *date);
    Ok(hits.into_iter().map(|(_, subscription)| subscription).collect())
}

/// Full charge amounts falling due inside the window, summed. Unlike
/// [`monthly_total`] this adds each due charge at its cycle amount.
pub fn upcoming_window_total(
    subscriptions: &[Subscription],
    today: NaiveDate,
    window_days: i64,
) -> Result<f64, SubscriptionError> {
    let due = upcoming(subscriptions, today, window_days)?;
    Ok(due.iter().map(|subscription| subscription.amount).sum())
}

/// Active subscriptions ranked by monthly-normalised cost, most expensive
/// first, truncated to `limit`.
pub fn top_by_monthly_cost(
    subscriptions: &[Subscription],
    today: NaiveDate,
    limit: usize,
) -> Result<Vec<Subscription>, SubscriptionError> {
    let mut active: Vec<Subscription> = Vec::new();
    for subscription in subscriptions {
        subscription.validate()?;
        if subscription.is_active(today) {
            active.push(subscription.clone());
        }
    }
    active.sort_by(|a, b| {
        b.monthly_cost()
            .partial_cmp(&a.monthly_cost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    active.truncate(limit);
    Ok(active)
}

/// Mean monthly-normalised cost across active subscriptions; zero when none
/// are active.
pub fn average_monthly_cost(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> Result<f64, SubscriptionError> {
    let mut total = 0.0;
    let mut count = 0usize;
    for subscription in subscriptions {
        subscription.validate()?;
        if subscription.is_active(today) {
            total += subscription.monthly_cost();
            count += 1;
        }
    }
    if count == 0 {
        Ok(0.0)
    } else {
        Ok(total / count as f64)
    }
}
