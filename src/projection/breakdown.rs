use chrono::{Datelike, NaiveDate};

use crate::errors::SubscriptionError;
use crate::subscription::cycle::{month_index, shift_months};
use crate::subscription::Subscription;

use super::resolver::{next_charge_date, NextCharge};

pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// One calendar-month slot in the projection horizon, identified by the
/// first day of its month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub month_start: NaiveDate,
    pub total: f64,
}

/// Projects every active subscription's charges across `horizon_months`
/// calendar months starting with `today`'s month, summing the full charge
/// amount into the month each charge falls in. Yearly subscriptions land in
/// exactly one bucket per year; nothing is pro-rated and no currency
/// conversion happens here.
///
/// The output always holds exactly `horizon_months` buckets in chronological
/// order; months with no charges carry a zero total.
pub fn monthly_breakdown(
    subscriptions: &[Subscription],
    today: NaiveDate,
    horizon_months: u32,
) -> Result<Vec<MonthBucket>, SubscriptionError> {
    let horizon_start = first_of_month(today);
    let start_index = month_index(horizon_start);
    let mut totals = vec![0.0f64; horizon_months as usize];

    for subscription in subscriptions {
        subscription.validate()?;
        if !subscription.is_active(today) {
            continue;
        }
        let mut date = match next_charge_date(subscription, today)? {
            NextCharge::Due(date) => date,
            NextCharge::Ended(_) => continue,
        };
        while date < horizon_start {
            date = subscription.cycle.advance(date);
        }
        loop {
            if let Some(end) = subscription.end_date {
                if date > end {
                    break;
                }
            }
            let offset = month_index(date) - start_index;
            if offset >= horizon_months as i32 {
                break;
            }
            totals[offset as usize] += subscription.amount;
            date = subscription.cycle.advance(date);
        }
    }

    Ok(totals
        .into_iter()
        .enumerate()
        .map(|(offset, total)| MonthBucket {
            month_start: shift_months(horizon_start, offset as i32),
            total,
        })
        .collect())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}
