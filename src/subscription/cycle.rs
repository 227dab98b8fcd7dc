use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Recurrence interval of a subscription, expressed as a whole number of
/// calendar months between charges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Number of months between consecutive charges.
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Yearly => 12,
        }
    }

    /// The charge date one cycle after `from`.
    ///
    /// Steps from the given date, not from an anchor: a Jan 31 monthly
    /// charge clamps to Feb 28/29 and stays on the 28th/29th thereafter.
    pub fn advance(&self, from: NaiveDate) -> NaiveDate {
        shift_months(from, self.months() as i32)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }
}

/// Moves `date` by the given number of calendar months, clamping the day to
/// the last day of the target month when it would overflow.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Months since year zero; orders dates by their `(year, month)` bucket.
pub(crate) fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}
