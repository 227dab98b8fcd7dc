//! The projection engine: pure functions over a subscription snapshot and an
//! explicit reference day.

pub mod breakdown;
pub mod history;
pub mod resolver;
pub mod summary;

pub use breakdown::{monthly_breakdown, MonthBucket, DEFAULT_HORIZON_MONTHS};
pub use history::{payment_history, total_spent, PaymentRecord, MAX_HISTORY_RECORDS};
pub use resolver::{next_charge_date, NextCharge};
pub use summary::{
    average_monthly_cost, monthly_total, top_by_monthly_cost, upcoming, upcoming_window_total,
    yearly_total, DEFAULT_UPCOMING_WINDOW_DAYS,
};
