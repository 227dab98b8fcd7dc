use chrono::{Duration, NaiveDate};
use subtrack_core::projection::{payment_history, total_spent, MAX_HISTORY_RECORDS};
use subtrack_core::subscription::{BillingCycle, Category, Subscription};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn monthly(amount: f64, reference: NaiveDate) -> Subscription {
    Subscription::new(
        "Service",
        amount,
        "USD",
        reference,
        BillingCycle::Monthly,
        Category::Other,
    )
    .unwrap()
}

#[test]
fn ninety_five_day_old_monthly_subscription_has_four_payments() {
    let today = date(2025, 6, 5);
    let reference = today - Duration::days(95);
    let history = payment_history(&monthly(10.0, reference), today).unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(total_spent(&monthly(10.0, reference), today).unwrap(), 40.0);
}

#[test]
fn history_is_newest_first() {
    let history = payment_history(&monthly(10.0, date(2025, 1, 15)), date(2025, 4, 1)).unwrap();
    let dates: Vec<NaiveDate> = history.iter().map(|record| record.date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 3, 15), date(2025, 2, 15), date(2025, 1, 15)]
    );
}

#[test]
fn future_reference_means_no_payments_yet() {
    let history = payment_history(&monthly(10.0, date(2025, 7, 1)), date(2025, 6, 5)).unwrap();
    assert!(history.is_empty());
}

#[test]
fn charge_due_today_is_already_part_of_history() {
    let today = date(2025, 6, 5);
    let history = payment_history(&monthly(10.0, today), today).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, today);
    assert_eq!(history[0].days_ago(today), 0);
}

#[test]
fn single_shot_subscription_has_exactly_one_record() {
    let reference = date(2024, 6, 1);
    let single = monthly(49.0, reference).with_end_date(reference).unwrap();
    let history = payment_history(&single, date(2025, 6, 5)).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date, reference);
}

#[test]
fn cancelled_subscription_keeps_its_past_charges() {
    let cancelled = monthly(12.0, date(2024, 1, 10))
        .with_end_date(date(2024, 4, 10))
        .unwrap();
    let history = payment_history(&cancelled, date(2025, 6, 5)).unwrap();
    // Jan through Apr 2024, nothing after the end date.
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].date, date(2024, 4, 10));
    assert_eq!(history[3].date, date(2024, 1, 10));
}

#[test]
fn ancient_reference_dates_are_capped() {
    let ancient = monthly(1.0, date(1990, 1, 1));
    let history = payment_history(&ancient, date(2025, 6, 5)).unwrap();
    assert_eq!(history.len(), MAX_HISTORY_RECORDS);
    // The walk emits the first 120 charges from the reference date; later
    // charges beyond the cap are not reconstructed.
    assert_eq!(history.last().unwrap().date, date(1990, 1, 1));
    assert_eq!(history[0].date, date(1999, 12, 1));
}

#[test]
fn yearly_history_steps_by_anniversary() {
    let yearly = Subscription::new(
        "iCloud",
        119.99,
        "USD",
        date(2022, 11, 3),
        BillingCycle::Yearly,
        Category::Storage,
    )
    .unwrap();
    let history = payment_history(&yearly, date(2025, 1, 10)).unwrap();
    let dates: Vec<NaiveDate> = history.iter().map(|record| record.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 11, 3), date(2023, 11, 3), date(2022, 11, 3)]
    );
}

#[test]
fn history_is_idempotent() {
    let subscription = monthly(10.0, date(2023, 1, 31));
    let today = date(2025, 8, 6);
    assert_eq!(
        payment_history(&subscription, today).unwrap(),
        payment_history(&subscription, today).unwrap()
    );
}
