//! Static exchange-rate table and conversion helpers.
//!
//! Conversion happens outside the projection engine: projections sum raw
//! amounts, and callers convert where a cross-currency figure is wanted.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::errors::SubscriptionError;
use crate::subscription::{Category, Subscription};

/// Built-in USD-based rates. A live feed can replace the table without
/// touching call sites.
static DEFAULT_RATES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([("USD", 1.0), ("EUR", 0.92), ("GBP", 0.79), ("TRY", 34.5)])
});

pub const SUPPORTED_CURRENCIES: [&str; 4] = ["USD", "EUR", "GBP", "TRY"];

/// USD-based exchange rates keyed by currency code.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

impl RateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Converts `amount` between currencies via the USD base rate. Unknown
    /// codes pass the amount through unchanged.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        if from == to {
            return amount;
        }
        let (Some(source_rate), Some(target_rate)) = (self.rates.get(from), self.rates.get(to))
        else {
            return amount;
        };
        amount / source_rate * target_rate
    }

    /// Active subscriptions' monthly-normalised costs converted into
    /// `target` and summed.
    pub fn monthly_total_in(
        &self,
        subscriptions: &[Subscription],
        today: NaiveDate,
        target: &str,
    ) -> Result<f64, SubscriptionError> {
        let mut total = 0.0;
        for subscription in subscriptions {
            subscription.validate()?;
            if !subscription.is_active(today) {
                continue;
            }
            total += self.convert(subscription.monthly_cost(), &subscription.currency, target);
        }
        Ok(total)
    }

    /// Monthly-normalised spend per category in the target currency, active
    /// subscriptions only. Categories with no active subscriptions are
    /// absent from the map.
    pub fn category_totals_in(
        &self,
        subscriptions: &[Subscription],
        today: NaiveDate,
        target: &str,
    ) -> Result<BTreeMap<Category, f64>, SubscriptionError> {
        let mut totals = BTreeMap::new();
        for subscription in subscriptions {
            subscription.validate()?;
            if !subscription.is_active(today) {
                continue;
            }
            let converted =
                self.convert(subscription.monthly_cost(), &subscription.currency, target);
            *totals.entry(subscription.category).or_insert(0.0) += converted;
        }
        Ok(totals)
    }

    /// Human-readable unit rate, e.g. `1 $ = 34.50 ₺`.
    pub fn rate_info(&self, from: &str, to: &str) -> String {
        let rate = self.convert(1.0, from, to);
        format!("1 {} = {:.2} {}", symbol_for(from), rate, symbol_for(to))
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "TRY" => "₺".into(),
        _ => code.into(),
    }
}
