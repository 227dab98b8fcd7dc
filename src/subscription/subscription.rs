use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SubscriptionError;

use super::{BillingCycle, Category};

/// A recurring payment tracked by the user.
///
/// `reference_date` anchors the charge series: it is the first charge and
/// may lie arbitrarily far in the past. Every projection steps forward from
/// it in cycle-sized increments. When `end_date` is set, no charge exists
/// strictly after it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    /// Charge amount per cycle in `currency`, as entered by the user.
    pub amount: f64,
    pub currency: String,
    pub reference_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub cycle: BillingCycle,
    pub category: Category,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        reference_date: NaiveDate,
        cycle: BillingCycle,
        category: Category,
    ) -> Result<Self, SubscriptionError> {
        let subscription = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            currency: currency.into(),
            reference_date,
            end_date: None,
            cycle,
            category,
        };
        subscription.validate()?;
        Ok(subscription)
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Result<Self, SubscriptionError> {
        self.end_date = Some(end_date);
        self.validate()?;
        Ok(self)
    }

    /// Re-checks the construction invariants.
    ///
    /// Projection entry points call this before walking the charge series,
    /// so a record mutated into an invalid state after construction fails
    /// fast rather than looping or summing garbage.
    pub fn validate(&self) -> Result<(), SubscriptionError> {
        if self.name.trim().is_empty() {
            return Err(SubscriptionError::EmptyName);
        }
        if self.amount <= 0.0 {
            return Err(SubscriptionError::NonPositiveAmount(self.amount));
        }
        if let Some(end) = self.end_date {
            if end < self.reference_date {
                return Err(SubscriptionError::EndBeforeReference {
                    reference: self.reference_date,
                    end,
                });
            }
        }
        Ok(())
    }

    /// Whether the subscription still renews as of `today`.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match self.end_date {
            Some(end) => end >= today,
            None => true,
        }
    }

    /// Cost normalised to one month; yearly amounts are divided by 12.
    /// Derived on demand, never stored.
    pub fn monthly_cost(&self) -> f64 {
        self.amount / self.cycle.months() as f64
    }
}
