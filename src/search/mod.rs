//! Device-search indexing support.
//!
//! Builds lightweight searchable summaries of subscriptions; a platform
//! indexer consumes them behind the [`SearchIndexer`] trait.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::SubscriptionError;
use crate::projection::next_charge_date;
use crate::subscription::Subscription;

/// Searchable summary of one subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    /// Resolved next charge; absent once the series has terminated.
    pub next_charge: Option<NaiveDate>,
    pub keywords: Vec<String>,
}

/// Builds the search entry for a single subscription.
pub fn search_entry(
    subscription: &Subscription,
    today: NaiveDate,
) -> Result<SearchEntry, SubscriptionError> {
    let next_charge = next_charge_date(subscription, today)?.due_date();
    Ok(SearchEntry {
        id: subscription.id,
        title: subscription.name.clone(),
        amount: subscription.amount,
        currency: subscription.currency.clone(),
        next_charge,
        keywords: build_keywords(subscription),
    })
}

/// Builds entries for the whole list, in input order.
pub fn search_entries(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> Result<Vec<SearchEntry>, SubscriptionError> {
    subscriptions
        .iter()
        .map(|subscription| search_entry(subscription, today))
        .collect()
}

fn build_keywords(subscription: &Subscription) -> Vec<String> {
    let mut keywords = vec![
        subscription.name.to_lowercase(),
        subscription.category.label().to_lowercase(),
        subscription.cycle.label().to_lowercase(),
        subscription.currency.to_lowercase(),
        "subscription".to_string(),
    ];
    for word in subscription.name.split_whitespace() {
        let word = word.to_lowercase();
        if !keywords.contains(&word) {
            keywords.push(word);
        }
    }
    keywords
}

/// Consumer of search entries, typically a platform search index.
pub trait SearchIndexer {
    fn index(&mut self, entries: &[SearchEntry]);
    fn remove(&mut self, id: Uuid);
    fn clear(&mut self);
}
