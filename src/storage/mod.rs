//! Persistence seam handing the engine full snapshots of the subscription
//! list.

pub mod json_backend;

pub use json_backend::JsonStore;

use crate::errors::StoreError;
use crate::subscription::Subscription;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstract subscription store. The engine never talks to storage itself;
/// callers load a snapshot, project over it, and save the edited list back.
pub trait SubscriptionStore {
    fn load(&self) -> Result<Vec<Subscription>>;
    fn save(&self, subscriptions: &[Subscription]) -> Result<()>;
}
