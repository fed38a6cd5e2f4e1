//! Infrastructure layer: persistent employer profiles and the lookups built on them.

pub mod profiles;
pub mod subscription;

pub use profiles::{EmployerProfile, EmployerProfileStore, InMemoryEmployerProfileStore, PostgresEmployerProfileStore, StoreError};
pub use subscription::{SubscriptionStatus, get_employer_subscription_status};
