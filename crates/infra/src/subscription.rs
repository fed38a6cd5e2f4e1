//! Employer subscription status lookup.

use serde::{Deserialize, Serialize};

use jobboard_core::UserId;

use crate::profiles::{EmployerProfileStore, StoreError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub is_subscribed: bool,
}

impl SubscriptionStatus {
    pub const NOT_SUBSCRIBED: Self = Self { is_subscribed: false };
}

/// Whether the employer behind `user_id` has an active subscription.
///
/// A missing id short-circuits without touching the store. A missing profile,
/// or a flag that is not exactly `true`, reads as not subscribed. Store
/// failures are returned to the caller.
pub async fn get_employer_subscription_status<S>(
    store: &S,
    user_id: Option<&UserId>,
) -> Result<SubscriptionStatus, StoreError>
where
    S: EmployerProfileStore + ?Sized,
{
    let Some(user_id) = user_id else {
        return Ok(SubscriptionStatus::NOT_SUBSCRIBED);
    };

    let profile = store.find_by_user_id(user_id).await?;
    let is_subscribed = profile.and_then(|p| p.is_subscribed) == Some(true);

    tracing::debug!(user_id = %user_id, is_subscribed, "resolved employer subscription");
    Ok(SubscriptionStatus { is_subscribed })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::profiles::{EmployerProfile, InMemoryEmployerProfileStore};

    fn uid(raw: &str) -> UserId {
        UserId::new(raw).unwrap()
    }

    /// Counts lookups and optionally fails them.
    #[derive(Default)]
    struct ProbeStore {
        calls: AtomicUsize,
        fail: bool,
        inner: InMemoryEmployerProfileStore,
    }

    #[async_trait::async_trait]
    impl EmployerProfileStore for ProbeStore {
        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<EmployerProfile>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StoreError::Unavailable("down".to_string()));
            }
            self.inner.find_by_user_id(user_id).await
        }
    }

    #[tokio::test]
    async fn missing_user_id_skips_the_store() {
        let store = ProbeStore::default();

        let status = get_employer_subscription_status(&store, None).await.unwrap();
        assert_eq!(status, SubscriptionStatus { is_subscribed: false });
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn only_an_exact_true_flag_counts() {
        let store = ProbeStore::default();
        store.inner.upsert(EmployerProfile::new(uid("paid")).with_subscription(Some(true)));
        store.inner.upsert(EmployerProfile::new(uid("lapsed")).with_subscription(Some(false)));
        store.inner.upsert(EmployerProfile::new(uid("unset")).with_subscription(None));

        let cases = [("paid", true), ("lapsed", false), ("unset", false), ("ghost", false)];
        for (id, expected) in cases {
            let status = get_employer_subscription_status(&store, Some(&uid(id))).await.unwrap();
            assert_eq!(status.is_subscribed, expected, "user {id}");
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), cases.len());
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let store = ProbeStore {
            fail: true,
            ..Default::default()
        };

        let err = get_employer_subscription_status(&store, Some(&uid("paid")))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Unavailable("down".to_string()));
    }

    #[tokio::test]
    async fn works_through_a_trait_object() {
        let store: std::sync::Arc<dyn EmployerProfileStore> = std::sync::Arc::new(
            [EmployerProfile::new(uid("paid")).with_subscription(Some(true))]
                .into_iter()
                .collect::<InMemoryEmployerProfileStore>(),
        );

        let status = get_employer_subscription_status(store.as_ref(), Some(&uid("paid")))
            .await
            .unwrap();
        assert!(status.is_subscribed);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&SubscriptionStatus { is_subscribed: true }).unwrap();
        assert_eq!(json, r#"{"isSubscribed":true}"#);
    }
}
