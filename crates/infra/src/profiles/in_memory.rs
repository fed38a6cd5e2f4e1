use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use jobboard_core::UserId;

use super::{EmployerProfile, EmployerProfileStore, StoreError};

/// In-memory profile store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryEmployerProfileStore {
    inner: RwLock<HashMap<UserId, EmployerProfile>>,
}

impl InMemoryEmployerProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the profile for `profile.user_id`.
    ///
    /// A poisoned lock is recovered: a single `insert` cannot leave the map
    /// half-written.
    pub fn upsert(&self, profile: EmployerProfile) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(profile.user_id.clone(), profile);
    }
}

impl FromIterator<EmployerProfile> for InMemoryEmployerProfileStore {
    fn from_iter<I: IntoIterator<Item = EmployerProfile>>(iter: I) -> Self {
        let store = Self::new();
        for profile in iter {
            store.upsert(profile);
        }
        store
    }
}

#[async_trait::async_trait]
impl EmployerProfileStore for InMemoryEmployerProfileStore {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<EmployerProfile>, StoreError> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(user_id).cloned())
    }
}
