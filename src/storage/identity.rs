// ABOUTME: Persisted user identity for the client
// ABOUTME: Loads, saves, clears, and requires the backend-issued user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{debug, info};

use super::KeyValueStore;
use crate::constants::storage;
use crate::errors::{AppError, AppResult};
use crate::models::UserId;

/// The user identifier persisted under the fixed `userId` key
#[derive(Clone)]
pub struct IdentityStore {
    store: Arc<dyn KeyValueStore>,
}

impl IdentityStore {
    /// Wrap a key-value store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persisted id, `None` before the first signup. A blank value counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read
    pub async fn load(&self) -> AppResult<Option<UserId>> {
        let raw = self.store.get(storage::USER_ID_KEY).await?;
        Ok(raw.as_deref().and_then(UserId::parse))
    }

    /// Persist `user_id`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub async fn save(&self, user_id: &UserId) -> AppResult<()> {
        self.store
            .set(storage::USER_ID_KEY, user_id.as_str())
            .await?;
        info!(user_id = %user_id, "Stored user identity");
        Ok(())
    }

    /// Forget the persisted id
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(storage::USER_ID_KEY).await?;
        debug!("Cleared user identity");
        Ok(())
    }

    /// Persisted id, or `MissingUserId`
    ///
    /// # Errors
    ///
    /// Returns `MissingUserId` when nothing is stored, `StorageError` on read failure
    pub async fn require(&self) -> AppResult<UserId> {
        self.load().await?.ok_or_else(AppError::missing_user_id)
    }
}

impl std::fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityStore").finish_non_exhaustive()
    }
}
