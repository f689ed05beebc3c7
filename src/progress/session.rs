// ABOUTME: The client's active plan session: last generated plan and the profile behind it
// ABOUTME: Activate on generation, restore on start-up, clear when returning to the form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use tracing::{debug, info};

use fitmind_core::models::{Plan, UserProfile};

use super::store::{KeyValueStore, KeyValueStoreExt};
use crate::constants::storage_keys;
use crate::errors::AppResult;

/// Last plan and profile kept across restarts
pub struct PlanSession<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> PlanSession<'a, S> {
    /// Session over `store`
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Make `plan` the active plan for `profile`
    ///
    /// # Errors
    ///
    /// Returns an error if either value cannot be persisted.
    pub fn activate(&self, plan: &Plan, profile: &UserProfile) -> AppResult<()> {
        self.store.set_json(storage_keys::PLAN, plan)?;
        self.store.set_json(storage_keys::USER_DATA, profile)?;
        info!(plan_id = %plan.id, "Plan activated");
        Ok(())
    }

    /// Previously activated plan and profile, when both are stored
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or a stored value is unreadable.
    pub fn restore(&self) -> AppResult<Option<(Plan, UserProfile)>> {
        let plan = self.store.get_json::<Plan>(storage_keys::PLAN)?;
        let profile = self.store.get_json::<UserProfile>(storage_keys::USER_DATA)?;
        match (plan, profile) {
            (Some(plan), Some(profile)) => Ok(Some((plan, profile))),
            _ => {
                debug!("No complete plan session stored");
                Ok(None)
            }
        }
    }

    /// Forget the active plan and profile; saved progress is left alone
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(storage_keys::PLAN)?;
        self.store.remove(storage_keys::USER_DATA)
    }
}
