// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic resource controller.
//!
//! Wires one form, one remote collection, one list snapshot and a notifier
//! together. Every successful mutation is followed by a full re-list, so the
//! displayed records always converge to whatever the server returned last.

pub mod confirm;
pub mod field_store;
pub mod list_cache;

pub use confirm::{AlwaysConfirm, Confirm, StdinConfirm};
pub use field_store::FieldStore;
pub use list_cache::ListCache;

use crate::error::Result;
use crate::models::Identified;
use crate::resources::{Achievable, ActivityResource, Deletable, GoalResource, Resource, WorkoutResource};
use crate::services::{CompletableCollection, Notifier, RemoteCollection};

/// Where the controller is in its submit/list cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// A `list()` is in flight
    Listing,
    /// A mutation is in flight
    Submitting,
    /// The last submit was rejected; the form still holds the user's input
    SubmitFailed,
}

/// Orchestrates intents for one resource surface.
pub struct ResourceController<R: Resource, C, N> {
    client: C,
    notifier: N,
    fields: FieldStore,
    cache: ListCache<R::Record>,
    state: ControllerState,
}

pub type ActivityController<C, N> = ResourceController<ActivityResource, C, N>;
pub type WorkoutController<C, N> = ResourceController<WorkoutResource, C, N>;
pub type GoalController<C, N> = ResourceController<GoalResource, C, N>;

impl<R, C, N> ResourceController<R, C, N>
where
    R: Resource,
    C: RemoteCollection<R>,
    N: Notifier,
{
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            fields: FieldStore::new(R::FIELDS),
            cache: ListCache::new(),
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldStore {
        &mut self.fields
    }

    pub fn cache(&self) -> &ListCache<R::Record> {
        &self.cache
    }

    pub fn records(&self) -> &[R::Record] {
        self.cache.records()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Initial load when the surface appears. There is no polling afterwards.
    pub async fn mount(&mut self) -> Result<()> {
        tracing::debug!(resource = R::SINGULAR, "Mounting");
        self.refresh().await
    }

    /// Re-fetch the whole collection. On failure the previous snapshot is kept.
    pub async fn refresh(&mut self) -> Result<()> {
        self.set_state(ControllerState::Listing);
        let result = self.client.list().await;
        self.set_state(ControllerState::Idle);

        match result {
            Ok(records) => {
                self.cache.replace(records);
                tracing::debug!(
                    resource = R::SINGULAR,
                    count = self.cache.len(),
                    generation = self.cache.generation(),
                    "List refreshed"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = R::SINGULAR, error = %e, "Error fetching list");
                self.notifier.error(&format!("Error fetching {}!", R::PLURAL));
                Err(e)
            }
        }
    }

    /// Validate the form and create a record from it.
    ///
    /// Invalid input never reaches the network. On any failure the form keeps
    /// its values so the user can resubmit.
    pub async fn submit(&mut self) -> Result<R::Record> {
        let draft = match R::draft(&self.fields) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(resource = R::SINGULAR, error = %e, "Form rejected");
                self.set_state(ControllerState::SubmitFailed);
                self.notifier
                    .error(&format!("Invalid {}: {}", R::SINGULAR, e));
                return Err(e);
            }
        };

        self.set_state(ControllerState::Submitting);
        match self.client.create(&draft).await {
            Ok(created) => {
                tracing::info!(resource = R::SINGULAR, id = created.id(), "Record created");
                self.fields.reset();
                self.refresh().await.ok();
                self.notifier
                    .success(&format!("{} posted successfully!", R::TITLE));
                Ok(created)
            }
            Err(e) => {
                tracing::error!(resource = R::SINGULAR, error = %e, "Error posting record");
                self.set_state(ControllerState::SubmitFailed);
                self.notifier
                    .error(&format!("Failed to post {}", R::SINGULAR));
                Err(e)
            }
        }
    }

    fn set_state(&mut self, state: ControllerState) {
        if self.state != state {
            tracing::debug!(resource = R::SINGULAR, from = ?self.state, to = ?state, "State change");
            self.state = state;
        }
    }
}

impl<R, C, N> ResourceController<R, C, N>
where
    R: Deletable,
    C: RemoteCollection<R>,
    N: Notifier,
{
    /// Delete a record after explicit confirmation.
    ///
    /// Returns `Ok(false)` when the user declines; nothing is sent in that case.
    pub async fn delete(&mut self, id: u64, confirm: &impl Confirm) -> Result<bool> {
        let prompt = format!("Are you sure you want to delete this {}?", R::SINGULAR);
        if !confirm.confirm(&prompt) {
            tracing::debug!(resource = R::SINGULAR, id, "Delete declined");
            return Ok(false);
        }

        self.set_state(ControllerState::Submitting);
        let result = self.client.remove(id).await;
        self.set_state(ControllerState::Idle);

        match result {
            Ok(()) => {
                tracing::info!(resource = R::SINGULAR, id, "Record deleted");
                self.refresh().await.ok();
                self.notifier
                    .success(&format!("{} deleted successfully!", R::TITLE));
                Ok(true)
            }
            Err(e) => {
                tracing::error!(resource = R::SINGULAR, id, error = %e, "Error deleting record");
                self.notifier
                    .error(&format!("Failed to delete {}", R::SINGULAR));
                Err(e)
            }
        }
    }
}

impl<R, C, N> ResourceController<R, C, N>
where
    R: Achievable,
    C: CompletableCollection<R>,
    N: Notifier,
{
    /// Mark a record achieved.
    ///
    /// The cache is not touched until the follow-up re-list lands. Achieving an
    /// already-achieved record is sent anyway and succeeds as a no-op.
    pub async fn achieve(&mut self, id: u64) -> Result<R::Record> {
        self.set_state(ControllerState::Submitting);
        let result = self.client.mark_complete(id).await;
        self.set_state(ControllerState::Idle);

        match result {
            Ok(updated) => {
                tracing::info!(resource = R::SINGULAR, id, "Marked achieved");
                self.refresh().await.ok();
                self.notifier
                    .success(&format!("{} marked as achieved!", R::TITLE));
                Ok(updated)
            }
            Err(e) => {
                tracing::error!(resource = R::SINGULAR, id, error = %e, "Error updating record");
                self.notifier
                    .error(&format!("Failed to update {}", R::SINGULAR));
                Err(e)
            }
        }
    }
}
