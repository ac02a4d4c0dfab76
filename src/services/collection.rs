// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote CRUD operations on one resource collection.

use std::marker::PhantomData;

use crate::error::Result;
use crate::resources::{Achievable, Resource};
use crate::services::ApiClient;

/// List, create and delete against a resource's collection endpoint.
///
/// Calls are independent: no queuing, retry, or timeout.
#[allow(async_fn_in_trait)]
pub trait RemoteCollection<R: Resource> {
    /// `GET /{endpoint}`. An empty list is a valid result.
    async fn list(&self) -> Result<Vec<R::Record>>;

    /// `POST /{endpoint}`. The server assigns the id and defaults.
    async fn create(&self, draft: &R::Draft) -> Result<R::Record>;

    /// `DELETE /{endpoint}/{id}`.
    async fn remove(&self, id: u64) -> Result<()>;
}

/// Collections whose items can be marked achieved.
#[allow(async_fn_in_trait)]
pub trait CompletableCollection<R: Achievable>: RemoteCollection<R> {
    /// Trigger the achieved transition for one item and return it.
    ///
    /// On the wire this is `GET /{endpoint}/{id}`: the server mutates on read.
    /// Callers should not rely on that anywhere else.
    async fn mark_complete(&self, id: u64) -> Result<R::Record>;
}

/// HTTP implementation backed by the shared [`ApiClient`].
pub struct HttpCollection<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpCollection<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Clone for HttpCollection<R> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<R: Resource> RemoteCollection<R> for HttpCollection<R> {
    async fn list(&self) -> Result<Vec<R::Record>> {
        self.api.get_json(R::ENDPOINT).await
    }

    async fn create(&self, draft: &R::Draft) -> Result<R::Record> {
        self.api.post_json(R::ENDPOINT, draft).await
    }

    async fn remove(&self, id: u64) -> Result<()> {
        self.api.delete(&R::item_path(id)).await
    }
}

impl<R: Achievable> CompletableCollection<R> for HttpCollection<R> {
    async fn mark_complete(&self, id: u64) -> Result<R::Record> {
        self.api.get_json(&R::item_path(id)).await
    }
}
