// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - remote API access and user notification.

pub mod api;
pub mod collection;
pub mod notifier;

pub use api::ApiClient;
pub use collection::{CompletableCollection, HttpCollection, RemoteCollection};
pub use notifier::{ConsoleNotifier, MemoryNotifier, Notification, NotificationKind, Notifier};
