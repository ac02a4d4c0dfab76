// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness tracker client.
//!
//! Records activities, workouts and goals against the fitness API and shows
//! aggregate statistics. Each resource is driven by the same generic
//! controller: validate the form, call the API, re-list, notify.

pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod resources;
pub mod services;
pub mod time_utils;

use config::Config;
use controller::{ActivityController, GoalController, WorkoutController};
use services::{ApiClient, HttpCollection, Notifier};

/// Shared client state, built once at startup from the configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(&config);
        Self { config, api }
    }

    pub fn activity_controller<N: Notifier>(
        &self,
        notifier: N,
    ) -> ActivityController<HttpCollection<resources::ActivityResource>, N> {
        ActivityController::new(HttpCollection::new(self.api.clone()), notifier)
    }

    pub fn workout_controller<N: Notifier>(
        &self,
        notifier: N,
    ) -> WorkoutController<HttpCollection<resources::WorkoutResource>, N> {
        WorkoutController::new(HttpCollection::new(self.api.clone()), notifier)
    }

    pub fn goal_controller<N: Notifier>(
        &self,
        notifier: N,
    ) -> GoalController<HttpCollection<resources::GoalResource>, N> {
        GoalController::new(HttpCollection::new(self.api.clone()), notifier)
    }

    pub fn dashboard(&self) -> dashboard::Dashboard {
        dashboard::Dashboard::new(self.api.clone())
    }
}
