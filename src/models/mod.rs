// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wire models for the fitness API.

pub mod activity;
pub mod goal;
pub mod stats;
pub mod workout;

pub use activity::{Activity, NewActivity};
pub use goal::{Goal, NewGoal};
pub use stats::{ActivityPoint, GraphSeries, StatsSummary, WorkoutPoint};
pub use workout::{NewWorkout, Workout, WorkoutType};

use serde::{Deserialize, Deserializer};

/// A server-owned record with an identifier unique within its collection.
pub trait Identified {
    fn id(&self) -> u64;
}

/// Deserialize an explicit `null` as the type's default.
///
/// `#[serde(default)]` alone only covers a missing key. Pair the two so a
/// record with an unset field still lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
