// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Goal model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

use super::Identified;

/// Goal record as returned by `GET /goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub end_date: String,
    /// Only ever moves from false to true
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub achieved: bool,
}

impl Identified for Goal {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Body of `POST /goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_goal_period"))]
pub struct NewGoal {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn validate_goal_period(goal: &NewGoal) -> Result<(), ValidationError> {
    if goal.end_date < goal.start_date {
        return Err(ValidationError::new("end_before_start")
            .with_message("end date must not be before start date".into()));
    }
    Ok(())
}
