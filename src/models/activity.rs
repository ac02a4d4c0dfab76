// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Daily activity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::Identified;

/// Activity record as returned by `GET /activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Server-assigned identifier
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// Calendar date (ISO `YYYY-MM-DD`)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub steps: u64,
    /// Distance in kilometers
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub distance: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub calories_burned: f64,
}

impl Identified for Activity {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Body of `POST /activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub calories_burned: f64,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub distance: f64,
    pub steps: u64,
    pub date: NaiveDate,
}
