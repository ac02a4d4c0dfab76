// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-resource configuration for the generic controller.
//!
//! Each resource supplies its endpoint, its form fields, how to turn those
//! fields into a validated draft, and how to render one record.

pub mod activity;
pub mod goal;
pub mod workout;

pub use activity::ActivityResource;
pub use goal::GoalResource;
pub use workout::WorkoutResource;

use std::fmt::Debug;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::controller::FieldStore;
use crate::error::{AppError, Result};
use crate::models::Identified;
use crate::time_utils;

/// A record kind with its own collection endpoint.
pub trait Resource {
    /// Record as stored and listed by the server.
    type Record: DeserializeOwned + Identified + Clone + Debug;
    /// Create payload built from the form.
    type Draft: Serialize + Validate + Debug;

    /// Collection path below the API base URL.
    const ENDPOINT: &'static str;
    /// Capitalized name used in messages ("Activity").
    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    /// Form field names, in display order.
    const FIELDS: &'static [&'static str];
    /// Text shown for an empty collection.
    const EMPTY_MESSAGE: &'static str;

    /// Parse the raw form values into a draft.
    fn parse_draft(fields: &FieldStore) -> Result<Self::Draft>;

    /// Display lines for one record.
    fn describe(record: &Self::Record) -> Vec<String>;

    /// Parse and validate the form. Nothing is sent unless this succeeds.
    fn draft(fields: &FieldStore) -> Result<Self::Draft> {
        let draft = Self::parse_draft(fields)?;
        draft.validate()?;
        Ok(draft)
    }

    /// Path of a single item.
    fn item_path(id: u64) -> String {
        format!("{}/{}", Self::ENDPOINT, id)
    }
}

/// Resources whose records can be marked achieved.
pub trait Achievable: Resource {}

/// Resources whose records the user may delete.
pub trait Deletable: Resource {}

/// Render a whole list, or the empty-collection message.
pub fn render_list<R: Resource>(records: &[R::Record]) -> String {
    if records.is_empty() {
        return R::EMPTY_MESSAGE.to_string();
    }
    records
        .iter()
        .map(|record| R::describe(record).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn required<'a>(fields: &'a FieldStore, name: &str) -> Result<&'a str> {
    let value = fields.get(name).map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::invalid_field(name, "is required"));
    }
    Ok(value)
}

fn decimal(fields: &FieldStore, name: &str) -> Result<f64> {
    let raw = required(fields, name)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::invalid_field(
            name,
            format!("'{}' is not a number", raw),
        )),
    }
}

fn count(fields: &FieldStore, name: &str) -> Result<u64> {
    let raw = required(fields, name)?;
    raw.parse::<u64>().map_err(|_| {
        AppError::invalid_field(name, format!("'{}' is not a whole number", raw))
    })
}

fn date(fields: &FieldStore, name: &str) -> Result<NaiveDate> {
    let raw = required(fields, name)?;
    time_utils::parse_input_date(raw).map_err(|e| AppError::invalid_field(name, e))
}
