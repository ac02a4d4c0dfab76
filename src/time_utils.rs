// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date normalization between form input, the wire format, and display text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{AppError, Result};

/// Shown in place of any date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar date format used on the wire (`YYYY-MM-DD`).
const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Long-form display format, e.g. "14 March 2024".
const DISPLAY_FORMAT: &str = "%-d %B %Y";

/// Parse a form date into a calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (reduced to its UTC date).
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::Validation("date is required".to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, WIRE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| AppError::Validation(format!("'{}' is not a valid date", input)))
}

/// Normalize a form date into the ISO calendar-date string the API expects.
pub fn to_wire_date(input: &str) -> Result<String> {
    parse_input_date(input).map(|date| date.format(WIRE_FORMAT).to_string())
}

/// Render a server date for display. Never fails: unparseable input yields [`INVALID_DATE`].
pub fn to_display_date(value: &str) -> String {
    match parse_server_date(value) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_server_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, WIRE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    // Server-side LocalDateTime, serialized without an offset
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
