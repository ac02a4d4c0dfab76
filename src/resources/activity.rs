// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity resource: list and create only.

use super::{count, date, decimal, Resource};
use crate::controller::FieldStore;
use crate::error::Result;
use crate::models::{Activity, NewActivity};
use crate::time_utils::to_display_date;

pub struct ActivityResource;

impl Resource for ActivityResource {
    type Record = Activity;
    type Draft = NewActivity;

    const ENDPOINT: &'static str = "activity";
    const TITLE: &'static str = "Activity";
    const SINGULAR: &'static str = "activity";
    const PLURAL: &'static str = "activities";
    const FIELDS: &'static [&'static str] = &["caloriesBurned", "distance", "steps", "date"];
    const EMPTY_MESSAGE: &'static str = "No activity available";

    fn parse_draft(fields: &FieldStore) -> Result<NewActivity> {
        Ok(NewActivity {
            calories_burned: decimal(fields, "caloriesBurned")?,
            distance: decimal(fields, "distance")?,
            steps: count(fields, "steps")?,
            date: date(fields, "date")?,
        })
    }

    fn describe(activity: &Activity) -> Vec<String> {
        vec![
            format!("Date: {}", to_display_date(&activity.date)),
            format!("Steps: {}", activity.steps),
            format!("Distance: {} km", activity.distance),
            format!("Calories: {} kcal", activity.calories_burned),
        ]
    }
}
