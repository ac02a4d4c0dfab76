// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout resource: list and create only.

use super::{count, date, decimal, required, Resource};
use crate::controller::FieldStore;
use crate::error::{AppError, Result};
use crate::models::{NewWorkout, Workout, WorkoutType};
use crate::time_utils::to_display_date;

pub struct WorkoutResource;

impl Resource for WorkoutResource {
    type Record = Workout;
    type Draft = NewWorkout;

    const ENDPOINT: &'static str = "workout";
    const TITLE: &'static str = "Workout";
    const SINGULAR: &'static str = "workout";
    const PLURAL: &'static str = "workouts";
    const FIELDS: &'static [&'static str] = &["caloriesBurned", "duration", "date", "type"];
    const EMPTY_MESSAGE: &'static str = "No workouts available";

    fn parse_draft(fields: &FieldStore) -> Result<NewWorkout> {
        let workout_type = required(fields, "type")?
            .parse::<WorkoutType>()
            .map_err(|e| AppError::invalid_field("type", e))?;

        Ok(NewWorkout {
            calories_burned: decimal(fields, "caloriesBurned")?,
            duration: count(fields, "duration")?,
            date: date(fields, "date")?,
            workout_type,
        })
    }

    fn describe(workout: &Workout) -> Vec<String> {
        vec![
            format!("Date: {}", to_display_date(&workout.date)),
            format!("Type: {}", workout.workout_type),
            format!("Duration: {} minutes", workout.duration),
            format!("Calories: {} kcal", workout.calories_burned),
        ]
    }
}
