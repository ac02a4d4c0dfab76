// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::Identified;

/// Kind of workout, as offered by the workout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
pub enum WorkoutType {
    Running,
    Cardio,
    Strength,
    Yoga,
    #[serde(rename = "HIIT")]
    Hiit,
    Others,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 6] = [
        WorkoutType::Running,
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Yoga,
        WorkoutType::Hiit,
        WorkoutType::Others,
    ];

    /// Name used on the wire and in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Others => "Others",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WorkoutType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = WorkoutType::ALL.iter().map(|t| t.as_str()).collect();
                format!("expected one of {}", names.join(", "))
            })
    }
}

/// Workout record as returned by `GET /workout`.
///
/// The type is kept as the raw server string so an unknown value still lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub date: String,
    #[serde(rename = "type", default, deserialize_with = "super::null_as_default")]
    pub workout_type: String,
    /// Duration in minutes
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub calories_burned: f64,
}

impl Identified for Workout {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Body of `POST /workout`.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub calories_burned: f64,
    #[validate(range(min = 1, message = "must be at least one minute"))]
    pub duration: u64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_names() {
        assert_eq!("HIIT".parse::<WorkoutType>().unwrap(), WorkoutType::Hiit);
        assert_eq!(" Yoga ".parse::<WorkoutType>().unwrap(), WorkoutType::Yoga);
        assert!("yoga".parse::<WorkoutType>().is_err());
        assert!("Hiit".parse::<WorkoutType>().is_err());
        assert!("Pilates".parse::<WorkoutType>().is_err());
        assert!("".parse::<WorkoutType>().is_err());
        assert_eq!(serde_json::to_value(WorkoutType::Hiit).unwrap(), "HIIT");
    }

    #[test]
    fn test_new_workout_wire_shape() {
        let draft = NewWorkout {
            calories_burned: 250.5,
            duration: 45,
            date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            workout_type: WorkoutType::Strength,
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["caloriesBurned"], 250.5);
        assert_eq!(json["duration"], 45);
        assert_eq!(json["date"], "2024-03-14");
        assert_eq!(json["type"], "Strength");
    }

    #[test]
    fn test_zero_duration_fails_validation() {
        let draft = NewWorkout {
            calories_burned: 0.0,
            duration: 0,
            date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            workout_type: WorkoutType::Yoga,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_unknown_server_type_still_deserializes() {
        let workout: Workout =
            serde_json::from_str(r#"{"id":1,"date":"2024-03-14","type":"Pilates","duration":30,"caloriesBurned":120}"#)
                .unwrap();
        assert_eq!(workout.workout_type, "Pilates");
        assert_eq!(workout.calories_burned, 120.0);
    }
}
