//! Read-only aggregates computed by the server for the dashboard.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Totals returned by `GET /stats`.
///
/// Every field defaults to zero when the server omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSummary {
    /// Activity and workout calories combined
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_calories_burned: f64,
    /// Total activity distance (km)
    #[serde(deserialize_with = "super::null_as_default")]
    pub distance: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub steps: u64,
    /// Total workout minutes
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub duration: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub achieved_goals: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub not_achieved_goals: u64,
}

/// One workout sample on the progress chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutPoint {
    #[serde(deserialize_with = "super::null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub calories_burned: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub duration: u64,
}

/// One activity sample on the progress chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPoint {
    #[serde(deserialize_with = "super::null_as_default")]
    pub date: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    #[serde(deserialize_with = "super::null_as_default")]
    pub steps: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub calories_burned: f64,
}

/// Time series returned by `GET /graphs`, in server order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export, export_to = "bindings/"))]
#[serde(default)]
pub struct GraphSeries {
    pub workouts: Vec<WorkoutPoint>,
    pub activities: Vec<ActivityPoint>,
}
