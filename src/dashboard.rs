// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only dashboard: summary cards and progress charts.
//!
//! Charts are plain data; drawing them is left to a [`ChartRenderer`].

use crate::error::Result;
use crate::models::{GraphSeries, StatsSummary};
use crate::services::ApiClient;
use crate::time_utils::to_display_date;

/// One summary tile.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
}

/// One line series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    /// Line color as a hex string
    pub color: &'static str,
}

/// A line chart over dated samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Everything the dashboard page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: StatsSummary,
    pub cards: Vec<SummaryCard>,
    pub workout_chart: LineChart,
    pub activity_chart: LineChart,
}

/// Turns chart data into visual output.
pub trait ChartRenderer {
    type Output;

    fn render(&self, chart: &LineChart) -> Self::Output;
}

/// Fetches the dashboard aggregates.
pub struct Dashboard {
    api: ApiClient,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch stats, then graphs. Either failure aborts the load.
    pub async fn load(&self) -> Result<DashboardView> {
        let stats = self.api.get_stats().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching stats");
        })?;
        let graphs = self.api.get_graphs().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching graphs");
        })?;

        tracing::debug!(
            workouts = graphs.workouts.len(),
            activities = graphs.activities.len(),
            "Dashboard loaded"
        );
        Ok(DashboardView::new(stats, &graphs))
    }
}

impl DashboardView {
    pub fn new(stats: StatsSummary, graphs: &GraphSeries) -> Self {
        Self {
            cards: summary_cards(&stats),
            workout_chart: workout_chart(graphs),
            activity_chart: activity_chart(graphs),
            stats,
        }
    }
}

pub fn summary_cards(stats: &StatsSummary) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "Total Calories Burned",
            value: format!("{} kcal", stats.total_calories_burned),
        },
        SummaryCard {
            title: "Total Distance Covered",
            value: format!("{} km", stats.distance),
        },
        SummaryCard {
            title: "Total Steps Taken",
            value: format!("{} steps", stats.steps),
        },
        SummaryCard {
            title: "Total Time Spent",
            value: format!("{} mins", stats.duration),
        },
        SummaryCard {
            title: "Achieved Goals",
            value: stats.achieved_goals.to_string(),
        },
        SummaryCard {
            title: "Not Achieved Goals",
            value: stats.not_achieved_goals.to_string(),
        },
    ]
}

pub fn workout_chart(graphs: &GraphSeries) -> LineChart {
    LineChart {
        title: "Workout Progress",
        labels: graphs.workouts.iter().map(|w| to_display_date(&w.date)).collect(),
        datasets: vec![
            Dataset {
                label: "Calories Burned",
                data: graphs.workouts.iter().map(|w| w.calories_burned).collect(),
                color: "#FF5733",
            },
            Dataset {
                label: "Duration (mins)",
                data: graphs.workouts.iter().map(|w| w.duration as f64).collect(),
                color: "#28B463",
            },
        ],
    }
}

pub fn activity_chart(graphs: &GraphSeries) -> LineChart {
    LineChart {
        title: "Activity Progress",
        labels: graphs.activities.iter().map(|a| to_display_date(&a.date)).collect(),
        datasets: vec![
            Dataset {
                label: "Steps",
                data: graphs.activities.iter().map(|a| a.steps as f64).collect(),
                color: "#3498DB",
            },
            Dataset {
                label: "Calories Burned",
                data: graphs.activities.iter().map(|a| a.calories_burned).collect(),
                color: "#F39C12",
            },
        ],
    }
}

/// Renders a chart as a fixed-width text table, one row per label.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChartRenderer;

impl ChartRenderer for TextChartRenderer {
    type Output = String;

    fn render(&self, chart: &LineChart) -> String {
        let mut out = format!("{}\n", chart.title);
        if chart.labels.is_empty() {
            out.push_str("  (no data)\n");
            return out;
        }

        let label_width = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0).max(4);
        out.push_str(&format!("  {:<width$}", "Date", width = label_width));
        for dataset in &chart.datasets {
            out.push_str(&format!("  {:>16}", dataset.label));
        }
        out.push('\n');

        for (i, label) in chart.labels.iter().enumerate() {
            out.push_str(&format!("  {:<width$}", label, width = label_width));
            for dataset in &chart.datasets {
                match dataset.data.get(i) {
                    Some(value) => out.push_str(&format!("  {:>16}", value)),
                    None => out.push_str(&format!("  {:>16}", "-")),
                }
            }
            out.push('\n');
        }
        out
    }
}
