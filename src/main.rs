// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness Tracker command line client.
//!
//! One subcommand per page of the tracker: the dashboard plus the activity,
//! workout and goal lists with their forms.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fitness_tracker::config::{Config, LogFormat};
use fitness_tracker::controller::{AlwaysConfirm, ResourceController, StdinConfirm};
use fitness_tracker::dashboard::{ChartRenderer, TextChartRenderer};
use fitness_tracker::models::WorkoutType;
use fitness_tracker::resources::{render_list, Resource};
use fitness_tracker::services::{ConsoleNotifier, Notifier, RemoteCollection};
use fitness_tracker::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about = "Fitness tracker client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the fitness API (overrides FITNESS_API_URL)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals and progress charts
    Dashboard,

    /// Daily activities
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Workouts
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
}

#[derive(Subcommand)]
enum ActivityAction {
    /// List submitted activities
    List,
    /// Post a new activity
    Add {
        /// Calories burned (kcal)
        #[arg(long)]
        calories: String,
        /// Distance (km)
        #[arg(long)]
        distance: String,
        #[arg(long)]
        steps: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

#[derive(Subcommand)]
enum WorkoutAction {
    /// List submitted workouts
    List,
    /// Post a new workout
    Add {
        /// Calories burned (kcal)
        #[arg(long)]
        calories: String,
        /// Duration in minutes
        #[arg(long)]
        duration: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Running, Cardio, Strength, Yoga, HIIT or Others
        #[arg(long = "type", value_parser = clap::value_parser!(WorkoutType))]
        workout_type: WorkoutType,
    },
}

#[derive(Subcommand)]
enum GoalAction {
    /// List goals
    List,
    /// Post a new goal
    Add {
        #[arg(long)]
        description: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
    /// Mark a goal as achieved
    Achieve { id: u64 },
    /// Delete a goal
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config
            .with_api_base_url(url)
            .context("Invalid --api-url")?;
    }

    init_logging(config.log_format);
    tracing::debug!(api = %config.api_base_url, "Starting fitness tracker client");

    let state = AppState::new(config);
    let ok = match cli.command {
        Commands::Dashboard => show_dashboard(&state).await,
        Commands::Activity { action } => run_activity(&state, action).await,
        Commands::Workout { action } => run_workout(&state, action).await,
        Commands::Goal { action } => run_goal(&state, action).await,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

async fn show_dashboard(state: &AppState) -> bool {
    let view = match state.dashboard().load().await {
        Ok(view) => view,
        Err(e) => {
            eprintln!("✖ Error fetching dashboard data: {}", e);
            return false;
        }
    };

    println!("Fitness Tracker Dashboard\n");
    for card in &view.cards {
        println!("  {:<24} {}", card.title, card.value);
    }
    println!();
    let renderer = TextChartRenderer;
    println!("{}", renderer.render(&view.workout_chart));
    println!("{}", renderer.render(&view.activity_chart));
    true
}

async fn run_activity(state: &AppState, action: ActivityAction) -> bool {
    let mut controller = state.activity_controller(ConsoleNotifier);
    let mounted = controller.mount().await.is_ok();

    let ok = match action {
        ActivityAction::List => mounted,
        ActivityAction::Add {
            calories,
            distance,
            steps,
            date,
        } => {
            let fields = controller.fields_mut();
            fields.set("caloriesBurned", calories);
            fields.set("distance", distance);
            fields.set("steps", steps);
            fields.set("date", date);
            controller.submit().await.is_ok()
        }
    };

    print_list(&controller);
    ok
}

async fn run_workout(state: &AppState, action: WorkoutAction) -> bool {
    let mut controller = state.workout_controller(ConsoleNotifier);
    let mounted = controller.mount().await.is_ok();

    let ok = match action {
        WorkoutAction::List => mounted,
        WorkoutAction::Add {
            calories,
            duration,
            date,
            workout_type,
        } => {
            let fields = controller.fields_mut();
            fields.set("caloriesBurned", calories);
            fields.set("duration", duration);
            fields.set("date", date);
            fields.set("type", workout_type.as_str());
            controller.submit().await.is_ok()
        }
    };

    print_list(&controller);
    ok
}

async fn run_goal(state: &AppState, action: GoalAction) -> bool {
    let mut controller = state.goal_controller(ConsoleNotifier);
    let mounted = controller.mount().await.is_ok();

    let ok = match action {
        GoalAction::List => mounted,
        GoalAction::Add {
            description,
            from,
            to,
        } => {
            let fields = controller.fields_mut();
            fields.set("description", description);
            fields.set("from", from);
            fields.set("to", to);
            controller.submit().await.is_ok()
        }
        GoalAction::Achieve { id } => controller.achieve(id).await.is_ok(),
        GoalAction::Delete { id, yes } => {
            let result = if yes {
                controller.delete(id, &AlwaysConfirm).await
            } else {
                controller.delete(id, &StdinConfirm).await
            };
            result.is_ok()
        }
    };

    print_list(&controller);
    ok
}

fn print_list<R, C, N>(controller: &ResourceController<R, C, N>)
where
    R: Resource,
    C: RemoteCollection<R>,
    N: Notifier,
{
    println!("Submitted {}\n", capitalize(R::PLURAL));
    println!("{}", render_list::<R>(controller.records()));
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Initialize logging on stderr, as JSON or compact text.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitness_tracker=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
