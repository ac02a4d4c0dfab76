// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout form and list against the fake API.

use fitness_tracker::resources::{render_list, WorkoutResource};
use fitness_tracker::services::MemoryNotifier;
use serde_json::json;

mod common;
use common::{spawn_fake_api, FakeApi};

#[tokio::test]
async fn test_submit_workout() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().workout_controller(notifier.clone());
    controller.mount().await.unwrap();

    let fields = controller.fields_mut();
    fields.set("caloriesBurned", "450");
    fields.set("duration", "40");
    fields.set("date", "2024-03-14");
    fields.set("type", "HIIT");

    controller.submit().await.unwrap();

    assert_eq!(
        server.posted(),
        vec![json!({
            "caloriesBurned": 450.0,
            "duration": 40,
            "date": "2024-03-14",
            "type": "HIIT"
        })]
    );
    assert_eq!(notifier.messages(), vec!["Workout posted successfully!"]);
    assert_eq!(
        render_list::<WorkoutResource>(controller.records()),
        "Date: 14 March 2024\nType: HIIT\nDuration: 40 minutes\nCalories: 450 kcal"
    );
}

#[tokio::test]
async fn test_missing_type_is_rejected_locally() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().workout_controller(notifier.clone());

    let fields = controller.fields_mut();
    fields.set("caloriesBurned", "450");
    fields.set("duration", "40");
    fields.set("date", "2024-03-14");

    assert!(controller.submit().await.unwrap_err().is_validation());
    assert!(server.requests().is_empty());
    assert_eq!(notifier.messages(), vec!["Invalid workout: type: is required"]);
}

#[tokio::test]
async fn test_lowercase_type_is_rejected_locally() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().workout_controller(notifier.clone());

    let fields = controller.fields_mut();
    fields.set("caloriesBurned", "200");
    fields.set("duration", "30");
    fields.set("date", "2024-03-14");
    fields.set("type", "yoga");

    assert!(controller.submit().await.unwrap_err().is_validation());
    assert!(server.requests().is_empty());
    assert!(notifier.messages()[0].starts_with("Invalid workout: type: expected one of"));
}

#[tokio::test]
async fn test_empty_list_renders_placeholder() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let mut controller = server.app_state().workout_controller(MemoryNotifier::new());

    controller.mount().await.unwrap();

    assert_eq!(controller.cache().generation(), 1);
    assert_eq!(
        render_list::<WorkoutResource>(controller.records()),
        "No workouts available"
    );
}
