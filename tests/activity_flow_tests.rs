// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity form and list against the fake API.

use fitness_tracker::controller::ControllerState;
use fitness_tracker::resources::{render_list, ActivityResource};
use fitness_tracker::services::{MemoryNotifier, NotificationKind};
use serde_json::json;

mod common;
use common::{spawn_fake_api, FakeApi};

#[tokio::test]
async fn test_submit_activity_posts_wire_date_and_resets_form() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().activity_controller(notifier.clone());

    controller.mount().await.unwrap();
    assert!(controller.records().is_empty());

    let fields = controller.fields_mut();
    fields.set("caloriesBurned", "300");
    fields.set("distance", "5");
    fields.set("steps", "6000");
    fields.set("date", "2024-03-14");

    let created = controller.submit().await.unwrap();

    assert_eq!(
        server.posted(),
        vec![json!({
            "caloriesBurned": 300.0,
            "distance": 5.0,
            "steps": 6000,
            "date": "2024-03-14"
        })]
    );
    assert_eq!(
        server.requests(),
        vec!["GET /activity", "POST /activity", "GET /activity"]
    );

    // Form back to its initial empty state
    let pairs: Vec<_> = controller.fields().iter().collect();
    assert_eq!(
        pairs,
        vec![("caloriesBurned", ""), ("distance", ""), ("steps", ""), ("date", "")]
    );

    // Refreshed list carries the server id and the submitted data
    let listed = controller.cache().get(created.id).expect("created activity listed");
    assert_eq!(listed.date, "2024-03-14");
    assert_eq!(listed.steps, 6000);
    assert_eq!(listed.distance, 5.0);
    assert_eq!(listed.calories_burned, 300.0);

    let sent = notifier.notifications();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::Success);
    assert_eq!(sent[0].message, "Activity posted successfully!");
}

#[tokio::test]
async fn test_bad_date_never_reaches_server() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().activity_controller(notifier.clone());
    controller.mount().await.unwrap();

    let fields = controller.fields_mut();
    fields.set("caloriesBurned", "300");
    fields.set("distance", "5");
    fields.set("steps", "6000");
    fields.set("date", "14th of March");
    let before = controller.fields().clone();

    let err = controller.submit().await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(server.requests(), vec!["GET /activity"]);
    assert!(server.posted().is_empty());
    assert_eq!(controller.fields(), &before);
    assert_eq!(controller.state(), ControllerState::SubmitFailed);
    assert_eq!(notifier.notifications()[0].kind, NotificationKind::Error);
    assert!(notifier.messages()[0].starts_with("Invalid activity: date:"));
}

#[tokio::test]
async fn test_server_error_keeps_form_for_resubmit() {
    let server = spawn_fake_api(FakeApi::new()).await;
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().activity_controller(notifier.clone());
    controller.mount().await.unwrap();

    server.fail("POST /activity");
    let fields = controller.fields_mut();
    fields.set("caloriesBurned", "120.5");
    fields.set("distance", "2.25");
    fields.set("steps", "3100");
    fields.set("date", "2024-03-15");

    let err = controller.submit().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(controller.fields().get("steps"), Some("3100"));
    assert_eq!(notifier.messages(), vec!["Failed to post activity"]);

    server.recover("POST /activity");
    controller.submit().await.unwrap();
    assert_eq!(controller.records().len(), 1);
    assert!(controller.fields().is_empty());
}

#[tokio::test]
async fn test_list_failure_on_mount_notifies() {
    let server = spawn_fake_api(FakeApi::new()).await;
    server.fail("GET /activity");
    let notifier = MemoryNotifier::new();
    let mut controller = server.app_state().activity_controller(notifier.clone());

    assert!(controller.mount().await.unwrap_err().is_transport());
    assert_eq!(controller.cache().generation(), 0);
    assert_eq!(notifier.messages(), vec!["Error fetching activities!"]);
    assert_eq!(
        render_list::<ActivityResource>(controller.records()),
        "No activity available"
    );
}
