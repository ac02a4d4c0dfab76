// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fake fitness API for integration tests.
//!
//! Serves the same routes as the real backend from in-memory collections,
//! records every request, and fails any route listed in `fail`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitness_tracker::config::Config;
use fitness_tracker::AppState;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeApi {
    pub goals: Vec<Value>,
    pub activity: Vec<Value>,
    pub workout: Vec<Value>,
    pub stats: Value,
    pub graphs: Value,
    /// Routes ("DELETE /goals/7") that answer 500
    pub fail: HashSet<String>,
    /// Every request seen, as "METHOD /path"
    pub requests: Vec<String>,
    /// Every POST body, in order
    pub posted: Vec<Value>,
    next_id: u64,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            stats: json!({}),
            graphs: json!({}),
            next_id: 100,
            ..Self::default()
        }
    }

    pub fn with_goals(mut self, goals: Vec<Value>) -> Self {
        self.goals = goals;
        self
    }

    fn hit(&mut self, method: &str, path: &str) -> Result<(), StatusCode> {
        let route = format!("{} {}", method, path);
        self.requests.push(route.clone());
        if self.fail.contains(&route) {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(())
    }

    fn collection(&mut self, name: &str) -> &mut Vec<Value> {
        match name {
            "goals" => &mut self.goals,
            "activity" => &mut self.activity,
            _ => &mut self.workout,
        }
    }
}

pub type SharedApi = Arc<Mutex<FakeApi>>;

pub fn goal(id: u64, description: &str, achieved: bool) -> Value {
    json!({
        "id": id,
        "description": description,
        "startDate": "2024-04-01",
        "endDate": "2024-05-01",
        "achieved": achieved
    })
}

/// A running fake server.
pub struct TestServer {
    pub base_url: String,
    pub api: SharedApi,
}

#[allow(dead_code)]
impl TestServer {
    pub fn app_state(&self) -> AppState {
        let config = Config::default()
            .with_api_base_url(&self.base_url)
            .expect("valid test URL");
        AppState::new(config)
    }

    pub fn requests(&self) -> Vec<String> {
        self.api.lock().unwrap().requests.clone()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.api.lock().unwrap().posted.clone()
    }

    pub fn fail(&self, route: &str) {
        self.api.lock().unwrap().fail.insert(route.to_string());
    }

    pub fn recover(&self, route: &str) {
        self.api.lock().unwrap().fail.remove(route);
    }
}

/// Start the fake API on an ephemeral local port.
pub async fn spawn_fake_api(api: FakeApi) -> TestServer {
    let api = Arc::new(Mutex::new(api));
    let app = router(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake API stopped");
    });

    TestServer {
        base_url: format!("http://{}/api", addr),
        api,
    }
}

/// App state pointed at a port nothing listens on.
#[allow(dead_code)]
pub async fn unreachable_app_state() -> AppState {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe socket");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);

    let config = Config::default()
        .with_api_base_url(&format!("http://{}/api", addr))
        .expect("valid test URL");
    AppState::new(config)
}

fn router(api: SharedApi) -> Router {
    let mut router: Router<SharedApi> = Router::new()
        .route(
            "/api/stats",
            get(|State(api): State<SharedApi>| async move {
                let mut api = api.lock().unwrap();
                api.hit("GET", "/stats")?;
                Ok::<_, StatusCode>(Json(api.stats.clone()))
            }),
        )
        .route(
            "/api/graphs",
            get(|State(api): State<SharedApi>| async move {
                let mut api = api.lock().unwrap();
                api.hit("GET", "/graphs")?;
                Ok::<_, StatusCode>(Json(api.graphs.clone()))
            }),
        )
        .route(
            "/api/goals/{id}",
            get(|State(api): State<SharedApi>, Path(id): Path<u64>| async move {
                achieve_goal(&api, id)
            })
            .delete(|State(api): State<SharedApi>, Path(id): Path<u64>| async move {
                delete_goal(&api, id)
            }),
        );

    for name in ["goals", "activity", "workout"] {
        router = router.route(
            &format!("/api/{}", name),
            get(move |State(api): State<SharedApi>| async move { list(&api, name) }).post(
                move |State(api): State<SharedApi>, Json(body): Json<Value>| async move {
                    create(&api, name, body)
                },
            ),
        );
    }

    router.with_state(api)
}

fn list(api: &SharedApi, name: &str) -> Result<Json<Value>, StatusCode> {
    let mut api = api.lock().unwrap();
    api.hit("GET", &format!("/{}", name))?;
    Ok(Json(Value::Array(api.collection(name).clone())))
}

fn create(api: &SharedApi, name: &str, body: Value) -> Result<Json<Value>, StatusCode> {
    let mut api = api.lock().unwrap();
    api.hit("POST", &format!("/{}", name))?;
    api.posted.push(body.clone());

    api.next_id += 1;
    let mut record = body;
    record["id"] = json!(api.next_id);
    if name == "goals" {
        record["achieved"] = json!(false);
    }
    api.collection(name).push(record.clone());
    Ok(Json(record))
}

fn achieve_goal(api: &SharedApi, id: u64) -> Result<Json<Value>, StatusCode> {
    let mut api = api.lock().unwrap();
    api.hit("GET", &format!("/goals/{}", id))?;
    let goal = api
        .goals
        .iter_mut()
        .find(|g| g["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    goal["achieved"] = json!(true);
    Ok(Json(goal.clone()))
}

fn delete_goal(api: &SharedApi, id: u64) -> Result<StatusCode, StatusCode> {
    let mut api = api.lock().unwrap();
    api.hit("DELETE", &format!("/goals/{}", id))?;
    let before = api.goals.len();
    api.goals.retain(|g| g["id"] != json!(id));
    if api.goals.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}
