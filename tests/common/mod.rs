//! tests/common/mod.rs
//! Shared helpers: in-memory stores and a way to spawn the app on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{serve, Router};
use chrono::{NaiveDate, NaiveDateTime};
use tokio::net::TcpListener as TokioTcpListener;

use notification_gateway::config::{environment::EnvironmentVariables, state::AppState};
use notification_gateway::core::server::{create_app, into_make_service};
use notification_gateway::database::NotificationStore;
use notification_gateway::models::{
    Entrance, EntranceSummary, Notification, NotificationWithEntrance, StatusUpdate,
};

pub const BASE: &str = "/notifications";

/// 2023-09-27 at the given time
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 9, 27)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid fixture timestamp")
}

/// Store backed by plain vectors, with the same ordering and join rules as the SQL.
#[derive(Default)]
pub struct InMemoryStore {
    notifications: Mutex<Vec<Notification>>,
    entrances: Vec<Entrance>,
    pub update_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(notifications: Vec<Notification>, entrances: Vec<Entrance>) -> Self {
        Self {
            notifications: Mutex::new(notifications),
            entrances,
            update_calls: AtomicUsize::new(0),
        }
    }

    /// Four notifications (one without entrance, one pointing at a missing entrance)
    /// and two entrances.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                notification(1, "Maria", "pending", None, None, at(10, 0)),
                notification(2, "João", "enviado", Some(10), Some(at(9, 0)), at(11, 0)),
                notification(3, "Ana", "pending", Some(10), None, at(9, 30)),
                notification(4, "Pedro", "pending", Some(99), None, at(8, 0)),
            ],
            vec![entrance(10, "Carlos", at(7, 0)), entrance(11, "Beatriz", at(12, 0))],
        )
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.lock().expect("store lock").clone()
    }

    pub fn notification(&self, id: i32) -> Option<Notification> {
        self.snapshot().into_iter().find(|n| n.id == id)
    }

    fn newest_first(mut rows: Vec<Notification>) -> Vec<Notification> {
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[async_trait]
impl NotificationStore for InMemoryStore {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        Ok(Self::newest_first(self.snapshot()))
    }

    async fn list_notifications_with_entrance(&self) -> Result<Vec<NotificationWithEntrance>> {
        let joined = Self::newest_first(self.snapshot())
            .into_iter()
            .map(|notification| {
                let entrance = notification
                    .entrance_id
                    .and_then(|id| self.entrances.iter().find(|e| e.id == id))
                    .map(EntranceSummary::from)
                    .unwrap_or_default();
                NotificationWithEntrance { notification, entrance }
            })
            .collect();
        Ok(joined)
    }

    async fn find_notification(&self, id: i32) -> Result<Option<Notification>> {
        Ok(self.notification(id))
    }

    async fn list_notifications_by_entrance(&self, entrance_id: i32) -> Result<Vec<Notification>> {
        let rows = self
            .snapshot()
            .into_iter()
            .filter(|n| n.entrance_id == Some(entrance_id))
            .collect();
        Ok(Self::newest_first(rows))
    }

    async fn list_entrances(&self) -> Result<Vec<Entrance>> {
        let mut rows = self.entrances.clone();
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(rows)
    }

    async fn find_entrance(&self, id: i32) -> Result<Option<Entrance>> {
        Ok(self.entrances.iter().find(|e| e.id == id).cloned())
    }

    async fn update_notification_status(&self, id: i32, update: &StatusUpdate) -> Result<u64> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let mut notifications = self.notifications.lock().expect("store lock");
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(row) => {
                row.status = update.status.clone();
                if let Some(sent_date) = update.sent_date {
                    row.sent_date = Some(sent_date);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// Every operation fails the way an unreachable database would
pub struct FailingStore;

#[async_trait]
impl NotificationStore for FailingStore {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        Err(unreachable_db())
    }

    async fn list_notifications_with_entrance(&self) -> Result<Vec<NotificationWithEntrance>> {
        Err(unreachable_db())
    }

    async fn find_notification(&self, _id: i32) -> Result<Option<Notification>> {
        Err(unreachable_db())
    }

    async fn list_notifications_by_entrance(&self, _entrance_id: i32) -> Result<Vec<Notification>> {
        Err(unreachable_db())
    }

    async fn list_entrances(&self) -> Result<Vec<Entrance>> {
        Err(unreachable_db())
    }

    async fn find_entrance(&self, _id: i32) -> Result<Option<Entrance>> {
        Err(unreachable_db())
    }

    async fn update_notification_status(&self, _id: i32, _update: &StatusUpdate) -> Result<u64> {
        Err(unreachable_db())
    }
}

fn unreachable_db() -> anyhow::Error {
    anyhow!("connection refused").context("Failed to acquire database connection")
}

pub fn notification(
    id: i32,
    name: &str,
    status: &str,
    entrance_id: Option<i32>,
    sent_date: Option<NaiveDateTime>,
    created_at: NaiveDateTime,
) -> Notification {
    Notification {
        id,
        name: name.to_string(),
        phone_number: format!("+55119999900{id:02}"),
        message: format!("Olá {name}, sua janela foi confirmada"),
        status: status.to_string(),
        entrance_id,
        sent_date,
        created_at,
    }
}

pub fn entrance(id: i32, driver: &str, timestamp: NaiveDateTime) -> Entrance {
    Entrance {
        id,
        entrance_type: Some("carga".into()),
        time_window: Some("14:00-15:00".into()),
        cpf: Some("123.456.789-00".into()),
        plate: Some(format!("ABC1D{id:02}")),
        driver_name: Some(driver.to_string()),
        status: Some("liberado".into()),
        mobile_id: Some(format!("device-{id}")),
        latitude: Some(-23.55),
        longitude: Some(-46.63),
        location: Some("Portaria 1".into()),
        dock: Some("D3".into()),
        timestamp,
    }
}

pub fn test_environment() -> EnvironmentVariables {
    let vars: HashMap<String, String> = [
        ("ENVIRONMENT", "test"),
        ("DB_HOST", "localhost"),
        ("DB_USER", "postgres"),
        ("DB_PASSWORD", "postgres"),
        ("DB_NAME", "flex_hubs_test"),
        ("BASE_PATH", BASE),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    EnvironmentVariables::from_vars(&vars).expect("valid test environment")
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app(store: Arc<dyn NotificationStore>) -> String {
    let state: AppState = AppState::new(Arc::new(test_environment()), store);
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, into_make_service(app))
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Shorthand for `{base_url}{BASE}/api{path}`
pub fn api_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{BASE}/api{path}")
}
