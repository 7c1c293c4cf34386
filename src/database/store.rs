// The seam between HTTP handlers and whatever backs the two tables

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Entrance, Notification, NotificationWithEntrance, StatusUpdate};

/// One method per gateway operation; each maps to exactly one SQL statement
/// in the Postgres implementation. Lists come back newest first.
#[async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    async fn list_notifications(&self) -> Result<Vec<Notification>>;

    async fn list_notifications_with_entrance(&self) -> Result<Vec<NotificationWithEntrance>>;

    async fn find_notification(&self, id: i32) -> Result<Option<Notification>>;

    async fn list_notifications_by_entrance(&self, entrance_id: i32) -> Result<Vec<Notification>>;

    async fn list_entrances(&self) -> Result<Vec<Entrance>>;

    async fn find_entrance(&self, id: i32) -> Result<Option<Entrance>>;

    /// Returns the number of rows matched; zero means the id does not exist.
    async fn update_notification_status(&self, id: i32, update: &StatusUpdate) -> Result<u64>;
}
