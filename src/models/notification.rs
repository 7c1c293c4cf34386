// Rows of the `notifications` table and the payload that updates them

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::entrance::EntranceSummary;

/// A row from the `notifications` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub message: String,
    pub status: String,
    pub entrance_id: Option<i32>,
    pub sent_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// A notification LEFT JOINed with its entrance.
/// Every entrance column is null when `entrance_id` matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct NotificationWithEntrance {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub notification: Notification,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub entrance: EntranceSummary,
}

/// Body of `PUT .../notifications/{id}/status`.
/// Both fields are optional here so a missing `status` reaches the handler as a 400.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
    pub sent_date: Option<String>,
}

/// Validated status change handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub status: String,
    pub sent_date: Option<NaiveDateTime>,
}
