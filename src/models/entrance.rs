// Rows of the `flex_entrance` table (vehicle/driver check-ins)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `flex_entrance` table.
/// Field names on the wire keep the column names existing clients read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Entrance {
    pub id: i32,
    #[serde(rename = "tipo")]
    #[sqlx(rename = "tipo")]
    pub entrance_type: Option<String>,
    #[serde(rename = "janela")]
    #[sqlx(rename = "janela")]
    pub time_window: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "placa")]
    #[sqlx(rename = "placa")]
    pub plate: Option<String>,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub driver_name: Option<String>,
    pub status: Option<String>,
    pub mobile_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "localizacao")]
    #[sqlx(rename = "localizacao")]
    pub location: Option<String>,
    #[serde(rename = "doca")]
    #[sqlx(rename = "doca")]
    pub dock: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Entrance columns projected into the notification join, aliased so they
/// don't collide with the notification's own `id` and `status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EntranceSummary {
    pub flex_id: Option<i32>,
    #[serde(rename = "tipo")]
    #[sqlx(rename = "tipo")]
    pub entrance_type: Option<String>,
    #[serde(rename = "janela")]
    #[sqlx(rename = "janela")]
    pub time_window: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "placa")]
    #[sqlx(rename = "placa")]
    pub plate: Option<String>,
    #[serde(rename = "motorista_nome")]
    #[sqlx(rename = "motorista_nome")]
    pub driver_name: Option<String>,
    pub entrance_status: Option<String>,
    pub mobile_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "localizacao")]
    #[sqlx(rename = "localizacao")]
    pub location: Option<String>,
    #[serde(rename = "doca")]
    #[sqlx(rename = "doca")]
    pub dock: Option<String>,
}

impl EntranceSummary {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<&Entrance> for EntranceSummary {
    fn from(entrance: &Entrance) -> Self {
        Self {
            flex_id: Some(entrance.id),
            entrance_type: entrance.entrance_type.clone(),
            time_window: entrance.time_window.clone(),
            cpf: entrance.cpf.clone(),
            plate: entrance.plate.clone(),
            driver_name: entrance.driver_name.clone(),
            entrance_status: entrance.status.clone(),
            mobile_id: entrance.mobile_id.clone(),
            latitude: entrance.latitude,
            longitude: entrance.longitude,
            location: entrance.location.clone(),
            dock: entrance.dock.clone(),
        }
    }
}
