// =============================================================================
// DATABASE SERVICE - PostgreSQL access for notifications and flex_entrance
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool, Postgres};
use tracing::{debug, info, log::LevelFilter};

use crate::config::environment::EnvironmentVariables;
use crate::database::store::NotificationStore;
use crate::database::update_builder::UpdateBuilder;
use crate::models::{Entrance, Notification, NotificationWithEntrance, StatusUpdate};

// =============================================================================
// SQL CONSTANTS
// =============================================================================

const SELECT_NOTIFICATIONS: &str = r#"
    SELECT id, name, phone_number, message, status, entrance_id, sent_date, created_at
    FROM notifications
    ORDER BY created_at DESC
"#;

const SELECT_NOTIFICATIONS_WITH_ENTRANCE: &str = r#"
    SELECT
        n.id, n.name, n.phone_number, n.message, n.status, n.entrance_id, n.sent_date, n.created_at,
        e.id AS flex_id, e.tipo, e.janela, e.cpf, e.placa, e.nome AS motorista_nome,
        e.status AS entrance_status, e.mobile_id, e.latitude, e.longitude, e.localizacao, e.doca
    FROM notifications n
    LEFT JOIN flex_entrance e ON n.entrance_id = e.id
    ORDER BY n.created_at DESC
"#;

const SELECT_NOTIFICATION_BY_ID: &str = r#"
    SELECT id, name, phone_number, message, status, entrance_id, sent_date, created_at
    FROM notifications
    WHERE id = $1
"#;

const SELECT_NOTIFICATIONS_BY_ENTRANCE: &str = r#"
    SELECT id, name, phone_number, message, status, entrance_id, sent_date, created_at
    FROM notifications
    WHERE entrance_id = $1
    ORDER BY created_at DESC
"#;

const SELECT_ENTRANCES: &str = r#"
    SELECT id, tipo, janela, cpf, placa, nome, status, mobile_id,
           latitude, longitude, localizacao, doca, "timestamp"
    FROM flex_entrance
    ORDER BY "timestamp" DESC
"#;

const SELECT_ENTRANCE_BY_ID: &str = r#"
    SELECT id, tipo, janela, cpf, placa, nome, status, mobile_id,
           latitude, longitude, localizacao, doca, "timestamp"
    FROM flex_entrance
    WHERE id = $1
"#;

// =============================================================================
// DATABASE SERVICE
// =============================================================================

/// Database service backed by a single PostgreSQL connection pool.
/// The pool connects lazily: nothing touches the network until the first query.
#[derive(Clone, Debug)]
pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Creates the service and its (not yet connected) pool
    pub fn new(config: &EnvironmentVariables) -> Self {
        let connect_options: PgConnectOptions = create_connect_options(config);

        let pool: PgPool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .idle_timeout(std::time::Duration::from_secs(30))
            .connect_lazy_with(connect_options);

        info!(
            "DatabaseService configured for {}:{}/{}",
            config.db_host, config.db_port, config.db_name
        );

        Self { pool }
    }

    /// Wraps an existing pool, e.g. one built from a DATABASE_URL
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gracefully shuts down the service.
    pub async fn shutdown(&self) {
        info!("Initiating DatabaseService shutdown...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    /// Checks a connection out of the pool for the duration of one operation.
    /// Dropping the guard returns it, on success and error paths alike.
    async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .context("Failed to acquire database connection")
    }
}

/// Creates connection options with SSL and UTC timezone
fn create_connect_options(config: &EnvironmentVariables) -> PgConnectOptions {
    let mut options: PgConnectOptions = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .log_statements(LevelFilter::Debug);

    options = options.options([
        ("timezone", "UTC"),
        ("application_name", "notification-gateway"),
    ]);

    // Configure SSL based on environment
    let is_development: bool = config.environment == "development";
    if !is_development {
        options = options.ssl_mode(sqlx::postgres::PgSslMode::Require);
    } else {
        options = options.ssl_mode(sqlx::postgres::PgSslMode::Prefer);
    }

    options
}

// =============================================================================
// STORE OPERATIONS
// =============================================================================

#[async_trait]
impl NotificationStore for DatabaseService {
    async fn list_notifications(&self) -> Result<Vec<Notification>> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        sqlx::query_as::<_, Notification>(SELECT_NOTIFICATIONS)
            .fetch_all(&mut *conn)
            .await
            .context("Failed to list notifications")
    }

    async fn list_notifications_with_entrance(&self) -> Result<Vec<NotificationWithEntrance>> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        sqlx::query_as::<_, NotificationWithEntrance>(SELECT_NOTIFICATIONS_WITH_ENTRANCE)
            .fetch_all(&mut *conn)
            .await
            .context("Failed to list notifications with entrance data")
    }

    async fn find_notification(&self, id: i32) -> Result<Option<Notification>> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        sqlx::query_as::<_, Notification>(SELECT_NOTIFICATION_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .context(format!("Failed to find notification {id}"))
    }

    async fn list_notifications_by_entrance(&self, entrance_id: i32) -> Result<Vec<Notification>> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        sqlx::query_as::<_, Notification>(SELECT_NOTIFICATIONS_BY_ENTRANCE)
            .bind(entrance_id)
            .fetch_all(&mut *conn)
            .await
            .context(format!("Failed to list notifications for entrance {entrance_id}"))
    }

    async fn list_entrances(&self) -> Result<Vec<Entrance>> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        sqlx::query_as::<_, Entrance>(SELECT_ENTRANCES)
            .fetch_all(&mut *conn)
            .await
            .context("Failed to list entrances")
    }

    async fn find_entrance(&self, id: i32) -> Result<Option<Entrance>> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        sqlx::query_as::<_, Entrance>(SELECT_ENTRANCE_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .context(format!("Failed to find entrance {id}"))
    }

    async fn update_notification_status(&self, id: i32, update: &StatusUpdate) -> Result<u64> {
        let mut conn: PoolConnection<Postgres> = self.acquire().await?;

        let mut query = UpdateBuilder::new("notifications")
            .set("status", update.status.clone())
            .set_if_some("sent_date", update.sent_date)
            .where_eq("id", id);

        debug!("Updating notification {} status to '{}'", id, update.status);

        let result = query
            .build()
            .execute(&mut *conn)
            .await
            .context(format!("Failed to update status of notification {id}"))?;

        Ok(result.rows_affected())
    }
}
