use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::kernel::ServerDeps;

const DB_PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    status: Liveness,
    database: DatabaseCheck,
    pool: PoolStats,
}

#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabaseCheck {
    async fn run(pool: &PgPool) -> Self {
        let ping = sqlx::query("SELECT 1").execute(pool);
        let error = match tokio::time::timeout(DB_PING_TIMEOUT, ping).await {
            Ok(Ok(_)) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(_) => Some(format!("no reply within {}s", DB_PING_TIMEOUT.as_secs())),
        };
        Self {
            status: if error.is_none() { "ok" } else { "error" },
            error,
        }
    }

    fn passed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct PoolStats {
    open: u32,
    idle: usize,
    max: u32,
}

impl PoolStats {
    fn of(pool: &PgPool) -> Self {
        Self {
            open: pool.size(),
            idle: pool.num_idle(),
            max: pool.options().get_max_connections(),
        }
    }
}

/// GET /health: 503 when the database does not answer a ping
pub async fn health_handler(State(deps): State<ServerDeps>) -> (StatusCode, Json<HealthReport>) {
    let database = DatabaseCheck::run(&deps.db_pool).await;
    let (code, status) = if database.passed() {
        (StatusCode::OK, Liveness::Healthy)
    } else {
        tracing::warn!(error = ?database.error, "health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, Liveness::Unhealthy)
    };

    (
        code,
        Json(HealthReport {
            status,
            database,
            pool: PoolStats::of(&deps.db_pool),
        }),
    )
}
