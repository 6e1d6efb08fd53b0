use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::time::Duration;

use super::AppState;

/// Upper bound on the database probe, independent of the pool's acquire timeout.
const DATABASE_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let probe = sqlx::query("SELECT 1").execute(&state.db);
    let database_up = matches!(
        tokio::time::timeout(DATABASE_PROBE_TIMEOUT, probe).await,
        Ok(Ok(_))
    );

    Json(json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "service": "fitness-center",
        "version": env!("CARGO_PKG_VERSION"),
        "database": if database_up { "connected" } else { "unavailable" },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
