use std::time::Duration;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use humantime::format_duration;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Serialize;

use crate::{constants::START_TIME, AppState};

const HEALTH_CACHE_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum BackendStatus {
    Reachable,
    Unreachable,
}

#[derive(Debug, Clone, Serialize)]
struct HealthReport {
    status: &'static str,
    backend: BackendStatus,
    uptime: String,
    started_at: DateTime<Utc>,
    checked_at: DateTime<Utc>,
    version: &'static str,
}

/// Last report, reused while younger than [`HEALTH_CACHE_SECS`].
static LAST_REPORT: Lazy<RwLock<Option<HealthReport>>> = Lazy::new(|| RwLock::new(None));

async fn probe(state: &AppState) -> HealthReport {
    let checked_at = Utc::now();
    let uptime = (checked_at - *START_TIME).to_std().unwrap_or(Duration::ZERO);

    let backend = match state.gateway.ping().await {
        Ok(()) => BackendStatus::Reachable,
        Err(e) => {
            tracing::warn!("Backend health probe failed: {}", e);
            BackendStatus::Unreachable
        }
    };

    HealthReport {
        status: match backend {
            BackendStatus::Reachable => "healthy",
            BackendStatus::Unreachable => "degraded",
        },
        backend,
        uptime: format_duration(Duration::from_secs(uptime.as_secs())).to_string(),
        started_at: *START_TIME,
        checked_at,
        version: env!("CARGO_PKG_VERSION"),
    }
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let fresh = LAST_REPORT
        .read()
        .as_ref()
        .filter(|report| Utc::now() - report.checked_at < chrono::Duration::seconds(HEALTH_CACHE_SECS))
        .cloned();

    let report = match fresh {
        Some(report) => report,
        None => {
            let report = probe(&state).await;
            *LAST_REPORT.write() = Some(report.clone());
            report
        }
    };

    HttpResponse::Ok().json(report)
}
