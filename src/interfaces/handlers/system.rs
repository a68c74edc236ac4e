use std::time::Duration;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use parking_lot::RwLock;
use serde::Serialize;

use crate::{
    constants::{HEALTH_CACHE_SECS, START_TIME},
    use_cases::portfolio::HealthReport,
    AppState,
};

#[derive(Serialize, Clone, Debug)]
pub struct HealthCheckResponse {
    #[serde(flatten)]
    report: HealthReport,
    timestamp: String,
    start_at: String,
    uptime: String,
    version: String,
}

/// Last health response and when it was built (unix seconds).
#[derive(Default)]
pub struct HealthCache {
    entry: RwLock<Option<(i64, HealthCheckResponse)>>,
}

impl HealthCache {
    fn fresh(&self, now: i64) -> Option<HealthCheckResponse> {
        self.entry
            .read()
            .as_ref()
            .filter(|(built_at, _)| now - built_at < HEALTH_CACHE_SECS)
            .map(|(_, response)| response.clone())
    }

    fn store(&self, now: i64, response: HealthCheckResponse) {
        *self.entry.write() = Some((now, response));
    }
}

async fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    HealthCheckResponse {
        report: state.portfolio_handler.check_health().await,
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        uptime: format_duration(Duration::from_secs(uptime)).to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Always answers 200 so a CMS outage never makes the site look down; the
/// body carries `healthy`, `warning` or `degraded`.
#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now().timestamp();

    if let Some(cached) = state.health_cache.fresh(now) {
        return HttpResponse::Ok().json(cached);
    }

    let response = build_health_response(&state).await;
    state.health_cache.store(now, response.clone());

    HttpResponse::Ok().json(response)
}
