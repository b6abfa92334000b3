/// HTTP endpoints for the wait list.
///
/// Thin adapters: each one forwards a single message to the queue coordinator and
/// serializes its answer.
use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::json;

use super::messages::{GetQueueStatus, Join, Leave};
use super::types::ParticipantId;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// `POST /queue/{participant_id}`: join the wait list, pairing if an opponent is waiting.
pub async fn join_queue(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let participant_id = ParticipantId::from(path.into_inner());
    let outcome = data.coordinator.send(Join { participant_id }).await?;
    debug!("[Http] join -> {:?}", outcome);
    Ok(HttpResponse::Ok().json(outcome))
}

/// `DELETE /queue/{participant_id}`: leave the wait list. Always succeeds.
pub async fn leave_queue(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let participant_id = ParticipantId::from(path.into_inner());
    data.coordinator.send(Leave { participant_id }).await?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

/// `GET /queue`
pub async fn queue_status(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let status = data.coordinator.send(GetQueueStatus).await?;
    Ok(HttpResponse::Ok().json(status))
}
