/// HTTP endpoints addressed to a single participant.
///
/// The participant id in the path is a bearer token: it is not checked against issued
/// ids, and an unseen id simply gets a fresh session.
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::messages::{GetStatus, PollNotification, SubmitGuess};
use crate::server::error::ApiError;
use crate::server::game_session::messages::GuessOutcome;
use crate::server::matchmaking::types::ParticipantId;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct GuessRequest {
    pub number: i64,
}

#[derive(Serialize)]
pub struct GuessResponse {
    pub accepted: bool,
    pub outcome: GuessOutcome,
}

/// `POST /participants`: issue a fresh participant id.
pub async fn issue_identity(data: web::Data<AppState>) -> HttpResponse {
    let participant_id = ParticipantId::issue();
    data.directory.participant(&participant_id);
    HttpResponse::Created().json(json!({ "participant_id": participant_id }))
}

/// `POST /participants/{participant_id}/guess`
pub async fn submit_guess(
    path: web::Path<String>,
    body: web::Json<GuessRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let participant_id = ParticipantId::from(path.into_inner());
    let outcome = data
        .directory
        .participant(&participant_id)
        .send(SubmitGuess { number: body.number })
        .await?;
    Ok(HttpResponse::Ok().json(GuessResponse {
        accepted: outcome.is_accepted(),
        outcome,
    }))
}

/// `GET /participants/{participant_id}/notification`: take the pending message, if any.
///
/// Like every participant route, this starts a session for an unseen id, and that
/// session is kept for the life of the process.
pub async fn poll_notification(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let participant_id = ParticipantId::from(path.into_inner());
    let message = data.directory.participant(&participant_id).send(PollNotification).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": message })))
}

/// `GET /participants/{participant_id}`
///
/// Starts a session for an unseen id, which then reports a zero score and no match.
pub async fn participant_status(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let participant_id = ParticipantId::from(path.into_inner());
    let status = data.directory.participant(&participant_id).send(GetStatus).await?;
    Ok(HttpResponse::Ok().json(status))
}
