use actix_web::{web, HttpResponse};

use super::messages::GetSnapshot;
use crate::server::error::ApiError;
use crate::server::matchmaking::types::MatchId;
use crate::server::state::AppState;

/// `GET /matches/{match_id}`: members, who has guessed this round, rounds played.
pub async fn match_snapshot(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let match_id = MatchId::from(path.as_str());
    let session = data
        .directory
        .match_session(&match_id)
        .ok_or_else(|| ApiError::MatchNotFound(match_id.clone()))?;
    let snapshot = session.send(GetSnapshot).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}
