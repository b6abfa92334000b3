/// Centralized helpers for HTTP error responses.
///
/// Every error body has the same envelope: a stable code, a human-readable message and an
/// optional context (e.g. the participant or match id involved).
use actix::MailboxError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::server::matchmaking::types::MatchId;

/// Failures of the service itself. Rejected game actions are not errors; they travel as
/// outcome kinds in successful responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("session actor is unavailable: {0}")]
    Mailbox(#[from] MailboxError),
    #[error("match not found")]
    MatchNotFound(MatchId),
}

impl ApiError {
    /// Unique error code exposed to clients.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Mailbox(_) => "ACTOR_UNAVAILABLE",
            ApiError::MatchNotFound(_) => "MATCH_NOT_FOUND",
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            ApiError::Mailbox(_) => None,
            ApiError::MatchNotFound(match_id) => Some(match_id.as_str()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Mailbox(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::MatchNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        http_error_response(self.code(), &self.to_string(), self.context(), self.status_code())
    }
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_match_not_found_renders_envelope() {
        let err = ApiError::MatchNotFound(MatchId::from("m-42"));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "MATCH_NOT_FOUND");
        assert_eq!(value["error"]["context"], "m-42");
    }

    #[test]
    fn test_mailbox_error_maps_to_unavailable() {
        let err = ApiError::from(MailboxError::Closed);
        assert_eq!(err.code(), "ACTOR_UNAVAILABLE");
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
