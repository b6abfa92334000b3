//! HTTP routing configuration.
//!
//! Defines the JSON endpoints for identity issuance, the wait list, guesses and
//! notification polling.

use actix_web::web;
use crate::server::matchmaking::endpoints::{join_queue, leave_queue, queue_status};
use crate::server::participant::endpoints::{
    issue_identity, participant_status, poll_notification, submit_guess,
};
use crate::server::game_session::endpoints::match_snapshot;

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/participants")
            .route(web::post().to(issue_identity))
    )
    .service(
        web::resource("/participants/{participant_id}")
            .route(web::get().to(participant_status))
    )
    .service(
        web::resource("/participants/{participant_id}/guess")
            .route(web::post().to(submit_guess))
    )
    .service(
        web::resource("/participants/{participant_id}/notification")
            .route(web::get().to(poll_notification))
    )
    .service(
        web::resource("/queue")
            .route(web::get().to(queue_status))
    )
    .service(
        web::resource("/queue/{participant_id}")
            .route(web::post().to(join_queue))
            .route(web::delete().to(leave_queue))
    )
    .service(
        web::resource("/matches/{match_id}")
            .route(web::get().to(match_snapshot))
    );
}
