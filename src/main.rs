//! Main entry point for the backend server.
//!
//! Initializes the actor system (session directory and queue coordinator) and launches
//! the HTTP server exposing the guessing-game endpoints.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::directory::Directory;
use server::matchmaking::server::QueueCoordinator;

pub mod config;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from RUST_LOG (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Directory of participant and match session actors, shared by everyone.
    let directory = Directory::new();

    // Start the QueueCoordinator actor (wait list and pairing).
    let coordinator = match config::game::seed_from_env() {
        Some(seed) => {
            info!("[Server] Using seeded targets (seed={})", seed);
            QueueCoordinator::seeded(directory.clone(), seed)
        }
        None => QueueCoordinator::new(directory.clone()),
    }
    .start();

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(coordinator, directory));

    let (host, port) = config::server::bind_address();
    info!("[Server] Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((host, port))?
    .run()
    .await
}
