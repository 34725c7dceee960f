mod handlers;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{cities, commands, payments, profiles, quotes, rides};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/commands", post(commands::parse))
        .route("/quotes", post(quotes::create))
        .route("/cities", get(cities::list))
        .route("/rides", post(rides::book).get(rides::list))
        .route("/rides/upcoming", get(rides::upcoming))
        .route("/profile", get(profiles::find))
        .route("/payments/intents", post(payments::create_intent))
        .layer(Extension(api));

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
