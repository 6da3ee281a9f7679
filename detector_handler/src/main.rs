pub mod handlers;

use axum::Router;
use axum::routing::get;
use emotion_detection::env_keys::{HOST, LAMBDA_RUNTIME_API, PORT};
use emotion_detection::service::CommonService;
use emotion_detection::utilities::{env_or_default, parse_env_or_default};
use handlers::{emotion_detector, index};
use lambda_http::{run, tracing, Error};
use std::env::set_var;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;


pub fn build_router(service: CommonService) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/emotionDetector", get(emotion_detector).post(emotion_detector))
        .with_state(service)
}


#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    tracing::init_default_subscriber();

    let service = CommonService::from_env().await?;
    let app = build_router(service);

    if std::env::var(LAMBDA_RUNTIME_API).is_ok() {
        return run(app).await;
    }

    let host = env_or_default(HOST, DEFAULT_HOST);
    let port: u16 = parse_env_or_default(PORT, DEFAULT_PORT)?;
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(_) => tracing::info!("shutting down"),
        Err(error) => tracing::error!("Error listening for shutdown signal: {}", error),
    }
}
