use std::path::Path;

use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use student_dashboard::artifacts::ModelArtifacts;
use student_dashboard::server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let model_dir = std::env::var("MODEL_DIR").unwrap_or_else(|_| "model".to_string());
    // Artifact problems are fatal at startup, never handled per-request.
    let artifacts = match ModelArtifacts::load(Path::new(&model_dir)) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!("failed to load model artifacts from {model_dir}/: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "loaded model artifacts from {model_dir}/ ({} features)",
        artifacts.n_features()
    );

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    info!("starting dashboard on http://127.0.0.1:{port}");

    let artifacts = web::Data::new(artifacts);
    HttpServer::new(move || {
        App::new()
            .app_data(artifacts.clone())
            .configure(server::routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
