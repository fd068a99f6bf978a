pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod repositories;
pub(crate) mod schemas;
pub(crate) mod services;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::core::{config::Settings, state::AppState, telemetry};
use crate::services::collaborators::{ObjectStorage, TextGeneration};
use crate::services::storage::StorageService;
use crate::services::text_generation::OpenAiTextGeneration;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let db_pool = db::init_pool(&settings).await?;
    db::run_migrations(&db_pool).await?;

    let storage = StorageService::from_settings(&settings)
        .await?
        .map(|storage| Arc::new(storage) as Arc<dyn ObjectStorage>);
    if storage.is_none() {
        tracing::warn!("S3 credentials are not configured; submissions are disabled");
    }

    let generator = OpenAiTextGeneration::from_settings(&settings)?
        .map(|generator| Arc::new(generator) as Arc<dyn TextGeneration>);
    if generator.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; hints and tutor answers use fallback text");
    }

    let state = AppState::new(settings, db_pool, storage, generator);
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        "LMS API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    Ok(())
}
