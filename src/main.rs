use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use easyspeech::config::EngineConfig;
use easyspeech::{
    create_router, AppState, Config, EngineFactory, EngineSource, IdentityGate, MemoryBackend,
    ModelStorage, NoteStore, RecognitionEvent, SessionController, SpeechEngine, StaticIdentity,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::load("config/easyspeech")?;
    let engine_cfg = cfg.engine;

    info!("{} v0.1.0", cfg.service.name);

    let identity: Arc<dyn IdentityGate> = if cfg.identity.user_id.is_empty() {
        Arc::new(StaticIdentity::anonymous())
    } else {
        Arc::new(StaticIdentity::signed_in(cfg.identity.user_id.clone()))
    };

    let store = Arc::new(NoteStore::new(Arc::new(MemoryBackend::new()), identity));
    let controller = Arc::new(SessionController::new());

    // Unpack the model and attach the engine in the background. Session
    // starts report EngineNotReady until it succeeds; on failure the service
    // keeps running without recognition until restarted.
    {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            match build_engine(&engine_cfg).await {
                Ok(engine) => controller.attach_engine(engine).await,
                Err(e) => error!("Speech engine unavailable: {:#}", e),
            }
        });
    }

    let state = AppState::new(controller, store);
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_engine(cfg: &EngineConfig) -> Result<Box<dyn SpeechEngine>> {
    if cfg.scripted {
        info!("Using scripted speech engine");
        return EngineFactory::create(EngineSource::Scripted(demo_script()));
    }

    let model = ModelStorage::unpack(
        Path::new(&cfg.model_asset_path),
        Path::new(&cfg.model_data_path),
        cfg.sample_rate,
    )
    .await
    .context("Failed to unpack the model")?;

    info!("Model ready at {:?}", model.path);

    EngineFactory::create(EngineSource::Model(model.path))
}

fn demo_script() -> Vec<RecognitionEvent> {
    vec![
        RecognitionEvent::Partial("hello".to_string()),
        RecognitionEvent::Partial("hello world".to_string()),
        RecognitionEvent::Final("hello world".to_string()),
    ]
}
