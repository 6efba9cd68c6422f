// Tests for the engine abstractions: scripted playback, factory behavior,
// and model unpacking.

use std::path::Path;

use easyspeech::{EngineFactory, EngineSource, ModelStorage, RecognitionEvent, SpeechEngine};

#[tokio::test]
async fn test_scripted_engine_replays_script_in_order() {
    let script = vec![
        RecognitionEvent::Partial("hel".into()),
        RecognitionEvent::Partial("hello".into()),
        RecognitionEvent::Final("hello world".into()),
    ];
    let mut engine = EngineFactory::create(EngineSource::Scripted(script.clone())).unwrap();

    let mut rx = engine.begin().await.unwrap();

    let mut received = Vec::new();
    while let Some(event) = rx.recv().await {
        received.push(event);
    }

    assert_eq!(received, script);
}

#[tokio::test]
async fn test_scripted_engine_end_closes_channel() {
    // A long script that would keep emitting; end() cuts it off.
    let script = vec![RecognitionEvent::Partial("never ends".into()); 1000];
    let mut engine = EngineFactory::create(EngineSource::Scripted(script)).unwrap();

    let mut rx = engine.begin().await.unwrap();
    let first = rx.recv().await;
    assert!(first.is_some());

    engine.end().await.unwrap();
    assert!(!engine.is_listening());

    // The channel drains whatever was buffered, then closes.
    while rx.recv().await.is_some() {}
}

#[tokio::test]
async fn test_scripted_engine_stops_listening_after_script_drains() {
    let script = vec![RecognitionEvent::Final("done".into())];
    let mut engine = EngineFactory::create(EngineSource::Scripted(script)).unwrap();

    let mut rx = engine.begin().await.unwrap();
    assert!(engine.is_listening());

    // Drain the script to completion without calling end().
    while rx.recv().await.is_some() {}

    assert!(!engine.is_listening());
}

#[test]
fn test_terminal_event_classification() {
    assert!(!RecognitionEvent::Partial("x".into()).is_terminal());
    assert!(RecognitionEvent::Final("x".into()).is_terminal());
    assert!(RecognitionEvent::Error("x".into()).is_terminal());
    assert!(RecognitionEvent::Timeout.is_terminal());
}

#[test]
fn test_factory_rejects_model_source_without_binding() {
    let result = EngineFactory::create(EngineSource::Model("assets/model".into()));
    assert!(result.is_err());
}

#[tokio::test]
async fn test_model_unpack_copies_asset_tree() {
    let dir = tempfile::tempdir().unwrap();
    let asset = dir.path().join("vosk-model-small");
    std::fs::create_dir_all(asset.join("graph")).unwrap();
    std::fs::write(asset.join("model.conf"), "sample-rate 16000").unwrap();
    std::fs::write(asset.join("graph").join("hclg.fst"), b"binary").unwrap();

    let data = dir.path().join("data");
    let model = ModelStorage::unpack(&asset, &data, 16000).await.unwrap();

    assert_eq!(model.sample_rate, 16000);
    assert_eq!(model.path, data.join("vosk-model-small"));
    assert!(model.path.join("model.conf").exists());
    assert!(model.path.join("graph").join("hclg.fst").exists());
}

#[tokio::test]
async fn test_model_unpack_skips_when_already_present() {
    let dir = tempfile::tempdir().unwrap();
    let asset = dir.path().join("model");
    std::fs::create_dir_all(&asset).unwrap();
    std::fs::write(asset.join("model.conf"), "v1").unwrap();

    let data = dir.path().join("data");
    ModelStorage::unpack(&asset, &data, 16000).await.unwrap();

    // Change the asset; a second unpack must not overwrite the unpacked copy.
    std::fs::write(asset.join("model.conf"), "v2").unwrap();
    let model = ModelStorage::unpack(&asset, &data, 16000).await.unwrap();

    let unpacked = std::fs::read_to_string(model.path.join("model.conf")).unwrap();
    assert_eq!(unpacked, "v1");
}

#[tokio::test]
async fn test_model_unpack_fails_for_missing_assets() {
    let dir = tempfile::tempdir().unwrap();
    let result = ModelStorage::unpack(
        Path::new("/definitely/not/here"),
        &dir.path().join("data"),
        16000,
    )
    .await;

    assert!(result.is_err());
}
