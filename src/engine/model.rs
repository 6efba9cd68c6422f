use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// An unpacked recognition model on local disk.
#[derive(Debug, Clone)]
pub struct UnpackedModel {
    /// Directory holding the unpacked model files
    pub path: PathBuf,
    /// Sample rate the model expects
    pub sample_rate: u32,
}

/// Handles unpacking a packaged model into a writable data directory.
///
/// Recognizers cannot read models straight out of the application package, so
/// the model ships as an asset directory and is copied out once. Unpacking is
/// asynchronous; callers attach an engine only after it reports success. A
/// failed unpack leaves the service without an engine until restart.
pub struct ModelStorage;

impl ModelStorage {
    /// Unpack the model from `asset_dir` into `data_dir`, skipping the copy if
    /// an unpacked model is already present.
    pub async fn unpack(
        asset_dir: &Path,
        data_dir: &Path,
        sample_rate: u32,
    ) -> Result<UnpackedModel> {
        let model_name = asset_dir
            .file_name()
            .context("model asset path has no directory name")?;
        let target = data_dir.join(model_name);

        if tokio::fs::try_exists(&target).await.unwrap_or(false) {
            info!("Model already unpacked at {:?}", target);
            return Ok(UnpackedModel {
                path: target,
                sample_rate,
            });
        }

        if !tokio::fs::try_exists(asset_dir).await.unwrap_or(false) {
            anyhow::bail!("model asset directory not found: {:?}", asset_dir);
        }

        info!("Unpacking model {:?} -> {:?}", asset_dir, target);

        copy_dir(asset_dir.to_path_buf(), target.clone())
            .await
            .context("Failed to unpack model assets")?;

        info!("Model unpacked successfully");

        Ok(UnpackedModel {
            path: target,
            sample_rate,
        })
    }
}

/// Recursively copy a directory tree.
async fn copy_dir(src: PathBuf, dst: PathBuf) -> Result<()> {
    tokio::fs::create_dir_all(&dst)
        .await
        .with_context(|| format!("Failed to create {:?}", dst))?;

    let mut pending = vec![(src, dst)];

    while let Some((src, dst)) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&src)
            .await
            .with_context(|| format!("Failed to read {:?}", src))?;

        while let Some(entry) = entries.next_entry().await? {
            let from = entry.path();
            let to = dst.join(entry.file_name());
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                tokio::fs::create_dir_all(&to).await?;
                pending.push((from, to));
            } else {
                tokio::fs::copy(&from, &to)
                    .await
                    .with_context(|| format!("Failed to copy {:?}", from))?;
            }
        }
    }

    Ok(())
}
