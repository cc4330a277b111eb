use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

use super::{print_json, AppState};

/// Upload size accepted by the API.
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Stored portrait location.
#[derive(Debug, Serialize)]
pub struct Uploaded {
    /// Path as returned by the API.
    pub url: String,
    /// The same path resolved against the backend, as saved on hosts.
    pub resolved: String,
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

pub async fn upload(state: &mut AppState, path: &Path) -> Result<Uploaded> {
    let Some(mime_type) = image_mime_type(path) else {
        bail!("{} is not an image file", path.display());
    };
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if bytes.len() > MAX_IMAGE_BYTES {
        bail!("{} is larger than 5MB", path.display());
    }
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    let result = state
        .client
        .upload_host_image(&file_name, mime_type, bytes)
        .await;
    let response = state.checked(result)?;
    let resolved = state
        .client
        .config()
        .resolve_image_url(Some(&response.url))
        .unwrap_or_else(|| response.url.clone());
    info!(file = %file_name, url = %resolved, "image uploaded");

    Ok(Uploaded {
        url: response.url,
        resolved,
    })
}

pub async fn upload_image(state: &mut AppState, path: &Path) -> Result<()> {
    state.require_login()?;
    let uploaded = upload(state, path).await?;
    print_json(&uploaded)
}

pub async fn clear_all(state: &mut AppState, confirmed: bool) -> Result<()> {
    state.require_login()?;
    if !confirmed {
        bail!("this deletes every host, show, episode and advertiser; pass --yes to confirm");
    }
    let result = state.client.clear_all().await;
    let response = state.checked(result)?;
    info!("deleted {}", response.deleted.summary());
    print_json(&response)
}

pub async fn init_defaults(state: &mut AppState, force: bool) -> Result<()> {
    state.require_login()?;
    let result = state.client.initialize_defaults(force).await;
    let response = state.checked(result)?;
    match (&response.counts, &response.message) {
        (Some(counts), _) if response.initialized => info!("created {}", counts.summary()),
        (_, Some(message)) => info!("{message}"),
        _ => {},
    }
    print_json(&response)
}
