//! Client for the photo-gallery REST backend.
//!
//! One function per consumed endpoint. All calls are blocking and share an
//! agent with the configured timeout, so a stuck backend surfaces as a
//! failed fetch instead of a hanging page.

use crate::config::CONFIG;
use crate::records::{Album, AlbumImage, GalleryImage, User};
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

static AGENT: LazyLock<ureq::Agent> = LazyLock::new(|| {
    ureq::AgentBuilder::new().timeout(Duration::from_secs(CONFIG.timeout_secs)).build()
});

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Transport(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("backend sent malformed JSON: {0}")]
    Decode(#[from] std::io::Error),
}

impl From<ureq::Error> for BackendError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => BackendError::Status(code),
            ureq::Error::Transport(t) => BackendError::Transport(t.to_string()),
        }
    }
}

fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, BackendError> {
    let url = format!("{}{endpoint}", CONFIG.backend_url);
    Ok(AGENT.get(&url).call()?.into_json()?)
}

pub fn users() -> Result<Vec<User>, BackendError> {
    get_json("/users")
}

pub fn albums() -> Result<Vec<Album>, BackendError> {
    get_json("/albums")
}

pub fn album_images(album_id: i64) -> Result<Vec<AlbumImage>, BackendError> {
    get_json(&format!("/albums/{album_id}/images"))
}

pub fn images() -> Result<Vec<GalleryImage>, BackendError> {
    get_json("/images")
}

/// Forwards a login attempt. `Ok(false)` means the backend rejected the
/// credentials; errors are reserved for transport failures.
pub fn login(username: &str, password: &str) -> Result<bool, BackendError> {
    let url = format!("{}/login", CONFIG.backend_url);
    let body = serde_json::json!({ "username": username, "password": password });
    match AGENT.post(&url).send_json(body) {
        Ok(_) => Ok(true),
        Err(ureq::Error::Status(_, _)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
