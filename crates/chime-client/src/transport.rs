//! Transport seam between the repository and whatever fetches response
//! bodies.
//!
//! The production HTTP client lives outside this workspace and implements
//! [`ApiTransport`]; [`ReplayTransport`] serves recorded responses from disk
//! for the replay tool and tests.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ClientError, Result};

#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Fetch the raw response body for `path` (relative, may carry a query
    /// string).
    async fn get(&self, path: &str) -> Result<String>;
}

/// Serves recorded responses from a directory.
///
/// `users/42?x=1` is answered from `<root>/users/42.json`; the query string
/// is ignored.
#[derive(Debug, Clone)]
pub struct ReplayTransport {
    root: PathBuf,
}

impl ReplayTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn file_for(&self, path: &str) -> Result<PathBuf> {
        let path = path.split('?').next().unwrap_or_default();
        let relative = path.trim_start_matches('/');

        let escapes = Path::new(relative)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if relative.is_empty() || escapes {
            return Err(ClientError::Transport(format!("invalid replay path: {path}")));
        }

        Ok(self.root.join(format!("{relative}.json")))
    }
}

#[async_trait]
impl ApiTransport for ReplayTransport {
    async fn get(&self, path: &str) -> Result<String> {
        let file = self.file_for(path)?;
        debug!(path, file = %file.display(), "Replaying recorded response");

        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ClientError::Transport(
                format!("no recorded response for {path}"),
            )),
            Err(e) => Err(ClientError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_recorded_body() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("users")).unwrap();
        std::fs::write(dir.path().join("users/42.json"), r#"{"data": {"id": "42"}}"#).unwrap();

        let transport = ReplayTransport::new(dir.path());
        let body = transport.get("users/42").await.unwrap();
        assert!(body.contains("\"42\""));
    }

    #[tokio::test]
    async fn test_query_string_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("calls.json"), "{}").unwrap();

        let transport = ReplayTransport::new(dir.path());
        assert_eq!(transport.get("/calls?per_page=20").await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_missing_recording_is_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let transport = ReplayTransport::new(dir.path());

        let err = transport.get("chat/conversations").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let transport = ReplayTransport::new(dir.path().join("fixtures"));

        let err = transport.get("../secrets").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(transport.get("").await.is_err());
    }
}
