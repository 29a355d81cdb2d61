use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::upstream::{ModelBackend, UpstreamError};

/// Replays a captured model reply from disk instead of calling a vendor.
///
/// The prompt is ignored. Used to push a saved reply through the same parse
/// and fallback path as a live call.
pub struct ReplayBackend {
    path: PathBuf,
    label: String,
}

impl ReplayBackend {
    pub fn new(path: PathBuf) -> Self {
        let label = format!("replay:{}", path.display());
        Self { path, label }
    }
}

#[async_trait]
impl ModelBackend for ReplayBackend {
    fn label(&self) -> &str {
        &self.label
    }

    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, UpstreamError> {
        debug!(
            "Replaying model reply from {} (prompt: {} chars)",
            self.path.display(),
            prompt.chars().count()
        );
        let bytes = tokio::fs::read(&self.path).await?;
        String::from_utf8(bytes).map_err(|e| {
            UpstreamError::Backend(format!(
                "capture {} is not UTF-8: {e}",
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_replay_returns_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"lead_score\": 10}}").unwrap();

        let backend = ReplayBackend::new(file.path().to_path_buf());
        let reply = backend.complete("ignored", "ignored").await.unwrap();

        assert_eq!(reply, "{\"lead_score\": 10}");
        assert!(backend.label().starts_with("replay:"));
    }

    #[tokio::test]
    async fn test_replay_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ReplayBackend::new(dir.path().join("missing.json"));

        let err = backend.complete("p", "s").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Io(_)));
    }

    #[tokio::test]
    async fn test_replay_non_utf8_capture_is_backend_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x7b]).unwrap();

        let backend = ReplayBackend::new(file.path().to_path_buf());
        let err = backend.complete("p", "s").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Backend(ref msg) if msg.contains("not UTF-8")));
    }
}
