/// In-memory download session tracking.
///
/// Sessions are written once at creation and never mutated afterwards;
/// the visible progress animation is fabricated client-side. The map is
/// never evicted, so entries live for the life of the process.
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::models::{DownloadProgress, DownloadRequest, DownloadStatus};

/// Status message stored at session creation.
pub const INITIAL_MESSAGE: &str = "Preparing download...";

/// A tracked download session.
#[derive(Debug, Clone)]
pub struct TrackedSession {
    /// The wire record returned by the status endpoint, verbatim.
    pub progress: DownloadProgress,
    /// The request that opened the session.
    pub request: DownloadRequest,
    pub created_at: DateTime<Utc>,
}

/// Process-lifetime store of download sessions.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, TrackedSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Allocate a session for a validated request and return its id.
    pub async fn start(&self, request: &DownloadRequest) -> String {
        let id = Uuid::new_v4().to_string();
        let session = TrackedSession {
            progress: DownloadProgress {
                id: id.clone(),
                status: DownloadStatus::Preparing,
                progress: 0,
                message: Some(INITIAL_MESSAGE.to_string()),
                download_url: None,
                file_size: None,
            },
            request: request.clone(),
            created_at: Utc::now(),
        };

        let mut sessions = self.sessions.lock().await;
        sessions.insert(id.clone(), session);
        info!(
            "Download session {} created ({} {} from {}), {} tracked",
            id,
            request.format,
            request.quality,
            request.url,
            sessions.len()
        );
        id
    }

    /// Read a session's stored record, or `None` for an unknown id.
    pub async fn status(&self, id: &str) -> Option<DownloadProgress> {
        self.sessions.lock().await.get(id).map(|s| s.progress.clone())
    }

    /// Number of sessions tracked since process start.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{VideoFormat, VideoQuality};

    fn test_request() -> DownloadRequest {
        DownloadRequest {
            url: "https://www.youtube.com/watch?v=abc".into(),
            format: VideoFormat::Mp4,
            quality: VideoQuality::Q1080,
        }
    }

    #[tokio::test]
    async fn test_start_stores_initial_record() {
        let store = SessionStore::new();
        let id = store.start(&test_request()).await;

        let progress = store.status(&id).await.unwrap();
        assert_eq!(progress.id, id);
        assert_eq!(progress.status, DownloadStatus::Preparing);
        assert_eq!(progress.progress, 0);
        assert_eq!(progress.message.as_deref(), Some(INITIAL_MESSAGE));
        assert!(progress.download_url.is_none());
        assert!(progress.file_size.is_none());
    }

    #[tokio::test]
    async fn test_unknown_id_returns_none() {
        let store = SessionStore::new();
        assert!(store.status("no-such-session").await.is_none());
    }

    #[tokio::test]
    async fn test_sessions_get_distinct_ids() {
        let store = SessionStore::new();
        let first = store.start(&test_request()).await;
        let second = store.start(&test_request()).await;
        assert_ne!(first, second);
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_record_is_not_mutated_by_reads() {
        let store = SessionStore::new();
        let id = store.start(&test_request()).await;

        let first = store.status(&id).await.unwrap();
        let second = store.status(&id).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(second.status, DownloadStatus::Preparing);
    }
}
