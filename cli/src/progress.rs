/// Client-side simulated download progress.
///
/// The server never advances a session past its initial state; the
/// six-stage script below is what the user actually watches. Each stage
/// is preceded by a fixed delay, and the walk never reads or writes
/// server-side session state.
use std::time::Duration;
use tokio::time::sleep;

use videograb_shared::models::{DownloadProgress, DownloadStatus};

/// Delay before each stage of the script.
pub const STAGE_DELAY: Duration = Duration::from_millis(800);

/// One step of the scripted download animation.
#[derive(Debug, Clone, Copy)]
pub struct ProgressStage {
    pub status: DownloadStatus,
    pub progress: u8,
    pub message: &'static str,
    pub download_url: Option<&'static str>,
    pub file_size: Option<&'static str>,
}

impl ProgressStage {
    /// Materialize this stage as a wire record for the given session.
    pub fn to_progress(self, download_id: &str) -> DownloadProgress {
        DownloadProgress {
            id: download_id.to_string(),
            status: self.status,
            progress: self.progress,
            message: Some(self.message.to_string()),
            download_url: self.download_url.map(str::to_string),
            file_size: self.file_size.map(str::to_string),
        }
    }
}

/// The fixed six-stage script.
pub const STAGES: [ProgressStage; 6] = [
    ProgressStage {
        status: DownloadStatus::Preparing,
        progress: 10,
        message: "Preparing download...",
        download_url: None,
        file_size: None,
    },
    ProgressStage {
        status: DownloadStatus::Downloading,
        progress: 25,
        message: "Downloading...",
        download_url: None,
        file_size: None,
    },
    ProgressStage {
        status: DownloadStatus::Downloading,
        progress: 50,
        message: "Downloading...",
        download_url: None,
        file_size: None,
    },
    ProgressStage {
        status: DownloadStatus::Downloading,
        progress: 75,
        message: "Downloading...",
        download_url: None,
        file_size: None,
    },
    ProgressStage {
        status: DownloadStatus::Processing,
        progress: 90,
        message: "Processing video...",
        download_url: None,
        file_size: None,
    },
    ProgressStage {
        status: DownloadStatus::Complete,
        progress: 100,
        message: "Download complete!",
        download_url: Some("#"),
        file_size: Some("45.2 MB"),
    },
];

/// Walk the script with the standard delay.
pub async fn run(download_id: &str, on_update: impl FnMut(&DownloadProgress)) {
    run_with_delay(download_id, STAGE_DELAY, on_update).await;
}

/// Walk the script, sleeping `delay` before each stage.
pub async fn run_with_delay(
    download_id: &str,
    delay: Duration,
    mut on_update: impl FnMut(&DownloadProgress),
) {
    for stage in STAGES {
        sleep(delay).await;
        on_update(&stage.to_progress(download_id));
    }
}
