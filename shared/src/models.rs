/// Wire models shared by the VideoGrab API server and CLI client.
///
/// Field names and enum spellings are pinned to the wire contract; request
/// types validate raw JSON bodies by hand so endpoints can report per-field
/// issue lists instead of an opaque deserialization failure.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Container format offered for download.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Webm,
    Mp3,
}

impl VideoFormat {
    /// All formats, in wire order.
    pub const ALL: [VideoFormat; 3] = [VideoFormat::Mp4, VideoFormat::Webm, VideoFormat::Mp3];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Webm => "webm",
            VideoFormat::Mp3 => "mp3",
        }
    }

    /// Parse a wire spelling; `None` for anything outside the fixed set.
    pub fn parse(value: &str) -> Option<VideoFormat> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

impl std::fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rendition quality offered for download.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoQuality {
    #[serde(rename = "1080p")]
    Q1080,
    #[serde(rename = "720p")]
    Q720,
    #[serde(rename = "480p")]
    Q480,
    #[serde(rename = "360p")]
    Q360,
}

impl VideoQuality {
    /// All qualities, in wire order (highest first).
    pub const ALL: [VideoQuality; 4] = [
        VideoQuality::Q1080,
        VideoQuality::Q720,
        VideoQuality::Q480,
        VideoQuality::Q360,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoQuality::Q1080 => "1080p",
            VideoQuality::Q720 => "720p",
            VideoQuality::Q480 => "480p",
            VideoQuality::Q360 => "360p",
        }
    }

    /// Parse a wire spelling; `None` for anything outside the fixed set.
    pub fn parse(value: &str) -> Option<VideoQuality> {
        Self::ALL.into_iter().find(|q| q.as_str() == value)
    }
}

impl std::fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Download session status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Preparing,
    Downloading,
    Processing,
    Complete,
    Error,
}

impl DownloadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadStatus::Preparing => "preparing",
            DownloadStatus::Downloading => "downloading",
            DownloadStatus::Processing => "processing",
            DownloadStatus::Complete => "complete",
            DownloadStatus::Error => "error",
        }
    }

    /// Whether no further status change can follow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DownloadStatus::Complete | DownloadStatus::Error)
    }
}

impl std::fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata record returned for a resolved video URL.
///
/// The identifier is re-minted on every resolution call; all other fields
/// come verbatim from the platform's catalog record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub duration: String,
    pub channel: String,
    pub platform: String,
    pub available_formats: Vec<VideoFormat>,
    pub available_qualities: Vec<VideoQuality>,
}

/// A single field problem reported in a 400 response's `details` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn expected_one_of(options: &[&str]) -> String {
    format!("Expected one of: {}", options.join(", "))
}

/// Body of `POST /api/parse-url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseUrlRequest {
    pub url: String,
}

impl ParseUrlRequest {
    /// Shape-check a raw JSON body. Syntactic URL validation is the
    /// resolver's job and happens afterwards.
    pub fn from_json(value: &Value) -> Result<Self, Vec<ValidationIssue>> {
        match value.get("url") {
            None => Err(vec![ValidationIssue::new("url", "Required")]),
            Some(raw) => match raw.as_str() {
                Some(url) => Ok(Self {
                    url: url.to_string(),
                }),
                None => Err(vec![ValidationIssue::new("url", "Expected a string")]),
            },
        }
    }
}

/// Body of `POST /api/download`.
///
/// Format and quality are validated against the fixed enums only; whether
/// the target video actually advertises them is not checked server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub format: VideoFormat,
    pub quality: VideoQuality,
}

impl DownloadRequest {
    /// Validate a raw JSON body, collecting every field issue instead of
    /// stopping at the first.
    pub fn from_json(value: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let url = match value.get("url").and_then(Value::as_str) {
            Some(raw) if Url::parse(raw).is_ok() => Some(raw.to_string()),
            Some(_) => {
                issues.push(ValidationIssue::new("url", "Invalid url"));
                None
            }
            None => {
                issues.push(ValidationIssue::new("url", "Expected a string"));
                None
            }
        };

        let format = match value.get("format").and_then(Value::as_str) {
            Some(raw) => {
                let parsed = VideoFormat::parse(raw);
                if parsed.is_none() {
                    issues.push(ValidationIssue::new(
                        "format",
                        expected_one_of(&VideoFormat::ALL.map(|f| f.as_str())),
                    ));
                }
                parsed
            }
            None => {
                issues.push(ValidationIssue::new("format", "Expected a string"));
                None
            }
        };

        let quality = match value.get("quality").and_then(Value::as_str) {
            Some(raw) => {
                let parsed = VideoQuality::parse(raw);
                if parsed.is_none() {
                    issues.push(ValidationIssue::new(
                        "quality",
                        expected_one_of(&VideoQuality::ALL.map(|q| q.as_str())),
                    ));
                }
                parsed
            }
            None => {
                issues.push(ValidationIssue::new("quality", "Expected a string"));
                None
            }
        };

        match (url, format, quality) {
            (Some(url), Some(format), Some(quality)) if issues.is_empty() => Ok(Self {
                url,
                format,
                quality,
            }),
            _ => Err(issues),
        }
    }
}

/// Status of a download session as exposed on the wire.
///
/// Absent optionals are omitted from the JSON entirely, never serialized
/// as null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DownloadProgress {
    pub id: String,
    pub status: DownloadStatus,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}

/// Response body for a newly started download session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartDownloadResponse {
    pub download_id: String,
}
