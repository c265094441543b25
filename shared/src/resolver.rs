/// Resolution of pasted video URLs into catalog metadata records.
///
/// Validation runs before platform detection; the lookup delay emulates a
/// remote metadata fetch and is injectable so tests can run with zero
/// latency.
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::catalog;
use crate::errors::{ResolveError, ResolveResult};
use crate::models::{ValidationIssue, VideoInfo};
use crate::platform::Platform;

/// Simulated metadata lookup latency.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(1200);

/// Resolves URLs to sample metadata records.
pub struct Resolver {
    lookup_delay: Duration,
}

impl Resolver {
    pub fn new(lookup_delay: Duration) -> Self {
        Self { lookup_delay }
    }

    /// Resolve a URL into its platform's catalog record.
    ///
    /// Every call mints a fresh identifier, so resolving the same URL
    /// twice returns two ids over otherwise identical fields.
    pub async fn resolve(&self, url: &str) -> ResolveResult<VideoInfo> {
        if Url::parse(url).is_err() {
            return Err(ResolveError::InvalidUrl(vec![ValidationIssue::new(
                "url",
                "Please enter a valid URL",
            )]));
        }

        let platform = Platform::detect(url).ok_or(ResolveError::UnsupportedPlatform)?;
        debug!("Detected platform {} for {}", platform, url);

        tokio::time::sleep(self.lookup_delay).await;

        let sample = catalog::sample_for(platform).ok_or(ResolveError::RecordMissing)?;
        Ok(sample.mint())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_DELAY)
    }
}
