/// Canonical sample records served for each recognized platform.
///
/// Every resolution returns one of these templates; the record contents
/// are fixed, only the identifier is minted fresh per call.
use once_cell::sync::Lazy;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{VideoFormat, VideoInfo, VideoQuality};
use crate::platform::Platform;

/// An identifier-less catalog template for one platform.
#[derive(Debug, Clone)]
pub struct SampleVideo {
    pub title: &'static str,
    pub thumbnail: &'static str,
    pub duration: &'static str,
    pub channel: &'static str,
    pub platform: &'static str,
    pub formats: &'static [VideoFormat],
    pub qualities: &'static [VideoQuality],
}

impl SampleVideo {
    /// Build a wire record from this template with a freshly generated
    /// identifier. Repeated calls yield distinct ids by design.
    pub fn mint(&self) -> VideoInfo {
        VideoInfo {
            id: Uuid::new_v4().to_string(),
            title: self.title.to_string(),
            thumbnail: self.thumbnail.to_string(),
            duration: self.duration.to_string(),
            channel: self.channel.to_string(),
            platform: self.platform.to_string(),
            available_formats: self.formats.to_vec(),
            available_qualities: self.qualities.to_vec(),
        }
    }
}

static SAMPLE_VIDEOS: Lazy<HashMap<Platform, SampleVideo>> = Lazy::new(|| {
    HashMap::from([
        (
            Platform::Youtube,
            SampleVideo {
                title: "Amazing Nature Documentary - 4K Ultra HD",
                thumbnail: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=640&h=360&fit=crop",
                duration: "12:45",
                channel: "Nature Channel",
                platform: "YouTube",
                formats: &[VideoFormat::Mp4, VideoFormat::Webm, VideoFormat::Mp3],
                qualities: &[
                    VideoQuality::Q1080,
                    VideoQuality::Q720,
                    VideoQuality::Q480,
                    VideoQuality::Q360,
                ],
            },
        ),
        (
            Platform::Vimeo,
            SampleVideo {
                title: "Cinematic Travel Vlog - Europe 2024",
                thumbnail: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=640&h=360&fit=crop",
                duration: "8:32",
                channel: "TravelWithMe",
                platform: "Vimeo",
                formats: &[VideoFormat::Mp4, VideoFormat::Webm, VideoFormat::Mp3],
                qualities: &[
                    VideoQuality::Q1080,
                    VideoQuality::Q720,
                    VideoQuality::Q480,
                    VideoQuality::Q360,
                ],
            },
        ),
        (
            Platform::Dailymotion,
            SampleVideo {
                title: "How to Cook Perfect Pasta - Chef's Guide",
                thumbnail: "https://images.unsplash.com/photo-1551183053-bf91a1d81141?w=640&h=360&fit=crop",
                duration: "15:20",
                channel: "CookingMaster",
                platform: "Dailymotion",
                formats: &[VideoFormat::Mp4, VideoFormat::Webm, VideoFormat::Mp3],
                qualities: &[VideoQuality::Q1080, VideoQuality::Q720, VideoQuality::Q480],
            },
        ),
        (
            Platform::Facebook,
            SampleVideo {
                title: "Tech Review: Latest Smartphone Comparison",
                thumbnail: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=640&h=360&fit=crop",
                duration: "22:15",
                channel: "TechReviewer",
                platform: "Facebook",
                formats: &[VideoFormat::Mp4, VideoFormat::Mp3],
                qualities: &[VideoQuality::Q720, VideoQuality::Q480, VideoQuality::Q360],
            },
        ),
        (
            Platform::Twitter,
            SampleVideo {
                title: "Breaking News: Space Launch Success",
                thumbnail: "https://images.unsplash.com/photo-1516849841032-87cbac4d88f7?w=640&h=360&fit=crop",
                duration: "3:45",
                channel: "SpaceNews",
                platform: "Twitter",
                formats: &[VideoFormat::Mp4, VideoFormat::Mp3],
                qualities: &[VideoQuality::Q720, VideoQuality::Q480],
            },
        ),
    ])
});

/// Look up the catalog template for a platform.
pub fn sample_for(platform: Platform) -> Option<&'static SampleVideo> {
    SAMPLE_VIDEOS.get(&platform)
}
