/// Platform classification for pasted video URLs.
///
/// Classification is a case-insensitive substring match against a fixed,
/// ordered rule table; the first matching rule wins. Substring semantics
/// are part of the contract: any URL whose text contains a rule fragment
/// matches, regardless of where in the URL it appears.

/// A video platform the service recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Youtube,
    Vimeo,
    Dailymotion,
    Facebook,
    Twitter,
}

/// Ordered detection rules; first match wins.
const DETECTION_RULES: [(&[&str], Platform); 5] = [
    (&["youtube.com", "youtu.be"], Platform::Youtube),
    (&["vimeo.com"], Platform::Vimeo),
    (&["dailymotion.com", "dai.ly"], Platform::Dailymotion),
    (&["facebook.com", "fb.watch"], Platform::Facebook),
    (&["twitter.com", "x.com"], Platform::Twitter),
];

impl Platform {
    /// All recognized platforms, in detection order.
    pub const ALL: [Platform; 5] = [
        Platform::Youtube,
        Platform::Vimeo,
        Platform::Dailymotion,
        Platform::Facebook,
        Platform::Twitter,
    ];

    /// Classify a URL, or `None` if no rule matches.
    pub fn detect(url: &str) -> Option<Platform> {
        let lowered = url.to_lowercase();
        DETECTION_RULES
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|f| lowered.contains(f)))
            .map(|(_, platform)| *platform)
    }

    /// Catalog key for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Vimeo => "vimeo",
            Platform::Dailymotion => "dailymotion",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
