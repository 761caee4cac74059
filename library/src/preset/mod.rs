//! Platform preset registry.
//!
//! Each preset is a fixed pairing of an aspect ratio and a hand-curated set
//! of safe-zone rectangles matching that platform's UI overlay conventions.
//! The registry is pure data: lookups are exact-match and deterministic.

use crate::model::template::{AspectRatio, SafeZone};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    YoutubeShorts,
    Tiktok,
    InstagramReels,
    InstagramPost,
    InstagramStory,
    Red,
    YoutubeLandscape,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::YoutubeShorts,
        Platform::Tiktok,
        Platform::InstagramReels,
        Platform::InstagramPost,
        Platform::InstagramStory,
        Platform::Red,
        Platform::YoutubeLandscape,
    ];

    /// Exact, case-sensitive key lookup. No partial matches.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "youtube-shorts" => Some(Platform::YoutubeShorts),
            "tiktok" => Some(Platform::Tiktok),
            "instagram-reels" => Some(Platform::InstagramReels),
            "instagram-post" => Some(Platform::InstagramPost),
            "instagram-story" => Some(Platform::InstagramStory),
            "red" => Some(Platform::Red),
            "youtube-landscape" => Some(Platform::YoutubeLandscape),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Platform::YoutubeShorts => "youtube-shorts",
            Platform::Tiktok => "tiktok",
            Platform::InstagramReels => "instagram-reels",
            Platform::InstagramPost => "instagram-post",
            Platform::InstagramStory => "instagram-story",
            Platform::Red => "red",
            Platform::YoutubeLandscape => "youtube-landscape",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YoutubeShorts => "YouTube Shorts (9:16)",
            Platform::Tiktok => "TikTok (9:16)",
            Platform::InstagramReels => "Instagram Reels (9:16)",
            Platform::InstagramPost => "Instagram Post (1:1)",
            Platform::InstagramStory => "Instagram Story (9:16)",
            Platform::Red => "小红书 RED (3:4)",
            Platform::YoutubeLandscape => "YouTube Landscape (16:9)",
        }
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            Platform::YoutubeShorts
            | Platform::Tiktok
            | Platform::InstagramReels
            | Platform::InstagramStory => AspectRatio::NineSixteen,
            Platform::InstagramPost => AspectRatio::Square,
            Platform::Red => AspectRatio::ThreeFour,
            Platform::YoutubeLandscape => AspectRatio::SixteenNine,
        }
    }

    /// The platform's safe-zone rectangles, as percentages of the canvas.
    pub fn safe_zones(&self) -> Vec<SafeZone> {
        match self {
            Platform::YoutubeShorts => vec![
                zone("content-safe", "Content Safe", 5.0, 5.0, 90.0, 90.0, "yellow-500/50"),
                zone("center-focus", "Center Focus", 20.0, 20.0, 60.0, 60.0, "blue-500/50"),
                zone("caption-area", "Caption Area", 75.0, 10.0, 80.0, 20.0, "green-500/50"),
            ],
            Platform::Tiktok => vec![
                zone("content-safe", "Content Safe", 5.0, 5.0, 90.0, 90.0, "yellow-500/50"),
                zone("ui-safe", "UI Safe", 5.0, 10.0, 80.0, 80.0, "blue-500/50"),
                zone("caption-area", "Caption Area", 70.0, 10.0, 80.0, 25.0, "green-500/50"),
            ],
            Platform::InstagramReels => vec![
                zone("content-safe", "Content Safe", 5.0, 5.0, 90.0, 75.0, "yellow-500/50"),
                zone("ui-safe", "UI Safe", 10.0, 10.0, 80.0, 65.0, "blue-500/50"),
                zone("bottom-ui", "Bottom UI", 80.0, 0.0, 100.0, 20.0, "red-500/30"),
            ],
            Platform::InstagramPost => vec![
                zone("content-safe", "Content Safe", 5.0, 5.0, 90.0, 90.0, "yellow-500/50"),
                zone("center-focus", "Center Focus", 15.0, 15.0, 70.0, 70.0, "blue-500/50"),
            ],
            Platform::InstagramStory => vec![
                zone("content-safe", "Content Safe", 15.0, 5.0, 90.0, 70.0, "yellow-500/50"),
                zone("top-ui", "Top UI", 0.0, 0.0, 100.0, 15.0, "red-500/30"),
                zone("bottom-ui", "Bottom UI", 85.0, 0.0, 100.0, 15.0, "red-500/30"),
            ],
            Platform::Red => vec![
                zone("content-safe", "Content Safe", 5.0, 5.0, 90.0, 85.0, "yellow-500/50"),
                zone("caption-area", "Caption Area", 75.0, 10.0, 80.0, 15.0, "green-500/50"),
                zone("bottom-ui", "Bottom UI", 90.0, 0.0, 100.0, 10.0, "red-500/30"),
            ],
            Platform::YoutubeLandscape => vec![
                zone("title-safe", "Title Safe (90%)", 5.0, 5.0, 90.0, 90.0, "yellow-500/50"),
                zone("action-safe", "Action Safe (80%)", 10.0, 10.0, 80.0, 80.0, "blue-500/50"),
                zone("caption-area", "Caption Area", 80.0, 60.0, 35.0, 15.0, "green-500/50"),
            ],
        }
    }

    /// Free-text requirement lines shown for the platform.
    pub fn requirements(&self) -> &'static [&'static str] {
        match self {
            Platform::YoutubeShorts => &[
                "Recommended resolution: 1080x1920",
                "Maximum duration: 60 seconds",
                "Keep important content centered",
            ],
            Platform::Tiktok => &[
                "Recommended resolution: 1080x1920",
                "Maximum duration: 3 minutes",
                "Keep text away from edges",
            ],
            Platform::InstagramReels => &[
                "Recommended resolution: 1080x1920",
                "Maximum duration: 90 seconds",
                "Avoid text in bottom 250px (UI overlay)",
            ],
            Platform::InstagramPost => &[
                "Recommended resolution: 1080x1080",
                "Keep important content in center 80%",
            ],
            Platform::InstagramStory => &[
                "Recommended resolution: 1080x1920",
                "Avoid top and bottom 250px (UI overlays)",
            ],
            Platform::Red => &[
                "Recommended resolution: 1080x1440",
                "Keep text away from bottom edge",
            ],
            Platform::YoutubeLandscape => &[
                "Recommended resolution: 1920x1080",
                "Keep important content in title-safe area",
                "Avoid bottom right (for captions)",
            ],
        }
    }
}

/// Zone set used when no platform preset is selected: classic broadcast
/// title-safe (90%) and action-safe (80%) insets.
pub fn default_zones() -> Vec<SafeZone> {
    vec![
        zone("title-safe", "Title Safe (90%)", 5.0, 5.0, 90.0, 90.0, "yellow-500/50"),
        zone("action-safe", "Action Safe (80%)", 10.0, 10.0, 80.0, 80.0, "blue-500/50"),
    ]
}

/// Resolve a preset key to its `(aspect ratio, safe zones)` pair. `None` or
/// an unknown key yields the documented default pair.
pub fn resolve(key: Option<&str>) -> (AspectRatio, Vec<SafeZone>) {
    match key.and_then(Platform::from_key) {
        Some(platform) => (platform.aspect_ratio(), platform.safe_zones()),
        None => (AspectRatio::SixteenNine, default_zones()),
    }
}

fn zone(id: &str, name: &str, top: f64, left: f64, width: f64, height: f64, color: &str) -> SafeZone {
    SafeZone::new(id, name, top, left, width, height, color)
}
