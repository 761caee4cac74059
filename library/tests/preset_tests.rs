//! Integration tests for the platform preset registry.

use autoqc::model::template::AspectRatio;
use autoqc::preset::{self, Platform};

#[test]
fn test_all_presets_resolve_by_their_key() {
    for platform in Platform::ALL {
        assert_eq!(Platform::from_key(platform.key()), Some(platform));
    }
}

#[test]
fn test_key_lookup_is_exact_and_case_sensitive() {
    assert_eq!(Platform::from_key("TikTok"), None);
    assert_eq!(Platform::from_key("tiktok "), None);
    assert_eq!(Platform::from_key(""), None);
    assert_eq!(Platform::from_key("tiktok"), Some(Platform::Tiktok));
}

#[test]
fn test_preset_aspect_ratios() {
    assert_eq!(
        Platform::YoutubeShorts.aspect_ratio(),
        AspectRatio::NineSixteen
    );
    assert_eq!(Platform::InstagramPost.aspect_ratio(), AspectRatio::Square);
    assert_eq!(Platform::Red.aspect_ratio(), AspectRatio::ThreeFour);
    assert_eq!(
        Platform::YoutubeLandscape.aspect_ratio(),
        AspectRatio::SixteenNine
    );
}

#[test]
fn test_resolve_is_deterministic() {
    let (ratio_a, zones_a) = preset::resolve(Some("instagram-reels"));
    let (ratio_b, zones_b) = preset::resolve(Some("instagram-reels"));
    assert_eq!(ratio_a, ratio_b);
    assert_eq!(zones_a, zones_b);
}

#[test]
fn test_resolve_none_and_unknown_yield_default_pair() {
    for key in [None, Some("unknown"), Some("YOUTUBE-SHORTS")] {
        let (ratio, zones) = preset::resolve(key);
        assert_eq!(ratio, AspectRatio::SixteenNine);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, "title-safe");
        assert_eq!(zones[1].id, "action-safe");
        // 90% / 80% の放送用インセット
        assert_eq!(zones[0].width, 90.0);
        assert_eq!(zones[1].width, 80.0);
    }
}

#[test]
fn test_preset_zones_start_visible() {
    for platform in Platform::ALL {
        assert!(!platform.safe_zones().is_empty());
        assert!(platform.safe_zones().iter().all(|z| z.visible));
        assert!(!platform.requirements().is_empty());
    }
}
