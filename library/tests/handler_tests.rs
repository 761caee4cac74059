//! Integration tests for the editing workflow.
//!
//! Verifies the full guideline drag gesture: press on a ruler → guideline
//! appears → pointer moves only that guideline → release freezes its label.
//! Also covers zone visibility, presets, reset, and the two-step import.

use autoqc::editor::TemplateService;
use autoqc::error::QcError;
use autoqc::model::template::{AspectRatio, GuidelineAxis};
use autoqc::model::CanvasSize;

fn canvas() -> CanvasSize {
    // 16:9 の編集キャンバス
    CanvasSize::new(800, 450)
}

#[test]
fn test_press_on_top_ruler_creates_horizontal_guideline() {
    let service = TemplateService::new();

    let id = service.begin_drag(400.0, 10.0, canvas()).unwrap();
    assert!(id.is_some());

    let template = service.snapshot().unwrap();
    assert_eq!(template.guidelines.len(), 1);
    let guideline = &template.guidelines[0];
    assert_eq!(guideline.axis, GuidelineAxis::Horizontal);
    // 仮位置はルーラー余白のすぐ内側
    assert_eq!(guideline.position, 20.0);
    assert_eq!(guideline.label, "4%");
    assert!(guideline.id.starts_with("h-"));
}

#[test]
fn test_press_on_left_ruler_creates_vertical_guideline() {
    let service = TemplateService::new();

    let id = service.begin_drag(10.0, 200.0, canvas()).unwrap();
    assert!(id.is_some());

    let template = service.snapshot().unwrap();
    let guideline = &template.guidelines[0];
    assert_eq!(guideline.axis, GuidelineAxis::Vertical);
    assert!(guideline.id.starts_with("v-"));
}

#[test]
fn test_press_inside_canvas_is_a_no_op() {
    let service = TemplateService::new();

    let id = service.begin_drag(400.0, 200.0, canvas()).unwrap();
    assert!(id.is_none());
    assert!(service.snapshot().unwrap().guidelines.is_empty());
}

#[test]
fn test_drag_moves_only_the_active_guideline() {
    let service = TemplateService::new();

    // 1本目を確定
    service.begin_drag(400.0, 5.0, canvas()).unwrap().unwrap();
    service.update_drag(400.0, 225.0, canvas()).unwrap();
    let first_id = service.end_drag().unwrap().unwrap();

    // 2本目をドラッグ中
    service.begin_drag(400.0, 5.0, canvas()).unwrap().unwrap();
    let moved = service.update_drag(400.0, 90.0, canvas()).unwrap();
    assert!(moved);

    let template = service.snapshot().unwrap();
    assert_eq!(template.guidelines.len(), 2);
    let first = template.get_guideline(&first_id).unwrap();
    assert_eq!(first.position, 225.0);
    assert_eq!(first.label, "50%");
    assert_eq!(template.guidelines[1].position, 90.0);
    assert_eq!(template.guidelines[1].label, "20%");
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let service = TemplateService::new();

    service.begin_drag(400.0, 5.0, canvas()).unwrap().unwrap();
    let second = service.begin_drag(10.0, 200.0, canvas()).unwrap();
    assert!(second.is_none());

    assert_eq!(service.snapshot().unwrap().guidelines.len(), 1);
}

#[test]
fn test_end_drag_freezes_label() {
    let service = TemplateService::new();

    let id = service.begin_drag(400.0, 5.0, canvas()).unwrap().unwrap();
    service.update_drag(400.0, 225.0, canvas()).unwrap();
    let ended = service.end_drag().unwrap();
    assert_eq!(ended, Some(id.clone()));

    // 解放後のポインター移動では動かない
    let moved = service.update_drag(400.0, 400.0, canvas()).unwrap();
    assert!(!moved);

    let template = service.snapshot().unwrap();
    let guideline = template.get_guideline(&id).unwrap();
    assert_eq!(guideline.position, 225.0);
    assert_eq!(guideline.label, "50%");
}

#[test]
fn test_degenerate_canvas_rejects_drag() {
    let service = TemplateService::new();

    let result = service.begin_drag(10.0, 10.0, CanvasSize::new(0, 450));
    assert!(matches!(result, Err(QcError::ZeroExtent)));
}

#[test]
fn test_remove_and_clear_guidelines() {
    let service = TemplateService::new();

    let id = service.begin_drag(400.0, 5.0, canvas()).unwrap().unwrap();
    service.end_drag().unwrap();
    service.begin_drag(10.0, 200.0, canvas()).unwrap().unwrap();
    service.end_drag().unwrap();

    service.remove_guideline(&id).unwrap();
    assert_eq!(service.snapshot().unwrap().guidelines.len(), 1);

    assert!(matches!(
        service.remove_guideline(&id),
        Err(QcError::Validation(_))
    ));

    service.clear_guidelines().unwrap();
    assert!(service.snapshot().unwrap().guidelines.is_empty());
}

#[test]
fn test_zone_visibility_toggle_keeps_zone() {
    let service = TemplateService::new();

    service.set_zone_visibility("subtitle-zone", false).unwrap();

    let template = service.snapshot().unwrap();
    assert_eq!(template.safe_zones.len(), 3);
    let zone = template
        .safe_zones
        .iter()
        .find(|z| z.id == "subtitle-zone")
        .unwrap();
    assert!(!zone.visible);

    assert!(matches!(
        service.set_zone_visibility("no-such-zone", true),
        Err(QcError::Validation(_))
    ));
}

#[test]
fn test_apply_preset_replaces_zones_and_aspect() {
    let service = TemplateService::new();

    service.apply_preset(Some("tiktok")).unwrap();

    let template = service.snapshot().unwrap();
    assert_eq!(template.aspect_ratio, AspectRatio::NineSixteen);
    assert_eq!(template.safe_zones.len(), 3);
    assert!(template.safe_zones.iter().any(|z| z.id == "ui-safe"));
    assert!(template.platform_requirements.starts_with("• "));
}

#[test]
fn test_apply_unknown_preset_uses_default_pair() {
    let service = TemplateService::new();

    service.apply_preset(Some("vimeo")).unwrap();

    let template = service.snapshot().unwrap();
    assert_eq!(template.aspect_ratio, AspectRatio::SixteenNine);
    let ids: Vec<&str> = template.safe_zones.iter().map(|z| z.id.as_str()).collect();
    assert_eq!(ids, ["title-safe", "action-safe"]);
    assert_eq!(template.platform_requirements, "");
}

#[test]
fn test_reset_restores_defaults_but_keeps_identity() {
    let service = TemplateService::new();

    service.set_name("My Template").unwrap();
    service.set_aspect_ratio(AspectRatio::Square).unwrap();
    service.apply_preset(Some("instagram-story")).unwrap();
    service.begin_drag(400.0, 5.0, canvas()).unwrap().unwrap();

    service.reset().unwrap();

    let template = service.snapshot().unwrap();
    assert_eq!(template.name, "My Template");
    // リセットはアスペクト比を巻き戻さない
    assert_eq!(template.aspect_ratio, AspectRatio::NineSixteen);
    assert_eq!(template.safe_zones.len(), 3);
    assert!(template.safe_zones.iter().any(|z| z.id == "subtitle-zone"));
    assert!(template.guidelines.is_empty());
    assert_eq!(template.platform_requirements, "");

    // ドラッグ状態も破棄される
    assert!(service.end_drag().unwrap().is_none());
}

#[test]
fn test_import_preview_does_not_touch_active_template() {
    let service = TemplateService::new();
    service.set_name("Active").unwrap();

    assert!(service.preview_import("{broken").is_err());
    assert_eq!(service.snapshot().unwrap().name, "Active");

    let candidate = service
        .preview_import(r#"{"name": "Uploaded", "aspectRatio": "1:1"}"#)
        .unwrap();
    // プレビューだけでは差し替わらない
    assert_eq!(service.snapshot().unwrap().name, "Active");

    service.apply_import(candidate).unwrap();
    let template = service.snapshot().unwrap();
    assert_eq!(template.name, "Uploaded");
    assert_eq!(template.aspect_ratio, AspectRatio::Square);
}

#[test]
fn test_square_canvas_drag_end_to_end() {
    // 1:1 キャンバスでの一連のドラッグ操作
    let service = TemplateService::new();
    service.set_aspect_ratio(AspectRatio::Square).unwrap();
    let square = CanvasSize::for_aspect_ratio(800, AspectRatio::Square);
    assert_eq!(square.height, 800);

    let id = service.begin_drag(10.0, 400.0, square).unwrap().unwrap();
    service.update_drag(400.0, 400.0, square).unwrap();
    service.end_drag().unwrap();

    let template = service.snapshot().unwrap();
    let guideline = template.get_guideline(&id).unwrap();
    assert_eq!(guideline.axis, GuidelineAxis::Vertical);
    assert_eq!(guideline.position, 400.0);
    assert_eq!(guideline.label, "50%");
}

#[test]
fn test_export_import_round_trip() {
    let service = TemplateService::new();
    service.apply_preset(Some("youtube-shorts")).unwrap();
    let exported = service.export().unwrap();

    let other = TemplateService::new();
    let candidate = other.preview_import(&exported).unwrap();
    other.apply_import(candidate).unwrap();

    assert_eq!(
        other.snapshot().unwrap(),
        service.snapshot().unwrap()
    );
}
