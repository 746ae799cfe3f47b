// End-to-end flows through Stage, the way the JS host drives it.

use ar_scenes::effect::Effect;
use ar_scenes::render::{RECORD_LEN, Tag};
use ar_scenes::track::TrackerState;
use ar_scenes::{Error, SceneConfig, SceneKind, Stage};
use glam::{Mat4, Vec3};

fn stage(kind: SceneKind) -> Stage {
    Stage::new(kind, &SceneConfig::default())
}

fn pose(x: f32, y: f32, z: f32) -> Vec<f32> {
    Mat4::from_translation(Vec3::new(x, y, z)).to_cols_array().to_vec()
}

fn request_epoch(effects: &[Effect]) -> Option<u32> {
    effects.iter().find_map(|e| match e {
        Effect::RequestHitTest { epoch } => Some(*epoch),
        _ => None,
    })
}

fn tag_count(stage: &Stage, tag: Tag) -> usize {
    let enc = stage.encoder();
    (0..enc.records())
        .filter(|&i| enc.record(i).map(|r| r[0]) == Some(tag as u8 as f32))
        .count()
}

fn tag_visible(stage: &Stage, tag: Tag) -> Option<bool> {
    let enc = stage.encoder();
    (0..enc.records())
        .filter_map(|i| enc.record(i))
        .find(|r| r[0] == tag as u8 as f32)
        .map(|r| r[2] == 1.0)
}

#[test]
fn startup_defines_materials_and_labels() {
    let mut s = stage(SceneKind::Shapes);
    let effects = s.drain_effects();
    assert!(effects.iter().any(|e| matches!(e, Effect::DefineMaterial { .. })));
    assert!(effects.iter().any(|e| matches!(e, Effect::Particles { positions, .. } if positions.len() == 450)));
    assert!(effects.iter().any(|e| matches!(e, Effect::Label(l) if l.text == "Speed: Normal")));
    assert_eq!(s.encoder().len() % RECORD_LEN, 0);
}

#[test]
fn viewer_requests_its_model_on_start() {
    let mut s = stage(SceneKind::Viewer);
    let effects = s.drain_effects();
    let url = effects.iter().find_map(|e| match e {
        Effect::LoadModel { url, .. } => Some(url.clone()),
        _ => None,
    });
    assert_eq!(url.as_deref(), Some(ar_scenes::config::VIEWER_MODEL_URL));
}

#[test]
fn gems_full_session() {
    let mut s = stage(SceneKind::Gems);
    s.drain_effects();
    s.session_started();

    // First XR frame kicks off hit-test acquisition
    s.frame(0.0, true, &[]);
    let effects = s.drain_effects();
    assert!(effects.contains(&Effect::ControlsVisible { visible: true }));
    let epoch = request_epoch(&effects).expect("hit-test request");
    s.hit_test_ready(epoch, 1).unwrap();
    assert!(matches!(s.tracker_state(), Some(TrackerState::Ready(_))));

    s.frame(16.0, true, &pose(0.0, -1.0, -1.0));
    s.select();
    s.select();
    assert_eq!(tag_count(&s, Tag::Mesh), 2);
    let sounds = s
        .drain_effects()
        .into_iter()
        .filter(|e| matches!(e, Effect::PlaySound { .. }))
        .count();
    assert_eq!(sounds, 2);

    // Session end: tracker resets, next session asks again
    s.session_ended();
    assert_eq!(s.tracker_state(), Some(TrackerState::Idle));
    s.drain_effects();
    s.frame(32.0, true, &[]);
    assert_eq!(request_epoch(&s.drain_effects()), Some(epoch + 1));
}

#[test]
fn capability_denial_surfaces_once() {
    let mut s = stage(SceneKind::Planets);
    s.frame(0.0, true, &[]);
    let epoch = request_epoch(&s.drain_effects()).unwrap();

    let err = s.hit_test_failed(epoch, "hit-test not supported").unwrap_err();
    assert!(matches!(err, Error::CapabilityUnavailable(_)));
    assert_eq!(s.tracker_state(), Some(TrackerState::Unavailable));

    // No retry on later frames
    for i in 1..10 {
        s.frame(i as f64 * 16.0, true, &pose(0.0, 0.0, -1.0));
    }
    assert_eq!(request_epoch(&s.drain_effects()), None);
    s.select();
    assert!(s.drain_effects().is_empty());
}

#[test]
fn denied_next_session_does_not_reuse_old_reticle() {
    let mut s = stage(SceneKind::Gems);
    s.session_started();
    s.frame(0.0, true, &[]);
    let epoch = request_epoch(&s.drain_effects()).unwrap();
    s.hit_test_ready(epoch, 1).unwrap();
    s.frame(16.0, true, &pose(0.0, -1.0, -1.0));
    assert_eq!(tag_visible(&s, Tag::Reticle), Some(true));

    s.session_ended();
    assert_eq!(tag_visible(&s, Tag::Reticle), Some(false));
    s.select();

    s.session_started();
    s.frame(32.0, true, &[]);
    let epoch = request_epoch(&s.drain_effects()).unwrap();
    assert!(s.hit_test_failed(epoch, "denied").is_err());
    s.frame(48.0, true, &pose(0.0, -1.0, -1.0));
    s.select();

    assert_eq!(tag_visible(&s, Tag::Reticle), Some(false));
    assert_eq!(tag_count(&s, Tag::Mesh), 0);
}

#[test]
fn planets_async_placement_and_teardown() {
    let mut s = stage(SceneKind::Planets);
    s.frame(0.0, true, &[]);
    let epoch = request_epoch(&s.drain_effects()).unwrap();
    s.hit_test_ready(epoch, 3).unwrap();
    s.frame(16.0, true, &pose(0.2, -0.8, -1.5));

    s.select();
    let ticket = s
        .drain_effects()
        .into_iter()
        .find_map(|e| match e {
            Effect::LoadModel { ticket, .. } => Some(ticket),
            _ => None,
        })
        .unwrap();
    s.model_loaded(ticket, 4);
    assert_eq!(tag_count(&s, Tag::ModelMesh), 4);

    s.select();
    let late = s
        .drain_effects()
        .into_iter()
        .find_map(|e| match e {
            Effect::LoadModel { ticket, .. } => Some(ticket),
            _ => None,
        })
        .unwrap();
    s.teardown();
    s.model_loaded(late, 4);
    assert_eq!(tag_count(&s, Tag::ModelMesh), 4);
}

#[test]
fn bad_light_bounds_fail_config_instead_of_panicking() {
    let err = SceneConfig::from_json(r#"{ "light_intensity_max": -1.0 }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { field: "light_intensity_max", .. }));

    // Built in Rust without validation: still constructs
    let config = SceneConfig { light_intensity_max: -1.0, ..SceneConfig::default() };
    let mut s = Stage::new(SceneKind::Planets, &config);
    s.command("increase_light", None).unwrap();
}

#[test]
fn commands_report_errors() {
    let mut s = stage(SceneKind::Viewer);
    assert!(matches!(s.command("fly", None), Err(Error::UnknownCommand(_))));
    assert!(matches!(s.command("light_color", Some("purple")), Err(Error::InvalidCommand { .. })));
    s.command("light_intensity", Some("2")).unwrap();
}

#[test]
fn non_tracking_scene_ignores_hit_test_callbacks() {
    let mut s = stage(SceneKind::Shapes);
    assert_eq!(s.tracker_state(), None);
    s.hit_test_ready(0, 1).unwrap();
    s.hit_test_failed(0, "nope").unwrap();
}

#[test]
fn effects_serialize_with_type_tags() {
    let mut s = stage(SceneKind::Gems);
    s.command("toggle_rotation", None).unwrap();
    let json = serde_json::to_string(&s.drain_effects()).unwrap();
    assert!(json.contains(r#""type":"label""#));
    assert!(json.contains(r#""target":"toggleRotationBtn""#));
    assert!(json.contains("Enable Rotation"));
}
