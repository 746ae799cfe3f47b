// Behavioral properties of the scenes, checked through their public API.

use std::rc::Rc;

use ar_scenes::anim::{BurstState, HueCycle};
use ar_scenes::effect::{Effect, Effects};
use ar_scenes::material::{MaterialChoice, MaterialTable, ModelMaterials, glass, silver};
use ar_scenes::scene::{FrameInput, Gems, Scene, Shapes};
use ar_scenes::track::{HitTestSource, Reticle, SurfaceTracker};
use ar_scenes::ui::{Command, Toggle};
use ar_scenes::SceneConfig;
use glam::{Mat4, Quat, Vec3};

fn labels(fx: &mut Effects) -> Vec<String> {
    fx.drain()
        .into_iter()
        .filter_map(|e| match e {
            Effect::Label(l) => Some(format!("{}={}", l.target, l.text)),
            _ => None,
        })
        .collect()
}

#[test]
fn toggling_twice_restores_flag_and_label() {
    let mut t = Toggle::new("toggleJumpBtn", "Jump: On", "Jump: Off");
    let start = (t.on, t.label());
    t.flip();
    t.flip();
    assert_eq!((t.on, t.label()), start);

    let mut scene = Shapes::new(&SceneConfig::default());
    let mut fx = Effects::new();
    scene.start(&mut fx);
    let initial = labels(&mut fx);
    for cmd in [Command::ToggleRotation, Command::ToggleSpeed, Command::ToggleDirection] {
        scene.apply(&cmd, &mut fx).unwrap();
        scene.apply(&cmd, &mut fx).unwrap();
        let last = labels(&mut fx).pop().unwrap();
        assert!(initial.contains(&last), "{last}");
    }
}

#[test]
fn hue_wraps_to_zero_within_unit_interval() {
    let mut h = HueCycle::new();
    let mut zeros = 0;
    for _ in 0..1_000 {
        let v = h.advance(0.03);
        assert!(v >= 0.0 && v < 1.0);
        if v == 0.0 {
            zeros += 1;
        }
    }
    assert!(zeros >= 29 && zeros <= 30);
}

#[test]
fn special_effect_returns_to_idle() {
    let mut scene = Shapes::new(&SceneConfig::default());
    let mut fx = Effects::new();
    scene.apply(&Command::ToggleSpeed, &mut fx).unwrap();
    scene.apply(&Command::TriggerEffect, &mut fx).unwrap();
    assert_eq!(scene.burst().state, BurstState::Active { timer: 0.0 });
    assert_eq!(scene.burst().opacity, 1.0);

    for i in 0..20 {
        scene.frame(&FrameInput { timestamp: i as f64 * 16.0, ..Default::default() }, &mut fx);
    }
    assert_eq!(scene.burst().state, BurstState::Idle);
    assert_eq!(scene.burst().opacity, 0.0);
    assert_eq!(scene.burst().offset_z, 0.0);
}

#[test]
fn material_revert_is_by_reference() {
    let mut table = MaterialTable::new();
    let originals: Vec<_> = (0..5).map(|i| table.imported(9, i)).collect();
    let mut model = ModelMaterials::capture(originals.clone());

    model.apply(&MaterialChoice::Preset(table.add(silver())));
    model.apply(&MaterialChoice::Preset(table.add(glass())));
    model.apply(&MaterialChoice::Original);

    assert_eq!(model.mesh_count(), 5);
    for (now, then) in model.current().iter().zip(&originals) {
        assert!(Rc::ptr_eq(now, then));
    }
}

#[test]
fn zero_hits_hide_reticle_without_moving_it() {
    let mut tracker = SurfaceTracker::new();
    let req = tracker.begin().unwrap();
    tracker.complete(req.epoch, Ok(HitTestSource(2))).unwrap();

    let mut reticle = Reticle::new();
    let pose = Mat4::from_rotation_translation(Quat::from_rotation_z(0.1), Vec3::new(1.0, 2.0, 3.0));
    tracker.update(&[pose], &mut reticle);
    assert!(reticle.visible);

    tracker.update(&[], &mut reticle);
    assert!(!reticle.visible);
    assert_eq!(reticle.matrix, pose);
    assert_ne!(reticle.matrix, Mat4::IDENTITY);
}

#[test]
fn placement_spawns_one_gem_at_reticle() {
    let mut gems = Gems::new(&SceneConfig { gem_scale: 0.8, ..SceneConfig::default() });
    let mut fx = Effects::new();

    // Acquire the hit-test source through the scene's own tracker
    gems.frame(&FrameInput { timestamp: 0.0, xr: true, hits: vec![] }, &mut fx);
    let epoch = fx
        .drain()
        .into_iter()
        .find_map(|e| match e {
            Effect::RequestHitTest { epoch } => Some(epoch),
            _ => None,
        })
        .unwrap();
    gems.tracker().unwrap().complete(epoch, Ok(HitTestSource(5))).unwrap();

    let rot = Quat::from_rotation_y(-0.4);
    let pos = Vec3::new(-0.3, -1.2, -0.9);
    let pose = Mat4::from_rotation_translation(rot, pos);
    gems.frame(&FrameInput { timestamp: 16.0, xr: true, hits: vec![pose] }, &mut fx);

    gems.select(&mut fx);
    assert_eq!(gems.gems().len(), 1);
    let gem = &gems.gems()[0];
    assert!(gem.transform.matrix().abs_diff_eq(pose * Mat4::from_scale(Vec3::splat(0.8)), 1e-5));
    assert_eq!(gem.transform.scale, Vec3::splat(0.8));
}
