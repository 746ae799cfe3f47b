// gems.rs - Tap-to-place gems on tracked surfaces
//
// Each select while the reticle is visible drops an icosahedron at the
// reticle pose. Gems spin and breathe; color, size and material changes
// apply to every gem already placed.

use std::rc::Rc;

use glam::Vec3;

use super::{FrameInput, Scene, SceneKind, Transform, track};
use crate::anim::{self, ScaleBounce};
use crate::config::SceneConfig;
use crate::effect::{Effect, Effects};
use crate::error::Result;
use crate::material::{self, Material, MaterialTable, hex_string, hex_to_rgb};
use crate::render::{Encoder, Instance, Tag};
use crate::track::{Reticle, SurfaceTracker};
use crate::ui::{Command, Label, Toggle};

const START_COLOR: u32 = 0x00ff00;
const MIN_RANDOM_SCALE: f32 = 0.5;
/// Largest f32 below 1.0
const MAX_RANDOM_SCALE: f32 = 1.0 - f32::EPSILON / 2.0;

#[derive(Debug, Clone)]
pub struct Gem {
    pub id: u32,
    pub transform: Transform,
    pub material: Rc<Material>,
    pub color: u32,
    pub spin: f32,
    bounce: ScaleBounce,
}

pub struct Gems {
    materials: MaterialTable,
    variants: Vec<Rc<Material>>,
    variant: usize,
    reticle_material: Rc<Material>,

    color: u32,
    scale: f32,
    spin: f32,
    rotation: Toggle,
    scale_animation: Toggle,

    tracker: SurfaceTracker,
    reticle: Reticle,
    gems: Vec<Gem>,
    rng: u32,
}

impl Gems {
    pub fn new(config: &SceneConfig) -> Self {
        let mut materials = MaterialTable::new();
        let variants = vec![
            materials.add(material::gem_metallic()),
            materials.add(material::gem_glass()),
            materials.add(material::gem_emissive()),
        ];
        let reticle_material = materials.add(material::reticle_ring());

        Self {
            materials,
            variants,
            variant: 0,
            reticle_material,
            color: START_COLOR,
            scale: config.gem_scale,
            spin: config.placed_spin,
            rotation: Toggle::new("toggleRotationBtn", "Disable Rotation", "Enable Rotation"),
            scale_animation: Toggle::new(
                "toggleScaleAnimationBtn",
                "Disable Scale Animation",
                "Enable Scale Animation",
            ),
            tracker: SurfaceTracker::new(),
            reticle: Reticle::new(),
            gems: Vec::new(),
            rng: config.seed,
        }
    }

    pub fn gems(&self) -> &[Gem] {
        &self.gems
    }

    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    fn material_label(&self) -> Label {
        Label::new("changeMaterialBtn", format!("Material: {}", self.variants[self.variant].name))
    }

    fn scale_label(&self) -> Label {
        Label::new("scaleIndicator", format!("Current Scale: {:.2}", self.scale))
    }

    fn swatch(&self) -> Effect {
        Effect::Swatch { target: "colorIndicator", color: hex_string(self.color) }
    }
}

/// Map a unit sample onto `[0.5, 1.0)`; the top sample would round up to 1.0
fn random_scale(unit: f32) -> f32 {
    (unit * 0.5 + MIN_RANDOM_SCALE).min(MAX_RANDOM_SCALE)
}

impl Scene for Gems {
    fn kind(&self) -> SceneKind {
        SceneKind::Gems
    }

    fn start(&mut self, fx: &mut Effects) {
        fx.label(self.rotation.label());
        fx.label(self.scale_animation.label());
        fx.label(self.material_label());
        fx.label(self.scale_label());
        fx.push(self.swatch());
    }

    fn apply(&mut self, cmd: &Command, fx: &mut Effects) -> Result<()> {
        match cmd {
            Command::ToggleRotation => fx.label(self.rotation.flip()),
            Command::ToggleScaleAnimation => fx.label(self.scale_animation.flip()),
            Command::RandomColor => {
                self.color = (anim::rand(&mut self.rng) * 0xffffff as f32) as u32 & 0xffffff;
                for gem in &mut self.gems {
                    gem.color = self.color;
                }
                fx.push(self.swatch());
            }
            Command::RandomScale => {
                self.scale = random_scale(anim::rand(&mut self.rng));
                for gem in &mut self.gems {
                    gem.transform.scale = Vec3::splat(self.scale);
                }
                fx.label(self.scale_label());
            }
            Command::CycleMaterial => {
                self.variant = (self.variant + 1) % self.variants.len();
                let m = &self.variants[self.variant];
                // Gems keep their own color across the swap
                for gem in &mut self.gems {
                    gem.material = Rc::clone(m);
                }
                fx.label(self.material_label());
            }
            other => log::debug!("gems: ignoring {other:?}"),
        }
        Ok(())
    }

    fn select(&mut self, fx: &mut Effects) {
        if !self.reticle.visible {
            return;
        }

        let (position, rotation) = self.reticle.placement();
        let gem = Gem {
            id: self.gems.len() as u32,
            transform: Transform::placed(position, rotation, self.scale),
            material: Rc::clone(&self.variants[self.variant]),
            color: self.color,
            spin: self.spin,
            bounce: ScaleBounce::new(),
        };
        log::info!("gem {} placed at {position}", gem.id);
        self.gems.push(gem);
        fx.push(Effect::PlaySound { target: "placeSound" });
    }

    fn frame(&mut self, input: &FrameInput, fx: &mut Effects) {
        if !input.xr {
            return;
        }
        track(&mut self.tracker, &mut self.reticle, input, fx);

        for gem in &mut self.gems {
            if self.scale_animation.on {
                let s = gem.bounce.step(gem.transform.scale.x, self.scale);
                gem.transform.scale = Vec3::splat(s);
            }
            if self.rotation.on {
                gem.transform.euler.y += gem.spin;
            }
        }
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.push(&Instance {
            tag: Tag::Reticle,
            id: 0,
            visible: self.reticle.visible,
            material: self.reticle_material.id.0 as f32,
            opacity: self.reticle.opacity,
            color: self.reticle.color,
            intensity: 1.0,
            params: [0.0; 3],
            matrix: self.reticle.matrix,
        });

        for gem in &self.gems {
            enc.push(&Instance {
                tag: Tag::Mesh,
                id: gem.id,
                visible: true,
                material: gem.material.id.0 as f32,
                opacity: gem.material.opacity,
                color: hex_to_rgb(gem.color),
                intensity: gem.material.emissive_intensity,
                params: [0.0; 3],
                matrix: gem.transform.matrix(),
            });
        }
    }

    fn materials(&mut self) -> &mut MaterialTable {
        &mut self.materials
    }

    fn tracker(&mut self) -> Option<&mut SurfaceTracker> {
        Some(&mut self.tracker)
    }

    fn session_ended(&mut self) {
        self.tracker.end_session();
        self.reticle.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::HitTestSource;
    use glam::{Mat4, Quat};

    fn tracking() -> Gems {
        let mut g = Gems::new(&SceneConfig::default());
        let req = g.tracker.begin().unwrap();
        g.tracker.complete(req.epoch, Ok(HitTestSource(0))).unwrap();
        g
    }

    fn xr_frame(g: &mut Gems, hits: Vec<Mat4>) -> Effects {
        let mut fx = Effects::new();
        g.frame(&FrameInput { timestamp: 0.0, xr: true, hits }, &mut fx);
        fx
    }

    #[test]
    fn first_xr_frame_requests_hit_test_once() {
        let mut g = Gems::new(&SceneConfig::default());
        let fx = xr_frame(&mut g, vec![]);
        assert!(matches!(fx.iter().next(), Some(Effect::RequestHitTest { epoch: 0 })));
        assert!(xr_frame(&mut g, vec![]).is_empty());
    }

    #[test]
    fn select_without_surface_does_nothing() {
        let mut g = tracking();
        xr_frame(&mut g, vec![]);
        let mut fx = Effects::new();
        g.select(&mut fx);
        assert!(g.gems().is_empty());
        assert!(fx.is_empty());
    }

    #[test]
    fn random_scale_stays_below_one() {
        let top = 16777215.0 / 16777216.0;
        assert!(random_scale(top) < 1.0);
        assert_eq!(random_scale(0.0), 0.5);
    }

    #[test]
    fn session_end_hides_reticle() {
        let mut g = tracking();
        xr_frame(&mut g, vec![Mat4::from_translation(Vec3::new(0.0, -1.0, -1.0))]);
        assert!(g.reticle().visible);

        g.session_ended();
        assert!(!g.reticle().visible);
        let mut fx = Effects::new();
        g.select(&mut fx);
        assert!(g.gems().is_empty());
    }

    #[test]
    fn select_spawns_at_reticle_with_current_scale() {
        let mut g = tracking();
        g.apply(&Command::RandomScale, &mut Effects::new()).unwrap();
        let rot = Quat::from_rotation_y(1.2);
        let pos = Vec3::new(0.4, -0.9, -1.3);
        xr_frame(&mut g, vec![Mat4::from_rotation_translation(rot, pos)]);

        let mut fx = Effects::new();
        g.select(&mut fx);
        assert_eq!(g.gems().len(), 1);
        let gem = &g.gems()[0];
        assert!(gem.transform.position.abs_diff_eq(pos, 1e-5));
        assert!((gem.transform.base * Vec3::X).abs_diff_eq(rot * Vec3::X, 1e-5));
        assert_eq!(gem.transform.scale, Vec3::splat(g.scale()));
        assert_eq!(fx.drain(), vec![Effect::PlaySound { target: "placeSound" }]);
    }

    #[test]
    fn random_scale_in_range_and_applied_to_all() {
        let mut g = tracking();
        xr_frame(&mut g, vec![Mat4::IDENTITY]);
        g.select(&mut Effects::new());
        g.select(&mut Effects::new());
        for _ in 0..20 {
            let mut fx = Effects::new();
            g.apply(&Command::RandomScale, &mut fx).unwrap();
            assert!((0.5..1.0).contains(&g.scale()));
            assert!(g.gems().iter().all(|gem| gem.transform.scale.x == g.scale()));
            match fx.drain().as_slice() {
                [Effect::Label(l)] => assert!(l.text.starts_with("Current Scale: ")),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn material_cycle_keeps_colors() {
        let mut g = tracking();
        xr_frame(&mut g, vec![Mat4::IDENTITY]);
        g.apply(&Command::RandomColor, &mut Effects::new()).unwrap();
        g.select(&mut Effects::new());
        let color = g.gems()[0].color;

        let mut fx = Effects::new();
        g.apply(&Command::CycleMaterial, &mut fx).unwrap();
        assert_eq!(g.gems()[0].material.name, "Glass");
        assert_eq!(g.gems()[0].color, color);
        assert_eq!(fx.drain(), vec![Effect::Label(Label::new("changeMaterialBtn", "Material: Glass"))]);

        g.apply(&Command::CycleMaterial, &mut Effects::new()).unwrap();
        g.apply(&Command::CycleMaterial, &mut Effects::new()).unwrap();
        assert_eq!(g.gems()[0].material.name, "Metallic");
    }

    #[test]
    fn gems_spin_and_breathe() {
        let mut g = tracking();
        xr_frame(&mut g, vec![Mat4::IDENTITY]);
        g.select(&mut Effects::new());
        for _ in 0..30 {
            xr_frame(&mut g, vec![Mat4::IDENTITY]);
        }
        let gem = &g.gems()[0];
        assert!((gem.transform.euler.y - 30.0 * 0.02).abs() < 1e-4);
        assert!(gem.transform.scale.x < 1.06 && gem.transform.scale.x > 0.45);
    }

    #[test]
    fn non_xr_frames_are_skipped() {
        let mut g = tracking();
        let mut fx = Effects::new();
        g.frame(&FrameInput { timestamp: 0.0, xr: false, hits: vec![Mat4::IDENTITY] }, &mut fx);
        assert!(!g.reticle().visible);
    }
}
