// planets.rs - Tap-to-place loaded models on tracked surfaces
//
// A select while the reticle is visible captures the reticle pose and asks
// the host to fetch the model. The planet appears when the fetch completes,
// at the pose captured on select. Placed planets hop and spin.

use std::rc::Rc;

use glam::{Quat, Vec3};

use super::{FrameInput, Scene, SceneKind, Transform, track};
use crate::assets::{AssetQueue, Ticket};
use crate::config::SceneConfig;
use crate::effect::{Effect, Effects};
use crate::error::{Error, Result};
use crate::light::{ColorCycle, Dial, Light, LightSource};
use crate::material::{self, Material, MaterialTable, ModelMaterials, Palette, hex_to_rgb, hsl_to_rgb};
use crate::render::{Encoder, Instance, Tag};
use crate::track::{Reticle, SurfaceTracker};
use crate::ui::{Command, Label, Toggle};

const JUMP_HEIGHT: f32 = 0.1;
const JUMP_FREQ: f64 = 0.005;

const LIGHT_COLORS: &[(u32, &str)] = &[
    (0xffffff, "White"),
    (0xffaaaa, "Red"),
    (0xaaffaa, "Green"),
    (0xaaaaff, "Blue"),
];

/// (palette key, button id)
const MATERIAL_BUTTONS: &[(&str, &str)] = &[
    ("realistic", "materialRealisticBtn"),
    ("gold", "materialGoldBtn"),
    ("glow", "materialGlowBtn"),
    ("glass", "materialGlassBtn"),
    ("chrome", "materialChromeBtn"),
];

const DIRECTIONAL_ID: u32 = 0;

#[derive(Debug, Clone)]
pub struct Planet {
    pub id: u32,
    pub transform: Transform,
    /// Position at placement; hops are relative to it
    pub base: Vec3,
    pub spin: f32,
    pub materials: ModelMaterials,
}

pub struct Planets {
    materials: MaterialTable,
    palette: Palette,
    selected: &'static str,
    reticle_material: Rc<Material>,

    model_url: String,
    scale: f32,
    spin: f32,
    assets: AssetQueue<(Vec3, Quat)>,

    jump: Toggle,
    rotation: Toggle,
    directional: Toggle,
    intensity: Dial,
    light_color: ColorCycle,
    lights: [Light; 3],

    tracker: SurfaceTracker,
    reticle: Reticle,
    planets: Vec<Planet>,
}

impl Planets {
    pub fn new(config: &SceneConfig) -> Self {
        let mut materials = MaterialTable::new();
        let palette = Palette::new()
            .original("realistic", "Realistic")
            .preset("gold", "Gold", materials.add(material::planet_gold()))
            .preset("glow", "Glow", materials.add(material::glow()))
            .preset("glass", "Glass", materials.add(material::clear_glass()))
            .preset("chrome", "Chrome", materials.add(material::chrome()));
        let reticle_material = materials.add(material::reticle_ring().color(0x00ff00).translucent(0.7));

        let intensity = Dial::new(
            config.light_intensity,
            config.light_intensity_step,
            0.0,
            config.light_intensity_max,
        );
        let mut directional = Light::new(DIRECTIONAL_ID, LightSource::Directional, 0xffffff, intensity.value)
            .at(Vec3::new(2.0, 3.0, 2.0));
        directional.cast_shadow = true;

        Self {
            materials,
            palette,
            selected: "realistic",
            reticle_material,
            model_url: config.planet_model_url.clone(),
            scale: config.planet_scale,
            spin: config.placed_spin,
            assets: AssetQueue::new(),
            jump: Toggle::new("toggleJumpBtn", "Jump: On", "Jump: Off"),
            rotation: Toggle::new("toggleRotationBtn", "Rotation: On", "Rotation: Off"),
            directional: Toggle::new(
                "toggleDirectionalLightBtn",
                "Directional Light: On",
                "Directional Light: Off",
            ),
            intensity,
            light_color: ColorCycle::new(LIGHT_COLORS),
            lights: [
                directional,
                Light::new(1, LightSource::Ambient, 0xffffff, 0.5),
                Light::new(2, LightSource::Hemisphere { ground: 0xbbbbff }, 0xffffff, 0.5)
                    .at(Vec3::new(0.0, 1.0, 0.0)),
            ],
            tracker: SurfaceTracker::new(),
            reticle: Reticle::with_style(0.7, [0.0, 1.0, 0.0]),
            planets: Vec::new(),
        }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    pub fn pending_loads(&self) -> usize {
        self.assets.in_flight()
    }

    pub fn directional_light(&self) -> &Light {
        &self.lights[DIRECTIONAL_ID as usize]
    }

    pub fn selected_material(&self) -> &str {
        self.selected
    }

    fn material_labels(&self, fx: &mut Effects) {
        for &(key, target) in MATERIAL_BUTTONS {
            let Some(swatch) = self.palette.get(key) else { continue };
            let text = if key == self.selected {
                format!("Material: {} (Active)", swatch.label)
            } else {
                format!("Material: {}", swatch.label)
            };
            fx.label(Label::new(target, text));
        }
    }

    fn light_color_label(&self) -> Label {
        Label::new("changeLightColorBtn", format!("Light Color: {}", self.light_color.current().1))
    }

    fn set_material(&mut self, key: &str, fx: &mut Effects) -> Result<()> {
        let swatch = self.palette.get(key).ok_or_else(|| Error::InvalidCommand {
            command: "set_material".to_string(),
            value: key.to_string(),
        })?;
        self.selected = swatch.key;
        for planet in &mut self.planets {
            planet.materials.apply(&swatch.choice);
        }
        self.material_labels(fx);
        Ok(())
    }
}

impl Scene for Planets {
    fn kind(&self) -> SceneKind {
        SceneKind::Planets
    }

    fn start(&mut self, fx: &mut Effects) {
        fx.label(self.jump.label());
        fx.label(self.rotation.label());
        fx.label(self.directional.label());
        fx.label(self.light_color_label());
        self.material_labels(fx);
    }

    fn apply(&mut self, cmd: &Command, fx: &mut Effects) -> Result<()> {
        match cmd {
            Command::SetMaterial(key) => self.set_material(key, fx)?,
            Command::ToggleJump => fx.label(self.jump.flip()),
            Command::ToggleRotation => fx.label(self.rotation.flip()),
            Command::ToggleDirectionalLight => {
                fx.label(self.directional.flip());
                self.lights[DIRECTIONAL_ID as usize].visible = self.directional.on;
            }
            Command::IncreaseLight => {
                let v = self.intensity.up();
                self.lights[DIRECTIONAL_ID as usize].intensity = v;
                log::info!("light intensity increased to {v}");
            }
            Command::DecreaseLight => {
                let v = self.intensity.down();
                self.lights[DIRECTIONAL_ID as usize].intensity = v;
                log::info!("light intensity decreased to {v}");
            }
            Command::CycleLightColor => {
                let (hex, _) = self.light_color.next();
                self.lights[DIRECTIONAL_ID as usize].color = hex;
                fx.label(self.light_color_label());
            }
            other => log::debug!("planets: ignoring {other:?}"),
        }
        Ok(())
    }

    fn select(&mut self, fx: &mut Effects) {
        if !self.reticle.visible {
            return;
        }
        let placement = self.reticle.placement();
        let ticket = self.assets.request(&self.model_url, placement);
        fx.push(Effect::LoadModel { ticket, url: self.model_url.clone() });
    }

    fn model_loaded(&mut self, ticket: Ticket, mesh_count: usize, fx: &mut Effects) {
        let Some((_, (position, rotation))) = self.assets.resolve(ticket) else { return };

        let id = self.planets.len() as u32;
        let originals = (0..mesh_count).map(|i| self.materials.imported(id, i)).collect();
        let mut materials = ModelMaterials::capture(originals);
        if let Some(swatch) = self.palette.get(self.selected) {
            materials.apply(&swatch.choice);
        }

        self.planets.push(Planet {
            id,
            transform: Transform::placed(position, rotation, self.scale),
            base: position,
            spin: self.spin,
            materials,
        });
        fx.push(Effect::PlaySound { target: "placeSound" });
        log::info!("planet {id} added to scene at {position}");
    }

    fn model_failed(&mut self, ticket: Ticket, reason: &str) {
        self.assets.fail(ticket, reason);
    }

    fn frame(&mut self, input: &FrameInput, fx: &mut Effects) {
        if !input.xr {
            return;
        }
        let t = input.timestamp;
        track(&mut self.tracker, &mut self.reticle, input, fx);

        if self.reticle.visible {
            self.reticle.opacity = 0.7 + 0.3 * (t * 0.005).sin() as f32;
            self.reticle.color = hsl_to_rgb(((t * 0.0005) % 1.0) as f32, 0.7, 0.5);
        }

        let hop = (t * JUMP_FREQ).sin() as f32 * JUMP_HEIGHT;
        for planet in &mut self.planets {
            planet.transform.position.y = if self.jump.on { planet.base.y + hop } else { planet.base.y };
            if self.rotation.on {
                planet.transform.euler.y += planet.spin;
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

        for planet in &self.planets {
            let matrix = planet.transform.matrix();
            for (i, m) in planet.materials.current().iter().enumerate() {
                enc.push(&Instance {
                    tag: Tag::ModelMesh,
                    id: planet.id,
                    visible: true,
                    material: m.id.0 as f32,
                    opacity: m.opacity,
                    color: hex_to_rgb(m.color),
                    intensity: m.emissive_intensity,
                    params: [i as f32, 0.0, 0.0],
                    matrix,
                });
            }
        }

        for light in &self.lights {
            enc.push(&light.instance());
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

    fn teardown(&mut self) {
        self.assets.reset();
    }
}
