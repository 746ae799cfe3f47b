// viewer.rs - One loaded model with material, rotation and light controls

use glam::Vec3;

use super::{FrameInput, Scene, SceneKind, Transform};
use crate::assets::{AssetQueue, Ticket};
use crate::config::SceneConfig;
use crate::effect::{Effect, Effects};
use crate::error::{Error, Result};
use crate::light::{Light, LightSource};
use crate::material::{self, MaterialTable, ModelMaterials, Palette, hex_to_rgb};
use crate::render::{Encoder, Instance, Tag};
use crate::ui::{Axis, Command, Label, LightKind, Toggle};

const MODEL_POSITION: Vec3 = Vec3::new(0.0, -0.1, -0.5);
const LIGHT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.05);
const DIRECTIONAL_POSITION: Vec3 = Vec3::new(0.0, 0.1, 0.0);
const DEGREES_PER_FRAME: f32 = 0.2;

const AMBIENT_ID: u32 = 0;
const MODEL_LIGHT_ID: u32 = 1;

#[derive(Debug, Clone)]
struct LoadedModel {
    id: u32,
    transform: Transform,
    materials: ModelMaterials,
}

pub struct Viewer {
    materials: MaterialTable,
    palette: Palette,
    selected: String,
    model_url: String,
    assets: AssetQueue<()>,
    model: Option<LoadedModel>,
    next_model: u32,

    rotation: Toggle,
    axis: Axis,
    degrees: f32,

    scene_light: Toggle,
    model_light: Toggle,
    light_kind: LightKind,
    ambient: Light,
    light: Light,
}

impl Viewer {
    pub fn new(config: &SceneConfig) -> Self {
        let mut materials = MaterialTable::new();
        let palette = Palette::new()
            .original("original", "Original")
            .preset("gold", "Gold", materials.add(material::gold()))
            .preset("silver", "Silver", materials.add(material::silver()))
            .preset("emerald", "Emerald", materials.add(material::emerald()))
            .preset("glass", "Glass", materials.add(material::glass()));

        Self {
            materials,
            palette,
            selected: "original".to_string(),
            model_url: config.viewer_model_url.clone(),
            assets: AssetQueue::new(),
            model: None,
            next_model: 0,
            rotation: Toggle::new("toggleRotationBtn", "Disable Rotation", "Enable Rotation"),
            axis: Axis::Y,
            degrees: 0.0,
            scene_light: Toggle::new("toggleSceneLightBtn", "Scene Light: On", "Scene Light: Off"),
            model_light: Toggle::new("toggleModelLightBtn", "Model Light: On", "Model Light: Off"),
            light_kind: LightKind::Point,
            ambient: Light::new(AMBIENT_ID, LightSource::Ambient, 0xffffff, 1.5),
            light: Light::new(
                MODEL_LIGHT_ID,
                LightSource::Point { distance: 10 },
                0xffffff,
                config.model_light_intensity,
            ),
        }
    }

    pub fn model_transform(&self) -> Option<Transform> {
        self.model.as_ref().map(|m| m.transform)
    }

    pub fn model_materials(&self) -> Option<&ModelMaterials> {
        self.model.as_ref().map(|m| &m.materials)
    }

    pub fn selected_material(&self) -> &str {
        &self.selected
    }

    pub fn model_light(&self) -> &Light {
        &self.light
    }

    pub fn ambient_light(&self) -> &Light {
        &self.ambient
    }

    fn set_material(&mut self, key: &str, fx: &mut Effects) -> Result<()> {
        let swatch = self.palette.get(key).ok_or_else(|| Error::InvalidCommand {
            command: "set_material".to_string(),
            value: key.to_string(),
        })?;

        let Some(model) = self.model.as_mut() else {
            log::debug!("no model yet, ignoring material {key}");
            return Ok(());
        };

        model.materials.apply(&swatch.choice);
        self.selected = swatch.key.to_string();
        fx.label(Label::new("materialSelect", swatch.key));
        Ok(())
    }

    /// Replace the model light with one of the chosen kind
    fn rebuild_light(&mut self) {
        let mut light = Light::new(
            MODEL_LIGHT_ID,
            LightSource::from_kind(self.light_kind),
            self.light.color,
            self.light.intensity,
        );
        if self.light_kind == LightKind::Directional {
            light.position = DIRECTIONAL_POSITION;
        } else {
            light.position = self.light.position;
        }
        light.visible = self.model_light.on;
        self.light = light;
    }
}

impl Scene for Viewer {
    fn kind(&self) -> SceneKind {
        SceneKind::Viewer
    }

    fn start(&mut self, fx: &mut Effects) {
        fx.label(self.rotation.label());
        fx.label(self.scene_light.label());
        fx.label(self.model_light.label());

        let ticket = self.assets.request(&self.model_url, ());
        fx.push(Effect::LoadModel { ticket, url: self.model_url.clone() });
    }

    fn apply(&mut self, cmd: &Command, fx: &mut Effects) -> Result<()> {
        match cmd {
            Command::ToggleRotation => fx.label(self.rotation.flip()),
            Command::SetRotationAxis(axis) => self.axis = *axis,
            Command::SetMaterial(key) => self.set_material(key, fx)?,
            Command::ToggleSceneLight => {
                fx.label(self.scene_light.flip());
                self.ambient.visible = self.scene_light.on;
            }
            Command::ToggleModelLight => {
                fx.label(self.model_light.flip());
                self.light.visible = self.model_light.on;
            }
            Command::SetLightKind(kind) => {
                self.light_kind = *kind;
                self.rebuild_light();
            }
            Command::SetLightIntensity(v) => {
                self.light.intensity = v.max(0.0);
                self.rebuild_light();
            }
            Command::SetLightColor(hex) => {
                self.light.color = *hex;
                self.rebuild_light();
            }
            other => log::debug!("viewer: ignoring {other:?}"),
        }
        Ok(())
    }

    fn frame(&mut self, _input: &FrameInput, _fx: &mut Effects) {
        let Some(model) = self.model.as_mut() else { return };

        if self.rotation.on {
            self.degrees += DEGREES_PER_FRAME;
            let rad = self.degrees.to_radians();
            match self.axis {
                Axis::X => model.transform.euler.x = rad,
                Axis::Y => model.transform.euler.y = rad,
                Axis::Z => model.transform.euler.z = rad,
            }
        }

        if self.light_kind != LightKind::Directional {
            self.light.position = model.transform.position + LIGHT_OFFSET;
        }
    }

    fn encode(&self, enc: &mut Encoder) {
        if let Some(model) = &self.model {
            let matrix = model.transform.matrix();
            for (i, m) in model.materials.current().iter().enumerate() {
                enc.push(&Instance {
                    tag: Tag::ModelMesh,
                    id: model.id,
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

        enc.push(&self.ambient.instance());
        let mut light = self.light.instance();
        if self.light_kind == LightKind::Spot {
            // Spot target: the model, when there is one
            light.params[2] = self.model.as_ref().map_or(-1.0, |m| m.id as f32);
        }
        enc.push(&light);
    }

    fn materials(&mut self) -> &mut MaterialTable {
        &mut self.materials
    }

    fn model_loaded(&mut self, ticket: Ticket, mesh_count: usize, fx: &mut Effects) {
        let Some((url, ())) = self.assets.resolve(ticket) else { return };

        let id = self.next_model;
        self.next_model += 1;
        let originals = (0..mesh_count).map(|i| self.materials.imported(id, i)).collect();

        if self.model.is_some() {
            log::debug!("replacing previously loaded model");
        }
        self.model = Some(LoadedModel {
            id,
            transform: Transform::at(MODEL_POSITION),
            materials: ModelMaterials::capture(originals),
        });

        let selected = self.selected.clone();
        if let Err(err) = self.set_material(&selected, fx) {
            log::warn!("could not restore material {selected}: {err}");
        }
        log::info!("model added to scene: {url}");
    }

    fn model_failed(&mut self, ticket: Ticket, reason: &str) {
        self.assets.fail(ticket, reason);
    }

    fn teardown(&mut self) {
        self.assets.reset();
    }
}
