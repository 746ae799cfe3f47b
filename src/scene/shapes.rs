// shapes.rs - Three animated primitives and a particle burst
//
// Dodecahedron: spins on x/y, pulses scale, height and opacity.
// Extrusion:    spins on x, cycles hue.
// Tube:         spins on y, hops, pulses emissive intensity.

use std::rc::Rc;

use glam::{Mat4, Vec3};

use super::{FrameInput, Scene, SceneKind, Transform};
use crate::anim::{self, Burst, Direction, HueCycle, Speed, SPIN_STEP};
use crate::config::SceneConfig;
use crate::effect::{Effect, Effects};
use crate::error::Result;
use crate::light::{Light, LightSource};
use crate::material::{self, Material, MaterialTable, hex_to_rgb, hsl_to_rgb};
use crate::render::{Encoder, Instance, Tag};
use crate::ui::{Command, Label, Toggle};

const HUE_STEP: f32 = 0.005;
const CLOUD_SPREAD: f32 = 10.0;
const CLOUD_DEPTH: f32 = -8.0;

#[derive(Debug, Clone)]
struct Shape {
    id: u32,
    transform: Transform,
    textured: Rc<Material>,
    plain: Rc<Material>,
    opacity: f32,
    color: [f32; 3],
    emissive: f32,
    /// Inner/outer ring radius, only meaningful for the extrusion
    radii: [f32; 2],
}

impl Shape {
    fn new(id: u32, position: Vec3, textured: Rc<Material>, plain: Rc<Material>) -> Self {
        Self {
            id,
            transform: Transform::at(position),
            opacity: textured.opacity,
            color: hex_to_rgb(textured.color),
            emissive: textured.emissive_intensity,
            textured,
            plain,
            radii: [0.4, 0.6],
        }
    }

    fn instance(&self, textures: bool) -> Instance {
        let m = if textures { &self.textured } else { &self.plain };
        Instance {
            tag: Tag::Mesh,
            id: self.id,
            visible: true,
            material: m.id.0 as f32,
            opacity: self.opacity,
            color: self.color,
            intensity: self.emissive,
            params: [self.radii[0], self.radii[1], 0.0],
            matrix: self.transform.matrix(),
        }
    }
}

pub struct Shapes {
    materials: MaterialTable,

    rotation: Toggle,
    pulse: Toggle,
    color: Toggle,
    textures: Toggle,
    speed: Speed,
    direction: Direction,

    hue: HueCycle,
    burst: Burst,

    dodecahedron: Shape,
    extrusion: Shape,
    tube: Shape,

    cloud: Rc<Material>,
    cloud_positions: Vec<f32>,
    cloud_colors: Vec<f32>,

    lights: [Light; 3],
}

impl Shapes {
    pub fn new(config: &SceneConfig) -> Self {
        let mut materials = MaterialTable::new();

        let dodecahedron = Shape::new(
            0,
            Vec3::new(-2.0, 0.0, -5.0),
            materials.add(material::dodecahedron_textured()),
            materials.add(material::dodecahedron_plain()),
        );
        let extrusion = Shape::new(
            1,
            Vec3::new(0.0, 0.0, -5.0),
            materials.add(material::extrude_textured()),
            materials.add(material::extrude_plain()),
        );
        let tube = Shape::new(
            2,
            Vec3::new(2.0, 0.0, -5.0),
            materials.add(material::tube_textured()),
            materials.add(material::tube_plain()),
        );
        let cloud = materials.add(material::particles());

        let mut rng = config.seed;
        let n = config.particle_count;
        let mut cloud_positions = Vec::with_capacity(n * 3);
        let mut cloud_colors = Vec::with_capacity(n * 3);
        for _ in 0..n {
            cloud_positions.push((anim::rand(&mut rng) - 0.5) * CLOUD_SPREAD);
            cloud_positions.push((anim::rand(&mut rng) - 0.5) * CLOUD_SPREAD);
            cloud_positions.push((anim::rand(&mut rng) - 0.5) * CLOUD_SPREAD + CLOUD_DEPTH);
            for _ in 0..3 {
                cloud_colors.push(anim::rand(&mut rng));
            }
        }

        Self {
            materials,
            rotation: Toggle::new("toggleRotationBtn", "Disable Rotation", "Enable Rotation"),
            pulse: Toggle::new("togglePulseBtn", "Disable Pulse/Move", "Enable Pulse/Move"),
            color: Toggle::new("toggleColorBtn", "Disable Color/Emit", "Enable Color/Emit"),
            textures: Toggle::new("toggleTexturesBtn", "Disable Textures", "Enable Textures"),
            speed: Speed::Normal,
            direction: Direction::Forward,
            hue: HueCycle::new(),
            burst: Burst::new(),
            dodecahedron,
            extrusion,
            tube,
            cloud,
            cloud_positions,
            cloud_colors,
            lights: [
                Light::new(0, LightSource::Directional, 0xffffff, 4.0).at(Vec3::new(3.0, 3.0, 3.0)),
                Light::new(1, LightSource::Point { distance: 10 }, 0xffffff, 10.0)
                    .at(Vec3::new(-2.0, 2.0, 2.0)),
                Light::new(2, LightSource::Ambient, 0xffffff, 1.2),
            ],
        }
    }

    pub fn burst(&self) -> &Burst {
        &self.burst
    }

    pub fn hue(&self) -> f32 {
        self.hue.value()
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rotation_enabled(&self) -> bool {
        self.rotation.on
    }

    pub fn textures_enabled(&self) -> bool {
        self.textures.on
    }

    /// Current transforms of dodecahedron, extrusion and tube
    pub fn transforms(&self) -> [Transform; 3] {
        [self.dodecahedron.transform, self.extrusion.transform, self.tube.transform]
    }

    fn speed_label(&self) -> Label {
        Label::new("toggleSpeedBtn", format!("Speed: {}", self.speed.name()))
    }

    fn direction_label(&self) -> Label {
        let text = match self.direction {
            Direction::Forward => "Direction: Forward",
            Direction::Backward => "Direction: Backward",
        };
        Label::new("toggleDirectionBtn", text)
    }
}

impl Scene for Shapes {
    fn kind(&self) -> SceneKind {
        SceneKind::Shapes
    }

    fn start(&mut self, fx: &mut Effects) {
        for toggle in [&self.rotation, &self.pulse, &self.color, &self.textures] {
            fx.label(toggle.label());
        }
        fx.label(self.speed_label());
        fx.label(self.direction_label());
        fx.push(Effect::Particles {
            positions: self.cloud_positions.clone(),
            colors: self.cloud_colors.clone(),
        });
    }

    fn apply(&mut self, cmd: &Command, fx: &mut Effects) -> Result<()> {
        match cmd {
            Command::ToggleRotation => fx.label(self.rotation.flip()),
            Command::TogglePulse => fx.label(self.pulse.flip()),
            Command::ToggleColor => fx.label(self.color.flip()),
            Command::ToggleTextures => fx.label(self.textures.flip()),
            Command::ToggleSpeed => {
                self.speed = self.speed.toggled();
                fx.label(self.speed_label());
            }
            Command::ToggleDirection => {
                self.direction = self.direction.flipped();
                fx.label(self.direction_label());
            }
            Command::TriggerEffect => self.burst.trigger(),
            other => log::debug!("shapes: ignoring {other:?}"),
        }
        Ok(())
    }

    fn frame(&mut self, input: &FrameInput, _fx: &mut Effects) {
        let t = input.timestamp;
        let speed = self.speed.factor();
        let s = speed * self.burst.speed_factor();
        let delta = anim::spin(SPIN_STEP, s, self.direction);

        if self.rotation.on {
            self.dodecahedron.transform.euler.y -= delta;
            self.dodecahedron.transform.euler.x -= delta;
            self.extrusion.transform.euler.x -= delta;
            self.tube.transform.euler.y -= delta;
        }

        if self.pulse.on {
            let d = &mut self.dodecahedron;
            d.transform.scale = Vec3::splat(anim::pulse(1.0, 0.2, t, 0.002, s));
            d.transform.position.y = anim::pulse(0.0, 0.5, t, 0.002, s);
            d.opacity = anim::pulse(0.5, 0.2, t, 0.003, s);

            self.extrusion.radii = [
                anim::pulse(0.4, 0.1, t, 0.002, s),
                anim::pulse(0.6, 0.1, t, 0.002, s),
            ];

            self.tube.transform.position.y = anim::pulse(0.0, 1.0, t, 0.005, s).abs() * 0.5;
        }

        if self.color.on {
            let hue = self.hue.advance(HUE_STEP * s);
            self.extrusion.color = hsl_to_rgb(hue, 1.0, 0.5);
            self.tube.emissive = anim::pulse(1.5, 1.0, t, 0.003, s);
        }

        self.burst.tick(speed);
    }

    fn encode(&self, enc: &mut Encoder) {
        let textures = self.textures.on;
        enc.push(&self.dodecahedron.instance(textures));
        enc.push(&self.extrusion.instance(textures));
        enc.push(&self.tube.instance(textures));

        enc.push(&Instance {
            tag: Tag::Particles,
            id: 0,
            visible: self.burst.opacity > 0.0,
            material: self.cloud.id.0 as f32,
            opacity: self.burst.opacity,
            color: [1.0; 3],
            intensity: 1.0,
            params: [self.cloud_positions.len() as f32 / 3.0, 0.0, 0.0],
            matrix: Mat4::from_translation(Vec3::new(0.0, 0.0, self.burst.offset_z)),
        });

        for light in &self.lights {
            enc.push(&light.instance());
        }
    }

    fn materials(&mut self) -> &mut MaterialTable {
        &mut self.materials
    }
}
