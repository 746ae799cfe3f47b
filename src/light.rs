// light.rs - Scene lights and their small control surfaces

use glam::{Mat4, Vec3};

use crate::material::hex_to_rgb;
use crate::render::{Instance, Tag};
use crate::ui::LightKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightSource {
    Ambient,
    Hemisphere { ground: u32 },
    Point { distance: u32 },
    Spot { distance: u32 },
    Directional,
}

impl LightSource {
    pub fn code(self) -> f32 {
        match self {
            LightSource::Ambient => 0.0,
            LightSource::Hemisphere { .. } => 1.0,
            LightSource::Point { .. } => 2.0,
            LightSource::Spot { .. } => 3.0,
            LightSource::Directional => 4.0,
        }
    }

    /// Model light variants selectable from the UI
    pub fn from_kind(kind: LightKind) -> Self {
        match kind {
            LightKind::Point => LightSource::Point { distance: 10 },
            LightKind::Spot => LightSource::Spot { distance: 10 },
            LightKind::Directional => LightSource::Directional,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub id: u32,
    pub source: LightSource,
    pub color: u32,
    pub intensity: f32,
    pub position: Vec3,
    pub visible: bool,
    pub cast_shadow: bool,
}

impl Light {
    pub fn new(id: u32, source: LightSource, color: u32, intensity: f32) -> Self {
        Self {
            id,
            source,
            color,
            intensity,
            position: Vec3::ZERO,
            visible: true,
            cast_shadow: false,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn instance(&self) -> Instance {
        let extra = match self.source {
            LightSource::Hemisphere { ground } => ground as f32,
            LightSource::Point { distance } | LightSource::Spot { distance } => distance as f32,
            _ => 0.0,
        };
        Instance {
            tag: Tag::Light,
            id: self.id,
            visible: self.visible,
            material: self.source.code(),
            opacity: 1.0,
            color: hex_to_rgb(self.color),
            intensity: self.intensity,
            params: [extra, self.cast_shadow as u8 as f32, 0.0],
            matrix: Mat4::from_translation(self.position),
        }
    }
}

/// Stepped intensity with hard bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dial {
    pub value: f32,
    step: f32,
    min: f32,
    max: f32,
}

impl Dial {
    pub fn new(value: f32, step: f32, min: f32, max: f32) -> Self {
        let max = max.max(min);
        Self { value: value.max(min).min(max), step, min, max }
    }

    pub fn up(&mut self) -> f32 {
        self.value = (self.value + self.step).min(self.max);
        self.value
    }

    pub fn down(&mut self) -> f32 {
        self.value = (self.value - self.step).max(self.min);
        self.value
    }
}

/// Named colors stepped through by a single button
#[derive(Debug, Clone, Copy)]
pub struct ColorCycle {
    colors: &'static [(u32, &'static str)],
    index: usize,
}

impl ColorCycle {
    pub const fn new(colors: &'static [(u32, &'static str)]) -> Self {
        Self { colors, index: 0 }
    }

    pub fn current(&self) -> (u32, &'static str) {
        self.colors[self.index]
    }

    pub fn next(&mut self) -> (u32, &'static str) {
        self.index = (self.index + 1) % self.colors.len();
        self.current()
    }
}
