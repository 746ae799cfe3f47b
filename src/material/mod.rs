// material/ - Material descriptions, palettes and switching
//
// Materials are plain descriptions. The host builds one renderer material
// per id the first time it sees a definition effect for it. Identity is the
// Rc: switching back to an original hands out the very same allocation.

mod presets;
mod switch;

pub use presets::*;
pub use switch::{MaterialChoice, ModelMaterials, Palette, Swatch};

use std::rc::Rc;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MaterialId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Basic,
    Standard,
    Physical,
    Points,
    /// Whatever the model file shipped with; the host owns the details
    Imported,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub kind: MaterialKind,
    pub color: u32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub transmission: f32,
    pub thickness: f32,
    pub clearcoat: f32,
    pub texture: Option<String>,
}

impl Material {
    pub fn new(name: &str, kind: MaterialKind) -> Self {
        Self {
            id: MaterialId(0),
            name: name.to_string(),
            kind,
            color: 0xffffff,
            emissive: 0x000000,
            emissive_intensity: 1.0,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
            transparent: false,
            transmission: 0.0,
            thickness: 0.0,
            clearcoat: 0.0,
            texture: None,
        }
    }

    pub fn color(mut self, hex: u32) -> Self { self.color = hex; self }
    pub fn emissive(mut self, hex: u32, intensity: f32) -> Self {
        self.emissive = hex;
        self.emissive_intensity = intensity;
        self
    }
    pub fn metal(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }
    pub fn translucent(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }
    pub fn transmission(mut self, transmission: f32, thickness: f32) -> Self {
        self.transmission = transmission;
        self.thickness = thickness;
        self
    }
    pub fn clearcoat(mut self, clearcoat: f32) -> Self { self.clearcoat = clearcoat; self }
    pub fn texture(mut self, url: &str) -> Self { self.texture = Some(url.to_string()); self }
}

/// Hands out ids and remembers which definitions the host has not seen yet
#[derive(Debug, Default)]
pub struct MaterialTable {
    next: u32,
    pending: Vec<Rc<Material>>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mut material: Material) -> Rc<Material> {
        material.id = MaterialId(self.next);
        self.next += 1;
        let material = Rc::new(material);
        self.pending.push(Rc::clone(&material));
        material
    }

    /// Placeholder for a material that came with a loaded model
    pub fn imported(&mut self, model: u32, mesh: usize) -> Rc<Material> {
        self.add(Material::new(&format!("model{model}/mesh{mesh}"), MaterialKind::Imported))
    }

    pub fn drain_pending(&mut self) -> Vec<Rc<Material>> {
        std::mem::take(&mut self.pending)
    }
}

/// `0xRRGGBB` to linear-ish `[r, g, b]` in `[0, 1]`
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// CSS-style `#rrggbb`
pub fn hex_string(hex: u32) -> String {
    format!("#{:06x}", hex & 0xffffff)
}

/// Parse `#rrggbb`, `0xrrggbb` or bare hex
pub fn parse_hex(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).ok().map(|v| v & 0xffffff)
}

/// HSL (all in `[0, 1]`) to `[r, g, b]`
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }
    if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
    if t < 0.5 { return q; }
    if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
    p
}
