// presets.rs - Named materials used across the scenes

use super::{Material, MaterialKind};

pub const METAL_TEXTURE_URL: &str = "https://images.unsplash.com/photo-1659776026027-6b0f66d92675?q=80&w=1527&auto=format&fit=crop";
pub const GLASS_TEXTURE_URL: &str = "https://as1.ftcdn.net/v2/jpg/01/61/23/82/1000_F_161238202_GbkRIC1lSjG7lZCLLPfQ7wAaEQyw9UsG.jpg";
pub const FUTURISTIC_TEXTURE_URL: &str = "https://images.unsplash.com/photo-1617864323755-662e612eb00a?q=80&w=1374&auto=format&fit=crop";

pub fn gold() -> Material {
    Material::new("gold", MaterialKind::Standard).color(0xffd700).metal(1.0, 0.1)
}

/// Slightly rougher gold used by the planets scene
pub fn planet_gold() -> Material {
    Material::new("gold", MaterialKind::Standard).color(0xffd700).metal(0.9, 0.1)
}

pub fn silver() -> Material {
    Material::new("silver", MaterialKind::Standard).color(0xc0c0c0).metal(1.0, 0.2)
}

pub fn emerald() -> Material {
    Material::new("emerald", MaterialKind::Standard).color(0x50c878).metal(0.3, 0.5)
}

pub fn glass() -> Material {
    Material::new("glass", MaterialKind::Physical)
        .color(0x88ccff)
        .translucent(0.7)
        .metal(0.1, 0.0)
        .transmission(0.9, 0.0)
}

pub fn clear_glass() -> Material {
    Material::new("glass", MaterialKind::Physical)
        .translucent(0.5)
        .metal(0.2, 0.05)
        .transmission(0.9, 0.5)
}

pub fn glow() -> Material {
    Material::new("glow", MaterialKind::Standard)
        .color(0x00ff00)
        .emissive(0x00ff00, 1.5)
        .metal(0.3, 0.3)
}

pub fn chrome() -> Material {
    Material::new("chrome", MaterialKind::Standard).color(0xffffff).metal(1.0, 0.02)
}

// Gem cycle: Metallic -> Glass -> Emissive

pub fn gem_metallic() -> Material {
    Material::new("Metallic", MaterialKind::Physical)
        .color(0x00ff00)
        .metal(0.5, 0.3)
        .clearcoat(1.0)
}

pub fn gem_glass() -> Material {
    Material::new("Glass", MaterialKind::Physical)
        .color(0x00ff00)
        .translucent(0.5)
        .metal(0.1, 0.1)
        .transmission(0.9, 0.5)
}

pub fn gem_emissive() -> Material {
    Material::new("Emissive", MaterialKind::Standard)
        .color(0x00ff00)
        .emissive(0x00ff00, 2.0)
        .metal(0.2, 0.5)
}

// Shapes scene: textured originals and their untextured alternates

pub fn dodecahedron_textured() -> Material {
    Material::new("dodecahedron", MaterialKind::Physical)
        .texture(METAL_TEXTURE_URL)
        .metal(0.9, 0.5)
        .transmission(0.6, 0.0)
}

pub fn dodecahedron_plain() -> Material {
    Material::new("dodecahedron-plain", MaterialKind::Physical)
        .color(0x508194)
        .translucent(0.7)
        .metal(0.3, 0.5)
        .transmission(0.6, 0.0)
}

pub fn extrude_textured() -> Material {
    Material::new("extrude", MaterialKind::Standard)
        .texture(GLASS_TEXTURE_URL)
        .metal(0.9, 0.2)
}

pub fn extrude_plain() -> Material {
    Material::new("extrude-plain", MaterialKind::Standard).color(0x370852).metal(0.8, 1.0)
}

pub fn tube_textured() -> Material {
    Material::new("tube", MaterialKind::Standard)
        .texture(FUTURISTIC_TEXTURE_URL)
        .metal(0.9, 0.4)
}

pub fn tube_plain() -> Material {
    Material::new("tube-plain", MaterialKind::Standard)
        .emissive(0x000000, 1.5)
        .metal(0.5, 0.4)
}

pub fn particles() -> Material {
    let mut m = Material::new("particles", MaterialKind::Points).translucent(0.0);
    m.roughness = 0.0;
    m
}

pub fn reticle_ring() -> Material {
    Material::new("reticle", MaterialKind::Basic)
}
