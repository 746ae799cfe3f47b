// render.rs - Encode scene state to the shared output buffer
//
// Output encoding (read by the host through output_ptr/output_len as a
// Float32Array), RECORD_LEN floats per record:
//   [0]      tag (see Tag)
//   [1]      object id, unique per tag
//   [2]      visible (0/1)
//   [3]      material id (meshes) or light source code (lights)
//   [4]      opacity
//   [5..8]   rgb color in [0, 1]
//   [8]      intensity (emissive for meshes, light intensity for lights)
//   [9..12]  tag-specific params
//   [12..28] model matrix, column-major

use glam::Mat4;

pub const RECORD_LEN: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Mesh = 0,
    Reticle = 1,
    Light = 2,
    Particles = 3,
    /// One record per mesh of a loaded model; params[0] is the mesh index
    ModelMesh = 4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub tag: Tag,
    pub id: u32,
    pub visible: bool,
    pub material: f32,
    pub opacity: f32,
    pub color: [f32; 3],
    pub intensity: f32,
    pub params: [f32; 3],
    pub matrix: Mat4,
}

pub struct Encoder {
    out: Vec<f32>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { out: Vec::with_capacity(RECORD_LEN * 64) }
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn records(&self) -> usize {
        self.out.len() / RECORD_LEN
    }

    pub fn record(&self, i: usize) -> Option<&[f32]> {
        self.out.get(i * RECORD_LEN..(i + 1) * RECORD_LEN)
    }

    pub fn push(&mut self, inst: &Instance) {
        self.out.extend_from_slice(&[
            inst.tag as u8 as f32,
            inst.id as f32,
            if inst.visible { 1.0 } else { 0.0 },
            inst.material,
            inst.opacity,
            inst.color[0],
            inst.color[1],
            inst.color[2],
            inst.intensity,
            inst.params[0],
            inst.params[1],
            inst.params[2],
        ]);
        self.out.extend_from_slice(&inst.matrix.to_cols_array());
    }
}
