// reticle.rs - Placement indicator

use glam::{Mat4, Quat, Vec3};

/// Created once per scene and hidden, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reticle {
    pub matrix: Mat4,
    pub visible: bool,
    pub opacity: f32,
    pub color: [f32; 3],
}

impl Default for Reticle {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
            visible: false,
            opacity: 1.0,
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl Reticle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(opacity: f32, color: [f32; 3]) -> Self {
        Self { opacity, color, ..Self::default() }
    }

    /// Position and orientation of the current pose, scale dropped
    pub fn placement(&self) -> (Vec3, Quat) {
        let (_, rotation, translation) = self.matrix.to_scale_rotation_translation();
        (translation, rotation)
    }
}
