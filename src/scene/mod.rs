// scene/ - The four demo scenes
//
// Each scene owns its toggle state, materials and live objects, and is
// driven through the Scene trait by the Stage.

mod gems;
mod planets;
mod shapes;
mod viewer;

pub use gems::{Gem, Gems};
pub use planets::{Planet, Planets};
pub use shapes::Shapes;
pub use viewer::Viewer;

use std::str::FromStr;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::assets::Ticket;
use crate::config::SceneConfig;
use crate::effect::Effects;
use crate::error::{Error, Result};
use crate::material::MaterialTable;
use crate::render::Encoder;
use crate::track::SurfaceTracker;
use crate::ui::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Animated primitive shapes with a particle burst
    Shapes,
    /// Single loaded model with material and light controls
    Viewer,
    /// Tap-to-place gems on detected surfaces
    Gems,
    /// Tap-to-place loaded models on detected surfaces
    Planets,
}

impl FromStr for SceneKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shapes" | "task1" => Ok(SceneKind::Shapes),
            "viewer" | "task2" => Ok(SceneKind::Viewer),
            "gems" | "task3" => Ok(SceneKind::Gems),
            "planets" | "task4" => Ok(SceneKind::Planets),
            other => Err(Error::UnknownScene(other.to_string())),
        }
    }
}

impl SceneKind {
    pub fn build(self, config: &SceneConfig) -> Box<dyn Scene> {
        match self {
            SceneKind::Shapes => Box::new(Shapes::new(config)),
            SceneKind::Viewer => Box::new(Viewer::new(config)),
            SceneKind::Gems => Box::new(Gems::new(config)),
            SceneKind::Planets => Box::new(Planets::new(config)),
        }
    }
}

/// One display frame as seen by a scene
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Absolute clock in milliseconds
    pub timestamp: f64,
    /// An XRFrame accompanied this callback
    pub xr: bool,
    /// Hit poses for this frame, nearest first
    pub hits: Vec<Mat4>,
}

/// Position, orientation and scale. Spin angles accumulate in `euler` on
/// top of the orientation the object was created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub base: Quat,
    pub euler: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            base: Quat::IDENTITY,
            euler: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    pub fn placed(position: Vec3, base: Quat, scale: f32) -> Self {
        Self { position, base, euler: Vec3::ZERO, scale: Vec3::splat(scale) }
    }

    pub fn rotation(&self) -> Quat {
        self.base * Quat::from_euler(EulerRot::XYZ, self.euler.x, self.euler.y, self.euler.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation(), self.position)
    }
}

pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Initial captions, static content and asset requests
    fn start(&mut self, fx: &mut Effects);

    fn apply(&mut self, cmd: &Command, fx: &mut Effects) -> Result<()>;

    fn frame(&mut self, input: &FrameInput, fx: &mut Effects);

    fn encode(&self, enc: &mut Encoder);

    fn materials(&mut self) -> &mut MaterialTable;

    /// XR controller "select"
    fn select(&mut self, _fx: &mut Effects) {}

    fn tracker(&mut self) -> Option<&mut SurfaceTracker> {
        None
    }

    /// XR session ended: drop the hit-test source and hide the reticle
    fn session_ended(&mut self) {}

    fn model_loaded(&mut self, ticket: Ticket, _mesh_count: usize, _fx: &mut Effects) {
        log::debug!("scene has no pending models, ignoring {ticket:?}");
    }

    fn model_failed(&mut self, ticket: Ticket, reason: &str) {
        log::debug!("scene has no pending models, ignoring {ticket:?}: {reason}");
    }

    /// Forget in-flight work; late completions become no-ops
    fn teardown(&mut self) {}
}

/// Begin tracker init on the first XR frame and apply this frame's hits
pub(crate) fn track(
    tracker: &mut SurfaceTracker,
    reticle: &mut crate::track::Reticle,
    input: &FrameInput,
    fx: &mut Effects,
) {
    if let Some(req) = tracker.begin() {
        fx.push(crate::effect::Effect::RequestHitTest { epoch: req.epoch });
    }
    tracker.update(&input.hits, reticle);
}
