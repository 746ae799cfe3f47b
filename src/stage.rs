// stage.rs - Drives one scene: session lifecycle, commands, frames, output
//
// Call order per display frame: frame() then read the instance buffer and
// drain effects. Commands, selects and async completions may arrive at any
// point between frames.

use crate::assets::Ticket;
use crate::config::SceneConfig;
use crate::effect::{Effect, Effects};
use crate::error::{Error, Result};
use crate::render::Encoder;
use crate::scene::{FrameInput, Scene, SceneKind};
use crate::track::{HitTestSource, TrackerState, poses_from_slice};
use crate::ui::Command;

pub struct Stage {
    scene: Box<dyn Scene>,
    effects: Effects,
    encoder: Encoder,
}

impl Stage {
    pub fn new(kind: SceneKind, config: &SceneConfig) -> Self {
        let mut scene = kind.build(config);
        let mut effects = Effects::new();
        scene.start(&mut effects);

        let mut stage = Self { scene, effects, encoder: Encoder::new() };
        stage.flush_materials();
        stage.encode();
        log::info!("{kind:?} scene ready");
        stage
    }

    pub fn session_started(&mut self) {
        self.effects.push(Effect::ControlsVisible { visible: true });
    }

    pub fn session_ended(&mut self) {
        self.scene.session_ended();
        self.encode();
        self.effects.push(Effect::ControlsVisible { visible: false });
    }

    /// Host acquired the hit-test source for `epoch`
    pub fn hit_test_ready(&mut self, epoch: u32, source: u32) -> Result<()> {
        match self.scene.tracker() {
            Some(tracker) => tracker.complete(epoch, Ok(HitTestSource(source))),
            None => Ok(()),
        }
    }

    /// Host could not acquire a hit-test source. Reported once per session.
    pub fn hit_test_failed(&mut self, epoch: u32, reason: &str) -> Result<()> {
        match self.scene.tracker() {
            Some(tracker) => {
                tracker.complete(epoch, Err(Error::CapabilityUnavailable(reason.to_string())))
            }
            None => Ok(()),
        }
    }

    pub fn tracker_state(&mut self) -> Option<TrackerState> {
        self.scene.tracker().map(|t| t.state())
    }

    pub fn command(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        let cmd = Command::parse(name, value)?;
        self.apply(&cmd)
    }

    pub fn apply(&mut self, cmd: &Command) -> Result<()> {
        self.scene.apply(cmd, &mut self.effects)?;
        self.flush_materials();
        self.encode();
        Ok(())
    }

    pub fn select(&mut self) {
        self.scene.select(&mut self.effects);
        self.flush_materials();
        self.encode();
    }

    /// `hits` holds column-major 4x4 poses back to back, nearest first
    pub fn frame(&mut self, timestamp: f64, xr: bool, hits: &[f32]) {
        let input = FrameInput { timestamp, xr, hits: poses_from_slice(hits) };
        self.scene.frame(&input, &mut self.effects);
        self.flush_materials();
        self.encode();
    }

    pub fn model_loaded(&mut self, ticket: Ticket, mesh_count: usize) {
        self.scene.model_loaded(ticket, mesh_count, &mut self.effects);
        self.flush_materials();
        self.encode();
    }

    pub fn model_failed(&mut self, ticket: Ticket, reason: &str) {
        self.scene.model_failed(ticket, reason);
    }

    /// Scene is going away; anything still in flight is dropped on arrival
    pub fn teardown(&mut self) {
        self.scene.teardown();
        self.scene.session_ended();
        self.encode();
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain()
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    fn flush_materials(&mut self) {
        for m in self.scene.materials().drain_pending() {
            self.effects.push(Effect::DefineMaterial { material: (*m).clone() });
        }
    }

    fn encode(&mut self) {
        self.encoder.clear();
        self.scene.encode(&mut self.encoder);
    }
}
