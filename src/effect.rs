// effect.rs - Side effects queued for the host
//
// Drained once per frame (or after any call) as JSON. The host applies them
// in order: DOM captions, audio, fetches, renderer material creation.

use serde::Serialize;

use crate::assets::Ticket;
use crate::material::Material;
use crate::ui::Label;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Set textContent (buttons) or value (selects) of an element
    Label(Label),
    /// Set background color of a swatch element
    Swatch { target: &'static str, color: String },
    ControlsVisible { visible: bool },
    /// Rewind and play an <audio> element
    PlaySound { target: &'static str },
    /// Fetch a glTF scene and report back with the ticket
    LoadModel { ticket: Ticket, url: String },
    /// Acquire viewer space, hit-test source and local space
    RequestHitTest { epoch: u32 },
    DefineMaterial { material: Material },
    /// Static point cloud, xyz and rgb triplets
    Particles { positions: Vec<f32>, colors: Vec<f32> },
}

#[derive(Debug, Default)]
pub struct Effects {
    queue: Vec<Effect>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        self.queue.push(effect);
    }

    pub fn label(&mut self, label: Label) {
        self.queue.push(Effect::Label(label));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.queue)
    }
}
