use wasm_bindgen::prelude::*;

// ============================================================================
// AR SCENES - State and per-frame logic for the WebXR demo scenes
// ============================================================================
//
// The JS host owns the XR session, three.js and the DOM. Per frame it calls
// `frame()`, reads RECORD_LEN-float records from `output_ptr()` and applies
// the JSON effects returned by `effects()`.

pub mod anim;
pub mod assets;
pub mod config;
pub mod effect;
pub mod error;
pub mod light;
pub mod material;
pub mod render;
pub mod scene;
pub mod stage;
pub mod track;
pub mod ui;

pub use config::SceneConfig;
pub use error::{Error, Result};
pub use scene::SceneKind;
pub use stage::Stage;

use assets::Ticket;

/// Install the panic hook and console logger. Call once before anything else.
#[wasm_bindgen]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
    }
}

#[wasm_bindgen]
pub fn record_len() -> usize {
    render::RECORD_LEN
}

fn js_err(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
pub struct ArStage {
    stage: Stage,
}

#[wasm_bindgen]
impl ArStage {
    /// `scene` is one of shapes/viewer/gems/planets (or task1..task4)
    #[wasm_bindgen(constructor)]
    pub fn new(scene: &str, config: Option<String>) -> std::result::Result<ArStage, JsValue> {
        let kind: SceneKind = scene.parse().map_err(js_err)?;
        let config = match config {
            Some(json) => SceneConfig::from_json(&json).map_err(js_err)?,
            None => SceneConfig::default(),
        };
        Ok(Self { stage: Stage::new(kind, &config) })
    }

    pub fn session_started(&mut self) {
        self.stage.session_started();
    }

    pub fn session_ended(&mut self) {
        self.stage.session_ended();
    }

    pub fn hit_test_ready(&mut self, epoch: u32, source: u32) -> std::result::Result<(), JsValue> {
        self.stage.hit_test_ready(epoch, source).map_err(js_err)
    }

    pub fn hit_test_failed(&mut self, epoch: u32, reason: &str) -> std::result::Result<(), JsValue> {
        self.stage.hit_test_failed(epoch, reason).map_err(js_err)
    }

    pub fn command(&mut self, name: &str, value: Option<String>) -> std::result::Result<(), JsValue> {
        self.stage.command(name, value.as_deref()).map_err(js_err)
    }

    pub fn select(&mut self) {
        self.stage.select();
    }

    pub fn frame(&mut self, timestamp: f64, xr: bool, hits: &[f32]) {
        self.stage.frame(timestamp, xr, hits);
    }

    pub fn model_loaded(&mut self, ticket: u32, epoch: u32, mesh_count: u32) {
        self.stage.model_loaded(Ticket { id: ticket, epoch }, mesh_count as usize);
    }

    pub fn model_failed(&mut self, ticket: u32, epoch: u32, reason: &str) {
        self.stage.model_failed(Ticket { id: ticket, epoch }, reason);
    }

    pub fn teardown(&mut self) {
        self.stage.teardown();
    }

    /// Pending effects as a JSON array; the queue is emptied
    pub fn effects(&mut self) -> std::result::Result<String, JsValue> {
        let effects = self.stage.drain_effects();
        serde_json::to_string(&effects).map_err(|e| js_err(Error::Encode(e)))
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const f32 { self.stage.encoder().ptr() }
    pub fn output_len(&self) -> usize { self.stage.encoder().len() }
    pub fn records(&self) -> usize { self.stage.encoder().records() }
}
