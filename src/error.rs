// error.rs - Crate error type
//
// Errors cross the wasm boundary as js_sys::Error (see lib.rs).

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("hit-test capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("failed to load asset {url}: {reason}")]
    AssetLoad { url: String, reason: String },

    #[error("unknown scene: {0}")]
    UnknownScene(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid value for {command}: {value}")]
    InvalidCommand { command: String, value: String },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to encode effects: {0}")]
    Encode(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
