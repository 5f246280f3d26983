use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::gpu::backend::ShaderStage;

/// Failures while bringing up or driving the WebGL pipeline.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("WebGL context unavailable")]
    ContextUnavailable,

    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("failed to link shader program: {log}")]
    ProgramLink { log: String },

    #[error("failed to create {0}")]
    ResourceCreation(&'static str),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GfxError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

/// Failures while reading user-facing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown game mode `{0}` (expected `endless` or `money`)")]
    UnknownMode(String),
}
