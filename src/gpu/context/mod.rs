// WebGL Context Management
// Acquires the WebGL 1 rendering context from the game canvas
// Main responsibilities:
// - Ask the canvas for a `webgl` context
// - Report unsupported browsers without panicking

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

use crate::error::GfxError;

pub struct GlContext {
    pub canvas: HtmlCanvasElement,
    pub gl: WebGlRenderingContext,
}

impl GlContext {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, GfxError> {
        let gl = canvas
            .get_context("webgl")?
            .ok_or(GfxError::ContextUnavailable)?
            .dyn_into::<WebGlRenderingContext>()
            .map_err(|_| GfxError::ContextUnavailable)?;

        Ok(Self {
            canvas: canvas.clone(),
            gl,
        })
    }
}

/// Best-effort context acquisition: logs and yields `None` when the browser
/// cannot provide WebGL.
pub fn init_context(canvas: &HtmlCanvasElement) -> Option<GlContext> {
    match GlContext::new(canvas) {
        Ok(context) => Some(context),
        Err(e) => {
            log::error!("Unable to initialize WebGL ({e}). Your browser may not support it.");
            None
        }
    }
}
