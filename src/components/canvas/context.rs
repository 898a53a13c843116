//! Canvas 2D rendering context acquisition

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{UiError, UiResult};

/// Get the 2D rendering context from a canvas element
///
/// # Errors
///
/// Returns an error if the browser refuses the `"2d"` context, returns no
/// context object, or the object cannot be cast to
/// [`CanvasRenderingContext2d`].
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> UiResult<CanvasRenderingContext2d> {
    let context = canvas
        .get_context("2d")
        .map_err(|e| UiError::Context(format!("get_context failed: {e:?}")))?
        .ok_or_else(|| UiError::Context("context creation returned None".to_string()))?;

    context
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| UiError::Context("cast to CanvasRenderingContext2d failed".to_string()))
}
