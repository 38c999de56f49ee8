//! WASM bindings for browser-side rendering.
//!
//! This module exposes JSON-in, HTML-out rendering to JavaScript via
//! wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{Document, HtmlFlags, RenderOptions, render_html};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a JSON document tree to HTML.
///
/// `flags` is the bit value of [`HtmlFlags`]; unknown bits are ignored.
#[wasm_bindgen]
pub fn render_json(json: &str, flags: u32, toc_nesting_level: u8) -> Result<String, JsValue> {
    let doc = Document::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = RenderOptions::new()
        .with_flags(HtmlFlags::from_bits_truncate(flags))
        .with_toc_nesting_level(toc_nesting_level);

    Ok(render_html(&doc, options))
}
