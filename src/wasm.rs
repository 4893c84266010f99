//! WASM bindings for rendering detail views in the browser.

use wasm_bindgen::prelude::*;

use crate::export::Format;
use crate::locale::DisplayStrings;
use crate::model::EbookRecord;
use crate::page::render_detail as render_tree;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a record to the requested output format.
///
/// `record_json` is an ebook record as JSON, `locale` a language tag such as
/// `"en"`, and `format` one of `text`, `markdown`, `xhtml`, `json`.
#[wasm_bindgen(js_name = renderDetail)]
pub fn render_detail(record_json: &str, locale: &str, format: &str) -> Result<String, JsValue> {
    let to_js = |e: crate::Error| JsValue::from_str(&e.to_string());

    let record = EbookRecord::from_json_str(record_json).map_err(to_js)?;
    let strings = DisplayStrings::for_locale(locale).map_err(to_js)?;
    let format: Format = format.parse().map_err(to_js)?;

    format
        .export_to_string(&render_tree(&record, &strings))
        .map_err(to_js)
}
