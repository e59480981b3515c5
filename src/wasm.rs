use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn render_paper_form(json: &str) -> Result<Vec<u8>, JsValue> {
    crate::render_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn paper_form_data_uri(json: &str) -> Result<String, JsValue> {
    let config = crate::FormConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    crate::render_data_uri(&config).map_err(|e| JsValue::from_str(&e.to_string()))
}
