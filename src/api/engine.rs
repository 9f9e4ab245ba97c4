//! Layout entry points
//!
//! `run_layout` is the native entry point. `AutoplaceEngine` wraps it for
//! JavaScript: the host keeps one engine, sets the style once and sends one
//! system at a time.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, js_error, serialize};
use super::types::LayoutOutput;
use crate::layout::SystemLayout;
use crate::models::{Fingering, Score};
use crate::style::StyleConfig;
use crate::text::ApproximateMetrics;

/// Lay out every fingering of one system and build its display list
pub fn run_layout(style: &StyleConfig, score: &Score, mut fingerings: Vec<Fingering>) -> LayoutOutput {
    let metrics = ApproximateMetrics;
    let layout = SystemLayout::new(score, style, &metrics);
    layout.run(&mut fingerings);
    let display = layout.display_list(&fingerings);
    LayoutOutput { fingerings, display }
}

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct AutoplaceEngine {
    style: StyleConfig,
}

#[wasm_bindgen]
impl AutoplaceEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AutoplaceEngine {
        AutoplaceEngine::default()
    }

    /// Replace the style from a JS object; missing fields take defaults
    #[wasm_bindgen(js_name = setStyle)]
    pub fn set_style(&mut self, style_js: &JsValue) -> Result<(), JsValue> {
        let style: StyleConfig = deserialize(style_js, "Style deserialization error")?;
        style.validate().map_err(|e| js_error(e.to_string()))?;
        self.style = style;
        Ok(())
    }

    /// Replace the style from YAML source
    #[wasm_bindgen(js_name = setStyleYaml)]
    pub fn set_style_yaml(&mut self, source: &str) -> Result<(), JsValue> {
        self.style = StyleConfig::from_yaml_str(source).map_err(|e| js_error(e.to_string()))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getSpatium)]
    pub fn spatium(&self) -> f32 {
        self.style.spatium
    }

    /// Lay out one system
    ///
    /// # Parameters
    /// * `score_js` - `Score` geometry of the system
    /// * `fingerings_js` - array of `Fingering`
    ///
    /// # Returns
    /// `LayoutOutput` with updated fingerings and the display list
    #[wasm_bindgen(js_name = layoutSystem)]
    pub fn layout_system(&self, score_js: &JsValue, fingerings_js: &JsValue) -> Result<JsValue, JsValue> {
        let score: Score = deserialize(score_js, "Score deserialization error")?;
        let fingerings: Vec<Fingering> = deserialize(fingerings_js, "Fingering deserialization error")?;

        log::debug!("layoutSystem: {} staves, {} fingerings", score.staves.len(), fingerings.len());
        let output = run_layout(&self.style, &score, fingerings);
        serialize(&output, "Layout serialization error")
    }
}

impl AutoplaceEngine {
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}
