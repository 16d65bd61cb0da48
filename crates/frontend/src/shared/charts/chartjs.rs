//! Chart.js backend: binds the global `Chart` constructor the host page
//! loads from CDN.

use super::registry::ChartBackend;
use super::ChartSpec;
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance.
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> JsChart;

    /// Releases the canvas drawing context and all engine-internal state.
    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

/// The real drawing backend. Charts mount on `<canvas>` elements looked up
/// by id in the page document.
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    type Handle = JsChart;

    fn create(&self, mount_id: &str, spec: &ChartSpec) -> Result<JsChart, String> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "document not available".to_string())?;
        let canvas = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| format!("chart mount point not found: {}", mount_id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("chart mount point is not a canvas: {}", mount_id))?;

        let config = build_config(spec).map_err(|err| format!("chart config error: {:?}", err))?;
        Ok(JsChart::new(&canvas, &config))
    }

    fn destroy(&self, chart: JsChart) {
        chart.destroy();
    }
}

fn build_config(spec: &ChartSpec) -> Result<JsValue, JsValue> {
    let config = spec
        .to_config()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    if spec.grouped_value_axis {
        attach_tick_formatter(&config)?;
    }
    Ok(config)
}

/// Tick callbacks are JS functions and cannot travel through JSON, so the
/// id-ID formatter is patched onto `options.scales.y.ticks` after conversion.
fn attach_tick_formatter(config: &JsValue) -> Result<(), JsValue> {
    let options = Reflect::get(config, &JsValue::from_str("options"))?;
    let scales = Reflect::get(&options, &JsValue::from_str("scales"))?;
    let y_axis = Reflect::get(&scales, &JsValue::from_str("y"))?;
    let ticks = Reflect::get(&y_axis, &JsValue::from_str("ticks"))?;

    let formatter = Function::new_with_args("value", "return value.toLocaleString('id-ID');");
    Reflect::set(&ticks, &JsValue::from_str("callback"), &formatter)?;
    Ok(())
}
