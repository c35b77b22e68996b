use descendants_chart_geometry::{OrientationKind, RenderOptions, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartRenderOptions {
    theme: Option<String>,
    orientation: Option<String>,
    corner_radius: Option<f32>,
    line_color: Option<String>,
}

fn build_render_options(options: ChartRenderOptions) -> Result<RenderOptions, String> {
    let mut render_options = if options.theme.as_deref() == Some("modern") {
        RenderOptions::modern()
    } else {
        RenderOptions::classic()
    };

    if let Some(name) = options.orientation {
        let kind = OrientationKind::from_token(&name)
            .ok_or_else(|| format!("Unknown orientation: {name}"))?;
        render_options.orientation = Some(kind);
    }
    if let Some(radius) = options.corner_radius {
        render_options.geometry.corner_radius = radius;
    }
    if let Some(color) = options.line_color {
        render_options.theme.line_color = color;
    }

    Ok(render_options)
}

#[wasm_bindgen]
pub fn render_chart_svg(chart: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<ChartRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        ChartRenderOptions::default()
    };

    let render_options = build_render_options(options).map_err(|error| JsValue::from_str(&error))?;
    render_with_options(chart, render_options).map_err(|error| JsValue::from_str(&format!("{error:#}")))
}
