use crate::orientation::OrientationKind;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Constants shared by the image box and connector computations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometryConfig {
    /// Reference box height of the sideways layouts; sizes the portrait.
    pub fixed_node_height: f32,
    pub sideways_image_padding: (f32, f32),
    pub vertical_image_padding: (f32, f32),
    /// Step between stacked partnership lines of one person.
    pub spouse_line_offset: f32,
    /// Gap left between a spouse line and an intermediate box.
    pub line_start_offset: f32,
    pub corner_radius: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            fixed_node_height: 80.0,
            sideways_image_padding: (5.0, 5.0),
            vertical_image_padding: (5.0, 10.0),
            spouse_line_offset: 5.0,
            line_start_offset: 2.0,
            corner_radius: 20.0,
        }
    }
}

impl GeometryConfig {
    /// `(padding_x, padding_y)` of the portrait for the given layout.
    pub fn image_padding(&self, kind: OrientationKind) -> (f32, f32) {
        if kind.is_sideways() {
            self.sideways_image_padding
        } else {
            self.vertical_image_padding
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Size of the SVG root. `None` keeps the chart's natural size (bounds
    /// plus margin); the viewBox is unaffected, so the chart is scaled.
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub background: String,
    /// Space around the chart bounds in the SVG viewBox.
    pub margin: f32,
    pub link_stroke_width: f32,
    pub box_stroke_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: "#FFFFFF".to_string(),
            margin: 20.0,
            link_stroke_width: 1.5,
            box_stroke_width: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub geometry: GeometryConfig,
    pub render: RenderConfig,
    /// Forces every chart into this layout, replacing the one it declares.
    pub orientation: Option<OrientationKind>,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            geometry: GeometryConfig::default(),
            render,
            orientation: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ThemeVariables {
    box_fill: Option<String>,
    box_stroke: Option<String>,
    placeholder_stroke: Option<String>,
    line_color: Option<String>,
    image_fill: Option<String>,
    image_stroke: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GeometryConfigFile {
    fixed_node_height: Option<f32>,
    sideways_image_padding: Option<(f32, f32)>,
    vertical_image_padding: Option<(f32, f32)>,
    spouse_line_offset: Option<f32>,
    line_start_offset: Option<f32>,
    corner_radius: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    margin: Option<f32>,
    link_stroke_width: Option<f32>,
    box_stroke_width: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    geometry: Option<GeometryConfigFile>,
    render: Option<RenderConfigFile>,
    orientation: Option<OrientationKind>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match theme_name {
            "modern" => config.theme = Theme::modern(),
            "classic" | "default" => config.theme = Theme::classic(),
            other => return Err(anyhow::anyhow!("Unknown theme: {other}")),
        }
        config.render.background = config.theme.background.clone();
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.box_fill {
            config.theme.box_fill = v;
        }
        if let Some(v) = vars.box_stroke {
            config.theme.box_stroke = v;
        }
        if let Some(v) = vars.placeholder_stroke {
            config.theme.placeholder_stroke = v;
        }
        if let Some(v) = vars.line_color {
            config.theme.line_color = v;
        }
        if let Some(v) = vars.image_fill {
            config.theme.image_fill = v;
        }
        if let Some(v) = vars.image_stroke {
            config.theme.image_stroke = v;
        }
        if let Some(v) = vars.background {
            config.render.background = v.clone();
            config.theme.background = v;
        }
    }

    if let Some(geometry) = parsed.geometry {
        if let Some(v) = geometry.fixed_node_height {
            config.geometry.fixed_node_height = v;
        }
        if let Some(v) = geometry.sideways_image_padding {
            config.geometry.sideways_image_padding = v;
        }
        if let Some(v) = geometry.vertical_image_padding {
            config.geometry.vertical_image_padding = v;
        }
        if let Some(v) = geometry.spouse_line_offset {
            config.geometry.spouse_line_offset = v;
        }
        if let Some(v) = geometry.line_start_offset {
            config.geometry.line_start_offset = v;
        }
        if let Some(v) = geometry.corner_radius {
            config.geometry.corner_radius = v;
        }
    }

    if let Some(render) = parsed.render {
        if render.width.is_some() {
            config.render.width = render.width;
        }
        if render.height.is_some() {
            config.render.height = render.height;
        }
        if let Some(v) = render.margin {
            config.render.margin = v;
        }
        if let Some(v) = render.link_stroke_width {
            config.render.link_stroke_width = v;
        }
        if let Some(v) = render.box_stroke_width {
            config.render.box_stroke_width = v;
        }
    }

    if parsed.orientation.is_some() {
        config.orientation = parsed.orientation;
    }

    Ok(config)
}
