#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod geometry_dump;
pub mod ir;
pub mod orientation;
pub mod parser;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, GeometryConfig, RenderConfig, load_config};
pub use geometry::{
    ChartGeometry, GeometryError, ImageBox, LinkDatum, LinkSource, Path, Point,
    compute_chart_geometry, connector_path,
};
pub use ir::{Chart, ChartLink, Person, PersonNode};
pub use orientation::{Orientation, OrientationKind};
pub use parser::parse_chart;
pub use render::render_svg;
pub use theme::Theme;

/// Everything needed to turn a chart description into SVG.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub geometry: GeometryConfig,
    pub render: RenderConfig,
    /// Replaces the orientation declared by the chart.
    pub orientation: Option<OrientationKind>,
}

impl RenderOptions {
    pub fn classic() -> Self {
        let config = Config::default();
        Self {
            theme: config.theme,
            geometry: config.geometry,
            render: config.render,
            orientation: None,
        }
    }

    pub fn modern() -> Self {
        let theme = Theme::modern();
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

impl Default for RenderOptions {
    fn default() -> Self {
        Self::classic()
    }
}

/// Parses `input`, computes its geometry and renders it as SVG.
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let mut chart = parse_chart(input)?;
    if let Some(kind) = options.orientation {
        chart.set_orientation_kind(kind)?;
    }
    let geometry = compute_chart_geometry(&chart, &options.geometry)?;
    Ok(render_svg(&geometry, &options.theme, &options.render))
}
