use crate::config::{Config, load_config};
use crate::geometry::{ChartGeometry, compute_chart_geometry};
use crate::geometry_dump::{geometry_dump_json, write_geometry_dump};
use crate::orientation::OrientationKind;
use crate::parser::parse_chart;
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "dchart",
    version,
    about = "Connector and portrait geometry for laid-out descendants charts"
)]
pub struct Args {
    /// Input chart file (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, geometry and render overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout direction, replacing the one declared by the chart
    #[arg(long = "orientation", value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Corner radius of the person boxes
    #[arg(long = "cornerRadius")]
    pub corner_radius: Option<f32>,

    /// Width of the SVG/PNG output. Defaults to the chart's natural width.
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Height of the SVG/PNG output. Defaults to the chart's natural height.
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationArg {
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl From<OrientationArg> for OrientationKind {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::TopBottom => OrientationKind::TopBottom,
            OrientationArg::BottomTop => OrientationKind::BottomTop,
            OrientationArg::LeftRight => OrientationKind::LeftRight,
            OrientationArg::RightLeft => OrientationKind::RightLeft,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args, load_config(args.config.as_deref())?);

    let input = read_input(args.input.as_deref())?;
    let geometry = build_geometry(&input, &args, &config)?;

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&geometry, &config.theme, &config.render);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(&geometry, &config.theme, &config.render);
            write_png(&svg, &output)?;
        }
        OutputFormat::Json => match args.output.as_deref() {
            Some(path) => write_geometry_dump(path, &geometry)?,
            None => println!("{}", geometry_dump_json(&geometry)?),
        },
    }

    Ok(())
}

fn resolve_config(args: &Args, mut config: Config) -> Config {
    if args.width.is_some() {
        config.render.width = args.width;
    }
    if args.height.is_some() {
        config.render.height = args.height;
    }
    if let Some(orientation) = args.orientation {
        config.orientation = Some(orientation.into());
    }
    config
}

fn build_geometry(input: &str, args: &Args, config: &Config) -> Result<ChartGeometry> {
    let mut chart = parse_chart(input)?;
    if let Some(kind) = config.orientation {
        tracing::debug!(from = %chart.orientation.kind(), to = %kind, "overriding orientation");
        chart.set_orientation_kind(kind)?;
    }
    if args.corner_radius.is_some() {
        chart.corner_radius = args.corner_radius;
    }
    compute_chart_geometry(&chart, &config.geometry)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path) -> Result<()> {
    crate::render::write_output_png(svg, output)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
