use crate::config::RenderConfig;
use crate::geometry::{ChartGeometry, LinkKind, NodeGeometry};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

pub fn render_svg(geometry: &ChartGeometry, theme: &Theme, config: &RenderConfig) -> String {
    let mut svg = String::new();
    let bounds = geometry.bounds;
    let margin = config.margin.max(0.0);
    let view_x = bounds.min_x - margin;
    let view_y = bounds.min_y - margin;
    let width = (bounds.width() + margin * 2.0).max(1.0);
    let height = (bounds.height() + margin * 2.0).max(1.0);
    let (out_width, out_height) = output_size(config, width, height);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{out_width:.2}\" height=\"{out_height:.2}\" viewBox=\"{view_x:.2} {view_y:.2} {width:.2} {height:.2}\">",
    ));

    svg.push_str(&format!(
        "<rect x=\"{view_x:.2}\" y=\"{view_y:.2}\" width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        escape_xml(&config.background)
    ));

    svg.push_str("<defs>");
    for (idx, node) in geometry.nodes.iter().enumerate() {
        if node.image_href.is_some() && !node.placeholder {
            svg.push_str(&format!(
                "<clipPath id=\"portrait-{idx}\">{}</clipPath>",
                image_frame_rect(geometry, node, "")
            ));
        }
    }
    svg.push_str("</defs>");

    svg.push_str("<g class=\"links\">");
    for link in &geometry.links {
        let class = match link.kind {
            LinkKind::Descendant => "link descendant",
            LinkKind::Spouse => "link spouse",
        };
        svg.push_str(&format!(
            "<path class=\"{class}\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            link.path,
            escape_xml(&theme.line_color),
            config.link_stroke_width
        ));
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"persons\">");
    for (idx, node) in geometry.nodes.iter().enumerate() {
        let (stroke, dash) = if node.placeholder {
            (theme.placeholder_stroke.as_str(), " stroke-dasharray=\"6 4\"")
        } else {
            (theme.box_stroke.as_str(), "")
        };
        svg.push_str(&format!(
            "<rect class=\"person\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{r:.2}\" ry=\"{r:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{dash}/>",
            node.x - node.width / 2.0,
            node.y - node.height / 2.0,
            node.width,
            node.height,
            escape_xml(&theme.box_fill),
            escape_xml(stroke),
            config.box_stroke_width,
            r = geometry.corner_radius.max(0.0),
        ));
        if node.placeholder {
            continue;
        }
        let frame_style = format!(
            " fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"",
            escape_xml(&theme.image_fill),
            escape_xml(&theme.image_stroke)
        );
        svg.push_str(&image_frame_rect(geometry, node, &frame_style));
        if let Some(href) = &node.image_href {
            let image = &geometry.image;
            svg.push_str(&format!(
                "<image href=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" preserveAspectRatio=\"xMidYMid slice\" clip-path=\"url(#portrait-{idx})\"/>",
                escape_xml(href),
                node.x + image.x(),
                node.y + image.y(),
                image.width(),
                image.height(),
            ));
        }
    }
    svg.push_str("</g>");

    svg.push_str("</svg>");
    svg
}

/// Root size of the SVG: configured values win, non-positive ones are ignored.
fn output_size(config: &RenderConfig, natural_width: f32, natural_height: f32) -> (f32, f32) {
    let pick = |value: Option<f32>, natural: f32| {
        value
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(natural)
    };
    (
        pick(config.width, natural_width),
        pick(config.height, natural_height),
    )
}

fn image_frame_rect(geometry: &ChartGeometry, node: &NodeGeometry, style: &str) -> String {
    let image = &geometry.image;
    format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\"{style}/>",
        node.x + image.x(),
        node.y + image.y(),
        image.width(),
        image.height(),
        image.rx().max(0.0),
        image.ry().max(0.0),
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    tracing::debug!(path = %output.display(), "wrote png");
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeometryConfig;
    use crate::geometry::compute_chart_geometry;
    use crate::parser::parse_chart;

    const COUPLE: &str = r#"{
        orientation: "top-bottom",
        nodes: [
            { id: "a", x: 200, y: 0, person: { name: "A", image: "a.jpg?size=1&crop=1" } },
            { id: "b", x: 0, y: 0 },
            { id: "c", x: 100, y: 300, person: { name: "C" } },
        ],
        links: [
            { source: "a", spouse: "b", target: "c" },
            { source: "a", spouse: "b" },
        ],
    }"#;

    fn render(input: &str) -> String {
        let chart = parse_chart(input).unwrap();
        let geometry = compute_chart_geometry(&chart, &GeometryConfig::default()).unwrap();
        render_svg(&geometry, &Theme::classic(), &RenderConfig::default())
    }

    #[test]
    fn render_svg_basic() {
        let svg = render(COUPLE);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("class=\"link descendant\"").count(), 1);
        assert_eq!(svg.matches("class=\"link spouse\"").count(), 1);
        assert_eq!(svg.matches("class=\"person\"").count(), 3);
    }

    #[test]
    fn placeholder_has_no_portrait() {
        let svg = render(COUPLE);
        assert_eq!(svg.matches("stroke-dasharray").count(), 1);
        assert_eq!(svg.matches("<image ").count(), 1);
        assert!(svg.contains("clip-path=\"url(#portrait-0)\""));
        assert!(!svg.contains("portrait-1"));
    }

    #[test]
    fn escapes_image_href() {
        let svg = render(COUPLE);
        assert!(svg.contains("a.jpg?size=1&amp;crop=1"));
    }

    #[test]
    fn escapes_theme_colors() {
        let chart = parse_chart(COUPLE).unwrap();
        let geometry = compute_chart_geometry(&chart, &GeometryConfig::default()).unwrap();
        let mut theme = Theme::classic();
        theme.line_color = "red\" onload=\"x".to_string();
        theme.image_stroke = "<blue>".to_string();
        let config = RenderConfig {
            background: "a&b".to_string(),
            ..Default::default()
        };
        let svg = render_svg(&geometry, &theme, &config);
        assert!(svg.contains("stroke=\"red&quot; onload=&quot;x\""));
        assert!(svg.contains("stroke=\"&lt;blue&gt;\""));
        assert!(svg.contains("fill=\"a&amp;b\""));
        assert!(!svg.contains("onload=\"x"));
    }

    #[test]
    fn natural_size_without_overrides() {
        // bounds -75..275 x -110..410 plus a 20 margin
        let svg = render(COUPLE);
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"390.00\" height=\"560.00\" viewBox=\"-95.00 -130.00 390.00 560.00\">"
        ));
    }

    #[test]
    fn configured_size_scales_the_root() {
        let chart = parse_chart(COUPLE).unwrap();
        let geometry = compute_chart_geometry(&chart, &GeometryConfig::default()).unwrap();
        let config = RenderConfig {
            width: Some(780.0),
            height: Some(-1.0),
            ..Default::default()
        };
        let svg = render_svg(&geometry, &Theme::classic(), &config);
        assert!(svg.contains("width=\"780.00\" height=\"560.00\" viewBox=\"-95.00 -130.00 390.00 560.00\""));
    }
}
