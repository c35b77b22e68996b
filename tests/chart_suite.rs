use std::path::Path;

use descendants_chart_geometry::geometry::LinkKind;
use descendants_chart_geometry::{
    ChartGeometry, GeometryConfig, RenderConfig, Theme, compute_chart_geometry, parse_chart,
    render_svg,
};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

fn fixture_geometry(rel: &str) -> ChartGeometry {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    assert!(path.exists(), "fixture missing: {}", rel);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let chart = parse_chart(&input).expect("parse failed");
    compute_chart_geometry(&chart, &GeometryConfig::default()).expect("geometry failed")
}

fn paths(geometry: &ChartGeometry, kind: LinkKind) -> Vec<String> {
    geometry
        .links
        .iter()
        .filter(|link| link.kind == kind)
        .map(|link| link.path.to_string())
        .collect()
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "single_child.json",
        "couple.json5",
        "remarried.json5",
        "unknown_partner.json5",
        "left_right.json5",
        "right_left.json5",
    ];

    for rel in candidates {
        let geometry = fixture_geometry(rel);
        let svg = render_svg(&geometry, &Theme::modern(), &RenderConfig::default());
        assert_valid_svg(&svg, rel);
        assert_eq!(
            svg.matches("<path ").count(),
            geometry.links.len(),
            "{rel}: one path per link"
        );
    }
}

#[test]
fn every_connector_is_orthogonal() {
    for rel in ["couple.json5", "remarried.json5", "left_right.json5", "right_left.json5"] {
        let geometry = fixture_geometry(rel);
        for link in &geometry.links {
            for (from, to) in link.path.segments() {
                assert!(
                    from.x == to.x || from.y == to.y,
                    "{rel}: diagonal segment in {}",
                    link.path
                );
            }
        }
    }
}

#[test]
fn single_child_drops_straight_down() {
    let geometry = fixture_geometry("single_child.json");
    assert_eq!(
        paths(&geometry, LinkKind::Descendant),
        vec!["M100,100L100,250L100,250L100,260"]
    );
}

#[test]
fn couple_children_share_origin() {
    let geometry = fixture_geometry("couple.json5");
    let descendants = paths(&geometry, LinkKind::Descendant);
    assert_eq!(descendants.len(), 2);
    for path in &descendants {
        assert!(path.starts_with("M90,0L90,130"), "unexpected path {path}");
    }
    assert_eq!(paths(&geometry, LinkKind::Spouse), vec!["M75,0L105,0"]);
}

#[test]
fn remarried_person_routes_through_earlier_spouses() {
    let geometry = fixture_geometry("remarried.json5");
    let spouse = geometry
        .links
        .iter()
        .find(|link| link.kind == LinkKind::Spouse)
        .expect("spouse link");
    assert_eq!(spouse.path.segment_count(), 3);
    assert_eq!(
        spouse.path.to_string(),
        "M75,-10L103,-10M257,-10L283,-10M437,-10L463,-10"
    );
    assert_eq!(
        paths(&geometry, LinkKind::Descendant),
        vec!["M540,110L540,130L540,130L540,150"]
    );
}

#[test]
fn unknown_partner_line_leaves_the_box() {
    let geometry = fixture_geometry("unknown_partner.json5");
    assert_eq!(
        paths(&geometry, LinkKind::Descendant),
        vec!["M-10,260L-10,150L100,150L100,140"]
    );
}

#[test]
fn sideways_layouts_run_along_x() {
    let geometry = fixture_geometry("left_right.json5");
    assert_eq!(
        paths(&geometry, LinkKind::Descendant),
        vec!["M0,0L210,0L210,0L230,0"]
    );
    assert_eq!(paths(&geometry, LinkKind::Spouse), vec!["M0,-10L0,10"]);

    let geometry = fixture_geometry("right_left.json5");
    assert_eq!(
        paths(&geometry, LinkKind::Descendant),
        vec!["M0,0L-210,0L-210,-60L-230,-60", "M0,0L-210,0L-210,60L-230,60"]
    );
}

#[test]
fn geometry_is_deterministic() {
    let first = fixture_geometry("remarried.json5");
    let second = fixture_geometry("remarried.json5");
    let render = |g: &ChartGeometry| render_svg(g, &Theme::classic(), &RenderConfig::default());
    assert_eq!(render(&first), render(&second));
}
