use std::fmt::Write;

use crate::chart::{RadarChart, FILL_ALPHA};

const GRID_STROKE: &str = "#ddd";
const AXIS_STROKE: &str = "#bbb";
const TEXT_FILL: &str = "#333";
const FONT: &str = "font-family='Segoe UI, sans-serif' font-size='14'";

/// An inline vector drawing region. Each render replaces the whole document.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    document: String,
}

impl SvgSurface {
    pub const fn new() -> Self {
        Self {
            document: String::new(),
        }
    }

    pub fn render(&mut self, chart: &RadarChart) {
        self.document = render_svg(chart);
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

/// Standalone SVG document for `chart`. Markers carry a `<title>`, which
/// browsers show as a tooltip with the point's value on hover.
pub fn render_svg(chart: &RadarChart) -> String {
    let config = &chart.config;
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}' role='img'>",
        config.width, config.height, config.width, config.height
    );
    let _ = writeln!(
        svg,
        "  <g transform='translate({:.0}, {:.0})'>",
        config.width / 2.0,
        config.height / 2.0
    );

    let _ = writeln!(svg, "    <g class='grid'>");
    for ring in &chart.rings {
        let _ = writeln!(
            svg,
            "      <polygon points='{}' fill='none' stroke='{GRID_STROKE}' stroke-width='1'/>",
            points_attr(ring)
        );
    }
    let _ = writeln!(svg, "    </g>");

    let _ = writeln!(svg, "    <g class='axes'>");
    for axis in &chart.axes {
        let _ = writeln!(
            svg,
            "      <line x1='0' y1='0' x2='{:.2}' y2='{:.2}' stroke='{AXIS_STROKE}' stroke-width='2'/>",
            axis.end.0, axis.end.1
        );
        let _ = writeln!(
            svg,
            "      <text x='{:.2}' y='{:.2}' text-anchor='middle' fill='{TEXT_FILL}' {FONT}>{}</text>",
            axis.label_at.0,
            axis.label_at.1,
            escape_text(axis.stat.label())
        );
    }
    let _ = writeln!(svg, "    </g>");

    for dataset in &chart.datasets {
        let _ = writeln!(
            svg,
            "    <path class='area' d='M{}Z' fill='{}' stroke='{}' stroke-width='2'/>",
            points_attr(&dataset.polygon()).replace(' ', " L"),
            dataset.color.rgba(FILL_ALPHA),
            dataset.color.hex()
        );
    }

    for dataset in &chart.datasets {
        let _ = writeln!(svg, "    <g class='points' data-series='{}'>", dataset.slot);
        for point in &dataset.points {
            let _ = writeln!(
                svg,
                "      <circle cx='{:.2}' cy='{:.2}' r='{}' fill='{}' data-value='{}'><title>{}: {}</title></circle>",
                point.x,
                point.y,
                config.point_radius,
                dataset.color.hex(),
                point.value,
                escape_text(point.stat.label()),
                point.value
            );
        }
        let _ = writeln!(svg, "    </g>");
    }

    if !chart.legend.is_empty() {
        let _ = writeln!(svg, "    <g class='legend'>");
        for entry in &chart.legend {
            let (x, y) = entry.swatch;
            let _ = writeln!(
                svg,
                "      <circle cx='{x:.0}' cy='{y:.0}' r='5' fill='{}'/>",
                entry.color.hex()
            );
            let _ = writeln!(
                svg,
                "      <text x='{:.0}' y='{:.0}' fill='{TEXT_FILL}' {FONT}>{}</text>",
                x + 15.0,
                y + 5.0,
                escape_text(&entry.name)
            );
        }
        let _ = writeln!(svg, "    </g>");
    }

    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::{render_svg, SvgSurface};
    use crate::chart::{ChartConfig, RadarChart, Subject};
    use crate::stat::StatProfile;

    fn profile(value: u16) -> StatProfile {
        StatProfile {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    fn two_subjects() -> RadarChart {
        RadarChart::build(
            &ChartConfig::default(),
            &[
                Subject::new("Pikachu", profile(50)),
                Subject::new("Bulba<saur>", profile(100)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn draws_every_chart_element() {
        let svg = render_svg(&two_subjects());

        assert_eq!(svg.matches("<polygon").count(), 5);
        assert_eq!(svg.matches("<line").count(), 6);
        assert_eq!(svg.matches("class='area'").count(), 2);
        assert_eq!(svg.matches("<title>").count(), 12);
        assert!(svg.contains("fill='rgba(99, 144, 240, 0.6)' stroke='#6390F0'"));
        assert!(svg.contains("fill='rgba(238, 129, 48, 0.6)' stroke='#EE8130'"));
        assert!(svg.contains(">Sp. Atk</text>"));
        assert!(svg.contains(">Bulba&lt;saur&gt;</text>"));
    }

    #[test]
    fn area_path_is_closed() {
        let svg = render_svg(&two_subjects());
        let area = svg
            .lines()
            .find(|line| line.contains("class='area'"))
            .unwrap();

        assert!(area.contains("d='M40.00,0.00 L"));
        assert!(area.contains("Z'"));
        assert_eq!(area.matches(" L").count(), 5);
    }

    #[test]
    fn empty_chart_has_no_legend_or_points() {
        let svg = render_svg(&RadarChart::empty(&ChartConfig::default()));

        assert!(!svg.contains("class='legend'"));
        assert!(!svg.contains("<circle"));
        assert_eq!(svg.matches("<text").count(), 6);
    }

    #[test]
    fn rendering_twice_replaces_previous_chart() {
        let mut surface = SvgSurface::new();
        let chart = two_subjects();

        surface.render(&chart);
        surface.render(&chart);

        assert_eq!(surface.document().matches("<svg").count(), 1);
        assert_eq!(surface.document().matches("class='area'").count(), 2);
    }
}
