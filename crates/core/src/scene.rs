//! A radar chart laid out for character-cell canvases.
//!
//! The terminal and browser front ends both draw the chart on a ratatui
//! braille canvas. Everything they draw is decided here, in canvas
//! coordinates: origin at the chart centre and `y` growing upward, the
//! opposite of [`RadarChart`]. A front end only maps each [`Shape`],
//! [`Fill`] and [`Label`] onto its own canvas primitives.

use crate::chart::{ChartConfig, RadarChart, SeriesColor, FILL_ALPHA};
use crate::stat::Stat;

pub const BACKGROUND: SeriesColor = SeriesColor::rgb(16, 18, 24);
pub const GRID: SeriesColor = SeriesColor::rgb(70, 74, 86);
pub const LABEL: SeriesColor = SeriesColor::rgb(170, 170, 170);
pub const TEXT: SeriesColor = SeriesColor::rgb(255, 255, 255);
pub const HOVERED: SeriesColor = SeriesColor::rgb(255, 255, 255);

/// Smallest canvas, in cells, still worth drawing.
const MIN_COLUMNS: u16 = 8;
const MIN_ROWS: u16 = 4;

/// The block of terminal cells a chart is drawn into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellViewport {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellViewport {
    /// Largest viewport with two columns per row, centred in the given area.
    /// Terminal cells are about twice as tall as wide, so the chart stays round.
    pub fn fit(x: u16, y: u16, width: u16, height: u16) -> Self {
        let rows = height.min(width / 2);
        let columns = rows * 2;
        Self {
            x: x + (width - columns) / 2,
            y: y + (height - rows) / 2,
            width: columns,
            height: rows,
        }
    }

    pub const fn is_drawable(&self) -> bool {
        self.width >= MIN_COLUMNS && self.height >= MIN_ROWS
    }

    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column - self.x < self.width
            && row >= self.y
            && row - self.y < self.height
    }

    /// Chart units covered by one cell.
    pub fn cell_size(&self, config: &ChartConfig) -> (f64, f64) {
        (
            config.width / f64::from(self.width.max(1)),
            config.height / f64::from(self.height.max(1)),
        )
    }

    /// Chart coordinates (`y` down) at the centre of a cell, or `None` when
    /// the cell is outside the viewport.
    pub fn chart_position(&self, config: &ChartConfig, column: u16, row: u16) -> Option<(f64, f64)> {
        if !self.contains(column, row) {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size(config);
        let x = (f64::from(column - self.x) + 0.5).mul_add(cell_w, -config.width / 2.0);
        let y = (f64::from(row - self.y) + 0.5).mul_add(cell_h, -config.height / 2.0);
        Some((x, y))
    }

    /// Half a cell diagonal, so a marker is reachable from the cell that draws it.
    pub fn hover_slack(&self, config: &ChartConfig) -> f64 {
        let (cell_w, cell_h) = self.cell_size(config);
        cell_w.hypot(cell_h) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Segment {
        from: (f64, f64),
        to: (f64, f64),
        color: SeriesColor,
    },
    Marker {
        center: (f64, f64),
        radius: f64,
        color: SeriesColor,
    },
}

/// Text anchored at its left end.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub at: (f64, f64),
    pub spans: Vec<(String, SeriesColor)>,
}

/// Stippled interior of one dataset polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub coords: Vec<(f64, f64)>,
    pub color: SeriesColor,
}

/// Grid, outlines, markers and text for one frame. Fills are kept apart in
/// a [`FillCache`] because they are the only costly part.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasScene {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Rings and spokes, drawn under the fills.
    pub grid: Vec<Shape>,
    /// Polygon outlines and markers, drawn over the fills.
    pub series: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl CanvasScene {
    /// `hovered` is the (dataset, axis) marker under the pointer, drawn highlighted.
    pub fn new(chart: &RadarChart, viewport: &CellViewport, hovered: Option<(usize, usize)>) -> Self {
        let config = &chart.config;
        let (cell_w, _) = viewport.cell_size(config);
        let half_w = config.width / 2.0;
        let half_h = config.height / 2.0;

        let mut grid = Vec::new();
        for ring in &chart.rings {
            outline(&mut grid, ring, GRID);
        }
        for axis in &chart.axes {
            grid.push(Shape::Segment {
                from: (0.0, 0.0),
                to: flip(axis.end),
                color: GRID,
            });
        }

        let marker_radius = config.point_radius.max(cell_w / 2.0);
        let mut series = Vec::new();
        for (dataset_index, dataset) in chart.datasets.iter().enumerate() {
            outline(&mut series, &dataset.polygon(), dataset.color);
            for (axis_index, point) in dataset.points.iter().enumerate() {
                let color = if hovered == Some((dataset_index, axis_index)) {
                    HOVERED
                } else {
                    dataset.color
                };
                series.push(Shape::Marker {
                    center: flip((point.x, point.y)),
                    radius: marker_radius,
                    color,
                });
            }
        }

        let mut labels = Vec::with_capacity(Stat::COUNT + chart.legend.len());
        for axis in &chart.axes {
            let text = axis.stat.label();
            // Centred on the label anchor.
            let x = (text.len() as f64).mul_add(-cell_w / 2.0, axis.label_at.0);
            labels.push(Label {
                at: (x, -axis.label_at.1),
                spans: vec![(text.to_string(), LABEL)],
            });
        }
        for entry in &chart.legend {
            labels.push(Label {
                at: flip(entry.swatch),
                spans: vec![("■ ".to_string(), entry.color), (entry.name.clone(), TEXT)],
            });
        }

        Self {
            x_bounds: [-half_w, half_w],
            y_bounds: [-half_h, half_h],
            grid,
            series,
            labels,
        }
    }
}

/// Stippled fills for every dataset, two samples per cell in each direction
/// so overlapping polygons stay readable. Samples stop at the canvas edge.
pub fn fills(chart: &RadarChart, viewport: &CellViewport) -> Vec<Fill> {
    let config = &chart.config;
    let (cell_w, cell_h) = viewport.cell_size(config);
    let half_extents = (config.width / 2.0, config.height / 2.0);

    chart
        .datasets
        .iter()
        .map(|dataset| Fill {
            coords: dataset
                .interior_samples((cell_w / 2.0, cell_h / 2.0), half_extents)
                .into_iter()
                .map(flip)
                .collect(),
            color: dataset.color.blend_over(BACKGROUND, FILL_ALPHA),
        })
        .collect()
}

/// Fills of the last drawn chart, recomputed only when the polygons or the
/// viewport change.
#[derive(Debug, Clone, Default)]
pub struct FillCache {
    key: Option<(Vec<[(f64, f64); Stat::COUNT]>, CellViewport)>,
    fills: Vec<Fill>,
}

impl FillCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the cache up to date; returns whether the fills were recomputed.
    pub fn refresh(&mut self, chart: &RadarChart, viewport: &CellViewport) -> bool {
        let polygons = chart
            .datasets
            .iter()
            .map(|dataset| dataset.polygon())
            .collect::<Vec<_>>();
        if let Some((cached, cached_viewport)) = &self.key {
            if *cached == polygons && cached_viewport == viewport {
                return false;
            }
        }

        self.fills = if viewport.is_drawable() {
            fills(chart, viewport)
        } else {
            Vec::new()
        };
        tracing::trace!(
            datasets = self.fills.len(),
            samples = self.fills.iter().map(|fill| fill.coords.len()).sum::<usize>(),
            "recomputed chart fills"
        );
        self.key = Some((polygons, *viewport));
        true
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }
}

fn flip((x, y): (f64, f64)) -> (f64, f64) {
    (x, -y)
}

fn outline(shapes: &mut Vec<Shape>, vertices: &[(f64, f64)], color: SeriesColor) {
    for (index, start) in vertices.iter().enumerate() {
        let end = vertices[(index + 1) % vertices.len()];
        shapes.push(Shape::Segment {
            from: flip(*start),
            to: flip(end),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasScene, CellViewport, FillCache, Shape, GRID, HOVERED};
    use crate::chart::{ChartConfig, RadarChart, Subject};
    use crate::stat::StatProfile;

    fn flat(value: u16) -> StatProfile {
        StatProfile {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    fn chart(config: &ChartConfig) -> RadarChart {
        RadarChart::build(
            config,
            &[Subject::new("Snorlax", flat(160)), Subject::new("Pichu", flat(30))],
        )
        .unwrap()
    }

    #[test]
    fn fit_keeps_two_columns_per_row_and_centres() {
        let viewport = CellViewport::fit(2, 3, 100, 30);

        assert_eq!((viewport.width, viewport.height), (60, 30));
        assert_eq!((viewport.x, viewport.y), (22, 3));
        assert!(viewport.is_drawable());
        assert!(!CellViewport::fit(0, 0, 6, 10).is_drawable());
    }

    #[test]
    fn chart_position_maps_cell_centres() {
        let viewport = CellViewport::fit(0, 0, 60, 30);
        let config = ChartConfig::default();

        assert_eq!(viewport.chart_position(&config, 0, 0), Some((-295.0, -290.0)));
        assert_eq!(viewport.chart_position(&config, 59, 29), Some((295.0, 290.0)));
        assert_eq!(viewport.chart_position(&config, 60, 0), None);
        assert_eq!(viewport.cell_size(&config), (10.0, 20.0));
        assert!((viewport.hover_slack(&config) - 125.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn scene_flips_y_and_highlights_hovered_marker() {
        let config = ChartConfig::default();
        let chart = chart(&config);
        let viewport = CellViewport::fit(0, 0, 60, 30);

        let scene = CanvasScene::new(&chart, &viewport, Some((1, 2)));

        assert_eq!(scene.x_bounds, [-300.0, 300.0]);
        // Five rings of six edges plus six spokes.
        assert_eq!(scene.grid.len(), 36);
        assert!(scene
            .grid
            .iter()
            .all(|shape| matches!(shape, Shape::Segment { color, .. } if *color == GRID)));

        let markers = scene
            .series
            .iter()
            .filter_map(|shape| match shape {
                Shape::Marker { center, color, .. } => Some((*center, *color)),
                Shape::Segment { .. } => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(markers.len(), 12);
        assert_eq!(markers.iter().filter(|(_, color)| *color == HOVERED).count(), 1);
        // Axis 1 points down-right in chart space, so up-right on the canvas.
        let (_, y) = markers[1].0;
        assert!(y < 0.0);

        assert_eq!(scene.labels.len(), 6 + 2);
        assert_eq!(scene.labels[6].spans[1].0, "Snorlax");
    }

    #[test]
    fn fill_cache_recomputes_only_on_change() {
        let config = ChartConfig::default();
        let chart = chart(&config);
        let small = CellViewport::fit(0, 0, 40, 20);
        let large = CellViewport::fit(0, 0, 80, 40);
        let mut cache = FillCache::new();

        assert!(cache.refresh(&chart, &small));
        assert_eq!(cache.fills().len(), 2);
        let coarse = cache.fills()[0].coords.len();
        assert!(!cache.refresh(&chart, &small));

        assert!(cache.refresh(&chart, &large));
        assert!(cache.fills()[0].coords.len() > coarse);

        let other = RadarChart::build(
            &config,
            &[Subject::new("Pichu", flat(30)), Subject::new("Snorlax", flat(160))],
        )
        .unwrap();
        assert!(cache.refresh(&other, &large));
        assert!(cache.fills()[0].coords.len() < coarse);
    }

    #[test]
    fn fills_stay_bounded_for_stats_far_past_the_outer_ring() {
        let config = ChartConfig {
            max_value: 5.0,
            ..ChartConfig::default()
        };
        let chart = chart(&config);
        let viewport = CellViewport::fit(0, 0, 160, 80);
        let mut cache = FillCache::new();

        cache.refresh(&chart, &viewport);

        let columns = usize::from(viewport.width);
        let rows = usize::from(viewport.height);
        for fill in cache.fills() {
            // Two samples per cell in each direction, plus the closing edges.
            assert!(fill.coords.len() <= (2 * columns + 1) * (2 * rows + 1));
            assert!(fill.coords.len() > columns * rows);
            assert!(fill
                .coords
                .iter()
                .all(|&(x, y)| x.abs() <= 300.0 && y.abs() <= 300.0));
        }
    }
}
