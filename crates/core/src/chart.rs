//! Radar chart geometry.
//!
//! Coordinates are relative to the chart centre with `y` growing downward,
//! the convention of SVG and of terminal rows. Axis `i` sits at
//! `i * 60°` from the positive `x` axis, so on screen the axes run
//! clockwise starting at three o'clock.

use std::f64::consts::TAU;

use crate::error::ChartError;
use crate::stat::{Stat, StatProfile};

pub const MIN_SERIES: usize = 2;
pub const MAX_SERIES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Space kept free around the outer ring for axis labels.
    pub margin: f64,
    /// Stat value that lands on the outer ring. Larger values are not clamped.
    pub max_value: f64,
    pub levels: u32,
    pub label_offset: f64,
    pub point_radius: f64,
    pub legend_spacing: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            margin: 100.0,
            max_value: 250.0,
            levels: 5,
            label_offset: 20.0,
            point_radius: 5.0,
            legend_spacing: 20.0,
        }
    }
}

impl ChartConfig {
    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0 - self.margin).max(0.0)
    }

    /// Distance from the centre for `value`.
    pub fn radial_distance(&self, value: f64) -> f64 {
        if self.max_value <= 0.0 {
            return 0.0;
        }
        self.radius() * (value / self.max_value)
    }

    /// Top-left anchor of the legend, relative to the centre.
    pub fn legend_origin(&self) -> (f64, f64) {
        (-self.width / 2.0 + 10.0, -self.height / 2.0 + 20.0)
    }
}

pub fn axis_angle(index: usize) -> f64 {
    TAU / Stat::COUNT as f64 * index as f64
}

pub fn polar_to_cartesian(distance: f64, angle: f64) -> (f64, f64) {
    (distance * angle.cos(), distance * angle.sin())
}

/// An RGB colour with hex and translucent renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }

    /// The colour seen when painted with `alpha` over `background`.
    pub fn blend_over(self, background: Self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mix = |fg: u8, bg: u8| {
            f64::from(fg)
                .mul_add(alpha, f64::from(bg) * (1.0 - alpha))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

pub const FILL_ALPHA: f64 = 0.6;

/// Dataset colours by slot: first, second, third subject.
pub const PALETTE: [SeriesColor; MAX_SERIES] = [
    SeriesColor::rgb(0x63, 0x90, 0xF0),
    SeriesColor::rgb(0xEE, 0x81, 0x30),
    SeriesColor::rgb(0x7A, 0xC7, 0x4C),
];

pub const fn slot_color(slot: usize) -> SeriesColor {
    PALETTE[slot % MAX_SERIES]
}

/// A subject ready for charting: display name plus its stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub profile: StatProfile,
}

impl Subject {
    pub fn new(name: impl Into<String>, profile: StatProfile) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub stat: Stat,
    pub x: f64,
    pub y: f64,
    pub value: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub name: String,
    pub slot: usize,
    pub color: SeriesColor,
    pub profile: StatProfile,
    pub points: [ChartPoint; Stat::COUNT],
}

impl ChartDataset {
    fn from_subject(config: &ChartConfig, slot: usize, subject: &Subject) -> Self {
        let points = Stat::ALL.map(|stat| {
            let value = subject.profile.get(stat);
            let (x, y) = polar_to_cartesian(
                config.radial_distance(f64::from(value)),
                axis_angle(stat.index()),
            );
            ChartPoint { stat, x, y, value }
        });

        Self {
            name: subject.name.clone(),
            slot,
            color: slot_color(slot),
            profile: subject.profile,
            points,
        }
    }

    /// Polygon vertices in axis order; the outline closes back to the first.
    pub fn polygon(&self) -> [(f64, f64); Stat::COUNT] {
        self.points.map(|point| (point.x, point.y))
    }

    /// Even-odd test against the closed polygon.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let polygon = self.polygon();
        let mut inside = false;
        let mut previous = polygon[polygon.len() - 1];
        for current in polygon {
            if (current.1 > y) != (previous.1 > y) {
                let crossing =
                    (previous.0 - current.0) * (y - current.1) / (previous.1 - current.1) + current.0;
                if x < crossing {
                    inside = !inside;
                }
            }
            previous = current;
        }
        inside
    }

    /// Grid samples inside the polygon, for surfaces that cannot fill paths.
    ///
    /// Sampling stops at `half_extents`, the edge of the drawing area, so a
    /// polygon reaching far past the outer ring costs no more than one that
    /// fills the whole chart.
    pub fn interior_samples(&self, step: (f64, f64), half_extents: (f64, f64)) -> Vec<(f64, f64)> {
        let (step_x, step_y) = step;
        let (half_w, half_h) = half_extents;
        if !(step_x > 0.0 && step_y > 0.0 && step_x.is_finite() && step_y.is_finite()) {
            return Vec::new();
        }

        let polygon = self.polygon();
        let (min_x, max_x, min_y, max_y) = polygon.iter().fold(
            (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
            |(min_x, max_x, min_y, max_y), &(x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );
        let (min_x, max_x) = (min_x.max(-half_w), max_x.min(half_w));
        let (min_y, max_y) = (min_y.max(-half_h), max_y.min(half_h));

        let mut samples = Vec::new();
        let mut y = (min_y / step_y).ceil() * step_y;
        while y <= max_y {
            let mut x = (min_x / step_x).ceil() * step_x;
            while x <= max_x {
                if self.contains(x, y) {
                    samples.push((x, y));
                }
                x += step_x;
            }
            y += step_y;
        }
        samples
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAxis {
    pub stat: Stat,
    pub angle: f64,
    pub end: (f64, f64),
    pub label_at: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: SeriesColor,
    pub swatch: (f64, f64),
}

/// Everything one render draws: grid, axes, datasets and legend.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub config: ChartConfig,
    pub rings: Vec<[(f64, f64); Stat::COUNT]>,
    pub axes: [ChartAxis; Stat::COUNT],
    pub datasets: Vec<ChartDataset>,
    pub legend: Vec<LegendEntry>,
}

impl RadarChart {
    /// Grid, axes and labels with no data, shown before the first comparison.
    pub fn empty(config: &ChartConfig) -> Self {
        let radius = config.radius();
        let levels = config.levels.max(1);

        let rings = (1..=levels)
            .map(|level| {
                let distance = radius * f64::from(level) / f64::from(levels);
                Stat::ALL.map(|stat| polar_to_cartesian(distance, axis_angle(stat.index())))
            })
            .collect();

        let axes = Stat::ALL.map(|stat| {
            let angle = axis_angle(stat.index());
            ChartAxis {
                stat,
                angle,
                end: polar_to_cartesian(radius, angle),
                label_at: polar_to_cartesian(radius + config.label_offset, angle),
            }
        });

        Self {
            config: config.clone(),
            rings,
            axes,
            datasets: Vec::new(),
            legend: Vec::new(),
        }
    }

    /// Overlays 2 or 3 subjects; the slot of each follows its position.
    pub fn build(config: &ChartConfig, subjects: &[Subject]) -> Result<Self, ChartError> {
        if !(MIN_SERIES..=MAX_SERIES).contains(&subjects.len()) {
            return Err(ChartError::SeriesCount {
                count: subjects.len(),
            });
        }

        let mut chart = Self::empty(config);
        let (legend_x, legend_y) = config.legend_origin();

        for (slot, subject) in subjects.iter().enumerate() {
            let dataset = ChartDataset::from_subject(config, slot, subject);
            chart.legend.push(LegendEntry {
                name: dataset.name.clone(),
                color: dataset.color,
                swatch: (
                    legend_x,
                    (slot as f64).mul_add(config.legend_spacing, legend_y),
                ),
            });
            chart.datasets.push(dataset);
        }

        tracing::debug!(series = chart.datasets.len(), "built radar chart");
        Ok(chart)
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
