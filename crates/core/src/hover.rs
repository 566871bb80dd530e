use crate::chart::{ChartPoint, RadarChart};

/// Something the pointer can hover: a chart marker, a legend row.
pub trait HoverRegion {
    /// Whether `(x, y)`, in chart coordinates, lies within the region.
    /// `slack` widens the region for coarse pointers such as terminal cells.
    fn contains(&self, x: f64, y: f64, slack: f64) -> bool;

    /// Text shown in the tooltip while hovered.
    fn tooltip_text(&self) -> String;
}

/// A marker of `radius` drawn at a chart point.
#[derive(Debug, Clone, Copy)]
pub struct Marker<'a> {
    pub point: &'a ChartPoint,
    pub radius: f64,
}

impl HoverRegion for Marker<'_> {
    fn contains(&self, x: f64, y: f64, slack: f64) -> bool {
        (x - self.point.x).hypot(y - self.point.y) <= self.radius + slack
    }

    fn tooltip_text(&self) -> String {
        self.point.value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Move,
    Leave,
}

/// Pointer position: `chart` for hit testing, `screen` for placing the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub chart: (f64, f64),
    pub screen: (f64, f64),
}

/// The single floating label reused by every marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    visible: bool,
    text: String,
    position: (f64, f64),
    offset: (f64, f64),
}

impl Tooltip {
    /// `offset` is added to the pointer's screen position.
    pub const fn new(offset: (f64, f64)) -> Self {
        Self {
            visible: false,
            text: String::new(),
            position: (0.0, 0.0),
            offset,
        }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn position(&self) -> (f64, f64) {
        self.position
    }

    pub fn on_enter(&mut self, text: String, screen: (f64, f64)) {
        self.visible = true;
        self.text = text;
        self.on_move(screen);
    }

    pub fn on_move(&mut self, screen: (f64, f64)) {
        self.position = (screen.0 + self.offset.0, screen.1 + self.offset.1);
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new((10.0, -10.0))
    }
}

/// Turns raw pointer motion over a chart into enter, move and leave events
/// on its markers, and keeps the shared tooltip in step.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    /// (dataset index, axis index) under the pointer.
    current: Option<(usize, usize)>,
}

impl HoverTracker {
    pub const fn new() -> Self {
        Self { current: None }
    }

    pub const fn current(&self) -> Option<(usize, usize)> {
        self.current
    }

    pub fn pointer_moved(
        &mut self,
        chart: &RadarChart,
        pointer: Pointer,
        slack: f64,
        tooltip: &mut Tooltip,
    ) -> Option<PointerEvent> {
        let (x, y) = pointer.chart;
        let radius = chart.config.point_radius;

        // Later datasets are drawn on top, so they win overlapping hits.
        let hit = chart
            .datasets
            .iter()
            .enumerate()
            .rev()
            .find_map(|(dataset_index, dataset)| {
                dataset.points.iter().enumerate().find_map(|(axis, point)| {
                    let marker = Marker { point, radius };
                    marker
                        .contains(x, y, slack)
                        .then(|| ((dataset_index, axis), marker.tooltip_text()))
                })
            });

        match (hit, self.current) {
            (Some((key, _)), Some(current)) if key == current => {
                tooltip.on_move(pointer.screen);
                Some(PointerEvent::Move)
            }
            (Some((key, text)), _) => {
                self.current = Some(key);
                tooltip.on_enter(text, pointer.screen);
                Some(PointerEvent::Enter)
            }
            (None, Some(_)) => {
                self.current = None;
                tooltip.on_leave();
                Some(PointerEvent::Leave)
            }
            (None, None) => None,
        }
    }

    /// The pointer left the chart region altogether.
    pub fn pointer_left(&mut self, tooltip: &mut Tooltip) -> Option<PointerEvent> {
        self.current.take().map(|_| {
            tooltip.on_leave();
            PointerEvent::Leave
        })
    }
}
