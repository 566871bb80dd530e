use ratzilla::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratzilla::ratatui::layout::Rect;
use statradar_core::{
    ChartConfig, CompareForm, DatasetStore, FillCache, HoverTracker, Pointer, RadarChart, Tooltip,
};

use crate::page::PageLayout;

/// Tooltip offset in cells: two columns right, one row up.
const TOOLTIP_OFFSET: (f64, f64) = (2.0, -1.0);

pub struct WebState {
    /// `None` until the fetch settles; an empty store after a failed fetch.
    pub store: Option<DatasetStore>,
    pub config: ChartConfig,
    pub form: CompareForm,
    pub chart: RadarChart,
    pub fills: FillCache,
    pub error: Option<String>,
    pub hover: HoverTracker,
    pub tooltip: Tooltip,
    /// Grid size of the current frame, in cells.
    pub frame_area: Rect,
}

impl WebState {
    pub fn new() -> Self {
        let config = ChartConfig::default();
        Self {
            store: None,
            chart: RadarChart::empty(&config),
            fills: FillCache::new(),
            config,
            form: CompareForm::new(),
            error: None,
            hover: HoverTracker::new(),
            tooltip: Tooltip::new(TOOLTIP_OFFSET),
            frame_area: Rect::default(),
        }
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout::compute(self.frame_area, &self.form, self.error.is_some())
    }

    /// Starts a new frame of `area` cells and brings the fills up to date.
    pub fn begin_frame(&mut self, area: Rect) {
        if area != self.frame_area {
            self.frame_area = area;
            self.hover.pointer_left(&mut self.tooltip);
        }
        let viewport = self.layout().chart;
        self.fills.refresh(&self.chart, &viewport);
    }

    pub fn handle_key(&mut self, event: &KeyEvent) {
        // Keys are ignored until the dataset fetch settles.
        let Some(store) = self.store.as_ref() else {
            return;
        };

        if self.error.is_some() {
            if matches!(event.code, KeyCode::Esc | KeyCode::Enter) {
                self.error = None;
            }
            return;
        }

        match event.code {
            KeyCode::Tab if event.shift => self.form.focus_prev(),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::Down => self.form.focused_mut().highlight_next(),
            KeyCode::Up => self.form.focused_mut().highlight_prev(),
            KeyCode::Esc => self.form.hide_suggestions(),
            KeyCode::Backspace => self.form.backspace(store),
            KeyCode::Char('u') if event.ctrl => self.form.focused_mut().clear(),
            KeyCode::Char(ch) => self.form.insert_char(store, ch),
            KeyCode::Enter => {
                if !self.form.focused_mut().accept_highlighted() {
                    self.compare();
                }
            }
            _ => {}
        }
    }

    /// Pointer input, already converted from pixels to a grid cell.
    pub fn handle_mouse(&mut self, event: &MouseEvent, column: u16, row: u16) {
        if self.store.is_none() {
            return;
        }

        match event.event {
            MouseEventKind::Moved => self.pointer_moved(column, row),
            MouseEventKind::Pressed if matches!(event.button, MouseButton::Left) => {
                self.pressed(column, row);
            }
            _ => {}
        }
    }

    fn pointer_moved(&mut self, column: u16, row: u16) {
        let layout = self.layout();
        let Some(chart) = layout.chart.chart_position(&self.config, column, row) else {
            self.hover.pointer_left(&mut self.tooltip);
            return;
        };

        let pointer = Pointer {
            chart,
            screen: (f64::from(column), f64::from(row)),
        };
        let slack = layout.chart.hover_slack(&self.config);
        if let Some(event) = self
            .hover
            .pointer_moved(&self.chart, pointer, slack, &mut self.tooltip)
        {
            tracing::trace!(?event, column, row, "marker hover");
        }
    }

    fn pressed(&mut self, column: u16, row: u16) {
        // The banner moves the chart, so a press that closes it does nothing else.
        if self.error.take().is_some() {
            return;
        }
        let hit = self.layout().hit_test(&self.form, column, row);
        tracing::trace!(?hit, column, row, "click");
        if self.form.click(hit) {
            self.compare();
        }
    }

    /// Success replaces the chart; failure keeps it and shows the banner.
    fn compare(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match self.form.submit(store, &self.config) {
            Ok(chart) => {
                self.chart = chart;
                self.hover.pointer_left(&mut self.tooltip);
            }
            Err(error) => {
                tracing::warn!(%error, "comparison rejected");
                self.error = Some(error.to_string());
            }
        }
    }
}
