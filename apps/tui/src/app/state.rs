use crate::config::AppConfig;
use crate::ui::layout::ScreenLayout;
use ratatui::layout::Rect;
use statradar_core::{
    ChartConfig, CompareForm, DatasetStore, FillCache, HoverTracker, RadarChart, Tooltip,
};
use std::path::PathBuf;
use std::time::Instant;

/// Tooltip offset in terminal cells: two columns right, one row up.
const TOOLTIP_OFFSET: (f64, f64) = (2.0, -1.0);

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub store: DatasetStore,
    pub config: ChartConfig,
    pub data_path: PathBuf,
    pub form: CompareForm,
    /// Grid only until the first successful comparison.
    pub chart: RadarChart,
    /// Stippled polygon fills for `chart` at the current canvas size.
    pub fills: FillCache,
    /// Blocking message from the last failed comparison.
    pub error: Option<String>,
    pub status_message: String,
    pub hover: HoverTracker,
    pub tooltip: Tooltip,
    /// Terminal area of the current frame, used for fills and mouse hit tests.
    pub viewport: Rect,
    pub show_help: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,
}

impl App {
    pub fn new(config: &AppConfig, store: DatasetStore, load_error: Option<String>) -> Self {
        let status_message = load_error.map_or_else(
            || format!("{} creatures loaded from {}", store.len(), config.data_path.display()),
            |error| format!("Dataset unavailable: {error}"),
        );

        Self {
            running: true,
            chart: RadarChart::empty(&config.chart),
            fills: FillCache::new(),
            store,
            config: config.chart.clone(),
            data_path: config.data_path.clone(),
            form: CompareForm::new(),
            error: None,
            status_message,
            hover: HoverTracker::new(),
            tooltip: Tooltip::new(TOOLTIP_OFFSET),
            viewport: Rect::default(),
            show_help: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
        }
    }

    /// Runs the comparison. Success replaces the chart; failure keeps the
    /// current one and raises the error popup.
    pub fn compare(&mut self) {
        match self.form.submit(&self.store, &self.config) {
            Ok(chart) => {
                self.status_message = format!(
                    "Comparing {}",
                    chart
                        .legend
                        .iter()
                        .map(|entry| entry.name.as_str())
                        .collect::<Vec<_>>()
                        .join(" vs ")
                );
                self.chart = chart;
                self.error = None;
                self.hover.pointer_left(&mut self.tooltip);
            }
            Err(error) => {
                tracing::warn!(%error, "comparison rejected");
                self.status_message = "Comparison failed".to_string();
                self.error = Some(error.to_string());
            }
        }
    }

    /// Recomputes the fills when the chart or the canvas size changed.
    pub fn refresh_fills(&mut self) -> bool {
        let viewport = ScreenLayout::compute(self.viewport, &self.form).chart;
        self.fills.refresh(&self.chart, &viewport)
    }

    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    pub fn quit(&mut self) {
        tracing::info!("quitting");
        self.running = false;
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }
}
