use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};
use statradar_core::chart::slot_color;
use statradar_core::scene::BACKGROUND;
use statradar_core::{
    CanvasScene, CellViewport, CompareForm, Fill, FormHit, Label, SeriesColor, Shape,
};

use crate::state::WebState;

const FIELD_COUNT: usize = 3;
const MAX_SUGGESTION_ROWS: usize = 8;

/// Every rect of the page, derived from the grid size alone so drawing and
/// pointer hit testing agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub frame: Rect,
    pub fields: [Rect; FIELD_COUNT],
    pub compare_button: Rect,
    pub banner: Rect,
    pub chart_block: Rect,
    pub chart: CellViewport,
    pub hint: Rect,
    /// The focused field's open panel, with that field's index.
    pub suggestions: Option<(usize, Rect)>,
}

impl PageLayout {
    pub fn compute(frame: Rect, form: &CompareForm, has_error: bool) -> Self {
        let inner = frame.inner(Margin::new(1, 1)).inner(Margin::new(1, 0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(if has_error { 4 } else { 0 }),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(inner);

        let field_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(11),
            ])
            .split(rows[0]);
        let fields = [field_row[0], field_row[1], field_row[2]];

        let chart_block = rows[2];
        let canvas = chart_block.inner(Margin::new(1, 1));
        let focus = form.focus();
        let suggestions = form
            .field(focus)
            .filter(|field| field.is_open())
            .and_then(|field| {
                let count = field.suggestions().len().min(MAX_SUGGESTION_ROWS) as u16;
                let height = (count + 2).min(chart_block.height);
                (height > 2).then(|| {
                    (
                        focus,
                        Rect {
                            x: fields[focus].x,
                            y: chart_block.y,
                            width: fields[focus].width,
                            height,
                        },
                    )
                })
            });

        Self {
            frame,
            fields,
            compare_button: field_row[3],
            banner: rows[1],
            chart_block,
            chart: CellViewport::fit(canvas.x, canvas.y, canvas.width, canvas.height),
            hint: rows[3],
            suggestions,
        }
    }

    /// The open panel is checked first since it overlaps the chart.
    pub fn hit_test(&self, form: &CompareForm, column: u16, row: u16) -> FormHit {
        let position = Position::new(column, row);

        if let Some((index, panel)) = self.suggestions {
            if panel.contains(position) {
                let list = panel.inner(Margin::new(1, 1));
                let picked = form
                    .field(index)
                    .filter(|_| list.contains(position))
                    .and_then(|field| {
                        field.row_at(usize::from(list.height), usize::from(row - list.y))
                    });
                return match picked {
                    Some(row) => FormHit::Suggestion { field: index, row },
                    None => FormHit::SuggestionPanel(index),
                };
            }
        }

        if let Some(index) = self.fields.iter().position(|rect| rect.contains(position)) {
            return FormHit::Field(index);
        }
        if self.compare_button.contains(position) {
            return FormHit::CompareButton;
        }
        FormHit::Outside
    }

    const fn chart_area(&self) -> Rect {
        Rect {
            x: self.chart.x,
            y: self.chart.y,
            width: self.chart.width,
            height: self.chart.height,
        }
    }
}

pub fn render_page(state: &WebState, f: &mut Frame<'_>) {
    let layout = state.layout();

    let block = Block::default()
        .title(" Stat Radar ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    f.render_widget(block, layout.frame);

    if state.store.is_none() {
        let loading = Paragraph::new(format!("Loading {}...", crate::DATA_URL))
            .alignment(Alignment::Center);
        f.render_widget(loading, layout.frame.inner(Margin::new(1, 1)));
        return;
    }

    render_fields(state, f, &layout);
    if let Some(message) = &state.error {
        render_error_banner(message, f, layout.banner);
    }
    render_chart(state, f, &layout);
    render_hint(f, layout.hint);
    render_suggestions(state, f, &layout);
    render_tooltip(state, f);
}

fn render_fields(state: &WebState, f: &mut Frame<'_>, layout: &PageLayout) {
    let blink = (js_sys::Date::now() / 500.0) as u64 % 2 == 0;

    for (index, (field, area)) in state.form.fields().iter().zip(layout.fields).enumerate() {
        let focused = index == state.form.focus();
        let color = series_color(slot_color(index));
        let mut text = field.text().to_string();
        if focused && blink {
            text.push('█');
        }

        let title = if index == 2 {
            format!(" Creature {} (optional) ", index + 1)
        } else {
            format!(" Creature {} ", index + 1)
        };
        let paragraph = Paragraph::new(text).block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(color))
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(color)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        f.render_widget(paragraph, area);
    }

    let button = Paragraph::new("Compare")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(button, layout.compare_button);
}

fn render_suggestions(state: &WebState, f: &mut Frame<'_>, layout: &PageLayout) {
    let Some((index, panel)) = layout.suggestions else {
        return;
    };
    let Some(field) = state.form.field(index) else {
        return;
    };

    let visible_rows = usize::from(panel.inner(Margin::new(1, 1)).height);
    let lines = field
        .suggestions()
        .iter()
        .enumerate()
        .skip(field.first_visible(visible_rows))
        .take(visible_rows)
        .map(|(row, name)| {
            if field.highlighted() == Some(row) {
                TextLine::from(Span::styled(
                    format!("> {name}"),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ))
            } else {
                TextLine::from(format!("  {name}"))
            }
        })
        .collect::<Vec<_>>();

    f.render_widget(Clear, panel);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        panel,
    );
}

fn render_error_banner(message: &str, f: &mut Frame<'_>, area: Rect) {
    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Comparison failed (Esc or click to dismiss) ")
                .title_style(Style::default().fg(Color::Red))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(banner, area);
}

fn render_hint(f: &mut Frame<'_>, area: Rect) {
    f.render_widget(
        Paragraph::new(
            "Tab next field | Up/Down pick | Enter accept or compare | Esc dismiss | hover a point for its value",
        )
        .style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn render_chart(state: &WebState, f: &mut Frame<'_>, layout: &PageLayout) {
    let block = Block::default()
        .title(" Base Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, layout.chart_block);

    if !layout.chart.is_drawable() {
        return;
    }

    let scene = CanvasScene::new(&state.chart, &layout.chart, state.hover.current());
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(series_color(BACKGROUND))
        .x_bounds(scene.x_bounds)
        .y_bounds(scene.y_bounds)
        .paint(|ctx| paint_scene(ctx, &scene, state.fills.fills()));

    f.render_widget(canvas, layout.chart_area());
}

fn paint_scene(ctx: &mut Context<'_>, scene: &CanvasScene, fills: &[Fill]) {
    for shape in &scene.grid {
        draw_shape(ctx, shape);
    }

    ctx.layer();
    for fill in fills {
        ctx.draw(&Points {
            coords: fill.coords.as_slice(),
            color: series_color(fill.color),
        });
    }

    ctx.layer();
    for shape in &scene.series {
        draw_shape(ctx, shape);
    }
    for label in &scene.labels {
        print_label(ctx, label);
    }
}

fn draw_shape(ctx: &mut Context<'_>, shape: &Shape) {
    match *shape {
        Shape::Segment { from, to, color } => ctx.draw(&CanvasLine {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color: series_color(color),
        }),
        Shape::Marker {
            center,
            radius,
            color,
        } => ctx.draw(&Circle {
            x: center.0,
            y: center.1,
            radius,
            color: series_color(color),
        }),
    }
}

fn print_label(ctx: &mut Context<'_>, label: &Label) {
    let spans = label
        .spans
        .iter()
        .map(|(text, color)| Span::styled(text.clone(), Style::default().fg(series_color(*color))))
        .collect::<Vec<_>>();
    ctx.print(label.at.0, label.at.1, TextLine::from(spans));
}

fn render_tooltip(state: &WebState, f: &mut Frame<'_>) {
    if !state.tooltip.is_visible() {
        return;
    }

    let frame = f.area();
    let text = format!(" {} ", state.tooltip.text());
    let width = (text.chars().count() as u16).min(frame.width);
    let (x, y) = state.tooltip.position();
    let area = Rect {
        x: (x.max(0.0) as u16).min(frame.right().saturating_sub(width)),
        y: (y.max(0.0) as u16).min(frame.bottom().saturating_sub(1)),
        width,
        height: 1,
    };

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

const fn series_color(color: SeriesColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Grid cell under client pixel `(x, y)`. The DOM grid fills the window, so
/// one cell spans the window size divided by the grid size.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cell_at(x: f64, y: f64, window: (f64, f64), grid: Rect) -> Option<(u16, u16)> {
    if grid.width == 0 || grid.height == 0 || window.0 <= 0.0 || window.1 <= 0.0 {
        return None;
    }
    let column = (x * f64::from(grid.width) / window.0).floor();
    let row = (y * f64::from(grid.height) / window.1).floor();
    let inside = (0.0..f64::from(grid.width)).contains(&column)
        && (0.0..f64::from(grid.height)).contains(&row);
    inside.then(|| (column as u16 + grid.x, row as u16 + grid.y))
}
