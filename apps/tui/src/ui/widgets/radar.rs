use crate::app::App;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::series_color;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use statradar_core::scene::BACKGROUND;
use statradar_core::{CanvasScene, Fill, Label, Shape};

/// Grid, filled polygons, markers, labels and legend on a braille canvas.
pub fn render_radar(app: &App, f: &mut Frame<'_>, layout: &ScreenLayout) {
    let title = if app.chart.is_empty() {
        " Base Stats: enter two or three names "
    } else {
        " Base Stats "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, layout.chart_block);

    if !layout.chart.is_drawable() {
        return;
    }

    let scene = CanvasScene::new(&app.chart, &layout.chart, app.hover.current());
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(series_color(BACKGROUND))
        .x_bounds(scene.x_bounds)
        .y_bounds(scene.y_bounds)
        .paint(|ctx| paint_scene(ctx, &scene, app.fills.fills()));

    f.render_widget(canvas, layout.chart_area());
}

/// Grid first, then the fills and the series on their own layers so braille
/// dots of the outlines are not merged into the fill colour.
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

/// The hover tooltip, drawn last so it sits above everything but popups.
pub fn render_tooltip(app: &App, f: &mut Frame<'_>) {
    if !app.tooltip.is_visible() {
        return;
    }

    let frame = f.area();
    let text = format!(" {} ", app.tooltip.text());
    let width = (text.chars().count() as u16).min(frame.width);
    let (x, y) = app.tooltip.position();
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

/// Small sweeping radar for the title bar.
pub fn render_mini_radar(f: &mut Frame<'_>, area: Rect, animation: f64) {
    if area.width < 2 || area.height < 1 {
        return;
    }

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .paint(|ctx| {
                let radius = 0.9;
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius,
                    color: Color::DarkGray,
                });

                let sweep_x = animation.cos() * radius;
                let sweep_y = animation.sin() * radius;
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: sweep_x,
                    y2: sweep_y,
                    color: Color::Cyan,
                });
            })
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0]),
        area,
    );
}
