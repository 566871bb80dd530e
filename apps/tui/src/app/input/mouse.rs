use crate::app::state::App;
use crate::ui::layout::ScreenLayout;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use statradar_core::Pointer;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        return;
    }

    let layout = ScreenLayout::compute(app.viewport, &app.form);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            pointer_moved(app, &layout, mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.dismiss_error() {
                return;
            }
            clicked(app, &layout, mouse.column, mouse.row);
        }
        _ => {}
    }
}

fn pointer_moved(app: &mut App, layout: &ScreenLayout, column: u16, row: u16) {
    let Some(chart) = layout.chart.chart_position(&app.config, column, row) else {
        app.hover.pointer_left(&mut app.tooltip);
        return;
    };

    let pointer = Pointer {
        chart,
        screen: (f64::from(column), f64::from(row)),
    };
    let slack = layout.chart.hover_slack(&app.config);
    if let Some(event) = app
        .hover
        .pointer_moved(&app.chart, pointer, slack, &mut app.tooltip)
    {
        tracing::trace!(?event, column, row, "marker hover");
    }
}

fn clicked(app: &mut App, layout: &ScreenLayout, column: u16, row: u16) {
    let hit = layout.hit_test(&app.form, column, row);
    tracing::trace!(?hit, column, row, "click");
    if app.form.click(hit) {
        app.compare();
    }
}
