use crate::app::App;
use crate::ui::widgets::series_color;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use statradar_core::Stat;

pub fn render_side_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(5)])
        .split(area);

    if app.chart.is_empty() {
        render_dataset_info(app, f, area);
        return;
    }

    render_stat_table(app, f, split[0]);
    render_total_barchart(app, f, split[1]);
}

fn render_dataset_info(app: &App, f: &mut Frame<'_>, area: Rect) {
    let text = if app.store.is_empty() {
        "No creatures loaded. Every lookup will report not found.".to_string()
    } else {
        format!(
            "{} creatures available.\n\nStart typing a name to see suggestions, \
             then press Enter to compare.",
            app.store.len()
        )
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Dataset ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_stat_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let datasets = &app.chart.datasets;

    let header = Row::new(
        std::iter::once("Stat".to_string()).chain(datasets.iter().map(|d| d.name.clone())),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row<'_>> = Stat::ALL
        .iter()
        .map(|stat| {
            Row::new(
                std::iter::once(stat.label().to_string()).chain(
                    datasets
                        .iter()
                        .map(|d| d.points[stat.index()].value.to_string()),
                ),
            )
        })
        .collect();

    rows.push(
        Row::new(std::iter::once("Type".to_string()).chain(datasets.iter().map(|d| {
            app.store
                .find(&d.name)
                .and_then(|record| record.type_label())
                .unwrap_or_else(|| "?".to_string())
        })))
        .style(Style::default().fg(Color::Gray)),
    );

    let widths = std::iter::once(Constraint::Length(8))
        .chain(datasets.iter().map(|_| Constraint::Fill(1)))
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(table, area);
}

fn render_total_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let totals: Vec<(String, u64, Color)> = app
        .chart
        .datasets
        .iter()
        .map(|dataset| {
            (
                dataset.name.clone(),
                u64::from(dataset.profile.total()),
                series_color(dataset.color),
            )
        })
        .collect();

    let bars: Vec<Bar<'_>> = totals
        .iter()
        .map(|(name, total, color)| {
            Bar::default()
                .value(*total)
                .label(TextLine::from(name.clone()))
                .style(Style::default().fg(*color))
                .value_style(Style::default().fg(Color::Black).bg(*color).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = totals.iter().map(|(_, total, _)| *total).max().unwrap_or(0).max(1);
    let bar_width = (area.width.saturating_sub(2) / 3).clamp(3, 12);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Base Stat Total ")
                .title_alignment(Alignment::Left)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_width(bar_width)
        .bar_gap(1);
    f.render_widget(chart, area);
}
