use crate::app::App;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::fields::{render_fields, render_suggestions};
use crate::ui::widgets::popup::render_error_popup;
use crate::ui::widgets::radar::{render_mini_radar, render_radar, render_tooltip};
use crate::ui::widgets::stats::render_side_panel;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_compare(app: &App, f: &mut Frame<'_>) {
    let layout = ScreenLayout::compute(f.area(), &app.form);

    render_title_section(app, f, layout.title);
    render_fields(app, f, &layout);
    render_radar(app, f, &layout);
    render_side_panel(app, f, layout.side);
    render_status_section(app, f, layout.status);
    render_shortcuts(f, layout.shortcuts);

    render_suggestions(app, f, &layout);
    render_tooltip(app, f);

    if let Some(message) = &app.error {
        render_error_popup(f, message);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(title_block, area);

    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(area.inner(Margin::new(1, 1)));

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Stat ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Radar",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  compare base stats of two or three creatures",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, title_chunks[0]);

    render_mini_radar(f, title_chunks[1], app.animation_counter);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Gray);
    let shortcuts = [
        ("Tab", "next field"),
        ("↑/↓", "pick"),
        ("Enter", "accept/compare"),
        ("Esc", "dismiss"),
        ("Ctrl-U", "clear"),
        ("F1", "help"),
        ("Ctrl-C", "quit"),
    ];

    let spans = shortcuts
        .iter()
        .flat_map(|(k, label)| {
            [
                Span::styled(*k, key),
                Span::styled(format!(" {label}  "), text),
            ]
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}
