use crate::app::App;
use crate::ui::layout::ScreenLayout;
use crate::ui::widgets::series_color;
use ratatui::layout::{Alignment, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use statradar_core::chart::slot_color;

pub fn render_fields(app: &App, f: &mut Frame<'_>, layout: &ScreenLayout) {
    let cursor = cursor_char(app.animation_counter);

    for (index, (field, area)) in app.form.fields().iter().zip(layout.fields).enumerate() {
        let focused = index == app.form.focus();
        let color = series_color(slot_color(index));
        let title = if index == 2 {
            format!(" Creature {} (optional) ", index + 1)
        } else {
            format!(" Creature {} ", index + 1)
        };

        let mut spans = vec![Span::styled(
            field.text().to_string(),
            Style::default().fg(Color::White),
        )];
        if focused {
            spans.push(Span::styled(cursor, Style::default().fg(color)));
        }

        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(color))
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            });

        f.render_widget(Paragraph::new(TextLine::from(spans)).block(block), area);
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

/// Open suggestion lists, drawn after the chart so they overlay it.
pub fn render_suggestions(app: &App, f: &mut Frame<'_>, layout: &ScreenLayout) {
    for (field, panel) in app.form.fields().iter().zip(layout.suggestions) {
        let Some(panel) = panel else { continue };
        let visible_rows = usize::from(panel.inner(Margin::new(1, 1)).height);
        let offset = field.first_visible(visible_rows);

        let lines = field
            .suggestions()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(index, name)| {
                if field.highlighted() == Some(index) {
                    TextLine::from(Span::styled(
                        format!("> {name}"),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    TextLine::from(Span::raw(format!("  {name}")))
                }
            })
            .collect::<Vec<_>>();

        f.render_widget(Clear, panel);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            ),
            panel,
        );
    }
}

fn cursor_char(animation: f64) -> &'static str {
    if animation.sin() >= 0.0 {
        "█"
    } else {
        " "
    }
}
