use crate::ui::widgets::popup::centered_rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const KEYS: [(&str, &str); 10] = [
    ("Tab / Shift-Tab", "Move between the three name fields"),
    ("Type", "Edit the focused field; matching names appear below it"),
    ("Up / Down", "Highlight a suggestion"),
    ("Enter", "Accept the highlighted suggestion, otherwise compare"),
    ("Esc", "Close suggestions or the error message, otherwise quit"),
    ("Ctrl-U", "Clear the focused field"),
    ("Mouse hover", "Show the exact value of a chart point"),
    ("Mouse click", "Focus a field, pick a suggestion or press Compare"),
    ("F1", "Toggle this help"),
    ("Ctrl-C", "Quit"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Fields 1 and 2 are required, field 3 is optional.",
            Style::default().fg(Color::White),
        )),
        TextLine::from(""),
    ];
    lines.extend(KEYS.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("{key:<16}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(*action),
        ])
    }));

    let help = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help (F1 or Esc to close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(help, area);
}
