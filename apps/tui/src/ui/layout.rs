use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};
use statradar_core::{CellViewport, CompareForm, FormHit};

pub const FIELD_COUNT: usize = 3;
pub const MAX_SUGGESTION_ROWS: usize = 8;

/// Every rect the compare screen draws, computed from the frame area alone so
/// rendering and mouse hit testing agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub fields: [Rect; FIELD_COUNT],
    pub compare_button: Rect,
    pub chart_block: Rect,
    /// Canvas cells inside the chart block, two columns per row.
    pub chart: CellViewport,
    pub side: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
    pub suggestions: [Option<Rect>; FIELD_COUNT],
}

impl ScreenLayout {
    pub fn compute(area: Rect, form: &CompareForm) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Fields
                Constraint::Min(10),   // Chart and side panel
                Constraint::Length(3), // Status
                Constraint::Length(1), // Shortcuts
            ])
            .split(area.inner(Margin::new(1, 0)));

        let field_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(13),
            ])
            .split(rows[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
            .split(rows[2]);

        let fields = [field_row[0], field_row[1], field_row[2]];
        let mut suggestions = [None; FIELD_COUNT];
        for (index, field) in form.fields().iter().enumerate().take(FIELD_COUNT) {
            if field.is_open() {
                suggestions[index] =
                    suggestion_rect(fields[index], field.suggestions().len(), area);
            }
        }

        Self {
            title: rows[0],
            fields,
            compare_button: field_row[3],
            chart_block: body[0],
            chart: fit_chart(body[0].inner(Margin::new(1, 1))),
            side: body[1],
            status: rows[3],
            shortcuts: rows[4],
            suggestions,
        }
    }

    /// Suggestion panels are checked first since they overlap the chart.
    pub fn hit_test(&self, form: &CompareForm, column: u16, row: u16) -> FormHit {
        let position = Position::new(column, row);

        for (index, panel) in self.suggestions.iter().enumerate() {
            let Some(panel) = panel else { continue };
            if !panel.contains(position) {
                continue;
            }
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

        if let Some(index) = self.fields.iter().position(|rect| rect.contains(position)) {
            return FormHit::Field(index);
        }
        if self.compare_button.contains(position) {
            return FormHit::CompareButton;
        }
        FormHit::Outside
    }

    pub const fn chart_area(&self) -> Rect {
        Rect {
            x: self.chart.x,
            y: self.chart.y,
            width: self.chart.width,
            height: self.chart.height,
        }
    }
}

fn fit_chart(area: Rect) -> CellViewport {
    CellViewport::fit(area.x, area.y, area.width, area.height)
}

fn suggestion_rect(field: Rect, count: usize, bounds: Rect) -> Option<Rect> {
    let rows = count.min(MAX_SUGGESTION_ROWS) as u16;
    let top = field.y + field.height;
    let bottom = bounds.y + bounds.height;
    if rows == 0 || top >= bottom {
        return None;
    }
    Some(Rect {
        x: field.x,
        y: top,
        width: field.width,
        height: (rows + 2).min(bottom - top),
    })
}

#[cfg(test)]
mod tests {
    use super::ScreenLayout;
    use ratatui::layout::Rect;
    use statradar_core::{ChartConfig, CompareForm, DatasetStore, FormHit};

    const DATASET: &str = include_str!("../../../../data/pokemon.json");

    fn area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn chart_keeps_two_columns_per_row() {
        let layout = ScreenLayout::compute(area(), &CompareForm::new());

        assert_eq!(layout.chart.width, layout.chart.height * 2);
        assert!(layout.chart.height > 0);
    }

    #[test]
    fn chart_position_is_centred_and_bounded() {
        let layout = ScreenLayout::compute(area(), &CompareForm::new());
        let config = ChartConfig::default();
        let centre_col = layout.chart.x + layout.chart.width / 2;
        let centre_row = layout.chart.y + layout.chart.height / 2;

        let (x, y) = layout.chart.chart_position(&config, centre_col, centre_row).unwrap();
        let (cell_w, cell_h) = layout.chart.cell_size(&config);

        assert!(x.abs() <= cell_w);
        assert!(y.abs() <= cell_h);
        assert!(layout.chart.chart_position(&config, 0, 0).is_none());
        assert_eq!(layout.chart_area().width, layout.chart.width);
    }

    #[test]
    fn open_panel_maps_rows_to_suggestions() {
        let store = DatasetStore::from_json(DATASET).unwrap();
        let mut form = CompareForm::new();
        form.set_text(&store, 0, "char");

        let layout = ScreenLayout::compute(area(), &form);
        let panel = layout.suggestions[0].unwrap();

        assert_eq!(panel.height, 5);
        assert_eq!(
            layout.hit_test(&form, panel.x + 2, panel.y + 2),
            FormHit::Suggestion { field: 0, row: 1 }
        );
        assert_eq!(layout.hit_test(&form, panel.x, panel.y), FormHit::SuggestionPanel(0));
        assert!(layout.suggestions[1].is_none());
    }

    #[test]
    fn fields_and_button_are_hit() {
        let form = CompareForm::new();
        let layout = ScreenLayout::compute(area(), &form);
        let second = layout.fields[1];
        let button = layout.compare_button;

        assert_eq!(layout.hit_test(&form, second.x + 1, second.y + 1), FormHit::Field(1));
        assert_eq!(layout.hit_test(&form, button.x + 1, button.y + 1), FormHit::CompareButton);
        assert_eq!(layout.hit_test(&form, 0, 39), FormHit::Outside);
    }
}
