use crate::autocomplete::{Autocomplete, ClickTarget};
use crate::chart::{ChartConfig, RadarChart, MAX_SERIES};
use crate::compare::compare;
use crate::error::CompareError;
use crate::store::DatasetStore;

/// Where a pointer press landed on a compare page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    Field(usize),
    /// Suggestion `row` of field `field`'s panel.
    Suggestion { field: usize, row: usize },
    /// The border of field `field`'s panel.
    SuggestionPanel(usize),
    CompareButton,
    Outside,
}

/// The comparison controller: three name fields, the focused one, and the
/// compare action.
#[derive(Debug, Clone, Default)]
pub struct CompareForm {
    fields: [Autocomplete; MAX_SERIES],
    focus: usize,
}

impl CompareForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Autocomplete] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Autocomplete> {
        self.fields.get(index)
    }

    pub const fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> &Autocomplete {
        &self.fields[self.focus]
    }

    pub fn focused_mut(&mut self) -> &mut Autocomplete {
        &mut self.fields[self.focus]
    }

    /// Moves focus and closes the panel of the field being left.
    pub fn set_focus(&mut self, index: usize) {
        if index < MAX_SERIES && index != self.focus {
            self.fields[self.focus].hide();
            self.focus = index;
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus((self.focus + 1) % MAX_SERIES);
    }

    pub fn focus_prev(&mut self) {
        self.set_focus((self.focus + MAX_SERIES - 1) % MAX_SERIES);
    }

    pub fn insert_char(&mut self, store: &DatasetStore, ch: char) {
        self.fields[self.focus].insert_char(store, ch);
    }

    pub fn backspace(&mut self, store: &DatasetStore) {
        self.fields[self.focus].backspace(store);
    }

    pub fn set_text(&mut self, store: &DatasetStore, index: usize, text: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_text(store, text);
        }
    }

    /// Picks suggestion `row` of field `index` and focuses that field.
    pub fn select_suggestion(&mut self, index: usize, row: usize) -> bool {
        self.set_focus(index);
        self.fields
            .get_mut(index)
            .is_some_and(|field| field.select(row))
    }

    /// Routes a page-level click: `hit` is the field whose input or panel
    /// was clicked, every other field sees an outside click.
    pub fn handle_click(&mut self, hit: Option<(usize, ClickTarget)>) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            match hit {
                Some((hit_index, target)) if hit_index == index => field.handle_click(target),
                _ => field.handle_click(ClickTarget::Outside),
            }
        }
        if let Some((index, ClickTarget::Input)) = hit {
            self.focus = index;
        }
    }

    /// Applies a pointer press; `true` means the press asks for a comparison.
    pub fn click(&mut self, hit: FormHit) -> bool {
        match hit {
            FormHit::Suggestion { field, row } => {
                if !self.select_suggestion(field, row) {
                    self.handle_click(Some((field, ClickTarget::Suggestions)));
                }
            }
            FormHit::SuggestionPanel(field) => {
                self.handle_click(Some((field, ClickTarget::Suggestions)));
            }
            FormHit::Field(field) => self.handle_click(Some((field, ClickTarget::Input))),
            FormHit::CompareButton => {
                self.handle_click(None);
                return true;
            }
            FormHit::Outside => self.handle_click(None),
        }
        false
    }

    pub fn hide_suggestions(&mut self) {
        for field in &mut self.fields {
            field.hide();
        }
    }

    pub fn any_open(&self) -> bool {
        self.fields.iter().any(Autocomplete::is_open)
    }

    pub fn inputs(&self) -> [&str; MAX_SERIES] {
        [
            self.fields[0].text(),
            self.fields[1].text(),
            self.fields[2].text(),
        ]
    }

    /// Resolves the fields and builds a fresh chart, or says why it cannot.
    pub fn submit(
        &mut self,
        store: &DatasetStore,
        config: &ChartConfig,
    ) -> Result<RadarChart, CompareError> {
        self.hide_suggestions();
        let subjects = compare(store, &self.inputs())?;
        let chart = RadarChart::build(config, &subjects)?;
        tracing::info!(
            subjects = ?subjects.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "rendered comparison"
        );
        Ok(chart)
    }

}
