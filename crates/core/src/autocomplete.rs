use crate::store::DatasetStore;

/// Where a click landed relative to one autocomplete field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Suggestions,
    Outside,
}

/// A text field paired with its suggestion panel.
///
/// Every edit re-filters the store by name prefix. Instances share nothing,
/// so one per name field can run side by side.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    text: String,
    suggestions: Vec<String>,
    visible: bool,
    highlighted: Option<usize>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whether the suggestion panel is shown.
    pub const fn is_open(&self) -> bool {
        self.visible
    }

    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn set_text(&mut self, store: &DatasetStore, text: &str) {
        self.text = text.to_string();
        self.refresh(store);
    }

    pub fn insert_char(&mut self, store: &DatasetStore, ch: char) {
        self.text.push(ch);
        self.refresh(store);
    }

    pub fn backspace(&mut self, store: &DatasetStore) {
        self.text.pop();
        self.refresh(store);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.close();
    }

    /// Writes the chosen name into the field and clears the panel.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(name) = self.suggestions.get(index).cloned() else {
            return false;
        };
        self.text = name;
        self.close();
        true
    }

    pub fn accept_highlighted(&mut self) -> bool {
        match self.highlighted {
            Some(index) if self.visible => self.select(index),
            _ => false,
        }
    }

    pub fn highlight_next(&mut self) {
        if !self.visible {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = Some(self.highlighted.map_or(0, |index| (index + 1) % len));
    }

    pub fn highlight_prev(&mut self) {
        if !self.visible {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = Some(
            self.highlighted
                .map_or(len - 1, |index| if index == 0 { len - 1 } else { index - 1 }),
        );
    }

    /// Index of the first suggestion shown when the panel has room for
    /// `visible_rows`, scrolled so the highlighted row stays in view.
    pub fn first_visible(&self, visible_rows: usize) -> usize {
        let selected = self.highlighted.unwrap_or(0);
        if self.suggestions.len() <= visible_rows || selected < visible_rows {
            return 0;
        }
        selected + 1 - visible_rows
    }

    /// Suggestion index under line `line` of a panel showing `visible_rows`.
    pub fn row_at(&self, visible_rows: usize, line: usize) -> Option<usize> {
        let index = self.first_visible(visible_rows) + line;
        (line < visible_rows && index < self.suggestions.len()).then_some(index)
    }

    /// Hides the panel when a click lands outside both the field and its panel.
    pub fn handle_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.hide();
        }
    }

    /// Hides the panel but keeps the matches for the next edit.
    pub fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    fn close(&mut self) {
        self.suggestions.clear();
        self.hide();
    }

    fn refresh(&mut self, store: &DatasetStore) {
        let query = self.text.trim().to_lowercase();
        self.suggestions = if query.is_empty() {
            Vec::new()
        } else {
            store.suggest(&query).into_iter().map(str::to_string).collect()
        };
        self.visible = !self.suggestions.is_empty();
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{Autocomplete, ClickTarget};
    use crate::record::CreatureRecord;
    use crate::store::DatasetStore;

    fn store() -> DatasetStore {
        let names = ["Charmander", "Squirtle", "Charizard", "Bulbasaur"];
        DatasetStore::from_records(
            names
                .iter()
                .map(|name| CreatureRecord {
                    name: (*name).to_string(),
                    hp: 50,
                    attack: 50,
                    defense: 50,
                    special_attack: 50,
                    special_defense: 50,
                    speed: 50,
                    primary_type: None,
                    other_type: None,
                    generation: None,
                })
                .collect(),
        )
    }

    #[test]
    fn typing_filters_by_trimmed_lowercase_prefix() {
        let store = store();
        let mut field = Autocomplete::new();

        field.set_text(&store, "  ChAr ");

        assert_eq!(field.suggestions(), ["Charmander", "Charizard"]);
        assert!(field.is_open());
        assert_eq!(field.text(), "  ChAr ");
    }

    #[test]
    fn whitespace_only_input_hides_panel() {
        let store = store();
        let mut field = Autocomplete::new();

        field.set_text(&store, "c");
        field.set_text(&store, "   ");

        assert!(field.suggestions().is_empty());
        assert!(!field.is_open());
    }

    #[test]
    fn no_matches_hides_panel() {
        let store = store();
        let mut field = Autocomplete::new();

        field.set_text(&store, "mew");

        assert!(!field.is_open());
    }

    #[test]
    fn selecting_writes_full_name_and_clears_list() {
        let store = store();
        let mut field = Autocomplete::new();

        field.set_text(&store, "char");
        assert!(field.select(1));

        assert_eq!(field.text(), "Charizard");
        assert!(field.suggestions().is_empty());
        assert!(!field.is_open());
        assert!(!field.select(0));
    }

    #[test]
    fn keyboard_highlight_wraps_and_accepts() {
        let store = store();
        let mut field = Autocomplete::new();

        field.set_text(&store, "char");
        field.highlight_prev();
        assert_eq!(field.highlighted(), Some(1));
        field.highlight_next();
        assert_eq!(field.highlighted(), Some(0));
        assert!(field.accept_highlighted());

        assert_eq!(field.text(), "Charmander");
        assert!(!field.accept_highlighted());
    }

    #[test]
    fn backspace_refilters() {
        let store = store();
        let mut field = Autocomplete::new();

        field.set_text(&store, "chx");
        assert!(!field.is_open());
        field.backspace(&store);

        assert_eq!(field.suggestions(), ["Charmander", "Charizard"]);
    }

    #[test]
    fn outside_click_hides_only_that_field() {
        let store = store();
        let mut first = Autocomplete::new();
        let mut second = Autocomplete::new();

        first.set_text(&store, "c");
        second.insert_char(&store, 'b');

        first.handle_click(ClickTarget::Outside);
        second.handle_click(ClickTarget::Suggestions);

        assert!(!first.is_open());
        assert!(second.is_open());
        assert_eq!(second.suggestions(), ["Bulbasaur"]);
    }

    #[test]
    fn panel_scrolls_to_keep_highlight_visible() {
        let names = (0..12).map(|n| format!("Unown{n:02}")).collect::<Vec<_>>();
        let store = DatasetStore::from_records(
            names
                .iter()
                .map(|name| CreatureRecord {
                    name: name.clone(),
                    hp: 48,
                    attack: 72,
                    defense: 48,
                    special_attack: 72,
                    special_defense: 48,
                    speed: 48,
                    primary_type: None,
                    other_type: None,
                    generation: None,
                })
                .collect(),
        );
        let mut field = Autocomplete::new();
        field.set_text(&store, "unown");
        let shown = field.suggestions().len();

        assert_eq!(field.first_visible(shown), 0);
        assert_eq!(field.row_at(3, 1), Some(1));
        for _ in 0..(shown - 1) {
            field.highlight_next();
        }

        let last = shown - 1;
        assert_eq!(field.first_visible(3), last - 2);
        assert_eq!(field.row_at(3, 2), Some(last));
        assert_eq!(field.row_at(3, 3), None);
    }
}
