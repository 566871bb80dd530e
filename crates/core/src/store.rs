use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::error::StoreError;
use crate::record::CreatureRecord;
use crate::stat::StatProfile;

/// Shortest query prefix still worth a fuzzy hint.
const HINT_MIN_CHARS: usize = 3;

/// In-memory collection of creature records, loaded once at startup.
///
/// `DatasetStore::default()` is the store left behind by a failed load: it
/// holds nothing, so every lookup reports "not found".
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    records: Vec<CreatureRecord>,
}

impl DatasetStore {
    pub const fn from_records(records: Vec<CreatureRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<CreatureRecord> = serde_json::from_str(json)?;
        tracing::debug!(count = records.len(), "parsed dataset");
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }

    /// First record whose name equals `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&CreatureRecord> {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase() == needle)
    }

    /// Stat extraction: the six stats of the record named `name`, ignoring case.
    pub fn resolve(&self, name: &str) -> Option<StatProfile> {
        self.find(name).map(CreatureRecord::profile)
    }

    /// Names starting with `query` (ignoring case), in dataset order.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let prefix = query.to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| record.name.to_lowercase().starts_with(&prefix))
            .map(|record| record.name.as_str())
            .collect()
    }

    /// Best fuzzy match for a name that did not resolve.
    ///
    /// Trailing characters are dropped one at a time until the query matches
    /// something, which catches typos near the end of a name.
    pub fn closest(&self, name: &str) -> Option<&str> {
        let query = name.trim().to_lowercase();
        let matcher = SkimMatcherV2::default();
        let chars = query.chars().collect::<Vec<_>>();

        for len in (HINT_MIN_CHARS..=chars.len()).rev() {
            let pattern = chars[..len].iter().collect::<String>();
            let best = self
                .records
                .iter()
                .filter_map(|record| {
                    matcher
                        .fuzzy_match(&record.name, &pattern)
                        .map(|score| (score, record.name.as_str()))
                })
                .fold(None, |best: Option<(i64, &str)>, candidate| match best {
                    Some(current) if current.0 >= candidate.0 => Some(current),
                    _ => Some(candidate),
                });

            if let Some((_, found)) = best {
                return Some(found);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetStore;
    use crate::record::CreatureRecord;

    fn record(name: &str, stats: [u16; 6]) -> CreatureRecord {
        CreatureRecord {
            name: name.to_string(),
            hp: stats[0],
            attack: stats[1],
            defense: stats[2],
            special_attack: stats[3],
            special_defense: stats[4],
            speed: stats[5],
            primary_type: None,
            other_type: None,
            generation: None,
        }
    }

    fn sample_store() -> DatasetStore {
        DatasetStore::from_records(vec![
            record("Charmander", [39, 52, 43, 60, 50, 65]),
            record("Squirtle", [44, 48, 65, 50, 64, 43]),
            record("Charizard", [78, 84, 78, 109, 85, 100]),
            record("Pikachu", [35, 55, 40, 50, 50, 90]),
        ])
    }

    #[test]
    fn suggest_keeps_dataset_order() {
        let store = sample_store();

        assert_eq!(store.suggest("char"), vec!["Charmander", "Charizard"]);
        assert_eq!(store.suggest("CHAR"), vec!["Charmander", "Charizard"]);
    }

    #[test]
    fn suggest_empty_query_returns_nothing() {
        assert!(sample_store().suggest("").is_empty());
    }

    #[test]
    fn suggest_matches_prefix_only() {
        let store = sample_store();

        assert!(store.suggest("zard").is_empty());
        assert_eq!(store.suggest("s"), vec!["Squirtle"]);
    }

    #[test]
    fn resolve_is_exact_and_case_insensitive() {
        let store = sample_store();

        let profile = store.resolve("pIkAcHu").unwrap();
        assert_eq!(profile.values(), [35, 55, 40, 50, 50, 90]);
        assert!(store.resolve("Pika").is_none());
        assert!(store.resolve("").is_none());
    }

    #[test]
    fn find_returns_first_duplicate() {
        let store = DatasetStore::from_records(vec![
            record("Ditto", [48, 48, 48, 48, 48, 48]),
            record("DITTO", [1, 1, 1, 1, 1, 1]),
        ]);

        assert_eq!(store.find("ditto").unwrap().hp, 48);
    }

    #[test]
    fn unavailable_store_misses_every_lookup() {
        let store = DatasetStore::default();

        assert!(store.is_empty());
        assert!(store.resolve("Pikachu").is_none());
        assert!(store.suggest("p").is_empty());
        assert!(store.closest("Pikachu").is_none());
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        assert!(DatasetStore::from_json("{\"Name\": \"Pikachu\"}").is_err());
        assert!(DatasetStore::from_json("[{\"Name\": \"Pikachu\", \"HP\": \"high\"}]").is_err());
    }

    #[test]
    fn closest_recovers_from_trailing_typos() {
        let store = sample_store();

        assert_eq!(store.closest("Pikachoo"), Some("Pikachu"));
        assert_eq!(store.closest("xyz"), None);
    }
}
