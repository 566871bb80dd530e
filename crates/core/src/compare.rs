use crate::chart::{Subject, MAX_SERIES, MIN_SERIES};
use crate::error::{CompareError, UnknownSubject};
use crate::store::DatasetStore;

/// Resolves 2 or 3 raw name inputs into chartable subjects.
///
/// The first two names are required. The third is skipped when blank. Every
/// filled name must resolve, otherwise nothing is charted and the error lists
/// each name that missed. Display names are the trimmed inputs as typed.
pub fn compare<S: AsRef<str>>(
    store: &DatasetStore,
    inputs: &[S],
) -> Result<Vec<Subject>, CompareError> {
    if !(MIN_SERIES..=MAX_SERIES).contains(&inputs.len()) {
        return Err(CompareError::InputCount {
            count: inputs.len(),
        });
    }

    let mut subjects = Vec::with_capacity(inputs.len());
    let mut unknown = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        let name = input.as_ref().trim();
        if name.is_empty() {
            if index < MIN_SERIES {
                return Err(CompareError::MissingName { slot: index + 1 });
            }
            continue;
        }

        match store.resolve(name) {
            Some(profile) => subjects.push(Subject::new(name, profile)),
            None => {
                tracing::debug!(name, "subject not found");
                unknown.push(UnknownSubject {
                    name: name.to_string(),
                    hint: store.closest(name).map(str::to_string),
                });
            }
        }
    }

    if unknown.is_empty() {
        Ok(subjects)
    } else {
        Err(CompareError::NotFound(unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::compare;
    use crate::error::CompareError;
    use crate::record::CreatureRecord;
    use crate::store::DatasetStore;

    fn store() -> DatasetStore {
        DatasetStore::from_json(
            r#"[
                {"Name": "Pikachu", "HP": 35, "Attack": 55, "Defense": 40,
                 "Special_Attack": 50, "Special_Defense": 50, "Speed": 90},
                {"Name": "Bulbasaur", "HP": 45, "Attack": 49, "Defense": 49,
                 "Special_Attack": 65, "Special_Defense": 65, "Speed": 45},
                {"Name": "Charmander", "HP": 39, "Attack": 52, "Defense": 43,
                 "Special_Attack": 60, "Special_Defense": 50, "Speed": 65}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn two_filled_fields_give_two_subjects() {
        let subjects = compare(&store(), &["  pikachu ", "Bulbasaur", ""]).unwrap();

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].name, "pikachu");
        assert_eq!(subjects[0].profile.speed, 90);
        assert_eq!(subjects[1].name, "Bulbasaur");
    }

    #[test]
    fn three_filled_fields_give_three_subjects() {
        let subjects = compare(&store(), &["Pikachu", "Bulbasaur", "Charmander"]).unwrap();

        assert_eq!(
            subjects.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            ["Pikachu", "Bulbasaur", "Charmander"]
        );
    }

    #[test]
    fn blank_mandatory_field_is_reported_by_slot() {
        assert_eq!(
            compare(&store(), &["Pikachu", "   "]),
            Err(CompareError::MissingName { slot: 2 })
        );
    }

    #[test]
    fn unknown_names_are_all_reported() {
        let Err(CompareError::NotFound(unknown)) =
            compare(&store(), &["Missingno", "Bulbasaur", "Pikachoo"])
        else {
            panic!("expected NotFound");
        };

        assert_eq!(unknown.len(), 2);
        assert_eq!(unknown[0].name, "Missingno");
        assert_eq!(unknown[1].hint.as_deref(), Some("Pikachu"));
    }

    #[test]
    fn input_count_is_checked() {
        assert_eq!(
            compare(&store(), &["Pikachu"]),
            Err(CompareError::InputCount { count: 1 })
        );
    }

    #[test]
    fn unavailable_store_resolves_nothing() {
        let store = DatasetStore::from_records(Vec::<CreatureRecord>::new());

        assert!(matches!(
            compare(&store, &["Pikachu", "Bulbasaur"]),
            Err(CompareError::NotFound(unknown)) if unknown.len() == 2
        ));
    }
}
