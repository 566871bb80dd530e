use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("a comparison chart needs 2 or 3 subjects, got {count}")]
    SeriesCount { count: usize },
}

/// A name that did not resolve, with the closest known name if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubject {
    pub name: String,
    pub hint: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("comparison takes 2 or 3 names, got {count}")]
    InputCount { count: usize },

    #[error("Please enter a name in field {slot}.")]
    MissingName { slot: usize },

    #[error("{}", describe_unknown(.0))]
    NotFound(Vec<UnknownSubject>),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

fn describe_unknown(unknown: &[UnknownSubject]) -> String {
    let names = unknown
        .iter()
        .map(|subject| match &subject.hint {
            Some(hint) => format!("\"{}\" (did you mean {hint}?)", subject.name),
            None => format!("\"{}\"", subject.name),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Not found: {names}. Please check the names and try again.")
}

#[cfg(test)]
mod tests {
    use super::{CompareError, UnknownSubject};

    #[test]
    fn not_found_message_lists_names_and_hints() {
        let error = CompareError::NotFound(vec![
            UnknownSubject {
                name: "Pikachoo".to_string(),
                hint: Some("Pikachu".to_string()),
            },
            UnknownSubject {
                name: "Missingno".to_string(),
                hint: None,
            },
        ]);

        assert_eq!(
            error.to_string(),
            "Not found: \"Pikachoo\" (did you mean Pikachu?), \"Missingno\". \
             Please check the names and try again."
        );
    }
}
