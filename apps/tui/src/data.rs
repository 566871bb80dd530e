use statradar_core::{DatasetStore, StoreError};
use std::path::Path;

/// Reads and parses the dataset file once.
pub async fn load_store(path: &Path) -> Result<DatasetStore, StoreError> {
    let json = tokio::fs::read_to_string(path).await?;
    DatasetStore::from_json(&json)
}

/// Loads the dataset, or logs the failure and returns the empty store so
/// every later lookup reports "not found". There is no retry.
pub async fn load_or_unavailable(path: &Path) -> (DatasetStore, Option<String>) {
    match load_store(path).await {
        Ok(store) => {
            tracing::info!(path = %path.display(), count = store.len(), "dataset loaded");
            (store, None)
        }
        Err(error) => {
            tracing::error!(path = %path.display(), %error, "error loading dataset");
            (DatasetStore::default(), Some(error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::load_or_unavailable;
    use std::path::PathBuf;

    #[tokio::test]
    async fn bundled_dataset_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/pokemon.json");

        let (store, error) = load_or_unavailable(&path).await;

        assert!(error.is_none());
        assert!(store.resolve("Pikachu").is_some());
    }

    #[tokio::test]
    async fn missing_file_leaves_store_empty() {
        let (store, error) = load_or_unavailable(&PathBuf::from("does/not/exist.json")).await;

        assert!(error.is_some());
        assert!(store.is_empty());
        assert!(store.resolve("Pikachu").is_none());
    }
}
