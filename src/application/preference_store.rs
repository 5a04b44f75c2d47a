// Key-value store for persisted client preferences
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file {path} is not a JSON object: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
