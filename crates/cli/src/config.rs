use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Overrides the default credentials location.
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
}

fn default_api_url() -> String {
    "http://localhost:8000".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_server() {
        let config: Config = envy::prefixed("TODO_")
            .from_iter(Vec::<(String, String)>::new())
            .unwrap();

        assert_eq!(config.api_url, "http://localhost:8000");
        assert!(config.credentials_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config: Config = envy::prefixed("TODO_")
            .from_iter([
                ("TODO_API_URL".to_string(), "https://todo.example".to_string()),
                ("TODO_CREDENTIALS_FILE".to_string(), "/tmp/creds.json".to_string()),
            ])
            .unwrap();

        assert_eq!(config.api_url, "https://todo.example");
        assert_eq!(config.credentials_file, Some(PathBuf::from("/tmp/creds.json")));
    }
}
