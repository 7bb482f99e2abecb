//! Session token storage.
//!
//! The token lives in `~/.config/todo/credentials.json` (or the file named by
//! `TODO_CREDENTIALS_FILE`), readable only by the owner on Unix.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileCredentials {
    token: Option<String>,
}

fn credentials_path(config: &Config) -> PathBuf {
    config.credentials_file.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("todo")
            .join("credentials.json")
    })
}

fn load_file_credentials(path: &Path) -> FileCredentials {
    if path.exists() {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    } else {
        FileCredentials::default()
    }
}

fn save_file_credentials(path: &Path, creds: &FileCredentials) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(creds)?;
    std::fs::write(path, json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Load the session token, with a helpful error if not signed in.
pub fn get_token(config: &Config) -> Result<String> {
    load_file_credentials(&credentials_path(config))
        .token
        .ok_or_else(|| anyhow!("Not signed in. Run: todo login <email>"))
}

/// Store the session token.
pub fn set_token(config: &Config, token: String) -> Result<()> {
    let path = credentials_path(config);
    let mut creds = load_file_credentials(&path);
    creds.token = Some(token);
    save_file_credentials(&path, &creds)
}

/// Delete all stored credentials.
pub fn delete_all(config: &Config) -> Result<()> {
    let path = credentials_path(config);
    if path.exists() {
        std::fs::remove_file(&path)?;
    }

    Ok(())
}
