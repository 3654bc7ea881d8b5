use super::types::SessionState;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default session state file path (~/.config/acctnav/session.json)
pub fn get_session_path() -> PathBuf {
    crate::config::get_config_dir().join("session.json")
}

/// Load session state from a JSON file
///
/// If the file doesn't exist, returns a new empty state.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_session_state(path: &Path) -> Result<SessionState> {
    if !path.exists() {
        return Ok(SessionState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open session state file at {}", path.display()))?;

    let state: SessionState =
        serde_json::from_reader(file).context("Failed to load session state")?;

    // Version check
    if state.version != 1 {
        anyhow::bail!("Unsupported session state version: {}", state.version);
    }

    Ok(state)
}

/// Save session state to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left in a corrupted state.
/// Creates the config directory if it doesn't exist.
pub fn save_session_state(path: &Path, state: &SessionState) -> Result<()> {
    crate::config::ensure_config_dir()?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize session state")?;

    file.commit().context("Failed to save session state")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("acctnav_test_missing.json");
        // Ensure it doesn't exist
        let _ = std::fs::remove_file(&temp_path);

        let state = load_session_state(&temp_path).unwrap();
        assert_eq!(state.version, 1);
        assert!(state.account_id.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("acctnav_test_roundtrip.json");
        // Ensure clean state
        let _ = std::fs::remove_file(&temp_path);

        let mut state = SessionState::new();
        state.set_account("42".to_string());

        save_session_state(&temp_path, &state).unwrap();
        let loaded = load_session_state(&temp_path).unwrap();

        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.account_id.as_deref(), Some("42"));

        // Cleanup
        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let temp_path = env::temp_dir().join("acctnav_test_version.json");
        std::fs::write(&temp_path, r#"{"version": 9, "account_id": null}"#).unwrap();

        let result = load_session_state(&temp_path);
        assert!(result.is_err());

        let _ = std::fs::remove_file(&temp_path);
    }
}
