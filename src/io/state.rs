use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI session state (written to .state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionState {
    /// Last selected day id
    #[serde(default)]
    pub selected_day_id: Option<i64>,
    /// Cursor index into the task list
    #[serde(default)]
    pub cursor: usize,
}

/// Read .state.json from the data directory. Missing or unreadable state
/// is simply absent.
pub fn read_session(data_dir: &Path) -> Option<SessionState> {
    let path = data_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory.
pub fn write_session(data_dir: &Path, state: &SessionState) -> Result<(), std::io::Error> {
    let path = data_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = SessionState {
            selected_day_id: Some(4),
            cursor: 2,
        };
        write_session(dir.path(), &state).unwrap();

        let restored = read_session(dir.path()).unwrap();
        assert_eq!(restored.selected_day_id, Some(4));
        assert_eq!(restored.cursor, 2);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_session(dir.path()).is_none());
    }

    #[test]
    fn garbage_file_is_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".state.json"), "not json").unwrap();
        assert!(read_session(dir.path()).is_none());
    }
}
