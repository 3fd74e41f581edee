pub mod config_io;
pub mod state;

use std::path::PathBuf;

/// Resolve the data directory: an explicit override, or `~/.weekly`.
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) => PathBuf::from(dir),
        None => {
            let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
            home.join(".weekly")
        }
    }
}
