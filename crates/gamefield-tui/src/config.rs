use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

/// Front-end preferences, persisted between runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Blocks per board side.
    pub grid_amount: usize,
    /// Cells per block side.
    pub tile_amount: usize,
    /// Percent chance for a cell to receive a starter value on a new game.
    pub fill_chance: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            grid_amount: 3,
            tile_amount: 3,
            fill_chance: 10,
        }
    }
}

fn prefs_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamefield")
        .join("config.json")
}

impl Preferences {
    /// Load saved preferences, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = prefs_path();
        let Ok(data) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str(&data) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("ignoring malformed preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> std::io::Result<()> {
        let path = prefs_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip_as_json() {
        let prefs = Preferences {
            grid_amount: 4,
            tile_amount: 2,
            fill_chance: 25,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
