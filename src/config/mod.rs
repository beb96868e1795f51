use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_json() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// Optional file config for the CLI; flags win over file values
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default = "default_json")]
    pub json: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    /// Load the first parseable config file from the search paths
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly-named config file
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                None
            }
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("plotmeter.toml"));
    paths.push(PathBuf::from(".plotmeter.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("plotmeter").join("config.toml"));
        paths.push(config_dir.join("plotmeter.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".plotmeter.toml"));
        paths.push(home.join(".config").join("plotmeter").join("config.toml"));
    }

    paths
}
