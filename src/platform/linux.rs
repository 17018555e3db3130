// Markshelf config path for Linux: $XDG_CONFIG_HOME/markshelf or ~/.config/markshelf

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Markshelf on Linux.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

fn config_dir_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join("markshelf"),
        None => {
            let home = home.unwrap_or_else(|| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("markshelf")
        }
    }
}
