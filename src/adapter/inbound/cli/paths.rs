//! Path utilities for tradelaunch.
//!
//! Settings are looked up in order:
//! - `./tradelaunch.toml` - next to the trading script
//! - `~/.tradelaunch/config.toml` - per-user defaults

use std::path::PathBuf;

/// Settings file name looked up in the working directory.
pub const LOCAL_SETTINGS: &str = "tradelaunch.toml";

/// Returns the tradelaunch home directory (`~/.tradelaunch/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tradelaunch")
}

/// Returns the per-user settings path (`~/.tradelaunch/config.toml`).
pub fn user_settings() -> PathBuf {
    home_dir().join("config.toml")
}

/// Settings files to try, most specific first.
pub fn settings_candidates() -> Vec<PathBuf> {
    vec![PathBuf::from(LOCAL_SETTINGS), user_settings()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_settings_come_first() {
        let candidates = settings_candidates();
        assert_eq!(candidates[0], PathBuf::from("tradelaunch.toml"));
        assert!(candidates[1].to_string_lossy().contains(".tradelaunch"));
    }
}
