//! Settings infrastructure for texnav.
//!
//! Hosts can tune navigation behavior through a settings.toml discovered
//! near the document being edited. Missing or unparsable files fall back
//! to defaults; settings are never required.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Root settings structure loaded from settings.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Navigation configuration.
    pub navigation: Option<NavigationSettings>,
}

/// Settings for cursor-relative tag navigation.
#[derive(Debug, Default, Deserialize)]
pub struct NavigationSettings {
    /// Extra bytes of drift allowed around a selected tag before a moved
    /// cursor collapses the pair selection back to a single cursor
    /// (default: 0).
    pub collapse_slack: Option<usize>,
}

impl Settings {
    /// Slack to hand to `NavigationSession::with_slack`.
    pub fn collapse_slack(&self) -> usize {
        self.navigation
            .as_ref()
            .and_then(|n| n.collapse_slack)
            .unwrap_or(0)
    }
}

/// Load settings from a settings.toml file.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("failed to parse settings.toml: {}", e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover settings.toml by searching up the directory tree, then direct
/// children.
///
/// Search order:
/// 1. Walk up from `start_dir` to the filesystem root
/// 2. If not found, check immediate child directories of `start_dir`
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found settings.toml. If not found, returns
/// `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    // Phase 1: Walk up from start_dir
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join("settings.toml");
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    // Phase 2: Check immediate child directories
    if let Ok(entries) = std::fs::read_dir(start_dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
                let candidate = entry.path().join("settings.toml");
                if candidate.is_file() {
                    return (load_settings(&candidate), entry.path());
                }
            }
        }
    }

    (Settings::default(), start_dir.to_path_buf())
}
