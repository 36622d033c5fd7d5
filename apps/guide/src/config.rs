use std::path::{Path, PathBuf};

use anyhow::Context;
use catalog::{media::MediaOptions, ReferencePolicy};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_FILE: &str = "rinkside.toml";
pub const ENV_PREFIX: &str = "APP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub strict_references: bool,
    pub featured_limit: usize,
    pub roster_preview_limit: usize,
    pub free_program_preview: usize,
    pub thumbnails_dir: String,
    pub avatar_base_url: String,
    pub avatar_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let media = MediaOptions::default();
        Self {
            catalog_path: None,
            strict_references: false,
            featured_limit: 8,
            roster_preview_limit: 10,
            free_program_preview: 5,
            thumbnails_dir: media.thumbnails_dir,
            avatar_base_url: media.avatar_base_url,
            avatar_size: media.avatar_size,
        }
    }
}

impl Settings {
    pub fn reference_policy(&self) -> ReferencePolicy {
        if self.strict_references {
            ReferencePolicy::Strict
        } else {
            ReferencePolicy::Lenient
        }
    }

    pub fn media_options(&self) -> MediaOptions {
        MediaOptions {
            thumbnails_dir: self.thumbnails_dir.clone(),
            avatar_base_url: self.avatar_base_url.clone(),
            avatar_size: self.avatar_size,
        }
    }

    /// Command line flags win over file and environment values.
    pub fn apply_overrides(&mut self, catalog_path: Option<PathBuf>, strict: bool) {
        if let Some(path) = catalog_path {
            self.catalog_path = Some(path);
        }
        if strict {
            self.strict_references = true;
        }
    }
}

pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Defaults, then the settings file, then `APP__*` variables. An explicit
/// `path` must exist; the default `rinkside.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(path, env_source())
}

pub fn load_settings_with(path: Option<&Path>, env: Environment) -> anyhow::Result<Settings> {
    let (file, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    let layered = Config::builder()
        .add_source(
            File::from(file.as_path())
                .format(FileFormat::Toml)
                .required(required),
        )
        .add_source(env)
        .build()
        .with_context(|| format!("failed to read settings from '{}'", file.display()))?;

    layered
        .try_deserialize::<Settings>()
        .with_context(|| format!("invalid settings in '{}' or environment", file.display()))
}

pub fn render_settings(settings: &Settings) -> anyhow::Result<String> {
    toml::to_string_pretty(settings).context("failed to encode settings as toml")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
