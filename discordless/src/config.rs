//! Configuration file support for discordless.
//!
//! Loads optional `discordless.toml` from the working directory, or an
//! explicit file passed with `--config`.

use std::path::{Path, PathBuf};

use discordless_page::PageOptions;
use serde::Deserialize;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "discordless.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscordlessConfig {
    pub site: SiteConfig,
    pub links: LinksConfig,
    pub build: BuildConfig,
}

/// Document metadata
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Hero and footer links
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Repository where change requests are filed
    pub repository: Option<String>,
    /// Status update / announcement post
    pub status: Option<String>,
}

/// Defaults for `discordless build`. CLI flags take precedence.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Alternatives data file; the bundled data is used when unset
    pub data: Option<PathBuf>,
    /// Output HTML file
    pub out: Option<PathBuf>,
}

impl DiscordlessConfig {
    /// Load `discordless.toml` from the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_strict(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a path the user asked for explicitly. Any problem is an error.
    pub fn load_strict(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.build.data = self.build.data.map(resolve);
        self.build.out = self.build.out.map(resolve);
        self
    }

    /// Page options with config values layered over the defaults.
    pub fn page_options(&self) -> PageOptions {
        let defaults = PageOptions::default();
        PageOptions {
            title: self.site.title.clone().unwrap_or(defaults.title),
            description: self.site.description.clone().unwrap_or(defaults.description),
            repository_url: self.links.repository.clone().unwrap_or(defaults.repository_url),
            status_url: self.links.status.clone().unwrap_or(defaults.status_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = DiscordlessConfig::default();
        assert_eq!(config.page_options(), PageOptions::default());
        assert!(config.build.data.is_none());
        assert!(config.build.out.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = DiscordlessConfig::load(temp.path());
        assert_eq!(config, DiscordlessConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
[site]
title = "Leave Discord"

[links]
repository = "https://example.org/fork"

[build]
data = "data/alternatives.json"
out = "public/index.html"
"#,
        );

        let config = DiscordlessConfig::load(temp.path());
        assert_eq!(config.build.out, Some(temp.path().join("public/index.html")));
        assert_eq!(config.build.data, Some(temp.path().join("data/alternatives.json")));

        let options = config.page_options();
        assert_eq!(options.title, "Leave Discord");
        assert_eq!(options.repository_url, "https://example.org/fork");
        assert_eq!(options.status_url, PageOptions::default().status_url);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "[site\ntitle = ");

        let config = DiscordlessConfig::load(temp.path());
        assert_eq!(config, DiscordlessConfig::default());
    }

    #[test]
    fn test_strict_load_reports_parse_errors() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[links]\nrepository = 42");

        let err = DiscordlessConfig::load_strict(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_strict_load_reports_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let err = DiscordlessConfig::load_strict(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_build_paths_follow_config_directory() {
        let temp = TempDir::new().expect("temp dir");
        let site = temp.path().join("site");
        std::fs::create_dir_all(&site).expect("create site dir");
        let path = site.join("custom.toml");
        std::fs::write(
            &path,
            "[build]\ndata = \"alternatives.json\"\nout = \"/srv/www/index.html\"\n",
        )
        .expect("write config");

        let config = DiscordlessConfig::load_strict(&path).unwrap();
        assert_eq!(config.build.data, Some(site.join("alternatives.json")));
        assert_eq!(config.build.out, Some(PathBuf::from("/srv/www/index.html")));
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "");

        let config = DiscordlessConfig::load(temp.path());
        assert_eq!(config, DiscordlessConfig::default());
    }
}
