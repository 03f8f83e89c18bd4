//! TMDB credential resolution.
//!
//! Sources, first non-empty match wins:
//!   1. the `TMDB_API_KEY` environment variable
//!   2. a `.env` file in the working directory (`KEY=value` lines,
//!      `#` comments and blanks skipped, surrounding quotes trimmed)
//!   3. `api_key` in the terebi config file (`config.toml` under the
//!      platform config dir)

use std::path::Path;

use serde::Deserialize;

pub const API_KEY_VAR: &str = "TMDB_API_KEY";
const ENV_FILE: &str = ".env";
const CONFIG_FILE: &str = "config.toml";

/// A resolved TMDB credential.
///
/// v4 read access tokens are JWTs and carry `.` separators; they go in
/// an `Authorization: Bearer` header. Anything else is a v3 key sent as
/// an `api_key` query parameter. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve from the ordered source chain, or `None` if no source
    /// yields a non-empty value.
    pub fn resolve() -> Option<Self> {
        Self::from_sources(
            std::env::var(API_KEY_VAR).ok(),
            env_file_value(Path::new(ENV_FILE), API_KEY_VAR),
            config_file_value(),
        )
    }

    /// First non-empty source wins.
    fn from_sources(
        env: Option<String>,
        env_file: Option<String>,
        bundled: Option<String>,
    ) -> Option<Self> {
        [env, env_file, bundled]
            .into_iter()
            .flatten()
            .find(|key| !key.is_empty())
            .map(Self)
    }

    pub fn is_bearer(&self) -> bool {
        self.0.contains('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Look up `key` in a `.env`-style file.
fn env_file_value(path: &Path, key: &str) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    env_value_from_str(&contents, key)
}

fn env_value_from_str(contents: &str, key: &str) -> Option<String> {
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if name.trim() != key {
            continue;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }
    None
}

#[derive(Deserialize)]
struct ConfigFile {
    api_key: Option<String>,
}

/// Read `api_key` from the terebi config file, the stand-in for a
/// bundled default credential.
fn config_file_value() -> Option<String> {
    let path = directories::ProjectDirs::from("", "", "terebi")?
        .config_dir()
        .join(CONFIG_FILE);
    let contents = std::fs::read_to_string(path).ok()?;
    let config: ConfigFile = toml::from_str(&contents).ok()?;
    config.api_key.filter(|key| !key.is_empty())
}
