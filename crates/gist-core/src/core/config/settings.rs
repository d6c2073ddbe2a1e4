use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::DEFAULT_API_URL;

pub(crate) const DEFAULT_DUMP_DIR: &str = "/tmp/gists";

/// Options shared by every subcommand, parsed once by the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub json: bool,
}

/// Immutable snapshot of the process environment taken at context creation.
#[derive(Clone, Debug, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub(crate) fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct DumpConfig {
    pub root: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub token_override: Option<String>,
}

/// Effective configuration derived from the environment.
///
/// `GIST_API_URL` points commands at an alternate endpoint (trailing slash
/// tolerated), `GIST_DUMP_DIR` relocates `dump-files` output, and `GIST_TOKEN`
/// bypasses the git-config token lookup. Blank values count as unset.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) api: ApiConfig,
    pub(crate) dump: DumpConfig,
    pub(crate) auth: AuthConfig,
}

impl Config {
    pub(crate) fn from_snapshot(snapshot: &EnvSnapshot) -> Result<Self> {
        let base_url = match trimmed_var(snapshot, "GIST_API_URL") {
            Some(value) => {
                let value = value.trim_end_matches('/').to_string();
                Url::parse(&value)
                    .with_context(|| format!("GIST_API_URL is not a valid URL: {value}"))?;
                value
            }
            None => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            api: ApiConfig { base_url },
            dump: DumpConfig {
                root: trimmed_var(snapshot, "GIST_DUMP_DIR")
                    .map_or_else(|| PathBuf::from(DEFAULT_DUMP_DIR), PathBuf::from),
            },
            auth: AuthConfig {
                token_override: trimmed_var(snapshot, "GIST_TOKEN").map(ToOwned::to_owned),
            },
        })
    }

    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    #[must_use]
    pub fn dump(&self) -> &DumpConfig {
        &self.dump
    }

    #[must_use]
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }
}

fn trimmed_var<'a>(snapshot: &'a EnvSnapshot, key: &str) -> Option<&'a str> {
    snapshot
        .var(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_the_environment_is_empty() {
        let snapshot = EnvSnapshot::testing(&[]);
        let config = Config::from_snapshot(&snapshot).expect("config");
        assert_eq!(config.api().base_url, "https://api.github.com");
        assert_eq!(config.dump().root, PathBuf::from("/tmp/gists"));
        assert!(config.auth().token_override.is_none());
    }

    #[test]
    fn api_url_override_drops_the_trailing_slash() {
        let snapshot = EnvSnapshot::testing(&[("GIST_API_URL", "http://gists.test/api/")]);
        let config = Config::from_snapshot(&snapshot).expect("config");
        assert_eq!(config.api().base_url, "http://gists.test/api");
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let snapshot = EnvSnapshot::testing(&[("GIST_API_URL", "not a url")]);
        let error = Config::from_snapshot(&snapshot).expect_err("invalid URL must fail");
        assert!(error.to_string().contains("GIST_API_URL"));
    }

    #[test]
    fn whitespace_token_counts_as_unset() {
        let snapshot = EnvSnapshot::testing(&[("GIST_TOKEN", "   ")]);
        let config = Config::from_snapshot(&snapshot).expect("config");
        assert!(config.auth().token_override.is_none());
    }

    #[test]
    fn token_override_is_trimmed() {
        let snapshot = EnvSnapshot::testing(&[("GIST_TOKEN", " abc123\n")]);
        let config = Config::from_snapshot(&snapshot).expect("config");
        assert_eq!(config.auth().token_override.as_deref(), Some("abc123"));
    }

    #[test]
    fn dump_root_override_applies() {
        let snapshot = EnvSnapshot::testing(&[("GIST_DUMP_DIR", "/srv/gists")]);
        let config = Config::from_snapshot(&snapshot).expect("config");
        assert_eq!(config.dump().root, PathBuf::from("/srv/gists"));
    }
}
