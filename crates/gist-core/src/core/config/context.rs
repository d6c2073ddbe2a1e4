use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::config::{Config, EnvSnapshot, GlobalOptions};
use crate::effects::{Effects, SharedEffects};
use crate::CommandGroup;

/// Identifies the running command for status lines and JSON envelopes.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub group: CommandGroup,
    pub name: &'static str,
}

impl CommandInfo {
    #[must_use]
    pub const fn new(group: CommandGroup, name: &'static str) -> Self {
        Self { group, name }
    }
}

/// Everything a command needs to run: the parsed global flags, configuration
/// derived from the environment, and the effect handles used to reach the
/// network, git, and the filesystem.
pub struct CommandContext<'a> {
    pub global: &'a GlobalOptions,
    config: Config,
    effects: SharedEffects,
}

impl<'a> CommandContext<'a> {
    /// Snapshots the environment and derives configuration from it.
    ///
    /// # Errors
    ///
    /// Fails when the environment carries an invalid `GIST_API_URL`.
    pub fn new(global: &'a GlobalOptions, effects: SharedEffects) -> Result<Self> {
        let snapshot = EnvSnapshot::capture();
        let config = Config::from_snapshot(&snapshot)?;
        Ok(Self {
            global,
            config,
            effects,
        })
    }

    #[must_use]
    pub fn effects(&self) -> &dyn Effects {
        self.effects.as_ref()
    }

    pub(crate) fn shared_effects(&self) -> SharedEffects {
        Arc::clone(&self.effects)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.config.api.base_url
    }

    #[must_use]
    pub fn dump_root(&self) -> &Path {
        &self.config.dump.root
    }

    #[must_use]
    pub fn token_override(&self) -> Option<&str> {
        self.config.auth.token_override.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn testing(
        global: &'a GlobalOptions,
        effects: SharedEffects,
        snapshot: &EnvSnapshot,
    ) -> Result<Self> {
        let config = Config::from_snapshot(snapshot)?;
        Ok(Self {
            global,
            config,
            effects,
        })
    }
}
