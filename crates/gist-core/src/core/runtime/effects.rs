use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use gist_domain::{Gist, GistDraft};

use super::client::{self, ApiAccess, GistPage};
use super::process::run_command;

/// Gist service calls commands depend on.
pub trait GistService: Send + Sync {
    fn list_page(&self, access: &ApiAccess, page: Option<u32>) -> Result<GistPage>;
    fn fetch_gist(&self, access: &ApiAccess, id: &str) -> Result<Gist>;
    fn create_gist(&self, access: &ApiAccess, draft: &GistDraft) -> Result<Gist>;
}

/// Where the token comes from when `GIST_TOKEN` is not set.
pub trait TokenSource: Send + Sync {
    fn git_token(&self) -> Result<Option<String>>;
}

/// Filesystem touchpoints used by `dump-files` and the create commands.
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// Aggregated effect handles threaded through every command.
pub trait Effects: Send + Sync {
    fn gists(&self) -> &dyn GistService;
    fn token(&self) -> &dyn TokenSource;
    fn fs(&self) -> &dyn FileSystem;
}

pub type SharedEffects = Arc<dyn Effects>;

/// Production wiring: real HTTP, real git, real filesystem.
pub struct SystemEffects {
    gists: Arc<SystemGistService>,
    token: Arc<SystemTokenSource>,
    fs: Arc<SystemFileSystem>,
}

impl SystemEffects {
    #[must_use]
    pub fn new() -> Self {
        Self {
            gists: Arc::new(SystemGistService),
            token: Arc::new(SystemTokenSource),
            fs: Arc::new(SystemFileSystem),
        }
    }
}

impl Default for SystemEffects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects for SystemEffects {
    fn gists(&self) -> &dyn GistService {
        self.gists.as_ref()
    }

    fn token(&self) -> &dyn TokenSource {
        self.token.as_ref()
    }

    fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }
}

struct SystemGistService;

impl GistService for SystemGistService {
    fn list_page(&self, access: &ApiAccess, page: Option<u32>) -> Result<GistPage> {
        let http = client::build_http_client()?;
        client::list_page(&http, access, page)
    }

    fn fetch_gist(&self, access: &ApiAccess, id: &str) -> Result<Gist> {
        let http = client::build_http_client()?;
        client::fetch_gist(&http, access, id)
    }

    fn create_gist(&self, access: &ApiAccess, draft: &GistDraft) -> Result<Gist> {
        let http = client::build_http_client()?;
        client::create_gist(&http, access, draft)
    }
}

struct SystemTokenSource;

impl TokenSource for SystemTokenSource {
    fn git_token(&self) -> Result<Option<String>> {
        let args = ["config".to_string(), "gist.token".to_string()];
        match run_command("git", &args, &[], Path::new(".")) {
            Ok(output) if output.code == 0 => {
                let token = output.stdout.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            // Git being absent and the key being unset both mean "no token".
            Ok(_) | Err(_) => Ok(None),
        }
    }
}

struct SystemFileSystem;

impl FileSystem for SystemFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder
            .create(path)
            .with_context(|| format!("creating {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_round_trips_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fs = SystemFileSystem;
        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).expect("mkdir");
        let file = nested.join("f.txt");
        fs.write(&file, b"body").expect("write");
        assert_eq!(fs.read_to_string(&file).expect("read"), "body");
    }

    #[cfg(unix)]
    #[test]
    fn created_directories_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let fs = SystemFileSystem;
        let nested = dir.path().join("private");
        fs.create_dir_all(&nested).expect("mkdir");
        let mode = std::fs::metadata(&nested)
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
