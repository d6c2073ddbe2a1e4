// Intended public API surface for `gist-core`.
//
// This module exists to keep the crate root small and make it explicit which
// types and functions are part of the stable interface used by the CLI.

pub use crate::core::commands::cat::{cat_gist, CatRequest};
pub use crate::core::commands::create::{create_gist, CreateRequest};
pub use crate::core::commands::dump::{dump_gists, DumpRequest};
pub use crate::core::commands::grep::{grep_gists, GrepRequest};
pub use crate::core::commands::list::{list_gists, ListRequest};
pub use crate::core::config::context::{CommandContext, CommandInfo};
pub use crate::core::config::{ApiConfig, AuthConfig, Config, DumpConfig, GlobalOptions};
pub use crate::core::runtime::client::{ApiAccess, GistPage};
pub use crate::core::runtime::effects::{
    Effects, FileSystem, GistService, SharedEffects, SystemEffects, TokenSource,
};
pub use crate::core::runtime::process::RunOutput;
pub use crate::core::runtime::{format_status_message, to_json_response, CommandGroup};
pub use crate::core::tooling::diagnostics::commands as diag_commands;
pub use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome, GistUserError};
