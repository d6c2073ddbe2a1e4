use color_eyre::Result;
use gist_core::api as gist_core;
use gist_core::{
    CatRequest, CommandContext, CommandGroup, CommandInfo, CreateRequest, DumpRequest, GrepRequest,
    ListRequest,
};

use crate::cli::{CatArgs, CommandGroupCli, CreateArgs, DumpArgs, GrepArgs};

pub fn dispatch_command(
    ctx: &CommandContext,
    group: &CommandGroupCli,
) -> Result<(CommandInfo, gist_core::ExecutionOutcome)> {
    match group {
        CommandGroupCli::List => {
            let info = CommandInfo::new(CommandGroup::List, "list");
            core_call(info, || gist_core::list_gists(ctx, ListRequest))
        }
        CommandGroupCli::Cat(args) => {
            let info = CommandInfo::new(CommandGroup::Cat, "cat");
            let request = cat_request_from_args(args);
            core_call(info, || gist_core::cat_gist(ctx, &request))
        }
        CommandGroupCli::DumpFiles(args) => {
            let info = CommandInfo::new(CommandGroup::DumpFiles, "dump-files");
            let request = dump_request_from_args(args);
            core_call(info, || gist_core::dump_gists(ctx, &request))
        }
        CommandGroupCli::Grep(args) => {
            let info = CommandInfo::new(CommandGroup::Grep, "grep");
            let request = grep_request_from_args(args);
            core_call(info, || gist_core::grep_gists(ctx, &request))
        }
        CommandGroupCli::CreatePublic(args) => {
            let info = CommandInfo::new(CommandGroup::CreatePublic, "create-public");
            let request = create_request_from_args(args, true);
            core_call(info, || gist_core::create_gist(ctx, &request))
        }
        CommandGroupCli::CreatePrivate(args) => {
            let info = CommandInfo::new(CommandGroup::CreatePrivate, "create-private");
            let request = create_request_from_args(args, false);
            core_call(info, || gist_core::create_gist(ctx, &request))
        }
    }
}

fn core_call<F>(info: CommandInfo, action: F) -> Result<(CommandInfo, gist_core::ExecutionOutcome)>
where
    F: FnOnce() -> anyhow::Result<gist_core::ExecutionOutcome>,
{
    match action() {
        Ok(result) => Ok((info, result)),
        Err(err) => {
            if let Some(user) = err.downcast_ref::<gist_core::GistUserError>() {
                Ok((
                    info,
                    gist_core::ExecutionOutcome::user_error(
                        user.message().to_string(),
                        user.details().clone(),
                    ),
                ))
            } else {
                let issues: Vec<String> =
                    err.chain().map(std::string::ToString::to_string).collect();
                Ok((
                    info,
                    gist_core::ExecutionOutcome::failure(
                        err.to_string(),
                        serde_json::json!({
                            "reason": "internal_error",
                            "error": err.to_string(),
                            "issues": issues,
                            "hint": "Re-run with -v for more detail, or open an issue if this persists.",
                        }),
                    ),
                ))
            }
        }
    }
}

fn cat_request_from_args(args: &CatArgs) -> CatRequest {
    CatRequest {
        id: args.id.clone(),
    }
}

fn dump_request_from_args(args: &DumpArgs) -> DumpRequest {
    DumpRequest {
        dir: args.dir.clone(),
    }
}

fn grep_request_from_args(args: &GrepArgs) -> GrepRequest {
    GrepRequest {
        pattern: args.pattern.clone(),
    }
}

fn create_request_from_args(args: &CreateArgs, public: bool) -> CreateRequest {
    CreateRequest {
        source: args.file.clone(),
        public,
        description: args.description.clone(),
    }
}
