use std::path::PathBuf;

use clap::{value_parser, ArgAction, Args, Parser, Subcommand};

pub const GIST_HELP_TEMPLATE: &str =
    "{before-help}\nUsage:\n    {usage}\n\nGlobal options:\n{options}\n";

pub const GIST_BEFORE_HELP: &str = concat!(
    "gist ",
    env!("CARGO_PKG_VERSION"),
    " – GitHub Gists from the command line\n\n",
    "\x1b[1;36mBrowse\x1b[0m\n",
    "  list             List every gist on the account with its files.\n",
    "  cat              Print the files of one gist to stdout.\n",
    "  grep             Case-insensitive search across every gist's files.\n\n",
    "\x1b[1;36mPublish\x1b[0m\n",
    "  dump-files       Download every gist into its own directory.\n",
    "  create-public    Upload a file or stdin as a public gist.\n",
    "  create-private   Upload a file or stdin as a secret gist.\n",
);

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    propagate_version = false,
    disable_help_subcommand = true,
    before_help = GIST_BEFORE_HELP,
    help_template = GIST_HELP_TEMPLATE
)]
#[allow(clippy::struct_excessive_bools)]
pub struct GistCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: CommandGroupCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandGroupCli {
    #[command(
        about = "List every gist on this account: creation date, id, description, files.",
        override_usage = "gist list"
    )]
    List,
    #[command(
        about = "Print the contents of one gist's files to stdout.",
        override_usage = "gist cat <ID>"
    )]
    Cat(CatArgs),
    #[command(
        alias = "dump",
        about = "Download every gist's files into a per-gist directory.",
        override_usage = "gist dump-files [--dir DIR]"
    )]
    DumpFiles(DumpArgs),
    #[command(
        about = "Search every gist's file contents, ignoring case.",
        override_usage = "gist grep <WORD>..."
    )]
    Grep(GrepArgs),
    #[command(
        about = "Upload a file (or stdin) as a new public gist.",
        override_usage = "gist create-public [FILE] [--description TEXT]"
    )]
    CreatePublic(CreateArgs),
    #[command(
        about = "Upload a file (or stdin) as a new secret gist.",
        override_usage = "gist create-private [FILE] [--description TEXT]"
    )]
    CreatePrivate(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CatArgs {
    #[arg(value_name = "ID", help = "Gist id as printed by `gist list`")]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    #[arg(
        long,
        value_parser = value_parser!(PathBuf),
        value_name = "DIR",
        help = "Destination root (defaults to GIST_DUMP_DIR or /tmp/gists)"
    )]
    pub dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GrepArgs {
    #[arg(
        value_name = "WORD",
        num_args = 1..,
        required = true,
        help = "Words are joined with single spaces to form the search text"
    )]
    pub pattern: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(
        value_name = "FILE",
        default_value = "-",
        help = "File to upload; `-` (the default) reads standard input"
    )]
    pub file: String,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Description shown in the gist listing"
    )]
    pub description: Option<String>,
}
