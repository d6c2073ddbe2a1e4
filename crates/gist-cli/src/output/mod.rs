mod details;
mod failure;

use atty::Stream;
use color_eyre::Result;
use gist_core::api as gist_core;
use gist_core::{CommandInfo, CommandStatus, ExecutionOutcome};

use crate::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    pub quiet: bool,
    pub json: bool,
    pub no_color: bool,
}

pub fn emit_output(
    opts: &OutputOptions,
    info: CommandInfo,
    outcome: &ExecutionOutcome,
) -> Result<i32> {
    let code = match outcome.status {
        CommandStatus::Ok => 0,
        CommandStatus::UserError => 1,
        CommandStatus::Failure => 2,
    };

    let style_out = Style::new(opts.no_color, atty::is(Stream::Stdout));
    let style_err = Style::new(opts.no_color, atty::is(Stream::Stderr));

    if opts.json {
        let payload = gist_core::to_json_response(info, outcome, code);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        match outcome.status {
            CommandStatus::Ok => {
                if opts.quiet {
                    return Ok(code);
                }
                if details::is_passthrough(&outcome.details) {
                    // An empty passthrough body prints nothing, not a blank line.
                    if !outcome.message.is_empty() {
                        println!("{}", outcome.message);
                    }
                } else {
                    let message = gist_core::format_status_message(info, &outcome.message);
                    println!("{}", style_out.status(&outcome.status, &message));
                    if let Some(hint) = details::hint_from_details(&outcome.details) {
                        let hint_line = format!("Tip: {hint}");
                        println!("{}", style_out.info(&hint_line));
                    }
                }
            }
            CommandStatus::UserError | CommandStatus::Failure => {
                let header = format!(
                    "{}  {}",
                    failure::error_code(info, &outcome.details),
                    outcome.message
                );
                eprintln!("{}", style_err.error_header(&header));
                eprintln!();
                eprintln!("Why:");
                for reason in failure::collect_why_bullets(&outcome.details, &outcome.message) {
                    eprintln!("  • {reason}");
                }
                let fixes = failure::collect_fix_bullets(&outcome.details);
                if !fixes.is_empty() {
                    eprintln!();
                    eprintln!("Fix:");
                    for fix in fixes {
                        eprintln!("{}", style_err.fix_bullet(&format!("  • {fix}")));
                    }
                }
            }
        }
    }

    Ok(code)
}
