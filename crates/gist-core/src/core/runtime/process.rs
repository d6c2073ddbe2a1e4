use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result};

/// Captured output of a finished subprocess.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

const MAX_CAPTURE_BYTES: usize = 1024 * 1024;

/// Runs a program to completion, capturing stdout and stderr.
///
/// Each stream is read on its own thread so a subprocess that fills one pipe
/// before the other cannot deadlock the capture. Output past
/// `MAX_CAPTURE_BYTES` per stream is dropped.
///
/// # Errors
///
/// Returns an error when the program cannot be spawned or its output streams
/// cannot be read.
pub(crate) fn run_command(
    program: &str,
    args: &[String],
    envs: &[(String, String)],
    cwd: &Path,
) -> Result<RunOutput> {
    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command
        .spawn()
        .with_context(|| format!("failed to launch {program}"))?;

    let stdout = child.stdout.take().context("stdout pipe missing")?;
    let stderr = child.stderr.take().context("stderr pipe missing")?;

    let stdout_thread = thread::spawn(move || read_limited(stdout));
    let stderr_thread = thread::spawn(move || read_limited(stderr));

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {program}"))?;

    let stdout = stdout_thread
        .join()
        .map_err(|_| anyhow::anyhow!("stdout reader thread panicked"))??;
    let stderr = stderr_thread
        .join()
        .map_err(|_| anyhow::anyhow!("stderr reader thread panicked"))??;

    Ok(RunOutput {
        code: status.code().unwrap_or(-1),
        stdout,
        stderr,
    })
}

fn read_limited(mut stream: impl Read) -> Result<String> {
    let mut buffer = Vec::new();
    let mut truncated = false;
    let mut chunk = [0u8; 8192];
    loop {
        let read = stream
            .read(&mut chunk)
            .context("reading subprocess output")?;
        if read == 0 {
            break;
        }
        // Keep draining past the cap so the child never blocks on a full pipe.
        let take = read.min(MAX_CAPTURE_BYTES.saturating_sub(buffer.len()));
        buffer.extend_from_slice(&chunk[..take]);
        if take < read {
            truncated = true;
        }
    }

    let mut text = String::from_utf8_lossy(&buffer).into_owned();
    if truncated {
        text.push_str("\n[output truncated]");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn captures_streams_and_exit_code() {
        let args = vec![
            "-c".to_string(),
            "printf out && printf err >&2; exit 7".to_string(),
        ];
        let output = run_command("/bin/sh", &args, &[], Path::new(".")).expect("run");
        assert_eq!(output.code, 7);
        assert_eq!(output.stdout, "out");
        assert_eq!(output.stderr, "err");
    }

    #[cfg(unix)]
    #[test]
    fn passes_extra_environment() {
        let args = vec!["-c".to_string(), "printf \"$GIST_TEST_MARKER\"".to_string()];
        let envs = vec![("GIST_TEST_MARKER".to_string(), "marked".to_string())];
        let output = run_command("/bin/sh", &args, &envs, Path::new(".")).expect("run");
        assert_eq!(output.stdout, "marked");
    }

    #[test]
    fn missing_program_is_an_error() {
        let error = run_command("gist-no-such-program", &[], &[], Path::new("."))
            .expect_err("spawn must fail");
        assert!(error.to_string().contains("gist-no-such-program"));
    }
}
