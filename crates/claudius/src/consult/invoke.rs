use claudius_core::consult::{build_exec_args, ExecTarget, Outcome};
use std::ffi::OsStr;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Send `prompt` to the assistant described by `target`.
pub async fn invoke(target: &ExecTarget, prompt: &str, timeout: Duration) -> Outcome {
    let args = build_exec_args(target, prompt);
    log::debug!(
        "running {} exec as {} in {} ({} prompt bytes, timeout {:?})",
        target.program,
        target.user,
        target.container,
        prompt.len(),
        timeout
    );

    run_captured(&target.program, &args, timeout).await
}

/// Run `program` with `args`, capturing both output streams.
///
/// The child is killed if it is still running when `timeout` elapses.
pub async fn run_captured<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    timeout: Duration,
) -> Outcome {
    let start = Instant::now();

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => {
            log::debug!("failed to start {}: {}", program, e);
            return Outcome::LaunchFailure(e.to_string());
        }
    };

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Outcome::LaunchFailure(e.to_string()),
        Err(_) => {
            log::debug!("{} timed out after {:?}", program, start.elapsed());
            return Outcome::Timeout {
                seconds: timeout.as_secs(),
            };
        }
    };

    log::debug!(
        "{} exited with {} after {:?}",
        program,
        output.status,
        start.elapsed()
    );

    if output.status.success() {
        Outcome::Success(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Outcome::NonZeroExit {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
