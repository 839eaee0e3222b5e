//! Subprocess execution helpers.
//!
//! Two execution styles are used in this crate: captured-output runs for
//! introspection tools whose stdout is parsed, and inherited-stdio runs for
//! package-manager commands the user should see live.

use crate::error::{HostdepsError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of executing a command with captured output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command exited with status 0.
    pub success: bool,
}

/// Run a command and capture its output.
///
/// Environment entries are set only on the child process; the caller's own
/// environment view is never mutated. Returns `Err` only when the process
/// could not be spawned at all.
pub fn run_capture(
    program: &Path,
    args: &[&OsStr],
    cwd: Option<&Path>,
    env: &[(&str, &OsStr)],
) -> std::io::Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());

    let output = cmd.output()?;
    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// A fully resolved command line, ready to spawn or to print in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Build a command line from a program and its arguments.
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Prepend an elevation prefix (e.g. `sudo`), shifting the current
    /// program into the argument list.
    pub fn elevated(self, prefix: &str) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: prefix.to_string(),
            args,
        }
    }

    /// Render the command for display, quoting arguments that contain spaces.
    pub fn rendered(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(quote(&self.program));
        parts.extend(self.args.iter().map(|a| quote(a)));
        parts.join(" ")
    }

    /// Spawn the command with inherited standard I/O streams and wait for
    /// it to finish. A non-zero exit is an error on every platform.
    pub fn run_inherit(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|_| HostdepsError::CommandFailed {
                command: self.rendered(),
                code: None,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HostdepsError::CommandFailed {
                command: self.rendered(),
                code: status.code(),
            })
        }
    }
}

fn quote(word: &str) -> String {
    if word.contains(' ') {
        format!("\"{}\"", word)
    } else {
        word.to_string()
    }
}

/// Check whether the current process already runs with elevated privileges.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_joins_program_and_args() {
        let cmd = CommandLine::new("apt-get", ["install", "-y", "libgtk-3-0"]);
        assert_eq!(cmd.rendered(), "apt-get install -y libgtk-3-0");
    }

    #[test]
    fn rendered_quotes_arguments_with_spaces() {
        let cmd = CommandLine::new("powershell.exe", ["-File", "C:\\Program Files\\pack.ps1"]);
        assert_eq!(
            cmd.rendered(),
            "powershell.exe -File \"C:\\Program Files\\pack.ps1\""
        );
    }

    #[test]
    fn elevated_shifts_program_into_args() {
        let cmd = CommandLine::new("apt-get", ["update"]).elevated("sudo");
        assert_eq!(cmd.program, "sudo");
        assert_eq!(cmd.args, vec!["apt-get", "update"]);
        assert_eq!(cmd.rendered(), "sudo apt-get update");
    }

    #[cfg(unix)]
    #[test]
    fn run_capture_collects_stdout() {
        let result = run_capture(Path::new("echo"), &[OsStr::new("hello")], None, &[]).unwrap();
        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn run_capture_sets_child_env_only() {
        let result = run_capture(
            Path::new("sh"),
            &[OsStr::new("-c"), OsStr::new("printf %s \"$HOSTDEPS_PROBE_VAR\"")],
            None,
            &[("HOSTDEPS_PROBE_VAR", OsStr::new("augmented"))],
        )
        .unwrap();
        assert_eq!(result.stdout, "augmented");
        assert!(std::env::var_os("HOSTDEPS_PROBE_VAR").is_none());
    }

    #[test]
    fn run_capture_spawn_failure_is_err() {
        let result = run_capture(Path::new("/nonexistent/tool-xyz"), &[], None, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn run_inherit_reports_exit_code() {
        #[cfg(unix)]
        {
            let cmd = CommandLine::new("false", Vec::<String>::new());
            let err = cmd.run_inherit().unwrap_err();
            match err {
                HostdepsError::CommandFailed { code, .. } => assert_eq!(code, Some(1)),
                other => panic!("expected CommandFailed, got {other:?}"),
            }
        }
    }

    #[test]
    fn run_inherit_spawn_failure_has_no_code() {
        let cmd = CommandLine::new("/nonexistent/tool-xyz", Vec::<String>::new());
        let err = cmd.run_inherit().unwrap_err();
        match err {
            HostdepsError::CommandFailed { code, .. } => assert_eq!(code, None),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }
}
