use crate::error::Error;
use std::process::Command;

/// Runs an external program and captures its standard output.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `program` with `args` and returns stdout on a zero exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or exits unsuccessfully.
    fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>, Error>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>, Error> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            Error::authentication(format!("could not run '{program}': {e}"))
        })?;

        if output.status.success() {
            return Ok(output.stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        Err(Error::authentication(if stderr.is_empty() {
            format!("'{program}' exited with {}", output.status)
        } else {
            format!("'{program}' exited with {}: {stderr}", output.status)
        }))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_process_runner_captures_stdout() {
        let out = ProcessRunner
            .run("sh", &["-c".to_string(), "printf hello".to_string()])
            .unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_process_runner_reports_failure_with_stderr() {
        let err = ProcessRunner
            .run("sh", &["-c".to_string(), "echo denied >&2; exit 3".to_string()])
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Authentication failed:"), "{msg}");
        assert!(msg.contains("denied"), "{msg}");
    }

    #[test]
    fn test_process_runner_missing_program() {
        let err = ProcessRunner
            .run("/nonexistent/search-radar-curl", &[])
            .unwrap_err();
        assert!(err.to_string().contains("could not run"));
    }
}
