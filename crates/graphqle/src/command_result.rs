use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Output on stdout, with a failing exit code when `failed`.
    pub fn report(stdout: String, failed: bool) -> Self {
        Self {
            exit_code: if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS },
            stderr: None,
            stdout: Some(stdout),
        }
    }

    /// Wraps an error that prevented the command from running.
    pub fn from_error(error: anyhow::Error) -> Self {
        Self::stderr(format_args!(
            "{} {error:#}",
            crate::output_utils::RED_X,
        ))
    }
}
