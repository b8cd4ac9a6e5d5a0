use std::fmt;

/// Marker every error-tagged response starts with.
pub const ERROR_MARKER: &str = "Error";

pub const TIMEOUT_MESSAGE: &str = "Error: Command timed out";

/// Result of running the assistant process once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Process exited successfully; holds its raw stdout.
    Success(String),
    /// Process exited with a non-zero (or signal) status.
    NonZeroExit { code: Option<i32>, stderr: String },
    /// Process did not finish within the allotted seconds.
    Timeout { seconds: u64 },
    /// Process could not be started or waited on.
    LaunchFailure(String),
}

impl Outcome {
    /// Text surfaced to the user for this outcome.
    pub fn into_response(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(stdout) => write!(f, "{}", stdout.trim()),
            Outcome::NonZeroExit { stderr, .. } => {
                let detail = if stderr.is_empty() {
                    "Unknown error"
                } else {
                    stderr.as_str()
                };
                write!(f, "Error from Claudius: {detail}")
            }
            Outcome::Timeout { .. } => write!(f, "{TIMEOUT_MESSAGE}"),
            Outcome::LaunchFailure(detail) => write!(f, "Error executing command: {detail}"),
        }
    }
}

/// Whether a response text is error-tagged.
pub fn is_error_response(response: &str) -> bool {
    response.starts_with(ERROR_MARKER)
}

/// Process exit code for a final response text.
pub fn exit_code_for(response: &str) -> i32 {
    if is_error_response(response) { 1 } else { 0 }
}
