pub const DEFAULT_PROGRAM: &str = "docker";
pub const DEFAULT_CONTAINER: &str = "claude-code-minimax";
pub const DEFAULT_USER: &str = "claude";
pub const DEFAULT_ASSISTANT: &str = "claude";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Flag that lets the assistant act without interactive permission prompts.
pub const SKIP_PERMISSIONS_FLAG: &str = "--dangerously-skip-permissions";

/// Where and how the assistant is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecTarget {
    /// Container runtime executable.
    pub program: String,
    /// Name of the running container hosting the assistant.
    pub container: String,
    /// User to run the assistant as inside the container.
    pub user: String,
    /// Assistant executable inside the container.
    pub assistant: String,
}

impl Default for ExecTarget {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            container: DEFAULT_CONTAINER.to_string(),
            user: DEFAULT_USER.to_string(),
            assistant: DEFAULT_ASSISTANT.to_string(),
        }
    }
}

/// Build the argument list passed to `target.program`.
///
/// The prompt travels as a single raw argument. No shell is involved, so it
/// needs no quoting or escaping.
pub fn build_exec_args(target: &ExecTarget, prompt: &str) -> Vec<String> {
    vec![
        "exec".to_string(),
        "-i".to_string(),
        "-u".to_string(),
        target.user.clone(),
        target.container.clone(),
        target.assistant.clone(),
        "-p".to_string(),
        prompt.to_string(),
        SKIP_PERMISSIONS_FLAG.to_string(),
    ]
}
