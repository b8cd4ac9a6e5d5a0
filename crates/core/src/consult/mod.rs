pub mod command;
pub mod data_uri;
pub mod mime;
pub mod outcome;
pub mod presets;
pub mod preview;
pub mod prompt;
pub mod types;

pub use command::{build_exec_args, ExecTarget, SKIP_PERMISSIONS_FLAG};
pub use data_uri::{decode_data_uri, encode_data_uri, DataUri, DataUriError};
pub use mime::mime_type_for_path;
pub use outcome::{exit_code_for, is_error_response, Outcome};
pub use presets::{debug_instruction, review_instruction, DEFAULT_REVIEW_FOCUS};
pub use preview::{render_preview, PREVIEW_CHARS};
pub use prompt::build_prompt;
pub use types::{ConsultRequest, FileContent, ImageContent, InputKind, SkipReason, SkippedInput};
