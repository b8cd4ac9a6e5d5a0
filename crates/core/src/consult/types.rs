use serde::Serialize;

/// Content of a file to be embedded in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// File path exactly as it was requested.
    pub path: String,
    /// Text content, with undecodable bytes already replaced.
    pub content: String,
}

/// An image already encoded as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContent {
    /// 1-based position in the requested image list.
    pub index: usize,
    /// Image path exactly as it was requested.
    pub path: String,
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
}

/// A consultation request with every input already loaded.
///
/// `files_requested` and `images_requested` record whether the caller asked
/// for any files or images at all. The section headers are emitted based on
/// them, even when every path ended up skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultRequest {
    pub instruction: String,
    pub files: Vec<FileContent>,
    pub images: Vec<ImageContent>,
    pub files_requested: bool,
    pub images_requested: bool,
}

/// Which kind of input a skipped path was requested as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    File,
    Image,
}

/// Why an input was left out of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotFound,
    Unreadable(String),
}

/// An input path that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedInput {
    pub kind: InputKind,
    pub path: String,
    pub reason: SkipReason,
}

impl SkippedInput {
    /// Console warning for this skipped input.
    pub fn warning(&self) -> String {
        match (&self.kind, &self.reason) {
            (InputKind::File, SkipReason::NotFound) => {
                format!("Warning: File not found: {}", self.path)
            }
            (InputKind::Image, SkipReason::NotFound) => {
                format!("Warning: Image not found: {}", self.path)
            }
            (InputKind::File, SkipReason::Unreadable(detail)) => {
                format!("Error reading file {}: {}", self.path, detail)
            }
            (InputKind::Image, SkipReason::Unreadable(detail)) => {
                format!("Error converting image {}: {}", self.path, detail)
            }
        }
    }
}
