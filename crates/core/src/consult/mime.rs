use std::path::Path;

/// MIME type used when the extension is missing or not in the table.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Infer an image MIME type from the file extension.
///
/// The lookup is case-insensitive. Unknown or missing extensions fall back to
/// [`DEFAULT_IMAGE_MIME`].
pub fn mime_type_for_path(path: impl AsRef<Path>) -> &'static str {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => DEFAULT_IMAGE_MIME,
    }
}
