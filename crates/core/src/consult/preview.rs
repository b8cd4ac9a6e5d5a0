/// Characters of the prompt shown before the preview is truncated.
pub const PREVIEW_CHARS: usize = 500;

/// Render the console preview of a prompt.
///
/// Prompts longer than `limit` characters are cut at a character boundary and
/// marked as truncated. Shorter prompts are shown in full.
pub fn render_preview(prompt: &str, limit: usize) -> String {
    match prompt.char_indices().nth(limit) {
        Some((cut, _)) => format!("Prompt preview:\n{}...\n[truncated]", &prompt[..cut]),
        None => format!("Prompt:\n{prompt}"),
    }
}
