use super::types::ConsultRequest;

/// Number of data-URI characters shown in the human-readable image marker.
pub const IMAGE_MARKER_CHARS: usize = 100;

/// Build the prompt sent to the assistant from a loaded request.
///
/// Sections are joined with newlines in a fixed order: the instruction, the
/// relevant files as fenced blocks, then the images. Each image appears twice:
/// once as a short `[BASE64_IMAGE: ...]` marker for readers of the prompt and
/// once in full inside an `<image>` tag.
pub fn build_prompt(request: &ConsultRequest) -> String {
    let mut parts = Vec::new();

    parts.push(format!("## Instruction\n{}", request.instruction));

    if request.files_requested {
        parts.push("\n## Relevant Files".to_string());
        for file in &request.files {
            parts.push(format!("\n### File: {}\n```\n{}\n```", file.path, file.content));
        }
    }

    if request.images_requested {
        parts.push("\n## Images (Base64)".to_string());
        for image in &request.images {
            let marker: String = image.data_uri.chars().take(IMAGE_MARKER_CHARS).collect();
            parts.push(format!("\n### Image {}: {}", image.index, image.path));
            parts.push(format!("[BASE64_IMAGE: {}...]", marker));
            parts.push(format!("\n<image>{}</image>", image.data_uri));
        }
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consult::types::{FileContent, ImageContent};

    fn file(path: &str, content: &str) -> FileContent {
        FileContent {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    fn image(index: usize, path: &str, data_uri: &str) -> ImageContent {
        ImageContent {
            index,
            path: path.to_string(),
            data_uri: data_uri.to_string(),
        }
    }

    #[test]
    fn test_instruction_only() {
        let request = ConsultRequest {
            instruction: "How do I center a div in CSS?".to_string(),
            ..Default::default()
        };

        assert_eq!(
            build_prompt(&request),
            "## Instruction\nHow do I center a div in CSS?"
        );
    }

    #[test]
    fn test_files_are_fenced_in_order() {
        let request = ConsultRequest {
            instruction: "Why is this not working?".to_string(),
            files: vec![
                file("src/app.py", "print('app')"),
                file("src/utils.py", "def helper(): pass"),
            ],
            files_requested: true,
            ..Default::default()
        };

        assert_eq!(
            build_prompt(&request),
            "## Instruction\nWhy is this not working?\n\
             \n## Relevant Files\n\
             \n### File: src/app.py\n```\nprint('app')\n```\n\
             \n### File: src/utils.py\n```\ndef helper(): pass\n```"
        );
    }

    #[test]
    fn test_files_header_kept_when_every_file_was_skipped() {
        let request = ConsultRequest {
            instruction: "Check this".to_string(),
            files_requested: true,
            ..Default::default()
        };

        assert_eq!(
            build_prompt(&request),
            "## Instruction\nCheck this\n\n## Relevant Files"
        );
    }

    #[test]
    fn test_image_section_layout() {
        let uri = "data:image/png;base64,aGVsbG8=";
        let request = ConsultRequest {
            instruction: "What's wrong with this UI?".to_string(),
            images: vec![image(1, "screenshot.png", uri)],
            images_requested: true,
            ..Default::default()
        };

        assert_eq!(
            build_prompt(&request),
            "## Instruction\nWhat's wrong with this UI?\n\
             \n## Images (Base64)\n\
             \n### Image 1: screenshot.png\n\
             [BASE64_IMAGE: data:image/png;base64,aGVsbG8=...]\n\
             \n<image>data:image/png;base64,aGVsbG8=</image>"
        );
    }

    #[test]
    fn test_image_marker_is_truncated_but_full_data_is_embedded() {
        let uri = format!("data:image/png;base64,{}", "A".repeat(500));
        let request = ConsultRequest {
            instruction: "Look".to_string(),
            images: vec![image(1, "big.png", &uri)],
            images_requested: true,
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        let marker: String = uri.chars().take(100).collect();
        assert!(prompt.contains(&format!("[BASE64_IMAGE: {}...]", marker)));
        assert!(prompt.contains(&format!("<image>{}</image>", uri)));
    }

    #[test]
    fn test_image_numbering_keeps_requested_positions() {
        let request = ConsultRequest {
            instruction: "Compare".to_string(),
            images: vec![
                image(1, "a.png", "data:image/png;base64,"),
                image(3, "c.gif", "data:image/gif;base64,"),
            ],
            images_requested: true,
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("### Image 1: a.png"));
        assert!(prompt.contains("### Image 3: c.gif"));
        assert!(!prompt.contains("### Image 2"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let request = ConsultRequest {
            instruction: "Review".to_string(),
            files: vec![file("main.rs", "fn main() {}")],
            images: vec![image(1, "shot.png", "data:image/png;base64,")],
            files_requested: true,
            images_requested: true,
        };

        let prompt = build_prompt(&request);
        let instruction = prompt.find("## Instruction").unwrap();
        let files = prompt.find("## Relevant Files").unwrap();
        let images = prompt.find("## Images (Base64)").unwrap();
        assert!(instruction < files && files < images);
    }

    #[test]
    fn test_content_with_fences_and_special_characters() {
        let request = ConsultRequest {
            instruction: "Fix the regex".to_string(),
            files: vec![file(
                "README.md",
                "```rust\nlet re = Regex::new(r\"(\\d+)\\s*\");\n```",
            )],
            files_requested: true,
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("let re = Regex::new(r\"(\\d+)\\s*\");"));
    }
}
