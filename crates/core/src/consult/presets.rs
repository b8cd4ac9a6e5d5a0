//! Instruction templates behind the `ask`, `debug` and `review` shortcuts.

pub const DEFAULT_REVIEW_FOCUS: &str = "general";

/// Instruction for debugging a single file.
pub fn debug_instruction(issue: &str) -> String {
    format!("Please help me debug this issue: {issue}")
}

/// Instruction for reviewing a set of files with a given focus.
pub fn review_instruction(focus: &str) -> String {
    format!(
        "Please review the following code with a focus on: {focus}. \
         Provide constructive feedback and suggestions for improvement."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_instruction() {
        assert_eq!(
            debug_instruction("the button never renders"),
            "Please help me debug this issue: the button never renders"
        );
    }

    #[test]
    fn test_review_instruction_with_focus() {
        assert_eq!(
            review_instruction("security"),
            "Please review the following code with a focus on: security. \
             Provide constructive feedback and suggestions for improvement."
        );
    }

    #[test]
    fn test_review_instruction_default_focus() {
        let instruction = review_instruction(DEFAULT_REVIEW_FOCUS);
        assert!(instruction.contains("focus on: general."));
    }
}
