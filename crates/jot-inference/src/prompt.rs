//! Summarization prompt construction and output cleanup.

use regex::Regex;
use std::sync::OnceLock;

/// Fixed instruction framing for note summarization. The note content is
/// always appended at the end, after the `Note:` marker, so instructions
/// cannot be displaced by note text.
const SUMMARY_INSTRUCTIONS: &str = "\
You are a helpful assistant that writes brief, fluent summaries in natural language.
Summarize the following note into a short paragraph (2-3 sentences).
The tone is informal and friendly.
Share recommendations or insights if applicable, and keep the summary relevant to the note content.
Avoid bullet points, headings, or list formatting. Just give a clean summary paragraph.
For ambiguous or very short notes, do your best to infer the main idea and summarize accordingly.
Do not invent information that is not in the note.";

/// Build the generation prompt for a note's content.
pub fn build_summary_prompt(note_content: &str) -> String {
    format!("{SUMMARY_INSTRUCTIONS}\n\nNote:\n{note_content}")
}

fn summary_label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^summary[:\-\s]*").expect("valid regex"))
}

/// Clean up a raw model completion: trim whitespace and strip a leading
/// "Summary:"-style label the model sometimes prepends despite instructions.
pub fn sanitize_summary(raw: &str) -> String {
    let trimmed = raw.trim();
    summary_label_pattern().replace(trimmed, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_note_content() {
        let prompt = build_summary_prompt("buy milk and eggs");
        assert!(prompt.ends_with("Note:\nbuy milk and eggs"));
        assert!(prompt.starts_with("You are a helpful assistant"));
    }

    #[test]
    fn test_sanitize_strips_summary_label() {
        assert_eq!(sanitize_summary("Summary: it's about milk."), "it's about milk.");
        assert_eq!(sanitize_summary("SUMMARY - groceries list."), "groceries list.");
        assert_eq!(sanitize_summary("summary groceries list."), "groceries list.");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_summary("\n  a tidy summary.  \n"), "a tidy summary.");
    }

    #[test]
    fn test_sanitize_leaves_plain_text_alone() {
        assert_eq!(
            sanitize_summary("This note is a summary of the week."),
            "This note is a summary of the week."
        );
    }

    #[test]
    fn test_sanitize_only_strips_leading_label() {
        // "summary" mid-sentence must survive
        assert_eq!(sanitize_summary("A short summary: milk."), "A short summary: milk.");
    }
}
