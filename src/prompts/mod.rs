//! Instruction templates for the generative-text provider.
//!
//! Every function here is pure: the same options always produce the same
//! instruction, byte for byte.

pub mod options;

pub use options::*;

/// Summaries only ever see this many leading characters of the input.
pub const SUMMARY_CHAR_BUDGET: usize = 30_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryOptions {
    pub summary_type: SummaryType,
    pub length: SummaryLength,
    pub format: SummaryFormat,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotesOptions {
    pub tone: Tone,
    pub length: NotesLength,
    pub structure: NotesStructure,
}

/// Prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn summarize_prompt(text: &str, options: &SummaryOptions) -> String {
    let length = options.length.phrase();
    let mut prompt = match options.summary_type {
        SummaryType::KeyPoints => format!(
            "Extract the key points from the following text. Keep the summary to about {}.",
            length
        ),
        SummaryType::Tldr => format!(
            "Write a TL;DR summary of the following text in about {}.",
            length
        ),
        SummaryType::Teaser => format!(
            "Write an engaging teaser for the following text in about {} that makes the reader want to read it.",
            length
        ),
        SummaryType::Headline => format!(
            "Write a headline for the following text, followed by a summary of about {}.",
            length
        ),
        SummaryType::General => format!(
            "Summarize the following text in about {}.",
            length
        ),
    };

    if options.format == SummaryFormat::Bullets {
        prompt.push_str(" Format the summary as a bulleted list with one point per line, each starting with \"- \".");
    }

    prompt.push_str("\n\n");
    prompt.push_str(truncate_chars(text, SUMMARY_CHAR_BUDGET));
    prompt
}

pub fn write_notes_prompt(topic: &str, context: Option<&str>, options: &NotesOptions) -> String {
    let mut lines = vec![
        format!("Write study notes about the following topic: {}", topic),
        String::new(),
        format!("Tone: {}", options.tone.phrase()),
        format!("Length: {}", options.length.phrase()),
        format!("Structure: {}", options.structure.phrase()),
    ];

    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        lines.push(String::new());
        lines.push("Additional context:".to_string());
        lines.push(context.to_string());
    }

    lines.push(String::new());
    lines.push(
        "Make the notes well organized and easy to review, suitable for studying.".to_string(),
    );
    lines.join("\n")
}

pub fn expand_notes_prompt(notes: &str, topic: Option<&str>) -> String {
    let mut prompt = String::from(
        "Expand the following notes with more detail, explanations and examples. \
         Keep the existing tone and structure.",
    );

    if let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str("\nTopic: ");
        prompt.push_str(topic);
    }

    prompt.push_str("\n\nNotes:\n");
    prompt.push_str(notes);
    prompt
}

pub fn proofread_prompt(text: &str, check: CheckType, format: ProofreadFormat) -> String {
    let instruction = match (check, format) {
        (CheckType::Comprehensive, ProofreadFormat::Corrected) => {
            "Proofread this text and fix all grammar, spelling, punctuation and style errors. Return only the corrected text without explanations:"
        }
        (CheckType::Grammar, ProofreadFormat::Corrected) => {
            "Fix only grammar errors in this text. Return the corrected text:"
        }
        (CheckType::Spelling, ProofreadFormat::Corrected) => {
            "Fix only spelling errors in this text. Return the corrected text:"
        }
        (CheckType::Comprehensive, ProofreadFormat::Suggestions) => {
            "Review this text for grammar, spelling, punctuation and style issues. List each issue as a numbered item with the original wording, the suggested correction and a short explanation:"
        }
        (CheckType::Grammar, ProofreadFormat::Suggestions) => {
            "Review this text for grammar errors only. List each error as a numbered item with the original wording and the suggested correction:"
        }
        (CheckType::Spelling, ProofreadFormat::Suggestions) => {
            "Review this text for spelling errors only. List each misspelled word as a numbered item with its correct spelling:"
        }
    };

    format!("{}\n\n{}", instruction, text)
}
