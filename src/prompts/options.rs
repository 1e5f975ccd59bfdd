// Enumerated request options and the fixed phrase each one maps to.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SummaryType {
    #[default]
    #[serde(rename = "key-points")]
    KeyPoints,
    #[serde(rename = "tl;dr")]
    Tldr,
    #[serde(rename = "teaser")]
    Teaser,
    #[serde(rename = "headline")]
    Headline,
    #[serde(rename = "general", alias = "other")]
    General,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn phrase(self) -> &'static str {
        match self {
            SummaryLength::Short => "3-4 sentences",
            SummaryLength::Medium => "1-2 paragraphs",
            SummaryLength::Long => "3-4 paragraphs",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Paragraph,
    Bullets,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Academic,
    #[default]
    Professional,
    Casual,
    Detailed,
}

impl Tone {
    pub fn phrase(self) -> &'static str {
        match self {
            Tone::Academic => "formal and academic, using precise terminology",
            Tone::Professional => "clear and professional",
            Tone::Casual => "friendly and conversational",
            Tone::Detailed => "thorough and detailed, explaining each concept step by step",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotesLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl NotesLength {
    pub fn phrase(self) -> &'static str {
        match self {
            NotesLength::Short => "150-250 words",
            NotesLength::Medium => "300-500 words",
            NotesLength::Long => "600-900 words",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotesStructure {
    #[default]
    Bullets,
    Paragraphs,
    Outline,
}

impl NotesStructure {
    pub fn phrase(self) -> &'static str {
        match self {
            NotesStructure::Bullets => "concise bullet points grouped under short headings",
            NotesStructure::Paragraphs => "well-organized paragraphs, each opening with a clear topic sentence",
            NotesStructure::Outline => "a hierarchical outline with numbered sections and nested sub-points",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    #[default]
    Comprehensive,
    Grammar,
    Spelling,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofreadFormat {
    #[default]
    Corrected,
    Suggestions,
}
