use std::sync::Arc;

use crate::config::Config;
use crate::llm::LLM;
use crate::prompts::{
    CheckType, NotesLength, NotesStructure, ProofreadFormat, SummaryFormat, SummaryLength,
    SummaryType, Tone,
};
use crate::translate::TranslationAdapter;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<LLM>,
    pub translator: Arc<dyn TranslationAdapter>,
}

impl AppState {
    pub fn new(config: Config, llm: LLM, translator: Arc<dyn TranslationAdapter>) -> Self {
        Self {
            config: Arc::new(config),
            llm: Arc::new(llm),
            translator,
        }
    }
}

// API Request/Response types
//
// Required text fields are optional on the wire so a missing field reaches
// validation and gets its own message instead of a generic body error.

#[derive(Debug, serde::Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub summary_type: SummaryType,
    #[serde(default)]
    pub length: SummaryLength,
    #[serde(default)]
    pub format: SummaryFormat,
}

#[derive(Debug, serde::Deserialize)]
pub struct WriteNotesRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: NotesLength,
    #[serde(default)]
    pub structure: NotesStructure,
}

#[derive(Debug, serde::Deserialize)]
pub struct ExpandNotesRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ProofreadRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub check_type: CheckType,
    #[serde(default)]
    pub format: ProofreadFormat,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub text: String,
    pub filename: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub summary: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct NotesResponse {
    pub success: bool,
    pub notes: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TranslationResponse {
    pub success: bool,
    pub translation: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ProofreadResponse {
    pub success: bool,
    pub result: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub llm_provider: String,
    pub llm_model: String,
    pub translation: String,
}
