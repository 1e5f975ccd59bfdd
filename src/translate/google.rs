// Google Cloud Translation (v2, Basic) adapter
// API Reference: https://cloud.google.com/translate/docs/reference/rest/v2/translate

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::TranslationConfig;
use crate::llm::provider::build_http_client;
use crate::translate::provider::TranslationAdapter;
use crate::types::{AppError, AppResult, TranslationRequest};

const TRANSLATE_API_BASE: &str = "https://translation.googleapis.com";

pub struct GoogleTranslateAdapter {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: Vec<&'a str>,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[derive(Deserialize)]
struct TranslateErrorResponse {
    error: TranslateError,
}

#[derive(Deserialize)]
struct TranslateError {
    message: String,
}

impl GoogleTranslateAdapter {
    pub fn new(config: &TranslationConfig) -> AppResult<Self> {
        Self::with_options(
            &config.api_key,
            config.base_url.as_deref(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn with_options(api_key: &str, base_url: Option<&str>, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            api_key: api_key.to_string(),
            base_url: base_url
                .unwrap_or(TRANSLATE_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[async_trait]
impl TranslationAdapter for GoogleTranslateAdapter {
    fn name(&self) -> &str {
        "google-translate"
    }

    async fn translate(&self, request: &TranslationRequest) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::Translation("Translation API key not configured".to_string()));
        }

        let url = format!("{}/language/translate/v2", self.base_url);
        let body = TranslateBody {
            q: vec![request.text.as_str()],
            source: &request.source,
            target: &request.target,
            format: "text",
        };

        tracing::debug!(
            source = %request.source,
            target = %request.target,
            chars = request.text.chars().count(),
            "Sending translation request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Translation(format!("Translate request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<TranslateErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(AppError::Translation(format!(
                "Translate API error ({}): {}",
                status, detail
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| AppError::Translation(format!("Failed to parse Translate response: {}", e)))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| AppError::Translation("Translate API returned no translations".to_string()))
    }
}
