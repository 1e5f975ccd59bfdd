use async_trait::async_trait;
use std::time::Duration;

use crate::config::LLMConfig;
use crate::types::{AppError, AppResult, LLMMessage, LLMProvider, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Generative-text client used by the relay endpoints.
///
/// Holds the selected adapter together with the request defaults from
/// configuration, and turns a single instruction string into a one-turn
/// completion request.
pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl LLM {
    pub fn new(config: &LLMConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let adapter: Box<dyn LLMAdapter> = match config.provider {
            LLMProvider::Google => Box::new(crate::llm::google::GoogleAdapter::with_options(
                &config.api_key,
                config.base_url.as_deref(),
                timeout,
            )?),
            LLMProvider::OpenAI => Box::new(crate::llm::openai::OpenAIAdapter::with_options(
                &config.api_key,
                config.base_url.as_deref(),
                timeout,
            )?),
        };

        Ok(Self {
            adapter,
            provider_name: config.provider.to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Wrap an existing adapter, e.g. a test double.
    pub fn with_adapter(
        adapter: Box<dyn LLMAdapter>,
        provider_name: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            adapter,
            provider_name: provider_name.into(),
            model: model.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }

    /// Send one instruction and return the provider's text.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = LLMRequest {
            model: self.model.clone(),
            messages: vec![LLMMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system_instruction: None,
        };

        tracing::debug!(
            provider = %self.provider_name,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Sending generation request"
        );

        let response = self.create_chat_completion(&request).await?;

        tracing::debug!(
            finish_reason = %response.finish_reason,
            total_tokens = response.usage.total_tokens,
            "Generation complete"
        );

        if response.content.trim().is_empty() {
            return Err(AppError::LLMApi("Provider returned an empty response".to_string()));
        }

        Ok(response.content)
    }
}

pub(crate) fn build_http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenUsage;
    use std::sync::{Arc, Mutex};

    struct RecordingAdapter {
        seen: Arc<Mutex<Vec<LLMRequest>>>,
        reply: String,
    }

    #[async_trait]
    impl LLMAdapter for RecordingAdapter {
        async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(LLMResponse {
                content: self.reply.clone(),
                finish_reason: "stop".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let llm = LLM::with_adapter(
            Box::new(RecordingAdapter {
                seen: Arc::clone(&seen),
                reply: "done".to_string(),
            }),
            "google",
            "gemini-test",
        );

        let out = llm.generate("Summarize this").await.unwrap();
        assert_eq!(out, "done");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gemini-test");
        assert_eq!(seen[0].messages.len(), 1);
        assert_eq!(seen[0].messages[0].role, "user");
        assert_eq!(seen[0].messages[0].content, "Summarize this");
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_output() {
        let llm = LLM::with_adapter(
            Box::new(RecordingAdapter {
                seen: Arc::new(Mutex::new(Vec::new())),
                reply: "  \n".to_string(),
            }),
            "google",
            "gemini-test",
        );

        let err = llm.generate("anything").await.unwrap_err();
        assert!(matches!(err, AppError::LLMApi(_)));
    }
}
