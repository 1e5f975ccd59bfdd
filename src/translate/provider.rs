use async_trait::async_trait;

use crate::types::{AppResult, TranslationRequest};

#[async_trait]
pub trait TranslationAdapter: Send + Sync {
    /// Short provider identifier, reported by the health endpoint.
    fn name(&self) -> &str;

    async fn translate(&self, request: &TranslationRequest) -> AppResult<String>;
}
