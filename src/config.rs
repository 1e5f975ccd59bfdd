use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::types::LLMProvider;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub translation: TranslationConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
    pub static_dir: PathBuf,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

#[derive(Clone)]
pub struct TranslationConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub max_file_size: usize,
    /// Return extraction failures as the upload's text instead of an error response.
    pub inline_extraction_errors: bool,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    pub log_dir: Option<PathBuf>,
}

// API keys stay out of `{:?}` output.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("provider", &self.provider)
            .field("api_key", &mask(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for TranslationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationConfig")
            .field("api_key", &mask(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn mask(key: &str) -> &'static str {
    if key.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider_name = var("LLM_PROVIDER").unwrap_or_else(|| "google".to_string());
        let provider = LLMProvider::parse(&provider_name)
            .ok_or_else(|| anyhow!("Unsupported LLM_PROVIDER: {}", provider_name))?;

        let api_key = match provider {
            LLMProvider::Google => var("GOOGLE_API_KEY"),
            LLMProvider::OpenAI => var("OPENAI_API_KEY"),
        }
        .unwrap_or_default();

        let default_model = match provider {
            LLMProvider::Google => "gemini-1.5-flash",
            LLMProvider::OpenAI => "gpt-4o-mini",
        };

        let timeout_secs: u64 = parse_or(var("PROVIDER_TIMEOUT_SECS"), 60, "PROVIDER_TIMEOUT_SECS")?;

        Ok(Self {
            server: ServerConfig {
                port: parse_or(var("PORT"), 5000, "PORT")?,
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                cors_allowed_origins: var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                static_dir: var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("static")),
            },
            llm: LLMConfig {
                provider,
                api_key,
                model: var("LLM_MODEL").unwrap_or_else(|| default_model.to_string()),
                base_url: var("LLM_BASE_URL"),
                max_tokens: var("LLM_MAX_TOKENS")
                    .map(|v| v.parse().context("LLM_MAX_TOKENS must be an integer"))
                    .transpose()?,
                temperature: var("LLM_TEMPERATURE")
                    .map(|v| v.parse().context("LLM_TEMPERATURE must be a number"))
                    .transpose()?,
                timeout_secs,
            },
            translation: TranslationConfig {
                api_key: var("TRANSLATE_API_KEY")
                    .or_else(|| var("GOOGLE_API_KEY"))
                    .unwrap_or_default(),
                base_url: var("TRANSLATE_BASE_URL"),
                timeout_secs,
            },
            upload: UploadConfig {
                dir: var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| env::temp_dir().join("studymate-uploads")),
                max_file_size: parse_or(
                    var("MAX_UPLOAD_BYTES"),
                    DEFAULT_MAX_UPLOAD_BYTES,
                    "MAX_UPLOAD_BYTES",
                )?,
                inline_extraction_errors: parse_or(
                    var("INLINE_EXTRACTION_ERRORS"),
                    true,
                    "INLINE_EXTRACTION_ERRORS",
                )?,
            },
            logging: LoggingConfig {
                filter: var("RUST_LOG")
                    .unwrap_or_else(|| "studymate=debug,tower_http=debug".to_string()),
                log_dir: var("LOG_DIR").map(PathBuf::from),
            },
        })
    }
}

fn parse_or<T>(value: Option<String>, default: T, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, v)),
        None => Ok(default),
    }
}
