use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use studymate::config::Config;
use studymate::llm::{LLMAdapter, LLM};
use studymate::translate::TranslationAdapter;
use studymate::types::{
    AppError, AppResult, LLMRequest, LLMResponse, TokenUsage, TranslationRequest,
};
use studymate::{create_router, AppState};

const BOUNDARY: &str = "studymate-test-boundary";

#[derive(Default)]
struct MockLlm {
    prompts: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

#[async_trait::async_trait]
impl LLMAdapter for MockLlm {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let prompt = request.messages[0].content.clone();
        self.prompts.lock().unwrap().push(prompt);
        if self.fail {
            return Err(AppError::LLMApi("upstream unavailable".to_string()));
        }
        Ok(LLMResponse {
            content: "mock output".to_string(),
            finish_reason: "stop".to_string(),
            usage: TokenUsage::default(),
        })
    }
}

#[derive(Default)]
struct MockTranslator {
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
}

#[async_trait::async_trait]
impl TranslationAdapter for MockTranslator {
    fn name(&self) -> &str {
        "mock-translate"
    }

    async fn translate(&self, request: &TranslationRequest) -> AppResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(format!("[{}] {}", request.target, request.text))
    }
}

struct TestApp {
    router: axum::Router,
    prompts: Arc<Mutex<Vec<String>>>,
    translations: Arc<Mutex<Vec<TranslationRequest>>>,
    upload_dir: tempfile::TempDir,
}

fn test_app_with(vars: &[(&str, &str)], llm_fails: bool) -> TestApp {
    let upload_dir = tempfile::tempdir().unwrap();
    let mut env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    env.insert(
        "UPLOAD_DIR".to_string(),
        upload_dir.path().to_string_lossy().to_string(),
    );
    let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();

    let prompts = Arc::new(Mutex::new(Vec::new()));
    let llm = LLM::with_adapter(
        Box::new(MockLlm {
            prompts: Arc::clone(&prompts),
            fail: llm_fails,
        }),
        "mock",
        "mock-model",
    );

    let translations = Arc::new(Mutex::new(Vec::new()));
    let translator = Arc::new(MockTranslator {
        requests: Arc::clone(&translations),
    });

    let state = AppState::new(config, llm, translator);

    TestApp {
        router: create_router(state),
        prompts,
        translations,
        upload_dir,
    }
}

fn test_app() -> TestApp {
    test_app_with(&[], false)
}

fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, filename, content)))
        .unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[tokio::test]
async fn test_upload_txt_returns_text_and_cleans_up() {
    let app = test_app();

    let (status, body) = send(&app, upload_request("file", "notes.txt", b"Hello world")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "text": "Hello world", "filename": "notes.txt"})
    );
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn test_upload_filename_is_sanitized() {
    let app = test_app();

    let (status, body) = send(
        &app,
        upload_request("file", "../My Lecture Notes.TXT", b"content"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "My_Lecture_Notes.TXT");
    assert_eq!(body["text"], "content");
}

#[tokio::test]
async fn test_upload_accented_filename_keeps_base_letters() {
    let app = test_app();

    let (status, body) = send(&app, upload_request("file", "résumé.txt", b"hi")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "text": "hi", "filename": "resume.txt"})
    );
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let app = test_app();

    let (status, body) = send(&app, upload_request("file", "slides.pptx", b"data")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid file type. Only PDF and TXT allowed");
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = test_app();

    let (status, body) = send(&app, upload_request("document", "notes.txt", b"x")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn test_upload_with_empty_filename() {
    let app = test_app();

    let (status, body) = send(&app, upload_request("file", "", b"x")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file selected");
}

#[tokio::test]
async fn test_upload_too_large_is_distinct_error() {
    let app = test_app_with(&[("MAX_UPLOAD_BYTES", "16")], false);

    let (status, body) = send(&app, upload_request("file", "big.txt", &[b'a'; 64])).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File too large. Maximum size is 16 bytes");
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn test_upload_decode_failure_is_inline_by_default() {
    let app = test_app();

    let (status, body) = send(&app, upload_request("file", "bad.txt", &[0xff, 0xfe, 0xfd])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["text"].as_str().unwrap().starts_with("Error reading TXT:"));
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn test_upload_decode_failure_can_be_hard_error() {
    let app = test_app_with(&[("INLINE_EXTRACTION_ERRORS", "false")], false);

    let (status, body) = send(&app, upload_request("file", "broken.pdf", b"not a pdf")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("Error reading PDF:"));
    assert!(dir_is_empty(app.upload_dir.path()));
}

#[tokio::test]
async fn test_summarize_truncates_input() {
    let app = test_app();
    let text = "a".repeat(30_000) + &"b".repeat(100);

    let (status, body) = send(
        &app,
        json_request(
            "/api/summarize",
            json!({"text": text, "type": "tl;dr", "length": "short", "format": "bullets"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "summary": "mock output"}));

    let prompts = app.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("3-4 sentences"));
    assert!(prompts[0].contains("bulleted list"));
    assert!(prompts[0].ends_with(&"a".repeat(30_000)));
    assert!(!prompts[0].contains("bbb"));
}

#[tokio::test]
async fn test_summarize_requires_text() {
    let app = test_app();

    let (status, body) = send(&app, json_request("/api/summarize", json!({"text": "   "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");
    assert!(app.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_option_is_a_validation_error() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("/api/summarize", json!({"text": "abc", "length": "enormous"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(app.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/proofread")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_proofread_grammar_corrected_prompt() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "/api/proofread",
            json!({"text": "She go to school.", "type": "grammar", "format": "corrected"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "result": "mock output"}));
    assert_eq!(
        app.prompts.lock().unwrap()[0],
        "Fix only grammar errors in this text. Return the corrected text:\n\nShe go to school."
    );
}

#[tokio::test]
async fn test_write_notes_without_topic_skips_provider() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("/api/write", json!({"context": "biology", "tone": "casual"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Topic is required");
    assert!(app.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_write_notes_success() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "/api/write",
            json!({"topic": "Cell division", "context": "", "tone": "academic", "length": "long", "structure": "outline"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "notes": "mock output"}));

    let prompt = app.prompts.lock().unwrap()[0].clone();
    assert!(prompt.starts_with("Write study notes about the following topic: Cell division"));
    assert!(prompt.contains("600-900 words"));
    assert!(!prompt.contains("Additional context"));
}

#[tokio::test]
async fn test_expand_notes() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("/api/expand", json!({"topic": "Mitosis", "notes": "- prophase"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], "mock output");
    assert!(app.prompts.lock().unwrap()[0].ends_with("Notes:\n- prophase"));

    let (status, body) = send(&app, json_request("/api/expand", json!({"topic": "Mitosis"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Notes are required");
}

#[tokio::test]
async fn test_translate_success() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("/api/translate", json!({"text": "Hello", "source": "en", "target": "fr"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "translation": "[fr] Hello"}));

    let requests = app.translations.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source, "en");
    assert_eq!(requests[0].target, "fr");
}

#[tokio::test]
async fn test_translate_same_language_rejected() {
    let app = test_app();

    for code in ["en", "de", "ja"] {
        let (status, body) = send(
            &app,
            json_request("/api/translate", json!({"text": "Hi", "source": code, "target": code})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Source and target languages must be different");
    }
    assert!(app.translations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_is_scoped_500() {
    let app = test_app_with(&[], true);

    let (status, body) = send(&app, json_request("/api/summarize", json!({"text": "abc"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Summarization failed: upstream unavailable");

    let (status, body) = send(
        &app,
        json_request("/api/proofread", json!({"text": "abc"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Proofreading failed: upstream unavailable");
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["llm_provider"], "mock");
    assert_eq!(body["translation"], "mock-translate");
}
