use crate::config::{Config, ModelSpec};
use crate::description::{DescriptionProvider, DESCRIPTION_FAILURE};
use crate::images::display_name;
use crate::localization::{parse_localization_reply, LocalizationProvider, LocalizationResult};
use crate::prompts;
use anyhow::Context;
use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Failure of a single chat-completions call
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no message content")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl Message {
    fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(content.to_string()),
        }
    }

    fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Text(content),
        }
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint (OpenRouter by
/// default), used for both screenshot descriptions and localizations.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: Config,
}

impl OpenRouterClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Send one chat request and return the first choice's text
    async fn chat(
        &self,
        request: &ChatRequest,
        timeout: Option<Duration>,
    ) -> Result<String, ProviderError> {
        let mut builder = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &self.config.http_referer)
            .header("X-Title", &self.config.app_title)
            .json(request);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(ProviderError::Api { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ProviderError::EmptyResponse)
    }

    async fn request_description(&self, image_url: String) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: self.config.vision_model.clone(),
            messages: vec![
                Message::system(prompts::DESCRIPTION_SYSTEM_PROMPT),
                Message {
                    role: "user".to_string(),
                    content: MessageContent::Parts(vec![ContentPart::ImageUrl {
                        image_url: ImageUrl { url: image_url },
                    }]),
                },
            ],
            response_format: None,
        };

        self.chat(&request, None).await
    }
}

impl DescriptionProvider for OpenRouterClient {
    async fn describe(&self, image_path: &Path) -> anyhow::Result<String> {
        info!("Getting image description for {}", display_name(image_path));
        let image_url = encode_image(image_path)?;

        match self.request_description(image_url).await {
            Ok(description) => {
                info!("✓ Obtained image description");
                Ok(description)
            }
            Err(e) => {
                warn!("✗ Error getting image description: {}", e);
                Ok(DESCRIPTION_FAILURE.to_string())
            }
        }
    }
}

impl LocalizationProvider for OpenRouterClient {
    async fn localize(
        &self,
        description: &str,
        source_text: &str,
        model: &ModelSpec,
    ) -> LocalizationResult {
        info!("Localizing with {} ({})", model.label, model.id);

        let request = ChatRequest {
            model: model.id.clone(),
            messages: vec![
                Message::system(&prompts::build_localization_system_prompt(description)),
                Message::user(prompts::build_localization_user_prompt(source_text)),
            ],
            response_format: Some(ResponseFormat {
                kind: "json_object".to_string(),
            }),
        };

        match self
            .chat(&request, Some(self.config.localization_timeout))
            .await
        {
            Ok(reply) => {
                let result = parse_localization_reply(&reply);
                if !result.all_failed() {
                    info!("✓ Localized with {}", model.label);
                }
                result
            }
            Err(e) => {
                warn!("✗ Error localizing with {}: {}", model.label, e);
                LocalizationResult::failure(&e.to_string())
            }
        }
    }
}

/// Read an image file into a `data:` URL
pub fn encode_image(image_path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(image_path)
        .with_context(|| format!("Failed to read image {}", image_path.display()))?;

    Ok(format!(
        "data:{};base64,{}",
        mime_type(image_path),
        general_purpose::STANDARD.encode(bytes)
    ))
}

fn mime_type(image_path: &Path) -> &'static str {
    let extension = image_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::{
        matchers::{body_partial_json, body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_test_config(api_url: &str) -> Config {
        Config {
            api_key: "test-openrouter-key".to_string(),
            api_url: api_url.to_string(),
            vision_model: "test/vision".to_string(),
            http_referer: "https://example.com".to_string(),
            app_title: "Test Localizer".to_string(),
            models: vec![ModelSpec::new("test model", "test/text")],
            localization_timeout: Duration::from_secs(5),
            row_delay: Duration::ZERO,
        }
    }

    fn create_chat_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "gen-123",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    fn create_image(dir: &TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write image");
        path
    }

    async fn mount_reply(server: &MockServer, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> OpenRouterClient {
        OpenRouterClient::new(create_test_config(&format!(
            "{}/api/v1/chat/completions",
            server.uri()
        )))
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_text_message_serialization() {
        let message = Message::user("English text: Hi".to_string());
        let json = serde_json::to_value(&message).expect("Should serialize");
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "English text: Hi");
    }

    #[test]
    fn test_image_message_serialization() {
        let message = Message {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: "data:image/png;base64,AAAA".to_string(),
                },
            }]),
        };

        let json = serde_json::to_value(&message).expect("Should serialize");
        assert_eq!(json["content"][0]["type"], "image_url");
        assert_eq!(json["content"][0]["image_url"]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_response_format_omitted_when_none() {
        let request = ChatRequest {
            model: "m".to_string(),
            messages: vec![],
            response_format: None,
        };
        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(!json.contains("response_format"));
    }

    #[test]
    fn test_chat_response_null_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).expect("Should deserialize");
        assert!(response.choices[0].message.content.is_none());
    }

    // ==================== Image Encoding Tests ====================

    #[test]
    fn test_encode_image_data_url() {
        let dir = TempDir::new().unwrap();
        let image = create_image(&dir, "01.png");
        let url = encode_image(&image).unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(mime_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_type(Path::new("a")), "image/png");
    }

    #[test]
    fn test_encode_image_missing_file() {
        assert!(encode_image(Path::new("/definitely/missing.png")).is_err());
    }

    // ==================== describe Tests ====================

    #[tokio::test]
    async fn test_describe_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-openrouter-key"))
            .and(header("HTTP-Referer", "https://example.com"))
            .and(header("X-Title", "Test Localizer"))
            .and(body_partial_json(serde_json::json!({"model": "test/vision"})))
            .and(body_string_contains("data:image/png;base64,"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(create_chat_response("A bald man and a bag of seeds.")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let image = create_image(&dir, "01.png");

        let description = client_for(&server).describe(&image).await.unwrap();
        assert_eq!(description, "A bald man and a bag of seeds.");
    }

    #[tokio::test]
    async fn test_describe_api_error_returns_fixed_text() {
        let server = MockServer::start().await;
        mount_reply(&server, 401, serde_json::json!({"error": "unauthorized"})).await;

        let dir = TempDir::new().unwrap();
        let image = create_image(&dir, "01.png");

        let description = client_for(&server).describe(&image).await.unwrap();
        assert_eq!(description, DESCRIPTION_FAILURE);
    }

    #[tokio::test]
    async fn test_describe_unreadable_image_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .describe(Path::new("/definitely/missing.png"))
            .await;

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read image"));
    }

    // ==================== localize Tests ====================

    #[tokio::test]
    async fn test_localize_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "test/text",
                "response_format": {"type": "json_object"}
            })))
            .and(body_string_contains("English text: It wasn't me!"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_chat_response(
                r#"{"localization": {"turkish": "Ben yapmadım!", "french": "C'est pas moi !", "german": "Ich wars nicht!"}}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let model = ModelSpec::new("test model", "test/text");
        let result = client_for(&server)
            .localize("A kid next to a broken vase.", "It wasn't me!", &model)
            .await;

        assert_eq!(result.turkish.render("It wasn't me!"), "Ben yapmadım!");
        assert_eq!(result.german.render("It wasn't me!"), "Ich wars nicht!");
        assert!(!result.all_failed());
    }

    #[tokio::test]
    async fn test_localize_server_error_fails_every_language() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let model = ModelSpec::new("test model", "test/text");
        let result = client_for(&server).localize("desc", "Hello", &model).await;

        assert!(result.all_failed());
        let rendered = result.french.render("Hello");
        assert!(rendered.starts_with("[ERROR: API error (500"));
        assert!(rendered.ends_with("] Hello"));
    }

    #[tokio::test]
    async fn test_localize_invalid_json_reply() {
        let server = MockServer::start().await;
        mount_reply(&server, 200, create_chat_response("Here you go: Merhaba")).await;

        let model = ModelSpec::new("test model", "test/text");
        let result = client_for(&server).localize("desc", "Hello", &model).await;

        assert_eq!(result, LocalizationResult::failure("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_localize_empty_choices() {
        let server = MockServer::start().await;
        mount_reply(&server, 200, serde_json::json!({"choices": []})).await;

        let model = ModelSpec::new("test model", "test/text");
        let result = client_for(&server).localize("desc", "Hello", &model).await;

        assert_eq!(
            result.turkish.render("Hello"),
            "[ERROR: response contained no message content] Hello"
        );
    }

    #[tokio::test]
    async fn test_localize_unreachable_endpoint() {
        let client = OpenRouterClient::new(create_test_config("http://127.0.0.1:1/chat"));
        let model = ModelSpec::new("test model", "test/text");

        let result = client.localize("desc", "Hello", &model).await;

        assert!(result.all_failed());
        assert!(result.german.render("Hello").starts_with("[ERROR: request failed"));
    }
}
