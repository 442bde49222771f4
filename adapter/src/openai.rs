use async_trait::async_trait;
use kernel::repository::guidance::GuidanceClient;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use shared::config::AiConfig;

const PARSE_FALLBACK: &str = "Could not parse OpenAI response.";
const EMPTY_FALLBACK: &str = "No response from OpenAI.";

/// Client for the OpenAI Responses API. Unconfigured deployments (blank
/// base URL or API key) get a deterministic offline stub instead of a call.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl OpenAiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn is_configured(&self) -> bool {
        !self.config.base_url.trim().is_empty() && !self.config.api_key.trim().is_empty()
    }

    fn stub(&self, user_prompt: &str) -> String {
        format!(
            "[STUB GUIDANCE]\nSystem: {}\n\nPrompt:\n{}\n\n\
             (To enable real AI: set AI_OPENAI_BASE_URL and AI_OPENAI_API_KEY)\n",
            self.config.system_prompt, user_prompt
        )
    }
}

#[async_trait]
impl GuidanceClient for OpenAiClient {
    async fn generate(&self, user_prompt: &str) -> String {
        if !self.is_configured() {
            return self.stub(user_prompt);
        }

        let body = json!({
            "model": self.config.model,
            "input": format!("{}\n\n{}", self.config.system_prompt, user_prompt),
        });

        // One best-effort call; every failure class becomes guidance text.
        let response = self
            .http
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => return network_error_text(&e.to_string()),
        };

        let status = response.status();
        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(e) => return network_error_text(&e.to_string()),
        };

        if !status.is_success() {
            return match status {
                StatusCode::TOO_MANY_REQUESTS => quota_error_text(&raw),
                StatusCode::UNAUTHORIZED => auth_error_text(&raw),
                _ => request_failed_text(status, &raw),
            };
        }

        interpret_body(&raw)
    }
}

/// Turns a successful response body into guidance text. A blank body gets
/// its own fallback, distinct from a present-but-unparsable one.
fn interpret_body(raw: &str) -> String {
    if raw.trim().is_empty() {
        return EMPTY_FALLBACK.to_string();
    }
    extract_text(raw)
}

#[derive(Deserialize)]
struct CompletionResponse {
    output: Option<Vec<CompletionOutput>>,
}

#[derive(Deserialize)]
struct CompletionOutput {
    content: Option<Vec<CompletionContent>>,
}

#[derive(Deserialize)]
struct CompletionContent {
    text: Option<String>,
}

/// Pulls `output[0].content[0].text` out of a Responses API payload. Any
/// missing level or wrong shape maps uniformly to the fallback string.
fn extract_text(raw: &str) -> String {
    serde_json::from_str::<CompletionResponse>(raw)
        .ok()
        .and_then(|resp| resp.output)
        .and_then(|output| output.into_iter().next())
        .and_then(|item| item.content)
        .and_then(|content| content.into_iter().next())
        .and_then(|content| content.text)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| PARSE_FALLBACK.to_string())
}

fn quota_error_text(body: &str) -> String {
    format!(
        "I can't generate guidance right now (OpenAI says: insufficient quota).\n\n\
         What to do:\n\
         1) Go to OpenAI billing and add a payment method / credits\n\
         2) Or use a different account/project that has budget\n\
         3) Then try again\n\n\
         Technical:\n{body}\n"
    )
}

fn auth_error_text(body: &str) -> String {
    format!(
        "Authentication failed (401 Unauthorized).\n\n\
         Check:\n\
         - AI_OPENAI_API_KEY is correct\n\
         - No extra spaces\n\
         - Restart the server after changing environment variables\n\n\
         Technical:\n{body}\n"
    )
}

fn request_failed_text(status: StatusCode, body: &str) -> String {
    format!("OpenAI request failed ({status})\n\nTechnical:\n{body}\n")
}

fn network_error_text(message: &str) -> String {
    format!("Network / client error while calling OpenAI.\n\nTechnical:\n{message}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> OpenAiClient {
        OpenAiClient::new(AiConfig {
            base_url: String::new(),
            api_key: String::new(),
            model: "gpt-4.1-mini".into(),
            system_prompt: "SYSTEM PROMPT".into(),
        })
    }

    #[tokio::test]
    async fn generate_returns_stub_when_unconfigured() {
        let client = unconfigured();

        let guidance = client
            .generate("These are my TODO items:\n- task 1\n- task 2")
            .await;

        assert!(guidance.contains("[STUB GUIDANCE]"));
        assert!(guidance.contains("SYSTEM PROMPT"));
        assert!(guidance.contains("These are my TODO items"));
        assert!(guidance.contains("- task 1"));
        assert!(guidance.contains("- task 2"));
        assert!(guidance.contains("AI_OPENAI_BASE_URL"));
    }

    #[tokio::test]
    async fn stub_is_reproducible_for_fixed_inputs() {
        let client = unconfigured();
        let first = client.generate("prompt").await;
        let second = client.generate("prompt").await;
        assert_eq!(first, second);
    }

    #[test]
    fn extract_text_parses_responses_api_shape() {
        let raw = r#"{"output":[{"content":[{"text":"Hello from OpenAI"}]}]}"#;
        assert_eq!(extract_text(raw), "Hello from OpenAI");
    }

    #[test]
    fn extract_text_falls_back_on_unexpected_shape() {
        assert_eq!(extract_text(r#"{"x":1}"#), PARSE_FALLBACK);
        assert_eq!(extract_text(r#"{"output":[]}"#), PARSE_FALLBACK);
        assert_eq!(extract_text(r#"{"output":[{"content":[]}]}"#), PARSE_FALLBACK);
        assert_eq!(
            extract_text(r#"{"output":[{"content":[{"text":"  "}]}]}"#),
            PARSE_FALLBACK
        );
        assert_eq!(extract_text("not json"), PARSE_FALLBACK);
    }

    #[test]
    fn interpret_body_distinguishes_empty_from_unparsable() {
        assert_eq!(interpret_body(""), EMPTY_FALLBACK);
        assert_eq!(interpret_body("  \n "), EMPTY_FALLBACK);
        assert_eq!(interpret_body(r#"{"x":1}"#), PARSE_FALLBACK);
        assert_eq!(
            interpret_body(r#"{"output":[{"content":[{"text":"ok"}]}]}"#),
            "ok"
        );
    }

    #[test]
    fn error_texts_interpolate_technical_detail() {
        assert!(quota_error_text("quota body").contains("quota body"));
        assert!(auth_error_text("auth body").contains("auth body"));
        let failed = request_failed_text(StatusCode::FORBIDDEN, "forbidden body");
        assert!(failed.contains("403"));
        assert!(failed.contains("forbidden body"));
        assert!(network_error_text("timed out").contains("timed out"));
    }
}
