/// LLM Client — the single point of entry for all text-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenRouter API directly.
/// Both analysis services go through `complete_parsed`, which owns the
/// retry loop; the services only supply a prompt and a parse strategy.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// The model used for all completion calls.
pub const MODEL: &str = "deepseek/deepseek-chat:free";
/// Attempts per completion; the retry loop is backoff-free.
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No parseable answer after {attempts} attempts")]
    Unparseable { attempts: u32 },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageBody,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single completion client used by the analysis services.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    site_url: String,
    site_name: String,
}

impl LlmClient {
    pub fn new(api_key: String, site_url: String, site_name: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            site_url,
            site_name,
        }
    }

    /// One round trip to the chat completions API, returning the first
    /// choice's message content.
    pub async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.site_name)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded ({} chars)", content.len());
        Ok(content)
    }

    /// Calls the LLM until `parse` accepts the answer, up to `MAX_ATTEMPTS`
    /// times with no backoff. An attempt fails on HTTP/API errors, empty
    /// content, or a `None` from the parse strategy.
    pub async fn complete_parsed<T, F>(&self, prompt: &str, parse: F) -> Result<T, LlmError>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut last_error: Option<LlmError> = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.call(prompt).await {
                Ok(content) => match parse(&content) {
                    Some(value) => return Ok(value),
                    None => {
                        warn!(
                            "LLM attempt {attempt}/{MAX_ATTEMPTS}: unparseable answer: {}",
                            content.chars().take(120).collect::<String>()
                        );
                    }
                },
                Err(e) => {
                    warn!("LLM attempt {attempt}/{MAX_ATTEMPTS} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(LlmError::Unparseable {
            attempts: MAX_ATTEMPTS,
        }))
    }
}

/// Strips ```json … ``` or ``` … ``` code fences from LLM output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n85\n```";
        assert_eq!(strip_code_fences(input), "85");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_unterminated_fence() {
        let input = "```json\n42";
        assert_eq!(strip_code_fences(input), "42");
    }
}
