//! Translation provider interface and the OpenAI-compatible HTTP client.
//!
//! The provider is a black-box text-to-text service: one call per template
//! body, instructed to leave `${...}` placeholder spans untouched. An empty
//! response is a hard error; the orchestrator does not retry.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const API_KEY_ENV: &str = "OPENAI_API_KEY";
const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// A text-to-text translation service.
///
/// Implementations must return the translated text with every placeholder
/// span (`${...}`) byte-identical to the input, and must fail on an empty
/// result rather than returning it.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        target_locale: &str,
    ) -> impl Future<Output = Result<String>>;
}

/// Chat-completions client for an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiTranslator {
    /// Build a translator from the process environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL` optionally points at
    /// a compatible endpoint other than api.openai.com.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).with_context(|| {
            format!("{API_KEY_ENV} is not set; translation requires a provider credential")
        })?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, api_key)
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Override the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn system_prompt(target_locale: &str) -> String {
        format!(
            "Translate the user's text for a technical website into \"{target_locale}\". \
             Do not translate placeholders of the form ${{...}}. \
             Keep the template string structure. \
             Return only the translation, with no additional explanation."
        )
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, target_locale: &str) -> Result<String> {
        let system = Self::system_prompt(target_locale);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Translation request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Translation provider returned {status}: {body}");
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Failed to parse translation response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        let content = content.trim();
        if content.is_empty() {
            bail!("Translation failed: empty response from provider");
        }
        Ok(content.to_string())
    }
}
