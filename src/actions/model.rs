//! Remote language model used to read actions out of dialogue.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ModelConfig;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Empty response")]
    EmptyResponse,
}

/// A text-in, text-out completion service.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for a `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ModelError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(status.as_u16(), text));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(network_error)?;

        first_text(parsed).ok_or(ModelError::EmptyResponse)
    }
}

// The URL is dropped so request details never end up in logs.
fn network_error(e: reqwest::Error) -> ModelError {
    ModelError::Network(e.without_url().to_string())
}

fn first_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn reads_first_candidate_text() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"primary_action\": \"wave\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            first_text(response).as_deref(),
            Some(r#"{"primary_action": "wave"}"#)
        );
    }

    #[test]
    fn no_candidates_is_none() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(first_text(response).is_none());
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new(&ModelConfig {
            api_key: "k".into(),
            model: "gemini-1.5-flash".into(),
            base_url: "http://localhost:9/v1beta/".into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(
            client.endpoint,
            "http://localhost:9/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn api_key_stays_out_of_errors() {
        let client = GeminiClient::new(&ModelConfig {
            api_key: "SUPER_SECRET_KEY".into(),
            model: "gemini-1.5-flash".into(),
            base_url: "http://127.0.0.1:1/v1beta".into(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, ModelError::Network(_)));
        assert!(!err.to_string().contains("SUPER_SECRET_KEY"));
        assert!(!client.endpoint.contains("SUPER_SECRET_KEY"));
    }
}
