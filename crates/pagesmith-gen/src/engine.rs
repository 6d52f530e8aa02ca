//! Multi-provider completion engine over the `llm` crate.

use std::time::Duration;

use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;
use serde_json::Value;

use pagesmith_core::{ProviderSettings, Settings};

use crate::error::{CompletionError, Result};
use crate::extract;
use crate::prompt;

fn map_backend(provider: &str) -> Result<LLMBackend> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(CompletionError::InvalidRequest {
            provider: other.to_string(),
            message: "unknown provider".to_string(),
        }),
    }
}

/// Completion capability over one or more configured providers, tried in
/// priority order.
#[derive(Clone)]
pub struct Completion {
    settings: Settings,
}

impl Completion {
    pub fn new(settings: Settings) -> Result<Self> {
        if !settings.configured() {
            return Err(CompletionError::Credentials(
                "no completion provider configured; set GEMINI_API_KEY or OPENAI_API_KEY"
                    .to_string(),
            ));
        }
        tracing::info!(
            providers = ?settings.providers.iter().map(|p| p.provider.as_str()).collect::<Vec<_>>(),
            "completion engine initialized"
        );
        Ok(Completion { settings })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Settings::from_env())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Text completion with provider fallback. Rate limits, timeouts, auth
    /// and request errors stop the fallback; unavailable providers are
    /// skipped in favor of the next one.
    pub async fn complete(
        &self,
        user_prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String> {
        let mut failures = Vec::new();
        for provider in &self.settings.providers {
            tracing::info!(
                provider = %provider.provider,
                model = %provider.model,
                "attempting completion"
            );
            match self.chat(provider, user_prompt, system_prompt).await {
                Ok(text) => return Ok(text),
                Err(err @ CompletionError::Unavailable { .. }) => {
                    tracing::warn!(provider = %provider.provider, error = %err, "provider unavailable, trying next");
                    failures.push(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }
        Err(CompletionError::AllProvidersFailed(failures.join("; ")))
    }

    /// JSON completion: instructs the model to answer with bare JSON,
    /// optionally constrained by a schema, and extracts the value from the
    /// raw response text.
    pub async fn complete_json(
        &self,
        user_prompt: &str,
        system_prompt: Option<&str>,
        schema: Option<&Value>,
    ) -> Result<Value> {
        let system = prompt::json_system_prompt(system_prompt, schema);
        let raw = self.complete(user_prompt, Some(&system)).await?;
        extract::extract_json(&raw, &[])
    }

    async fn chat(
        &self,
        provider: &ProviderSettings,
        user_prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String> {
        let backend = map_backend(&provider.provider)?;
        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&provider.model)
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature);
        if let Some(system) = system_prompt {
            builder = builder.system(system);
        }
        if !provider.api_key.is_empty() {
            builder = builder.api_key(&provider.api_key);
        }
        let client = builder
            .build()
            .map_err(|e| classify_provider_error(&provider.provider, &e.to_string()))?;

        let messages = vec![ChatMessage::user().content(user_prompt).build()];
        let timeout = Duration::from_secs(self.settings.timeout_secs);
        let response = match tokio::time::timeout(timeout, client.chat(&messages)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                return Err(classify_provider_error(&provider.provider, &e.to_string()))
            }
            Err(_) => {
                return Err(CompletionError::Timeout {
                    provider: provider.provider.clone(),
                    message: format!("no response within {}s", self.settings.timeout_secs),
                })
            }
        };

        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(CompletionError::Unavailable {
                provider: provider.provider.clone(),
                message: "provider returned an empty response".to_string(),
            }),
        }
    }
}

/// Best-effort classification of a provider error message into a failure
/// kind. Provider SDKs surface these as strings, so this goes by
/// recognizable substrings and status codes.
pub(crate) fn classify_provider_error(provider: &str, message: &str) -> CompletionError {
    let lower = message.to_lowercase();
    let provider = provider.to_string();
    let message = message.to_string();
    if lower.contains("rate limit") || lower.contains("too many requests") || lower.contains("429")
    {
        CompletionError::RateLimited { provider, message }
    } else if lower.contains("timed out") || lower.contains("timeout") {
        CompletionError::Timeout { provider, message }
    } else if lower.contains("api key")
        || lower.contains("unauthorized")
        || lower.contains("authentication")
        || lower.contains("401")
        || lower.contains("403")
    {
        CompletionError::Credentials(format!("{provider}: {message}"))
    } else if lower.contains("model")
        && (lower.contains("not found") || lower.contains("does not exist") || lower.contains("unknown"))
    {
        CompletionError::Unavailable { provider, message }
    } else if lower.contains("invalid") || lower.contains("bad request") || lower.contains("400") {
        CompletionError::InvalidRequest { provider, message }
    } else {
        CompletionError::Unavailable { provider, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_providers_is_a_credentials_error() {
        let err = Completion::new(Settings::default()).err().unwrap();
        assert!(matches!(err, CompletionError::Credentials(_)));
    }

    #[test]
    fn classifies_rate_limits() {
        let err = classify_provider_error("openai", "429 Too Many Requests");
        assert!(matches!(err, CompletionError::RateLimited { .. }));
    }

    #[test]
    fn classifies_auth_failures() {
        let err = classify_provider_error("google", "Invalid API key provided");
        assert!(matches!(err, CompletionError::Credentials(_)));
    }

    #[test]
    fn classifies_missing_models_as_unavailable() {
        let err = classify_provider_error("openai", "The model `gpt-9` does not exist");
        assert!(matches!(err, CompletionError::Unavailable { .. }));
    }

    #[test]
    fn classifies_bad_requests() {
        let err = classify_provider_error("openai", "400 Bad Request: missing messages");
        assert!(matches!(err, CompletionError::InvalidRequest { .. }));
    }

    #[test]
    fn unknown_errors_fall_back_to_unavailable() {
        let err = classify_provider_error("groq", "connection reset by peer");
        assert!(matches!(err, CompletionError::Unavailable { .. }));
    }

    #[test]
    fn unknown_provider_is_invalid() {
        assert!(map_backend("aol").is_err());
        assert!(map_backend("anthropic").is_ok());
    }
}
