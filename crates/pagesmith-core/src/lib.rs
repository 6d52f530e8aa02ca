pub mod catalog;
pub mod tags;

use serde::{Deserialize, Serialize};

/// A resolved icon reference: a react-icons package plus the icon's
/// exported identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct IconRef {
    pub package: String,
    pub name: String,
}

/// Settings for a single completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    pub provider: String,
    pub model: String,
    pub api_key: String,
}

/// Generation settings. Providers are tried in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub providers: Vec<ProviderSettings>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            providers: Vec::new(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Read settings from the environment. Gemini is preferred when both
    /// keys are present, matching the provider fallback order.
    pub fn from_env() -> Settings {
        let mut providers = Vec::new();
        if let Some(api_key) = non_empty_env("GEMINI_API_KEY") {
            providers.push(ProviderSettings {
                provider: "google".to_string(),
                model: env_or("GEMINI_MODEL", "gemini-2.5-flash"),
                api_key,
            });
        }
        if let Some(api_key) = non_empty_env("OPENAI_API_KEY") {
            providers.push(ProviderSettings {
                provider: "openai".to_string(),
                model: env_or("OPENAI_MODEL", "gpt-4o-mini"),
                api_key,
            });
        }
        Settings {
            providers,
            max_tokens: env_parse("MAX_TOKENS", 4096),
            temperature: env_parse("TEMPERATURE", 0.7),
            timeout_secs: env_parse("LLM_TIMEOUT", 30),
        }
    }

    /// Whether at least one provider is usable.
    pub fn configured(&self) -> bool {
        self.providers
            .iter()
            .any(|p| !p.model.is_empty() && (p.provider == "ollama" || !p.api_key.is_empty()))
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    non_empty_env(name).unwrap_or_else(|| default.to_string())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_not_configured() {
        assert!(!Settings::default().configured());
    }

    #[test]
    fn provider_with_key_is_configured() {
        let settings = Settings {
            providers: vec![ProviderSettings {
                provider: "openai".to_string(),
                model: "gpt-4o-mini".to_string(),
                api_key: "sk-test".to_string(),
            }],
            ..Settings::default()
        };
        assert!(settings.configured());
    }

    #[test]
    fn ollama_needs_no_key() {
        let settings = Settings {
            providers: vec![ProviderSettings {
                provider: "ollama".to_string(),
                model: "llama3".to_string(),
                api_key: String::new(),
            }],
            ..Settings::default()
        };
        assert!(settings.configured());
    }
}
