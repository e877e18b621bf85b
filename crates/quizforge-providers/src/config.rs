//! Backend configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizforge_core::traits::ExamGenerator;

use crate::ollama::OllamaGenerator;
use crate::openai::OpenAiGenerator;

/// Configuration for a single completion backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in
/// logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    OpenAI {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        org_id: Option<String>,
    },
    Ollama {
        #[serde(default = "default_ollama_url")]
        base_url: String,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::OpenAI {
                api_key: _,
                base_url,
                org_id,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("org_id", org_id)
                .finish(),
            ProviderConfig::Ollama { base_url } => f
                .debug_struct("Ollama")
                .field("base_url", base_url)
                .finish(),
        }
    }
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

/// Top-level quizforge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizforgeConfig {
    /// Backend configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Default backend to use.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Default model to use.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Default temperature for generation.
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
    /// Default number of questions to ask for.
    #[serde(default = "default_question_count")]
    pub default_question_count: u32,
    /// Max tokens for generation.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Directory for the exam store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_provider() -> String {
    "openai".to_string()
}
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_temperature() -> f64 {
    0.7
}
fn default_question_count() -> u32 {
    20
}
fn default_max_tokens() -> u32 {
    2048
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("./quizforge-data")
}

impl Default for QuizforgeConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider(),
            default_model: default_model(),
            default_temperature: default_temperature(),
            default_question_count: default_question_count(),
            max_tokens: default_max_tokens(),
            data_dir: default_data_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a backend config.
fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
        } => ProviderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            org_id: org_id.as_ref().map(|o| resolve_env_vars(o)),
        },
        ProviderConfig::Ollama { base_url } => ProviderConfig::Ollama {
            base_url: resolve_env_vars(base_url),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizforge.toml` in the current directory
/// 2. `~/.config/quizforge/config.toml`
///
/// Environment variable override: `QUIZFORGE_OPENAI_KEY`.
pub fn load_config() -> Result<QuizforgeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizforgeConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("QUIZFORGE_OPENAI_KEY") {
        config
            .providers
            .entry("openai".into())
            .or_insert(ProviderConfig::OpenAI {
                api_key: String::new(),
                base_url: None,
                org_id: None,
            });
        if let Some(ProviderConfig::OpenAI { api_key, .. }) = config.providers.get_mut("openai") {
            *api_key = key;
        }
    }

    // Resolve env vars in all backend configs
    let resolved: HashMap<String, ProviderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_provider_config(v)))
        .collect();
    config.providers = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizforge"))
}

/// Create a backend instance from its configuration.
pub fn create_generator(config: &ProviderConfig) -> Result<Box<dyn ExamGenerator>> {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
        } => Ok(Box::new(OpenAiGenerator::new(
            api_key,
            base_url.clone(),
            org_id.clone(),
        ))),
        ProviderConfig::Ollama { base_url } => Ok(Box::new(OllamaGenerator::new(base_url))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZFORGE_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZFORGE_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_QUIZFORGE_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_QUIZFORGE_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = QuizforgeConfig::default();
        assert_eq!(config.default_provider, "openai");
        assert_eq!(config.default_model, "gpt-3.5-turbo");
        assert_eq!(config.default_question_count, 20);
        assert_eq!(config.max_tokens, 2048);
    }

    #[test]
    fn parse_provider_config() {
        let toml_str = r#"
default_provider = "openai"
default_model = "gpt-3.5-turbo"
default_question_count = 10

[providers.openai]
type = "openai"
api_key = "sk-test"

[providers.ollama]
type = "ollama"
base_url = "http://localhost:11434"
"#;
        let config: QuizforgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.len(), 2);
        assert!(matches!(
            config.providers.get("openai"),
            Some(ProviderConfig::OpenAI { .. })
        ));
        assert_eq!(config.default_question_count, 10);
    }

    #[test]
    fn debug_masks_api_keys() {
        let config = ProviderConfig::OpenAI {
            api_key: "sk-secret".into(),
            base_url: None,
            org_id: None,
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("***"));
    }
}
