use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "models/ggml-base.en.bin";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const ENV_WHISPER_MODEL_PATH: &str = "WHISPER_MODEL_PATH";

/// Speech-to-text configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsrConfig {
    pub model_path: String,
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub asr: AsrConfig,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("input path must not be empty")]
    EmptyInput,
    #[error("model path must not be empty")]
    EmptyModelPath,
}

impl AppConfig {
    pub fn new(input: PathBuf, model_path: String) -> Result<Self, ConfigError> {
        if input.as_os_str().is_empty() {
            return Err(ConfigError::EmptyInput);
        }
        if model_path.trim().is_empty() {
            return Err(ConfigError::EmptyModelPath);
        }
        Ok(Self {
            input,
            asr: AsrConfig { model_path },
        })
    }
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_string_with_default(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
    default: &str,
) -> String {
    match cli_value {
        Some(v) => v,
        None => env.var(env_key).unwrap_or_else(|| default.to_owned()),
    }
}
