//! Server configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use cradle_imagery::domain::pool::CandidatePool;
use cradle_llm_client::http_language_model::LanguageModelSettings;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind host (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// Language-model connection (`LLM_BASE_URL`, `LLM_API_KEY`, `LLM_MODEL`,
    /// `LLM_TIMEOUT_SECS`).
    pub language_model: LanguageModelSettings,
    /// YAML candidate pool (`IMAGE_POOL_PATH`); the built-in pool when unset.
    pub image_pool_path: Option<PathBuf>,
    /// OTLP collector endpoint (`OTEL_EXPORTER_OTLP_ENDPOINT`); export is
    /// disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "LLM_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            language_model: LanguageModelSettings {
                base_url: get("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_owned()),
                api_key: get("LLM_API_KEY"),
                model: get("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_owned()),
                timeout: Duration::from_secs(timeout_secs),
            },
            image_pool_path: get("IMAGE_POOL_PATH").map(PathBuf::from),
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a valid address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads and validates the candidate pool.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the pool file cannot be read or is not a
    /// valid pool.
    pub fn candidate_pool(&self) -> Result<CandidatePool, AppError> {
        let Some(path) = &self.image_pool_path else {
            return Ok(CandidatePool::builtin());
        };

        let yaml = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read IMAGE_POOL_PATH {}: {e}", path.display()))
        })?;
        CandidatePool::from_yaml_str(&yaml).map_err(|e| AppError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.language_model.base_url, "https://api.openai.com/v1");
        assert_eq!(config.language_model.api_key, None);
        assert_eq!(config.language_model.model, "gpt-4o-mini");
        assert_eq!(config.language_model.timeout, Duration::from_secs(30));
        assert_eq!(config.image_pool_path, None);
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8001"),
            ("LLM_BASE_URL", "http://localhost:11434/v1"),
            ("LLM_API_KEY", "secret"),
            ("LLM_MODEL", "llama3"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("IMAGE_POOL_PATH", "/etc/cradle/pool.yaml"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8001");
        assert_eq!(config.language_model.api_key.as_deref(), Some("secret"));
        assert_eq!(config.language_model.model, "llama3");
        assert_eq!(config.language_model.timeout, Duration::from_secs(5));
        assert_eq!(
            config.image_pool_path,
            Some(PathBuf::from("/etc/cradle/pool.yaml"))
        );
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config_from(&[("LLM_API_KEY", "  "), ("PORT", "")]).unwrap();

        assert_eq!(config.language_model.api_key, None);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = config_from(&[("PORT", "70000")]);

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("PORT")));
    }

    #[test]
    fn test_zero_timeout_is_config_error() {
        let result = config_from(&[("LLM_TIMEOUT_SECS", "0")]);

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("LLM_TIMEOUT_SECS")));
    }

    #[test]
    fn test_invalid_host_fails_bind_addr() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();

        assert!(matches!(config.bind_addr(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_candidate_pool_defaults_to_builtin() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.candidate_pool().unwrap(), CandidatePool::builtin());
    }

    #[test]
    fn test_candidate_pool_loads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default: [https://example.com/a.png]").unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let config = config_from(&[("IMAGE_POOL_PATH", path.as_str())]).unwrap();

        let pool = config.candidate_pool().unwrap();

        assert_eq!(
            pool.resolve(None).candidates,
            ["https://example.com/a.png".to_owned()].as_slice()
        );
    }

    #[test]
    fn test_candidate_pool_missing_file_is_config_error() {
        let config = config_from(&[("IMAGE_POOL_PATH", "/nonexistent/cradle/pool.yaml")]).unwrap();

        assert!(matches!(config.candidate_pool(), Err(AppError::Config(msg)) if msg.contains("IMAGE_POOL_PATH")));
    }

    #[test]
    fn test_candidate_pool_rejects_empty_bucket() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default: []").unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let config = config_from(&[("IMAGE_POOL_PATH", path.as_str())]).unwrap();

        assert!(matches!(config.candidate_pool(), Err(AppError::Config(_))));
    }
}
