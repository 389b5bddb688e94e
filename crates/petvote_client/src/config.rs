use thiserror::Error;
use url::Url;

/// Startup-time configuration problems, distinct from runtime
/// [`ApiFailure`](crate::ApiFailure)s: there is no point retrying until
/// the configuration changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL is not configured")]
    Missing,
    #[error("invalid API base URL `{url}`: {reason}")]
    Invalid { url: String, reason: String },
}

/// Validated backend location. Endpoints are resolved once here, so the
/// request path never has to re-derive or re-validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    vote_url: Url,
    results_url: Url,
}

impl ClientConfig {
    /// Parses and validates a base URL string.
    ///
    /// The path is normalized to end with `/` so that a base like
    /// `http://host/app` keeps its last segment when endpoints are joined.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing);
        }

        let mut base_url = Url::parse(trimmed).map_err(|err| ConfigError::Invalid {
            url: trimmed.to_string(),
            reason: err.to_string(),
        })?;
        match base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::Invalid {
                    url: trimmed.to_string(),
                    reason: format!("unsupported scheme `{other}`"),
                });
            }
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let vote_url = join(&base_url, "api/vote")?;
        let results_url = join(&base_url, "api/results")?;
        Ok(Self {
            base_url,
            vote_url,
            results_url,
        })
    }

    /// Reads the base URL from an environment variable. An unset or empty
    /// variable is `ConfigError::Missing`.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        match std::env::var(var) {
            Ok(value) => Self::new(&value),
            Err(_) => Err(ConfigError::Missing),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn vote_endpoint(&self) -> &Url {
        &self.vote_url
    }

    pub fn results_endpoint(&self) -> &Url {
        &self.results_url
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ConfigError> {
    base.join(path).map_err(|err| ConfigError::Invalid {
        url: base.to_string(),
        reason: err.to_string(),
    })
}
