use roster_states::State;
use serde::Deserialize;
use ustr::{Ustr, ustr};

use crate::ConfigError;

/// Public users endpoint used when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    users_url: Ustr,
}

/// Environment overrides, e.g. `ROSTER_USERS_URL=http://localhost:8080/users`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_users_url: Option<String>,
}

impl BusinessConfig {
    /// Points the users endpoint at `<base_url>/users`, for local or mock servers.
    pub fn new(base_url: &str) -> Self {
        Self {
            users_url: ustr(&format!("{}/users", base_url.trim_end_matches('/'))),
        }
    }

    /// Uses `url` as the users endpoint as-is.
    pub fn with_users_url(url: &str) -> Result<Self, ConfigError> {
        if url.trim().is_empty() {
            return Err(ConfigError::EmptyUsersUrl);
        }
        Ok(Self {
            users_url: ustr(url),
        })
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|e| ConfigError::Env(e.to_string()))?;

        match raw.roster_users_url {
            Some(url) => Self::with_users_url(&url),
            None => Ok(Self::default()),
        }
    }

    pub fn users_url(&self) -> Ustr {
        self.users_url
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            users_url: ustr(DEFAULT_USERS_URL),
        }
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_endpoint() {
        assert_eq!(
            BusinessConfig::default().users_url().as_str(),
            DEFAULT_USERS_URL
        );
    }

    #[test]
    fn base_url_gets_users_path() {
        let config = BusinessConfig::new("http://127.0.0.1:4000/");
        assert_eq!(config.users_url().as_str(), "http://127.0.0.1:4000/users");
    }

    #[test]
    fn env_override_replaces_endpoint() {
        let config =
            BusinessConfig::from_vars(vec![("ROSTER_USERS_URL", "http://localhost:9000/people")])
                .unwrap();
        assert_eq!(config.users_url().as_str(), "http://localhost:9000/people");
    }

    #[test]
    fn unrelated_env_keeps_default() {
        let config = BusinessConfig::from_vars(vec![("HOME", "/root"), ("PATH", "/usr/bin")])
            .unwrap();
        assert_eq!(config.users_url().as_str(), DEFAULT_USERS_URL);
    }

    #[test]
    fn empty_url_is_rejected() {
        let result = BusinessConfig::with_users_url("  ");
        assert!(matches!(result, Err(ConfigError::EmptyUsersUrl)));
    }
}
