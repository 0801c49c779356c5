use thiserror::Error;

/// Why a users fetch ended in the error state.
///
/// The `Display` text is exactly what the error region shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The round trip did not complete; carries the transport's own message.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not a list of users.
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(String),
    #[error("users endpoint URL must not be empty")]
    EmptyUsersUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_embeds_code() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn transport_message_is_verbatim() {
        let err = FetchError::Transport("Failed to fetch".to_owned());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
