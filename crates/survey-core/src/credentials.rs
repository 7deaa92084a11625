//! API credentials read from the environment.

use crate::error::{ConfigError, ConfigResult};
use std::fmt;

/// Environment variable holding the SuperJob application key.
pub const SUPERJOB_TOKEN_VAR: &str = "SJ_TOKEN";

/// SuperJob application key sent as `X-Api-App-Id`.
///
/// The value is never printed by `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct SuperJobToken(String);

impl SuperJobToken {
    /// Wrap a token value.
    ///
    /// # Errors
    /// Returns error if the value is blank.
    pub fn new(token: impl Into<String>) -> ConfigResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: SUPERJOB_TOKEN_VAR.to_string(),
                reason: "token must not be blank".to_string(),
            });
        }
        Ok(Self(token))
    }

    /// Read the token from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the token through a variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(SUPERJOB_TOKEN_VAR).ok_or_else(|| ConfigError::MissingCredential {
            var: SUPERJOB_TOKEN_VAR.to_string(),
        })?;
        Self::new(token)
    }

    /// Get the raw token for the request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SuperJobToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SuperJobToken(***)")
    }
}
