//! Environment-provided credentials for the outbound channels.
//!
//! Absence of a credential is a value, not a crash: configs read
//! whatever the environment has and the consuming client fails fast
//! with a configuration error the first time the credential is needed.

use crate::NotifyError;

/// Messaging channel credentials.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    /// Bot token addressing the messaging endpoint.
    pub bot_token: Option<String>,
    /// Destination chat/channel identifier.
    pub chat_id: Option<String>,
}

impl NotifyConfig {
    pub const BOT_TOKEN_VAR: &'static str = "TROVE_BOT_TOKEN";
    pub const CHAT_ID_VAR: &'static str = "TROVE_CHAT_ID";

    /// Explicit credentials, mainly for tests.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: Some(bot_token.into()),
            chat_id: Some(chat_id.into()),
        }
    }

    /// Read credentials from the environment. Empty values count as
    /// absent.
    pub fn from_env() -> Self {
        Self {
            bot_token: env_var(Self::BOT_TOKEN_VAR),
            chat_id: env_var(Self::CHAT_ID_VAR),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }

    /// Both credentials, or a configuration error naming the missing
    /// variable.
    pub fn credentials(&self) -> Result<(&str, &str), NotifyError> {
        let token = self
            .bot_token
            .as_deref()
            .ok_or_else(|| NotifyError::Config(format!("{} is not set", Self::BOT_TOKEN_VAR)))?;
        let chat_id = self
            .chat_id
            .as_deref()
            .ok_or_else(|| NotifyError::Config(format!("{} is not set", Self::CHAT_ID_VAR)))?;
        Ok((token, chat_id))
    }
}

/// Image hosting credential.
#[derive(Debug, Clone, Default)]
pub struct ImageHostConfig {
    /// API key for the image host.
    pub api_key: Option<String>,
}

impl ImageHostConfig {
    pub const API_KEY_VAR: &'static str = "TROVE_IMAGE_HOST_KEY";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            api_key: env_var(Self::API_KEY_VAR),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn key(&self) -> Result<&str, NotifyError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| NotifyError::Config(format!("{} is not set", Self::API_KEY_VAR)))
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
