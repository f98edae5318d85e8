//! Engine configuration: validation mode, constraint parameters and the
//! user-facing message for every built-in check.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::enums::ValidationMode;
use crate::error::{ConfigError, ConfigErrorKind};

/// Minimum password length when none is configured.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 3;

/// Configuration for a [`Validator`](crate::validate::Validator) and the
/// sessions built on top of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub mode: ValidationMode,
    /// Counted in UTF-16 code units, so a character outside the Basic
    /// Multilingual Plane counts twice.
    pub password_min_length: usize,
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            messages: Messages::default(),
        }
    }
}

/// Messages emitted by the built-in checks.
///
/// `{min}` in `password_too_short` and `{received}` in `invalid_account_type`
/// are substituted at validation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
    pub invalid_email: String,
    pub required: String,
    pub invalid_account_type: String,
    pub password_too_short: String,
    pub passwords_mismatch: String,
    pub company_name_required: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_email: "Invalid email".to_string(),
            required: "Required".to_string(),
            invalid_account_type:
                "Invalid enum value. Expected 'personal' | 'company', received '{received}'"
                    .to_string(),
            password_too_short: "String must contain at least {min} character(s)".to_string(),
            passwords_mismatch: "Passwords do not match".to_string(),
            company_name_required: "Company name required".to_string(),
        }
    }
}

impl Messages {
    pub(crate) fn password_too_short(&self, min: usize) -> String {
        self.password_too_short.replace("{min}", &min.to_string())
    }

    pub(crate) fn invalid_account_type(&self, received: &str) -> String {
        self.invalid_account_type.replace("{received}", received)
    }

    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("invalid_email", &self.invalid_email),
            ("required", &self.required),
            ("invalid_account_type", &self.invalid_account_type),
            ("password_too_short", &self.password_too_short),
            ("passwords_mismatch", &self.passwords_mismatch),
            ("company_name_required", &self.company_name_required),
        ]
    }
}

impl FormConfig {
    /// Parse a YAML configuration document. Omitted keys take their defaults.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: FormConfig = serde_saphyr::from_str(input).map_err(|e| ConfigError {
            kind: ConfigErrorKind::Syntax,
            message: format!("invalid form configuration: {}", e),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            kind: ConfigErrorKind::Io,
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml(&content)
    }

    /// Reject configurations that would produce an unusable engine.
    pub fn check(&self) -> Result<(), ConfigError> {
        for (key, message) in self.messages.entries() {
            if message.trim().is_empty() {
                return Err(ConfigError {
                    kind: ConfigErrorKind::Invalid,
                    message: format!("messages.{} must not be empty", key),
                });
            }
        }
        Ok(())
    }
}
