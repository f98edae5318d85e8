use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::is_valid_email;
use crate::enums::{AccountType, FieldName};
use crate::error::FieldError;

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// The complete set of raw field values at a point in time.
///
/// Every field is text at this boundary. The account type stays raw until the
/// engine narrows it, so a value outside the closed set can still be reported
/// against `accountType`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    #[serde(default)]
    pub email_address: String,
    /// `""` deserializes as unset.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_type: Option<String>,
    /// Absent and empty are equivalent.
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirm: String,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly useful for assembling fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value of a field. `None` only for an unset account type.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::EmailAddress => Some(&self.email_address),
            FieldName::AccountType => self.account_type.as_deref(),
            FieldName::CompanyName => Some(&self.company_name),
            FieldName::Password => Some(&self.password),
            FieldName::PasswordConfirm => Some(&self.password_confirm),
        }
    }

    /// Store a raw value. An empty account type means "unset".
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::EmailAddress => self.email_address = value,
            FieldName::AccountType => {
                self.account_type = if value.is_empty() { None } else { Some(value) };
            }
            FieldName::CompanyName => self.company_name = value,
            FieldName::Password => self.password = value,
            FieldName::PasswordConfirm => self.password_confirm = value,
        }
    }

    /// The account type narrowed to the closed enum, if it is set and valid.
    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type.as_deref().and_then(AccountType::parse)
    }
}

// ─── Email ───────────────────────────────────────────────────────────────────

/// An email address that passed the catalog's format check.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Option<Self> {
        is_valid_email(raw).then(|| Email(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Email::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid email address: '{}'", raw)))
    }
}

// ─── Validated record ────────────────────────────────────────────────────────

/// The typed output of a successful validation pass.
///
/// `company_name` is `Some` (and non-empty) exactly when the account type is
/// [`AccountType::Company`].
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRecord {
    pub email_address: Email,
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub password: String,
}

impl fmt::Debug for ValidatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRecord")
            .field("email_address", &self.email_address)
            .field("account_type", &self.account_type)
            .field("company_name", &self.company_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ─── Error map ───────────────────────────────────────────────────────────────

/// Field path → message, at most one message per path.
///
/// Iteration follows field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse an ordered error list; the first error for a path wins.
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = FieldError>,
    {
        let mut map = ErrorMap::new();
        for error in errors {
            map.insert_first(error.path, error.message);
        }
        map
    }

    /// Insert unless the path already carries a message. Returns whether the
    /// message was stored.
    pub fn insert_first(&mut self, path: FieldName, message: impl Into<String>) -> bool {
        if self.0.contains_key(&path) {
            return false;
        }
        self.0.insert(path, message.into());
        true
    }

    pub fn get(&self, path: FieldName) -> Option<&str> {
        self.0.get(&path).map(String::as_str)
    }

    pub fn contains(&self, path: FieldName) -> bool {
        self.0.contains_key(&path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(path, message)| (*path, message.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

// ─── Boundary events ─────────────────────────────────────────────────────────

/// A change notification from a presentation widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: FieldName,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: FieldName, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
