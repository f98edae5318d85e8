//! Closed enumerations used throughout the form model.
//!
//! Field names and account types are closed sets. The snapshot still carries
//! the account type as raw text; [`AccountType::parse`] does the narrowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

/// Every field declared on the registration form, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    EmailAddress,
    AccountType,
    CompanyName,
    Password,
    PasswordConfirm,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::EmailAddress,
        FieldName::AccountType,
        FieldName::CompanyName,
        FieldName::Password,
        FieldName::PasswordConfirm,
    ];

    /// The path string used at the presentation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::EmailAddress => "emailAddress",
            FieldName::AccountType => "accountType",
            FieldName::CompanyName => "companyName",
            FieldName::Password => "password",
            FieldName::PasswordConfirm => "passwordConfirm",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ParseError {
                kind: ParseErrorKind::UnknownField,
                message: format!("unknown field: {}", s),
                path: Some(s.to_string()),
                line: None,
                column: None,
            })
    }
}

/// The kind of account being registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Personal,
    Company,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Personal, AccountType::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Personal => "personal",
            AccountType::Company => "company",
        }
    }

    /// Human-readable option label for the select widget.
    pub fn label(self) -> &'static str {
        match self {
            AccountType::Personal => "Personal",
            AccountType::Company => "Company",
        }
    }

    /// Exact, case-sensitive match against the option values.
    pub fn parse(raw: &str) -> Option<Self> {
        AccountType::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget hint for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Email,
    Select,
    Text,
    Password,
}

/// When a session re-validates on field changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Every change re-runs full validation.
    #[default]
    OnChange,
    /// Changes are not validated until the first submit; after that, every
    /// change re-runs full validation.
    OnSubmit,
}

/// Which stage of the engine produced a field error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Per-field constraint from the catalog.
    Format,
    /// Rule spanning several fields.
    CrossField,
}
