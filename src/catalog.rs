//! Field catalog: the static declaration of every form field and its
//! per-field constraint.
//!
//! Base checks are independent of one another. All of them run and every
//! failure is reported, so the presentation layer can show an error on each
//! offending field at once.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::{FormConfig, Messages};
use crate::enums::{AccountType, ErrorKind, FieldName, InputKind};
use crate::error::{ConfigError, ConfigErrorKind, FieldError};
use crate::types::FieldValues;

// ─── Email format ────────────────────────────────────────────────────────────

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// Whether `raw` is a well-formed email address.
///
/// Letters are ASCII only and matched without case folding, so look-alikes
/// such as `ſ` or the Kelvin sign never pass.
///
/// The local part must not start with a dot and no two dots may be adjacent
/// anywhere in the address; the regex crate has no lookaround, so those two
/// conditions are checked outside the pattern.
pub fn is_valid_email(raw: &str) -> bool {
    !raw.starts_with('.') && !raw.contains("..") && EMAIL_RE.is_match(raw)
}

// ─── Declarations ────────────────────────────────────────────────────────────

/// One entry of a select widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Per-field base constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Constraint {
    /// Any string is accepted.
    None,
    EmailFormat,
    /// Value must be set and equal to one of the options.
    OneOf { options: Vec<SelectOption> },
    /// At least `min` UTF-16 code units.
    MinLength { min: usize },
}

/// Declaration of a single form field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    /// Optional fields skip their constraint when empty.
    pub optional: bool,
    pub constraint: Constraint,
}

/// The ordered set of field declarations plus the messages their checks emit.
#[derive(Clone, Debug)]
pub struct Catalog {
    fields: Vec<FieldSpec>,
    messages: Messages,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::registration(&FormConfig::default())
    }
}

impl Catalog {
    /// The registration form's fields, parameterised by `config`.
    pub fn registration(config: &FormConfig) -> Self {
        let account_options = AccountType::ALL
            .into_iter()
            .map(|t| SelectOption {
                value: t.as_str(),
                label: t.label(),
            })
            .collect();

        let fields = vec![
            FieldSpec {
                name: FieldName::EmailAddress,
                label: "Email address",
                placeholder: "Email address",
                kind: InputKind::Email,
                optional: false,
                constraint: Constraint::EmailFormat,
            },
            FieldSpec {
                name: FieldName::AccountType,
                label: "Account Type",
                placeholder: "Select an account type",
                kind: InputKind::Select,
                optional: false,
                constraint: Constraint::OneOf {
                    options: account_options,
                },
            },
            FieldSpec {
                name: FieldName::CompanyName,
                label: "Company Name",
                placeholder: "Company Name",
                kind: InputKind::Text,
                optional: true,
                constraint: Constraint::None,
            },
            FieldSpec {
                name: FieldName::Password,
                label: "Password",
                placeholder: "Password",
                kind: InputKind::Password,
                optional: false,
                constraint: Constraint::MinLength {
                    min: config.password_min_length,
                },
            },
            FieldSpec {
                name: FieldName::PasswordConfirm,
                label: "Password Confirm",
                placeholder: "Password Confirm",
                kind: InputKind::Password,
                optional: false,
                constraint: Constraint::None,
            },
        ];

        Self {
            fields,
            messages: config.messages.clone(),
        }
    }

    /// Build a catalog from explicit declarations.
    ///
    /// Fails if a field is declared twice.
    pub fn from_fields(fields: Vec<FieldSpec>, messages: Messages) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for spec in &fields {
            if !seen.insert(spec.name) {
                return Err(ConfigError {
                    kind: ConfigErrorKind::Invalid,
                    message: format!("field '{}' is declared more than once", spec.name),
                });
            }
        }
        Ok(Self { fields, messages })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Messages the catalog checks emit.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn declares(&self, name: FieldName) -> bool {
        self.field(name).is_some()
    }

    /// Run every field's base constraint against the snapshot.
    pub fn base_validate(&self, values: &FieldValues) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for spec in &self.fields {
            if let Some(error) = self.check_field(spec, values.get(spec.name)) {
                errors.push(error);
            }
        }
        errors
    }

    fn check_field(&self, spec: &FieldSpec, raw: Option<&str>) -> Option<FieldError> {
        if spec.optional && raw.is_none_or(str::is_empty) {
            return None;
        }

        let failure = |rule: &str, message: String| FieldError {
            rule: rule.to_string(),
            kind: ErrorKind::Format,
            path: spec.name,
            message,
        };

        match &spec.constraint {
            Constraint::None => None,
            Constraint::EmailFormat => {
                let raw = raw.unwrap_or_default();
                (!is_valid_email(raw))
                    .then(|| failure("email_format", self.messages.invalid_email.clone()))
            }
            Constraint::OneOf { options } => match raw {
                None => Some(failure("one_of", self.messages.required.clone())),
                Some(value) if options.iter().any(|o| o.value == value) => None,
                Some(value) => Some(failure(
                    "one_of",
                    self.messages.invalid_account_type(value),
                )),
            },
            Constraint::MinLength { min } => {
                let len = raw.unwrap_or_default().encode_utf16().count();
                (len < *min).then(|| failure("min_length", self.messages.password_too_short(*min)))
            }
        }
    }
}
