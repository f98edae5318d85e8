//! Cross-field rule set.
//!
//! A rule is data: a predicate over the whole snapshot, the path that is
//! blamed when it fails, and the message to show. Rules run in order, none
//! short-circuits another, and every failure is reported.

use std::fmt;

use crate::catalog::Catalog;
use crate::config::Messages;
use crate::enums::{ErrorKind, FieldName};
use crate::error::{ConfigError, ConfigErrorKind, FieldError};
use crate::types::FieldValues;
use crate::visibility::requires_company_name;

/// Pure predicate over a snapshot. Returns `true` when the rule holds.
pub type Predicate = fn(&FieldValues) -> bool;

/// A declarative cross-field check.
#[derive(Clone)]
pub struct Rule {
    pub id: String,
    pub path: FieldName,
    pub message: String,
    pub predicate: Predicate,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        path: FieldName,
        message: impl Into<String>,
        predicate: Predicate,
    ) -> Self {
        Self {
            id: id.into(),
            path,
            message: message.into(),
            predicate,
        }
    }

    pub fn holds(&self, values: &FieldValues) -> bool {
        (self.predicate)(values)
    }

    /// Evaluate the rule, producing an error attached to `path` on failure.
    pub fn check(&self, values: &FieldValues) -> Option<FieldError> {
        (!self.holds(values)).then(|| FieldError {
            rule: self.id.clone(),
            kind: ErrorKind::CrossField,
            path: self.path,
            message: self.message.clone(),
        })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn passwords_match(values: &FieldValues) -> bool {
    values.password == values.password_confirm
}

fn company_name_present(values: &FieldValues) -> bool {
    !requires_company_name(values) || !values.company_name.is_empty()
}

/// Ordered list of cross-field rules.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registration form's rules: password confirmation, then the
    /// company name requirement.
    ///
    /// A mismatch is blamed on `passwordConfirm`, never on `password`.
    pub fn registration(messages: &Messages) -> Self {
        Self {
            rules: vec![
                Rule::new(
                    "passwords_match",
                    FieldName::PasswordConfirm,
                    messages.passwords_mismatch.clone(),
                    passwords_match,
                ),
                Rule::new(
                    "company_name_required",
                    FieldName::CompanyName,
                    messages.company_name_required.clone(),
                    company_name_present,
                ),
            ],
        }
    }

    /// Append a rule; it runs after every rule already in the set.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against the snapshot, in order.
    pub fn cross_validate(&self, values: &FieldValues) -> Vec<FieldError> {
        self.rules.iter().filter_map(|rule| rule.check(values)).collect()
    }

    /// Every rule must blame a field the catalog declares, and ids must be
    /// unique.
    pub fn check_against(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        for (i, rule) in self.rules.iter().enumerate() {
            if !catalog.declares(rule.path) {
                return Err(ConfigError {
                    kind: ConfigErrorKind::Invalid,
                    message: format!(
                        "rule '{}' attaches to undeclared field '{}'",
                        rule.id, rule.path
                    ),
                });
            }
            if self.rules[..i].iter().any(|other| other.id == rule.id) {
                return Err(ConfigError {
                    kind: ConfigErrorKind::Invalid,
                    message: format!("rule id '{}' is used more than once", rule.id),
                });
            }
        }
        Ok(())
    }
}
