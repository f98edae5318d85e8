//! Validation engine.
//!
//! Runs the field catalog, then the cross-field rules, and folds every failure
//! into one [`ErrorMap`] (first message per path wins). When nothing failed
//! the snapshot is narrowed into a [`ValidatedRecord`]. Validation never
//! mutates its input and always returns a result for bad user input.

use std::sync::LazyLock;

use crate::catalog::Catalog;
use crate::config::FormConfig;
use crate::enums::{AccountType, FieldName};
use crate::error::{ConfigError, ConfigErrorKind, FieldError};
use crate::rules::RuleSet;
use crate::types::{Email, ErrorMap, FieldValues, ValidatedRecord};

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Validate a snapshot with the default registration catalog and rules.
pub fn validate(values: &FieldValues) -> Result<ValidatedRecord, ErrorMap> {
    DEFAULT_VALIDATOR.validate(values)
}

/// A configured catalog and rule set. Stateless once built, so one instance
/// can serve any number of sessions.
#[derive(Clone, Debug)]
pub struct Validator {
    config: FormConfig,
    catalog: Catalog,
    rules: RuleSet,
}

impl Default for Validator {
    fn default() -> Self {
        let config = FormConfig::default();
        Self {
            catalog: Catalog::registration(&config),
            rules: RuleSet::registration(&config.messages),
            config,
        }
    }
}

impl Validator {
    /// Build the registration catalog and rules from `config`.
    pub fn new(config: FormConfig) -> Result<Self, ConfigError> {
        let catalog = Catalog::registration(&config);
        let rules = RuleSet::registration(&config.messages);
        Self::with_parts(config, catalog, rules)
    }

    /// Assemble a validator from a custom catalog and rule set.
    ///
    /// The configuration must pass [`FormConfig::check`], the catalog must
    /// declare every form field with the configuration's messages, and each
    /// rule must blame a declared field.
    pub fn with_parts(
        config: FormConfig,
        catalog: Catalog,
        rules: RuleSet,
    ) -> Result<Self, ConfigError> {
        config.check()?;
        if catalog.messages() != &config.messages {
            return Err(ConfigError {
                kind: ConfigErrorKind::Invalid,
                message: "catalog messages differ from the configured messages".to_string(),
            });
        }
        if let Some(missing) = FieldName::ALL.into_iter().find(|f| !catalog.declares(*f)) {
            return Err(ConfigError {
                kind: ConfigErrorKind::Invalid,
                message: format!("catalog does not declare field '{}'", missing),
            });
        }
        rules.check_against(&catalog)?;
        Ok(Self {
            config,
            catalog,
            rules,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Every failure, in evaluation order: catalog checks first, then rules.
    pub fn check(&self, values: &FieldValues) -> Vec<FieldError> {
        let mut errors = self.catalog.base_validate(values);
        errors.extend(self.rules.cross_validate(values));
        errors
    }

    pub fn validate(&self, values: &FieldValues) -> Result<ValidatedRecord, ErrorMap> {
        let errors = ErrorMap::from_errors(self.check(values));
        if !errors.is_empty() {
            return Err(errors);
        }
        self.narrow(values)
    }

    /// Convert a snapshot that passed every check into the typed record.
    ///
    /// With the registration catalog this cannot fail. A custom catalog that
    /// drops the email or account-type constraint can still let through a
    /// value that does not narrow; that is reported like a catalog failure.
    fn narrow(&self, values: &FieldValues) -> Result<ValidatedRecord, ErrorMap> {
        let messages = &self.config.messages;
        let mut errors = ErrorMap::new();

        let email = Email::parse(&values.email_address);
        if email.is_none() {
            errors.insert_first(FieldName::EmailAddress, messages.invalid_email.clone());
        }

        let account_type = values.account_type();
        if account_type.is_none() {
            let message = match values.account_type.as_deref() {
                None => messages.required.clone(),
                Some(raw) => messages.invalid_account_type(raw),
            };
            errors.insert_first(FieldName::AccountType, message);
        }

        let (Some(email_address), Some(account_type)) = (email, account_type) else {
            return Err(errors);
        };

        let company_name = match account_type {
            AccountType::Company if !values.company_name.is_empty() => {
                Some(values.company_name.clone())
            }
            AccountType::Company => {
                errors.insert_first(
                    FieldName::CompanyName,
                    messages.company_name_required.clone(),
                );
                return Err(errors);
            }
            AccountType::Personal => None,
        };

        Ok(ValidatedRecord {
            email_address,
            account_type,
            company_name,
            password: values.password.clone(),
        })
    }
}
