//! Validation and conditional-field engine for an account registration form.
//!
//! The form collects an email address, an account type (`personal` or
//! `company`), a company name that is only shown and required for company
//! accounts, and a password with confirmation:
//!
//! ```text
//! FieldValues → catalog checks → cross-field rules → Ok(ValidatedRecord)
//!                                                  → Err(ErrorMap)
//! FieldValues → visible_fields → BTreeSet<FieldName>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use signup_form::{FieldName, FormSession};
//!
//! let mut session = FormSession::new();
//! session.set_field(FieldName::EmailAddress, "a@b.com");
//! session.set_field(FieldName::AccountType, "company");
//! assert!(session.visible_fields().contains(&FieldName::CompanyName));
//!
//! session.set_field(FieldName::Password, "abc");
//! session.set_field(FieldName::PasswordConfirm, "abc");
//! let outcome = session.submit();
//! assert!(!outcome.is_submitted());
//! assert_eq!(session.error(FieldName::CompanyName), Some("Company name required"));
//! ```

pub mod catalog;
pub mod config;
pub mod enums;
pub mod error;
pub mod parse;
pub mod rules;
pub mod serialize;
pub mod session;
pub mod types;
pub mod validate;
pub mod visibility;

pub use config::FormConfig;
pub use enums::*;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use session::{FormSession, LoggingSubmitter, SubmitOutcome, Submitter};
pub use validate::{Validator, validate};
pub use visibility::{requires_company_name, visible_fields};

/// Convenience entry point composing parse → validate.
///
/// # Errors
///
/// Returns [`FormError::Parse`] if the snapshot text cannot be read and
/// [`FormError::Invalid`] with every field error if validation fails.
///
/// # Example
///
/// ```rust
/// let input = r#"
/// emailAddress: a@b.com
/// accountType: personal
/// password: abc
/// passwordConfirm: abc
/// "#;
///
/// let record = signup_form::load(input).expect("valid snapshot");
/// assert_eq!(record.company_name, None);
/// ```
pub fn load(input: &str) -> Result<ValidatedRecord, FormError> {
    let values = parse::parse(input).map_err(FormError::Parse)?;
    validate::validate(&values).map_err(FormError::Invalid)
}
