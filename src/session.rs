//! Form session: the mutable state behind one rendered form.
//!
//! The session owns the current snapshot, the current error map and the set
//! of touched fields. Each event runs to completion synchronously; the
//! engine and resolver it calls are pure.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::enums::{FieldName, ValidationMode};
use crate::types::{ErrorMap, FieldChange, FieldValues, ValidatedRecord};
use crate::validate::Validator;
use crate::visibility::{is_visible, visible_fields};

// ─── Submission collaborator ─────────────────────────────────────────────────

/// Receives the record produced by a successful submit.
///
/// What the receiver does with it (sending it somewhere, storing it) is
/// outside this crate.
pub trait Submitter {
    fn submit(&mut self, record: ValidatedRecord);
}

impl<F> Submitter for F
where
    F: FnMut(ValidatedRecord),
{
    fn submit(&mut self, record: ValidatedRecord) {
        self(record)
    }
}

/// Submitter that only logs the accepted record. The password is never
/// logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSubmitter;

impl Submitter for LoggingSubmitter {
    fn submit(&mut self, record: ValidatedRecord) {
        tracing::info!(
            email = %record.email_address,
            account_type = %record.account_type,
            company_name = record.company_name.as_deref().unwrap_or(""),
            "registration submitted"
        );
    }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Result of [`FormSession::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was handed to the submitter.
    Submitted,
    /// Validation failed; the submitter was not called.
    Rejected(ErrorMap),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Everything the presentation layer needs to render one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState<'a> {
    pub name: FieldName,
    pub value: Option<&'a str>,
    pub error: Option<&'a str>,
    pub touched: bool,
    pub dirty: bool,
    pub visible: bool,
}

pub struct FormSession<S = LoggingSubmitter> {
    validator: Arc<Validator>,
    submitter: S,
    values: FieldValues,
    errors: ErrorMap,
    touched: BTreeSet<FieldName>,
    submit_count: u32,
    submit_successful: bool,
}

impl FormSession<LoggingSubmitter> {
    /// A session with the default registration rules and a logging submitter.
    pub fn new() -> Self {
        Self::with_submitter(LoggingSubmitter)
    }
}

impl Default for FormSession<LoggingSubmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Submitter> FormSession<S> {
    pub fn with_submitter(submitter: S) -> Self {
        Self::with_validator(Arc::new(Validator::default()), submitter)
    }

    pub fn with_validator(validator: Arc<Validator>, submitter: S) -> Self {
        Self {
            validator,
            submitter,
            values: FieldValues::default(),
            errors: ErrorMap::new(),
            touched: BTreeSet::new(),
            submit_count: 0,
            submit_successful: false,
        }
    }

    /// Update one field, mark it touched and, depending on the validation
    /// mode, re-run full validation.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
        self.touched.insert(field);
        tracing::debug!(field = %field, "field changed");

        if self.validates_on_change() {
            self.revalidate();
        }
    }

    /// Apply a change event from the presentation layer.
    pub fn apply(&mut self, change: FieldChange) {
        self.set_field(change.field, change.value);
    }

    /// Validate the current snapshot. On success the record goes to the
    /// submitter; on failure the errors are stored and nothing is called.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        match self.validator.validate(&self.values) {
            Ok(record) => {
                self.errors = ErrorMap::new();
                self.submit_successful = true;
                tracing::debug!(submit_count = self.submit_count, "submit accepted");
                self.submitter.submit(record);
                SubmitOutcome::Submitted
            }
            Err(errors) => {
                tracing::debug!(
                    submit_count = self.submit_count,
                    error_count = errors.len(),
                    "submit rejected"
                );
                self.errors = errors.clone();
                self.submit_successful = false;
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Restore default values and clear errors, touched fields and submit
    /// bookkeeping.
    pub fn reset(&mut self) {
        self.values = FieldValues::default();
        self.errors = ErrorMap::new();
        self.touched.clear();
        self.submit_count = 0;
        self.submit_successful = false;
    }

    fn validates_on_change(&self) -> bool {
        match self.validator.config().mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.submit_count > 0,
        }
    }

    /// Replace the error map with the result of a fresh validation pass.
    fn revalidate(&mut self) {
        self.errors = match self.validator.validate(&self.values) {
            Ok(_) => ErrorMap::new(),
            Err(errors) => errors,
        };
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn visible_fields(&self) -> BTreeSet<FieldName> {
        visible_fields(&self.values)
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> &BTreeSet<FieldName> {
        &self.touched
    }

    /// Whether the field's value differs from its default.
    pub fn is_dirty(&self, field: FieldName) -> bool {
        self.values.get(field) != FieldValues::default().get(field)
    }

    pub fn is_form_dirty(&self) -> bool {
        self.values != FieldValues::default()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// True when the most recent submit was accepted.
    pub fn is_submit_successful(&self) -> bool {
        self.submit_successful
    }

    pub fn field_state(&self, field: FieldName) -> FieldState<'_> {
        FieldState {
            name: field,
            value: self.values.get(field),
            error: self.errors.get(field),
            touched: self.is_touched(field),
            dirty: self.is_dirty(field),
            visible: is_visible(&self.values, field),
        }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn into_submitter(self) -> S {
        self.submitter
    }
}
