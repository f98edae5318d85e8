//! Which fields the presentation layer should currently render.
//!
//! Visibility is derived from the snapshot on every call and never stored.
//! Hiding a field keeps its value in the snapshot and does not exempt it from
//! validation.

use std::collections::BTreeSet;

use crate::enums::{AccountType, FieldName};
use crate::types::FieldValues;

/// True when the snapshot's account type is `company`.
///
/// Both the visibility of `companyName` and the conditional company-name rule
/// branch on this predicate and nothing else. An unset or unknown account
/// type counts as "not company".
pub fn requires_company_name(values: &FieldValues) -> bool {
    values.account_type() == Some(AccountType::Company)
}

/// The set of fields to present for `values`, in declaration order.
pub fn visible_fields(values: &FieldValues) -> BTreeSet<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| is_visible(values, *field))
        .collect()
}

pub fn is_visible(values: &FieldValues, field: FieldName) -> bool {
    match field {
        FieldName::CompanyName => requires_company_name(values),
        _ => true,
    }
}
