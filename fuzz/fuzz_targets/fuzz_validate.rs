#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use signup_form::{FieldName, FieldValues, visible_fields};

#[derive(Debug, Arbitrary)]
struct Input {
    email_address: String,
    account_type: Option<String>,
    company_name: String,
    password: String,
    password_confirm: String,
}

fuzz_target!(|input: Input| {
    let values = FieldValues {
        email_address: input.email_address,
        account_type: input.account_type,
        company_name: input.company_name,
        password: input.password,
        password_confirm: input.password_confirm,
    };

    let result = signup_form::validate(&values);
    assert_eq!(result, signup_form::validate(&values));

    let company_visible = visible_fields(&values).contains(&FieldName::CompanyName);
    match result {
        Ok(record) => assert_eq!(record.company_name.is_some(), company_visible),
        Err(errors) => {
            if values.password != values.password_confirm {
                assert!(errors.contains(FieldName::PasswordConfirm));
            }
        }
    }
});
