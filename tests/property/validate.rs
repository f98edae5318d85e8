use proptest::prelude::*;
use signup_form::{AccountType, FieldName, FieldValues, validate};

/// Strategy for well-formed email addresses.
fn arb_email() -> impl Strategy<Value = String> {
    ("[a-z0-9]{1,8}", "[a-z]{1,8}", prop_oneof![Just("com"), Just("org"), Just("io")])
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

fn arb_account_type() -> impl Strategy<Value = AccountType> {
    prop_oneof![Just(AccountType::Personal), Just(AccountType::Company)]
}

fn snapshot(
    email: &str,
    account_type: Option<AccountType>,
    company_name: &str,
    password: &str,
    password_confirm: &str,
) -> FieldValues {
    FieldValues {
        email_address: email.to_string(),
        account_type: account_type.map(|t| t.as_str().to_string()),
        company_name: company_name.to_string(),
        password: password.to_string(),
        password_confirm: password_confirm.to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Valid input → record equal to the normalized input
    #[test]
    fn valid_input_yields_normalized_record(
        email in arb_email(),
        account_type in arb_account_type(),
        company in "[A-Za-z ]{1,12}",
        password in "[a-zA-Z0-9]{3,16}",
    ) {
        let values = snapshot(&email, Some(account_type), &company, &password, &password);
        let record = validate(&values).expect("input should be valid");

        prop_assert_eq!(record.email_address.as_str(), email.as_str());
        prop_assert_eq!(record.account_type, account_type);
        prop_assert_eq!(record.password, password);
        match account_type {
            AccountType::Company => prop_assert_eq!(record.company_name, Some(company)),
            AccountType::Personal => prop_assert_eq!(record.company_name, None),
        }
    }

    // Mismatch always blames passwordConfirm, whatever else is wrong
    #[test]
    fn mismatch_blames_confirmation(
        email in ".{0,12}",
        account_type in proptest::option::of(arb_account_type()),
        company in "[a-z]{0,4}",
        password in "[a-z]{0,8}",
        confirm in "[a-z]{0,8}",
    ) {
        prop_assume!(password != confirm);
        let values = snapshot(&email, account_type, &company, &password, &confirm);
        let errors = validate(&values).expect_err("mismatch must fail");

        prop_assert_eq!(errors.get(FieldName::PasswordConfirm), Some("Passwords do not match"));
        if password.encode_utf16().count() >= 3 {
            prop_assert!(!errors.contains(FieldName::Password));
        }
    }

    // Company account without a company name always fails on companyName
    #[test]
    fn company_without_name_fails(
        email in ".{0,12}",
        password in "[a-z]{0,8}",
        confirm in "[a-z]{0,8}",
    ) {
        let values = snapshot(&email, Some(AccountType::Company), "", &password, &confirm);
        let errors = validate(&values).expect_err("missing company name must fail");
        prop_assert_eq!(errors.get(FieldName::CompanyName), Some("Company name required"));
    }

    // Personal accounts never require a company name
    #[test]
    fn personal_never_requires_company(
        email in ".{0,12}",
        company in ".{0,8}",
        password in "[a-z]{0,8}",
        confirm in "[a-z]{0,8}",
    ) {
        let values = snapshot(&email, Some(AccountType::Personal), &company, &password, &confirm);
        if let Err(errors) = validate(&values) {
            prop_assert!(!errors.contains(FieldName::CompanyName));
        }
    }

    // Same snapshot, same result
    #[test]
    fn validation_is_idempotent(
        email in ".{0,12}",
        account in proptest::option::of("personal|company|other"),
        company in ".{0,6}",
        password in ".{0,6}",
        confirm in ".{0,6}",
    ) {
        let values = FieldValues {
            email_address: email,
            account_type: account,
            company_name: company,
            password,
            password_confirm: confirm,
        };
        let before = values.clone();
        let first = validate(&values);
        let second = validate(&values);
        prop_assert_eq!(first, second);
        prop_assert_eq!(values, before);
    }
}
