use proptest::prelude::*;
use signup_form::{FieldName, FieldValues, requires_company_name, visible_fields};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // companyName is visible iff the account type is company
    #[test]
    fn company_name_visible_iff_company(
        account in proptest::option::of("personal|company|[a-z]{0,8}"),
        company in ".{0,8}",
    ) {
        let values = FieldValues {
            account_type: account.clone(),
            company_name: company,
            ..FieldValues::default()
        };
        let visible = visible_fields(&values);
        let is_company = account.as_deref() == Some("company");

        prop_assert_eq!(visible.contains(&FieldName::CompanyName), is_company);
        prop_assert_eq!(requires_company_name(&values), is_company);
        prop_assert_eq!(visible.len(), if is_company { 5 } else { 4 });
    }

    // Password fields have no influence on visibility
    #[test]
    fn visibility_ignores_passwords(
        account in proptest::option::of("personal|company"),
        password in ".{0,8}",
        confirm in ".{0,8}",
    ) {
        let base = FieldValues {
            account_type: account,
            ..FieldValues::default()
        };
        let with_passwords = FieldValues {
            password,
            password_confirm: confirm,
            ..base.clone()
        };
        prop_assert_eq!(visible_fields(&base), visible_fields(&with_passwords));
    }
}
