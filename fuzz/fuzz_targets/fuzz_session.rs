#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use signup_form::{FieldName, FormSession};

#[derive(Debug, Arbitrary)]
enum Event {
    Change(u8, String),
    Submit,
    Reset,
}

fuzz_target!(|events: Vec<Event>| {
    let mut session = FormSession::new();
    for event in events {
        match event {
            Event::Change(i, value) => {
                let field = FieldName::ALL[usize::from(i) % FieldName::ALL.len()];
                session.set_field(field, value);
            }
            Event::Submit => {
                let _ = session.submit();
            }
            Event::Reset => {
                session.reset();
                assert!(session.errors().is_empty());
                continue;
            }
        }
        // Every change and submit leaves errors matching a fresh pass.
        let expected = signup_form::validate(session.values()).err().unwrap_or_default();
        assert_eq!(session.errors(), &expected);
    }
});
