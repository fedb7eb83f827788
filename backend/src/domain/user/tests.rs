//! Tests for the user record: validity rule and JSON mapping.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn ada() -> User {
    User::new(7, "Ada Lovelace", "ada@example.com", 36)
}

#[rstest]
fn well_formed_record_is_valid(ada: User) {
    assert!(ada.is_valid());
}

#[rstest]
#[case::empty_name(User::new(1, "", "a@b.com", 30))]
#[case::empty_email(User::new(1, "A", "", 30))]
#[case::email_without_at(User::new(1, "A", "ab.com", 30))]
#[case::zero_age(User::new(1, "A", "a@b.com", 0))]
#[case::negative_age(User::new(1, "A", "a@b.com", -4))]
fn invalid_records_are_rejected(#[case] user: User) {
    assert!(!user.is_valid(), "{user:?} should be invalid");
}

#[rstest]
fn json_round_trip_preserves_record(ada: User) {
    let decoded = User::from_value(ada.to_json()).expect("round trip");
    assert_eq!(decoded, ada);
}

#[rstest]
fn to_json_uses_plain_field_names(ada: User) {
    assert_eq!(
        ada.to_json(),
        json!({"id": 7, "name": "Ada Lovelace", "email": "ada@example.com", "age": 36})
    );
}

#[rstest]
fn missing_id_defaults_to_zero() {
    let user = User::from_json(br#"{"name":"A","email":"a@b.com","age":30}"#).expect("decodes");
    assert_eq!(user.id(), 0);
    assert_eq!(user.name(), "A");
    assert_eq!(user.email(), "a@b.com");
    assert_eq!(user.age(), 30);
}

#[rstest]
fn unknown_fields_are_ignored() {
    let user = User::from_json(br#"{"name":"A","email":"a@b.com","age":30,"role":"admin"}"#)
        .expect("decodes");
    assert_eq!(user.age(), 30);
}

#[rstest]
#[case::not_json(&b"{not json"[..])]
#[case::empty_body(&b""[..])]
#[case::array(&br#"[1, 2]"#[..])]
#[case::missing_name(&br#"{"email":"a@b.com","age":30}"#[..])]
#[case::missing_email(&br#"{"name":"A","age":30}"#[..])]
#[case::missing_age(&br#"{"name":"A","email":"a@b.com"}"#[..])]
#[case::age_as_string(&br#"{"name":"A","email":"a@b.com","age":"30"}"#[..])]
#[case::name_as_number(&br#"{"name":5,"email":"a@b.com","age":30}"#[..])]
fn malformed_payloads_fail_to_decode(#[case] body: &[u8]) {
    let result = User::from_json(body);
    assert!(
        matches!(result, Err(UserDecodeError::Malformed(_))),
        "expected malformed error, got {result:?}"
    );
}

#[rstest]
fn decoding_keeps_semantically_invalid_values() {
    let user = User::from_json(br#"{"name":"","email":"a@b.com","age":5}"#).expect("decodes");
    assert!(!user.is_valid());
}

#[rstest]
fn overwrite_fields_keeps_identifier(mut ada: User) {
    let replacement = User::new(99, "Grace", "grace@example.com", 45);
    ada.overwrite_fields(&replacement);
    assert_eq!(ada, User::new(7, "Grace", "grace@example.com", 45));
}
