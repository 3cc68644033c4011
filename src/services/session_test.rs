use super::*;

fn expect_valid(raw: &str) -> SessionRecord {
    match parse_session(raw).unwrap() {
        SessionStatus::Valid(record) => record,
        SessionStatus::Invalid => panic!("expected valid session for {raw}"),
    }
}

#[test]
fn complete_record_is_valid() {
    let record = expect_valid(r#"{"id":"u1","accessToken":"t1","email":"a@b.com"}"#);
    assert_eq!(record.id(), "u1");
    assert_eq!(serde_json::to_value(&record).unwrap()["accessToken"], "t1");
    assert_eq!(record.email(), "a@b.com");
}

#[test]
fn missing_id_is_invalid() {
    let status = parse_session(r#"{"accessToken":"t1","email":"a@b.com"}"#).unwrap();
    assert_eq!(status, SessionStatus::Invalid);
}

#[test]
fn missing_access_token_is_invalid() {
    let status = parse_session(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
    assert_eq!(status, SessionStatus::Invalid);
}

#[test]
fn falsy_credentials_are_invalid() {
    for raw in [
        r#"{"id":"","accessToken":"t1"}"#,
        r#"{"id":"u1","accessToken":""}"#,
        r#"{"id":null,"accessToken":"t1"}"#,
        r#"{"id":"u1","accessToken":false}"#,
        r#"{"id":0,"accessToken":"t1"}"#,
    ] {
        assert_eq!(parse_session(raw).unwrap(), SessionStatus::Invalid, "expected invalid for {raw}");
    }
}

#[test]
fn non_object_json_is_invalid() {
    for raw in ["[]", "\"u1\"", "42", "true"] {
        assert_eq!(parse_session(raw).unwrap(), SessionStatus::Invalid, "expected invalid for {raw}");
    }
}

#[test]
fn null_json_is_error_not_invalid() {
    let err = parse_session("null").unwrap_err();
    assert!(matches!(err, SessionError::Null));
}

#[test]
fn malformed_json_is_error() {
    let err = parse_session("{not json").unwrap_err();
    assert!(err.to_string().starts_with("session cookie is not valid JSON"));
}

#[test]
fn missing_email_defaults_to_empty() {
    let record = expect_valid(r#"{"id":"u1","accessToken":"t1"}"#);
    assert_eq!(record.email(), "");
}

#[test]
fn non_string_email_is_invalid() {
    let status = parse_session(r#"{"id":"u1","accessToken":"t1","email":5}"#).unwrap();
    assert_eq!(status, SessionStatus::Invalid);
}

#[test]
fn serialization_echoes_extra_fields() {
    let record = expect_valid(r#"{"id":"u1","accessToken":"t1","email":"a@b.com","name":"Ada","idToken":"x"}"#);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id":"u1","accessToken":"t1","email":"a@b.com","name":"Ada","idToken":"x"})
    );
}
