use super::*;

#[test]
fn sign_in_response_decodes_server_payload() {
    let json = r#"{"token":"abc","user":{"id":"7f6c0f0e-0000-0000-0000-000000000000","username":"alice"}}"#;
    let resp: SignInResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.username, "alice");
}

#[test]
fn sign_in_request_encodes_username() {
    let body = serde_json::to_value(SignInRequest { username: "alice".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "alice" }));
}
