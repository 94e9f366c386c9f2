//! Request/response contract tests.
//!
//! Everything here is Sans-IO: requests are built and responses decoded without
//! a network.

use proptest::prelude::*;
use tweetline_client::{ApiRequest, Endpoint, Method, decode_json, http_error};
use tweetline_core::ApiError;
use tweetline_proto::{Filter, LoginRequest, Post, PostId, RegisterRequest, Token};

fn all_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::ListAll,
        Endpoint::ListByUser("ana".into()),
        Endpoint::Create,
        Endpoint::Update(PostId(7)),
        Endpoint::Delete(PostId(7)),
        Endpoint::Like(PostId(7)),
        Endpoint::ListUsers,
        Endpoint::Login,
        Endpoint::Register,
    ]
}

#[test]
fn endpoint_routes() {
    let routes = all_endpoints()
        .iter()
        .map(|e| format!("{} {}", e.method(), e.path()))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(routes, @r"
    GET /tweet/all
    GET /tweet/ana
    POST /tweet/create
    PUT /tweet/7
    DELETE /tweet/7
    POST /tweet/7/like
    GET /users
    POST /auth/login
    POST /auth/register
    ");
}

#[test]
fn register_body_has_all_fields() {
    let request = ApiRequest::register(&RegisterRequest {
        username: "ana".into(),
        email: "ana@example.com".into(),
        password: "pw".into(),
    })
    .unwrap();

    assert_eq!(request.method(), Method::Post);
    insta::assert_json_snapshot!(request.body, @r#"
    {
      "email": "ana@example.com",
      "password": "pw",
      "username": "ana"
    }
    "#);
}

#[test]
fn missing_login_field_is_rejected_before_sending() {
    let err = ApiRequest::login(&LoginRequest { username: "ana".into(), password: String::new() })
        .unwrap_err();
    assert_eq!(err.to_string(), "Please enter username and password");
}

#[test]
fn field_errors_render_one_line_each() {
    let body = br#"{"detail":[
        {"loc":["body","email"],"msg":"field required"},
        {"loc":["body","tags",0],"msg":"not a string"}
    ]}"#;

    let err = http_error(422, body);
    assert_eq!(err.to_string(), "body.email: field required\nbody.tags.0: not a string");
}

#[test]
fn missing_likes_defaults_to_zero() {
    let posts: Vec<Post> = decode_json(200, br#"[{"id":3,"user":"ana","content":"hi"}]"#).unwrap();
    assert_eq!(posts[0].likes, 0);
}

#[test]
fn post_without_id_is_malformed() {
    let result = decode_json::<Vec<Post>>(200, br#"[{"user":"ana","content":"hi"}]"#);
    assert!(matches!(result, Err(ApiError::Malformed(_))));
}

fn endpoint_strategy() -> impl Strategy<Value = Endpoint> {
    (0..all_endpoints().len()).prop_map(|i| all_endpoints().swap_remove(i))
}

proptest! {
    #[test]
    fn token_attached_to_every_non_auth_request(endpoint in endpoint_strategy(), raw in "[a-z0-9]{1,16}") {
        let token = Token::new(raw);
        let request = ApiRequest { endpoint: endpoint.clone(), body: None, bearer: None }
            .with_token(Some(&token));

        let is_auth = matches!(endpoint, Endpoint::Login | Endpoint::Register);
        prop_assert_eq!(request.bearer.is_some(), !is_auth);
    }

    #[test]
    fn author_path_stays_one_segment(name in "\\PC{1,20}") {
        let request = ApiRequest::list(&Filter::Author(name));
        let path = request.path();
        let segment = path.strip_prefix("/tweet/").unwrap();
        prop_assert!(!segment.contains('/'));
        prop_assert!(!segment.contains('?'));
    }
}
