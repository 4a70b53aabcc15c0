use actix_web::http::StatusCode;
use rstest::*;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::tests::{Error, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    id: String,
    name: String,
    email: String,
}

fn payload(email: &str) -> Value {
    json!({
        "name": "New Account",
        "email": email,
        "password": "stR0ngP4ssw0rd!",
        "passwordConfirmation": "stR0ngP4ssw0rd!",
    })
}

#[rstest]
#[actix_web::test]
async fn test_success_signup(context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(payload("new_account@email.com"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let acc: Account = test::read_body_json(res).await;

    assert!(!acc.id.is_empty());
    assert_eq!(acc.name, "New Account");
    assert_eq!(acc.email, "new_account@email.com");

    let accounts = context.repository.accounts.lock().await;
    let stored = accounts.last().unwrap();

    assert_eq!(stored.email, "new_account@email.com");
    assert_ne!(stored.password, "stR0ngP4ssw0rd!");
}

#[rstest]
#[actix_web::test]
async fn test_signup_twice(context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(payload("test_account@email.com"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(
        err,
        Error {
            code: 500,
            error: "ServerError".to_string(),
            message: "Internal server error".to_string(),
        }
    );
    assert_eq!(context.repository.accounts.lock().await.len(), 1);
}

#[rstest]
#[case::no_name(json!({ "email": "a@email.com" }), "MissingParamError", "Missing param: name")]
#[case::empty_body(json!({}), "MissingParamError", "Missing param: name")]
#[case::null_email(
    json!({ "name": "New Account", "email": null }),
    "MissingParamError",
    "Missing param: email"
)]
#[case::confirmation(
    json!({
        "name": "New Account",
        "email": "not-an-email",
        "password": "stR0ngP4ssw0rd!",
        "passwordConfirmation": "other"
    }),
    "InvalidParamError",
    "Invalid param: passwordConfirmation"
)]
#[case::email(payload("not-an-email"), "InvalidParamError", "Invalid param: email")]
#[actix_web::test]
async fn test_invalid_signup(
    context: TestContext,
    #[case] body: Value,
    #[case] error: &str,
    #[case] message: &str,
) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(body)
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 400);
    assert_eq!(err.error, error);
    assert_eq!(err.message, message);
    assert_eq!(context.repository.accounts.lock().await.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn test_malformed_body(context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ \"name\": ")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Value = test::read_body_json(res).await;
    assert_eq!(err["code"], 400);
}

#[rstest]
#[actix_web::test]
async fn test_request_id_header(context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(json!({}))
        .send_request(&app)
        .await;

    assert!(res.headers().contains_key("x-request-id"));
}
