use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;

const PAYLOAD_LIMIT: usize = 32768;

/// JSON body extractor whose failures render as [`AppError`] bodies.
///
/// Only deserialization happens here; business rules belong to the
/// controller's validator.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(PAYLOAD_LIMIT)
        .map(|res: Result<T, _>| res.map(Json).map_err(AppError::from))
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::{StatusCode, header::ContentType},
        test::{self, TestRequest},
        web,
    };
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct UserDTO {
        name: String,
        nickname: Option<String>,
    }

    #[derive(Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn index(data: Json<UserDTO>) -> impl Responder {
        HttpResponse::Ok().json(data.into_inner())
    }

    async fn send_req<T: DeserializeOwned>(data: &str) -> (StatusCode, T) {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload(data.to_string())
            .insert_header(ContentType::json())
            .send_request(&app)
            .await;

        let status = res.status();
        let body: T = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_data() {
        let data = UserDTO {
            name: "new_user".to_string(),
            nickname: None,
        };

        let (status, body) = send_req::<UserDTO>(&json!(data).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, data);
    }

    #[actix_web::test]
    async fn test_null_optional_field() {
        let (status, body) =
            send_req::<UserDTO>("{ \"name\": \"new_user\", \"nickname\": null }").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.nickname, None);
    }

    #[actix_web::test]
    async fn test_invalid_field_type() {
        let (status, err) = send_req::<Error>("{ \"name\": 50 }").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, 400);
        assert_eq!(
            err.message,
            "Json deserialize error: invalid type: integer `50`, expected a string at line 1 column 12"
        );
    }

    #[actix_web::test]
    async fn test_malformed_data() {
        let (status, err) = send_req::<Error>("{ \"name\": }").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Json deserialize error: expected value at line 1 column 11"
        );
    }

    #[actix_web::test]
    async fn test_empty_data() {
        let (status, err) = send_req::<Error>("").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Json deserialize error: EOF while parsing a value at line 1 column 0"
        );
    }

    #[actix_web::test]
    async fn test_wrong_content_type() {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload("{ \"name\": \"new_user\" }")
            .insert_header(ContentType::plaintext())
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
