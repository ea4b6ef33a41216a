use axum::extract::{
    Form, Path, Query,
    rejection::{FormRejection, PathRejection, QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::modules::forms::person::Person;
use crate::shared::core::errors::HttpError;
use crate::shared::render::EscapedJson;

#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub id: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Fields are declared in key order, so the echo serializes with sorted keys.
#[derive(Debug, Serialize)]
pub struct PostEcho {
    pub id: String,
    pub message: String,
    pub name: String,
    pub page: String,
}

/// `POST /post?id=1234&page=1` with form body `name=manu&message=this_is_great`.
///
/// Absent values read as empty, except `page` which defaults to `"0"`.
pub async fn post_form(
    query: Result<Query<PostQuery>, QueryRejection>,
    form: Result<Form<PostForm>, FormRejection>,
) -> EscapedJson<PostEcho> {
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "ignoring unreadable query");
        PostQuery::default()
    });
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "ignoring unreadable form");
        PostForm::default()
    });

    let echo = PostEcho {
        id: query.id.unwrap_or_default(),
        message: form.message.unwrap_or_default(),
        name: form.name.unwrap_or_default(),
        page: query.page.unwrap_or_else(|| "0".to_string()),
    };
    tracing::info!(
        "id: {}; page: {}; name: {}; message: {}",
        echo.id,
        echo.page,
        echo.name,
        echo.message
    );
    EscapedJson(echo)
}

/// Binds `Person` from the query string only; the body is never read.
pub async fn should_bind_query(
    query: Result<Query<Person>, QueryRejection>,
) -> Result<&'static str, HttpError> {
    let Query(person) = query.map_err(|rejection| HttpError::Binding(rejection.body_text()))?;
    let person = person
        .validate()
        .map_err(|e| HttpError::Binding(e.to_string()))?;

    tracing::info!(name = %person.name, address = %person.address, "bound query");
    Ok("Success")
}

pub async fn binding_url(
    path: Result<Path<Person>, PathRejection>,
) -> Result<EscapedJson<Person>, HttpError> {
    let Path(person) = path.map_err(|rejection| HttpError::Binding(rejection.body_text()))?;
    let person = person
        .validate()
        .map_err(|e| HttpError::Binding(e.to_string()))?;

    Ok(EscapedJson(person))
}

#[cfg(test)]
mod forms_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use rstest::rstest;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::tests::fixtures::state::body_string;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/post", post(post_form))
            .route("/ShouldBindQuery", get(should_bind_query))
            .route("/bindingurl/{name}/{address}", get(binding_url))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn it_should_read_query_and_form_values() {
        let response = app()
            .oneshot(
                Request::post("/post?id=1234&page=1")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=manu&message=this_is_great"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"id":"1234","message":"this_is_great","name":"manu","page":"1"}"#
        );
    }

    #[tokio::test]
    async fn it_should_default_page_and_tolerate_a_missing_form() {
        let response = app()
            .oneshot(Request::post("/post?id=7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "id": "7", "page": "0", "name": "", "message": "" })
        );
    }

    #[tokio::test]
    async fn it_should_bind_a_complete_query() {
        let response = app()
            .oneshot(
                Request::get("/ShouldBindQuery?name=appleboy&address=xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Success");
    }

    #[rstest]
    #[case::no_address("/ShouldBindQuery?name=appleboy", "Address")]
    #[case::no_name("/ShouldBindQuery?address=xyz", "Name")]
    #[case::empty_name("/ShouldBindQuery?name=&address=xyz", "Name")]
    #[tokio::test]
    async fn it_should_echo_query_binding_failures(#[case] uri: &str, #[case] field: &str) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let msg = json_body(response).await["msg"].as_str().unwrap().to_string();
        assert!(msg.contains(&format!("'Person.{field}'")), "{msg}");
    }

    #[tokio::test]
    async fn it_should_bind_path_segments() {
        let response = app()
            .oneshot(
                Request::get("/bindingurl/appleboy/xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"address":"xyz","name":"appleboy"}"#
        );
    }

    #[tokio::test]
    async fn it_should_reject_blank_path_segments() {
        let response = app()
            .oneshot(
                Request::get("/bindingurl/%20/xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["msg"].is_string());
    }
}
