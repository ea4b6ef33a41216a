use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    routing,
};
use rstest::rstest;
use tower::ServiceExt;

use crate::shared::auth::basic_auth::{AUTH_CHALLENGE, authorization_header};
use crate::shell::http::{router, with_middleware};
use crate::shell::logging::REQUEST_ID_HEADER;
use crate::tests::fixtures::state::{body_string, make_test_state};

async fn send(request: Request<Body>) -> axum::response::Response {
    router(make_test_state()).oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn answers_ping_through_the_full_middleware_stack() {
    let response = send(get("/ping")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert_eq!(body_string(response).await, r#"{"message":"pong"}"#);
}

#[tokio::test]
async fn answers_404_for_unknown_routes() {
    let response = send(get("/nowhere")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::get("/someGet", Method::GET)]
#[case::post("/somePost", Method::POST)]
#[case::put("/somePut", Method::PUT)]
#[case::delete("/someDelete", Method::DELETE)]
#[case::patch("/somePatch", Method::PATCH)]
#[case::head("/someHead", Method::HEAD)]
#[case::options("/someOptions", Method::OPTIONS)]
#[tokio::test]
async fn answers_each_method_probe(#[case] uri: &str, #[case] method: Method) {
    let response = send(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rejects_the_wrong_method_on_a_probe() {
    let response = send(
        Request::builder()
            .method(Method::DELETE)
            .uri("/somePut")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[case::get(Method::GET)]
#[case::post(Method::POST)]
#[tokio::test]
async fn lets_admin_accounts_through(#[case] method: Method) {
    let response = send(
        Request::builder()
            .method(method)
            .uri("/admin/authorized")
            .header(header::AUTHORIZATION, authorization_header("test2", "test22"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "BasicAuth.");
}

#[tokio::test]
async fn challenges_anonymous_admin_requests() {
    let response = send(get("/admin/authorized")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::WWW_AUTHENTICATE], AUTH_CHALLENGE);
}

#[tokio::test]
async fn leaves_public_routes_open_next_to_the_admin_group() {
    let response = send(get("/bindingurl/appleboy/xyz")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn redirects_internally_and_externally() {
    let external = send(get("/redirect")).await;
    assert_eq!(external.status(), StatusCode::MOVED_PERMANENTLY);

    let internal = send(get("/redirect2")).await;
    assert_eq!(internal.status(), StatusCode::OK);
    assert_eq!(body_string(internal).await, r#"{"message":"pong"}"#);
}

#[tokio::test]
async fn enforces_the_upload_body_limit() {
    let mut state = make_test_state();
    let mut config = (*state.config).clone();
    config.upload_limit_bytes = 16;
    state.config = std::sync::Arc::new(config);

    let body = format!(
        "--B\r\nContent-Disposition: form-data; name=\"file\"; filename=\"big.txt\"\r\n\r\n{}\r\n--B--\r\n",
        "x".repeat(1024)
    );
    let response = router(state)
        .oneshot(
            Request::post("/upload")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=B")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

async fn explode() -> &'static str {
    panic!("handler blew up")
}

#[tokio::test]
async fn turns_a_handler_panic_into_a_logged_500() {
    let app = with_middleware(Router::new().route("/boom", routing::get(explode)));

    let response = app.oneshot(get("/boom")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}
