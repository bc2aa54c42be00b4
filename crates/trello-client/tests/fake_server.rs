use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use trello_core::config::Credentials;
use trello_core::TrelloError;
use trello_client::TrelloClient;
use trello_domain::BoardFetcher;

fn credentials() -> Credentials {
    Credentials {
        user: "alice".into(),
        key: "k".into(),
        token: "t".into(),
    }
}

async fn boards(
    Path(member): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if params.get("token").map(String::as_str) != Some("t") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    assert_eq!(member, "alice");
    Ok(Json(json!([
        {"id": "b1", "name": "Personal", "desc": ""},
        {"id": "b2", "name": "Roadmap", "desc": "Where we are going"}
    ])))
}

async fn lists(Path(board): Path<String>) -> Json<Value> {
    assert_eq!(board, "b2");
    Json(json!([{"id": "l1", "name": "Next"}, {"id": "l2", "name": "Later"}]))
}

async fn cards(Path(board): Path<String>) -> Json<Value> {
    assert_eq!(board, "b2");
    Json(json!([
        {"idShort": 3, "idList": "l1", "name": "Search", "pos": 2.0, "labels": []},
        {"idShort": 1, "idList": "l1", "name": "Login", "desc": "OAuth", "pos": 1.0,
         "labels": [{"name": "auth", "color": "green"}]}
    ]))
}

async fn slow_boards() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!([]))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/1")
}

fn trello_router() -> Router {
    Router::new()
        .route("/1/members/{member}/boards", get(boards))
        .route("/1/boards/{board}/lists", get(lists))
        .route("/1/boards/{board}/cards", get(cards))
}

#[tokio::test]
async fn test_fetch_board_by_name() {
    let base = serve(trello_router()).await;
    let client = TrelloClient::new(credentials(), Duration::from_secs(5))
        .unwrap()
        .with_base_url(base);

    let board = client.fetch("roadmap").await.unwrap();
    assert_eq!(board.name, "Roadmap");
    assert_eq!(board.description, "Where we are going");
    assert_eq!(board.lists_len(), 2);
    assert_eq!(board.lists[0].card_ids(), &[1, 3]);
    assert!(board.lists[1].is_empty());
    assert_eq!(board.card_by_id(1).unwrap().labels[0].color, "green");
}

#[tokio::test]
async fn test_unknown_board_is_board_not_found() {
    let base = serve(trello_router()).await;
    let client = TrelloClient::new(credentials(), Duration::from_secs(5))
        .unwrap()
        .with_base_url(base);

    let err = client.fetch("Work").await.unwrap_err();
    assert!(err.is_board_not_found(), "{err}");
}

#[tokio::test]
async fn test_bad_token_is_unauthorized() {
    let base = serve(trello_router()).await;
    let client = TrelloClient::new(
        Credentials {
            token: "wrong".into(),
            ..credentials()
        },
        Duration::from_secs(5),
    )
    .unwrap()
    .with_base_url(base);

    let err = client.fetch("Roadmap").await.unwrap_err();
    assert!(matches!(err, TrelloError::Unauthorized));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let base = serve(Router::new().route("/1/members/{member}/boards", get(slow_boards))).await;
    let client = TrelloClient::new(credentials(), Duration::from_millis(200))
        .unwrap()
        .with_base_url(base);

    let err = client.fetch("Roadmap").await.unwrap_err();
    assert!(err.is_timeout(), "{err}");
}

#[tokio::test]
async fn test_missing_credentials_fail_without_request() {
    let client = TrelloClient::new(Credentials::default(), Duration::from_secs(1))
        .unwrap()
        .with_base_url("http://127.0.0.1:9/1");
    let err = client.fetch("Roadmap").await.unwrap_err();
    assert!(matches!(err, TrelloError::Config(_)));
}
