use crate::models::{build_board, find_board, ApiBoard, ApiCard, ApiList};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;
use trello_core::config::Credentials;
use trello_core::{TrelloError, TrelloResult};
use trello_domain::{Board, BoardFetcher};

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Fetches whole boards from the Trello REST API.
///
/// Each fetch resolves the board by name among the member's boards, then
/// loads its lists and cards. The configured timeout applies per request.
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
    span: tracing::Span,
}

impl TrelloClient {
    pub fn new(credentials: Credentials, timeout: Duration) -> TrelloResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| TrelloError::Internal(format!("could not build http client: {e}")))?;
        let span = tracing::info_span!("trello-client", user = %credentials.user);
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            timeout,
            span,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    fn member(&self) -> &str {
        if self.credentials.user.is_empty() {
            "me"
        } else {
            &self.credentials.user
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fields: &str) -> TrelloResult<T> {
        if self.credentials.key.is_empty() || self.credentials.token.is_empty() {
            return Err(TrelloError::Config(
                "missing trello key or token (set TRELLO_KEY and TRELLO_TOKEN)".into(),
            ));
        }

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.credentials.key.as_str()),
                ("token", self.credentials.token.as_str()),
                ("fields", fields),
            ])
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.request_error(e))?;
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TrelloError::Unauthorized);
        }
        if !status.is_success() {
            return Err(TrelloError::Api {
                status: status.as_u16(),
                message: text.trim().to_string(),
            });
        }

        serde_json::from_str(&text).map_err(|e| TrelloError::Serialization(e.to_string()))
    }

    fn request_error(&self, err: reqwest::Error) -> TrelloError {
        if err.is_timeout() {
            TrelloError::Timeout(self.timeout)
        } else {
            TrelloError::Connection(err.to_string())
        }
    }

    async fn fetch_board(&self, board_name: &str) -> TrelloResult<Board> {
        let boards: Vec<ApiBoard> = self
            .get_json(&format!("/members/{}/boards", self.member()), "id,name,desc")
            .await?;
        let board = find_board(boards, board_name)
            .ok_or_else(|| TrelloError::BoardNotFound(board_name.to_string()))?;

        let lists: Vec<ApiList> = self
            .get_json(&format!("/boards/{}/lists", board.id), "id,name")
            .await?;
        let cards: Vec<ApiCard> = self
            .get_json(
                &format!("/boards/{}/cards", board.id),
                "idShort,idList,name,desc,pos,labels",
            )
            .await?;

        tracing::debug!(
            "Fetched board {} with {} lists and {} cards",
            board.name,
            lists.len(),
            cards.len()
        );
        Ok(build_board(board, lists, cards))
    }
}

#[async_trait]
impl BoardFetcher for TrelloClient {
    async fn fetch(&self, board_name: &str) -> TrelloResult<Board> {
        self.fetch_board(board_name)
            .instrument(self.span.clone())
            .await
    }
}
