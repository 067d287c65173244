//! Client for the enquiry backend.
//!
//! Two endpoints are used:
//!
//! - `POST /api/chat` with `{"question": ...}` returning a [`BotAnswer`]
//! - `GET /faqs.json` returning a list of [`FaqItem`]
//!
//! The HTTP status of `/api/chat` is not inspected. Application errors arrive
//! as `{"error": ...}` bodies (with a 400 for blank questions) and must reach
//! the transcript as "Error: ..." bubbles.

use crate::types::{BotAnswer, FaqItem};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, question: &str) -> ChatResult<BotAnswer>;

    async fn fetch_faqs(&self) -> ChatResult<Vec<FaqItem>>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

pub struct HttpAnswerClient {
    client: Client,
    chat_url: String,
    faqs_url: String,
}

impl HttpAnswerClient {
    pub fn new(api_base: &str) -> Self {
        let base = api_base.trim_end_matches('/');
        Self {
            client: Client::new(),
            chat_url: format!("{base}/api/chat"),
            faqs_url: format!("{base}/faqs.json"),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, question: &str) -> ChatResult<BotAnswer> {
        tracing::debug!(url = %self.chat_url, "posting question");
        let response = self
            .client
            .post(&self.chat_url)
            .json(&ChatRequest { question })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!(%status, "chat endpoint returned non-success status");
        }
        Ok(serde_json::from_str::<BotAnswer>(&body)?)
    }

    async fn fetch_faqs(&self) -> ChatResult<Vec<FaqItem>> {
        let body = self
            .client
            .get(&self.faqs_url)
            .send()
            .await?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
