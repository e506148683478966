//! Optional tokenizer sidecar hook.
//!
//! The section-slicing and pattern-matching paths work on raw text and do
//! not need tokens; this client survives as an enrichment hook for callers
//! that want model-grade tokenization. Without a configured sidecar (or on
//! any sidecar failure) it falls back to whitespace tokenization.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone)]
pub struct TokenizerClient {
    client: Client,
    base_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    tokens: Vec<String>,
}

impl TokenizerClient {
    pub fn new(base_url: Option<String>) -> Self {
        TokenizerClient {
            client: Client::new(),
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    pub fn available(&self) -> bool {
        self.base_url.is_some()
    }

    /// Tokenizes `text` via the sidecar, falling back to whitespace splitting.
    pub async fn tokenize(&self, text: &str) -> Vec<String> {
        if let Some(base_url) = &self.base_url {
            match self.remote_tokenize(base_url, text).await {
                Ok(tokens) => return tokens,
                Err(e) => debug!("tokenizer sidecar failed, using whitespace fallback: {e}"),
            }
        }
        text.split_whitespace().map(str::to_string).collect()
    }

    async fn remote_tokenize(&self, base_url: &str, text: &str) -> anyhow::Result<Vec<String>> {
        let response = self
            .client
            .post(format!("{base_url}/tokenize"))
            .json(&TokenizeRequest { text })
            .send()
            .await?
            .error_for_status()?;
        let body: TokenizeResponse = response.json().await?;
        Ok(body.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_whitespace_fallback_without_sidecar() {
        let client = TokenizerClient::new(None);
        assert!(!client.available());
        let tokens = client.tokenize("Python  and\nSQL").await;
        assert_eq!(tokens, vec!["Python", "and", "SQL"]);
    }

    #[tokio::test]
    async fn test_empty_text_tokenizes_to_nothing() {
        let client = TokenizerClient::new(None);
        assert!(client.tokenize("").await.is_empty());
    }
}
