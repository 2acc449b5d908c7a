use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::{DirectoryError, UserDirectory, UserRecord};

/// Single-object media type: the store answers exactly one row or a 406.
const ACCEPT_SINGLE: &str = "application/vnd.pgrst.object+json";

/// Client for a hosted directory speaking PostgREST-style filtered reads.
#[derive(Clone)]
pub struct HttpDirectory {
    base: Url,
    api_key: String,
    client: reqwest::Client,
}

impl HttpDirectory {
    pub fn new(base: &str, api_key: &str) -> anyhow::Result<Self> {
        let base = Url::parse(base)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base, api_key: api_key.to_string(), client })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_SINGLE));
        if !self.api_key.is_empty() {
            if let Ok(v) = HeaderValue::from_str(&self.api_key) {
                headers.insert("apikey", v);
            }
            if let Ok(v) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
                headers.insert(AUTHORIZATION, v);
            }
        }
        headers
    }
}

#[async_trait]
impl UserDirectory for HttpDirectory {
    async fn find_user(
        &self,
        field1: &str,
        field2: &str,
        role: u8,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let url = self
            .base
            .join("users")
            .map_err(|e| DirectoryError::Query(e.to_string()))?;
        let resp = self
            .client
            .get(url)
            .headers(self.headers())
            .query(&[
                ("select", "*".to_string()),
                ("field1", format!("eq.{field1}")),
                ("field2", format!("eq.{field2}")),
                ("role", format!("eq.{role}")),
            ])
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = resp.status();
        // A single-object read over zero (or several) rows is refused by the
        // store; both read as "no matching user" here.
        if status == StatusCode::NOT_ACCEPTABLE || status == StatusCode::NOT_FOUND {
            debug!("directory lookup: no row for role={role}");
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DirectoryError::Query(format!("HTTP {status}: {body}")));
        }
        let record: UserRecord = resp
            .json()
            .await
            .map_err(|e| DirectoryError::Query(format!("malformed directory row: {e}")))?;
        Ok(Some(record))
    }
}
