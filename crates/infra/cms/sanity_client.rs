use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error};

/// Connection settings for the hosted Sanity dataset.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
    pub use_cdn: bool,
}

/// Minimal read-only Sanity client built on reqwest.
pub struct SanityClient {
    http: reqwest::Client,
    config: SanityConfig,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct SanityErrorEnvelope {
    error: SanityErrorDetails,
}

#[derive(Debug, Deserialize)]
struct SanityErrorDetails {
    description: Option<String>,
    #[serde(rename = "type")]
    type_: Option<String>,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn query_url(&self) -> String {
        // https://www.sanity.io/docs/http-query
        let host = if self.config.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };

        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.config.project_id,
            host,
            self.config.api_version.trim_start_matches('v'),
            self.config.dataset
        )
    }

    /// Query string pairs for a GROQ query. Parameters are sent as `$name`
    /// with JSON-encoded values.
    pub fn query_pairs<P: Serialize>(
        query: &str,
        params: &[(&str, P)],
    ) -> Result<Vec<(String, String)>> {
        let mut pairs = vec![("query".to_string(), query.to_string())];

        for (name, value) in params {
            let encoded = serde_json::to_string(value)
                .with_context(|| format!("failed to encode GROQ parameter {name}"))?;
            pairs.push((format!("${name}"), encoded));
        }

        Ok(pairs)
    }

    pub async fn fetch<T, P>(&self, query: &str, params: &[(&str, P)]) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let pairs = Self::query_pairs(query, params)?;

        let mut request = self.http.get(self.query_url()).query(&pairs);
        if let Some(token) = self.config.token.as_deref() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let resp = request.send().await.context("sanity query request failed")?;
        let resp = Self::ensure_success(resp, query).await?;

        let envelope: QueryEnvelope<T> = resp
            .json()
            .await
            .context("failed to decode sanity query result")?;

        debug!(dataset = %self.config.dataset, "sanity query succeeded");
        Ok(envelope.result)
    }

    pub async fn fetch_unparameterized<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        self.fetch::<T, &str>(query, &[]).await
    }

    async fn ensure_success(resp: reqwest::Response, query: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (error_type, description) = match serde_json::from_str::<SanityErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.type_, envelope.error.description),
            Err(_) => (None, None),
        };

        error!(
            status = %status,
            sanity_error_type = ?error_type,
            sanity_error_description = ?description,
            response_body = %body,
            query = %query,
            "sanity query failed"
        );

        anyhow::bail!("Sanity query failed (status {})", status);
    }
}
